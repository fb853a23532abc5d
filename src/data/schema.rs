//! Column names of the shopping-trends dataset.

pub const GENDER: &str = "Gender";
pub const CATEGORY: &str = "Category";
pub const AGE: &str = "Age";
pub const SHIPPING_TYPE: &str = "Shipping Type";
pub const DISCOUNT_APPLIED: &str = "Discount Applied";
pub const SEASON: &str = "Season";
pub const REVIEW_RATING: &str = "Review Rating";
pub const PAYMENT_METHOD: &str = "Payment Method";
pub const PURCHASE_AMOUNT: &str = "Purchase Amount (USD)";
pub const FREQUENCY_OF_PURCHASES: &str = "Frequency of Purchases";

/// Columns every source must provide.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    GENDER,
    CATEGORY,
    AGE,
    SHIPPING_TYPE,
    DISCOUNT_APPLIED,
    SEASON,
    REVIEW_RATING,
    PAYMENT_METHOD,
    PURCHASE_AMOUNT,
    FREQUENCY_OF_PURCHASES,
];

/// Attributes the user can constrain, in sidebar order.
pub const FILTER_ATTRIBUTES: [&str; 8] = [
    GENDER,
    CATEGORY,
    AGE,
    SHIPPING_TYPE,
    DISCOUNT_APPLIED,
    SEASON,
    REVIEW_RATING,
    PAYMENT_METHOD,
];
