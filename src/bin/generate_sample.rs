use std::path::Path;

use anyhow::{Context, Result};

use trendlens::data::schema;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const GENDERS: [&str; 2] = ["Male", "Female"];
const CATEGORIES: [&str; 4] = ["Clothing", "Footwear", "Outerwear", "Accessories"];
const SHIPPING_TYPES: [&str; 6] = [
    "Express",
    "Free Shipping",
    "Next Day Air",
    "Standard",
    "2-Day Shipping",
    "Store Pickup",
];
const SEASONS: [&str; 4] = ["Spring", "Summer", "Fall", "Winter"];
const PAYMENT_METHODS: [&str; 6] = [
    "Credit Card",
    "PayPal",
    "Cash",
    "Debit Card",
    "Venmo",
    "Bank Transfer",
];
const FREQUENCIES: [&str; 7] = [
    "Weekly",
    "Fortnightly",
    "Monthly",
    "Quarterly",
    "Annually",
    "Bi-Weekly",
    "Every 3 Months",
];

const ROWS: usize = 1000;

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);

    let output_path = "shopping_trends_sample.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record(schema::REQUIRED_COLUMNS)?;

    for row in 0..ROWS {
        let age = 18 + (rng.next_u64() % 53) as i64;
        let rating = ((2.5 + rng.next_f64() * 2.5) * 10.0).round() / 10.0;
        let amount = rng.gauss(60.0, 25.0).max(5.0);

        let age_cell = age.to_string();
        let rating_cell = rating.to_string();
        // A sprinkle of blank amounts to exercise the missing-value path.
        let amount_cell = if row % 40 == 39 {
            String::new()
        } else {
            format!("{amount:.2}")
        };

        writer.write_record([
            rng.pick(&GENDERS),
            rng.pick(&CATEGORIES),
            age_cell.as_str(),
            rng.pick(&SHIPPING_TYPES),
            if rng.next_f64() < 0.43 { "Yes" } else { "No" },
            rng.pick(&SEASONS),
            rating_cell.as_str(),
            rng.pick(&PAYMENT_METHODS),
            amount_cell.as_str(),
            rng.pick(&FREQUENCIES),
        ])?;
    }
    writer.flush()?;

    // Round-trip through the loader so the generated file is known-good.
    let dataset = trendlens::load_file(Path::new(output_path))?;
    println!("Wrote {} purchase records to {output_path}", dataset.len());

    Ok(())
}
