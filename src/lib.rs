//! trendlens – the data layer of a retail purchase-trends dashboard.
//!
//! Loads a static table of purchase records, applies a user's per-attribute
//! filter selection, and derives the fixed set of aggregate views the
//! dashboard charts. Widget rendering and chart drawing live in external
//! collaborators; this crate hands them data plus chart-kind and axis-binding
//! metadata.
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use trendlens::data::schema;
//! use trendlens::{AttrValue, Session};
//!
//! # fn main() -> anyhow::Result<()> {
//! let dataset = Arc::new(trendlens::load_file(Path::new("shopping_trends.csv"))?);
//! let mut session = Session::new(dataset);
//! session.select(schema::GENDER, AttrValue::String("Female".into()));
//! for (kind, output) in session.views() {
//!     println!("{kind:?}: {output:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod data;
pub mod error;
pub mod session;
pub mod views;

pub use chart::{ChartKind, ChartSpec};
pub use data::filter::FilterSelection;
pub use data::loader::load_file;
pub use data::model::{AttrValue, PurchaseDataset, Record};
pub use error::LoadError;
pub use session::Session;
pub use views::{AggregateView, ViewKind, ViewOutput};
