//! Individual value generators.
//!
//! Every generator takes the random source explicitly, so the same code
//! serves a seeded [`CatalogGenerator`](crate::CatalogGenerator) and the
//! unit tests below each module.

pub mod description;
pub mod distribution;
pub mod names;
pub mod numeric;
pub mod timestamp;

pub use description::generate_description;
pub use distribution::distribute;
pub use names::{generate_category_name, generate_item_name};
pub use numeric::{generate_price, generate_stock, MAX_PRICE, MAX_STOCK, MIN_PRICE};
pub use timestamp::{format_timestamp, generate_recent_timestamp, TIMESTAMP_FORMAT};
