//! Price and stock generators.

use rand::Rng;

pub const MIN_PRICE: f64 = 9.99;
pub const MAX_PRICE: f64 = 999.99;
pub const MAX_STOCK: u32 = 1000;

/// Generate a random price in `[MIN_PRICE, MAX_PRICE]`, rounded to cents.
pub fn generate_price<R: Rng>(rng: &mut R) -> f64 {
    let value = rng.random_range(MIN_PRICE..=MAX_PRICE);
    (value * 100.0).round() / 100.0
}

/// Generate a random stock level in `[0, MAX_STOCK]`.
pub fn generate_stock<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(0..=MAX_STOCK)
}
