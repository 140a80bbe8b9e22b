//! Category and item name synthesis.
//!
//! Names are assembled from the word lists in [`crate::vocabulary`].
//! Nothing here guarantees uniqueness.

use crate::vocabulary::{pick, ADJECTIVES, CATEGORY_TYPES, COLORS, MATERIALS, PRODUCTS};
use rand::Rng;

/// Generate a category name for `index`.
///
/// The category type is `CATEGORY_TYPES[index % 20]`, and `index % 3`
/// selects the template:
///
/// - `0` - `"{type} - {adjective}"`
/// - `1` - `"{adjective} {type}"`
/// - `2` - `"{type}"` (consumes no randomness)
pub fn generate_category_name<R: Rng>(rng: &mut R, index: u64) -> String {
    let category_type = CATEGORY_TYPES[(index % CATEGORY_TYPES.len() as u64) as usize];

    match index % 3 {
        0 => format!("{category_type} - {}", pick(rng, ADJECTIVES)),
        1 => format!("{} {category_type}", pick(rng, ADJECTIVES)),
        _ => category_type.to_string(),
    }
}

/// Generate an item name from one of four equally likely templates.
pub fn generate_item_name<R: Rng>(rng: &mut R) -> String {
    match rng.random_range(0..4) {
        0 => format!("{} {}", pick(rng, ADJECTIVES), pick(rng, PRODUCTS)),
        1 => format!("{} {}", pick(rng, COLORS), pick(rng, PRODUCTS)),
        2 => format!("{} {}", pick(rng, MATERIALS), pick(rng, PRODUCTS)),
        _ => format!(
            "{} {} {}",
            pick(rng, ADJECTIVES),
            pick(rng, MATERIALS),
            pick(rng, PRODUCTS)
        ),
    }
}
