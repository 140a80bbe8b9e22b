//! Fixed word lists used to assemble names.

use rand::Rng;

pub const ADJECTIVES: &[&str] = &[
    "Premium",
    "Standard",
    "Deluxe",
    "Classic",
    "Modern",
    "Vintage",
    "Professional",
    "Advanced",
    "Basic",
    "Elite",
    "Superior",
    "Compact",
];

pub const PRODUCTS: &[&str] = &[
    "Widget",
    "Gadget",
    "Tool",
    "Device",
    "Component",
    "Module",
    "Unit",
    "System",
    "Kit",
    "Set",
    "Package",
    "Bundle",
];

pub const MATERIALS: &[&str] = &[
    "Steel",
    "Aluminum",
    "Plastic",
    "Carbon",
    "Titanium",
    "Copper",
    "Bronze",
    "Ceramic",
    "Composite",
    "Alloy",
];

pub const COLORS: &[&str] = &[
    "Red", "Blue", "Green", "Black", "White", "Silver", "Gold", "Gray", "Orange", "Purple",
];

/// Category types, selected by index rather than at random.
pub const CATEGORY_TYPES: &[&str] = &[
    "Electronics",
    "Tools",
    "Furniture",
    "Clothing",
    "Sports",
    "Books",
    "Toys",
    "Food",
    "Garden",
    "Automotive",
    "Health",
    "Beauty",
    "Jewelry",
    "Music",
    "Office",
    "Pet",
    "Baby",
    "Art",
    "Industrial",
    "Medical",
];

/// Pick a word uniformly at random. `words` must be non-empty.
pub fn pick<R: Rng>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words[rng.random_range(0..words.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_list_sizes() {
        assert_eq!(ADJECTIVES.len(), 12);
        assert_eq!(PRODUCTS.len(), 12);
        assert_eq!(MATERIALS.len(), 10);
        assert_eq!(COLORS.len(), 10);
        assert_eq!(CATEGORY_TYPES.len(), 20);
    }

    #[test]
    fn test_pick_stays_in_list() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert!(COLORS.contains(&pick(&mut rng, COLORS)));
        }
    }
}
