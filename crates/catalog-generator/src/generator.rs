//! Main generator producing category, item and payload records.

use crate::generators::{
    distribute, format_timestamp, generate_category_name, generate_description,
    generate_item_name, generate_price, generate_recent_timestamp, generate_stock,
};
use catalog_core::{Category, CategoryPayload, HeavyItemPayload, Item, ItemPayload};
use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Record generator holding the single random source of a run.
///
/// Seeded generators reproduce the same records for the same seed and
/// anchor. The anchor is the "now" that `updated_at` values are offset
/// from; it defaults to the local time at construction.
pub struct CatalogGenerator {
    /// Random source shared by every record of the run
    rng: StdRng,
    /// Reference time for recent timestamps
    anchor: NaiveDateTime,
}

impl CatalogGenerator {
    /// Create a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a seeded generator when `seed` is set, an entropy-seeded one otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            anchor: Local::now().naive_local(),
        }
    }

    /// Replace the timestamp anchor.
    pub fn with_anchor(mut self, anchor: NaiveDateTime) -> Self {
        self.anchor = anchor;
        self
    }

    /// Get the timestamp anchor.
    pub fn anchor(&self) -> NaiveDateTime {
        self.anchor
    }

    fn recent_timestamp(&mut self) -> String {
        format_timestamp(generate_recent_timestamp(&mut self.rng, self.anchor))
    }

    /// Generate the category with 1-based `id`.
    pub fn category(&mut self, id: u64) -> Category {
        let name = generate_category_name(&mut self.rng, id);
        let updated_at = self.recent_timestamp();

        Category {
            id,
            code: Category::code_for(id),
            name,
            updated_at,
        }
    }

    /// Lazily generate categories `1..=count`.
    pub fn categories(&mut self, count: u64) -> impl Iterator<Item = Category> + '_ {
        (1..=count).map(move |id| self.category(id))
    }

    /// Generate the item with 1-based `id` belonging to `category_id`.
    pub fn item(&mut self, id: u64, category_id: u64) -> Item {
        let name = generate_item_name(&mut self.rng);
        let price = generate_price(&mut self.rng);
        let stock = generate_stock(&mut self.rng);
        let updated_at = self.recent_timestamp();

        Item {
            id,
            sku: Item::sku_for(id),
            name,
            price,
            stock,
            category_id,
            updated_at,
        }
    }

    /// Lazily generate `item_count` items spread over `category_count` categories.
    ///
    /// Bucket sizes are drawn up front with [`distribute`]; items are then
    /// emitted category by category, so `category_id` never decreases.
    pub fn items(&mut self, item_count: u64, category_count: u64) -> ItemIterator<'_> {
        let buckets = distribute(&mut self.rng, item_count, category_count);
        ItemIterator::new(self, buckets)
    }

    fn random_category_id(&mut self, category_count: u64) -> u64 {
        self.rng.random_range(1..=category_count)
    }

    /// Generate the light payload for 0-based sample row `index`.
    ///
    /// `category_count` must be at least 1.
    pub fn item_payload(&mut self, index: u64, category_count: u64) -> ItemPayload {
        let name = generate_item_name(&mut self.rng);
        let price = generate_price(&mut self.rng);
        let stock = generate_stock(&mut self.rng);
        let category_id = self.random_category_id(category_count);

        ItemPayload {
            sku: ItemPayload::sku_for(index),
            name,
            price,
            stock,
            category_id,
        }
    }

    /// Lazily generate `count` light payloads.
    ///
    /// Yields nothing when `category_count` is zero, since no payload
    /// could reference a valid category.
    pub fn item_payloads(
        &mut self,
        count: u64,
        category_count: u64,
    ) -> impl Iterator<Item = ItemPayload> + '_ {
        let count = if category_count == 0 { 0 } else { count };
        (0..count).map(move |index| self.item_payload(index, category_count))
    }

    /// Generate the heavy payload for 0-based sample row `index`.
    ///
    /// `category_count` must be at least 1.
    pub fn heavy_item_payload(
        &mut self,
        index: u64,
        category_count: u64,
        sentences: usize,
    ) -> HeavyItemPayload {
        let name = generate_item_name(&mut self.rng);
        let price = generate_price(&mut self.rng);
        let stock = generate_stock(&mut self.rng);
        let category_id = self.random_category_id(category_count);
        let description = generate_description(&mut self.rng, sentences);

        HeavyItemPayload {
            sku: HeavyItemPayload::sku_for(index),
            name,
            price,
            stock,
            category_id,
            description,
        }
    }

    /// Lazily generate `count` heavy payloads with `sentences`-sentence descriptions.
    ///
    /// Yields nothing when `category_count` is zero.
    pub fn heavy_item_payloads(
        &mut self,
        count: u64,
        category_count: u64,
        sentences: usize,
    ) -> impl Iterator<Item = HeavyItemPayload> + '_ {
        let count = if category_count == 0 { 0 } else { count };
        (0..count).map(move |index| self.heavy_item_payload(index, category_count, sentences))
    }

    /// Generate the category payload for 0-based sample row `index`.
    pub fn category_payload(&mut self, index: u64) -> CategoryPayload {
        CategoryPayload {
            code: CategoryPayload::code_for(index),
            name: generate_category_name(&mut self.rng, index),
        }
    }

    /// Lazily generate `count` category payloads.
    pub fn category_payloads(&mut self, count: u64) -> impl Iterator<Item = CategoryPayload> + '_ {
        (0..count).map(move |index| self.category_payload(index))
    }
}

/// Iterator that lazily generates items in category order.
pub struct ItemIterator<'a> {
    generator: &'a mut CatalogGenerator,
    buckets: Vec<u64>,
    /// Number of buckets entered so far; equals the current 1-based category id
    category: usize,
    /// Items left in the current bucket
    left_in_bucket: u64,
    next_id: u64,
    remaining: u64,
}

impl<'a> ItemIterator<'a> {
    fn new(generator: &'a mut CatalogGenerator, buckets: Vec<u64>) -> Self {
        let remaining = buckets.iter().sum();
        Self {
            generator,
            buckets,
            category: 0,
            left_in_bucket: 0,
            next_id: 1,
            remaining,
        }
    }

    /// Bucket sizes indexed by `category_id - 1`.
    pub fn bucket_sizes(&self) -> &[u64] {
        &self.buckets
    }
}

impl Iterator for ItemIterator<'_> {
    type Item = Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.left_in_bucket == 0 {
            let size = *self.buckets.get(self.category)?;
            self.left_in_bucket = size;
            self.category += 1;
        }

        self.left_in_bucket -= 1;
        self.remaining -= 1;

        let id = self.next_id;
        self.next_id += 1;

        Some(self.generator.item(id, self.category as u64))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ItemIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{MAX_PRICE, MAX_STOCK, MIN_PRICE};
    use chrono::NaiveDate;
    use std::collections::{BTreeMap, HashSet};

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn test_generator() -> CatalogGenerator {
        CatalogGenerator::new(42).with_anchor(anchor())
    }

    #[test]
    fn test_generate_categories() {
        let mut generator = test_generator();
        assert_eq!(generator.anchor(), anchor());

        let categories: Vec<_> = generator.categories(5).collect();

        assert_eq!(categories.len(), 5);
        for (i, category) in categories.iter().enumerate() {
            assert_eq!(category.id, i as u64 + 1);
        }
        assert_eq!(categories[0].code, "CAT0001");
        assert_eq!(categories[4].code, "CAT0005");
        // 2 % 3 == 2 selects the bare type template
        assert_eq!(categories[1].name, "Furniture");
    }

    #[test]
    fn test_generate_items_small_scale() {
        let mut generator = test_generator();

        let items: Vec<_> = generator.items(12, 5).collect();

        assert_eq!(items.len(), 12);

        let ids: Vec<u64> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());

        let skus: HashSet<&str> = items.iter().map(|item| item.sku.as_str()).collect();
        assert_eq!(skus.len(), 12);
        assert_eq!(items[0].sku, "SKU000001");

        // category_id never decreases across rows
        assert!(items
            .windows(2)
            .all(|pair| pair[0].category_id <= pair[1].category_id));

        let mut buckets: BTreeMap<u64, u64> = BTreeMap::new();
        for item in &items {
            assert!((1..=5).contains(&item.category_id));
            *buckets.entry(item.category_id).or_default() += 1;
        }
        // Base size 2 for every category, remainder 2 spread with replacement
        assert_eq!(buckets.len(), 5);
        assert!(buckets.values().all(|&size| (2..=4).contains(&size)));
        assert_eq!(buckets.values().sum::<u64>(), 12);
    }

    #[test]
    fn test_items_match_bucket_sizes() {
        let mut generator = test_generator();

        let iter = generator.items(103, 10);
        let expected = iter.bucket_sizes().to_vec();
        assert_eq!(iter.len(), 103);

        let mut actual = vec![0u64; 10];
        for item in iter {
            actual[(item.category_id - 1) as usize] += 1;
        }
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_items_skip_empty_buckets() {
        let mut generator = test_generator();

        let items: Vec<_> = generator.items(3, 10).collect();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| (1..=10).contains(&item.category_id)));
    }

    #[test]
    fn test_items_without_categories() {
        let mut generator = test_generator();

        assert_eq!(generator.items(10, 0).count(), 0);
        assert_eq!(generator.items(0, 5).count(), 0);
    }

    #[test]
    fn test_item_value_ranges() {
        let mut generator = test_generator();

        for item in generator.items(500, 7) {
            assert!((MIN_PRICE..=MAX_PRICE).contains(&item.price));
            assert!(item.stock <= MAX_STOCK);
            assert!(item.updated_at.as_str() <= "2024-06-15 12:00:00");
            assert!(item.updated_at.as_str() >= "2023-06-14 00:00:00");
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = test_generator();
        let mut gen2 = test_generator();

        let categories1: Vec<_> = gen1.categories(10).collect();
        let categories2: Vec<_> = gen2.categories(10).collect();
        assert_eq!(categories1, categories2);

        let items1: Vec<_> = gen1.items(50, 10).collect();
        let items2: Vec<_> = gen2.items(50, 10).collect();
        assert_eq!(items1, items2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut gen1 = CatalogGenerator::new(1).with_anchor(anchor());
        let mut gen2 = CatalogGenerator::new(2).with_anchor(anchor());

        let items1: Vec<_> = gen1.items(50, 10).collect();
        let items2: Vec<_> = gen2.items(50, 10).collect();
        assert_ne!(items1, items2);
        assert_eq!(items1.len(), items2.len());
    }

    #[test]
    fn test_item_payloads() {
        let mut generator = test_generator();

        let payloads: Vec<_> = generator.item_payloads(20, 3).collect();

        assert_eq!(payloads.len(), 20);
        assert_eq!(payloads[0].sku, "JMETER000000");
        assert_eq!(payloads[19].sku, "JMETER000019");
        assert!(payloads
            .iter()
            .all(|payload| (1..=3).contains(&payload.category_id)));
    }

    #[test]
    fn test_item_payloads_without_categories() {
        let mut generator = test_generator();
        assert_eq!(generator.item_payloads(20, 0).count(), 0);
        assert_eq!(generator.heavy_item_payloads(20, 0, 100).count(), 0);
    }

    #[test]
    fn test_heavy_item_payloads() {
        let mut generator = test_generator();

        let payloads: Vec<_> = generator.heavy_item_payloads(5, 3, 100).collect();

        assert_eq!(payloads.len(), 5);
        assert_eq!(payloads[4].sku, "JMHEAVY000004");
        for payload in &payloads {
            assert!(payload.description.len() > 5000);
            assert!((1..=3).contains(&payload.category_id));
        }
    }

    #[test]
    fn test_category_payloads() {
        let mut generator = test_generator();

        let payloads: Vec<_> = generator.category_payloads(4).collect();

        assert_eq!(payloads.len(), 4);
        assert_eq!(payloads[0].code, "JMCAT0000");
        assert_eq!(payloads[3].code, "JMCAT0003");
        // Index 2 uses the bare type template: "Furniture"
        assert_eq!(payloads[2].name, "Furniture");
        assert!(payloads[0].name.starts_with("Electronics - "));
    }
}
