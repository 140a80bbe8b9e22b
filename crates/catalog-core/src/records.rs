//! Records written to the seed and fixture files.
//!
//! Each record serializes to one CSV row. Column order follows field
//! order, and [`CsvRecord::HEADERS`] names the columns so that a header
//! row can be written even when a file has no data rows.

use serde::Serialize;

/// Prefix of category codes in the seed data (`CAT0001`).
pub const CATEGORY_CODE_PREFIX: &str = "CAT";

/// Prefix of item SKUs in the seed data (`SKU000001`).
pub const ITEM_SKU_PREFIX: &str = "SKU";

/// Prefix of light payload SKUs (`JMETER000000`).
pub const LIGHT_PAYLOAD_SKU_PREFIX: &str = "JMETER";

/// Prefix of heavy payload SKUs (`JMHEAVY000000`).
pub const HEAVY_PAYLOAD_SKU_PREFIX: &str = "JMHEAVY";

/// Prefix of category payload codes (`JMCAT0000`).
pub const CATEGORY_PAYLOAD_CODE_PREFIX: &str = "JMCAT";

/// Column layout of a CSV row type.
pub trait CsvRecord: Serialize {
    /// Header row, in serialization order.
    const HEADERS: &'static [&'static str];
}

/// A category row in `categories.csv`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub updated_at: String,
}

impl Category {
    /// Category code for a 1-based id, zero-padded to 4 digits.
    pub fn code_for(id: u64) -> String {
        format!("{CATEGORY_CODE_PREFIX}{id:04}")
    }
}

impl CsvRecord for Category {
    const HEADERS: &'static [&'static str] = &["id", "code", "name", "updated_at"];
}

/// An item row in `items.csv`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: u64,
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub category_id: u64,
    pub updated_at: String,
}

impl Item {
    /// Item SKU for a 1-based id, zero-padded to 6 digits.
    pub fn sku_for(id: u64) -> String {
        format!("{ITEM_SKU_PREFIX}{id:06}")
    }
}

impl CsvRecord for Item {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "sku",
        "name",
        "price",
        "stock",
        "category_id",
        "updated_at",
    ];
}

/// Light item request body (`item-payload-light.csv`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPayload {
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    #[serde(rename = "categoryId")]
    pub category_id: u64,
}

impl ItemPayload {
    /// SKU for the 0-based sample row `index`.
    pub fn sku_for(index: u64) -> String {
        format!("{LIGHT_PAYLOAD_SKU_PREFIX}{index:06}")
    }
}

impl CsvRecord for ItemPayload {
    const HEADERS: &'static [&'static str] = &["sku", "name", "price", "stock", "categoryId"];
}

/// Heavy item request body with a multi-kilobyte description
/// (`item-payload-heavy.csv`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeavyItemPayload {
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    #[serde(rename = "categoryId")]
    pub category_id: u64,
    pub description: String,
}

impl HeavyItemPayload {
    /// SKU for the 0-based sample row `index`.
    pub fn sku_for(index: u64) -> String {
        format!("{HEAVY_PAYLOAD_SKU_PREFIX}{index:06}")
    }
}

impl CsvRecord for HeavyItemPayload {
    const HEADERS: &'static [&'static str] = &[
        "sku",
        "name",
        "price",
        "stock",
        "categoryId",
        "description",
    ];
}

/// Category request body (`category-payload.csv`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub code: String,
    pub name: String,
}

impl CategoryPayload {
    /// Code for the 0-based sample row `index`.
    pub fn code_for(index: u64) -> String {
        format!("{CATEGORY_PAYLOAD_CODE_PREFIX}{index:04}")
    }
}

impl CsvRecord for CategoryPayload {
    const HEADERS: &'static [&'static str] = &["code", "name"];
}

/// Row of `category-ids.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryIdRow {
    #[serde(rename = "categoryId")]
    pub category_id: u64,
}

impl CsvRecord for CategoryIdRow {
    const HEADERS: &'static [&'static str] = &["categoryId"];
}

/// Row of `item-ids.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemIdRow {
    #[serde(rename = "itemId")]
    pub item_id: u64,
}

impl CsvRecord for ItemIdRow {
    const HEADERS: &'static [&'static str] = &["itemId"];
}
