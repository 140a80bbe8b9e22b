//! Record synthesizer for catalog-seed.
//!
//! This crate provides the [`CatalogGenerator`], which produces category,
//! item and payload records with randomized content and fixed cardinality.
//! All randomness comes from one `StdRng` owned by the generator; a fixed
//! seed and timestamp anchor reproduce the same records.
//!
//! # Architecture
//!
//! ```text
//!   seed / entropy
//!        │
//!        ▼
//! ┌───────────────────┐
//! │ CatalogGenerator  │
//! │                   │
//! │  - rng (StdRng)   │
//! │  - anchor         │
//! └─────────┬─────────┘
//!           │
//!           ├── categories(N)      -> Category 1..=N
//!           ├── items(M, N)        -> Item 1..=M, bucketed by category
//!           └── *_payloads(...)    -> fixture request bodies
//! ```
//!
//! # Example
//!
//! ```rust
//! use catalog_generator::CatalogGenerator;
//!
//! let mut generator = CatalogGenerator::new(42);
//! let categories: Vec<_> = generator.categories(5).collect();
//! let items: Vec<_> = generator.items(12, 5).collect();
//!
//! assert_eq!(categories.len(), 5);
//! assert_eq!(items.len(), 12);
//! ```

pub mod generator;
pub mod generators;
pub mod vocabulary;

// Re-exports for convenience
pub use generator::{CatalogGenerator, ItemIterator};
