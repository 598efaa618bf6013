//! Cheat-sheet catalog.
//!
//! The catalog is a four-level hierarchy:
//!
//! ```text
//! Language → Category → (Subcategory →) Example
//! ```
//!
//! A category either holds examples directly ([`CategoryContent::Flat`]) or
//! groups them into subcategories ([`CategoryContent::Nested`]). Consumers
//! match on the variant instead of probing optional fields.
//!
//! The catalog is loaded once (from JSON, or from the copy embedded in the
//! binary) and then passed by reference to whatever needs it. Nothing here
//! holds global state.
//!
//! # Usage
//!
//! ```
//! use catalog::{Catalog, CatalogPath, search};
//!
//! let catalog = Catalog::embedded().unwrap();
//! let python = catalog.language("python").unwrap();
//! assert_eq!(python.name, "Python");
//!
//! let path: CatalogPath = "python/py_basics/py_variables".parse().unwrap();
//! let examples = catalog.resolve(&path).unwrap().examples().unwrap();
//! assert!(!examples.is_empty());
//!
//! let hits = search::filter_searchable(&catalog.languages, "PYTH");
//! assert_eq!(hits.len(), 1);
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod pager;
pub mod path;
pub mod search;

pub use error::{CatalogError, Level, Result};
pub use model::{Catalog, Category, CategoryContent, Example, Language, Subcategory, Table};
pub use pager::ExamplePager;
pub use path::{CatalogPath, Resolved};
pub use search::{ExampleHit, Searchable};
