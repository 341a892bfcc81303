//! Product catalog module.
//!
//! Contains the category index, categories, and their product collections.

mod category;
mod collection;
mod index;
mod product;

pub use category::Category;
pub use collection::ProductCollection;
pub use index::{CategoryIndex, InsertOutcome, Iter};
pub use product::Product;
