//! # Menu Core
//!
//! Domain records, the menu item converter, and menu tree assembly.

pub mod catalog;
pub mod domain;
pub mod services;
pub mod error;

// Re-export domain entities
pub use catalog::MenuCatalog;
pub use domain::*;
pub use error::{LinkError, MenuError};
