//! Host layer: the document capability and the page driver.
//!
//! # Modules
//!
//! - [`document`]: The [`Document`] trait every host implements
//! - [`memory`]: [`MemoryDocument`], an in-memory implementation
//! - [`page`]: [`Page`], which maps host input to events and renders state

pub mod document;
pub mod memory;
pub mod page;

pub use document::Document;
pub use memory::MemoryDocument;
pub use page::Page;
