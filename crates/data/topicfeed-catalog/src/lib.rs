//! # topicfeed catalog
//!
//! Concrete [`Catalog`](topicfeed_core::Catalog) implementations.
//!
//! - [`StaticCatalog`]: records held in memory, including the built-in demo set
//! - [`JsonCatalog`]: a dataset read once from a JSON file at startup

pub mod demo;
pub mod file;

pub use demo::StaticCatalog;
pub use file::{CatalogFile, JsonCatalog};

/// Placeholder image URL with the given size, label and colours.
///
/// The label is percent-encoded so it can carry spaces and punctuation.
pub fn placeholder_img(width: u32, height: u32, text: &str, bg_color: &str, text_color: &str) -> String {
    let text: String = url::form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("https://placehold.co/{width}x{height}/{bg_color}/{text_color}?text={text}")
}

/// [`placeholder_img`] with the default grey palette
pub fn grey_placeholder(width: u32, height: u32, text: &str) -> String {
    placeholder_img(width, height, text, "cccccc", "969696")
}
