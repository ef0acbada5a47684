//! Helper functions used when building template context data

mod html;

pub use html::*;
