//! Format implementations
//!
//! Each format converts between its own text and the intermediate Document, and owns a
//! serializer that renders IR nodes in its notation.

pub mod html;
pub mod wiki;

pub use html::HtmlFormat;
pub use wiki::WikiFormat;
