//! Contains the conversion stages shared by both directions.
//!
//! Every module exposes plain `&str -> String` passes (`to_intermediate` / `to_markup` or
//! named variants); [`crate::pipeline`] decides their order.

pub mod balance;
pub mod inline;
pub mod lists;
pub mod nesting;
pub mod opaque;
pub mod tables;
pub mod templates;
