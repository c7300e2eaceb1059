//! Support code for the `wiki` binary, split out so it can be unit tested.

pub mod error;
pub mod transforms;
