//! Data models for the trivia backend.
//!
//! Field names match the JSON contract of the trivia frontend exactly.

mod category;
pub mod lenient;
mod question;
mod quiz;

pub use category::*;
pub use question::*;
pub use quiz::*;
