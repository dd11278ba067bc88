//! Core math modules.

pub mod aggregate;
pub mod core_length;
pub mod diagnostic;
pub mod error;
pub mod normalize;
pub mod result;
pub mod score;
pub mod variants;
