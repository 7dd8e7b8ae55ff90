//! Domain models for the alias store.
//!
//! - [`AliasName`]: a validated store entry name.
//! - [`Listing`]: the result of listing the store, with the selected alias marked.

mod alias;
mod listing;

pub use alias::*;
pub use listing::*;
