//! Domain rules for the Tai Chi membership service.
//!
//! This crate has no IO: it holds the shared id/timestamp types, the error
//! taxonomy, and the small pieces of logic (slug derivation, choice
//! vocabularies, tag parsing, roster partitioning, display labels) that the
//! repository and HTTP layers build on.

pub mod choices;
pub mod error;
pub mod labels;
pub mod roster;
pub mod slug;
pub mod tags;
pub mod types;
