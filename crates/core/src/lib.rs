//! Domain types for the tier list service.
//!
//! Holds the entity model, the success/failure outcome envelope and the
//! error taxonomy. Nothing in this crate performs I/O.

pub mod error;
pub mod outcome;
pub mod tier_list;
pub mod types;
