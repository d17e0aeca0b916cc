//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and return raw `sqlx` results.

pub mod tier_list_repo;

pub use tier_list_repo::TierListRepo;
