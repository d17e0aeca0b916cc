//! Row structs mapping database rows onto domain entities.

pub mod tier_list;
