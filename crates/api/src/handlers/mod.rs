//! HTTP handlers, one module per resource.

pub mod tier_list;
