// crates/shared-kernel/src/value_objects/mod.rs
mod mean;
mod sort_order;

pub use mean::Mean;
pub use sort_order::SortOrder;
