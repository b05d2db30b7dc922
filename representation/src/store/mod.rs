//! The mutable data store backing a representation.

mod bag;

pub use bag::DataBag;
