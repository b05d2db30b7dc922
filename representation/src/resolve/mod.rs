//! Resolution of logical names to backing files.

mod finder;

pub use finder::{DirectoryFinder, Finder};
