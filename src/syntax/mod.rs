//! Python source parsing into dialect-neutral declaration trees.

mod dialect;
mod lower;
mod parser;

pub use dialect::Dialect;
pub use parser::DualParser;
