//! Changed-entity resolution: from diff hunks to qualified class and method names.

mod locate;
mod package;
mod resolver;

pub use locate::locate;
pub use package::{PackageRoot, PackageSearch, infer_package};
pub use resolver::{EntityResolver, LineSpan};
