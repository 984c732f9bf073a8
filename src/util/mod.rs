mod path;

pub use path::{ancestor_dirs, module_path};
