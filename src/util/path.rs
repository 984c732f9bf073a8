/// Ancestor directories of a slash-separated file path, outermost first.
///
/// `"a/b/c.py"` yields `"a"` then `"a/b"`. A file at the root has none.
pub fn ancestor_dirs(file_path: &str) -> impl Iterator<Item = &str> {
    file_path.match_indices('/').map(move |(i, _)| &file_path[..i])
}

/// Dotted module path of `file_path`, rooted at the package directory `package_dir`.
///
/// The package directory's own name is the first segment and `extension` is
/// stripped from the file name, so `("src/pkg/sub/a.py", "src/pkg", ".py")`
/// gives `pkg.sub.a`. Returns `None` if `package_dir` is not an ancestor.
pub fn module_path(file_path: &str, package_dir: &str, extension: &str) -> Option<String> {
    let rest = file_path.strip_prefix(package_dir)?;
    if !rest.starts_with('/') {
        return None;
    }

    let name_start = package_dir.rfind('/').map_or(0, |i| i + 1);
    let relative = &file_path[name_start..];
    let relative = relative.strip_suffix(extension).unwrap_or(relative);

    Some(relative.replace('/', "."))
}
