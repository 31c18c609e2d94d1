use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically, resolving ".." and "." components
///
/// A ".." that would climb above the start of a relative path is kept,
/// so `../x` stays `../x`. Above the root of an absolute path it is dropped.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.as_ref().components() {
        match component {
            Component::ParentDir => match result.components().next_back() {
                Some(Component::Normal(_)) => {
                    result.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => result.push(".."),
            },
            Component::CurDir => {}
            _ => result.push(component),
        }
    }

    result
}

/// Get file name without extension
pub fn get_stem<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|s| s.to_string())
}

/// Check if a path has a specific extension
pub fn has_extension<P: AsRef<Path>>(path: P, ext: &str) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e == ext)
}

/// Join a URL-style path onto a root, refusing anything that escapes it
pub fn join_within<P: AsRef<Path>>(root: P, relative: &str) -> Option<PathBuf> {
    let mut path = PathBuf::from(root.as_ref());

    for segment in relative.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            s if s.contains('\\') || Path::new(s).is_absolute() => return None,
            s => path.push(s),
        }
    }

    Some(path)
}
