//! Path helpers shared by the argument builder and the runner.

use std::path::{Component, Path, PathBuf};

use crate::error::PackagerError;

/// Make `path` absolute against `base`.
///
/// Absolute paths are returned unchanged apart from dropping `.` segments.
/// No filesystem access happens here; the path does not need to exist.
pub fn make_absolute(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    joined
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Reject empty paths, naming the parameter they were supplied for.
pub fn require_path<'a>(parameter: &'static str, path: &'a Path) -> Result<&'a Path, PackagerError> {
    if path.as_os_str().is_empty() {
        return Err(PackagerError::missing(parameter));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_joined_to_base() {
        let result = make_absolute(Path::new("test.appx"), Path::new("/Working"));
        assert_eq!(result, PathBuf::from("/Working/test.appx"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let result = make_absolute(Path::new("/out/test.appx"), Path::new("/Working"));
        assert_eq!(result, PathBuf::from("/out/test.appx"));
    }

    #[test]
    fn current_dir_segments_are_dropped() {
        let result = make_absolute(Path::new("./content/./assets"), Path::new("/Working"));
        assert_eq!(result, PathBuf::from("/Working/content/assets"));
    }

    #[test]
    fn empty_path_is_rejected_with_parameter_name() {
        let err = require_path("content_directory", Path::new("")).unwrap_err();
        assert_eq!(err.parameter(), Some("content_directory"));
    }
}
