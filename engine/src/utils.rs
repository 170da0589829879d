// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Miscellaneous utilities.

use crate::errors;

/// Verifies that the path exists and is a file or its parent exists and is a directory.
///
/// # Errors
///
/// Returns an error if the path exists is not a file or the parent is not a directory.
pub fn file_exists_or_creatable(path: &std::path::Path) -> Result<(), errors::ConfigCheckError> {
    #[allow(clippy::collapsible_else_if)]
    if path.exists() {
        if !path.is_file() {
            return Err(errors::ConfigCheckError::NotAFile(path.to_owned()));
        }
    } else {
        if let Some(base) = path.parent() {
            if !base.as_os_str().is_empty() && !base.is_dir() {
                return Err(errors::ConfigCheckError::NotADir(base.to_owned()));
            }
        } else {
            return Err(errors::ConfigCheckError::NoParent(path.to_owned()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::errors::ConfigCheckError;

    use super::file_exists_or_creatable;

    #[test]
    fn existing_file_is_accepted() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("profile.json");
        std::fs::write(&path, "{}").expect("write succeeds");

        assert!(file_exists_or_creatable(&path).is_ok());
    }

    #[test]
    fn missing_file_in_existing_directory_is_accepted() {
        let dir = tempfile::tempdir().expect("temporary directory");

        assert!(file_exists_or_creatable(&dir.path().join("profile.json")).is_ok());
        // A bare filename resolves against the working directory.
        assert!(file_exists_or_creatable(std::path::Path::new("profile.json")).is_ok());
    }

    #[test]
    fn directory_path_is_rejected() {
        let dir = tempfile::tempdir().expect("temporary directory");

        let result = file_exists_or_creatable(dir.path());
        assert!(matches!(result, Err(ConfigCheckError::NotAFile(_))));
    }

    #[test]
    fn missing_parent_is_rejected() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("no-such-dir").join("profile.json");

        let result = file_exists_or_creatable(&path);
        assert!(matches!(result, Err(ConfigCheckError::NotADir(_))));
    }
}
