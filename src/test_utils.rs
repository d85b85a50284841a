//! Helpers shared by unit tests.
#![cfg(test)]

use std::path::Path;

/// Writes `(relative path, content)` pairs under `root`, creating parent
/// directories as needed.
#[allow(clippy::unwrap_used)]
pub(crate) fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
}
