//! Places translation files can be enumerated and read from.

use std::marker::PhantomData;
use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;
use rust_embed::RustEmbed;

use super::LoadError;

/// A root containing translation files.
///
/// Paths handed out by [`ResourceRoot::list_files`] are relative to the root
/// and are accepted back by [`ResourceRoot::read_to_string`].
pub trait ResourceRoot {
    /// Human-readable description used in logs and errors.
    fn describe(&self) -> String;

    /// Lists every regular file under the root, sorted by relative path.
    fn list_files(&self) -> Result<Vec<PathBuf>, LoadError>;

    /// Reads one file as UTF-8 text.
    fn read_to_string(&self, relative: &Path) -> Result<String, LoadError>;
}

/// A directory on disk, walked recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsRoot {
    root: PathBuf,
}

impl FsRoot {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }
}

impl ResourceRoot for FsRoot {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn list_files(&self) -> Result<Vec<PathBuf>, LoadError> {
        if !self.root.is_dir() {
            return Err(LoadError::RootNotFound { root: self.describe() });
        }

        let mut found_files = Vec::new();
        for result in WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
        {
            let entry = result.map_err(|e| LoadError::Io {
                path: self.root.clone(),
                source: e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::other("failed to read directory entry")
                }),
            })?;

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            found_files.push(relative.to_path_buf());
        }

        found_files.sort();
        tracing::debug!(root = %self.root.display(), count = found_files.len(), "Listed files");
        Ok(found_files)
    }

    fn read_to_string(&self, relative: &Path) -> Result<String, LoadError> {
        let path = self.root.join(relative);
        std::fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })
    }
}

/// Files compiled into the binary with [`rust_embed`], optionally narrowed to
/// a sub-directory.
///
/// ```ignore
/// #[derive(rust_embed::RustEmbed)]
/// #[folder = "assets/"]
/// struct Assets;
///
/// let root = EmbeddedRoot::<Assets>::new("languages");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedRoot<E> {
    /// Prefix inside the embedded folder, without leading or trailing `/`.
    prefix: String,
    _assets: PhantomData<E>,
}

impl<E: RustEmbed> EmbeddedRoot<E> {
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self { prefix: prefix.trim_matches('/').to_string(), _assets: PhantomData }
    }

    fn full_name(&self, relative: &Path) -> String {
        let relative = relative.to_string_lossy().replace('\\', "/");
        if self.prefix.is_empty() { relative } else { format!("{}/{relative}", self.prefix) }
    }
}

impl<E: RustEmbed> ResourceRoot for EmbeddedRoot<E> {
    fn describe(&self) -> String {
        format!("embedded:/{}", self.prefix)
    }

    fn list_files(&self) -> Result<Vec<PathBuf>, LoadError> {
        let mut found_files: Vec<PathBuf> = E::iter()
            .filter_map(|name| {
                if self.prefix.is_empty() {
                    return Some(PathBuf::from(&*name));
                }
                name.strip_prefix(self.prefix.as_str())
                    .and_then(|rest| rest.strip_prefix('/'))
                    .map(PathBuf::from)
            })
            .collect();

        if found_files.is_empty() && !self.prefix.is_empty() {
            return Err(LoadError::RootNotFound { root: self.describe() });
        }

        found_files.sort();
        tracing::debug!(root = %self.describe(), count = found_files.len(), "Listed files");
        Ok(found_files)
    }

    fn read_to_string(&self, relative: &Path) -> Result<String, LoadError> {
        let name = self.full_name(relative);
        let path = PathBuf::from(&name);
        let file = E::get(&name).ok_or_else(|| LoadError::Io {
            path: path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "embedded file not found"),
        })?;

        String::from_utf8(file.data.into_owned()).map_err(|e| LoadError::Io {
            path,
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }
}
