//! Content factory resolving layouts by name.

use std::path::{Path, PathBuf};

use crate::layout::LocationLayout;
use crate::loaders::{LayoutLoader, LoadResult};

/// Loads layouts from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// └── locations/
///     ├── farm.ron
///     └── farmhouse.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the layouts shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load `locations/<name>.ron`.
    pub fn load_location(&self, name: &str) -> LoadResult<LocationLayout> {
        let path = self.data_dir.join("locations").join(format!("{name}.ron"));
        LayoutLoader::load(&path)
    }
}
