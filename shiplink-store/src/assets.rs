use std::path::{Path, PathBuf};

use shiplink_core::host::AssetResolver;

/// Resolves plugin assets against the on-disk plugin directory and the
/// public base URL under which the host serves bundled files.
pub struct DiskAssetResolver {
    plugin_dir: PathBuf,
    public_base: String,
}

impl DiskAssetResolver {
    pub fn new(plugin_dir: PathBuf, public_base: impl Into<String>) -> Self {
        Self { plugin_dir, public_base: public_base.into() }
    }
}

impl AssetResolver for DiskAssetResolver {
    fn asset_exists(&self, path: &Path) -> bool {
        self.plugin_dir.join(path).is_file()
    }

    fn to_public_url(&self, path: &Path) -> String {
        let relative = path.to_string_lossy().replace('\\', "/");
        format!("{}/{}", self.public_base.trim_end_matches('/'), relative)
    }
}
