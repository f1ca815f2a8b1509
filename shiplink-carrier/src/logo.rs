use std::path::Path;

use shiplink_core::host::AssetResolver;

/// Plugin-relative directory holding bundled carrier logos
pub const CARRIER_IMG_DIR: &str = "assets/images/carriers";

/// Image served when a carrier has no bundled logo
pub const DEFAULT_CARRIER_IMAGE: &str = "carrier.jpg";

/// Public URL of the logo for a carrier name. The name is lower-cased and
/// hyphenated to a file slug; when no such asset is bundled, the generic
/// carrier image is served instead.
pub fn resolve_logo_path(assets: &dyn AssetResolver, carrier_name: &str) -> String {
    let file = format!("{}.png", carrier_name.to_lowercase().replace(' ', "-"));

    let mut image = Path::new(CARRIER_IMG_DIR).join(file);
    if !assets.asset_exists(&image) {
        image = Path::new(CARRIER_IMG_DIR).join(DEFAULT_CARRIER_IMAGE);
    }

    assets.to_public_url(&image)
}
