use std::path::{Path, PathBuf};

use url::Url;

use shiplink_core::SyncError;

/// Marker separating the dispatcher prefix from the module/controller pair
/// in controller-path event names
const CONTROLLER_PATH_MARKER: &str = "_ControllerPath_";

/// Split a dispatcher event name of the form
/// `<prefix>_ControllerPath_<Module>_<Controller>` into its module and
/// controller parts.
pub fn controller_from_event(event_name: &str) -> Result<(String, String), SyncError> {
    let (_, tail) = event_name
        .split_once(CONTROLLER_PATH_MARKER)
        .ok_or_else(|| SyncError::UnknownRoute(event_name.to_string()))?;

    let (module, controller) = tail
        .split_once('_')
        .ok_or_else(|| SyncError::UnknownRoute(event_name.to_string()))?;

    if module.is_empty() || controller.is_empty() {
        return Err(SyncError::UnknownRoute(event_name.to_string()));
    }

    Ok((module.to_string(), controller.to_string()))
}

/// Resolve a dispatcher controller-path event to the handler location
/// inside the plugin directory.
pub fn controller_path(plugin_dir: &Path, event_name: &str) -> Result<PathBuf, SyncError> {
    let (module, controller) = controller_from_event(event_name)?;
    Ok(plugin_dir.join("controllers").join(module).join(controller))
}

/// Assemble a storefront frontend-controller URL. Plugin callbacks are
/// always served over https regardless of the configured base scheme.
pub fn front_url(
    base: &str,
    controller: &str,
    action: &str,
    params: &[(&str, &str)],
) -> Result<Url, SyncError> {
    let mut url = Url::parse(base)
        .map_err(|e| SyncError::Configuration(format!("invalid storefront base url: {e}")))?;

    url.query_pairs_mut()
        .append_pair("module", "frontend")
        .append_pair("controller", controller)
        .append_pair("action", action)
        .extend_pairs(params.iter().copied());

    if url.scheme() == "http" {
        url.set_scheme("https")
            .map_err(|_| {
                SyncError::Configuration("storefront url cannot be upgraded to https".to_string())
            })?;
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_event_parsing() {
        let (module, controller) =
            controller_from_event("Dispatcher_ControllerPath_Backend_ShiplinkMain").unwrap();

        assert_eq!(module, "Backend");
        assert_eq!(controller, "ShiplinkMain");
    }

    #[test]
    fn test_controller_path_resolution() {
        let path = controller_path(
            Path::new("/var/store/plugins/shiplink"),
            "Dispatcher_ControllerPath_Backend_ShiplinkMain",
        )
        .unwrap();

        assert_eq!(
            path,
            Path::new("/var/store/plugins/shiplink/controllers/Backend/ShiplinkMain")
        );
    }

    #[test]
    fn test_malformed_event_is_rejected() {
        assert!(controller_from_event("Dispatcher_Something_Else").is_err());
        assert!(controller_from_event("Dispatcher_ControllerPath_BackendOnly").is_err());
    }

    #[test]
    fn test_front_url_upgrades_scheme() {
        let url = front_url(
            "http://shop.example/",
            "ShiplinkWebhook",
            "notify",
            &[("reference", "abc-123")],
        )
        .unwrap();

        assert_eq!(url.scheme(), "https");
        let query = url.query().unwrap();
        assert!(query.contains("module=frontend"));
        assert!(query.contains("controller=ShiplinkWebhook"));
        assert!(query.contains("action=notify"));
        assert!(query.contains("reference=abc-123"));
    }

    #[test]
    fn test_front_url_rejects_garbage_base() {
        assert!(front_url("not a url", "C", "a", &[]).is_err());
    }
}
