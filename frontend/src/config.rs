use gloo_storage::{LocalStorage, Storage};
use shared::config::{API_URL_KEY, unquote_stored};
use shared::{ApiConfig, ConfigError};

/// LocalStorage key that overrides the API URL baked in at build time.
const STORAGE_KEY: &str = "detection_api_url";

/// Resolves the API configuration once at startup.
///
/// Lookup order: the LocalStorage override, the `DETECTION_API_URL` value
/// captured at build time, then the origin the page was served from.
pub fn load() -> Result<ApiConfig, ConfigError> {
    let stored = match LocalStorage::raw().get_item(STORAGE_KEY) {
        Ok(value) => value.filter(|value| !unquote_stored(value).is_empty()),
        Err(e) => {
            log::warn!("Failed to read {} from local storage: {:?}", STORAGE_KEY, e);
            None
        }
    };
    let built = option_env!("DETECTION_API_URL");
    let origin = web_sys::window().and_then(|window| window.location().origin().ok());

    if stored.is_some() {
        log::info!("Using {} override from local storage", API_URL_KEY);
    } else if built.is_none() {
        log::warn!("{} not set at build time, falling back to page origin", API_URL_KEY);
    }

    ApiConfig::from_candidates([stored.as_deref().map(unquote_stored), built, origin.as_deref()])
}
