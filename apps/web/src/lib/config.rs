//! Build-time API address with an optional runtime override. The runtime
//! value is read from `window.BOOKSTALL_CONFIG.api_base_url` so a static
//! deployment can point at another API without rebuilding. Configuration is
//! public; never put secrets here.

use bookstall_client::DEFAULT_API_BASE_URL;

/// Frontend configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads `BOOKSTALL_API_BASE_URL` from the build environment, falling
    /// back to the local development API, then applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("BOOKSTALL_API_BASE_URL")
            .and_then(normalize_runtime_value)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let mut config = Self { api_base_url };
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("BOOKSTALL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);
    let api_base_url = Reflect::get(&object, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string();

    Some(RuntimeConfig {
        api_base_url: api_base_url.as_deref().and_then(normalize_runtime_value),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_runtime_overrides, normalize_runtime_value, AppConfig, RuntimeConfig};

    fn default_config() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default/api".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://books.example.com/api "),
            Some("https://books.example.com/api".to_string())
        );
    }

    #[test]
    fn empty_override_keeps_build_value() {
        let mut config = default_config();
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                api_base_url: normalize_runtime_value("  "),
            },
        );
        assert_eq!(config, default_config());
    }

    #[test]
    fn override_replaces_build_value() {
        let mut config = default_config();
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                api_base_url: normalize_runtime_value("https://books.example.com/api"),
            },
        );
        assert_eq!(config.api_base_url, "https://books.example.com/api");
    }

    #[test]
    fn load_without_window_has_a_base() {
        assert!(!AppConfig::load().api_base_url.is_empty());
    }
}
