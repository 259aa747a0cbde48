/// Runtime configuration
///
/// Wiring for the external collaborators: the hosted backend (REST URL +
/// API key), the image host (account + unsigned upload preset) and the admin
/// credentials. Loaded once at startup from a JSON file in the user's config
/// directory, then overridden by `TALLER_*` environment variables.
///
/// Everything is optional: with no backend configured the app runs in
/// offline mode (galleries show their empty state, the built-in material
/// catalog still works).
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Hosted backend base URL (e.g. "https://xyzcompany.supabase.co")
    pub backend_url: String,
    /// API key sent as both `apikey` and bearer token
    pub backend_key: String,
    /// Image host account name
    pub cloud_name: String,
    /// Unsigned upload preset on the image host
    pub upload_preset: String,
    /// Admin area credentials
    pub admin_user: String,
    pub admin_pass: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            backend_key: String::new(),
            cloud_name: String::new(),
            upload_preset: String::new(),
            admin_user: "admin".to_string(),
            admin_pass: "123456".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the configuration: file first, then environment overrides.
    /// Never fails; missing pieces just leave their collaborator disabled.
    pub fn load() -> Self {
        let mut config = Self::from_file().unwrap_or_default();
        config.override_from_env();
        config
    }

    /// Path of the config file:
    /// - Linux: ~/.config/taller-gallery/config.json
    /// - macOS: ~/Library/Application Support/taller-gallery/config.json
    /// - Windows: %APPDATA%\taller-gallery\config.json
    pub fn path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("taller-gallery");
        path.push("config.json");
        Some(path)
    }

    fn from_file() -> Option<Self> {
        let path = Self::path()?;
        let raw = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                Some(config)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring malformed config file");
                None
            }
        }
    }

    fn override_from_env(&mut self) {
        let vars = [
            ("TALLER_BACKEND_URL", &mut self.backend_url),
            ("TALLER_BACKEND_KEY", &mut self.backend_key),
            ("TALLER_CLOUD_NAME", &mut self.cloud_name),
            ("TALLER_UPLOAD_PRESET", &mut self.upload_preset),
            ("TALLER_ADMIN_USER", &mut self.admin_user),
            ("TALLER_ADMIN_PASS", &mut self.admin_pass),
        ];
        for (name, slot) in vars {
            if let Ok(value) = std::env::var(name) {
                if !value.is_empty() {
                    *slot = value;
                }
            }
        }
    }

    /// Whether the hosted backend is wired up at all.
    pub fn has_backend(&self) -> bool {
        !self.backend_url.is_empty() && !self.backend_key.is_empty()
    }

    /// Whether image uploads can work.
    pub fn has_image_host(&self) -> bool {
        !self.cloud_name.is_empty() && !self.upload_preset.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_collaborators_disabled() {
        let config = AppConfig::default();
        assert!(!config.has_backend());
        assert!(!config.has_image_host());
        assert_eq!(config.admin_user, "admin");
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"backend_url":"https://example.test","backend_key":"k"}"#)
                .unwrap();

        assert!(config.has_backend());
        assert!(!config.has_image_host());
        // Untouched fields keep their defaults
        assert_eq!(config.admin_pass, "123456");
    }

    #[test]
    fn test_roundtrip() {
        let mut config = AppConfig::default();
        config.cloud_name = "demo".into();
        config.upload_preset = "unsigned".into();

        let json = serde_json::to_string(&config).unwrap();
        let restored: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
        assert!(restored.has_image_host());
    }
}
