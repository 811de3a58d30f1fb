//! Configuration management

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_CULTURE, ENV_PREFIX};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub menu: MenuSettings,
    #[serde(default)]
    pub localization: LocalizationSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuSettings {
    /// JSON file holding menus, translations and slugs.
    pub catalog_path: PathBuf,
    /// Where multipart uploads are spooled before validation.
    pub upload_dir: PathBuf,
    /// Prefix for every generated link, e.g. `/` or `/shop/`.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Route name -> path template with `{placeholder}` segments.
    #[serde(default = "default_routes")]
    pub routes: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocalizationSettings {
    pub default_culture: String,
    pub languages: Vec<LanguageSettings>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LanguageSettings {
    pub culture: String,
    #[serde(default)]
    pub rtl: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            env: "development".into(),
            host: "127.0.0.1".into(),
            port: 8080,
            name: "menu-server".into(),
        }
    }
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("config/menus.json"),
            upload_dir: PathBuf::from("uploads"),
            base_path: default_base_path(),
            routes: default_routes(),
        }
    }
}

impl Default for LocalizationSettings {
    fn default() -> Self {
        Self {
            default_culture: DEFAULT_CULTURE.to_string(),
            languages: vec![
                LanguageSettings { culture: "en".into(), rtl: false },
                LanguageSettings { culture: "ar".into(), rtl: true },
            ],
        }
    }
}

impl LocalizationSettings {
    /// Finds a configured language by culture code, ignoring case.
    pub fn language(&self, culture: &str) -> Option<&LanguageSettings> {
        self.languages
            .iter()
            .find(|lang| lang.culture.eq_ignore_ascii_case(culture))
    }

    pub fn default_language(&self) -> LanguageSettings {
        self.language(&self.default_culture)
            .cloned()
            .unwrap_or_else(|| LanguageSettings {
                culture: self.default_culture.clone(),
                rtl: false,
            })
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Json,
        }
    }
}

fn default_base_path() -> String {
    "/".into()
}

fn default_routes() -> HashMap<String, String> {
    HashMap::from([
        ("homepage".to_string(), "/".to_string()),
        ("product".to_string(), "/product/{id}".to_string()),
        ("category".to_string(), "/category/{id}".to_string()),
        ("search".to_string(), "/search".to_string()),
        ("contact".to_string(), "/contactus".to_string()),
    ])
}

impl AppConfig {
    /// Loads `.env`, then `config/default`, `config/{APP_ENV}` and
    /// `MENU__*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_from(Path::new("config"))
    }

    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", env.clone())?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "menu-server")?
            .set_default("menu.catalog_path", "config/menus.json")?
            .set_default("menu.upload_dir", "uploads")?
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(&env)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(dir.path()).unwrap();

        assert_eq!(config.app.host, "127.0.0.1");
        assert_eq!(config.menu.base_path, "/");
        assert_eq!(
            config.menu.routes.get("product").map(String::as_str),
            Some("/product/{id}")
        );
        assert_eq!(config.localization.default_culture, "en");
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            r#"
[app]
port = 9191

[menu]
catalog_path = "data/catalog.json"
upload_dir = "/tmp/menu-uploads"
base_path = "/shop/"

[telemetry]
level = "debug"
format = "pretty"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.app.port, 9191);
        assert_eq!(config.menu.catalog_path, PathBuf::from("data/catalog.json"));
        assert_eq!(config.menu.base_path, "/shop/");
        assert_eq!(config.telemetry.format, LogFormat::Pretty);
    }

    #[test]
    fn test_language_lookup_ignores_case() {
        let settings = LocalizationSettings::default();
        assert!(settings.language("AR").unwrap().rtl);
        assert!(settings.language("fr").is_none());
        assert_eq!(settings.default_language().culture, "en");
    }
}
