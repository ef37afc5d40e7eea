//! Configuration models loaded from external sources.

use serde::Deserialize;
#[cfg(feature = "server")]
use serde::de::DeserializeOwned;

/// Database used when no configuration source provides `database_url`.
pub const DEFAULT_DATABASE_URL: &str = "clientdesk.db";

#[derive(Clone, Debug, Deserialize)]
/// Settings required by the HTTP server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Settings read by the `ensure_admin` binary.
pub struct BootstrapConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default)]
    pub admin: AdminSettings,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            admin: AdminSettings::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Identity and credential of the seeded administrator.
///
/// The defaults are fallbacks for a first deployment only; the seeded account
/// is flagged for a password change unless `force_password_change` is off.
pub struct AdminSettings {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub document_type: String,
    pub document_number: String,
    /// bcrypt cost factor (log2 rounds).
    pub bcrypt_cost: u32,
    pub force_password_change: bool,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            full_name: "Administrador".to_string(),
            document_type: "CC".to_string(),
            document_number: "1234567890".to_string(),
            bcrypt_cost: 10,
            force_password_change: true,
        }
    }
}

/// Loads typed settings from `config/default.yaml`, `config/<APP_ENV>.yaml`
/// and `APP_`-prefixed environment variables, later sources winning.
///
/// Both files are optional. Nested keys use a double underscore, e.g.
/// `APP_ADMIN__PASSWORD`.
#[cfg(feature = "server")]
pub fn load_settings<T: DeserializeOwned>() -> Result<T, config::ConfigError> {
    // Select config profile (defaults to `local`).
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    config::Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<T>()
}
