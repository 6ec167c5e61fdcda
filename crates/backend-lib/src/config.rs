// ============================
// staffdir-backend-lib/src/config.rs
// ============================
//! Configuration management.
use std::net::SocketAddr;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Json, Toml, Yaml},
    Figment,
};
use scrypt::Params;
use serde::Deserialize;

use crate::error::AppError;

/// Application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Log level
    pub log_level: String,
    /// Password hashing cost parameters
    pub hashing: HashingSettings,
    /// Bootstrap credentials registered at startup
    pub users: Vec<SeedUser>,
}

/// Scrypt cost parameters
///
/// The work factor is an operational knob: raise `log_n` as hardware
/// improves to keep offline guessing expensive.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HashingSettings {
    /// log2 of the scrypt CPU/memory cost
    pub log_n: u8,
    /// Block size
    pub r: u32,
    /// Parallelism
    pub p: u32,
}

/// Bootstrap credential triple supplied by configuration.
///
/// The plaintext password exists only until registration; `AppState::new`
/// zeroizes it once the hash is stored.
#[derive(Debug, Deserialize)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
    /// Role label attached to the record; not interpreted by the verifier
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "USER".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            log_level: "info".to_string(),
            hashing: HashingSettings::default(),
            users: Vec::new(),
        }
    }
}

impl Default for HashingSettings {
    fn default() -> Self {
        Self {
            log_n: 15,
            r: 8,
            p: 1,
        }
    }
}

impl HashingSettings {
    /// Build scrypt parameters, rejecting out-of-range values.
    pub fn params(&self) -> Result<Params, AppError> {
        Params::new(self.log_n, self.r, self.p, Params::RECOMMENDED_LEN)
            .map_err(|e| AppError::InvalidInput(format!("invalid scrypt parameters: {e}")))
    }
}

impl Settings {
    /// Load settings from config files and environment variables.
    ///
    /// Later sources override earlier ones: the shipped defaults, then any
    /// `config.{toml,yaml,json}` in the working directory, then
    /// `STAFFDIR_`-prefixed environment variables.
    pub fn load() -> Result<Self> {
        let settings = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file("config.toml"))
            .merge(Yaml::file("config.yaml"))
            .merge(Json::file("config.json"))
            .merge(Env::prefixed("STAFFDIR_"))
            .extract()?;

        Ok(settings)
    }

    /// Load settings from an explicit TOML file, with environment overrides.
    pub fn load_from(path: &str) -> Result<Self> {
        let settings = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("STAFFDIR_"))
            .extract()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(settings.log_level, "info");
        assert!(settings.users.is_empty());
    }

    #[test]
    fn test_default_hashing_params_are_valid() {
        let settings = HashingSettings::default();
        assert_eq!(settings.log_n, 15);
        assert!(settings.params().is_ok());
    }

    #[test]
    fn test_invalid_hashing_params_are_rejected() {
        let settings = HashingSettings {
            log_n: 15,
            r: 0,
            p: 1,
        };
        assert!(matches!(
            settings.params(),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_seed_user_role_defaults() {
        let seed: SeedUser =
            serde_json::from_str(r#"{"username": "tom", "password": "123"}"#).unwrap();
        assert_eq!(seed.username, "tom");
        assert_eq!(seed.role, "USER");

        let seed: SeedUser =
            serde_json::from_str(r#"{"username": "root", "password": "123", "role": "ADMIN"}"#)
                .unwrap();
        assert_eq!(seed.role, "ADMIN");
    }

    #[test]
    fn test_settings_from_toml() {
        let settings: Settings = Figment::new()
            .merge(figment::providers::Toml::string(
                r#"
                bind_addr = "0.0.0.0:8080"
                log_level = "debug"

                [hashing]
                log_n = 12

                [[users]]
                username = "tom"
                password = "123"
                "#,
            ))
            .extract()
            .unwrap();

        assert_eq!(settings.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.hashing.log_n, 12);
        // unspecified cost fields fall back to defaults
        assert_eq!(settings.hashing.r, 8);
        assert_eq!(settings.users.len(), 1);
        assert_eq!(settings.users[0].role, "USER");
    }
}
