use crate::error::ConfigError;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// On-disk settings (`settings.json` in the data directory)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub steam_api_key: String,
    #[serde(default)]
    pub steam_id: String,
}

/// Validated Steam Web API credentials
#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub api_key: String,
    pub steam_id: String,
}

impl Credentials {
    /// Both values must be non-empty after trimming.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let api_key = settings.steam_api_key.trim();
        let steam_id = settings.steam_id.trim();
        if api_key.is_empty() {
            return Err(ConfigError::MissingCredential("STEAM_API_KEY"));
        }
        if steam_id.is_empty() {
            return Err(ConfigError::MissingCredential("STEAM_ID"));
        }
        Ok(Self {
            api_key: api_key.to_string(),
            steam_id: steam_id.to_string(),
        })
    }
}

/// OS command used to hand a launch URI to the storefront client
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opener {
    /// `cmd /C start "" <uri>`
    Start,
    Open,
    XdgOpen,
}

impl Opener {
    pub fn for_os(os: &str) -> Result<Self, ConfigError> {
        match os {
            "windows" => Ok(Opener::Start),
            "macos" => Ok(Opener::Open),
            "linux" => Ok(Opener::XdgOpen),
            other => Err(ConfigError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            Opener::Start => "start",
            Opener::Open => "open",
            Opener::XdgOpen => "xdg-open",
        }
    }
}

/// Host facts resolved once at startup and passed by reference afterwards.
#[derive(Clone, Debug)]
pub struct SystemConfig {
    pub opener: Opener,
    pub steam_root: PathBuf,
    pub java_path: Option<PathBuf>,
    pub data_dir: PathBuf,
}

impl SystemConfig {
    pub fn detect(data_dir: PathBuf) -> Result<Self, ConfigError> {
        let os = std::env::consts::OS;
        let opener = Opener::for_os(os)?;
        let steam_root = paths::steam_root(os);
        let java_path = paths::find_java(os);

        log::debug!(
            "system config: opener={} steam_root={} java={:?}",
            opener.program(),
            steam_root.display(),
            java_path
        );

        Ok(Self {
            opener,
            steam_root,
            java_path,
            data_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_per_os() {
        assert_eq!(Opener::for_os("windows").unwrap(), Opener::Start);
        assert_eq!(Opener::for_os("macos").unwrap(), Opener::Open);
        assert_eq!(Opener::for_os("linux").unwrap().program(), "xdg-open");
    }

    #[test]
    fn opener_unsupported_os() {
        let err = Opener::for_os("haiku").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedPlatform(ref os) if os == "haiku"));
    }

    #[test]
    fn credentials_require_both_values() {
        let missing_key = Settings {
            steam_api_key: "  ".into(),
            steam_id: "7656".into(),
        };
        assert!(matches!(
            Credentials::from_settings(&missing_key),
            Err(ConfigError::MissingCredential("STEAM_API_KEY"))
        ));

        let missing_id = Settings {
            steam_api_key: "abc".into(),
            steam_id: String::new(),
        };
        assert!(matches!(
            Credentials::from_settings(&missing_id),
            Err(ConfigError::MissingCredential("STEAM_ID"))
        ));

        let ok = Settings {
            steam_api_key: " abc ".into(),
            steam_id: "7656".into(),
        };
        let creds = Credentials::from_settings(&ok).unwrap();
        assert_eq!(creds.api_key, "abc");
        assert_eq!(creds.steam_id, "7656");
    }
}
