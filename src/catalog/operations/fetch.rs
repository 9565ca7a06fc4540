//! Steam Web API client
//!
//! Fetches the account's owned games as a catalog. Failures are reported to
//! the caller, which treats them as "no new data".

use crate::catalog::types::Catalog;
use crate::config::Credentials;
use crate::error::FetchError;

use serde::Deserialize;
use std::time::Duration;

pub const OWNED_GAMES_URL: &str =
    "https://api.steampowered.com/IPlayerService/GetOwnedGames/v0001/";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote source of catalog entries
pub trait CatalogFetcher {
    fn fetch_owned(&self) -> Result<Catalog, FetchError>;
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnedGamesEnvelope {
    #[serde(default)]
    response: OwnedGames,
}

/// `games` is absent for private profiles.
#[derive(Debug, Default, Deserialize)]
struct OwnedGames {
    #[serde(default)]
    games: Vec<OwnedGame>,
}

#[derive(Debug, Deserialize)]
struct OwnedGame {
    appid: u64,
    #[serde(default)]
    name: String,
}

impl OwnedGamesEnvelope {
    pub(crate) fn into_catalog(self) -> Catalog {
        self.response
            .games
            .into_iter()
            .filter(|g| !g.name.trim().is_empty())
            .map(|g| (g.name, g.appid.to_string()))
            .collect()
    }
}

pub struct SteamWebApi {
    credentials: Credentials,
    client: reqwest::blocking::Client,
}

impl SteamWebApi {
    pub fn new(credentials: Credentials) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent("gamelaunch")
            .build()?;
        Ok(Self {
            credentials,
            client,
        })
    }
}

impl CatalogFetcher for SteamWebApi {
    fn fetch_owned(&self) -> Result<Catalog, FetchError> {
        log::debug!("fetching owned games for {}", self.credentials.steam_id);

        let response = self
            .client
            .get(OWNED_GAMES_URL)
            .query(&[
                ("key", self.credentials.api_key.as_str()),
                ("steamid", self.credentials.steam_id.as_str()),
                ("format", "json"),
                ("include_appinfo", "1"),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let envelope: OwnedGamesEnvelope = response.json()?;
        let catalog = envelope.into_catalog();
        log::info!("Steam reported {} owned games", catalog.len());
        Ok(catalog)
    }
}

/// Canned fetch results; counts how often it was asked.
#[cfg(test)]
pub struct StubFetcher {
    owned: Option<Catalog>,
    pub calls: std::cell::Cell<usize>,
}

#[cfg(test)]
impl StubFetcher {
    pub fn owning(entries: &[(&str, &str)]) -> Self {
        Self {
            owned: Some(entries.iter().copied().collect()),
            calls: std::cell::Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            owned: None,
            calls: std::cell::Cell::new(0),
        }
    }
}

#[cfg(test)]
impl CatalogFetcher for StubFetcher {
    fn fetch_owned(&self) -> Result<Catalog, FetchError> {
        self.calls.set(self.calls.get() + 1);
        self.owned.clone().ok_or(FetchError::Status(503))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_games_become_lowercase_catalog() {
        let body = r#"{
            "response": {
                "game_count": 3,
                "games": [
                    { "appid": 646570, "name": "Slay the Spire", "playtime_forever": 4000 },
                    { "appid": 1145360, "name": "Hades" },
                    { "appid": 999, "name": "" }
                ]
            }
        }"#;
        let envelope: OwnedGamesEnvelope = serde_json::from_str(body).unwrap();
        let catalog = envelope.into_catalog();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("slay the spire"), Some("646570"));
        assert_eq!(catalog.get("hades"), Some("1145360"));
    }

    #[test]
    fn private_profile_is_empty() {
        let envelope: OwnedGamesEnvelope = serde_json::from_str(r#"{ "response": {} }"#).unwrap();
        assert!(envelope.into_catalog().is_empty());
    }
}
