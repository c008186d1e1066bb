// crates/trails-core/src/client.rs

//! Blocking HTTP transport for the two backend endpoints.

use reqwest::blocking::Client;

use crate::config::Config;
use crate::error::{Result, TrailsError};
use crate::model::{Place, PlacesResponse};

/// Thin wrapper over a blocking [`reqwest`] client bound to one backend.
///
/// No timeout is configured; requests rely on the transport's defaults. The
/// client is cheap to clone and carries no mutable state of its own - all
/// view state lives in [`crate::Explorer`].
#[derive(Clone, Debug)]
pub struct TrailsClient {
    http: Client,
    config: Config,
}

impl TrailsClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Base address this client talks to.
    pub fn backend_url(&self) -> &str {
        &self.config.backend_url
    }

    /// `GET /places` — fetches the full collection.
    ///
    /// Non-success statuses become [`TrailsError::Load`] carrying the status
    /// code. A body that is not valid JSON fails the load; a valid body with
    /// a missing or malformed `items` member yields an empty collection.
    pub fn fetch_places(&self) -> Result<Vec<Place>> {
        let response = self.http.get(self.config.places_url()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(TrailsError::Load {
                status: status.as_u16(),
            });
        }
        parse_places_body(&response.text()?)
    }

    /// `POST /seed` — asks the backend to (re)create its demo data.
    ///
    /// Non-success statuses become the unqualified [`TrailsError::Seed`];
    /// callers refresh the collection afterwards via
    /// [`fetch_places`](Self::fetch_places).
    pub fn seed(&self) -> Result<()> {
        let response = self.http.post(self.config.seed_url()).send()?;
        if !response.status().is_success() {
            return Err(TrailsError::Seed);
        }
        Ok(())
    }
}

/// Parses a `/places` response body into the place collection.
///
/// Split out of [`TrailsClient::fetch_places`] so the envelope handling is
/// testable without a running backend. The body must be valid JSON; beyond
/// that, anything that does not decode as a [`PlacesResponse`] (missing or
/// malformed `items`) yields an empty collection.
pub fn parse_places_body(body: &str) -> Result<Vec<Place>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let response: PlacesResponse = serde_json::from_value(value).unwrap_or_default();
    Ok(response.items)
}
