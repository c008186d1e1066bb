// crates/trails-core/src/model.rs

use serde::{Deserialize, Serialize};

/// One heritage/tourism site entry as served by the backend.
///
/// Places are immutable snapshots: the client never mutates a field, and the
/// whole collection is replaced wholesale on every reload. Only `name` and
/// `category` are guaranteed by the backend; every other field is rendered
/// defensively, so absence must never fail deserialization.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Place {
    /// Backend identifier. Some deployments serve Mongo-style `_id`.
    #[serde(default, alias = "_id")]
    pub id: Option<String>,

    #[serde(default)]
    pub name: String,

    /// Single category label, e.g. "Palace" or "Ruins".
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Short free-form labels, e.g. "unesco", "hoysala".
    #[serde(default)]
    pub tags: Vec<String>,

    /// Era label, e.g. "14th century".
    #[serde(default)]
    pub era: Option<String>,

    /// Image URLs; the first one is the card thumbnail.
    #[serde(default)]
    pub images: Vec<String>,

    /// Display string, not parsed.
    #[serde(default)]
    pub opening_hours: Option<String>,
}

impl Place {
    /// Stable display key: the backend id, falling back to the name.
    pub fn display_key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

/// Envelope returned by `GET /places`.
///
/// A missing `items` member deserializes to an empty collection rather than
/// an error; the rest of the pipeline treats that the same as an empty
/// backend.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub items: Vec<Place>,
}
