//! Catalog lookup types

use serde::{Deserialize, Serialize};

/// Normalized external lookup result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    /// Year as reported by the upstream (series report ranges like "2016-2018")
    pub year: String,
    pub genre: String,
    pub imdb_id: String,
    /// `false` when the upstream explicitly reported no match
    pub found: bool,
}

/// Raw upstream response shape
///
/// The catalog answers `Response: "False"` for a miss, with the data fields
/// absent; on a hit every field is present.
#[derive(Debug, Deserialize)]
pub(crate) struct LookupResponse {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
}

impl From<LookupResponse> for CatalogEntry {
    fn from(raw: LookupResponse) -> Self {
        let found = raw.response != "False";
        Self {
            title: raw.title.unwrap_or_default(),
            year: raw.year.unwrap_or_default(),
            genre: raw.genre.unwrap_or_default(),
            imdb_id: raw.imdb_id.unwrap_or_default(),
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hit() {
        let raw: LookupResponse = serde_json::from_str(
            r#"{
                "Title": "Guardians of the Galaxy Vol. 2",
                "Year": "2017",
                "Genre": "Action, Adventure, Comedy",
                "imdbID": "tt3896198",
                "Response": "True"
            }"#,
        )
        .unwrap();

        let entry = CatalogEntry::from(raw);
        assert!(entry.found);
        assert_eq!(entry.title, "Guardians of the Galaxy Vol. 2");
        assert_eq!(entry.imdb_id, "tt3896198");
        assert_eq!(entry.year, "2017");
    }

    #[test]
    fn test_parse_miss() {
        let raw: LookupResponse = serde_json::from_str(
            r#"{"Response": "False", "Error": "Movie not found!"}"#,
        )
        .unwrap();

        let entry = CatalogEntry::from(raw);
        assert!(!entry.found);
        assert!(entry.title.is_empty());
    }
}
