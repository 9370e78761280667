//! Catalogue record types and their JSON resource envelopes.

use serde::{Deserialize, Deserializer};

/// A record with a stable unique identifier.
pub trait Record {
    /// The key this record is stored under.
    fn id(&self) -> &str;
}

/// An artist entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub bio: String,
    /// Portrait image reference
    pub portrait: String,
}

/// An exhibition entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Exhibition {
    pub id: String,
    /// Title, which may embed a year token (e.g. "Venice Biennale 2009")
    pub title: String,
    pub description: String,
    /// Image references in display order; never empty once validated
    pub images: Vec<String>,
    /// Explicit year, taking precedence over any year in the title
    #[serde(default, deserialize_with = "year_from_string_or_int")]
    pub year: Option<String>,
}

impl Record for Artist {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Exhibition {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of the artists resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistsResource {
    pub artists: Vec<Artist>,
}

/// Body of the exhibitions resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ExhibitionsResource {
    pub exhibitions: Vec<Exhibition>,
}

fn year_from_string_or_int<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Text(String),
        Number(u32),
    }

    Ok(match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Text(text)) => Some(text),
        Some(RawYear::Number(n)) => Some(n.to_string()),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhibition_year_accepts_string_and_number() {
        let text: Exhibition = serde_json::from_str(
            r#"{"id":"a","title":"A","description":"","images":["x.jpg"],"year":"1999"}"#,
        )
        .unwrap();
        assert_eq!(text.year.as_deref(), Some("1999"));

        let number: Exhibition = serde_json::from_str(
            r#"{"id":"b","title":"B","description":"","images":["x.jpg"],"year":2004}"#,
        )
        .unwrap();
        assert_eq!(number.year.as_deref(), Some("2004"));
    }

    #[test]
    fn test_exhibition_year_is_optional() {
        let ex: Exhibition = serde_json::from_str(
            r#"{"id":"a","title":"A","description":"d","images":["x.jpg"]}"#,
        )
        .unwrap();
        assert_eq!(ex.year, None);
    }

    #[test]
    fn test_artist_missing_field_is_rejected() {
        let result: Result<Artist, _> =
            serde_json::from_str(r#"{"id":"a","name":"A","bio":"b"}"#);
        assert!(result.is_err());
    }
}
