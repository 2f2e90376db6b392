use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("Place URL must not be empty")]
    EmptyUrl,
}

/// A history candidate as handed over by a producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub url: String,
    pub title: Option<String>,
    pub visit_count: u32,
    pub last_visit: Option<DateTime<Utc>>,
}

impl Place {
    /// Validate a raw candidate record into a Place.
    ///
    /// The URL is trimmed; blank titles are treated as missing.
    pub fn new(
        url: impl Into<String>,
        title: Option<String>,
        visit_count: u32,
        last_visit: Option<DateTime<Utc>>,
    ) -> Result<Self, PlaceError> {
        let url = url.into().trim().to_string();
        if url.is_empty() {
            return Err(PlaceError::EmptyUrl);
        }

        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Place {
            url,
            title,
            visit_count,
            last_visit,
        })
    }

    /// Title and URL lowercased, the text query terms are matched against.
    pub fn searchable_text(&self) -> String {
        match &self.title {
            Some(title) => format!("{} {}", title, self.url).to_lowercase(),
            None => self.url.to_lowercase(),
        }
    }
}
