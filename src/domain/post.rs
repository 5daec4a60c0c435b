use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One scraped Instagram post as written by the ingestion step.
///
/// The curator treats records as read-only: they are moved between category
/// lists but never modified, and fields the curator does not know about are
/// carried through untouched in `extra`. A `null` caption, like count or date
/// is normalized to `""`/`0` on load and written back that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Downloaded image file name, the primary identifier.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub local_filename: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcode: Option<String>,

    #[serde(rename = "caption", default, deserialize_with = "null_as_default")]
    pub text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u64,

    /// ISO-8601 timestamp; empty when the scraper could not read one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostRecord {
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            local_filename: identifier.into(),
            shortcode: None,
            text: text.into(),
            likes: 0,
            date: String::new(),
            image_url: None,
            post_url: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_likes(mut self, likes: u64) -> Self {
        self.likes = likes;
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Stable identifier: the local file name, or the shortcode for posts
    /// whose image was never downloaded. Empty when neither is known.
    pub fn identifier(&self) -> &str {
        if self.local_filename.is_empty() {
            self.shortcode.as_deref().unwrap_or("")
        } else {
            &self.local_filename
        }
    }

    pub fn has_identifier(&self) -> bool {
        !self.identifier().is_empty()
    }

    /// Image reference for the simplified report. Older consumers only
    /// understand URLs, so the identifier is used when no URL was scraped.
    pub fn image_ref(&self) -> &str {
        self.image_url.as_deref().unwrap_or_else(|| self.identifier())
    }

    /// Caption truncated to `max_chars` characters.
    pub fn caption_preview(&self, max_chars: usize) -> String {
        self.text.chars().take(max_chars).collect()
    }
}

// The scrapers write `null` for captions and dates they could not read.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
