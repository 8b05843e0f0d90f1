use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Directory that post images are served from, relative to the site root.
pub const IMAGE_DIR: &str = "images";

/// A post identifier as found in the payload: either a JSON number or a string.
///
/// Comparison is strict, `PostId::Number(1)` and `PostId::Text("1")` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{}", n),
            PostId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// User input prefers the numeric form; anything else is a text id.
impl FromStr for PostId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(n) => PostId::Number(n),
            Err(_) => PostId::Text(s.to_string()),
        })
    }
}

impl From<i64> for PostId {
    fn from(n: i64) -> Self {
        PostId::Number(n)
    }
}

impl From<i32> for PostId {
    fn from(n: i32) -> Self {
        PostId::Number(n.into())
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        PostId::Text(s.to_string())
    }
}

/// One blog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub snippet: String,
    /// Long-form body; the snippet stands in when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub author: String,
    pub category: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub image: String,
}

impl Post {
    /// The body shown in the preview: `content` when present and non-empty, else the snippet.
    pub fn body(&self) -> &str {
        match self.content.as_deref() {
            Some(content) if !content.is_empty() => content,
            _ => &self.snippet,
        }
    }

    /// Long-form date, e.g. "March 4, 2024".
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    pub fn image_path(&self) -> String {
        format!("{}/{}", IMAGE_DIR, self.image)
    }
}
