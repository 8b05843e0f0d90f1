//! Read-only share triple.
//!
//! The core only exposes what to share: the triple itself, a plain share text, and the
//! share-intent link of each supported social site. Pushing it to a target (clipboard, browser)
//! is the client's business.

use crate::model::Post;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Social sites with a share-intent URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharePlatform {
    Twitter,
    Facebook,
    LinkedIn,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 3] = [
        SharePlatform::Twitter,
        SharePlatform::Facebook,
        SharePlatform::LinkedIn,
    ];

    /// The lowercase name accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "twitter",
            SharePlatform::Facebook => "facebook",
            SharePlatform::LinkedIn => "linkedin",
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SharePlatform::Twitter => "Twitter",
            SharePlatform::Facebook => "Facebook",
            SharePlatform::LinkedIn => "LinkedIn",
        };
        f.write_str(label)
    }
}

impl FromStr for SharePlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == name)
            .ok_or_else(|| {
                format!(
                    "Unknown platform '{}'. Expected twitter, facebook or linkedin.",
                    s.trim()
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareInfo {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareInfo {
    pub fn for_post(post: &Post, site_url: &str) -> Self {
        Self {
            title: post.title.clone(),
            text: post.snippet.clone(),
            url: site_url.to_string(),
        }
    }

    /// Plain text for targets that only take a string (e.g. the clipboard).
    pub fn to_share_text(&self) -> String {
        format!("Check out this article: {} - {}", self.title, self.text)
    }

    /// The share-intent link for `platform`, with title and url percent-encoded.
    pub fn platform_url(&self, platform: SharePlatform) -> String {
        let url = urlencoding::encode(&self.url);
        match platform {
            SharePlatform::Twitter => format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                urlencoding::encode(&self.title),
                url
            ),
            SharePlatform::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={}", url)
            }
            SharePlatform::LinkedIn => {
                format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url)
            }
        }
    }
}
