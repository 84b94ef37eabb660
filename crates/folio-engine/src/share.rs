//! Share links for blog posts.

use serde::{Deserialize, Serialize};

/// Platforms with a web share intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Facebook,
    Twitter,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 2] = [SharePlatform::Facebook, SharePlatform::Twitter];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "facebook" => Some(SharePlatform::Facebook),
            "twitter" | "x" => Some(SharePlatform::Twitter),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SharePlatform::Facebook => "facebook",
            SharePlatform::Twitter => "twitter",
        }
    }
}

/// The in-site address of a blog post: `<site>/#blog/<slug>`.
pub fn post_url(site_url: &str, slug: &str) -> String {
    format!("{}/#blog/{slug}", site_url.trim_end_matches('/'))
}

/// Builds the share-intent URL for a post on `platform`.
pub fn share_link(platform: SharePlatform, site_url: &str, slug: &str, title: &str) -> String {
    let url = post_url(site_url, slug);
    let url = urlencoding::encode(&url);
    match platform {
        SharePlatform::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        SharePlatform::Twitter => {
            let text = urlencoding::encode(title);
            format!("https://twitter.com/intent/tweet?url={url}&text={text}")
        }
    }
}
