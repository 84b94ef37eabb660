//! Blog post records and detection of posts that should notify subscribers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::share::post_url;

/// Action tag sent with every new-post notification.
pub const NEW_POST_ACTION: &str = "new_post";

/// A post as stored in `blog.json`. Fields the tooling does not use are
/// ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: serde_json::Value,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

/// Returns the current posts that subscribers have not been told about.
///
/// A post qualifies when it is published now and either did not exist in
/// `previous` (matched by id) or was a draft there. Edits to posts that were
/// already published never qualify. Order follows `current`.
pub fn posts_to_notify<'a>(previous: &Blog, current: &'a Blog) -> Vec<&'a BlogPost> {
    let previous_by_id: HashMap<String, &BlogPost> = previous
        .posts
        .iter()
        .map(|post| (post.id.to_string(), post))
        .collect();

    current
        .posts
        .iter()
        .filter(|post| post.published)
        .filter(|post| match previous_by_id.get(&post.id.to_string()) {
            None => true,
            Some(earlier) => !earlier.published,
        })
        .collect()
}

/// JSON body of a subscriber notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub action: String,
    pub title: String,
    pub summary: String,
    pub link: String,
}

impl NotificationPayload {
    pub fn new_post(post: &BlogPost, site_url: &str) -> Self {
        Self {
            action: NEW_POST_ACTION.to_string(),
            title: post.title.clone(),
            summary: post.excerpt.clone(),
            link: post_url(site_url, &post.slug),
        }
    }
}
