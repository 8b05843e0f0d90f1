//! Single post lookup for the preview.
//!
//! A miss is not an error: ids come from cards the user was shown, so a miss only happens
//! when the caller holds a stale id. Callers treat `None` as "do nothing".

use crate::model::{Post, PostId};
use serde::Serialize;
use std::sync::Arc;

pub fn find_by_id<'a>(posts: &'a [Arc<Post>], id: &PostId) -> Option<&'a Arc<Post>> {
    posts.iter().find(|p| p.id == *id)
}

/// Everything the preview shows, pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetail {
    pub id: PostId,
    pub title: String,
    pub author: String,
    pub date: String,
    pub category: String,
    pub image: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl PostDetail {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.clone(),
            date: post.formatted_date(),
            category: post.category.clone(),
            image: post.image_path(),
            body: post.body().to_string(),
            tags: post.tags.clone(),
        }
    }
}
