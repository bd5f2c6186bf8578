/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::TumblrError;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Placeholder substituted with the blog identifier when a client is built.
pub const BLOG_IDENTIFIER_PLACEHOLDER: &str = ":blogIdentifier";

/// Checks that `blog_identifier` fills exactly one path segment.
///
/// Separators, escapes, whitespace and dot segments would move the request to
/// another path once the url is parsed.
pub fn validate_blog_identifier(blog_identifier: &str) -> Result<(), TumblrError> {
    if blog_identifier.is_empty() {
        return Err(TumblrError::Config("blog identifier is empty".into()));
    }
    if blog_identifier == "." || blog_identifier == ".." {
        return Err(TumblrError::Config(format!(
            "blog identifier `{blog_identifier}` is a dot segment"
        )));
    }
    let bad = |c: char| {
        matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
    };
    match blog_identifier.chars().find(|&c| bad(c)) {
        Some(c) => Err(TumblrError::Config(format!("blog identifier contains {c:?}"))),
        None => Ok(()),
    }
}

/// Operations served with a GET request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum GetEndpoint {
    BlogInfo,
    BlogAvatar,
    BlogLikes,
    BlogFollowers,
    BlogPosts,
    BlogQueue,
    BlogDrafts,
    BlogSubmissions,
    UserInfo,
    UserDashboard,
    UserFollowing,
    UserLikes,
    TaggedPosts,
}

impl GetEndpoint {
    /// Path template for this operation
    pub const fn template(self) -> &'static str {
        match self {
            Self::BlogInfo => "/v2/blog/:blogIdentifier/info",
            Self::BlogAvatar => "/v2/blog/:blogIdentifier/avatar",
            Self::BlogLikes => "/v2/blog/:blogIdentifier/likes",
            Self::BlogFollowers => "/v2/blog/:blogIdentifier/followers",
            Self::BlogPosts => "/v2/blog/:blogIdentifier/posts",
            Self::BlogQueue => "/v2/blog/:blogIdentifier/posts/queue",
            Self::BlogDrafts => "/v2/blog/:blogIdentifier/posts/draft",
            Self::BlogSubmissions => "/v2/blog/:blogIdentifier/posts/submission",
            Self::UserInfo => "/v2/user/info",
            Self::UserDashboard => "/v2/user/dashboard",
            Self::UserFollowing => "/v2/user/following",
            Self::UserLikes => "/v2/user/likes",
            Self::TaggedPosts => "/v2/tagged",
        }
    }
}

/// Operations served with a POST request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PostEndpoint {
    CreatePost,
    EditPost,
    ReblogPost,
    DeletePost,
    FollowBlog,
    UnfollowBlog,
    LikePost,
    UnlikePost,
}

impl PostEndpoint {
    /// Path template for this operation
    pub const fn template(self) -> &'static str {
        match self {
            Self::CreatePost => "/v2/blog/:blogIdentifier/post",
            Self::EditPost => "/v2/blog/:blogIdentifier/post/edit",
            Self::ReblogPost => "/v2/blog/:blogIdentifier/post/reblog",
            Self::DeletePost => "/v2/blog/:blogIdentifier/post/delete",
            Self::FollowBlog => "/v2/user/follow",
            Self::UnfollowBlog => "/v2/user/unfollow",
            Self::LikePost => "/v2/user/like",
            Self::UnlikePost => "/v2/user/unlike",
        }
    }
}

/// Endpoint paths with the blog identifier already substituted.
///
/// Built once per [`crate::v2::Client`]; the static templates are only read.
/// Paths are stored in variant order and indexed by discriminant.
#[derive(Debug, Clone)]
pub struct Endpoints {
    get: Vec<String>,
    post: Vec<String>,
}

impl Endpoints {
    /// Resolves every template against the given blog identifier
    pub fn resolve(blog_identifier: &str) -> Self {
        let substitute =
            |template: &str| template.replace(BLOG_IDENTIFIER_PLACEHOLDER, blog_identifier);
        Self {
            get: GetEndpoint::iter().map(|e| substitute(e.template())).collect(),
            post: PostEndpoint::iter().map(|e| substitute(e.template())).collect(),
        }
    }

    pub fn get(&self, endpoint: GetEndpoint) -> &str {
        &self.get[endpoint as usize]
    }

    pub fn post(&self, endpoint: PostEndpoint) -> &str {
        &self.post[endpoint as usize]
    }
}
