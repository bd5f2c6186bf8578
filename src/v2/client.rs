/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v2::api::{ApiClient, ApiParams, merge_params};
use crate::v2::endpoints::{Endpoints, GetEndpoint, PostEndpoint, validate_blog_identifier};
use crate::v2::errors::TumblrError;
use crate::v2::options::{ClientOptions, RequestOptions};
use crate::v2::properties::{AvatarSize, BlogPostType, TextPostParams};
use reqwest::Response;
use std::sync::Arc;

/// Client bound to a single blog.
///
/// Cloning is cheap and clones share the same connection pool.
///
/// ```rust,no_run
/// use tumblr::v2::{Client, ClientOptions, Credentials, TextPostParams};
///
/// # async fn run() -> Result<(), tumblr::v2::TumblrError> {
/// let options = ClientOptions::default()
///     .with_credentials(Credentials::new("key", "secret", "token", "token secret"));
/// let client = Client::new("staff.tumblr.com", options)?;
///
/// let info = client.get_blog_info().await?;
/// println!("{}", info.status());
///
/// client
///     .create_text_post(TextPostParams::new("hows it going").with_title("hello"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    blog_identifier: String,
    api_key: Option<String>,
    endpoints: Endpoints,
    api_client: ApiClient,
}

impl Client {
    /// Creates a client for `blog_identifier`.
    ///
    /// Fails if the blog identifier is not a single path segment or the options are invalid.
    pub fn new(blog_identifier: &str, options: ClientOptions) -> Result<Self, TumblrError> {
        validate_blog_identifier(blog_identifier)?;
        let api_client = ApiClient::new(&options)?;
        log::debug!(
            "Tumblr client for {} at {} signed:{}",
            blog_identifier,
            options.base_url,
            api_client.is_signed()
        );
        Ok(Self {
            inner: Arc::new(ClientInner {
                blog_identifier: blog_identifier.into(),
                api_key: options.effective_api_key().map(String::from),
                endpoints: Endpoints::resolve(blog_identifier),
                api_client,
            }),
        })
    }

    pub fn blog_identifier(&self) -> &str {
        &self.inner.blog_identifier
    }

    /// Paths resolved for this client's blog
    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }

    /// Sends a GET to `api_path` (relative to the base url)
    pub async fn make_get_request(
        &self,
        api_path: &str,
        params: Option<&ApiParams<'_>>,
        options: Option<&RequestOptions>,
    ) -> Result<Response, TumblrError> {
        self.inner.api_client.get(api_path, params, options).await
    }

    /// Sends a POST to `api_path` (relative to the base url)
    pub async fn make_post_request(
        &self,
        api_path: &str,
        params: Option<&ApiParams<'_>>,
        options: Option<&RequestOptions>,
    ) -> Result<Response, TumblrError> {
        self.inner.api_client.post(api_path, params, options).await
    }

    // `api_key` parameter, empty when no key is configured
    fn key_param(&self) -> Vec<(&str, &str)> {
        self.inner
            .api_key
            .as_deref()
            .map(|k| vec![("api_key", k)])
            .unwrap_or_default()
    }

    async fn get_endpoint(
        &self,
        endpoint: GetEndpoint,
        with_key: bool,
        params: &ApiParams<'_>,
    ) -> Result<Response, TumblrError> {
        let path = self.endpoints().get(endpoint);
        self.get_path(path, with_key, params).await
    }

    async fn get_path(
        &self,
        path: &str,
        with_key: bool,
        params: &ApiParams<'_>,
    ) -> Result<Response, TumblrError> {
        let defaults = if with_key { self.key_param() } else { Vec::new() };
        let merged = merge_params(&defaults, params);
        self.make_get_request(path, Some(merged.as_slice()), None).await
    }

    async fn post_endpoint(
        &self,
        endpoint: PostEndpoint,
        params: &ApiParams<'_>,
    ) -> Result<Response, TumblrError> {
        let path = self.endpoints().post(endpoint);
        self.make_post_request(path, Some(params), None).await
    }

    /// Returns general information about the blog
    pub async fn get_blog_info(&self) -> Result<Response, TumblrError> {
        self.get_endpoint(GetEndpoint::BlogInfo, true, &[]).await
    }

    /// Returns the blog avatar, optionally at a specific size
    pub async fn get_blog_avatar(&self, size: Option<AvatarSize>) -> Result<Response, TumblrError> {
        let base = self.endpoints().get(GetEndpoint::BlogAvatar);
        let path = match size {
            Some(size) => format!("{base}/{}", size.pixels()),
            None => base.to_string(),
        };
        self.get_path(&path, false, &[]).await
    }

    /// Returns the posts the blog has liked
    pub async fn get_blog_likes(&self, params: &ApiParams<'_>) -> Result<Response, TumblrError> {
        self.get_endpoint(GetEndpoint::BlogLikes, true, params).await
    }

    /// Returns the blog's followers. Requires credentials for a blog you own.
    pub async fn get_blog_followers(
        &self,
        params: &ApiParams<'_>,
    ) -> Result<Response, TumblrError> {
        self.get_endpoint(GetEndpoint::BlogFollowers, false, params).await
    }

    /// Returns published posts, filtered to `post_type` when given
    pub async fn get_blog_posts(
        &self,
        post_type: Option<BlogPostType>,
        params: &ApiParams<'_>,
    ) -> Result<Response, TumblrError> {
        let base = self.endpoints().get(GetEndpoint::BlogPosts);
        let path = match post_type {
            Some(post_type) => format!("{base}/{post_type}"),
            None => base.to_string(),
        };
        self.get_path(&path, true, params).await
    }

    pub async fn get_blog_queue(&self, params: &ApiParams<'_>) -> Result<Response, TumblrError> {
        self.get_endpoint(GetEndpoint::BlogQueue, false, params).await
    }

    pub async fn get_blog_drafts(&self, params: &ApiParams<'_>) -> Result<Response, TumblrError> {
        self.get_endpoint(GetEndpoint::BlogDrafts, false, params).await
    }

    pub async fn get_blog_submissions(
        &self,
        params: &ApiParams<'_>,
    ) -> Result<Response, TumblrError> {
        self.get_endpoint(GetEndpoint::BlogSubmissions, false, params).await
    }

    /// Returns information about the authenticated user
    pub async fn get_user_info(&self) -> Result<Response, TumblrError> {
        self.get_endpoint(GetEndpoint::UserInfo, false, &[]).await
    }

    pub async fn get_user_dashboard(
        &self,
        params: &ApiParams<'_>,
    ) -> Result<Response, TumblrError> {
        self.get_endpoint(GetEndpoint::UserDashboard, false, params).await
    }

    pub async fn get_user_following(
        &self,
        params: &ApiParams<'_>,
    ) -> Result<Response, TumblrError> {
        self.get_endpoint(GetEndpoint::UserFollowing, false, params).await
    }

    pub async fn get_user_likes(&self, params: &ApiParams<'_>) -> Result<Response, TumblrError> {
        self.get_endpoint(GetEndpoint::UserLikes, false, params).await
    }

    /// Returns posts across all blogs carrying `tag`
    pub async fn get_tagged_posts(
        &self,
        tag: &str,
        params: &ApiParams<'_>,
    ) -> Result<Response, TumblrError> {
        let params = merge_params(&[("tag", tag)], params);
        self.get_endpoint(GetEndpoint::TaggedPosts, true, &params).await
    }

    /// Creates a text post. Title and body are sent as given.
    pub async fn create_text_post(&self, post: TextPostParams) -> Result<Response, TumblrError> {
        let mut params = vec![("type", "text")];
        if let Some(title) = post.title.as_deref() {
            params.push(("title", title));
        }
        params.push(("body", post.body.as_str()));
        self.post_endpoint(PostEndpoint::CreatePost, &params).await
    }

    /// Creates a post of any type from raw fields
    pub async fn create_post(&self, params: &ApiParams<'_>) -> Result<Response, TumblrError> {
        self.post_endpoint(PostEndpoint::CreatePost, params).await
    }

    pub async fn edit_post(
        &self,
        id: &str,
        params: &ApiParams<'_>,
    ) -> Result<Response, TumblrError> {
        let params = merge_params(&[("id", id)], params);
        self.post_endpoint(PostEndpoint::EditPost, &params).await
    }

    pub async fn reblog_post(
        &self,
        id: &str,
        reblog_key: &str,
        params: &ApiParams<'_>,
    ) -> Result<Response, TumblrError> {
        let params = merge_params(&[("id", id), ("reblog_key", reblog_key)], params);
        self.post_endpoint(PostEndpoint::ReblogPost, &params).await
    }

    pub async fn delete_post(&self, id: &str) -> Result<Response, TumblrError> {
        self.post_endpoint(PostEndpoint::DeletePost, &[("id", id)]).await
    }

    /// Follows the blog at `url` as the authenticated user
    pub async fn follow_blog(&self, url: &str) -> Result<Response, TumblrError> {
        self.post_endpoint(PostEndpoint::FollowBlog, &[("url", url)]).await
    }

    pub async fn unfollow_blog(&self, url: &str) -> Result<Response, TumblrError> {
        self.post_endpoint(PostEndpoint::UnfollowBlog, &[("url", url)]).await
    }

    pub async fn like_post(&self, id: &str, reblog_key: &str) -> Result<Response, TumblrError> {
        self.post_endpoint(PostEndpoint::LikePost, &[("id", id), ("reblog_key", reblog_key)])
            .await
    }

    pub async fn unlike_post(&self, id: &str, reblog_key: &str) -> Result<Response, TumblrError> {
        self.post_endpoint(PostEndpoint::UnlikePost, &[("id", id), ("reblog_key", reblog_key)])
            .await
    }
}
