/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Tumblr
//!
//! A small client for the Tumblr APIv2 interface.
//!
//! For further details on the Rest API refer to the [Tumblr API Docs](https://www.tumblr.com/docs/en/api/v2)
//!
//! ## Features
//!
//! - Blog information, avatar, likes, followers and posts (by type, queue, drafts, submissions)
//! - User information, dashboard, following and likes
//! - Tagged posts
//! - Create, edit, reblog and delete posts
//! - Follow/unfollow blogs and like/unlike posts
//! - Lower level interface for sending any request to the API
//!
//! *The Tumblr API uses OAuth1. This library handles the request signing.
//! Getting the Access Token/Secret is left up to the consumer of this library*
//!
//! Responses are returned as-is. The [`v2::Envelope`] type can be used to decode
//! the `{meta, response}` body when wanted.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tumblr::v2::{BlogPostType, Client, ClientOptions, Credentials, Envelope};
//!
//! async fn photo_posts(
//!     api_key: &str,
//!     api_secret: &str,
//!     access_token: &str,
//!     access_token_secret: &str,
//! ) -> anyhow::Result<()> {
//!     let options = ClientOptions::default().with_credentials(Credentials::new(
//!         api_key,
//!         api_secret,
//!         access_token,
//!         access_token_secret,
//!     ));
//!     let client = Client::new("staff.tumblr.com", options)?;
//!
//!     let resp = client
//!         .get_blog_posts(Some(BlogPostType::Photo), &[("limit", "5")])
//!         .await?;
//!     let body = Envelope::<serde_json::Value>::from_response(resp).await?;
//!     println!("{} {:?}", body.meta.status, body.response);
//!     Ok(())
//! }
//! ```
//!
pub mod v2;
