/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::TumblrError;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Status block present in every API response
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    pub status: u16,
    pub msg: String,
}

/// Base response body returned from the API.
///
/// The client never decodes responses itself. This is here for callers that
/// want the `{meta, response}` envelope as typed data.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub meta: Meta,
    pub response: Option<T>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Reads the whole body and decodes it
    pub async fn from_response(resp: reqwest::Response) -> Result<Self, TumblrError> {
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl<T> Envelope<T> {
    /// Determine if the status in the envelope is a success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.meta.status)
    }
}
