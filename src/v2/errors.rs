/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum TumblrError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Authorization error")]
    Auth(#[from] reqwest_oauth1::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),
}
