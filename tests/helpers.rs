/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use tumblr::v2::{Client, ClientOptions, Credentials};

pub(crate) const BLOG: &str = "hfht-vox-pop.tumblr.com";

#[allow(dead_code)]
pub(crate) fn test_credentials() -> Credentials {
    Credentials::new("consumer-key", "consumer-secret", "access-token", "token-secret")
}

#[allow(dead_code)]
pub(crate) fn signed_client(base_url: &str) -> Client {
    let options = ClientOptions::default()
        .with_base_url(base_url)
        .with_credentials(test_credentials());
    Client::new(BLOG, options).unwrap()
}

#[allow(dead_code)]
pub(crate) fn unsigned_client(base_url: &str) -> Client {
    Client::new(BLOG, ClientOptions::default().with_base_url(base_url)).unwrap()
}

#[allow(dead_code)]
pub(crate) fn get_full_auth_tokens() -> anyhow::Result<Credentials> {
    Ok(Credentials::new(
        &std::env::var("TUMBLR_CONSUMER_KEY")?,
        &std::env::var("TUMBLR_CONSUMER_SECRET")?,
        &std::env::var("TUMBLR_TOKEN")?,
        &std::env::var("TUMBLR_TOKEN_SECRET")?,
    ))
}

#[allow(dead_code)]
pub(crate) fn get_blog() -> String {
    std::env::var("TUMBLR_BLOG").unwrap_or_else(|_| BLOG.to_string())
}
