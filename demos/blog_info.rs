/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate tumblr;

use anyhow::Result;
use dotenvy::dotenv;
use serde_json::Value;
use tumblr::v2::{Client, ClientOptions, Credentials, Envelope};

// Prints the blog info for TUMBLR_BLOG. Signs the request when the full set of
// TUMBLR_* tokens is present, otherwise sends TUMBLR_CONSUMER_KEY as api_key only.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let blog = std::env::var("TUMBLR_BLOG")?;
    let api_key = std::env::var("TUMBLR_CONSUMER_KEY")?;

    let mut options = ClientOptions::default().with_api_key(&api_key);
    if let (Ok(secret), Ok(token), Ok(token_secret)) = (
        std::env::var("TUMBLR_CONSUMER_SECRET"),
        std::env::var("TUMBLR_TOKEN"),
        std::env::var("TUMBLR_TOKEN_SECRET"),
    ) {
        let creds = Credentials::new(&api_key, &secret, &token, &token_secret);
        options = options.with_credentials(creds);
    }

    let client = Client::new(&blog, options)?;
    let resp = client.get_blog_info().await?;
    println!("HTTP {}", resp.status());

    let body = Envelope::<Value>::from_response(resp).await?;
    println!("{} {}", body.meta.status, body.meta.msg);
    if let Some(response) = body.response {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    Ok(())
}
