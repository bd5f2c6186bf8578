/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::TumblrError;
use crate::v2::macros::with_request_options;
use crate::v2::options::{ClientOptions, Credentials, RequestOptions};
use reqwest::redirect::Policy;
use reqwest_oauth1::{OAuthClientProvider, SecretsProvider};

/// Query or form parameters the specific API expects
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// Directly communicates with the API.
///
/// Responses are handed back untouched; interpreting the status and the JSON
/// envelope is up to the caller.
#[derive(Clone)]
pub struct ApiClient {
    creds: Option<Credentials>,
    base_url: url::Url,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Validates the options and builds the underlying http client
    pub fn new(options: &ClientOptions) -> Result<Self, TumblrError> {
        let base_url = options.validate()?;
        let https_client = reqwest::Client::builder()
            .timeout(options.timeout)
            .redirect(Policy::none())
            .user_agent(options.user_agent.as_str())
            .build()?;
        Ok(Self {
            creds: options.credentials.clone(),
            base_url,
            https_client,
        })
    }

    /// True when requests are signed
    pub fn is_signed(&self) -> bool {
        self.creds.is_some()
    }

    /// Absolute url for a resolved api path
    pub fn url_for(&self, path: &str) -> Result<url::Url, TumblrError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(url::Url::parse(&format!("{base}/{path}"))?)
    }

    /// Performs a get request with `params` sent as the query string
    pub async fn get(
        &self,
        path: &str,
        params: Option<&ApiParams<'_>>,
        options: Option<&RequestOptions>,
    ) -> Result<reqwest::Response, TumblrError> {
        let req_url = self.url_for(path)?;
        let params = params.unwrap_or_default();
        log::debug!("GET {} signed:{}", req_url.path(), self.is_signed());
        log::trace!("GET params {:?}", params);

        let resp = match &self.creds {
            Some(creds) => {
                let req = self
                    .https_client
                    .clone()
                    .oauth1(creds.clone())
                    .get(req_url)
                    .query(params);
                with_request_options!(req, options).send().await?
            }
            None => {
                let req = self.https_client.get(req_url).query(params);
                with_request_options!(req, options).send().await?
            }
        };
        log::debug!("GET {} -> {}", resp.url().path(), resp.status());
        Ok(resp)
    }

    /// Performs a post request with `params` sent as a form encoded body
    pub async fn post(
        &self,
        path: &str,
        params: Option<&ApiParams<'_>>,
        options: Option<&RequestOptions>,
    ) -> Result<reqwest::Response, TumblrError> {
        let req_url = self.url_for(path)?;
        let params = params.unwrap_or_default();
        log::debug!("POST {} signed:{}", req_url.path(), self.is_signed());
        log::trace!("POST params {:?}", params);

        let resp = match &self.creds {
            Some(creds) => {
                let req = self
                    .https_client
                    .clone()
                    .oauth1(creds.clone())
                    .post(req_url)
                    .form(&params.to_vec());
                with_request_options!(req, options).send().await?
            }
            None => {
                let req = self.https_client.post(req_url).form(params);
                with_request_options!(req, options).send().await?
            }
        };
        log::debug!("POST {} -> {}", resp.url().path(), resp.status());
        Ok(resp)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("signed", &self.is_signed())
            .finish()
    }
}

/// Combines fixed parameters with the caller's.
///
/// A caller value replaces a default with the same key. Keys keep the order
/// they first appeared in.
pub fn merge_params<'a>(
    defaults: &ApiParams<'a>,
    params: &ApiParams<'a>,
) -> Vec<(&'a str, &'a str)> {
    let mut merged: Vec<(&'a str, &'a str)> = Vec::with_capacity(defaults.len() + params.len());
    for &(key, value) in defaults.iter().chain(params.iter()) {
        match merged.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => merged.push((key, value)),
        }
    }
    merged
}

// Internally this makes it easier to pass into reqwest for signing
impl SecretsProvider for Credentials {
    fn get_consumer_key_pair<'a>(&'a self) -> (&'a str, &'a str) {
        (self.consumer_key.as_str(), self.consumer_secret.as_str())
    }

    fn get_token_pair_option<'a>(&'a self) -> Option<(&'a str, &'a str)> {
        Some((self.token.as_str(), self.token_secret.as_str()))
    }

    fn get_token_option_pair<'a>(&'a self) -> (Option<&'a str>, Option<&'a str>) {
        (Some(self.token.as_str()), Some(self.token_secret.as_str()))
    }
}
