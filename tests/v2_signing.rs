/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{self, BLOG};
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use hmac::{Hmac, Mac};
    use httpmock::HttpMockRequest;
    use httpmock::prelude::*;
    use sha1::Sha1;
    use std::collections::{BTreeMap, BTreeSet};
    use std::sync::{Arc, Mutex};
    use tumblr::v2::TextPostParams;

    fn enc(s: &str) -> String {
        urlencoding::encode(s).into_owned()
    }

    fn form_pairs(s: &str) -> Vec<(String, String)> {
        let decode = |x: &str| {
            urlencoding::decode(&x.replace('+', " "))
                .map(|v| v.into_owned())
                .unwrap_or_default()
        };
        s.split('&')
            .filter(|p| !p.is_empty())
            .map(|p| {
                let (k, v) = p.split_once('=').unwrap_or((p, ""));
                (decode(k), decode(v))
            })
            .collect()
    }

    fn header(req: &HttpMockRequest, name: &str) -> Option<String> {
        req.headers_vec()
            .into_iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }

    fn query(req: &HttpMockRequest) -> String {
        req.uri().query().unwrap_or_default().to_string()
    }

    fn body(req: &HttpMockRequest) -> String {
        let bytes: &[u8] = req.body().as_ref();
        String::from_utf8_lossy(bytes).into_owned()
    }

    // Fields of the `Authorization: OAuth ...` header, percent-decoded
    fn oauth_params(req: &HttpMockRequest) -> Option<BTreeMap<String, String>> {
        let header = header(req, "authorization")?;
        let fields = header.strip_prefix("OAuth ")?;
        Some(
            fields
                .split(',')
                .filter_map(|f| f.trim().split_once('='))
                .map(|(k, v)| {
                    let v = urlencoding::decode(v.trim_matches('"'))
                        .map(|v| v.into_owned())
                        .unwrap_or_default();
                    (k.to_string(), v)
                })
                .collect(),
        )
    }

    // Rebuilds the HMAC-SHA1 signature from what arrived at the server
    fn expected_signature(
        req: &HttpMockRequest,
        method: &str,
        base_url: &str,
        oauth: &BTreeMap<String, String>,
    ) -> String {
        let mut params: Vec<(String, String)> = oauth
            .iter()
            .filter(|(k, _)| k.as_str() != "oauth_signature" && k.as_str() != "realm")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        params.extend(form_pairs(&query(req)));
        let is_form = header(req, "content-type")
            .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));
        if is_form {
            params.extend(form_pairs(&body(req)));
        }
        let mut encoded: Vec<(String, String)> =
            params.iter().map(|(k, v)| (enc(k), enc(v))).collect();
        encoded.sort();
        let normalized = encoded
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method,
            enc(&format!("{base_url}{}", req.uri().path())),
            enc(&normalized)
        );
        let creds = helpers::test_credentials();
        let key = format!("{}&{}", enc(&creds.consumer_secret), enc(&creds.token_secret));
        let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes()).unwrap();
        mac.update(base_string.as_bytes());
        STANDARD.encode(mac.finalize().into_bytes())
    }

    // Matches only requests whose signature verifies, recording each nonce seen
    fn signed_by_test_credentials(
        method: &'static str,
        base_url: String,
        nonces: Arc<Mutex<BTreeSet<String>>>,
    ) -> impl Fn(&HttpMockRequest) -> bool + Send + Sync + 'static {
        move |req: &HttpMockRequest| {
            let Some(oauth) = oauth_params(req) else {
                return false;
            };
            let fields_ok = oauth.get("oauth_consumer_key").map(String::as_str)
                == Some("consumer-key")
                && oauth.get("oauth_token").map(String::as_str) == Some("access-token")
                && oauth.get("oauth_signature_method").map(String::as_str) == Some("HMAC-SHA1")
                && oauth.contains_key("oauth_timestamp");
            let Some(nonce) = oauth.get("oauth_nonce") else {
                return false;
            };
            let Some(signature) = oauth.get("oauth_signature") else {
                return false;
            };
            let valid =
                fields_ok && *signature == expected_signature(req, method, &base_url, &oauth);
            if valid {
                nonces.lock().unwrap().insert(nonce.clone());
            }
            valid
        }
    }

    fn carries_no_oauth(req: &HttpMockRequest) -> bool {
        header(req, "authorization").is_none()
            && !query(req).contains("oauth_")
            && !body(req).contains("oauth_")
    }

    #[tokio::test]
    async fn get_signature_is_recomputable() {
        let server = MockServer::start_async().await;
        let nonces = Arc::new(Mutex::new(BTreeSet::new()));
        let matcher = signed_by_test_credentials("GET", server.base_url(), nonces.clone());
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(format!("/v2/blog/{BLOG}/likes"))
                    .query_param("limit", "10")
                    .is_true(matcher);
                then.status(200);
            })
            .await;

        let client = helpers::signed_client(&server.base_url());
        let resp = client.get_blog_likes(&[("limit", "10")]).await.unwrap();
        assert_eq!(resp.status(), 200);
        mock.assert_hits_async(1).await;
        assert_eq!(nonces.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn post_signature_covers_form_body() {
        let server = MockServer::start_async().await;
        let nonces = Arc::new(Mutex::new(BTreeSet::new()));
        let matcher = signed_by_test_credentials("POST", server.base_url(), nonces);
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("/v2/blog/{BLOG}/post"))
                    .form_urlencoded_tuple("title", "hello")
                    .form_urlencoded_tuple("body", "hows it going")
                    .is_true(matcher);
                then.status(201);
            })
            .await;

        let client = helpers::signed_client(&server.base_url());
        let resp = client
            .create_text_post(TextPostParams::new("hows it going").with_title("hello"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn every_request_gets_a_fresh_nonce() {
        let server = MockServer::start_async().await;
        let nonces = Arc::new(Mutex::new(BTreeSet::new()));
        let matcher = signed_by_test_credentials("GET", server.base_url(), nonces.clone());
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(format!("/v2/blog/{BLOG}/info"))
                    .is_true(matcher);
                then.status(200);
            })
            .await;

        let client = helpers::signed_client(&server.base_url());
        for _ in 0..3 {
            client.get_blog_info().await.unwrap();
        }
        mock.assert_hits_async(3).await;
        assert_eq!(nonces.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unsigned_requests_carry_no_oauth() {
        let server = MockServer::start_async().await;
        let info = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(format!("/v2/blog/{BLOG}/info"))
                    .is_true(carries_no_oauth);
                then.status(200);
            })
            .await;
        let post = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("/v2/blog/{BLOG}/post"))
                    .form_urlencoded_tuple("body", "plain")
                    .is_true(carries_no_oauth);
                then.status(201);
            })
            .await;

        let client = helpers::unsigned_client(&server.base_url());
        client.get_blog_info().await.unwrap();
        client
            .create_text_post(TextPostParams::new("plain"))
            .await
            .unwrap();
        info.assert_hits_async(1).await;
        post.assert_hits_async(1).await;
    }
}
