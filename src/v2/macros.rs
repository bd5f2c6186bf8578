/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Applies per request headers and timeout. Works for both the plain and the
// signing request builders since they expose the same methods.
macro_rules! with_request_options {
    ( $req:expr, $options:expr ) => {{
        let mut req = $req;
        if let Some(options) = $options {
            for (name, value) in &options.headers {
                req = req.header(name.as_str(), value.as_str());
            }
            if let Some(timeout) = options.timeout {
                req = req.timeout(timeout);
            }
        }
        req
    }};
}

pub(crate) use with_request_options;
