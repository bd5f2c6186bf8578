/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
pub mod endpoints;
pub mod errors;
mod macros;
pub mod options;
pub mod properties;
pub mod response;

pub use api::*;
pub use client::*;
pub use endpoints::*;
pub use errors::*;
pub use options::*;
pub use properties::*;
pub use response::*;
