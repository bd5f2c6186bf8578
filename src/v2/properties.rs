/*
 * Copyright (c) 2025 tumblr-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Post types accepted by the posts endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum BlogPostType {
    Text,
    Quote,
    Link,
    Answer,
    Video,
    Audio,
    Photo,
    Chat,
}

/// Square avatar sizes in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum AvatarSize {
    Px16 = 16,
    Px24 = 24,
    Px30 = 30,
    Px40 = 40,
    Px48 = 48,
    Px64 = 64,
    Px96 = 96,
    Px128 = 128,
    Px512 = 512,
}

impl AvatarSize {
    pub fn pixels(self) -> u16 {
        self.into()
    }
}

/// Fields for a legacy text post
#[derive(Debug, Clone, Default)]
pub struct TextPostParams {
    pub title: Option<String>,
    pub body: String,
}

impl TextPostParams {
    pub fn new(body: &str) -> Self {
        Self {
            title: None,
            body: body.into(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.into());
        self
    }
}
