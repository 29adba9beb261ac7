/*
Copyright 2022 Daniel Brotsky. All rights reserved.

All of the copyrighted work in this repository is licensed under the
GNU Affero General Public License, reproduced in the LICENSE-AGPL file.

Attribution:

Some source files in this repository are derived from files in two Adobe Open
Source projects: the Adobe License Decoder repository found at this URL:
    https://github.com/adobe/adobe-license-decoder.rs
and the FRL Online Proxy repository found at this URL:
    https://github.com/adobe/frl-online-proxy

The files in those original works are copyright 2022 Adobe and the use of those
materials in this work is permitted by the MIT license under which they were
released.  That license is reproduced here in the LICENSE-MIT file.
*/
use config::{Config, Environment, Map};
use serde::Deserialize;

use crate::error::Result;

/// Externally supplied decoder flags.  They come from the environment
/// variables `MOON_RODIO_FFMPEG_CFLAGS` and `MOON_RODIO_FFMPEG_LIBS`.
/// Names are matched case-insensitively, so `moon_rodio_ffmpeg_cflags`
/// works too.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Overrides {
    #[serde(default)]
    pub ffmpeg_cflags: Option<String>,
    #[serde(default)]
    pub ffmpeg_libs: Option<String>,
}

impl Overrides {
    pub const ENV_PREFIX: &'static str = "MOON_RODIO";

    /// Read the overrides from the process environment.  Variables whose
    /// name or value isn't valid UTF-8 can't be overrides and are skipped.
    pub fn from_env() -> Result<Self> {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::from_vars(vars)
    }

    /// Read the overrides from a map of environment variables,
    /// as if it were the process environment.
    pub fn from_vars(vars: Map<String, String>) -> Result<Self> {
        let builder = Config::builder()
            .add_source(Environment::with_prefix(Self::ENV_PREFIX).source(Some(vars)));
        Ok(builder.build()?.try_deserialize()?)
    }

    /// The override (cflags, libs) pair, only when both are non-empty.
    pub fn ffmpeg_flags(&self) -> Option<(&str, &str)> {
        match (self.ffmpeg_cflags.as_deref(), self.ffmpeg_libs.as_deref()) {
            (Some(cflags), Some(libs)) if !cflags.is_empty() && !libs.is_empty() => {
                Some((cflags, libs))
            }
            _ => None,
        }
    }
}
