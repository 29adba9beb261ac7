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
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The host operating system is not one we have flags for.
    /// There is no sensible default, so this always aborts configuration.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Can't read flag overrides from the environment")]
    Overrides(#[from] config::ConfigError),

    #[error("Can't serialize flag set")]
    Json(#[from] serde_json::Error),

    #[error("Can't write flag set")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
