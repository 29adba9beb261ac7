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
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The document handed to the downstream build: a single `vars` map
/// whose keys are fixed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSet {
    pub vars: FlagVars,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagVars {
    /// Link flags for the native audio backend.
    #[serde(rename = "MOON_RODIO_CC_LINK_FLAGS")]
    pub cc_link_flags: String,
    /// Compile flags for the FFmpeg decoder; empty when it is unavailable.
    #[serde(rename = "MOON_RODIO_FFMPEG_CC_FLAGS")]
    pub ffmpeg_cc_flags: String,
    /// Link flags for the FFmpeg decoder; empty when it is unavailable.
    #[serde(rename = "MOON_RODIO_FFMPEG_CC_LINK_FLAGS")]
    pub ffmpeg_cc_link_flags: String,
}

impl FlagSet {
    pub fn ffmpeg_enabled(&self) -> bool {
        !self.vars.ffmpeg_cc_flags.is_empty()
    }

    /// Write the set as one line of JSON (or indented JSON if `pretty`),
    /// followed by a newline.
    pub fn write_json<W: Write>(&self, mut out: W, pretty: bool) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }
}
