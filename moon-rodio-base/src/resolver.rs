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
use log::{debug, info};

use crate::flags::{FlagSet, FlagVars};
use crate::overrides::Overrides;
use crate::platform::HostPlatform;
use crate::probe::{Probe, FFMPEG_PACKAGES};

/// Appended to the decoder compile flags whenever the decoder is available.
pub const FFMPEG_DEFINE: &str = "-DMOON_RODIO_HAS_FFMPEG";

/// Computes the flag set for one build invocation.  The probe is only
/// consulted on Linux, and only when no overrides are given.
#[derive(Clone, Debug)]
pub struct FlagResolver<P: Probe> {
    probe: P,
}

impl<P: Probe> FlagResolver<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    pub fn resolve_base_link_flags(&self, platform: HostPlatform) -> &'static str {
        platform.base_link_flags()
    }

    /// Returns (compile flags, link flags) for the optional FFmpeg decoder,
    /// both empty when it is unavailable.
    pub fn resolve_optional_feature_flags(
        &self,
        platform: HostPlatform,
        overrides: &Overrides,
    ) -> (String, String) {
        if let Some((cflags, libs)) = overrides.ffmpeg_flags() {
            info!("Using FFmpeg flags from the environment");
            return (with_ffmpeg_define(cflags), libs.to_string());
        }
        if platform != HostPlatform::Linux {
            debug!("No FFmpeg probe on {}", platform);
            return (String::new(), String::new());
        }
        match self.probe.probe(&FFMPEG_PACKAGES) {
            Some(found) => (with_ffmpeg_define(&found.cflags), found.libs),
            None => {
                info!("FFmpeg libraries not found, decoder disabled");
                (String::new(), String::new())
            }
        }
    }

    pub fn resolve(&self, platform: HostPlatform, overrides: &Overrides) -> FlagSet {
        let (ffmpeg_cc_flags, ffmpeg_cc_link_flags) =
            self.resolve_optional_feature_flags(platform, overrides);
        FlagSet {
            vars: FlagVars {
                cc_link_flags: self.resolve_base_link_flags(platform).to_string(),
                ffmpeg_cc_flags,
                ffmpeg_cc_link_flags,
            },
        }
    }
}

fn with_ffmpeg_define(cflags: &str) -> String {
    if cflags.is_empty() {
        FFMPEG_DEFINE.to_string()
    } else {
        format!("{} {}", cflags, FFMPEG_DEFINE)
    }
}
