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

pub use error::{Error, Result};
pub use flags::{FlagSet, FlagVars};
pub use overrides::Overrides;
pub use platform::HostPlatform;
pub use probe::{NoProbe, PkgConfig, Probe, ProbeResult, FFMPEG_PACKAGES};
pub use resolver::{FlagResolver, FFMPEG_DEFINE};

mod error;
mod flags;
mod overrides;
mod platform;
mod probe;
mod resolver;

/// Resolve the flag set for `platform` and write it to `out` as JSON.
/// Nothing is written unless resolution completes.
pub fn emit<P: Probe, W: Write>(
    out: W,
    platform: HostPlatform,
    overrides: &Overrides,
    probe: P,
    pretty: bool,
) -> Result<FlagSet> {
    let set = FlagResolver::new(probe).resolve(platform, overrides);
    set.write_json(out, pretty)?;
    Ok(set)
}
