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
mod cli;
mod logging;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::debug;
use moon_rodio_base::{emit, HostPlatform, NoProbe, Overrides, PkgConfig};

use cli::Opt;

fn main() -> Result<()> {
    let opt: Opt = Opt::parse();
    logging::init(opt.verbose)?;
    // an unknown platform must stop us before anything reaches stdout
    let platform = match &opt.platform {
        Some(id) => id.parse::<HostPlatform>()?,
        None => HostPlatform::current()?,
    };
    debug!("Configuring for {}", platform);
    let overrides = Overrides::from_env().wrap_err("Failed to read FFmpeg overrides")?;
    let stdout = std::io::stdout();
    let out = stdout.lock();
    let emitted = if opt.no_probe {
        emit(out, platform, &overrides, NoProbe, opt.pretty)
    } else {
        let probe = match opt.pkg_config {
            Some(tool) => PkgConfig::new(tool),
            None => PkgConfig::from_env(),
        };
        emit(out, platform, &overrides, probe, opt.pretty)
    };
    let set = emitted.wrap_err("Failed to emit build flags")?;
    debug!("FFmpeg decoder enabled: {}", set.ffmpeg_enabled());
    Ok(())
}
