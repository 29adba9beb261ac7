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
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, long_about = None)]
/// moon_rodio build configuration
///
/// Prints the native compile and link flags for the moon_rodio audio
/// package as a JSON `vars` document.  The FFmpeg decoder flags come from
/// MOON_RODIO_FFMPEG_CFLAGS and MOON_RODIO_FFMPEG_LIBS if both are set,
/// otherwise from pkg-config on Linux.  The override names are matched
/// case-insensitively.
pub struct Opt {
    #[clap(long, value_name = "OS")]
    /// Configure for this OS (darwin, macos, linux, win32, windows)
    /// instead of the one we are running on.
    pub platform: Option<String>,

    #[clap(long, value_name = "PATH")]
    /// pkg-config executable to query.  Defaults to $PKG_CONFIG,
    /// then to `pkg-config` on the PATH.
    pub pkg_config: Option<PathBuf>,

    #[clap(long)]
    /// Don't look for the FFmpeg libraries.  Environment overrides still apply.
    pub no_probe: bool,

    #[clap(long)]
    /// Indent the JSON output.
    pub pretty: bool,

    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Log to stderr: once for info, twice for debug, three times for trace.
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Opt;

    #[test]
    fn test_command_is_well_formed() {
        Opt::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let opt = Opt::try_parse_from(["moon-rodio-config"]).unwrap();
        assert_eq!(opt.platform, None);
        assert_eq!(opt.pkg_config, None);
        assert!(!opt.no_probe);
        assert!(!opt.pretty);
        assert_eq!(opt.verbose, 0);
    }

    #[test]
    fn test_all_options() {
        let opt = Opt::try_parse_from([
            "moon-rodio-config",
            "--platform",
            "win32",
            "--pkg-config",
            "/usr/bin/pkgconf",
            "--no-probe",
            "--pretty",
            "-vv",
        ])
        .unwrap();
        assert_eq!(opt.platform.as_deref(), Some("win32"));
        assert_eq!(opt.pkg_config.unwrap().to_str(), Some("/usr/bin/pkgconf"));
        assert!(opt.no_probe);
        assert!(opt.pretty);
        assert_eq!(opt.verbose, 2);
    }
}
