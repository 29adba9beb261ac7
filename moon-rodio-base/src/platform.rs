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
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// The operating system families we can configure a native audio build for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    MacOs,
    Linux,
    Windows,
}

impl HostPlatform {
    /// The platform this process is running on.  Fails on anything
    /// other than macOS, Linux or Windows.
    pub fn current() -> Result<Self, Error> {
        std::env::consts::OS.parse()
    }

    /// Linker flags for the platform's native audio backend.
    pub fn base_link_flags(&self) -> &'static str {
        match self {
            HostPlatform::MacOs => {
                "-framework CoreAudio -framework CoreFoundation -framework AudioToolbox"
            }
            HostPlatform::Linux => "-pthread -lasound -ljack",
            HostPlatform::Windows => "-lole32 -luuid -lmmdevapi -lavrt",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostPlatform::MacOs => "macos",
            HostPlatform::Linux => "linux",
            HostPlatform::Windows => "windows",
        }
    }
}

impl Display for HostPlatform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for HostPlatform {
    type Err = Error;

    /// Accepts both the Rust (`macos`, `windows`) and the Node
    /// (`darwin`, `win32`) spellings of the OS identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "darwin" | "macos" => Ok(HostPlatform::MacOs),
            "linux" => Ok(HostPlatform::Linux),
            "win32" | "windows" => Ok(HostPlatform::Windows),
            _ => Err(Error::UnsupportedPlatform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HostPlatform;
    use crate::error::Error;

    #[test]
    fn test_base_link_flags() {
        assert_eq!(
            HostPlatform::MacOs.base_link_flags(),
            "-framework CoreAudio -framework CoreFoundation -framework AudioToolbox"
        );
        assert_eq!(HostPlatform::Linux.base_link_flags(), "-pthread -lasound -ljack");
        assert_eq!(
            HostPlatform::Windows.base_link_flags(),
            "-lole32 -luuid -lmmdevapi -lavrt"
        );
        for platform in [HostPlatform::MacOs, HostPlatform::Linux, HostPlatform::Windows] {
            assert!(!platform.base_link_flags().is_empty());
        }
    }

    #[test]
    fn test_parse_known_identifiers() {
        assert_eq!("darwin".parse::<HostPlatform>().unwrap(), HostPlatform::MacOs);
        assert_eq!("macos".parse::<HostPlatform>().unwrap(), HostPlatform::MacOs);
        assert_eq!("Linux".parse::<HostPlatform>().unwrap(), HostPlatform::Linux);
        assert_eq!("win32".parse::<HostPlatform>().unwrap(), HostPlatform::Windows);
        assert_eq!("WINDOWS".parse::<HostPlatform>().unwrap(), HostPlatform::Windows);
    }

    #[test]
    fn test_parse_unsupported_identifier() {
        for id in ["freebsd", "aix", "", "linuxish"] {
            match id.parse::<HostPlatform>() {
                Err(Error::UnsupportedPlatform(name)) => assert_eq!(name, id),
                other => panic!("Expected unsupported platform for {:?}, got {:?}", id, other),
            }
        }
    }

    #[test]
    fn test_display_round_trips() {
        for platform in [HostPlatform::MacOs, HostPlatform::Linux, HostPlatform::Windows] {
            assert_eq!(platform.to_string().parse::<HostPlatform>().unwrap(), platform);
        }
    }

    #[test]
    #[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
    fn test_current() {
        assert!(HostPlatform::current().is_ok());
    }
}
