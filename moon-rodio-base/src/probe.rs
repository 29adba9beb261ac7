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
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use log::{debug, info};

/// The native libraries the FFmpeg decoder links against, in link order.
pub const FFMPEG_PACKAGES: [&str; 4] = ["libavformat", "libavcodec", "libavutil", "libswresample"];

/// Compile and link flags discovered for a set of native packages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProbeResult {
    pub cflags: String,
    pub libs: String,
}

/// A best-effort query for native library flags.  `None` means the
/// libraries are not available; it is an expected outcome, not an error.
pub trait Probe {
    fn probe(&self, packages: &[&str]) -> Option<ProbeResult>;
}

/// Never finds anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProbe;

impl Probe for NoProbe {
    fn probe(&self, _packages: &[&str]) -> Option<ProbeResult> {
        None
    }
}

/// Runs `pkg-config` (or a compatible tool) once for `--cflags`
/// and once for `--libs`.
#[derive(Clone, Debug)]
pub struct PkgConfig {
    tool: PathBuf,
}

impl Default for PkgConfig {
    fn default() -> Self {
        Self::new("pkg-config")
    }
}

impl PkgConfig {
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    /// Honors `PKG_CONFIG` the way pkg-config wrappers conventionally do.
    pub fn from_env() -> Self {
        Self::from_tool_var(std::env::var_os("PKG_CONFIG"))
    }

    fn from_tool_var(var: Option<OsString>) -> Self {
        match var {
            Some(tool) if !tool.is_empty() => Self::new(tool),
            _ => Self::default(),
        }
    }

    #[cfg(test)]
    fn tool(&self) -> &PathBuf {
        &self.tool
    }

    fn query(&self, flag: &str, packages: &[&str]) -> Option<String> {
        let output = match Command::new(&self.tool).arg(flag).args(packages).output() {
            Ok(output) => output,
            Err(err) => {
                debug!("Can't run {}: {}", self.tool.display(), err);
                return None;
            }
        };
        if !output.status.success() {
            debug!(
                "{} {} failed ({}): {}",
                self.tool.display(),
                flag,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }
        match String::from_utf8(output.stdout) {
            Ok(s) => Some(s.trim().to_string()),
            Err(_) => {
                debug!("{} {} produced non-UTF-8 output", self.tool.display(), flag);
                None
            }
        }
    }
}

impl Probe for PkgConfig {
    fn probe(&self, packages: &[&str]) -> Option<ProbeResult> {
        let cflags = self.query("--cflags", packages)?;
        let libs = self.query("--libs", packages)?;
        info!("Found {} via {}", packages.join(" "), self.tool.display());
        Some(ProbeResult { cflags, libs })
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::PathBuf;

    use super::{NoProbe, PkgConfig, Probe, FFMPEG_PACKAGES};

    #[test]
    fn test_tool_selection() {
        assert_eq!(PkgConfig::from_tool_var(None).tool(), &PathBuf::from("pkg-config"));
        assert_eq!(
            PkgConfig::from_tool_var(Some(OsString::new())).tool(),
            &PathBuf::from("pkg-config")
        );
        assert_eq!(
            PkgConfig::from_tool_var(Some(OsString::from("/opt/bin/pkgconf"))).tool(),
            &PathBuf::from("/opt/bin/pkgconf")
        );
    }

    #[test]
    fn test_missing_tool() {
        let probe = PkgConfig::new("/nonexistent/moon-rodio/pkg-config");
        assert_eq!(probe.probe(&FFMPEG_PACKAGES), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_failing_tool() {
        assert_eq!(PkgConfig::new("false").probe(&FFMPEG_PACKAGES), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_successful_tool_output_is_trimmed() {
        // echo repeats its arguments, so each query shows what was asked for
        let result = PkgConfig::new("echo").probe(&FFMPEG_PACKAGES).unwrap();
        assert_eq!(result.cflags, "--cflags libavformat libavcodec libavutil libswresample");
        assert_eq!(result.libs, "--libs libavformat libavcodec libavutil libswresample");
    }

    /// Writes an executable shell script that fails when its first
    /// argument is `failing_flag` and prints some flags otherwise.
    #[cfg(unix)]
    fn script_failing_on(dir: &std::path::Path, failing_flag: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(format!("pkg-config{}", failing_flag));
        let body = format!(
            "#!/bin/sh\nif [ \"$1\" = \"{}\" ]; then exit 1; fi\necho \"-I/usr/include/ffmpeg\"\n",
            failing_flag
        );
        std::fs::write(&path, body).expect("Can't write test script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Can't make test script executable");
        path
    }

    #[test]
    #[cfg(unix)]
    fn test_tool_failing_on_either_query() {
        let dir = tempfile::tempdir().unwrap();
        for failing_flag in ["--libs", "--cflags"] {
            let probe = PkgConfig::new(script_failing_on(dir.path(), failing_flag));
            assert_eq!(probe.probe(&FFMPEG_PACKAGES), None, "failing on {}", failing_flag);
        }
        // and the same script succeeds when neither query fails
        let probe = PkgConfig::new(script_failing_on(dir.path(), "--version"));
        let result = probe.probe(&FFMPEG_PACKAGES).unwrap();
        assert_eq!(result.cflags, "-I/usr/include/ffmpeg");
        assert_eq!(result.libs, "-I/usr/include/ffmpeg");
    }

    #[test]
    fn test_no_probe() {
        assert_eq!(NoProbe.probe(&FFMPEG_PACKAGES), None);
    }
}
