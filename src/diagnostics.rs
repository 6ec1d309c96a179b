//! System diagnostics and dependency checking.
//!
//! Verifies that the external tools and credentials a run needs are in place
//! before any media is touched.

use crate::config::Config;
use std::process::Command;

/// Result of a dependency check.
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Dependency is present and usable
    Ok,
    /// Dependency is not found
    NotFound,
    /// Dependency is present but looks misconfigured
    Warning(String),
}

/// Check that ffmpeg exists and answers `-version`.
fn check_ffmpeg() -> CheckResult {
    match Command::new("ffmpeg").arg("-version").output() {
        Ok(output) if output.status.success() => CheckResult::Ok,
        Ok(_) => CheckResult::Warning("'ffmpeg' found but -version failed".to_string()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => CheckResult::NotFound,
        Err(e) => CheckResult::Warning(format!("Error checking ffmpeg: {}", e)),
    }
}

/// Check that an API key is configured.
fn check_api_key(config: &Config) -> CheckResult {
    match &config.api.api_key {
        Some(key) if !key.is_empty() => CheckResult::Ok,
        _ => CheckResult::NotFound,
    }
}

/// Run all dependency checks, print a report, and return overall success.
pub fn check_dependencies(config: &Config) -> bool {
    let mut all_ok = true;

    print!("ffmpeg: ");
    match check_ffmpeg() {
        CheckResult::Ok => println!("ok"),
        CheckResult::NotFound => {
            println!("NOT FOUND");
            println!("  Install ffmpeg and ensure it is on PATH:");
            println!("    sudo apt install ffmpeg  (Debian/Ubuntu)");
            println!("    sudo pacman -S ffmpeg    (Arch)");
            all_ok = false;
        }
        CheckResult::Warning(msg) => {
            println!("warning");
            println!("  {}", msg);
        }
    }

    print!("API key: ");
    match check_api_key(config) {
        CheckResult::Ok => println!("configured"),
        _ => {
            println!("NOT CONFIGURED");
            println!("  Set OPENAI_API_KEY or api.api_key in the config file.");
            all_ok = false;
        }
    }

    all_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_check_requires_nonempty_key() {
        let mut config = Config::default();
        assert_eq!(check_api_key(&config), CheckResult::NotFound);

        config.api.api_key = Some(String::new());
        assert_eq!(check_api_key(&config), CheckResult::NotFound);

        config.api.api_key = Some("sk-test".to_string());
        assert_eq!(check_api_key(&config), CheckResult::Ok);
    }
}
