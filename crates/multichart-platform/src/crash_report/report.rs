use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

use super::sanitize::sanitize_secrets;

/// Writes a crash report into `dir` when a panic occurs.
///
/// Returns the path to the written report, or `None` if writing failed.
/// Runs inside a panic hook, so every error is swallowed.
///
/// URL secrets are redacted before writing. On Unix the report file is
/// set to mode 0o600.
pub fn write_crash_report(dir: &Path, info: &PanicHookInfo) -> Option<PathBuf> {
    let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    let location = info.location().map(|loc| {
        serde_json::json!({
            "file": loc.file(),
            "line": loc.line(),
            "column": loc.column(),
        })
    });

    let backtrace = Backtrace::force_capture().to_string();

    write_report(dir, &message, location, &backtrace)
}

fn write_report(
    dir: &Path,
    message: &str,
    location: Option<serde_json::Value>,
    backtrace: &str,
) -> Option<PathBuf> {
    let now = chrono::Utc::now();
    let path = dir.join(format!("crash_{}.json", now.format("%Y%m%d_%H%M%S")));

    let report = serde_json::json!({
        "timestamp": now.to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "panic_message": sanitize_secrets(message),
        "location": location,
        "backtrace": sanitize_secrets(backtrace),
    });

    std::fs::create_dir_all(dir).ok()?;
    std::fs::write(&path, serde_json::to_string_pretty(&report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_written_and_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("multichart.crash-reports");

        let path = write_report(
            &reports,
            "navigate to https://web3.okx.com/x?session=deadbeef failed",
            None,
            "0: main",
        )
        .unwrap();

        assert!(path.starts_with(&reports));
        let content = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        let msg = json["panic_message"].as_str().unwrap();
        assert!(!msg.contains("deadbeef"));
        assert_eq!(json["os"], std::env::consts::OS);
    }

    #[test]
    fn unwritable_dir_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, b"").unwrap();

        assert!(write_report(&file.join("reports"), "boom", None, "").is_none());
    }
}
