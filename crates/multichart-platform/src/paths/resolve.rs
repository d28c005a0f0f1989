use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use multichart_common::PlatformError;

pub(super) const APP_NAME: &str = "multichart";

/// Locations derived from the running executable's directory and stem.
///
/// For `/opt/charts/okx.exe`:
/// - settings: `/opt/charts/okx.settings.json`
/// - engine cache: `/opt/charts/okx.WebView2Cache`
/// - app config: `/opt/charts/okx.toml`
/// - crash reports: `/opt/charts/okx.crash-reports/`
/// - window icon: `/opt/charts/okx.png`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    dir: PathBuf,
    exe_name: String,
}

impl InstallPaths {
    /// Resolve paths for the running executable.
    ///
    /// Falls back to the user's local data directory when the executable
    /// path cannot be determined.
    pub fn current() -> Result<Self, PlatformError> {
        match std::env::current_exe() {
            Ok(exe) => Self::from_exe(&exe),
            Err(e) => {
                tracing::warn!("could not resolve executable path ({e}), using data dir");
                let dir = dirs::data_local_dir()
                    .ok_or_else(|| {
                        PlatformError::PathError("could not determine data directory".into())
                    })?
                    .join(APP_NAME);
                Ok(Self {
                    dir,
                    exe_name: APP_NAME.into(),
                })
            }
        }
    }

    /// Derive paths from an explicit executable path.
    pub fn from_exe(exe: &Path) -> Result<Self, PlatformError> {
        let exe_name = exe
            .file_stem()
            .and_then(OsStr::to_str)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                PlatformError::PathError(format!("no executable name in {}", exe.display()))
            })?
            .to_string();
        let dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self { dir, exe_name })
    }

    /// Directory holding the executable.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Executable file name without extension.
    pub fn exe_name(&self) -> &str {
        &self.exe_name
    }

    pub fn settings_file(&self) -> PathBuf {
        self.sibling("settings.json")
    }

    /// Browser engine profile/cache root. Never read or written directly.
    pub fn cache_dir(&self) -> PathBuf {
        self.sibling("WebView2Cache")
    }

    pub fn config_file(&self) -> PathBuf {
        self.sibling("toml")
    }

    /// Optional PNG used as the window icon.
    pub fn icon_file(&self) -> PathBuf {
        self.sibling("png")
    }

    pub fn crash_report_dir(&self) -> PathBuf {
        self.sibling("crash-reports")
    }

    /// Create the engine cache directory if it does not exist.
    pub fn ensure_cache_dir(&self) -> Result<PathBuf, PlatformError> {
        let dir = self.cache_dir();
        std::fs::create_dir_all(&dir).map_err(|e| {
            PlatformError::PathError(format!("failed to create {}: {e}", dir.display()))
        })?;
        Ok(dir)
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        self.dir.join(format!("{}.{suffix}", self.exe_name))
    }
}
