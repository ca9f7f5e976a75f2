//! Version and build metadata for the version banner

/// Build metadata shown by `tailshade --version`.
///
/// Built once in `main` and handed to [`run_cli`](super::run_cli).
/// Packagers can set `TAILSHADE_COMMIT_HASH` and `TAILSHADE_BUILD_DATE` at
/// compile time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit_hash: &'static str,
    pub build_date: &'static str,
}

impl BuildInfo {
    /// Read build metadata from compile-time environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            version: crate::VERSION,
            commit_hash: option_env!("TAILSHADE_COMMIT_HASH").unwrap_or("unknown"),
            build_date: option_env!("TAILSHADE_BUILD_DATE").unwrap_or("unknown"),
        }
    }

    /// `0.1.0 (abc1234) built on 2025-01-01`
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} ({}) built on {}",
            self.version, self.commit_hash, self.build_date
        )
    }
}
