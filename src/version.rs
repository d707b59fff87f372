//! Build identification for evalboard.
//!
//! Git metadata is embedded by `build.rs`; builds from a source tarball
//! report `unknown` for branch and commit. The same identity is sent as
//! the `User-Agent` of results requests so endpoint logs can tell
//! dashboard builds apart.

use std::fmt;

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const UNKNOWN: &str = "unknown";

/// Where this binary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub branch: &'static str,
    /// Full commit hash, or `unknown`.
    pub commit: &'static str,
    pub dirty: bool,
}

impl BuildInfo {
    /// Metadata captured when this crate was compiled.
    pub fn current() -> Self {
        Self {
            version: PKG_VERSION,
            branch: option_env!("VERGEN_GIT_BRANCH").unwrap_or(UNKNOWN),
            commit: option_env!("VERGEN_GIT_SHA").unwrap_or(UNKNOWN),
            dirty: option_env!("VERGEN_GIT_DIRTY") == Some("true"),
        }
    }

    /// First seven characters of the commit hash.
    pub fn short_commit(&self) -> &'static str {
        match self.commit.char_indices().nth(7) {
            Some((end, _)) => &self.commit[..end],
            None => self.commit,
        }
    }

    /// `evalboard/{version}`, sent with every results request.
    pub fn user_agent(&self) -> String {
        format!("evalboard/{}", self.version)
    }
}

/// `{version}+{branch}.{commit}`, with `.dirty` appended for builds from a
/// modified checkout.
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}.{}", self.version, self.branch, self.short_commit())?;
        if self.dirty {
            f.write_str(".dirty")?;
        }
        Ok(())
    }
}

/// Version string of this build, e.g. `0.1.0+main.abc1234`.
pub fn version_string() -> String {
    BuildInfo::current().to_string()
}
