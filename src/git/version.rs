use crate::error::{GitError, GitResult};
use std::process::Command;

/// Version of the installed git binary, as reported by `git --version`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GitVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl GitVersion {
    /// Detect the installed git version.
    ///
    /// Used as a preflight check: if this fails there is no point running
    /// the setup sequence at all.
    pub fn detect() -> GitResult<Self> {
        let output = Command::new("git")
            .arg("--version")
            .output()
            .map_err(|e| GitError::GitNotFound(e.to_string()))?;

        if !output.status.success() {
            return Err(GitError::GitNotFound(
                "git --version exited with a failure".to_string(),
            ));
        }

        Self::parse(&String::from_utf8_lossy(&output.stdout))
    }

    /// Parse a banner like "git version 2.39.2" or "git version 2.39.2.windows.1"
    pub fn parse(banner: &str) -> GitResult<Self> {
        let mut words = banner.split_whitespace();
        if words.next() != Some("git") || words.next() != Some("version") {
            return Err(GitError::ParseError(format!(
                "Unexpected git version format: {}",
                banner.trim()
            )));
        }

        let numbers = words.next().ok_or_else(|| {
            GitError::ParseError(format!("Missing version number: {}", banner.trim()))
        })?;

        let mut parts = numbers.split('.');
        let major = Self::parse_part(parts.next(), numbers)?;
        let minor = Self::parse_part(parts.next(), numbers)?;
        // Patch may be absent or carry a platform suffix
        let patch = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);

        Ok(GitVersion {
            major,
            minor,
            patch,
        })
    }

    fn parse_part(part: Option<&str>, numbers: &str) -> GitResult<u32> {
        part.and_then(|p| p.parse().ok()).ok_or_else(|| {
            GitError::ParseError(format!("Invalid version number format: {}", numbers))
        })
    }
}

impl std::fmt::Display for GitVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
