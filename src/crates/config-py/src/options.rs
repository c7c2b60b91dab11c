//! Validated scaffolding options.
//!
//! Raw CLI strings never reach the templates directly: an environment
//! variable name must be an identifier before it is embedded in generated
//! Python source, and a package path must stay under the working directory.

use crate::error::{Result, ScaffoldError};
use regex::Regex;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Name of the environment variable the generated package reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarName(String);

impl EnvVarName {
    /// Validate `name` as an ASCII identifier.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let reason = if name.is_empty() {
            Some("must not be empty")
        } else if name.starts_with(|c: char| c.is_ascii_digit()) {
            Some("must not start with a digit")
        } else if !IDENTIFIER_REGEX.is_match(&name) {
            Some("may only contain ASCII letters, digits and underscores")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ScaffoldError::InvalidEnvVar { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EnvVarName {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for EnvVarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Relative directory under the working directory that receives the config package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePath(PathBuf);

impl PackagePath {
    /// Normalize `path`, rejecting anything that could escape the base directory.
    ///
    /// `.` components are dropped; nested paths such as `src/app` are kept.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let raw = path.as_ref();
        let invalid = |reason| ScaffoldError::InvalidPackage {
            path: raw.to_path_buf(),
            reason,
        };

        let mut normalized = PathBuf::new();
        for component in raw.components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir => return Err(invalid("must not contain '..'")),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid("must be a relative path"))
                }
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(invalid("must name a directory"));
        }

        Ok(Self(normalized))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl FromStr for PackagePath {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<Path> for PackagePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Everything that varies between two scaffolding runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Package directory the config package is nested under, if any.
    pub package: Option<PackagePath>,
    /// Environment variable that selects the settings module, if any.
    pub env_var: Option<EnvVarName>,
}

impl ScaffoldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from unvalidated strings.
    pub fn from_raw(package: Option<&str>, env_var: Option<&str>) -> Result<Self> {
        Ok(Self {
            package: package.map(PackagePath::new).transpose()?,
            env_var: env_var.map(EnvVarName::new).transpose()?,
        })
    }

    pub fn with_package(mut self, package: PackagePath) -> Self {
        self.package = Some(package);
        self
    }

    pub fn with_env_var(mut self, env_var: EnvVarName) -> Self {
        self.env_var = Some(env_var);
        self
    }

    /// Directory that will contain the config package, relative to `root`.
    pub fn base_dir(&self, root: &Path) -> PathBuf {
        match &self.package {
            Some(package) => root.join(package),
            None => root.to_path_buf(),
        }
    }
}
