//! Config package creation.
//!
//! Creates `<root>[/<package>]/config/` with `__init__.py` and `dev.py`.
//! An existing config directory is never touched.

use crate::error::{Result, ScaffoldError};
use crate::options::ScaffoldOptions;
use crate::templates::{self, CONF_DIR_NAME, DEV_FILE, INIT_FILE};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths written by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLayout {
    pub config_dir: PathBuf,
    pub init_file: PathBuf,
    pub dev_file: PathBuf,
}

impl GeneratedLayout {
    fn for_config_dir(config_dir: PathBuf) -> Self {
        Self {
            init_file: config_dir.join(INIT_FILE),
            dev_file: config_dir.join(DEV_FILE),
            config_dir,
        }
    }

    /// Created paths in creation order.
    pub fn paths(&self) -> [&Path; 3] {
        [
            self.config_dir.as_path(),
            self.init_file.as_path(),
            self.dev_file.as_path(),
        ]
    }
}

/// Writes config packages under a fixed root directory.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
}

impl Scaffolder {
    /// Scaffolder rooted at `root`, normally the current working directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scaffolder rooted at the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read.
    pub fn from_current_dir() -> Result<Self> {
        std::env::current_dir()
            .map(Self::new)
            .map_err(|e| ScaffoldError::io(".", e))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Config directory that `generate` would create for `options`.
    pub fn target_dir(&self, options: &ScaffoldOptions) -> PathBuf {
        options.base_dir(&self.root).join(CONF_DIR_NAME)
    }

    /// Create the config package.
    ///
    /// Missing package directories are created. The config directory itself
    /// must not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::AlreadyExists`] if the config directory is
    /// present, or [`ScaffoldError::Io`] if a directory or file cannot be
    /// written. Files already written are left in place on failure.
    pub fn generate(&self, options: &ScaffoldOptions) -> Result<GeneratedLayout> {
        let target = self.target_dir(options);

        if target.exists() {
            return Err(ScaffoldError::AlreadyExists { path: target });
        }

        info!(path = %target.display(), "Creating config package");

        if let Some(parent) = target.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
                debug!(path = %parent.display(), "Created package directory");
            }
        }

        // Non-recursive create catches a directory that appeared after the check
        fs::create_dir(&target).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => ScaffoldError::AlreadyExists {
                path: target.clone(),
            },
            _ => ScaffoldError::io(&target, e),
        })?;

        let layout = GeneratedLayout::for_config_dir(target);
        let rendered = templates::render(options);

        write_file(&layout.init_file, &rendered.init_py)?;
        write_file(&layout.dev_file, &rendered.dev_py)?;

        info!(
            path = %layout.config_dir.display(),
            env_aware = options.env_var.is_some(),
            "Config package created"
        );

        Ok(layout)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| ScaffoldError::io(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}
