//! # config-py
//!
//! Scaffolds a `config` package inside a Python project:
//!
//! ```text
//! <cwd>[/<package>]/config/__init__.py
//! <cwd>[/<package>]/config/dev.py
//! ```
//!
//! `__init__.py` either re-exports the development settings or, when an
//! environment variable name is given, imports the settings module named by
//! that variable at runtime.
//!
//! ```rust,no_run
//! use config_py::{EnvVarName, ScaffoldOptions, Scaffolder};
//!
//! let options = ScaffoldOptions::new().with_env_var(EnvVarName::new("APP_ENV")?);
//! let layout = Scaffolder::from_current_dir()?.generate(&options)?;
//! println!("{}", layout.config_dir.display());
//! # Ok::<(), config_py::ScaffoldError>(())
//! ```

pub mod cli;
pub mod error;
pub mod logging;
pub mod options;
pub mod scaffold;
pub mod templates;

pub use cli::CliArgs;
pub use error::{Result, ScaffoldError};
pub use options::{EnvVarName, PackagePath, ScaffoldOptions};
pub use scaffold::{GeneratedLayout, Scaffolder};
pub use templates::{render, RenderedConfig, CONF_DIR_NAME, DEV_FILE, INIT_FILE};

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
