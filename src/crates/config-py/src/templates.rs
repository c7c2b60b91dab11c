//! File templates for the generated config package.
//!
//! Rendering is pure: the same options always produce the same bytes.

use crate::options::{EnvVarName, ScaffoldOptions};

/// Name of the generated config package directory.
pub const CONF_DIR_NAME: &str = "config";

/// Package marker module inside the config directory.
pub const INIT_FILE: &str = "__init__.py";

/// Development settings module inside the config directory.
pub const DEV_FILE: &str = "dev.py";

/// Environment used when the selector variable is unset.
pub const DEFAULT_ENV: &str = "dev";

const ENV_VAR_PLACEHOLDER: &str = "{env_var}";
const DEFAULT_ENV_PLACEHOLDER: &str = "{default_env}";

/// `__init__.py` that always loads the development settings.
pub const PLAIN_INIT_TEMPLATE: &str = r#"from .dev import *  # noqa: F401,F403
"#;

/// `__init__.py` that picks the settings module from an environment variable.
///
/// Placeholders: `{env_var}` and `{default_env}`.
pub const ENV_INIT_TEMPLATE: &str = r#"import importlib
import os

ENV_VAR = '{env_var}'
DEFAULT_ENV = '{default_env}'

ENV = os.environ.get(ENV_VAR, DEFAULT_ENV)

_settings = importlib.import_module('.' + ENV, __name__)

for _name in dir(_settings):
    if _name.isupper():
        globals()[_name] = getattr(_settings, _name)

del _name, _settings
"#;

/// Development settings, identical for every invocation.
pub const DEV_TEMPLATE: &str = r#"# Development settings.
#
# Add one module per environment next to this file (e.g. prod.py) and
# define settings as upper-case module attributes.

DEBUG = True
"#;

/// Which `__init__.py` variant a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitTemplate<'a> {
    Plain,
    EnvAware(&'a EnvVarName),
}

impl<'a> InitTemplate<'a> {
    pub fn for_options(options: &'a ScaffoldOptions) -> Self {
        match &options.env_var {
            Some(env_var) => Self::EnvAware(env_var),
            None => Self::Plain,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Plain => PLAIN_INIT_TEMPLATE.to_string(),
            // EnvVarName is an identifier, so it is safe inside a quoted literal
            Self::EnvAware(env_var) => ENV_INIT_TEMPLATE
                .replacen(ENV_VAR_PLACEHOLDER, env_var.as_str(), 1)
                .replacen(DEFAULT_ENV_PLACEHOLDER, DEFAULT_ENV, 1),
        }
    }
}

/// Contents of both generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedConfig {
    pub init_py: String,
    pub dev_py: String,
}

/// Render the config package files for `options`.
pub fn render(options: &ScaffoldOptions) -> RenderedConfig {
    RenderedConfig {
        init_py: InitTemplate::for_options(options).render(),
        dev_py: DEV_TEMPLATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PackagePath;

    #[test]
    fn test_plain_render() {
        let rendered = render(&ScaffoldOptions::new());
        assert_eq!(rendered.init_py, PLAIN_INIT_TEMPLATE);
        assert_eq!(rendered.dev_py, DEV_TEMPLATE);
    }

    #[test]
    fn test_env_aware_render() {
        let options = ScaffoldOptions::new().with_env_var(EnvVarName::new("MY_ENV").unwrap());
        let rendered = render(&options);

        assert!(rendered.init_py.contains("ENV_VAR = 'MY_ENV'"));
        assert!(rendered.init_py.contains("DEFAULT_ENV = 'dev'"));
        assert!(!rendered.init_py.contains(ENV_VAR_PLACEHOLDER));
        assert!(!rendered.init_py.contains(DEFAULT_ENV_PLACEHOLDER));
    }

    #[test]
    fn test_default_env_is_rendered_from_constant() {
        assert!(!ENV_INIT_TEMPLATE.contains(&format!("DEFAULT_ENV = '{}'", DEFAULT_ENV)));

        let env = EnvVarName::new("APP_ENV").unwrap();
        let rendered = InitTemplate::EnvAware(&env).render();
        assert!(rendered.contains(&format!("DEFAULT_ENV = '{}'", DEFAULT_ENV)));
        assert_eq!(DEV_FILE, format!("{}.py", DEFAULT_ENV));
    }

    #[test]
    fn test_dev_file_ignores_options() {
        let plain = render(&ScaffoldOptions::new());
        let full = render(
            &ScaffoldOptions::new()
                .with_package(PackagePath::new("app").unwrap())
                .with_env_var(EnvVarName::new("APP_ENV").unwrap()),
        );
        assert_eq!(plain.dev_py, full.dev_py);
    }

    #[test]
    fn test_package_does_not_change_init() {
        let options = ScaffoldOptions::new().with_package(PackagePath::new("my_module").unwrap());
        assert_eq!(render(&options).init_py, PLAIN_INIT_TEMPLATE);
    }

    #[test]
    fn test_template_selection() {
        let env = EnvVarName::new("X").unwrap();
        let options = ScaffoldOptions::new().with_env_var(env.clone());
        assert_eq!(InitTemplate::for_options(&options), InitTemplate::EnvAware(&env));
        assert_eq!(InitTemplate::for_options(&ScaffoldOptions::new()), InitTemplate::Plain);
    }
}
