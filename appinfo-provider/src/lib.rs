//! Application metadata snapshot.
//!
//! [`AppInfo`] is assembled once from the `APP_NAME`, `VERSION` and `ENVIRONMENT`
//! environment variables. Missing variables are not an error: they are reported as
//! [`UNKNOWN`].

use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable holding the application name.
pub const APP_NAME_VAR: &str = "APP_NAME";
/// Environment variable holding the application version.
pub const VERSION_VAR: &str = "VERSION";
/// Environment variable holding the deployment environment (dev, prod, ...).
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";
/// Value reported for any variable that is not set.
pub const UNKNOWN: &str = "UNKNOWN";

/// Static metadata describing the running application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    name: String,
    version: String,
    environment: String,
}

impl AppInfo {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            environment: environment.into(),
        }
    }

    /// Every field set to [`UNKNOWN`], as reported when none of the variables are set.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN, UNKNOWN)
    }

    /// Reads the metadata from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(lookup_env)
    }

    /// Builds the metadata from an arbitrary lookup.
    ///
    /// `lookup` returns `Some` for a variable that is set (an empty string counts as
    /// set) and `None` otherwise.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |var: &str| lookup(var).unwrap_or_else(|| UNKNOWN.to_owned());

        Self {
            name: resolve(APP_NAME_VAR),
            version: resolve(VERSION_VAR),
            environment: resolve(ENVIRONMENT_VAR),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }
}

/// Shorthand for [`AppInfo::from_env`].
pub fn get_app_info() -> AppInfo {
    AppInfo::from_env()
}

/// Returns the value of `var`, or [`UNKNOWN`] when it is not set.
pub fn attribute_value(var: &str) -> String {
    lookup_env(var).unwrap_or_else(|| UNKNOWN.to_owned())
}

// Non-UTF-8 values are still "set"; they are converted lossily rather than dropped.
fn lookup_env(var: &str) -> Option<String> {
    env::var_os(var).map(|value| value.to_string_lossy().into_owned())
}
