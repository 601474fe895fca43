//! Environment overrides for property-test run sizes.
//!
//! Every proptest suite in the workspace reads the same two variables, so a
//! CI job can scale the whole run up or down without touching code.

use std::env;

use thiserror::Error;

/// Overrides the number of cases per property.
pub const CASES_ENV_KEY: &str = "PARTREE_PBT_CASES";
/// Overrides whether cases run in forked subprocesses.
pub const FORK_ENV_KEY: &str = "PARTREE_PBT_FORK";

/// Reasons an override value is rejected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OverrideError {
    /// The value is not an unsigned integer.
    #[error("`{raw}` is not a case count")]
    NotANumber {
        /// Raw variable contents.
        raw: String,
    },
    /// Zero cases would silently skip the property.
    #[error("case count must be positive")]
    ZeroCases,
    /// The value is not a recognised boolean spelling.
    #[error("`{raw}` is not one of true/false/1/0/yes/no/on/off")]
    NotABool {
        /// Raw variable contents.
        raw: String,
    },
}

/// Resolved run settings for a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads [`CASES_ENV_KEY`] and [`FORK_ENV_KEY`], falling back to the
    /// supplied defaults when a variable is unset or invalid.
    ///
    /// Invalid values are reported with a `warn` event rather than failing
    /// the suite.
    ///
    /// # Examples
    ///
    /// ```
    /// use partree_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: resolve(CASES_ENV_KEY, default_cases, parse_cases),
            fork: resolve(FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether proptest should fork per case.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, %raw, %error, "ignoring invalid property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber {
            raw: raw.to_owned(),
        }),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool {
            raw: raw.to_owned(),
        }),
    }
}
