//! Property-test run profile read from the environment.
//!
//! Lets CI raise case counts or switch on forking for every property suite
//! in the workspace through one pair of variables.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const CONCOMP_PBT_FORK_ENV_KEY: &str = "CONCOMP_PBT_FORK";

/// Resolved settings for a property-test run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, falling back to the defaults.
    ///
    /// Unparseable overrides are logged and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use concomp_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_values(
            env::var(PROPTEST_CASES_ENV_KEY).ok().as_deref(),
            env::var(CONCOMP_PBT_FORK_ENV_KEY).ok().as_deref(),
            default_cases,
            default_fork,
        )
    }

    fn from_values(
        raw_cases: Option<&str>,
        raw_fork: Option<&str>,
        default_cases: u32,
        default_fork: bool,
    ) -> Self {
        Self {
            cases: resolve(PROPTEST_CASES_ENV_KEY, raw_cases, default_cases, parse_cases),
            fork: resolve(CONCOMP_PBT_FORK_ENV_KEY, raw_fork, default_fork, parse_bool),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T: Copy>(
    key: &'static str,
    raw: Option<&str>,
    default: T,
    parser: fn(&str) -> Result<T, String>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    parser(raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
