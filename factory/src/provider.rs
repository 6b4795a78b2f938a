//! Driver discovery and option validation.

use std::sync::{Arc, OnceLock};

use regex_lite::Regex;
use spanner_core::require;
use spanner_transaction::Client;

use crate::error::{FactoryError, FactoryResult};
use crate::factory::SpannerConnectionFactory;
use crate::options::{ConnectionOptions, DATABASE, INSTANCE, PROJECT};

/// Driver name this provider answers to.
pub const DRIVER_NAME: &str = "spanner";

static PROJECT_RULE: NameRule = NameRule::new(PROJECT, r"^[a-z][-a-z0-9]{4,28}[a-z0-9]$");
static INSTANCE_RULE: NameRule = NameRule::new(INSTANCE, r"^[a-z][-a-z0-9]{0,62}[a-z0-9]$");
static DATABASE_RULE: NameRule = NameRule::new(DATABASE, r"^[a-z][a-z0-9_-]{0,28}[a-z0-9]$");

/// Entry point that turns [`ConnectionOptions`] into a connection factory.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpannerConnectionFactoryProvider;

impl SpannerConnectionFactoryProvider {
    /// Create a provider.
    pub fn new() -> Self {
        Self
    }

    /// Check whether `options` select this driver.
    ///
    /// Absent options are a caller error, not a "no".
    pub fn supports(&self, options: Option<&ConnectionOptions>) -> FactoryResult<bool> {
        let options = require(options, "connection options must not be null")?;
        Ok(options.driver() == Some(DRIVER_NAME))
    }

    /// Validate `options` and build a factory whose connections start
    /// transactions on `client`.
    ///
    /// Naming only the driver is enough. Project, instance and database are
    /// optional as a group: once one is given, all three must be present and
    /// well formed, and the factory carries the qualified database name.
    pub fn create<C: Client>(
        &self,
        options: &ConnectionOptions,
        client: C,
    ) -> FactoryResult<SpannerConnectionFactory<C>> {
        if !self.supports(Some(options))? {
            return Err(FactoryError::unsupported_driver(
                options.driver().unwrap_or("<none>"),
            ));
        }

        let database_name = database_name(options)?;
        Ok(SpannerConnectionFactory::new(database_name, Arc::new(client)))
    }
}

fn database_name(options: &ConnectionOptions) -> FactoryResult<Option<String>> {
    let rules = [&PROJECT_RULE, &INSTANCE_RULE, &DATABASE_RULE];
    if !rules.iter().any(|rule| options.has(rule.key)) {
        return Ok(None);
    }

    let project = PROJECT_RULE.check(options)?;
    let instance = INSTANCE_RULE.check(options)?;
    let database = DATABASE_RULE.check(options)?;
    Ok(Some(format!(
        "projects/{project}/instances/{instance}/databases/{database}"
    )))
}

/// Naming rule for one resource option, compiled on first use.
struct NameRule {
    key: &'static str,
    pattern: &'static str,
    compiled: OnceLock<Result<Regex, String>>,
}

impl NameRule {
    const fn new(key: &'static str, pattern: &'static str) -> Self {
        Self {
            key,
            pattern,
            compiled: OnceLock::new(),
        }
    }

    fn regex(&self) -> FactoryResult<&Regex> {
        self.compiled
            .get_or_init(|| Regex::new(self.pattern).map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|e| {
                FactoryError::invalid_argument(format!("invalid pattern for {}: {e}", self.key))
            })
    }

    fn check<'o>(&self, options: &'o ConnectionOptions) -> FactoryResult<&'o str> {
        let key = self.key;
        let value = require(options.get(key), &format!("{key} must not be null"))?;
        if !self.regex()?.is_match(value) {
            return Err(FactoryError::invalid_argument(format!(
                "invalid {key} '{value}'"
            )));
        }
        Ok(value)
    }
}
