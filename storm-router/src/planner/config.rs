//! Search configuration for the route planner.

/// Configuration parameters for route search.
///
/// The caps are off by default; with both unset the search runs until it
/// has collected enough routes or exhausted the frontier.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Number of alternative routes returned when a request does not say.
    pub max_results: usize,

    /// Stop after popping this many states from the frontier.
    pub max_frontier: Option<usize>,

    /// Discard candidates whose elapsed time exceeds this many hours.
    pub max_elapsed_hours: Option<f64>,
}

/// Environment variable overriding [`SearchConfig::max_results`].
pub const ENV_MAX_RESULTS: &str = "STORM_ROUTER_MAX_RESULTS";
/// Environment variable setting [`SearchConfig::max_frontier`].
pub const ENV_MAX_FRONTIER: &str = "STORM_ROUTER_MAX_FRONTIER";
/// Environment variable setting [`SearchConfig::max_elapsed_hours`].
pub const ENV_MAX_ELAPSED_HOURS: &str = "STORM_ROUTER_MAX_ELAPSED_HOURS";

/// Error reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {key}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_results: usize,
        max_frontier: Option<usize>,
        max_elapsed_hours: Option<f64>,
    ) -> Self {
        Self {
            max_results,
            max_frontier,
            max_elapsed_hours,
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults
    /// for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_RESULTS) {
            config.max_results = parse(ENV_MAX_RESULTS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_FRONTIER) {
            config.max_frontier = Some(parse(ENV_MAX_FRONTIER, &raw)?);
        }
        if let Some(raw) = lookup(ENV_MAX_ELAPSED_HOURS) {
            let hours: f64 = parse(ENV_MAX_ELAPSED_HOURS, &raw)?;
            if !hours.is_finite() || hours < 0.0 {
                return Err(ConfigError {
                    key: ENV_MAX_ELAPSED_HOURS,
                    value: raw,
                });
            }
            config.max_elapsed_hours = Some(hours);
        }

        Ok(config)
    }

    /// Apply `cap` as the frontier cap unless one is already set.
    pub fn with_default_frontier(mut self, cap: usize) -> Self {
        self.max_frontier.get_or_insert(cap);
        self
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError {
        key,
        value: raw.to_string(),
    })
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            max_frontier: None,
            max_elapsed_hours: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.max_results, 3);
        assert_eq!(config.max_frontier, None);
        assert_eq!(config.max_elapsed_hours, None);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(5, Some(1000), Some(48.0));

        assert_eq!(config.max_results, 5);
        assert_eq!(config.max_frontier, Some(1000));
        assert_eq!(config.max_elapsed_hours, Some(48.0));
    }

    #[test]
    fn lookup_with_nothing_set_is_default() {
        let config = SearchConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn lookup_reads_all_keys() {
        let config = SearchConfig::from_lookup(lookup_from(&[
            (ENV_MAX_RESULTS, "7"),
            (ENV_MAX_FRONTIER, " 500 "),
            (ENV_MAX_ELAPSED_HOURS, "72.5"),
        ]))
        .unwrap();

        assert_eq!(config, SearchConfig::new(7, Some(500), Some(72.5)));
    }

    #[test]
    fn lookup_rejects_garbage() {
        let err = SearchConfig::from_lookup(lookup_from(&[(ENV_MAX_RESULTS, "many")])).unwrap_err();
        assert_eq!(err.key, ENV_MAX_RESULTS);
        assert_eq!(err.to_string(), "invalid value \"many\" for STORM_ROUTER_MAX_RESULTS");
    }

    #[test]
    fn default_frontier_fills_unset_cap() {
        let config = SearchConfig::default().with_default_frontier(10_000);
        assert_eq!(config.max_frontier, Some(10_000));
    }

    #[test]
    fn default_frontier_keeps_explicit_cap() {
        let config = SearchConfig::from_lookup(lookup_from(&[(ENV_MAX_FRONTIER, "50")]))
            .unwrap()
            .with_default_frontier(10_000);
        assert_eq!(config.max_frontier, Some(50));
    }

    #[test]
    fn lookup_rejects_negative_hours() {
        assert!(SearchConfig::from_lookup(lookup_from(&[(ENV_MAX_ELAPSED_HOURS, "-1")])).is_err());
        assert!(SearchConfig::from_lookup(lookup_from(&[(ENV_MAX_ELAPSED_HOURS, "NaN")])).is_err());
    }
}
