//! Environment input sources.
//!
//! The assembler never touches `std::env` directly; it reads through an
//! [`EnvSource`] so that the same inputs always give the same output.

use indexmap::IndexMap;

/// Signing credential for remote networks.
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";

/// Infura project identifier, embedded in provider-hosted URLs.
pub const INFURA_PROJECT_ID: &str = "INFURA_PROJECT_ID";

/// Credential for the contract verification service.
pub const ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";

/// A read-only mapping from variable name to value.
pub trait EnvSource {
    /// Look up a variable. `None` when unset.
    fn get(&self, name: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Returns the value of `name` only when it is set and non-empty.
pub fn present(source: &impl EnvSource, name: &str) -> Option<String> {
    source.get(name).filter(|value| !value.is_empty())
}

/// True iff `name` is set to a non-empty string.
pub fn is_present(source: &impl EnvSource, name: &str) -> bool {
    present(source, name).is_some()
}

/// Reads the live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        // Non-UTF-8 values cannot be credentials; treat them as unset.
        std::env::var(name).ok()
    }
}

/// Environment backed by an in-memory map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: IndexMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment from key-value pairs.
    pub fn from_pairs<I, K, V>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Builder-style [`MapEnv::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Two sources stacked: `primary` wins whenever it has the key.
///
/// `Layered::new(ProcessEnv, dotenv_file)` gives the usual dotenv rule where
/// an exported variable is never overridden by the file.
#[derive(Debug, Clone, Default)]
pub struct Layered<A, B> {
    primary: A,
    fallback: B,
}

impl<A: EnvSource, B: EnvSource> Layered<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: EnvSource, B: EnvSource> EnvSource for Layered<A, B> {
    fn get(&self, name: &str) -> Option<String> {
        self.primary.get(name).or_else(|| self.fallback.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_not_present() {
        let env = MapEnv::new().with(PRIVATE_KEY, "");
        assert_eq!(env.get(PRIVATE_KEY), Some(String::new()));
        assert!(!is_present(&env, PRIVATE_KEY));
        assert_eq!(present(&env, PRIVATE_KEY), None);
    }

    #[test]
    fn test_missing_value_is_not_present() {
        let env = MapEnv::new();
        assert!(!is_present(&env, INFURA_PROJECT_ID));
    }

    #[test]
    fn test_whitespace_value_is_present() {
        // Only the empty string counts as absent; values are not trimmed.
        let env = MapEnv::new().with(ETHERSCAN_API_KEY, " ");
        assert!(is_present(&env, ETHERSCAN_API_KEY));
    }

    #[test]
    fn test_map_env_set_replaces() {
        let mut env = MapEnv::from_pairs([(PRIVATE_KEY, "0x1")]);
        env.set(PRIVATE_KEY, "0x2");
        assert_eq!(env.len(), 1);
        assert_eq!(env.get(PRIVATE_KEY).as_deref(), Some("0x2"));
    }

    #[test]
    fn test_layered_primary_wins() {
        let primary = MapEnv::from_pairs([(PRIVATE_KEY, "0xprimary")]);
        let fallback = MapEnv::from_pairs([(PRIVATE_KEY, "0xfile"), (INFURA_PROJECT_ID, "abc")]);
        let env = Layered::new(primary, fallback);

        assert_eq!(env.get(PRIVATE_KEY).as_deref(), Some("0xprimary"));
        assert_eq!(env.get(INFURA_PROJECT_ID).as_deref(), Some("abc"));
        assert_eq!(env.get(ETHERSCAN_API_KEY), None);
    }

    #[test]
    fn test_layered_empty_primary_still_shadows() {
        // An exported empty variable shadows the file and stays absent.
        let primary = MapEnv::from_pairs([(PRIVATE_KEY, "")]);
        let fallback = MapEnv::from_pairs([(PRIVATE_KEY, "0xfile")]);
        let env = Layered::new(primary, fallback);

        assert!(!is_present(&env, PRIVATE_KEY));
    }
}
