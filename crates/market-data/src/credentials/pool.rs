use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::credential::Credential;

/// Default name prefix of variables holding price API keys.
pub const DEFAULT_KEY_PREFIX: &str = "GOLD_API_KEY";

/// Credential entries discovered once at startup.
///
/// Built from an explicit list of `(name, value)` pairs so nothing downstream
/// reads process-wide settings.
#[derive(Clone, Debug, Default)]
pub struct CredentialConfig {
    /// Name prefix the entries were matched against
    pub prefix: String,
    /// Matching `(name, value)` entries, sorted by name
    pub entries: Vec<(String, String)>,
}

impl CredentialConfig {
    /// Collect every variable whose name starts with `prefix`.
    pub fn discover<I, K, V>(prefix: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k.starts_with(prefix))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            prefix: prefix.to_string(),
            entries,
        }
    }
}

/// The set of interchangeable API keys available for failover.
#[derive(Clone, Debug, Default)]
pub struct CredentialPool {
    credentials: Vec<Credential>,
}

impl CredentialPool {
    /// Build a pool from literal values, dropping blanks and duplicates.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let credentials = values
            .into_iter()
            .filter_map(|v| {
                let trimmed = v.as_ref().trim();
                if trimmed.is_empty() || !seen.insert(trimmed.to_string()) {
                    None
                } else {
                    Some(Credential::new(trimmed))
                }
            })
            .collect();

        Self { credentials }
    }

    /// Build a pool from discovered configuration entries.
    pub fn from_config(config: &CredentialConfig) -> Self {
        let pool = Self::new(config.entries.iter().map(|(_, v)| v.as_str()));
        debug!(
            "Credential pool: {} usable of {} '{}*' entries",
            pool.len(),
            config.entries.len(),
            config.prefix
        );
        pool
    }

    /// All usable credentials, in discovery order.
    pub fn list_credentials(&self) -> &[Credential] {
        &self.credentials
    }

    /// Every credential exactly once, in a fresh uniformly random order.
    pub fn shuffled_order(&self) -> Vec<Credential> {
        shuffled_order(&self.credentials)
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

/// Uniform random permutation of `credentials`, reseeded on every call.
pub fn shuffled_order(credentials: &[Credential]) -> Vec<Credential> {
    shuffled_order_with(credentials, &mut rand::thread_rng())
}

/// Uniform random permutation of `credentials` drawn from `rng`.
///
/// Fisher-Yates: from the last index down to 1, swap with a uniform index `<= i`.
pub fn shuffled_order_with<R: Rng + ?Sized>(
    credentials: &[Credential],
    rng: &mut R,
) -> Vec<Credential> {
    let mut order = credentials.to_vec();
    order.shuffle(rng);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_discover_filters_by_prefix() {
        let config = CredentialConfig::discover(
            "GOLD_API_KEY",
            vec![
                ("GOLD_API_KEY_2", "key-two"),
                ("PATH", "/usr/bin"),
                ("GOLD_API_KEY", "key-one"),
                ("OTHER_GOLD_API_KEY", "nope"),
            ],
        );
        assert_eq!(
            config.entries,
            vec![
                ("GOLD_API_KEY".to_string(), "key-one".to_string()),
                ("GOLD_API_KEY_2".to_string(), "key-two".to_string()),
            ]
        );
    }

    #[test]
    fn test_pool_discards_blank_values() {
        let config = CredentialConfig::discover(
            "GOLD_API_KEY",
            vec![
                ("GOLD_API_KEY_1", "alpha"),
                ("GOLD_API_KEY_2", ""),
                ("GOLD_API_KEY_3", "   "),
                ("GOLD_API_KEY_4", "beta"),
            ],
        );
        let pool = CredentialPool::from_config(&config);
        let values: Vec<_> = pool.list_credentials().iter().map(|c| c.expose()).collect();
        assert_eq!(values, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_pool_drops_duplicate_values() {
        let pool = CredentialPool::new(["alpha", "beta", " alpha "]);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_empty_pool_is_valid() {
        let pool = CredentialPool::new(Vec::<String>::new());
        assert!(pool.is_empty());
        assert!(pool.shuffled_order().is_empty());
    }

    #[test]
    fn test_shuffle_with_seed_is_permutation() {
        let pool = CredentialPool::new(["a1", "b2", "c3", "d4", "e5"]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut order = shuffled_order_with(pool.list_credentials(), &mut rng);
        assert_eq!(order.len(), 5);
        order.sort_by(|a, b| a.expose().cmp(b.expose()));
        assert_eq!(order, pool.list_credentials().to_vec());
    }

    #[test]
    fn test_single_credential_shuffle() {
        let pool = CredentialPool::new(["only"]);
        assert_eq!(pool.shuffled_order(), vec![Credential::new("only")]);
    }
}
