use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub api_key: Option<String>,
    pub upstream_url: Option<String>,

    pub rate_limit_per_second: Option<u64>,
}

static DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 5;

impl Envy {
    /// Returns the upstream credential, treating an empty value as absent.
    pub fn credential(&self) -> Option<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Some(key),
            _ => None,
        }
    }

    /// Requests per second allowed through the server throttle. Zero is
    /// rejected since the throttle could never admit a request.
    pub fn throttle_rate(&self) -> Result<u64, String> {
        match self.rate_limit_per_second {
            Some(0) => Err("RATE_LIMIT_PER_SECOND must be greater than zero".to_string()),
            Some(rate) => Ok(rate),
            None => Ok(DEFAULT_RATE_LIMIT_PER_SECOND),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_env_pairs() {
        let vars = vec![
            ("API_KEY".to_string(), "secret".to_string()),
            ("PORT".to_string(), "8080".to_string()),
        ];

        let envy = envy::from_iter::<_, Envy>(vars).unwrap();

        assert_eq!(envy.port, Some(8080));
        assert_eq!(envy.credential(), Some("secret"));
        assert!(envy.upstream_url.is_none());
        assert_eq!(envy.throttle_rate(), Ok(5));
    }

    #[test]
    fn zero_rate_limit_is_rejected() {
        let vars = vec![("RATE_LIMIT_PER_SECOND".to_string(), "0".to_string())];

        let envy = envy::from_iter::<_, Envy>(vars).unwrap();

        assert!(envy.throttle_rate().is_err());
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let vars = vec![("API_KEY".to_string(), "   ".to_string())];

        let envy = envy::from_iter::<_, Envy>(vars).unwrap();

        assert_eq!(envy.credential(), None);
    }
}
