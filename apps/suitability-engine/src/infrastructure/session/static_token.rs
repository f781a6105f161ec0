//! Bearer tokens resolved from a fixed table.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::application::ports::SessionPort;
use crate::domain::shared::OwnerId;

/// Session provider backed by a configured token table.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenSessionProvider {
    tokens: HashMap<String, OwnerId>,
}

impl StaticTokenSessionProvider {
    /// Build from `(token, owner)` pairs. Blank tokens are ignored.
    #[must_use]
    pub fn new<I, T, O>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, O)>,
        T: Into<String>,
        O: Into<OwnerId>,
    {
        let tokens = entries
            .into_iter()
            .map(|(token, owner)| (token.into(), owner.into()))
            .filter(|(token, _)| !token.trim().is_empty())
            .collect();
        Self { tokens }
    }

    /// Number of known tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no token can authenticate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl SessionPort for StaticTokenSessionProvider {
    async fn authenticate(&self, token: &str) -> Option<OwnerId> {
        self.tokens.get(token).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_resolves_owner() {
        let provider = StaticTokenSessionProvider::new([("secret-1", "advisor-1")]);
        assert_eq!(
            provider.authenticate("secret-1").await,
            Some(OwnerId::new("advisor-1"))
        );
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let provider = StaticTokenSessionProvider::new([("secret-1", "advisor-1")]);
        assert_eq!(provider.authenticate("secret-2").await, None);
        assert_eq!(provider.authenticate("").await, None);
    }

    #[test]
    fn blank_tokens_are_dropped() {
        let provider = StaticTokenSessionProvider::new([("  ", "advisor-1"), ("t", "advisor-2")]);
        assert_eq!(provider.len(), 1);
        assert!(!provider.is_empty());
    }
}
