//! Fixed-token provider.
//!
//! For setups where the token is obtained out of band (server-rendered
//! pages, scripted checks) and handed to the client ready-made.

use crate::domain::ProviderError;
use crate::ports::BotCheckProvider;
use async_trait::async_trait;
use parking_lot::RwLock;

/// Provider that always hands out the same token once one is set.
#[derive(Debug, Default)]
pub struct StaticTokenProvider {
    token: RwLock<Option<String>>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// A provider that is not ready until [`set_token`](Self::set_token).
    pub fn not_ready() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }
}

#[async_trait]
impl BotCheckProvider for StaticTokenProvider {
    fn is_ready(&self) -> bool {
        self.token.read().is_some()
    }

    async fn token(&self, _action: &str) -> Result<String, ProviderError> {
        self.token.read().clone().ok_or(ProviderError::NotReady)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_ready_until_token_set() {
        let provider = StaticTokenProvider::not_ready();
        assert!(!provider.is_ready());
        assert!(matches!(provider.token("contact_form").await, Err(ProviderError::NotReady)));

        provider.set_token("abc");
        assert!(provider.is_ready());
        assert_eq!(provider.token("contact_form").await.unwrap(), "abc");
    }
}
