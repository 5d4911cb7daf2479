use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{error::ApiError, types::TokenPair};

/// Holder of the current access/refresh token pair.
///
/// Clones share the same pair. The callback path is the only writer; every
/// upstream call reads. The pair is replaced as a whole under a write lock so
/// readers never observe half of an update.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    pair: Arc<RwLock<Option<TokenPair>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored pair unconditionally.
    pub async fn set(&self, access_token: String, refresh_token: String) {
        let mut pair = self.pair.write().await;
        *pair = Some(TokenPair {
            access_token,
            refresh_token,
        });
    }

    /// Returns the current access token.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthenticated`] if no pair was ever stored.
    pub async fn get(&self) -> Result<String, ApiError> {
        self.pair
            .read()
            .await
            .as_ref()
            .map(|pair| pair.access_token.clone())
            .ok_or(ApiError::Unauthenticated)
    }

    pub async fn current(&self) -> Option<TokenPair> {
        self.pair.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.pair.read().await.is_some()
    }
}
