use std::sync::Arc;

use jsonwebtoken::{DecodingKey, Validation};

use crate::repositories::Store;

#[derive(Clone)]
pub struct JwtKeys {
    pub decoding: DecodingKey,
    pub validation: Validation,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        JwtKeys {
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::default(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub jwt_keys: JwtKeys,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, jwt_secret: &str) -> Self {
        AppState {
            store,
            jwt_keys: JwtKeys::from_secret(jwt_secret.as_bytes()),
        }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}
