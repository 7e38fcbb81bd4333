use keyring::Entry;

use crate::domain::error::{AppError, Result};

const KEYRING_SERVICE: &str = "Keeko";

/// Thin wrapper over the OS keyring. One entry per model provider, all under
/// the application's service name.
pub struct KeyringManager;

impl KeyringManager {
    fn entry(key: &str) -> Result<Entry> {
        Entry::new(KEYRING_SERVICE, key).map_err(|e| {
            AppError::SecurityError(format!("Failed to open keyring entry '{}': {}", key, e))
        })
    }

    pub fn set_secret(key: &str, secret: &str) -> Result<()> {
        Self::entry(key)?
            .set_password(secret)
            .map_err(|e| AppError::SecurityError(format!("Failed to store secret: {}", e)))
    }

    pub fn get_secret(key: &str) -> Result<String> {
        Self::entry(key)?
            .get_password()
            .map_err(|e| AppError::SecurityError(format!("Failed to read secret: {}", e)))
    }

    pub fn delete_secret(key: &str) -> Result<()> {
        Self::entry(key)?
            .delete_credential()
            .map_err(|e| AppError::SecurityError(format!("Failed to delete secret: {}", e)))
    }
}
