//! First-run detection
//!
//! A visitor is new until the `isNewUser` key exists. Dismissing the welcome
//! overlay, by any of its controls, writes the key.

use tracing::{info, warn};

use crate::store::kv::{KeyValueStore, Result};

/// Storage key marking that the welcome overlay was dismissed
pub const NEW_USER_KEY: &str = "isNewUser";

/// True when the welcome overlay should be shown.
///
/// Storage read errors count as a returning user.
pub fn is_new_user(kv: &dyn KeyValueStore) -> bool {
    match kv.get(NEW_USER_KEY) {
        Ok(value) => value.is_none(),
        Err(e) => {
            warn!("Could not read {}: {}", NEW_USER_KEY, e);
            false
        }
    }
}

/// Record that the welcome overlay has been dismissed
pub fn mark_returning(kv: &dyn KeyValueStore) -> Result<()> {
    kv.set(NEW_USER_KEY, "false")?;
    info!("First-run overlay dismissed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;

    #[test]
    fn test_absent_key_means_new_user() {
        let kv = MemoryStore::new();
        assert!(is_new_user(&kv));
    }

    #[test]
    fn test_mark_returning() {
        let kv = MemoryStore::new();
        mark_returning(&kv).unwrap();
        assert!(!is_new_user(&kv));
        assert_eq!(kv.get(NEW_USER_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_any_value_means_returning() {
        let kv = MemoryStore::new();
        kv.set(NEW_USER_KEY, "true").unwrap();
        assert!(!is_new_user(&kv));
    }
}
