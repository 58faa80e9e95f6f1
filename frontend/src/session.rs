use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use shared::SessionIdentity;

const SESSION_KEY: &str = "user";

/// Signed-in identity, loaded once at startup and handed down explicitly.
/// Presence gates protected pages and history writes; it is never checked
/// against the server.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionContext {
    identity: Option<SessionIdentity>,
}

impl SessionContext {
    pub fn load() -> Self {
        let identity = match LocalStorage::get::<SessionIdentity>(SESSION_KEY) {
            Ok(identity) => {
                log::info!("Restored session for {}", identity.email);
                Some(identity)
            }
            Err(StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                log::warn!("Discarding unreadable session record: {:?}", e);
                LocalStorage::delete(SESSION_KEY);
                None
            }
        };
        Self { identity }
    }

    pub fn sign_in(&mut self, identity: SessionIdentity) {
        if let Err(e) = LocalStorage::set(SESSION_KEY, &identity) {
            log::error!("Failed to persist session: {:?}", e);
        }
        self.identity = Some(identity);
    }

    pub fn sign_out(&mut self) {
        LocalStorage::delete(SESSION_KEY);
        self.identity = None;
    }

    pub fn identity(&self) -> Option<&SessionIdentity> {
        self.identity.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }
}
