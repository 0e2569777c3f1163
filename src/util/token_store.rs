//! Durable slot for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state::session` is the only caller. The browser store mirrors the token
//! into `localStorage` so a reload restores the session; the memory store backs
//! tests and non-browser builds.
//!
//! ERROR HANDLING
//! ==============
//! Writes report `StorageError` instead of panicking. Callers treat a failed
//! write as non-fatal: the session keeps running in memory for the rest of the
//! tab's lifetime.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;

/// Failure to reach or write the durable medium.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// A single-slot token store.
pub trait TokenStore {
    /// Return the stored token, or `None` when the slot is empty or unreadable.
    fn load(&self) -> Option<String>;

    /// Overwrite the slot with `token`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the medium is unavailable or rejects the write.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the stored token. Clearing an empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the medium is unavailable or rejects the removal.
    fn clear(&self) -> Result<(), StorageError>;
}

/// `localStorage`-backed store under [`crate::config::TOKEN_STORAGE_KEY`].
///
/// Outside the browser (`csr` disabled) there is no medium: `load` returns
/// `None` and writes report [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok()?;
            let raw = storage.get_item(crate::config::TOKEN_STORAGE_KEY).ok().flatten()?;
            non_empty(raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(crate::config::TOKEN_STORAGE_KEY, token)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(crate::config::TOKEN_STORAGE_KEY)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process store. Does not survive a reload.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    /// Create a store pre-populated with `token`, as if left by an earlier page load.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { slot: RefCell::new(Some(token.into())) }
    }

    /// Raw slot contents, including values `load` would treat as absent.
    pub fn peek(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone().and_then(non_empty)
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

fn non_empty(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}
