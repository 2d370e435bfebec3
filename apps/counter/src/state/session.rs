//! # Session State
//!
//! The whole counter session (catalog, sales, clients, suppliers,
//! prescriptions, settings, and the POS cart) behind one mutex.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SessionState  (clone = another handle to the same session)            │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │  Arc<Mutex<Session>>                                             │ │
//! │  │  ┌────────────────────────────┐   ┌──────────────────────────┐   │ │
//! │  │  │ Pharmacy                   │   │ PosSession               │   │ │
//! │  │  │  catalog, sales, clients,  │   │  cart + Building/Paying  │   │ │
//! │  │  │  suppliers, prescriptions, │   │                          │   │ │
//! │  │  │  settings                  │   │                          │   │ │
//! │  │  └────────────────────────────┘   └──────────────────────────┘   │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command runs to completion inside one `with_session*` call, so a
//! checkout (sale appended + stock decremented + cart emptied) is never
//! observed half done. Nothing is awaited while the lock is held.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use officine_core::PosSession;
use officine_store::Pharmacy;

/// Everything one counter session mutates.
#[derive(Debug, Clone)]
pub struct Session {
    pub pharmacy: Pharmacy,
    pub pos: PosSession,
}

/// Shared session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>`: the shell and any background task share the
/// same session, and only one of them touches it at a time. Operations are
/// short and mostly writes, so a `RwLock` would buy nothing.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Wraps an existing pharmacy with an empty cart.
    pub fn new(pharmacy: Pharmacy) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session {
                pharmacy,
                pos: PosSession::new(),
            })),
        }
    }

    /// The demo data set, with sale dates relative to `now`.
    pub fn with_fixtures(now: DateTime<Utc>) -> Self {
        Self::new(Pharmacy::with_fixtures(now))
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        // A panic inside a command leaves plain data behind; keep serving it.
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = session.with_session(|s| s.pos.totals());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.lock();
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_session_mut(|s| s.pos.begin_checkout())?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.lock();
        f(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use officine_core::PosState;

    #[test]
    fn test_clones_share_the_session() {
        let state = SessionState::with_fixtures(Utc::now());
        let other = state.clone();

        other.with_session_mut(|s| {
            let medicine = s.pharmacy.catalog().get("1").cloned().unwrap();
            s.pos.add_item(&medicine).unwrap();
        });

        assert_eq!(state.with_session(|s| s.pos.cart.quantity_of("1")), 1);
        assert_eq!(state.with_session(|s| s.pos.state), PosState::Building);
    }

    #[test]
    fn test_fixture_session() {
        let state = SessionState::with_fixtures(Utc::now());
        assert_eq!(state.with_session(|s| s.pharmacy.catalog().len()), 6);
        assert!(state.with_session(|s| s.pos.cart.is_empty()));
    }
}
