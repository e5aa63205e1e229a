//! Session state: single source of truth for "who is logged in".
//!
//! The [`SessionStore`] is the writer handle and is owned by the auth
//! gateway; everything that only needs to *read* the session receives a
//! [`SessionReader`], so the gateway stays the sole writer by construction
//! rather than by convention.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::Identity;
use crate::Role;

/// Read-only view of the session at a point in time.
///
/// `loading` is transient: it is true only while a login or restoration is
/// in flight, and always returns to false when the attempt ends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl Session {
    /// Derived: a session is authenticated iff an identity is held.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }
}

#[derive(Debug, Default)]
struct State {
    identity: Option<Identity>,
    /// Open transitions; the session reports `loading` while this is > 0,
    /// so overlapping operations cannot strand the flag.
    in_flight: u32,
    /// Bumped on every explicit sign-out; commits from transitions begun
    /// under an older epoch are discarded.
    epoch: u64,
}

fn lock(inner: &Mutex<State>) -> MutexGuard<'_, State> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writer handle over the shared session state.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<State>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cloneable read-only handle for the route guard and navigation shell.
    pub fn reader(&self) -> SessionReader {
        SessionReader {
            inner: Arc::clone(&self.inner),
        }
    }

    pub fn snapshot(&self) -> Session {
        snapshot(&self.inner)
    }

    /// Open an identity transition (login or restoration).
    ///
    /// The returned guard keeps the session in `loading` until it is
    /// committed or dropped; drop covers every early-return and error path.
    pub fn begin(&self) -> AuthTransition {
        let mut state = lock(&self.inner);
        state.in_flight += 1;
        AuthTransition {
            inner: Arc::clone(&self.inner),
            epoch: state.epoch,
            open: true,
        }
    }

    /// Drop the identity unconditionally (sign-out). Idempotent.
    ///
    /// Bumps the epoch so transitions begun before this call can no longer
    /// commit: a restoration that resolves after an explicit logout is
    /// discarded instead of resurrecting the session.
    pub fn clear(&self) {
        let mut state = lock(&self.inner);
        state.identity = None;
        state.epoch += 1;
    }
}

/// Cloneable read-only session handle.
#[derive(Debug, Clone)]
pub struct SessionReader {
    inner: Arc<Mutex<State>>,
}

impl SessionReader {
    pub fn snapshot(&self) -> Session {
        snapshot(&self.inner)
    }
}

fn snapshot(inner: &Mutex<State>) -> Session {
    let state = lock(inner);
    Session {
        identity: state.identity.clone(),
        loading: state.in_flight > 0,
    }
}

/// An open identity transition.
///
/// Committing applies the outcome atomically (the identity is fully
/// replaced or fully cleared, never partially written). Dropping without
/// committing only ends the loading interval.
#[derive(Debug)]
pub struct AuthTransition {
    inner: Arc<Mutex<State>>,
    epoch: u64,
    open: bool,
}

impl AuthTransition {
    /// Apply the outcome of the transition.
    ///
    /// Returns false when the store signed out in the meantime and the
    /// write was discarded. Transitions that overlap without an intervening
    /// sign-out share an epoch, so the last one to complete wins.
    pub fn commit(mut self, identity: Option<Identity>) -> bool {
        let mut state = lock(&self.inner);
        let fresh = state.epoch == self.epoch;
        if fresh {
            state.identity = identity;
        }
        state.in_flight = state.in_flight.saturating_sub(1);
        self.open = false;
        fresh
    }
}

impl Drop for AuthTransition {
    fn drop(&mut self) {
        if self.open {
            let mut state = lock(&self.inner);
            state.in_flight = state.in_flight.saturating_sub(1);
        }
    }
}
