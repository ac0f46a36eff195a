//! Server state management
//!
//! The roster is read-only after startup; the RNG is shared by every
//! request that generates a team or simulates a match.

use elevens_core::Roster;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Server-wide shared state
pub struct ServerState {
    pub roster: Roster,
    rng: Mutex<ChaCha8Rng>,
}

impl ServerState {
    pub fn new(roster: Roster, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            roster,
            rng: Mutex::new(rng),
        }
    }

    /// Lock the shared RNG
    pub fn rng(&self) -> MutexGuard<'_, ChaCha8Rng> {
        // The RNG has no invariants a panicking holder could break
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(Roster::sample(), None)
    }
}
