// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Name to gatherable resolution
//!
//! The matching algorithm (fuzzy search, languages, ...) belongs to the
//! host; the gather stages only consume its answers.

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeIdentificator, IdentifyQuery};

use gb_core::{Fish, Gatherable};

/// Resolves user-typed names to gatherables
pub trait Identificator {
    /// Resolve any gatherable item or fish
    fn identify_gatherable(&self, name: &str) -> Option<Gatherable>;

    /// Resolve a fish only
    fn identify_fish(&self, name: &str) -> Option<Fish>;
}

/// Identificator that knows nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpIdentificator;

impl Identificator for NoOpIdentificator {
    fn identify_gatherable(&self, _name: &str) -> Option<Gatherable> {
        None
    }

    fn identify_fish(&self, _name: &str) -> Option<Fish> {
        None
    }
}
