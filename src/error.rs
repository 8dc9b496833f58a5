// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures signalled by the entity store and the validation boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A payload field is missing or malformed. Raised by the validation
    /// boundary before a payload reaches the store.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced id does not exist, including a transaction's account.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// A store-side invariant was violated: non-positive amount on create,
    /// or a persisted value that no longer parses.
    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
