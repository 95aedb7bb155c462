// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors surfaced by the store layer. Validation of user input (empty
/// fields, non-positive amounts, overlapping time ranges) happens in the
/// command layer before the store is touched, so it never shows up here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{what} not found (id {id})")]
    NotFound { what: &'static str, id: i64 },

    #[error("invalid {column} value '{value}'")]
    BadColumn { column: &'static str, value: String },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
