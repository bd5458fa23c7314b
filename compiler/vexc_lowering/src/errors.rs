// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use thiserror::Error;

/// Source constructs the lowering pass refuses to translate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoweringError {
    /// `x[]` selects every element, which is not a single-element access.
    #[error("subscript of `{target}` has no index")]
    EmptySubscript {
        target: String
    },

    /// `x[i, j]` (matrix style) indexing.
    #[error("subscript of `{target}` has {count} indices, only single-index access is supported")]
    MultiSubscript {
        target: String,
        count: usize
    },

    /// A one-based literal index with no zero-based counterpart.
    #[error("index {index} of `{target}` cannot be shifted to a zero-based position")]
    IndexOverflow {
        target: String,
        index: i64
    },
}
