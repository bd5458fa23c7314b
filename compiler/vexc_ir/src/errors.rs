// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use thiserror::Error;

use crate::ir_operands::TempId;

/// Internal consistency failures found by [`verify_unit`](crate::verify::verify_unit).
///
/// These indicate a bug in whatever produced the IR, never a problem with
/// the user's program.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IRError {
    /// A composite operand holds something other than a constant,
    /// temporary, variable or function reference.
    #[error("instruction {at}: `{operand}` is not normalized, `{sub}` must be named by a temporary first")]
    UnnormalizedOperand {
        at: usize,
        operand: String,
        sub: String,
    },

    /// Composite operand found where only a simple operand may appear.
    #[error("instruction {at}: composite operand `{operand}` cannot appear here")]
    MisplacedComposite {
        at: usize,
        operand: String,
    },

    #[error("instruction {at}: {temp} already produced by instruction {first}")]
    TempRedefined {
        temp: TempId,
        first: usize,
        at: usize,
    },

    #[error("instruction {at}: {temp} used before it is defined")]
    TempUsedBeforeDef {
        temp: TempId,
        at: usize,
    },
}
