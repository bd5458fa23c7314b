// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt;
use std::sync::Arc;

use crate::ir_operands::{fmt_grouped, IROperand};

/// Extracts a single element from a vector.
///
/// A pure descriptor: building one performs no indexing, no bounds check
/// and no type check. The extraction happens when the instruction holding
/// it executes. `index` is always zero-based; conversion from the source
/// language's convention happens during lowering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementAccess {
    vector: Arc<IROperand>,
    index: Arc<IROperand>,
}

impl ElementAccess {
    pub fn new(vector: IROperand, index: IROperand) -> Self {
        Self::from_shared(Arc::new(vector), Arc::new(index))
    }

    /// Builds an access over sub-operands that are already shared with
    /// other parts of the IR.
    pub fn from_shared(vector: Arc<IROperand>, index: Arc<IROperand>) -> Self {
        Self { vector, index }
    }

    /// The container being indexed.
    pub fn vector(&self) -> &IROperand {
        &self.vector
    }

    /// The operand holding the zero-based index of the element to extract.
    pub fn index(&self) -> &IROperand {
        &self.index
    }

    pub fn vector_shared(&self) -> &Arc<IROperand> {
        &self.vector
    }

    pub fn index_shared(&self) -> &Arc<IROperand> {
        &self.index
    }
}

impl fmt::Display for ElementAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_grouped(f, &self.vector, self.vector.is_infix())?;
        write!(f, "[{}]", self.index)
    }
}
