// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use vexc_ir::IROperand;

use crate::errors::LoweringError;

/// Result of lowering an expression: the simple operand naming its value.
pub type ExprLoweringResult = Result<IROperand, LoweringError>;

pub type StmtLoweringResult = Result<(), LoweringError>;
