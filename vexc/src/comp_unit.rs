// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use vexc_ast::Stmt;
use vexc_ir::TacUnit;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnitStage {
    /// Statements have been handed over by the parser.
    Parsed,

    /// Three-address code has been generated.
    Lowered,

    /// The generated code passed the well-formedness check.
    Verified,

    /// Lowering or verification failed for this unit.
    Error,
}

/// One source unit's state throughout the pipeline.
///
/// Each unit gets its own temporary namespace, so lowered units never
/// share temporaries with each other.
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub name: String,

    pub asts: Vec<Stmt>,

    /// Present once the unit has been lowered.
    pub tac: Option<TacUnit>,

    pub stage: UnitStage,
}

impl CompilationUnit {
    pub fn new(name: &str, asts: Vec<Stmt>) -> Self {
        Self {
            name: name.to_string(),
            asts,
            tac: None,
            stage: UnitStage::Parsed,
        }
    }

    pub fn next_stage(&mut self) {
        self.stage = match self.stage {
            UnitStage::Parsed => UnitStage::Lowered,
            UnitStage::Lowered => UnitStage::Verified,
            other => other,
        };
    }

    pub fn is_verified(&self) -> bool {
        self.stage == UnitStage::Verified
    }
}
