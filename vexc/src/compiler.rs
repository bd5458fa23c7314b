// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, info, warn};
use thiserror::Error;

use vexc_ir::{verify_unit, IRError, TacUnit};
use vexc_lowering::{lower_unit, LoweringConfig, LoweringError};

use crate::comp_unit::{CompilationUnit, UnitStage};

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("unit `{unit}`: {source}")]
    Lowering {
        unit: String,
        #[source]
        source: LoweringError,
    },

    /// The lowering pass produced IR that breaks the three-address
    /// invariants. This is a compiler bug.
    #[error("unit `{unit}`: internal compiler error: {source}")]
    Internal {
        unit: String,
        #[source]
        source: IRError,
    },

    #[error("unit `{0}` was already added")]
    DuplicateUnit(String),
}

#[derive(Debug)]
pub struct CompilerPipeline {
    config: LoweringConfig,

    /// Units in the order they were added.
    units: IndexMap<String, CompilationUnit>,
}

impl CompilerPipeline {
    pub fn new(config: LoweringConfig) -> Self {
        Self {
            config,
            units: IndexMap::new(),
        }
    }

    pub fn add_unit(&mut self, unit: CompilationUnit) -> Result<(), CompileError> {
        if self.has_unit(&unit.name) {
            return Err(CompileError::DuplicateUnit(unit.name));
        }
        self.units.insert(unit.name.clone(), unit);
        Ok(())
    }

    pub fn has_unit(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    pub fn unit(&self, name: &str) -> Option<&CompilationUnit> {
        self.units.get(name)
    }

    pub fn units(&self) -> impl Iterator<Item = &CompilationUnit> {
        self.units.values()
    }

    /// Lowers and verifies every unit that has not been verified yet and
    /// returns how many were compiled.
    ///
    /// Stops at the first failing unit; units before it stay verified.
    pub fn compile_all(&mut self) -> Result<usize, CompileError> {
        let config = self.config;
        let mut compiled = 0;
        for unit in self.units.values_mut().filter(|unit| !unit.is_verified()) {
            Self::compile_unit(config, unit)?;
            compiled += 1;
        }
        info!("compiled {compiled} of {} unit(s)", self.units.len());
        Ok(compiled)
    }

    fn compile_unit(config: LoweringConfig, unit: &mut CompilationUnit) -> Result<(), CompileError> {
        // a unit that failed earlier starts over
        unit.stage = UnitStage::Parsed;
        unit.tac = None;

        let tac = match lower_unit(&unit.name, &unit.asts, config) {
            Ok(tac) => tac,
            Err(source) => {
                warn!("unit `{}` failed to lower: {source}", unit.name);
                unit.stage = UnitStage::Error;
                return Err(CompileError::Lowering { unit: unit.name.clone(), source });
            }
        };
        unit.next_stage();

        if let Err(source) = verify_unit(&tac) {
            warn!("unit `{}` produced malformed IR: {source}", unit.name);
            unit.stage = UnitStage::Error;
            unit.tac = Some(tac);
            return Err(CompileError::Internal { unit: unit.name.clone(), source });
        }
        unit.next_stage();

        debug!("{tac}");
        unit.tac = Some(tac);
        Ok(())
    }

    /// IR dump of every verified unit.
    pub fn dump(&self) -> String {
        self.units
            .values()
            .filter(|unit| unit.is_verified())
            .filter_map(|unit| unit.tac.as_ref())
            .map(TacUnit::to_string)
            .join("\n")
    }
}
