// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::collections::HashMap;

use log::trace;

use crate::errors::IRError;
use crate::ir_instr::IRInstr;
use crate::ir_operands::{IROperand, TempId};
use crate::unit::TacUnit;

/// Checks that a lowered unit is in normalized three-address form:
///
/// - composite operands appear only as the source of an assignment and
///   all of their sub-operands are simple (element accesses in particular
///   never index with, or into, an unevaluated expression),
/// - `return` reads a simple operand,
/// - every temporary has exactly one producer,
/// - every temporary is produced before it is read.
pub fn verify_unit(unit: &TacUnit) -> Result<(), IRError> {
    let mut producers: HashMap<TempId, usize> = HashMap::new();

    for (at, instr) in unit.instrs().iter().enumerate() {
        match instr {
            IRInstr::Assign { src, .. } => check_source(src, at)?,
            IRInstr::Return(value) => {
                if value.is_composite() {
                    return Err(IRError::MisplacedComposite { at, operand: value.to_string() });
                }
            }
        }

        for temp in instr.used_temps() {
            if !producers.contains_key(&temp) {
                return Err(IRError::TempUsedBeforeDef { temp, at });
            }
        }

        if let Some(temp) = instr.dest().and_then(|target| target.as_temp()) {
            if let Some(first) = producers.insert(temp, at) {
                return Err(IRError::TempRedefined { temp, first, at });
            }
        }
    }

    trace!("verified unit `{}` ({} instructions)", unit.name, unit.len());
    Ok(())
}

fn check_source(src: &IROperand, at: usize) -> Result<(), IRError> {
    match src.sub_operands().into_iter().find(|sub| sub.is_composite()) {
        Some(sub) => Err(IRError::UnnormalizedOperand {
            at,
            operand: src.to_string(),
            sub: sub.to_string(),
        }),
        None => Ok(())
    }
}
