// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::ir_instr::IRInstr;
use crate::ir_operands::IRVar;
use crate::ir_types::SlotId;

/// Three-address code of one compiled unit: a straight-line list of
/// instructions plus the variable slots they refer to.
#[derive(Debug, Default, Clone)]
pub struct TacUnit {
    pub name: String,

    instrs: Vec<IRInstr>,

    /// Variable slots in first-use order.
    vars: IndexMap<Arc<str>, SlotId>,
}

impl TacUnit {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            instrs: vec![],
            vars: IndexMap::new(),
        }
    }

    pub fn push(&mut self, instr: IRInstr) {
        self.instrs.push(instr);
    }

    /// Returns the slot for `name`, allocating the next one on first use.
    pub fn intern_var(&mut self, name: &str) -> IRVar {
        if let Some((key, slot)) = self.vars.get_key_value(name) {
            return IRVar { name: key.clone(), slot: *slot };
        }
        let slot = self.vars.len();
        let key: Arc<str> = Arc::from(name);
        self.vars.insert(key.clone(), slot);
        IRVar { name: key, slot }
    }

    pub fn lookup_var(&self, name: &str) -> Option<IRVar> {
        self.vars
            .get_key_value(name)
            .map(|(key, slot)| IRVar { name: key.clone(), slot: *slot })
    }

    pub fn instrs(&self) -> &[IRInstr] {
        &self.instrs
    }

    pub fn vars(&self) -> impl Iterator<Item = IRVar> + '_ {
        self.vars
            .iter()
            .map(|(name, slot)| IRVar { name: name.clone(), slot: *slot })
    }

    pub fn len(&self) -> usize {
        self.instrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instrs.is_empty()
    }

    /// One instruction per line, no header. Used for snapshot comparisons.
    pub fn dump(&self) -> String {
        self.instrs.iter().join("\n")
    }
}

impl fmt::Display for TacUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "unit {}:", self.name)?;
        for (idx, instr) in self.instrs.iter().enumerate() {
            writeln!(f, "{idx:>4}: {instr}")?;
        }
        Ok(())
    }
}
