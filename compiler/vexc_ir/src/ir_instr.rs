// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt;

use crate::ir_operands::*;

/// Left-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IRTarget {
    Temp(TempId),

    Var(IRVar),
}

impl IRTarget {
    pub fn as_temp(&self) -> Option<TempId> {
        match self {
            Self::Temp(id) => Some(*id),
            _ => None
        }
    }
}

impl From<IRTarget> for IROperand {
    fn from(value: IRTarget) -> Self {
        match value {
            IRTarget::Temp(id) => IROperand::Temp(id),
            IRTarget::Var(var) => IROperand::Var(var),
        }
    }
}

impl fmt::Display for IRTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temp(id) => write!(f, "{id}"),
            Self::Var(var) => f.write_str(&var.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IRInstr {
    /// `target := src`
    ///
    /// Covers plain moves and every composite read, element access
    /// included.
    Assign {
        target: IRTarget,
        src: IROperand
    },

    Return(IROperand),
}

impl IRInstr {
    pub fn assign_temp(temp: TempId, src: IROperand) -> Self {
        Self::Assign {
            target: IRTarget::Temp(temp),
            src
        }
    }

    pub fn dest(&self) -> Option<&IRTarget> {
        match self {
            Self::Assign { target, .. } => Some(target),
            Self::Return(_) => None
        }
    }

    /// The operand this instruction reads.
    pub fn src(&self) -> &IROperand {
        match self {
            Self::Assign { src, .. } => src,
            Self::Return(value) => value
        }
    }

    /// Temporaries read by this instruction.
    pub fn used_temps(&self) -> Vec<TempId> {
        self.src().temps()
    }
}

impl fmt::Display for IRInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign { target, src } => write!(f, "{target} := {src}"),
            Self::Return(value) => write!(f, "return {value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_rendering() {
        let access = IROperand::element_access(IROperand::var("x", 0), IROperand::temp(1));
        let instr = IRInstr::assign_temp(TempId(2), access);
        assert_eq!(instr.to_string(), "t2 := x[t1]");
        assert_eq!(instr.dest(), Some(&IRTarget::Temp(TempId(2))));
        assert_eq!(instr.used_temps(), vec![TempId(1)]);
    }

    #[test]
    fn test_return_has_no_dest() {
        let ret = IRInstr::Return(IROperand::temp(5));
        assert!(ret.dest().is_none());
        assert_eq!(ret.to_string(), "return t5");
        assert_eq!(ret.src(), &IROperand::temp(5));
    }

    #[test]
    fn test_target_converts_to_operand() {
        let target = IRTarget::Var(IRVar::new("y", 3));
        assert_eq!(IROperand::from(target.clone()), IROperand::var("y", 3));
        assert_eq!(target.to_string(), "y");
        assert_eq!(target.as_temp(), None);
    }
}
