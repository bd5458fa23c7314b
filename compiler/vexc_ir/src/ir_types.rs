// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use vexc_ast::{BinOp, UnaryOp};

/// Variable slot index, assigned per unit in first-use order.
pub type SlotId = usize;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum IRBinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Eq,
    NEq,
    LThan,
    LtEq,
    GThan,
    GtEq,
    And,
    Or,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum IRUnaryOp {
    Neg,
    Not,
}

lazy_static! {
    /// Binding strength used when rendering nested infix operands.
    /// Higher binds tighter.
    pub static ref BINOP_PRECEDENCE: HashMap<IRBinOp, u8> = {
        let mut table = HashMap::new();
        table.insert(IRBinOp::Or, 1);
        table.insert(IRBinOp::And, 2);
        for op in [IRBinOp::Eq, IRBinOp::NEq, IRBinOp::LThan, IRBinOp::LtEq, IRBinOp::GThan, IRBinOp::GtEq] {
            table.insert(op, 4);
        }
        table.insert(IRBinOp::Add, 5);
        table.insert(IRBinOp::Sub, 5);
        table.insert(IRBinOp::Mul, 6);
        table.insert(IRBinOp::Div, 6);
        table.insert(IRBinOp::Mod, 7);
        table.insert(IRBinOp::Pow, 9);
        table
    };
}

impl IRBinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%%",
            Self::Pow => "^",
            Self::Eq => "==",
            Self::NEq => "!=",
            Self::LThan => "<",
            Self::LtEq => "<=",
            Self::GThan => ">",
            Self::GtEq => ">=",
            Self::And => "&",
            Self::Or => "|",
        }
    }

    pub fn precedence(&self) -> u8 {
        BINOP_PRECEDENCE.get(self).copied().unwrap_or(0)
    }
}

impl IRUnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
        }
    }

    /// Same scale as [`IRBinOp::precedence`]. `!` binds looser than
    /// comparisons, `-` looser only than `^`.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Not => 3,
            Self::Neg => 8,
        }
    }
}

impl fmt::Display for IRBinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for IRUnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<BinOp> for IRBinOp {
    fn from(value: BinOp) -> Self {
        match value {
            BinOp::Add => Self::Add,
            BinOp::Subtract => Self::Sub,
            BinOp::Multiply => Self::Mul,
            BinOp::Divide => Self::Div,
            BinOp::Modulo => Self::Mod,
            BinOp::Power => Self::Pow,
            BinOp::EqEq => Self::Eq,
            BinOp::NEq => Self::NEq,
            BinOp::LThan => Self::LThan,
            BinOp::LtEq => Self::LtEq,
            BinOp::GThan => Self::GThan,
            BinOp::GtEq => Self::GtEq,
            BinOp::And => Self::And,
            BinOp::Or => Self::Or,
        }
    }
}

impl From<UnaryOp> for IRUnaryOp {
    fn from(value: UnaryOp) -> Self {
        match value {
            UnaryOp::Negate => Self::Neg,
            UnaryOp::Not => Self::Not,
        }
    }
}
