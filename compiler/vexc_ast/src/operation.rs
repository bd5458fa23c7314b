// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

/// Binary operators of the source language.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,

    // relational operators
    EqEq,
    NEq,
    LThan,
    LtEq,
    GThan,
    GtEq,

    // element-wise logical operators
    And,
    Or,
}

/// Unary operators of the source language.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnaryOp {
    Negate,
    Not,
}
