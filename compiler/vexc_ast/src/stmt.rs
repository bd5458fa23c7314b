// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use super::Expr;

/// `name <- value`
#[derive(Clone, Debug, PartialEq)]
pub struct AssignStmt {
    /// Name of the variable being assigned.
    pub name: String,

    pub value: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Assign(AssignStmt),

    /// Expression evaluated for its effects.
    Expr(Expr),

    Return(Expr),
}

impl Stmt {
    pub fn assign(name: &str, value: Expr) -> Self {
        Stmt::Assign(AssignStmt { name: name.to_string(), value })
    }
}
