// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use crate::{BinOp, Literal, UnaryOp};

/// A binary expression AST node.
#[derive(Clone, Debug, PartialEq)]
pub struct BinExpr {
    pub operation: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// A unary expression AST node.
#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpr {
    pub operation: UnaryOp,
    pub operand: Box<Expr>,
}

/// A identifier expression AST node.
#[derive(Clone, Debug, PartialEq)]
pub struct IdentExpr {
    /// Name of the symbol
    pub sym_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LitValExpr {
    pub value: Literal,
}

/// `target[indices...]`
///
/// The parser keeps every comma separated index it finds, including an
/// empty list for `x[]`. Indices are in the source language's own
/// convention; lowering converts them.
#[derive(Clone, Debug, PartialEq)]
pub struct SubscriptExpr {
    pub target: Box<Expr>,
    pub indices: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FuncCallExpr {
    /// Name of the called function
    pub symbol_name: String,

    pub args: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Binary(BinExpr),

    Unary(UnaryExpr),

    Ident(IdentExpr),

    LitVal(LitValExpr),

    Subscript(SubscriptExpr),

    FuncCall(FuncCallExpr),
}

impl Expr {
    pub fn ident(name: &str) -> Self {
        Expr::Ident(IdentExpr { sym_name: name.to_string() })
    }

    pub fn lit(value: Literal) -> Self {
        Expr::LitVal(LitValExpr { value })
    }

    pub fn int(value: i64) -> Self {
        Self::lit(Literal::Int(value))
    }

    pub fn double(value: f64) -> Self {
        Self::lit(Literal::Double(value))
    }

    pub fn binary(operation: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinExpr {
            operation,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary(operation: UnaryOp, operand: Expr) -> Self {
        Expr::Unary(UnaryExpr { operation, operand: Box::new(operand) })
    }

    /// Single index subscript, `target[index]`.
    pub fn subscript(target: Expr, index: Expr) -> Self {
        Expr::Subscript(SubscriptExpr {
            target: Box::new(target),
            indices: vec![index],
        })
    }

    pub fn call(name: &str, args: Vec<Expr>) -> Self {
        Expr::FuncCall(FuncCallExpr {
            symbol_name: name.to_string(),
            args,
        })
    }
}
