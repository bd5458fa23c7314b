// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

/// Represents literal values as they appear in source code.
///
/// Every literal is a length-one vector at runtime; the parser never
/// produces vector literals directly, those come from calls such as `c(...)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal (`1L`).
    Int(i64),

    /// Double precision literal (`1`, `2.5`).
    Double(f64),

    /// String literal.
    Str(String),

    /// `TRUE` / `FALSE`
    Logical(bool),

    /// `NULL`
    Null,
}
