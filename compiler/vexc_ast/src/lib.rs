// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

mod expr;
mod stmt;
mod operation;
mod value;

pub use expr::*;
pub use stmt::*;
pub use operation::*;
pub use value::*;
