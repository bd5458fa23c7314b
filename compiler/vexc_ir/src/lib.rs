// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

//! Three-address code operands and instructions.

pub mod ir_types;
pub mod ir_operands;
pub mod element_access;
pub mod ir_instr;
pub mod temp;
pub mod unit;
pub mod errors;
pub mod verify;

pub use element_access::ElementAccess;
pub use errors::IRError;
pub use ir_instr::{IRInstr, IRTarget};
pub use ir_operands::*;
pub use ir_types::{IRBinOp, IRUnaryOp, SlotId};
pub use temp::TempAllocator;
pub use unit::TacUnit;
pub use verify::verify_unit;
