// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod config;
pub mod errors;
pub mod lowerer;
pub mod typedefs;

pub use config::{IndexBase, LoweringConfig, LoweringConfigBuilder};
pub use errors::LoweringError;
pub use lowerer::{lower_unit, AstToTacLowerer};
