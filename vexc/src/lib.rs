// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod comp_unit;
pub mod compiler;

pub use comp_unit::{CompilationUnit, UnitStage};
pub use compiler::{CompileError, CompilerPipeline};

/// Installs the `env_logger` backend for the `log` macros used across the
/// compiler. Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder()
        .format_timestamp(None)
        .try_init();
}
