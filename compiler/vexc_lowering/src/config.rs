// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

/// Position of the first element in the source language's subscripts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IndexBase {
    /// Source indices already match the IR.
    #[default]
    Zero,

    /// `x[1]` is the first element; lowering subtracts one.
    One,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LoweringConfig {
    pub index_base: IndexBase,
}

pub struct LoweringConfigBuilder {
    index_base: Option<IndexBase>,
}

impl LoweringConfigBuilder {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self { index_base: None }
    }

    pub fn index_base(mut self, base: IndexBase) -> Self {
        self.index_base = Some(base);
        self
    }

    pub fn build(self) -> LoweringConfig {
        LoweringConfig {
            index_base: self.index_base.unwrap_or_default(),
        }
    }
}
