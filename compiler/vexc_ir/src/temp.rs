// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use crate::ir_operands::TempId;

/// Hands out fresh temporaries for one compiled unit.
///
/// Owned by a single lowering pass. Ids increase monotonically starting
/// at `t1`; separate allocators produce independent namespaces.
#[derive(Debug)]
pub struct TempAllocator {
    next: usize,
}

impl Default for TempAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl TempAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn fresh(&mut self) -> TempId {
        let id = TempId(self.next);
        self.next += 1;
        id
    }

    /// Number of temporaries handed out so far.
    pub fn allocated(&self) -> usize {
        self.next - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_temps_are_monotonic() {
        let mut temps = TempAllocator::new();
        assert_eq!(temps.fresh(), TempId(1));
        assert_eq!(temps.fresh(), TempId(2));
        assert_eq!(temps.fresh(), TempId(3));
        assert_eq!(temps.allocated(), 3);
    }

    #[test]
    fn test_allocators_do_not_interfere() {
        let mut first = TempAllocator::new();
        let mut second = TempAllocator::default();

        first.fresh();
        first.fresh();
        assert_eq!(second.fresh(), TempId(1));
        assert_eq!(first.fresh(), TempId(3));
    }
}
