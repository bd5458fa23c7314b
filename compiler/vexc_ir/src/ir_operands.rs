// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use itertools::Itertools;

use crate::element_access::ElementAccess;
use crate::ir_types::*;

/// Temporary identifier.
///
/// Unique within one compiled unit; handed out by
/// [`TempAllocator`](crate::temp::TempAllocator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TempId(pub usize);

impl fmt::Display for TempId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Immediate value known at compile time.
#[derive(Debug, Clone)]
pub enum IRConst {
    Int(i64),
    Double(f64),
    Str(Arc<str>),
    Logical(bool),
    Null,
}

// Doubles are compared by bit pattern so that equality stays reflexive
// (`NaN == NaN`) and agrees with `Hash`.
impl PartialEq for IRConst {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Logical(a), Self::Logical(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false
        }
    }
}

impl Eq for IRConst {}

impl Hash for IRConst {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Int(value) => value.hash(state),
            Self::Double(value) => value.to_bits().hash(state),
            Self::Str(value) => value.hash(state),
            Self::Logical(value) => value.hash(state),
            Self::Null => {}
        }
    }
}

impl fmt::Display for IRConst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            // `1.0`, never `1`
            Self::Double(value) if value.is_infinite() => {
                f.write_str(if value.is_sign_positive() { "Inf" } else { "-Inf" })
            },
            Self::Double(value) => write!(f, "{value:?}"),
            Self::Str(value) => write!(f, "{value:?}"),
            Self::Logical(true) => f.write_str("TRUE"),
            Self::Logical(false) => f.write_str("FALSE"),
            Self::Null => f.write_str("NULL"),
        }
    }
}

/// Named variable slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IRVar {
    pub name: Arc<str>,
    pub slot: SlotId,
}

impl IRVar {
    pub fn new(name: &str, slot: SlotId) -> Self {
        Self { name: Arc::from(name), slot }
    }
}

/// Function value, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IRFuncRef {
    pub name: Arc<str>,
}

impl IRFuncRef {
    pub fn new(name: &str) -> Self {
        Self { name: Arc::from(name) }
    }
}

/// `lhs op rhs`. Arithmetic is opaque at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IRBinary {
    pub op: IRBinOp,
    pub lhs: Arc<IROperand>,
    pub rhs: Arc<IROperand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IRUnary {
    pub op: IRUnaryOp,
    pub operand: Arc<IROperand>,
}

/// `callee(args...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IRCall {
    pub callee: Arc<IROperand>,
    pub args: Vec<Arc<IROperand>>,
}

/// A value usable as an instruction's source.
///
/// Operands never evaluate anything and carry no mutable state; nested
/// sub-operands are shared read-only through `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IROperand {
    Const(IRConst),

    Temp(TempId),

    Var(IRVar),

    Func(IRFuncRef),

    ElementAccess(ElementAccess),

    Binary(IRBinary),

    Unary(IRUnary),

    Call(IRCall),
}

macro_rules! check_operand_type {
    ($fn_name:ident, $variant:ident) => {
        pub fn $fn_name(&self) -> bool {
            matches!(self, Self::$variant(..))
        }
    };
}

macro_rules! impl_as_operand_type {
    ($fn_name:ident, $self_type:ident, $value_type:ty) => {
        pub fn $fn_name(&self) -> Option<&$value_type> {
            match self {
                Self::$self_type(variant_value) => Some(variant_value),
                _ => None
            }
        }
    };
}

impl IROperand {
    pub fn int(value: i64) -> Self {
        Self::Const(IRConst::Int(value))
    }

    pub fn double(value: f64) -> Self {
        Self::Const(IRConst::Double(value))
    }

    pub fn str(value: &str) -> Self {
        Self::Const(IRConst::Str(Arc::from(value)))
    }

    pub fn temp(id: usize) -> Self {
        Self::Temp(TempId(id))
    }

    pub fn var(name: &str, slot: SlotId) -> Self {
        Self::Var(IRVar::new(name, slot))
    }

    pub fn func(name: &str) -> Self {
        Self::Func(IRFuncRef::new(name))
    }

    pub fn element_access(vector: IROperand, index: IROperand) -> Self {
        Self::ElementAccess(ElementAccess::new(vector, index))
    }

    pub fn binary(op: IRBinOp, lhs: IROperand, rhs: IROperand) -> Self {
        Self::Binary(IRBinary {
            op,
            lhs: Arc::new(lhs),
            rhs: Arc::new(rhs),
        })
    }

    pub fn unary(op: IRUnaryOp, operand: IROperand) -> Self {
        Self::Unary(IRUnary { op, operand: Arc::new(operand) })
    }

    pub fn call(callee: IROperand, args: Vec<IROperand>) -> Self {
        Self::Call(IRCall {
            callee: Arc::new(callee),
            args: args.into_iter().map(Arc::new).collect(),
        })
    }

    check_operand_type!(is_const, Const);
    check_operand_type!(is_temp, Temp);
    check_operand_type!(is_var, Var);
    check_operand_type!(is_func, Func);
    check_operand_type!(is_element_access, ElementAccess);
    check_operand_type!(is_binary, Binary);
    check_operand_type!(is_unary, Unary);
    check_operand_type!(is_call, Call);

    impl_as_operand_type!(as_const, Const, IRConst);
    impl_as_operand_type!(as_var, Var, IRVar);
    impl_as_operand_type!(as_func, Func, IRFuncRef);
    impl_as_operand_type!(as_element_access, ElementAccess, ElementAccess);
    impl_as_operand_type!(as_binary, Binary, IRBinary);
    impl_as_operand_type!(as_unary, Unary, IRUnary);
    impl_as_operand_type!(as_call, Call, IRCall);

    pub fn as_temp(&self) -> Option<TempId> {
        match self {
            Self::Temp(id) => Some(*id),
            _ => None
        }
    }

    /// Operands that name a value directly and can appear inside a
    /// composite operand of a well-formed unit.
    pub fn is_simple(&self) -> bool {
        matches!(self, Self::Const(_) | Self::Temp(_) | Self::Var(_) | Self::Func(_))
    }

    pub fn is_composite(&self) -> bool {
        !self.is_simple()
    }

    /// Direct children of a composite operand, left to right. Empty for
    /// simple operands.
    pub fn sub_operands(&self) -> Vec<&IROperand> {
        match self {
            Self::Const(_)
            | Self::Temp(_)
            | Self::Var(_)
            | Self::Func(_) => vec![],
            Self::ElementAccess(access) => vec![access.vector(), access.index()],
            Self::Binary(bin) => vec![bin.lhs.as_ref(), bin.rhs.as_ref()],
            Self::Unary(unary) => vec![unary.operand.as_ref()],
            Self::Call(call) => {
                std::iter::once(call.callee.as_ref())
                    .chain(call.args.iter().map(|arg| arg.as_ref()))
                    .collect()
            }
        }
    }

    /// Visits this operand and every nested sub-operand in pre-order.
    pub fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a IROperand)
    {
        visit(self);
        for sub in self.sub_operands() {
            sub.walk(visit);
        }
    }

    /// Every temporary referenced anywhere in this operand tree, in
    /// pre-order (duplicates kept).
    pub fn temps(&self) -> Vec<TempId> {
        let mut temps = vec![];
        self.walk(&mut |op| {
            if let Some(id) = op.as_temp() {
                temps.push(id);
            }
        });
        temps
    }

    pub(crate) fn is_infix(&self) -> bool {
        matches!(self, Self::Binary(_) | Self::Unary(_))
    }
}

impl fmt::Display for IROperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(value) => write!(f, "{value}"),
            Self::Temp(id) => write!(f, "{id}"),
            Self::Var(var) => f.write_str(&var.name),
            Self::Func(func) => f.write_str(&func.name),
            Self::ElementAccess(access) => write!(f, "{access}"),
            Self::Binary(bin) => write!(f, "{bin}"),
            Self::Unary(unary) => write!(f, "{unary}"),
            Self::Call(call) => write!(f, "{call}"),
        }
    }
}

/// Writes `op`, wrapped in parentheses when `wrap` holds.
pub(crate) fn fmt_grouped(f: &mut fmt::Formatter<'_>, op: &IROperand, wrap: bool) -> fmt::Result {
    if wrap {
        write!(f, "({op})")
    }
    else {
        write!(f, "{op}")
    }
}

impl fmt::Display for IRBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = self.op.precedence();
        let wrap_lhs = match self.lhs.as_ref() {
            IROperand::Binary(lhs) => lhs.op.precedence() < prec,
            IROperand::Unary(lhs) => lhs.op.precedence() < prec,
            _ => false
        };
        let wrap_rhs = self.rhs.as_binary().is_some_and(|rhs| rhs.op.precedence() <= prec);

        fmt_grouped(f, &self.lhs, wrap_lhs)?;
        write!(f, " {} ", self.op)?;
        fmt_grouped(f, &self.rhs, wrap_rhs)
    }
}

impl fmt::Display for IRUnary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.op)?;
        fmt_grouped(f, &self.operand, self.operand.is_infix())
    }
}

impl fmt::Display for IRCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_grouped(f, &self.callee, self.callee.is_infix())?;
        write!(f, "({})", self.args.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_constant_rendering() {
        assert_eq!(IROperand::int(0).to_string(), "0");
        assert_eq!(IROperand::int(-3).to_string(), "-3");
        assert_eq!(IROperand::double(2.5).to_string(), "2.5");
        assert_eq!(IROperand::double(1.0).to_string(), "1.0");
        assert_eq!(IROperand::double(f64::INFINITY).to_string(), "Inf");
        assert_eq!(IROperand::double(f64::NEG_INFINITY).to_string(), "-Inf");
        assert_eq!(IROperand::double(f64::NAN).to_string(), "NaN");
        assert_ne!(IROperand::double(1.0).to_string(), IROperand::int(1).to_string());
        assert_eq!(IROperand::str("a\"b").to_string(), "\"a\\\"b\"");
        assert_eq!(IROperand::Const(IRConst::Logical(true)).to_string(), "TRUE");
        assert_eq!(IROperand::Const(IRConst::Null).to_string(), "NULL");
    }

    #[test]
    fn test_double_equality_is_reflexive() {
        let nan = IROperand::double(f64::NAN);
        assert_eq!(nan, nan.clone());
        assert_ne!(IROperand::double(1.0), IROperand::int(1));

        let mut set = HashSet::new();
        set.insert(nan.clone());
        assert!(set.contains(&nan));
    }

    #[test]
    fn test_variant_inspection() {
        let t = IROperand::temp(4);
        assert!(t.is_temp());
        assert!(t.is_simple());
        assert_eq!(t.as_temp(), Some(TempId(4)));
        assert!(t.as_const().is_none());

        let access = IROperand::element_access(IROperand::var("x", 0), t);
        assert!(access.is_element_access());
        assert!(access.is_composite());
        assert!(access.as_temp().is_none());
    }

    #[test]
    fn test_binary_rendering_groups_looser_children() {
        let sum = IROperand::binary(IRBinOp::Add, IROperand::var("a", 0), IROperand::var("b", 1));
        let product = IROperand::binary(IRBinOp::Mul, sum.clone(), IROperand::int(2));
        assert_eq!(product.to_string(), "(a + b) * 2");

        let chained = IROperand::binary(IRBinOp::Sub, IROperand::var("c", 2), sum);
        assert_eq!(chained.to_string(), "c - (a + b)");
    }

    #[test]
    fn test_binary_rendering_groups_unary_lhs() {
        let neg = IROperand::unary(IRUnaryOp::Neg, IROperand::var("a", 0));
        let power = IROperand::binary(IRBinOp::Pow, neg.clone(), IROperand::int(2));
        assert_eq!(power.to_string(), "(-a) ^ 2");

        let product = IROperand::binary(IRBinOp::Mul, neg, IROperand::int(2));
        assert_eq!(product.to_string(), "-a * 2");

        let not = IROperand::unary(IRUnaryOp::Not, IROperand::var("p", 1));
        let cmp = IROperand::binary(IRBinOp::Eq, not, IROperand::var("q", 2));
        assert_eq!(cmp.to_string(), "(!p) == q");
    }

    #[test]
    fn test_call_rendering() {
        let call = IROperand::call(
            IROperand::func("c"),
            vec![IROperand::int(1), IROperand::temp(2)]
        );
        assert_eq!(call.to_string(), "c(1, t2)");
        assert_eq!(IROperand::call(IROperand::func("ls"), vec![]).to_string(), "ls()");
    }

    #[test]
    fn test_walk_visits_in_pre_order() {
        let inner = IROperand::element_access(IROperand::temp(1), IROperand::int(0));
        let outer = IROperand::element_access(inner, IROperand::temp(2));

        let mut seen = vec![];
        outer.walk(&mut |op| seen.push(op.to_string()));
        assert_eq!(seen, vec!["t1[0][t2]", "t1[0]", "t1", "0", "t2"]);
        assert_eq!(outer.temps(), vec![TempId(1), TempId(2)]);
    }

    #[test]
    fn test_simple_operands_have_no_children() {
        assert!(IROperand::int(1).sub_operands().is_empty());
        assert!(IROperand::func("f").sub_operands().is_empty());
        assert_eq!(
            IROperand::unary(IRUnaryOp::Neg, IROperand::temp(3)).sub_operands(),
            vec![&IROperand::temp(3)]
        );
    }
}
