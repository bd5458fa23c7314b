// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use log::{debug, trace};

use vexc_ast::*;
use vexc_ir::*;

use crate::config::{IndexBase, LoweringConfig};
use crate::errors::LoweringError;
use crate::typedefs::*;

/// `AstToTacLowerer` turns source statements into three-address code.
///
/// Every compound sub-expression is assigned to a fresh temporary before
/// anything refers to it, so the operands it produces are always simple
/// and every composite operand sits alone on the right of an assignment.
pub struct AstToTacLowerer<'a> {
    config: LoweringConfig,

    /// Temporary namespace of the unit being lowered.
    temps: &'a mut TempAllocator,

    unit: TacUnit,
}

impl<'a> AstToTacLowerer<'a> {
    pub fn new(name: &str, config: LoweringConfig, temps: &'a mut TempAllocator) -> Self {
        Self {
            config,
            temps,
            unit: TacUnit::new(name),
        }
    }

    pub fn lower_stmts(&mut self, stmts: &[Stmt]) -> StmtLoweringResult {
        for stmt in stmts {
            self.lower_stmt(stmt)?;
        }
        Ok(())
    }

    pub fn lower_stmt(&mut self, stmt: &Stmt) -> StmtLoweringResult {
        match stmt {
            Stmt::Assign(assign) => {
                let value = self.lower_expr(&assign.value)?;
                let var = self.unit.intern_var(&assign.name);
                self.emit(IRInstr::Assign {
                    target: IRTarget::Var(var),
                    src: value
                });
            },

            Stmt::Expr(expr) => {
                self.lower_expr(expr)?;
            },

            Stmt::Return(expr) => {
                let value = self.lower_expr(expr)?;
                self.emit(IRInstr::Return(value));
            }
        }
        Ok(())
    }

    /// Lowers `expr` and returns the simple operand holding its value.
    pub fn lower_expr(&mut self, expr: &Expr) -> ExprLoweringResult {
        match expr {
            Expr::LitVal(lit) => Ok(IROperand::Const(Self::lower_literal(&lit.value))),
            Expr::Ident(ident) => Ok(IROperand::Var(self.unit.intern_var(&ident.sym_name))),
            Expr::Binary(bin) => self.lower_binary(bin),
            Expr::Unary(unary) => self.lower_unary(unary),
            Expr::FuncCall(call) => self.lower_call(call),
            Expr::Subscript(subscript) => self.lower_subscript(subscript),
        }
    }

    pub fn unit(&self) -> &TacUnit {
        &self.unit
    }

    pub fn finish(self) -> TacUnit {
        debug!(
            "lowered unit `{}`: {} instructions, {} temporaries",
            self.unit.name,
            self.unit.len(),
            self.temps.allocated()
        );
        self.unit
    }

    fn lower_literal(lit: &Literal) -> IRConst {
        match lit {
            Literal::Int(value) => IRConst::Int(*value),
            Literal::Double(value) => IRConst::Double(*value),
            Literal::Str(value) => IRConst::Str(value.as_str().into()),
            Literal::Logical(value) => IRConst::Logical(*value),
            Literal::Null => IRConst::Null,
        }
    }

    fn lower_binary(&mut self, bin: &BinExpr) -> ExprLoweringResult {
        let lhs = self.lower_expr(&bin.left)?;
        let rhs = self.lower_expr(&bin.right)?;
        Ok(self.assign_fresh(IROperand::binary(bin.operation.into(), lhs, rhs)))
    }

    fn lower_unary(&mut self, unary: &UnaryExpr) -> ExprLoweringResult {
        let operand = self.lower_expr(&unary.operand)?;
        Ok(self.assign_fresh(IROperand::unary(unary.operation.into(), operand)))
    }

    fn lower_call(&mut self, call: &FuncCallExpr) -> ExprLoweringResult {
        let args = call.args
            .iter()
            .map(|arg| self.lower_expr(arg))
            .collect::<Result<Vec<_>, _>>()?;
        let callee = IROperand::func(&call.symbol_name);
        Ok(self.assign_fresh(IROperand::call(callee, args)))
    }

    /// `E[I]` becomes `t := v[idx]`, where `v` and `idx` name the already
    /// lowered `E` and zero-based `I`.
    fn lower_subscript(&mut self, subscript: &SubscriptExpr) -> ExprLoweringResult {
        let index_expr = match subscript.indices.as_slice() {
            [index] => index,
            [] => {
                return Err(LoweringError::EmptySubscript {
                    target: Self::describe(&subscript.target)
                });
            },
            indices => {
                return Err(LoweringError::MultiSubscript {
                    target: Self::describe(&subscript.target),
                    count: indices.len()
                });
            }
        };

        let vector = self.lower_expr(&subscript.target)?;
        let index = self.lower_expr(index_expr)?;
        let index = self.to_zero_based(&subscript.target, index)?;
        Ok(self.assign_fresh(IROperand::element_access(vector, index)))
    }

    /// Shifts a positional index to zero-based. Name, logical and NULL
    /// indices carry no position and are left as written.
    fn to_zero_based(&mut self, target: &Expr, index: IROperand) -> ExprLoweringResult {
        if self.config.index_base == IndexBase::Zero {
            return Ok(index);
        }

        match index {
            IROperand::Const(IRConst::Int(value)) => value
                .checked_sub(1)
                .map(IROperand::int)
                .ok_or_else(|| LoweringError::IndexOverflow {
                    target: Self::describe(target),
                    index: value
                }),
            IROperand::Const(IRConst::Double(value)) => Ok(IROperand::double(value - 1.0)),
            IROperand::Const(IRConst::Str(_) | IRConst::Logical(_) | IRConst::Null) => Ok(index),
            computed => {
                Ok(self.assign_fresh(IROperand::binary(IRBinOp::Sub, computed, IROperand::int(1))))
            }
        }
    }

    /// Assigns `src` to a fresh temporary and returns that temporary.
    fn assign_fresh(&mut self, src: IROperand) -> IROperand {
        let temp = self.temps.fresh();
        self.emit(IRInstr::assign_temp(temp, src));
        IROperand::Temp(temp)
    }

    fn emit(&mut self, instr: IRInstr) {
        trace!("{}: {}", self.unit.name, instr);
        self.unit.push(instr);
    }

    fn describe(expr: &Expr) -> String {
        match expr {
            Expr::Ident(ident) => ident.sym_name.clone(),
            Expr::FuncCall(call) => format!("{}(...)", call.symbol_name),
            _ => "<expression>".to_string()
        }
    }
}

/// Lowers a whole unit with its own fresh temporary namespace.
pub fn lower_unit(name: &str, stmts: &[Stmt], config: LoweringConfig) -> Result<TacUnit, LoweringError> {
    let mut temps = TempAllocator::new();
    let mut lowerer = AstToTacLowerer::new(name, config, &mut temps);
    lowerer.lower_stmts(stmts)?;
    Ok(lowerer.finish())
}
