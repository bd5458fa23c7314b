#[cfg(test)]
mod tests_pipeline {
    use vexc::{CompilationUnit, CompileError, CompilerPipeline, UnitStage};
    use vexc_ast::{BinOp, Expr, Stmt, SubscriptExpr};
    use vexc_ir::{IROperand, TempId};
    use vexc_lowering::{IndexBase, LoweringConfig, LoweringConfigBuilder, LoweringError};

    fn index_plus_one() -> Vec<Stmt> {
        // y <- x[i + 1]
        vec![Stmt::assign(
            "y",
            Expr::subscript(
                Expr::ident("x"),
                Expr::binary(BinOp::Add, Expr::ident("i"), Expr::int(1))
            )
        )]
    }

    #[test]
    fn test_pipeline_lowers_and_verifies() {
        vexc::init_logging();

        let mut pipeline = CompilerPipeline::new(LoweringConfig::default());
        pipeline.add_unit(CompilationUnit::new("main", index_plus_one())).unwrap();
        pipeline.compile_all().unwrap();

        let unit = pipeline.unit("main").unwrap();
        assert_eq!(unit.stage, UnitStage::Verified);

        let tac = unit.tac.as_ref().unwrap();
        assert_eq!(tac.dump(), "t1 := i + 1\nt2 := x[t1]\ny := t2");
        assert_eq!(
            pipeline.dump(),
            "unit main:\n   0: t1 := i + 1\n   1: t2 := x[t1]\n   2: y := t2\n"
        );
    }

    #[test]
    fn test_units_have_disjoint_temp_namespaces() {
        let mut pipeline = CompilerPipeline::new(LoweringConfig::default());
        pipeline.add_unit(CompilationUnit::new("a", index_plus_one())).unwrap();
        pipeline.add_unit(CompilationUnit::new("b", index_plus_one())).unwrap();
        pipeline.compile_all().unwrap();

        let first_temps: Vec<Option<TempId>> = pipeline
            .units()
            .map(|unit| unit.tac.as_ref().unwrap().instrs()[0].dest().and_then(|d| d.as_temp()))
            .collect();
        assert_eq!(first_temps, vec![Some(TempId(1)), Some(TempId(1))]);
    }

    #[test]
    fn test_one_based_pipeline() {
        let config = LoweringConfigBuilder::new().index_base(IndexBase::One).build();
        let mut pipeline = CompilerPipeline::new(config);
        pipeline.add_unit(CompilationUnit::new(
            "main",
            vec![Stmt::Return(Expr::subscript(Expr::ident("x"), Expr::int(1)))]
        )).unwrap();
        pipeline.compile_all().unwrap();

        let tac = pipeline.unit("main").unwrap().tac.as_ref().unwrap();
        let access = tac.instrs()[0].src().as_element_access().unwrap();
        assert_eq!(access.index(), &IROperand::int(0));
        assert_eq!(tac.dump(), "t1 := x[0]\nreturn t1");
    }

    #[test]
    fn test_lowering_failure_marks_unit() {
        let bad = vec![Stmt::Expr(Expr::Subscript(SubscriptExpr {
            target: Box::new(Expr::ident("m")),
            indices: vec![Expr::int(0), Expr::int(0)],
        }))];

        let mut pipeline = CompilerPipeline::new(LoweringConfig::default());
        pipeline.add_unit(CompilationUnit::new("ok", index_plus_one())).unwrap();
        pipeline.add_unit(CompilationUnit::new("bad", bad)).unwrap();

        match pipeline.compile_all() {
            Err(CompileError::Lowering { unit, source }) => {
                assert_eq!(unit, "bad");
                assert_eq!(source, LoweringError::MultiSubscript { target: "m".to_string(), count: 2 });
            }
            other => panic!("expected a lowering error, got {other:?}")
        }

        assert!(pipeline.unit("ok").unwrap().is_verified());
        assert_eq!(pipeline.unit("bad").unwrap().stage, UnitStage::Error);
        assert!(pipeline.dump().starts_with("unit ok:"));
    }

    #[test]
    fn test_verified_units_are_not_recompiled() {
        let mut pipeline = CompilerPipeline::new(LoweringConfig::default());
        pipeline.add_unit(CompilationUnit::new("a", index_plus_one())).unwrap();
        pipeline.add_unit(CompilationUnit::new("b", index_plus_one())).unwrap();
        assert_eq!(pipeline.compile_all().unwrap(), 2);

        pipeline.add_unit(CompilationUnit::new("c", index_plus_one())).unwrap();
        assert_eq!(pipeline.compile_all().unwrap(), 1);
        assert_eq!(pipeline.compile_all().unwrap(), 0);
        assert!(pipeline.units().all(|unit| unit.is_verified()));
    }

    #[test]
    fn test_duplicate_unit_is_rejected() {
        let mut pipeline = CompilerPipeline::new(LoweringConfig::default());
        pipeline.add_unit(CompilationUnit::new("main", vec![])).unwrap();

        let err = pipeline.add_unit(CompilationUnit::new("main", vec![])).unwrap_err();
        assert_eq!(err.to_string(), "unit `main` was already added");
    }
}
