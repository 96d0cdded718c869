//! The tree-walking interpreter.
//!
//! `evaluate` walks the tree directly against an [`Environment`], with no
//! register or instruction side effects. It exists as the reference
//! semantics for the compiled path: division truncates toward zero,
//! comparisons re-check before every loop iteration, and exactly one `IF`
//! arm runs.

use crate::ast::{Block, Comparison, Expr, Program, Stmt};
use crate::env::Environment;
use crate::error::EvalError;

impl Expr<'_> {
    /// Evaluate this expression to a value.
    ///
    /// Reading a variable before anything was assigned to it is an
    /// [`EvalError::UndefinedVariable`].
    pub fn evaluate(&self, env: &Environment) -> Result<i64, EvalError> {
        match self {
            Expr::Number(e) => Ok(e.value),
            Expr::Variable(e) => env.get(e.name).ok_or_else(|| EvalError::UndefinedVariable {
                name: e.name.to_string(),
                span: e.span,
            }),
            Expr::Binary(e) => {
                let left = e.left.evaluate(env)?;
                let right = e.right.evaluate(env)?;
                e.op
                    .apply(left, right)
                    .ok_or(EvalError::DivisionByZero { span: e.span })
            }
        }
    }
}

impl Comparison<'_> {
    /// Evaluate this comparison to a boolean.
    pub fn evaluate(&self, env: &Environment) -> Result<bool, EvalError> {
        let left = self.left.evaluate(env)?;
        let right = self.right.evaluate(env)?;
        Ok(self.op.apply(left, right))
    }
}

impl Block<'_> {
    /// Run every statement in the block, in order.
    pub fn evaluate(&self, env: &mut Environment) -> Result<(), EvalError> {
        for stmt in self.stmts {
            stmt.evaluate(env)?;
        }
        Ok(())
    }
}

impl Stmt<'_> {
    /// Run this statement's effects against the environment.
    pub fn evaluate(&self, env: &mut Environment) -> Result<(), EvalError> {
        match self {
            Stmt::Assign(s) => {
                let value = s.value.evaluate(env)?;
                env.set(s.target.name, value);
                Ok(())
            }
            Stmt::If(s) => {
                if s.condition.evaluate(env)? {
                    s.then_body.evaluate(env)
                } else if let Some(else_body) = &s.else_body {
                    else_body.evaluate(env)
                } else {
                    Ok(())
                }
            }
            Stmt::While(s) => {
                while s.condition.evaluate(env)? {
                    s.body.evaluate(env)?;
                }
                Ok(())
            }
            Stmt::Write(s) => {
                let value = s.value.evaluate(env)?;
                env.write(value);
                Ok(())
            }
        }
    }
}

impl Program<'_> {
    /// Run the whole program against the environment.
    pub fn evaluate(&self, env: &mut Environment) -> Result<(), EvalError> {
        for stmt in self.stmts() {
            stmt.evaluate(env)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;

    use crate::Span;
    use crate::ast::{AssignStmt, BinaryExpr, IfStmt, NumberExpr, VarExpr, WhileStmt, WriteStmt};
    use crate::ops::{ArithOp, CompareOp};

    use super::*;

    fn num(arena: &Bump, value: i64) -> &Expr<'_> {
        arena.alloc(Expr::Number(NumberExpr {
            value,
            span: Span::default(),
        }))
    }

    fn var<'ast>(arena: &'ast Bump, name: &'ast str) -> &'ast Expr<'ast> {
        arena.alloc(Expr::Variable(VarExpr {
            name,
            span: Span::default(),
        }))
    }

    fn binary<'ast>(
        arena: &'ast Bump,
        op: ArithOp,
        left: &'ast Expr<'ast>,
        right: &'ast Expr<'ast>,
    ) -> &'ast Expr<'ast> {
        arena.alloc(Expr::Binary(arena.alloc(BinaryExpr {
            op,
            left,
            right,
            span: Span::default(),
        })))
    }

    fn assign<'ast>(name: &'ast str, value: &'ast Expr<'ast>) -> Stmt<'ast> {
        Stmt::Assign(AssignStmt {
            target: VarExpr {
                name,
                span: Span::default(),
            },
            value,
            span: Span::default(),
        })
    }

    #[test]
    fn arithmetic_evaluates() {
        let arena = Bump::new();
        let env = Environment::new();
        let expr = binary(
            &arena,
            ArithOp::Mul,
            binary(&arena, ArithOp::Add, num(&arena, 3), num(&arena, 4)),
            num(&arena, 2),
        );
        assert_eq!(expr.evaluate(&env), Ok(14));
    }

    #[test]
    fn division_truncates() {
        let arena = Bump::new();
        let env = Environment::new();
        let expr = binary(&arena, ArithOp::Div, num(&arena, -7), num(&arena, 2));
        assert_eq!(expr.evaluate(&env), Ok(-3));
    }

    #[test]
    fn division_by_zero_errors() {
        let arena = Bump::new();
        let env = Environment::new();
        let expr = binary(&arena, ArithOp::Div, num(&arena, 1), num(&arena, 0));
        assert!(matches!(
            expr.evaluate(&env),
            Err(EvalError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn unassigned_variable_errors() {
        let arena = Bump::new();
        let env = Environment::new();
        match var(&arena, "ghost").evaluate(&env) {
            Err(EvalError::UndefinedVariable { name, .. }) => assert_eq!(name, "ghost"),
            other => panic!("expected undefined variable, got {other:?}"),
        }
    }

    #[test]
    fn assign_then_read() {
        let arena = Bump::new();
        let mut env = Environment::new();
        let stmt = assign(
            "x",
            binary(&arena, ArithOp::Sub, num(&arena, 10), num(&arena, 4)),
        );
        stmt.evaluate(&mut env).unwrap();
        assert_eq!(env.get("x"), Some(6));
    }

    #[test]
    fn if_else_runs_exactly_one_arm() {
        let arena = Bump::new();
        let then_body: &[Stmt] = arena.alloc_slice_copy(&[Stmt::Write(WriteStmt {
            value: num(&arena, 1),
            span: Span::default(),
        })]);
        let else_body: &[Stmt] = arena.alloc_slice_copy(&[Stmt::Write(WriteStmt {
            value: num(&arena, 2),
            span: Span::default(),
        })]);
        let taken = Stmt::If(arena.alloc(IfStmt {
            condition: Comparison {
                op: CompareOp::Gt,
                left: num(&arena, 1),
                right: num(&arena, 0),
                span: Span::default(),
            },
            then_body: Block {
                stmts: then_body,
                span: Span::default(),
            },
            else_body: Some(Block {
                stmts: else_body,
                span: Span::default(),
            }),
            span: Span::default(),
        }));
        let not_taken = Stmt::If(arena.alloc(IfStmt {
            condition: Comparison {
                op: CompareOp::Lt,
                left: num(&arena, 1),
                right: num(&arena, 0),
                span: Span::default(),
            },
            then_body: Block {
                stmts: then_body,
                span: Span::default(),
            },
            else_body: Some(Block {
                stmts: else_body,
                span: Span::default(),
            }),
            span: Span::default(),
        }));

        let mut env = Environment::new();
        taken.evaluate(&mut env).unwrap();
        assert_eq!(env.output(), &[1]);

        let mut env = Environment::new();
        not_taken.evaluate(&mut env).unwrap();
        assert_eq!(env.output(), &[2]);
    }

    #[test]
    fn while_counts_down() {
        let arena = Bump::new();
        // i := 3; WHILE (i > 0) DO { WRITELN i; i := i - 1; }
        let body: &[Stmt] = arena.alloc_slice_copy(&[
            Stmt::Write(WriteStmt {
                value: var(&arena, "i"),
                span: Span::default(),
            }),
            assign(
                "i",
                binary(&arena, ArithOp::Sub, var(&arena, "i"), num(&arena, 1)),
            ),
        ]);
        let stmts: &[Stmt] = arena.alloc_slice_copy(&[
            assign("i", num(&arena, 3)),
            Stmt::While(arena.alloc(WhileStmt {
                condition: Comparison {
                    op: CompareOp::Gt,
                    left: var(&arena, "i"),
                    right: num(&arena, 0),
                    span: Span::default(),
                },
                body: Block {
                    stmts: body,
                    span: Span::default(),
                },
                span: Span::default(),
            })),
        ]);
        let program = Program::new(stmts, Span::default());

        let mut env = Environment::new();
        program.evaluate(&mut env).unwrap();
        assert_eq!(env.output(), &[3, 2, 1]);
        assert_eq!(env.get("i"), Some(0));
    }

    #[test]
    fn empty_block_is_a_no_op() {
        let arena = Bump::new();
        let stmt = Stmt::If(arena.alloc(IfStmt {
            condition: Comparison {
                op: CompareOp::Gte,
                left: num(&arena, 0),
                right: num(&arena, 0),
                span: Span::default(),
            },
            then_body: Block::empty(Span::default()),
            else_body: None,
            span: Span::default(),
        }));
        let mut env = Environment::new();
        stmt.evaluate(&mut env).unwrap();
        assert!(env.output().is_empty());
    }
}
