//! Source-shaped pretty-printing for AST nodes.
//!
//! Renders a tree back into readable source text, mainly for diagnostics
//! and test output. The format is stable but not a parse contract: blocks
//! print on one line, statements joined by spaces.

use std::fmt;

use crate::ast::{
    AssignStmt, Block, Comparison, Expr, IfStmt, Program, Stmt, WhileStmt, WriteStmt,
};

impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(e) => write!(f, "{}", e.value),
            Expr::Variable(e) => write!(f, "{}", e.name),
            Expr::Binary(e) => write!(f, "({} {} {})", e.left, e.op, e.right),
        }
    }
}

impl fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for stmt in self.stmts {
            write!(f, " {stmt}")?;
        }
        write!(f, " }}")
    }
}

impl fmt::Display for AssignStmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} := {};", self.target.name, self.value)
    }
}

impl fmt::Display for IfStmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IF ({}) THEN {}", self.condition, self.then_body)?;
        if let Some(else_body) = &self.else_body {
            write!(f, " ELSE {else_body}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WhileStmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WHILE ({}) DO {}", self.condition, self.body)
    }
}

impl fmt::Display for WriteStmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WRITELN {};", self.value)
    }
}

impl fmt::Display for Stmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Assign(s) => write!(f, "{s}"),
            Stmt::If(s) => write!(f, "{s}"),
            Stmt::While(s) => write!(f, "{s}"),
            Stmt::Write(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.stmts().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
