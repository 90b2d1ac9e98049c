//! 语句 AST 根节点
//!
//! 语句由构建器一次性生成，之后不可变。单个查询是子句的有序序列，
//! 联合查询由两个或更多单个查询组成。

mod clauses;

pub use clauses::{
    Clause, Create, Delete, ExpressionList, Limit, Match, Merge, Order, Pattern, ProjectionBody,
    Remove, Return, Set, Skip, Unwind, Where, With,
};

use crate::core::error::ArgumentError;
use std::fmt;
use std::sync::Arc;

/// 单个查询
#[derive(Debug, Clone, PartialEq)]
pub struct SingleQuery {
    clauses: Arc<[Clause]>,
}

impl SingleQuery {
    pub(crate) fn new(clauses: Vec<Clause>) -> Self {
        Self {
            clauses: clauses.into(),
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

/// `q1 UNION [ALL] q2 ...`
#[derive(Debug, Clone, PartialEq)]
pub struct UnionQuery {
    all: bool,
    parts: Arc<[SingleQuery]>,
}

impl UnionQuery {
    pub fn is_all(&self) -> bool {
        self.all
    }

    /// 第一部分之后的每一部分渲染时都带 UNION 前缀
    pub fn parts(&self) -> &[SingleQuery] {
        &self.parts
    }
}

/// 语句
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Single(SingleQuery),
    Union(UnionQuery),
}

impl Statement {
    /// 组合多个语句，已有的同类联合会被展开
    pub(crate) fn union(statements: Vec<Statement>, all: bool) -> Result<Statement, ArgumentError> {
        if statements.len() < 2 {
            return Err(ArgumentError::new("At least two statements are required!"));
        }

        let mut parts = Vec::with_capacity(statements.len());
        for statement in statements {
            match statement {
                Statement::Single(query) => parts.push(query),
                Statement::Union(union) => {
                    if union.all != all {
                        return Err(ArgumentError::new("Cannot mix union and union all!"));
                    }
                    parts.extend(union.parts.iter().cloned());
                }
            }
        }

        Ok(Statement::Union(UnionQuery {
            all,
            parts: parts.into(),
        }))
    }

    /// 渲染为 Cypher 文本
    pub fn cypher(&self) -> String {
        crate::query::renderer::render(self).cypher().to_string()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cypher())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Statement {
        Statement::Single(SingleQuery::new(Vec::new()))
    }

    #[test]
    fn test_union_requires_two_statements() {
        let error = Statement::union(vec![empty()], false).unwrap_err();
        assert_eq!(error.message(), "At least two statements are required!");
    }

    #[test]
    fn test_union_flattens_same_kind() {
        let inner = Statement::union(vec![empty(), empty()], true).unwrap();
        let outer = Statement::union(vec![inner, empty()], true).unwrap();
        match outer {
            Statement::Union(union) => {
                assert!(union.is_all());
                assert_eq!(union.parts().len(), 3);
            }
            other => panic!("unexpected statement {:?}", other),
        }
    }

    #[test]
    fn test_union_rejects_mixed_kinds() {
        let inner = Statement::union(vec![empty(), empty()], true).unwrap();
        let error = Statement::union(vec![inner, empty()], false).unwrap_err();
        assert_eq!(error.message(), "Cannot mix union and union all!");
    }
}
