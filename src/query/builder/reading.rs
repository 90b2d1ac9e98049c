//! 读取阶段：MATCH、WHERE 和 UNWIND

use crate::core::error::{ArgumentError, StatementError};
use crate::core::types::{Condition, Expression, SymbolicName};
use crate::query::builder::clause_list::ClauseList;
use crate::query::builder::exposes::ExposesClauses;
use crate::query::builder::stages::{Filtered, Matched};
use crate::query::statement::{Clause, Match, Statement, Unwind};
use std::marker::PhantomData;

/// 正在构建的 MATCH 子句
///
/// WHERE 附着在最近一次 MATCH 上，因此该子句在离开此阶段前一直单独保存。
#[derive(Debug, Clone)]
pub struct OngoingMatch<S> {
    previous: ClauseList,
    current: Match,
    _stage: PhantomData<S>,
}

impl<S> OngoingMatch<S> {
    pub(crate) fn new(previous: ClauseList, current: Match) -> Self {
        Self {
            previous,
            current,
            _stage: PhantomData,
        }
    }

    fn filtered(&self, condition: Condition) -> OngoingMatch<Filtered> {
        OngoingMatch::new(self.previous.clone(), self.current.with_where(condition))
    }

    /// 读取语句缺少 RETURN，总是失败
    pub fn build(&self) -> Result<Statement, StatementError> {
        Err(StatementError::incomplete("RETURN"))
    }
}

impl OngoingMatch<Matched> {
    /// `WHERE condition`
    pub fn where_(&self, condition: Condition) -> OngoingMatch<Filtered> {
        self.filtered(condition)
    }
}

impl OngoingMatch<Filtered> {
    fn existing_condition(&self, other: Condition, and: bool) -> Condition {
        match self.current.where_clause() {
            Some(existing) if and => existing.condition().and(other),
            Some(existing) => existing.condition().or(other),
            None => other,
        }
    }

    /// 与已有 WHERE 条件 AND 组合
    pub fn and(&self, condition: Condition) -> OngoingMatch<Filtered> {
        self.filtered(self.existing_condition(condition, true))
    }

    /// 与已有 WHERE 条件 OR 组合
    pub fn or(&self, condition: Condition) -> OngoingMatch<Filtered> {
        self.filtered(self.existing_condition(condition, false))
    }
}

impl<S> ExposesClauses for OngoingMatch<S> {
    fn clauses(&self) -> ClauseList {
        self.previous.push(Clause::Match(self.current.clone()))
    }
}

/// `UNWIND expression`，等待 `AS variable`
#[derive(Debug, Clone)]
pub struct OngoingUnwind {
    previous: ClauseList,
    expression: Expression,
}

impl OngoingUnwind {
    pub(crate) fn new(previous: ClauseList, expression: Expression) -> Self {
        Self {
            previous,
            expression,
        }
    }

    /// `AS variable`
    pub fn as_(&self, variable: &str) -> Result<OngoingReading, ArgumentError> {
        let unwind = Unwind::new(self.expression.clone(), SymbolicName::new(variable)?);
        Ok(OngoingReading::new(self.previous.push(Clause::Unwind(unwind))))
    }
}

/// 没有未完成子句的读取阶段，也是语句的起点
#[derive(Debug, Clone, Default)]
pub struct OngoingReading {
    clauses: ClauseList,
}

impl OngoingReading {
    pub(crate) fn new(clauses: ClauseList) -> Self {
        Self { clauses }
    }

    /// 读取语句缺少 RETURN，总是失败
    pub fn build(&self) -> Result<Statement, StatementError> {
        Err(StatementError::incomplete("RETURN"))
    }
}

impl ExposesClauses for OngoingReading {
    fn clauses(&self) -> ClauseList {
        self.clauses.clone()
    }
}
