//! 各阶段共享的子句入口
//!
//! 任何已经产生绑定的阶段都可以继续追加读取、投影或更新子句。

use crate::core::error::ArgumentError;
use crate::core::types::{Expression, Node, Operation, PatternElement};
use crate::query::builder::clause_list::ClauseList;
use crate::query::builder::reading::{OngoingMatch, OngoingUnwind};
use crate::query::builder::returning::OngoingReadingAndReturn;
use crate::query::builder::stages::{Matched, Projected};
use crate::query::builder::update::OngoingUpdate;
use crate::query::builder::with::OngoingReadingAndWith;
use crate::query::builder::{expressions_of, pattern_of};
use crate::query::statement::{
    Clause, Create, Delete, ExpressionList, Match, Merge, ProjectionBody, Remove, Return, Set,
    With,
};

/// 暴露后续子句的构建器阶段
pub trait ExposesClauses {
    /// 到当前阶段为止已完成的子句
    fn clauses(&self) -> ClauseList;

    /// `MATCH pattern, ...`
    fn match_<P: Into<PatternElement>>(
        &self,
        patterns: impl IntoIterator<Item = P>,
    ) -> Result<OngoingMatch<Matched>, ArgumentError> {
        let pattern = pattern_of(patterns)?;
        Ok(OngoingMatch::new(self.clauses(), Match::new(false, pattern)))
    }

    /// `OPTIONAL MATCH pattern, ...`
    fn optional_match<P: Into<PatternElement>>(
        &self,
        patterns: impl IntoIterator<Item = P>,
    ) -> Result<OngoingMatch<Matched>, ArgumentError> {
        let pattern = pattern_of(patterns)?;
        Ok(OngoingMatch::new(self.clauses(), Match::new(true, pattern)))
    }

    /// `UNWIND expression`，需要继续调用 `as_` 绑定变量
    fn unwind(&self, expression: impl Into<Expression>) -> OngoingUnwind {
        OngoingUnwind::new(self.clauses(), expression.into())
    }

    /// `WITH items`
    fn with<E: Into<Expression>>(
        &self,
        items: impl IntoIterator<Item = E>,
    ) -> Result<OngoingReadingAndWith<Projected>, ArgumentError> {
        let body = ProjectionBody::new(false, expressions_of(items)?);
        Ok(OngoingReadingAndWith::new(self.clauses(), With::new(body)))
    }

    /// `WITH DISTINCT items`
    fn with_distinct<E: Into<Expression>>(
        &self,
        items: impl IntoIterator<Item = E>,
    ) -> Result<OngoingReadingAndWith<Projected>, ArgumentError> {
        let body = ProjectionBody::new(true, expressions_of(items)?);
        Ok(OngoingReadingAndWith::new(self.clauses(), With::new(body)))
    }

    /// `RETURN items`
    fn returning<E: Into<Expression>>(
        &self,
        items: impl IntoIterator<Item = E>,
    ) -> Result<OngoingReadingAndReturn<Projected>, ArgumentError> {
        let body = ProjectionBody::new(false, expressions_of(items)?);
        Ok(OngoingReadingAndReturn::new(self.clauses(), Return::new(body)))
    }

    /// `RETURN DISTINCT items`
    fn returning_distinct<E: Into<Expression>>(
        &self,
        items: impl IntoIterator<Item = E>,
    ) -> Result<OngoingReadingAndReturn<Projected>, ArgumentError> {
        let body = ProjectionBody::new(true, expressions_of(items)?);
        Ok(OngoingReadingAndReturn::new(self.clauses(), Return::new(body)))
    }

    /// `CREATE pattern, ...`
    fn create<P: Into<PatternElement>>(
        &self,
        patterns: impl IntoIterator<Item = P>,
    ) -> Result<OngoingUpdate, ArgumentError> {
        let clause = Clause::Create(Create::new(pattern_of(patterns)?));
        Ok(OngoingUpdate::new(self.clauses().push(clause)))
    }

    /// `MERGE pattern, ...`
    fn merge<P: Into<PatternElement>>(
        &self,
        patterns: impl IntoIterator<Item = P>,
    ) -> Result<OngoingUpdate, ArgumentError> {
        let clause = Clause::Merge(Merge::new(pattern_of(patterns)?));
        Ok(OngoingUpdate::new(self.clauses().push(clause)))
    }

    /// `DELETE items`
    fn delete<E: Into<Expression>>(
        &self,
        items: impl IntoIterator<Item = E>,
    ) -> Result<OngoingUpdate, ArgumentError> {
        let clause = Clause::Delete(Delete::new(false, expressions_of(items)?));
        Ok(OngoingUpdate::new(self.clauses().push(clause)))
    }

    /// `DETACH DELETE items`
    fn detach_delete<E: Into<Expression>>(
        &self,
        items: impl IntoIterator<Item = E>,
    ) -> Result<OngoingUpdate, ArgumentError> {
        let clause = Clause::Delete(Delete::new(true, expressions_of(items)?));
        Ok(OngoingUpdate::new(self.clauses().push(clause)))
    }

    /// `SET target = value, ...`，参数为交替的目标和值
    fn set<E: Into<Expression>>(
        &self,
        targets_and_values: impl IntoIterator<Item = E>,
    ) -> Result<OngoingUpdate, ArgumentError> {
        let expressions: Vec<Expression> =
            targets_and_values.into_iter().map(Into::into).collect();
        if expressions.is_empty() {
            return Err(ArgumentError::new("At least one expression is required."));
        }
        if expressions.len() % 2 != 0 {
            return Err(ArgumentError::new(
                "The list of expression to set must be even.",
            ));
        }

        let mut operations = Vec::with_capacity(expressions.len() / 2);
        let mut expressions = expressions.into_iter();
        while let (Some(target), Some(value)) = (expressions.next(), expressions.next()) {
            operations.push(Operation::set(target, value));
        }
        self.set_operations(operations)
    }

    /// `SET operation, ...`，例如 `n.a = 1` 或 `n:A`
    fn set_operations(
        &self,
        operations: impl IntoIterator<Item = Operation>,
    ) -> Result<OngoingUpdate, ArgumentError> {
        let items = expressions_of(operations.into_iter().map(Expression::Operation))?;
        let clause = Clause::Set(Set::new(items));
        Ok(OngoingUpdate::new(self.clauses().push(clause)))
    }

    /// `SET n:A:B`
    fn set_labels(&self, node: &Node, labels: &[&str]) -> Result<OngoingUpdate, ArgumentError> {
        self.set_operations(vec![Operation::set_labels(node, labels)?])
    }

    /// `REMOVE n.a, n.b`
    fn remove<E: Into<Expression>>(
        &self,
        items: impl IntoIterator<Item = E>,
    ) -> Result<OngoingUpdate, ArgumentError> {
        let clause = Clause::Remove(Remove::new(expressions_of(items)?));
        Ok(OngoingUpdate::new(self.clauses().push(clause)))
    }

    /// `REMOVE n:A:B`
    fn remove_labels(&self, node: &Node, labels: &[&str]) -> Result<OngoingUpdate, ArgumentError> {
        let operation = Expression::Operation(Operation::remove_labels(node, labels)?);
        let clause = Clause::Remove(Remove::new(ExpressionList::new(vec![operation])));
        Ok(OngoingUpdate::new(self.clauses().push(clause)))
    }
}
