//! 多段查询：WITH

use crate::core::error::{ArgumentError, StatementError};
use crate::core::types::{Condition, SortItem};
use crate::query::builder::clause_list::ClauseList;
use crate::query::builder::exposes::ExposesClauses;
use crate::query::builder::stages::{
    AcceptsLimit, AcceptsSkip, Limited, Ordered, Projected, Skipped,
};
use crate::query::statement::{Clause, Order, Statement, With};
use std::marker::PhantomData;

/// 正在构建的 WITH 子句
#[derive(Debug, Clone)]
pub struct OngoingReadingAndWith<S> {
    previous: ClauseList,
    with: With,
    _stage: PhantomData<S>,
}

impl<S> OngoingReadingAndWith<S> {
    pub(crate) fn new(previous: ClauseList, with: With) -> Self {
        Self {
            previous,
            with,
            _stage: PhantomData,
        }
    }

    fn advance<T>(&self, with: With) -> OngoingReadingAndWith<T> {
        OngoingReadingAndWith::new(self.previous.clone(), with)
    }

    /// `WHERE condition`，重复调用时以 AND 组合
    pub fn where_(&self, condition: Condition) -> OngoingReadingAndWith<S> {
        self.advance(self.with.with_where(condition))
    }

    /// 以 WITH 结尾的语句缺少 RETURN，总是失败
    pub fn build(&self) -> Result<Statement, StatementError> {
        Err(StatementError::incomplete("RETURN"))
    }
}

impl OngoingReadingAndWith<Projected> {
    /// `ORDER BY items`
    pub fn order_by(
        &self,
        items: impl IntoIterator<Item = SortItem>,
    ) -> Result<OngoingReadingAndWith<Ordered>, ArgumentError> {
        let items: Vec<SortItem> = items.into_iter().collect();
        if items.is_empty() {
            return Err(ArgumentError::new("At least one expression is required."));
        }
        let body = self.with.body().with_order(Order::new(items));
        Ok(self.advance(self.with.with_body(body)))
    }
}

impl<S: AcceptsSkip> OngoingReadingAndWith<S> {
    /// `SKIP n`
    pub fn skip(&self, number: u64) -> OngoingReadingAndWith<Skipped> {
        let body = self.with.body().with_skip(number);
        self.advance(self.with.with_body(body))
    }
}

impl<S: AcceptsLimit> OngoingReadingAndWith<S> {
    /// `LIMIT n`
    pub fn limit(&self, number: u64) -> OngoingReadingAndWith<Limited> {
        let body = self.with.body().with_limit(number);
        self.advance(self.with.with_body(body))
    }
}

impl<S> ExposesClauses for OngoingReadingAndWith<S> {
    fn clauses(&self) -> ClauseList {
        self.previous.push(Clause::With(self.with.clone()))
    }
}
