//! 投影阶段：RETURN 及其 ORDER BY、SKIP、LIMIT

use crate::core::error::ArgumentError;
use crate::core::types::SortItem;
use crate::query::builder::clause_list::ClauseList;
use crate::query::builder::finish;
use crate::query::builder::stages::{AcceptsLimit, AcceptsSkip, Limited, Ordered, Projected, Skipped};
use crate::query::statement::{Clause, Order, Return, Statement};
use std::marker::PhantomData;

/// 正在构建的 RETURN 子句
#[derive(Debug, Clone)]
pub struct OngoingReadingAndReturn<S> {
    previous: ClauseList,
    returning: Return,
    _stage: PhantomData<S>,
}

impl<S> OngoingReadingAndReturn<S> {
    pub(crate) fn new(previous: ClauseList, returning: Return) -> Self {
        Self {
            previous,
            returning,
            _stage: PhantomData,
        }
    }

    fn advance<T>(&self, returning: Return) -> OngoingReadingAndReturn<T> {
        OngoingReadingAndReturn::new(self.previous.clone(), returning)
    }

    /// 生成语句
    pub fn build(&self) -> Statement {
        let mut clauses = self.previous.to_vec();
        clauses.push(Clause::Return(self.returning.clone()));
        finish(clauses)
    }
}

impl OngoingReadingAndReturn<Projected> {
    /// `ORDER BY items`
    pub fn order_by(
        &self,
        items: impl IntoIterator<Item = SortItem>,
    ) -> Result<OngoingReadingAndReturn<Ordered>, ArgumentError> {
        let items: Vec<SortItem> = items.into_iter().collect();
        if items.is_empty() {
            return Err(ArgumentError::new("At least one expression is required."));
        }
        let body = self.returning.body().with_order(Order::new(items));
        Ok(self.advance(Return::new(body)))
    }
}

impl<S: AcceptsSkip> OngoingReadingAndReturn<S> {
    /// `SKIP n`
    pub fn skip(&self, number: u64) -> OngoingReadingAndReturn<Skipped> {
        let body = self.returning.body().with_skip(number);
        self.advance(Return::new(body))
    }
}

impl<S: AcceptsLimit> OngoingReadingAndReturn<S> {
    /// `LIMIT n`
    pub fn limit(&self, number: u64) -> OngoingReadingAndReturn<Limited> {
        let body = self.returning.body().with_limit(number);
        self.advance(Return::new(body))
    }
}
