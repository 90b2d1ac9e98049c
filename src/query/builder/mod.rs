//! 语句构建器
//!
//! 分阶段的流式 API。每个阶段是一个独立类型，只暴露合法的下一步；
//! 所有方法接收 `&self` 并返回新值，原值保持可用。
//!
//! ```text
//! 起点 ─match_─> OngoingMatch<Matched> ─where_─> OngoingMatch<Filtered>
//!        │                  │                          │
//!        └──────────────────┴──returning──> OngoingReadingAndReturn<Projected>
//!                                    ─order_by─> <Ordered> ─skip─> <Skipped> ─limit─> <Limited>
//! ```

mod clause_list;
mod cypher;
mod exposes;
mod reading;
mod returning;
mod stages;
mod update;
mod with;

pub use clause_list::ClauseList;
pub use cypher::Cypher;
pub use exposes::ExposesClauses;
pub use reading::{OngoingMatch, OngoingReading, OngoingUnwind};
pub use returning::OngoingReadingAndReturn;
pub use stages::{
    AcceptsLimit, AcceptsSkip, Filtered, Limited, Matched, Ordered, ProjectionStage, Projected,
    Skipped,
};
pub use update::OngoingUpdate;
pub use with::OngoingReadingAndWith;

use crate::core::error::ArgumentError;
use crate::core::types::{Expression, PatternElement};
use crate::query::statement::{Clause, ExpressionList, Pattern, SingleQuery, Statement};

pub(crate) fn pattern_of<P: Into<PatternElement>>(
    patterns: impl IntoIterator<Item = P>,
) -> Result<Pattern, ArgumentError> {
    let elements: Vec<PatternElement> = patterns.into_iter().map(Into::into).collect();
    if elements.is_empty() {
        return Err(ArgumentError::new("At least one pattern is required."));
    }
    for element in &elements {
        element.validate()?;
    }
    Ok(Pattern::new(elements))
}

pub(crate) fn expressions_of<E: Into<Expression>>(
    expressions: impl IntoIterator<Item = E>,
) -> Result<ExpressionList, ArgumentError> {
    let expressions: Vec<Expression> = expressions.into_iter().map(Into::into).collect();
    if expressions.is_empty() {
        return Err(ArgumentError::new("At least one expression is required."));
    }
    Ok(ExpressionList::new(expressions))
}

pub(crate) fn finish(clauses: Vec<Clause>) -> Statement {
    if log::log_enabled!(log::Level::Trace) {
        let keywords: Vec<&str> = clauses.iter().map(Clause::keyword).collect();
        log::trace!("Build statement: {}", keywords.join(" "));
    }
    Statement::Single(SingleQuery::new(clauses))
}
