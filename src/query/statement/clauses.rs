//! 子句定义

use crate::core::types::{Condition, Expression, PatternElement, SortItem, SymbolicName};
use std::sync::Arc;

/// 逗号分隔的模式列表
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    elements: Arc<[PatternElement]>,
}

impl Pattern {
    pub(crate) fn new(elements: Vec<PatternElement>) -> Self {
        Self {
            elements: elements.into(),
        }
    }

    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }
}

/// 逗号分隔的表达式列表
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionList {
    expressions: Arc<[Expression]>,
}

impl ExpressionList {
    pub(crate) fn new(expressions: Vec<Expression>) -> Self {
        Self {
            expressions: expressions.into(),
        }
    }

    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }
}

/// WHERE 子句
#[derive(Debug, Clone, PartialEq)]
pub struct Where {
    condition: Condition,
}

impl Where {
    pub(crate) fn new(condition: Condition) -> Self {
        Self { condition }
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }
}

/// `[OPTIONAL] MATCH pattern [WHERE condition]`
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    optional: bool,
    pattern: Pattern,
    where_: Option<Where>,
}

impl Match {
    pub(crate) fn new(optional: bool, pattern: Pattern) -> Self {
        Self {
            optional,
            pattern,
            where_: None,
        }
    }

    pub(crate) fn with_where(&self, condition: Condition) -> Self {
        Self {
            where_: Some(Where::new(condition)),
            ..self.clone()
        }
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn where_clause(&self) -> Option<&Where> {
        self.where_.as_ref()
    }
}

/// `CREATE pattern`
#[derive(Debug, Clone, PartialEq)]
pub struct Create {
    pattern: Pattern,
}

impl Create {
    pub(crate) fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// `MERGE pattern`
#[derive(Debug, Clone, PartialEq)]
pub struct Merge {
    pattern: Pattern,
}

impl Merge {
    pub(crate) fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// `[DETACH] DELETE expressions`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    detach: bool,
    items: ExpressionList,
}

impl Delete {
    pub(crate) fn new(detach: bool, items: ExpressionList) -> Self {
        Self { detach, items }
    }

    pub fn is_detach(&self) -> bool {
        self.detach
    }

    pub fn items(&self) -> &ExpressionList {
        &self.items
    }
}

/// `SET operations`
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    items: ExpressionList,
}

impl Set {
    pub(crate) fn new(items: ExpressionList) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &ExpressionList {
        &self.items
    }
}

/// `REMOVE properties or labels`
#[derive(Debug, Clone, PartialEq)]
pub struct Remove {
    items: ExpressionList,
}

impl Remove {
    pub(crate) fn new(items: ExpressionList) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &ExpressionList {
        &self.items
    }
}

/// `UNWIND expression AS variable`
#[derive(Debug, Clone, PartialEq)]
pub struct Unwind {
    expression: Expression,
    variable: SymbolicName,
}

impl Unwind {
    pub(crate) fn new(expression: Expression, variable: SymbolicName) -> Self {
        Self {
            expression,
            variable,
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn variable(&self) -> &SymbolicName {
        &self.variable
    }
}

/// `ORDER BY items`
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    items: Arc<[SortItem]>,
}

impl Order {
    pub(crate) fn new(items: Vec<SortItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn items(&self) -> &[SortItem] {
        &self.items
    }
}

/// `SKIP n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skip(pub u64);

/// `LIMIT n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(pub u64);

/// RETURN 和 WITH 共用的投影部分
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionBody {
    distinct: bool,
    items: ExpressionList,
    order: Option<Order>,
    skip: Option<Skip>,
    limit: Option<Limit>,
}

impl ProjectionBody {
    pub(crate) fn new(distinct: bool, items: ExpressionList) -> Self {
        Self {
            distinct,
            items,
            order: None,
            skip: None,
            limit: None,
        }
    }

    pub(crate) fn with_order(&self, order: Order) -> Self {
        Self {
            order: Some(order),
            ..self.clone()
        }
    }

    pub(crate) fn with_skip(&self, skip: u64) -> Self {
        Self {
            skip: Some(Skip(skip)),
            ..self.clone()
        }
    }

    pub(crate) fn with_limit(&self, limit: u64) -> Self {
        Self {
            limit: Some(Limit(limit)),
            ..self.clone()
        }
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn items(&self) -> &ExpressionList {
        &self.items
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn skip(&self) -> Option<&Skip> {
        self.skip.as_ref()
    }

    pub fn limit(&self) -> Option<&Limit> {
        self.limit.as_ref()
    }
}

/// `WITH [DISTINCT] items [ORDER BY] [SKIP] [LIMIT] [WHERE]`
#[derive(Debug, Clone, PartialEq)]
pub struct With {
    body: ProjectionBody,
    where_: Option<Where>,
}

impl With {
    pub(crate) fn new(body: ProjectionBody) -> Self {
        Self { body, where_: None }
    }

    pub(crate) fn with_body(&self, body: ProjectionBody) -> Self {
        Self {
            body,
            where_: self.where_.clone(),
        }
    }

    /// 已有 WHERE 时与新条件 AND 组合
    pub(crate) fn with_where(&self, condition: Condition) -> Self {
        let condition = match &self.where_ {
            Some(existing) => existing.condition().and(condition),
            None => condition,
        };
        Self {
            body: self.body.clone(),
            where_: Some(Where::new(condition)),
        }
    }

    pub fn body(&self) -> &ProjectionBody {
        &self.body
    }

    pub fn where_clause(&self) -> Option<&Where> {
        self.where_.as_ref()
    }
}

/// `RETURN [DISTINCT] items [ORDER BY] [SKIP] [LIMIT]`
#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    body: ProjectionBody,
}

impl Return {
    pub(crate) fn new(body: ProjectionBody) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &ProjectionBody {
        &self.body
    }
}

/// 单个子句
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Match(Match),
    Create(Create),
    Merge(Merge),
    Delete(Delete),
    Set(Set),
    Remove(Remove),
    Unwind(Unwind),
    With(With),
    Return(Return),
}

impl Clause {
    /// 子句关键字，用于日志
    pub fn keyword(&self) -> &'static str {
        match self {
            Clause::Match(m) if m.is_optional() => "OPTIONAL MATCH",
            Clause::Match(_) => "MATCH",
            Clause::Create(_) => "CREATE",
            Clause::Merge(_) => "MERGE",
            Clause::Delete(_) => "DELETE",
            Clause::Set(_) => "SET",
            Clause::Remove(_) => "REMOVE",
            Clause::Unwind(_) => "UNWIND",
            Clause::With(_) => "WITH",
            Clause::Return(_) => "RETURN",
        }
    }

    /// 是否为更新子句
    pub fn is_updating(&self) -> bool {
        matches!(
            self,
            Clause::Create(_) | Clause::Merge(_) | Clause::Delete(_) | Clause::Set(_) | Clause::Remove(_)
        )
    }
}
