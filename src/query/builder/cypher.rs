//! 构建器入口
//!
//! `Cypher` 汇集节点、表达式和语句的工厂函数。

use crate::core::error::ArgumentError;
use crate::core::types::{
    Expression, ListExpression, Literal, MapArgument, MapExpression, Node, Parameter,
    PatternElement, SortItem, SymbolicName,
};
use crate::query::builder::exposes::ExposesClauses;
use crate::query::builder::reading::{OngoingMatch, OngoingReading, OngoingUnwind};
use crate::query::builder::returning::OngoingReadingAndReturn;
use crate::query::builder::stages::{Matched, Projected};
use crate::query::builder::update::OngoingUpdate;
use crate::query::builder::with::OngoingReadingAndWith;
use crate::query::statement::Statement;
use serde_json::Value;

/// 构建器入口
#[derive(Debug, Clone, Copy)]
pub struct Cypher;

impl Cypher {
    /// 带主标签的节点
    pub fn node(primary_label: &str) -> Result<Node, ArgumentError> {
        Node::create(primary_label, &[])
    }

    /// 带多个标签的节点
    pub fn node_with_labels(
        primary_label: &str,
        additional_labels: &[&str],
    ) -> Result<Node, ArgumentError> {
        Node::create(primary_label, additional_labels)
    }

    /// 没有标签的节点
    pub fn any_node() -> Node {
        Node::any()
    }

    /// 没有标签的命名节点
    pub fn any_node_named(name: &str) -> Result<Node, ArgumentError> {
        Node::any().named(name)
    }

    /// 符号名
    pub fn name(value: &str) -> Result<SymbolicName, ArgumentError> {
        SymbolicName::new(value)
    }

    /// 命名参数 `$name`
    pub fn parameter(name: &str) -> Result<Parameter, ArgumentError> {
        Parameter::named(name)
    }

    /// 带值的命名参数
    pub fn parameter_with_value(
        name: &str,
        value: impl Into<Value>,
    ) -> Result<Parameter, ArgumentError> {
        Ok(Parameter::named(name)?.with_value(value))
    }

    /// 匿名参数，名字在渲染时生成
    pub fn anonymous_parameter(value: impl Into<Value>) -> Parameter {
        Parameter::anonymous(value)
    }

    /// 字面量
    pub fn literal_of(value: impl Into<Literal>) -> Expression {
        Expression::Literal(value.into())
    }

    /// 由任意 JSON 值创建字面量，映射不受支持
    pub fn literal_from_value(value: Value) -> Result<Expression, ArgumentError> {
        Ok(Expression::Literal(Literal::try_from(value)?))
    }

    pub fn literal_true() -> Expression {
        Expression::Literal(Literal::Boolean(true))
    }

    pub fn literal_false() -> Expression {
        Expression::Literal(Literal::Boolean(false))
    }

    pub fn null_literal() -> Expression {
        Expression::Literal(Literal::Null)
    }

    /// 列表表达式 `[a, b]`
    pub fn list_of<E: Into<Expression>>(elements: impl IntoIterator<Item = E>) -> Expression {
        Expression::List(ListExpression::new(
            elements.into_iter().map(Into::into).collect(),
        ))
    }

    /// 映射表达式，参数为交替的键和值
    pub fn map_of(keys_and_values: Vec<MapArgument>) -> Result<MapExpression, ArgumentError> {
        MapExpression::create(keys_and_values)
    }

    /// `*`
    pub fn asterisk() -> Expression {
        Expression::Asterisk
    }

    /// 不指定方向的排序项
    pub fn sort(expression: impl Into<Expression>) -> SortItem {
        SortItem::new(expression.into(), None)
    }

    /// `MATCH pattern, ...`
    pub fn match_<P: Into<PatternElement>>(
        patterns: impl IntoIterator<Item = P>,
    ) -> Result<OngoingMatch<Matched>, ArgumentError> {
        OngoingReading::default().match_(patterns)
    }

    /// `OPTIONAL MATCH pattern, ...`
    pub fn optional_match<P: Into<PatternElement>>(
        patterns: impl IntoIterator<Item = P>,
    ) -> Result<OngoingMatch<Matched>, ArgumentError> {
        OngoingReading::default().optional_match(patterns)
    }

    /// `CREATE pattern, ...`
    pub fn create<P: Into<PatternElement>>(
        patterns: impl IntoIterator<Item = P>,
    ) -> Result<OngoingUpdate, ArgumentError> {
        OngoingReading::default().create(patterns)
    }

    /// `MERGE pattern, ...`
    pub fn merge<P: Into<PatternElement>>(
        patterns: impl IntoIterator<Item = P>,
    ) -> Result<OngoingUpdate, ArgumentError> {
        OngoingReading::default().merge(patterns)
    }

    /// 以 WITH 开头的语句
    pub fn with<E: Into<Expression>>(
        items: impl IntoIterator<Item = E>,
    ) -> Result<OngoingReadingAndWith<Projected>, ArgumentError> {
        OngoingReading::default().with(items)
    }

    /// 以 UNWIND 开头的语句
    pub fn unwind(expression: impl Into<Expression>) -> OngoingUnwind {
        OngoingReading::default().unwind(expression)
    }

    /// 只有 RETURN 的语句
    pub fn returning<E: Into<Expression>>(
        items: impl IntoIterator<Item = E>,
    ) -> Result<OngoingReadingAndReturn<Projected>, ArgumentError> {
        OngoingReading::default().returning(items)
    }

    /// `UNION`
    pub fn union(statements: Vec<Statement>) -> Result<Statement, ArgumentError> {
        Statement::union(statements, false)
    }

    /// `UNION ALL`
    pub fn union_all(statements: Vec<Statement>) -> Result<Statement, ArgumentError> {
        Statement::union(statements, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::StatementError;
    use crate::core::types::ExpressionExt;
    use crate::query::statement::Clause;

    fn clauses_of(statement: &Statement) -> Vec<Clause> {
        match statement {
            Statement::Single(query) => query.clauses().to_vec(),
            other => panic!("unexpected statement {:?}", other),
        }
    }

    #[test]
    fn test_build_without_return_fails() {
        let movie = Cypher::node("Movie").unwrap().named("m").unwrap();
        let error = Cypher::match_([&movie]).unwrap().build().unwrap_err();
        assert_eq!(error, StatementError::incomplete("RETURN"));
        assert_eq!(error.missing_clause(), "RETURN");
    }

    #[test]
    fn test_build_after_where_without_return_fails() {
        let movie = Cypher::node("Movie").unwrap().named("m").unwrap();
        let condition = movie.property("title").unwrap().is_not_null();
        let result = Cypher::match_([&movie]).unwrap().where_(condition).build();
        assert!(matches!(result, Err(StatementError::Incomplete { missing: "RETURN" })));
    }

    #[test]
    fn test_empty_match_is_rejected() {
        let error = Cypher::match_(Vec::<Node>::new()).unwrap_err();
        assert_eq!(error.message(), "At least one pattern is required.");
    }

    #[test]
    fn test_empty_returning_is_rejected() {
        let movie = Cypher::node("Movie").unwrap().named("m").unwrap();
        let error = Cypher::match_([&movie])
            .unwrap()
            .returning(Vec::<Expression>::new())
            .unwrap_err();
        assert_eq!(error.message(), "At least one expression is required.");
    }

    #[test]
    fn test_builder_does_not_mutate_receiver() {
        let movie = Cypher::node("Movie").unwrap().named("m").unwrap();
        let matched = Cypher::match_([&movie]).unwrap();
        let returning = matched.returning([&movie]).unwrap();

        let limited = returning.limit(10).build();
        let plain = returning.build();
        let filtered = matched
            .where_(movie.property("released").unwrap().gt(Cypher::literal_of(2000)))
            .returning([&movie])
            .unwrap()
            .build();

        assert_eq!(clauses_of(&plain).len(), 2);
        assert_eq!(clauses_of(&limited).len(), 2);
        assert_ne!(plain, limited);
        assert_ne!(plain, filtered);
        assert_eq!(returning.build(), plain);
    }

    #[test]
    fn test_updating_statement_builds_without_return() {
        let user = Cypher::node("User").unwrap().named("u").unwrap();
        let statement = Cypher::create([&user]).unwrap().build();
        let clauses = clauses_of(&statement);
        assert_eq!(clauses.len(), 1);
        assert!(clauses[0].is_updating());
    }

    #[test]
    fn test_set_requires_even_expressions() {
        let user = Cypher::node("User").unwrap().named("u").unwrap();
        let error = Cypher::match_([&user])
            .unwrap()
            .set([user.property("a").unwrap()])
            .unwrap_err();
        assert_eq!(error.message(), "The list of expression to set must be even.");
    }

    #[test]
    fn test_with_then_build_fails() {
        let user = Cypher::node("User").unwrap().named("u").unwrap();
        let result = Cypher::match_([&user]).unwrap().with([&user]).unwrap().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_unwind_requires_valid_variable() {
        let error = Cypher::unwind(Cypher::list_of([Cypher::literal_of(1)]))
            .as_("")
            .unwrap_err();
        assert_eq!(error.message(), "Symbolic name is required.");
    }

    #[test]
    fn test_map_of_validation() {
        let error = Cypher::map_of(vec!["a".into()]).unwrap_err();
        assert_eq!(error.message(), "Need an even number of input parameters.");
    }

    #[test]
    fn test_literal_from_value_rejects_maps() {
        let error = Cypher::literal_from_value(serde_json::json!({"a": 1})).unwrap_err();
        assert_eq!(error.message(), "Unsupported literal type: map");
    }
}
