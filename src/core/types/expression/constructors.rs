//! 表达式构造函数
//!
//! 提供从各类 AST 值到 `Expression` 的转换，以及在任意表达式上
//! 构造比较条件、运算和排序项的扩展方法。

use crate::core::error::ArgumentError;
use crate::core::types::condition::{Comparison, Condition};
use crate::core::types::expression::def::{
    AliasedExpression, Expression, FunctionInvocation, ListExpression, MapExpression, Operation,
    PropertyLookup, SortDirection, SortItem,
};
use crate::core::types::expression::functions;
use crate::core::types::literal::Literal;
use crate::core::types::operators::{BinaryOperator, UnaryOperator};
use crate::core::types::pattern::Node;
use crate::core::types::symbolic_name::{Parameter, SymbolicName};
use std::sync::Arc;

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}

impl From<SymbolicName> for Expression {
    fn from(name: SymbolicName) -> Self {
        Expression::Variable(name)
    }
}

impl From<&SymbolicName> for Expression {
    fn from(name: &SymbolicName) -> Self {
        Expression::Variable(name.clone())
    }
}

impl From<Parameter> for Expression {
    fn from(parameter: Parameter) -> Self {
        Expression::Parameter(parameter)
    }
}

impl From<PropertyLookup> for Expression {
    fn from(property: PropertyLookup) -> Self {
        Expression::Property(property)
    }
}

impl From<FunctionInvocation> for Expression {
    fn from(function: FunctionInvocation) -> Self {
        Expression::Function(function)
    }
}

impl From<Operation> for Expression {
    fn from(operation: Operation) -> Self {
        Expression::Operation(operation)
    }
}

impl From<Condition> for Expression {
    fn from(condition: Condition) -> Self {
        Expression::Condition(condition)
    }
}

impl From<AliasedExpression> for Expression {
    fn from(aliased: AliasedExpression) -> Self {
        Expression::Aliased(aliased)
    }
}

impl From<MapExpression> for Expression {
    fn from(map: MapExpression) -> Self {
        Expression::Map(map)
    }
}

impl From<ListExpression> for Expression {
    fn from(list: ListExpression) -> Self {
        Expression::List(list)
    }
}

/// 已命名的节点按名字引用，匿名节点作为模式表达式
impl From<Node> for Expression {
    fn from(node: Node) -> Self {
        match node.symbolic_name() {
            Some(name) => Expression::Variable(name.clone()),
            None => Expression::Node(Arc::new(node)),
        }
    }
}

impl From<&Node> for Expression {
    fn from(node: &Node) -> Self {
        Expression::from(node.clone())
    }
}

impl From<&Expression> for Expression {
    fn from(expression: &Expression) -> Self {
        expression.clone()
    }
}

/// 在任意可转换为表达式的值上构造条件和运算
///
/// 接收者不会被修改，每个方法返回新的节点。
pub trait ExpressionExt: Into<Expression> + Clone {
    fn to_expression(&self) -> Expression {
        self.clone().into()
    }

    fn compare(&self, operator: BinaryOperator, other: impl Into<Expression>) -> Condition {
        Comparison::binary(self.to_expression(), operator, other.into())
    }

    fn is_equal_to(&self, other: impl Into<Expression>) -> Condition {
        self.compare(BinaryOperator::Equality, other)
    }

    fn is_not_equal_to(&self, other: impl Into<Expression>) -> Condition {
        self.compare(BinaryOperator::Inequality, other)
    }

    fn lt(&self, other: impl Into<Expression>) -> Condition {
        self.compare(BinaryOperator::LessThan, other)
    }

    fn lte(&self, other: impl Into<Expression>) -> Condition {
        self.compare(BinaryOperator::LessThanOrEqualTo, other)
    }

    fn gt(&self, other: impl Into<Expression>) -> Condition {
        self.compare(BinaryOperator::GreaterThan, other)
    }

    fn gte(&self, other: impl Into<Expression>) -> Condition {
        self.compare(BinaryOperator::GreaterThanOrEqualTo, other)
    }

    /// 正则匹配 `=~`
    fn matches(&self, pattern: impl Into<Expression>) -> Condition {
        self.compare(BinaryOperator::Matches, pattern)
    }

    fn starts_with(&self, other: impl Into<Expression>) -> Condition {
        self.compare(BinaryOperator::StartsWith, other)
    }

    fn ends_with(&self, other: impl Into<Expression>) -> Condition {
        self.compare(BinaryOperator::EndsWith, other)
    }

    fn contains(&self, other: impl Into<Expression>) -> Condition {
        self.compare(BinaryOperator::Contains, other)
    }

    fn in_(&self, haystack: impl Into<Expression>) -> Condition {
        self.compare(BinaryOperator::In, haystack)
    }

    fn is_null(&self) -> Condition {
        Comparison::postfix(self.to_expression(), UnaryOperator::IsNull)
    }

    fn is_not_null(&self) -> Condition {
        Comparison::postfix(self.to_expression(), UnaryOperator::IsNotNull)
    }

    fn is_true(&self) -> Condition {
        self.is_equal_to(Literal::Boolean(true))
    }

    fn is_false(&self) -> Condition {
        self.is_equal_to(Literal::Boolean(false))
    }

    /// `size(x) = 0`
    fn is_empty(&self) -> Condition {
        functions::size(self.to_expression()).is_equal_to(Literal::Integer(0))
    }

    fn operate(&self, operator: BinaryOperator, other: impl Into<Expression>) -> Expression {
        Expression::Operation(Operation::binary(self.to_expression(), operator, other.into()))
    }

    fn plus(&self, other: impl Into<Expression>) -> Expression {
        self.operate(BinaryOperator::Addition, other)
    }

    fn minus(&self, other: impl Into<Expression>) -> Expression {
        self.operate(BinaryOperator::Subtraction, other)
    }

    fn multiply(&self, other: impl Into<Expression>) -> Expression {
        self.operate(BinaryOperator::Multiplication, other)
    }

    fn divide(&self, other: impl Into<Expression>) -> Expression {
        self.operate(BinaryOperator::Division, other)
    }

    fn remainder(&self, other: impl Into<Expression>) -> Expression {
        self.operate(BinaryOperator::Modulo, other)
    }

    fn pow(&self, other: impl Into<Expression>) -> Expression {
        self.operate(BinaryOperator::Exponent, other)
    }

    fn concat(&self, other: impl Into<Expression>) -> Expression {
        self.operate(BinaryOperator::Concat, other)
    }

    /// 属性赋值 `self = value`，用于 SET
    fn to(&self, value: impl Into<Expression>) -> Operation {
        Operation::set(self.to_expression(), value.into())
    }

    /// 属性访问 `self.key`
    fn property(&self, key: &str) -> Result<Expression, ArgumentError> {
        Ok(Expression::Property(PropertyLookup::new(self.to_expression(), key)?))
    }

    /// 别名 `self AS alias`
    fn as_(&self, alias: &str) -> Result<Expression, ArgumentError> {
        Ok(Expression::Aliased(AliasedExpression::new(self.to_expression(), alias)?))
    }

    /// 不指定方向的排序项
    fn sorted(&self) -> SortItem {
        SortItem::new(self.to_expression(), None)
    }

    fn ascending(&self) -> SortItem {
        SortItem::new(self.to_expression(), Some(SortDirection::Ascending))
    }

    fn descending(&self) -> SortItem {
        SortItem::new(self.to_expression(), Some(SortDirection::Descending))
    }
}

impl<T: Into<Expression> + Clone> ExpressionExt for T {}

impl Expression {
    /// 创建字面量表达式
    pub fn literal(value: impl Into<Literal>) -> Self {
        Expression::Literal(value.into())
    }

    /// 创建变量引用表达式
    pub fn variable(name: &str) -> Result<Self, ArgumentError> {
        Ok(Expression::Variable(SymbolicName::new(name)?))
    }

    /// 创建列表表达式
    pub fn list(elements: impl IntoIterator<Item = impl Into<Expression>>) -> Self {
        Expression::List(ListExpression::new(
            elements.into_iter().map(Into::into).collect(),
        ))
    }
}
