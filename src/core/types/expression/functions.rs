//! 内置函数
//!
//! 每个函数返回一个 `FunctionInvocation` 表达式，渲染为 `name(arg, ...)`。

use crate::core::error::ArgumentError;
use crate::core::types::expression::def::{Expression, FunctionInvocation, MapExpression};
use crate::core::types::pattern::{Node, Relationship};

fn invoke(name: &str, arguments: Vec<Expression>) -> Expression {
    Expression::Function(FunctionInvocation::new(name, arguments))
}

/// `id(n)`，节点必须已命名
pub fn id(node: &Node) -> Result<Expression, ArgumentError> {
    let name = node
        .symbolic_name()
        .ok_or_else(|| ArgumentError::new("The node needs to be named."))?;
    Ok(invoke("id", vec![Expression::Variable(name.clone())]))
}

/// `id(r)`，关系必须已命名
pub fn relationship_id(relationship: &Relationship) -> Result<Expression, ArgumentError> {
    Ok(invoke("id", vec![relationship.as_expression()?]))
}

/// `type(r)`，关系必须已命名
pub fn type_(relationship: &Relationship) -> Result<Expression, ArgumentError> {
    Ok(invoke("type", vec![relationship.as_expression()?]))
}

/// `count(x)`
pub fn count(expression: impl Into<Expression>) -> Expression {
    invoke("count", vec![expression.into()])
}

/// `count(*)`
pub fn count_star() -> Expression {
    invoke("count", vec![Expression::Asterisk])
}

/// `coalesce(a, b, ...)`
pub fn coalesce(
    expressions: impl IntoIterator<Item = impl Into<Expression>>,
) -> Result<Expression, ArgumentError> {
    let arguments: Vec<Expression> = expressions.into_iter().map(Into::into).collect();
    if arguments.is_empty() {
        return Err(ArgumentError::new("At least one expression is required."));
    }
    Ok(invoke("coalesce", arguments))
}

/// `toLower(x)`
pub fn to_lower(expression: impl Into<Expression>) -> Expression {
    invoke("toLower", vec![expression.into()])
}

/// `size(x)`
pub fn size(expression: impl Into<Expression>) -> Expression {
    invoke("size", vec![expression.into()])
}

/// `exists(x)`
pub fn exists(expression: impl Into<Expression>) -> Expression {
    invoke("exists", vec![expression.into()])
}

/// `distance(a, b)`
pub fn distance(a: impl Into<Expression>, b: impl Into<Expression>) -> Expression {
    invoke("distance", vec![a.into(), b.into()])
}

/// `point({...})`
pub fn point(parameters: MapExpression) -> Expression {
    invoke("point", vec![Expression::Map(parameters)])
}

/// `point($param)`，参数在运行时提供坐标映射
pub fn point_of(expression: impl Into<Expression>) -> Expression {
    invoke("point", vec![expression.into()])
}

/// `collect(x)`
pub fn collect(expression: impl Into<Expression>) -> Expression {
    invoke("collect", vec![expression.into()])
}
