//! 表达式类型定义
//!
//! 本模块定义语句 AST 中所有取值位置使用的 `Expression` 枚举及其组成部分。
//! 所有节点构造后不可变，子节点通过 `Arc` 共享。

use crate::core::error::ArgumentError;
use crate::core::types::condition::Condition;
use crate::core::types::literal::Literal;
use crate::core::types::operators::BinaryOperator;
use crate::core::types::pattern::{Node, NodeLabel};
use crate::core::types::symbolic_name::{Parameter, SymbolicName};
use std::collections::HashSet;
use std::sync::Arc;

/// 统一表达式类型
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// 字面量值
    Literal(Literal),

    /// 变量引用
    Variable(SymbolicName),

    /// 参数占位符
    Parameter(Parameter),

    /// 属性访问
    Property(PropertyLookup),

    /// 函数调用
    Function(FunctionInvocation),

    /// 算术、字符串和更新运算
    Operation(Operation),

    /// 布尔条件
    Condition(Condition),

    /// 带别名的表达式 `x AS y`
    Aliased(AliasedExpression),

    /// 映射字面量
    Map(MapExpression),

    /// 列表字面量
    List(ListExpression),

    /// 作为表达式使用的匿名节点模式
    Node(Arc<Node>),

    /// `*`
    Asterisk,
}

/// 属性访问 `subject.key`
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyLookup {
    subject: Arc<Expression>,
    key: Arc<str>,
}

impl PropertyLookup {
    pub fn new(subject: Expression, key: &str) -> Result<Self, ArgumentError> {
        if key.is_empty() {
            return Err(ArgumentError::new("The property name is required."));
        }
        Ok(Self {
            subject: Arc::new(subject),
            key: Arc::from(key),
        })
    }

    pub fn subject(&self) -> &Expression {
        &self.subject
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// 函数调用
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionInvocation {
    name: Arc<str>,
    arguments: Arc<[Expression]>,
}

impl FunctionInvocation {
    pub fn new(name: &str, arguments: Vec<Expression>) -> Self {
        Self {
            name: Arc::from(name),
            arguments: arguments.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }
}

/// 非布尔运算
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// `left op right`，算术运算渲染时总是带括号，属性赋值不带
    Binary {
        left: Arc<Expression>,
        operator: BinaryOperator,
        right: Arc<Expression>,
    },

    /// `n:A:B`，用于 SET 和 REMOVE 标签
    Labels {
        target: SymbolicName,
        operator: BinaryOperator,
        labels: Arc<[NodeLabel]>,
    },
}

impl Operation {
    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Operation::Binary {
            left: Arc::new(left),
            operator,
            right: Arc::new(right),
        }
    }

    /// 属性赋值 `target = value`
    pub fn set(target: Expression, value: Expression) -> Self {
        Operation::binary(target, BinaryOperator::Set, value)
    }

    /// 给节点追加标签
    pub fn set_labels(node: &Node, labels: &[&str]) -> Result<Self, ArgumentError> {
        Operation::labels(node, BinaryOperator::SetLabel, labels)
    }

    /// 移除节点标签
    pub fn remove_labels(node: &Node, labels: &[&str]) -> Result<Self, ArgumentError> {
        Operation::labels(node, BinaryOperator::RemoveLabel, labels)
    }

    fn labels(
        node: &Node,
        operator: BinaryOperator,
        labels: &[&str],
    ) -> Result<Self, ArgumentError> {
        let target = node
            .symbolic_name()
            .cloned()
            .ok_or_else(|| ArgumentError::new("The node needs to be named."))?;
        if labels.is_empty() {
            return Err(ArgumentError::new("At least one label is required."));
        }
        let labels = labels
            .iter()
            .map(|label| NodeLabel::new(label))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Operation::Labels {
            target,
            operator,
            labels: labels.into(),
        })
    }

    pub fn operator(&self) -> BinaryOperator {
        match self {
            Operation::Binary { operator, .. } | Operation::Labels { operator, .. } => *operator,
        }
    }

    /// 是否需要外层括号
    pub fn needs_grouping(&self) -> bool {
        self.operator().is_arithmetic()
    }
}

/// 带别名的表达式
#[derive(Debug, Clone, PartialEq)]
pub struct AliasedExpression {
    expression: Arc<Expression>,
    alias: SymbolicName,
}

impl AliasedExpression {
    pub fn new(expression: Expression, alias: &str) -> Result<Self, ArgumentError> {
        if alias.is_empty() {
            return Err(ArgumentError::new("The alias may not be null or empty."));
        }
        // 对已有别名的表达式再次取别名时替换原别名
        let expression = match expression {
            Expression::Aliased(aliased) => Arc::clone(&aliased.expression),
            other => Arc::new(other),
        };
        Ok(Self {
            expression,
            alias: SymbolicName::new(alias)?,
        })
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn alias(&self) -> &SymbolicName {
        &self.alias
    }
}

/// 映射条目
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
    key: Arc<str>,
    value: Expression,
}

impl MapEntry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Expression {
        &self.value
    }
}

/// 交替的键值参数列表中的一个元素
#[derive(Debug, Clone, PartialEq)]
pub enum MapArgument {
    Key(String),
    Value(Expression),
}

impl From<&str> for MapArgument {
    fn from(key: &str) -> Self {
        MapArgument::Key(key.to_string())
    }
}

impl From<String> for MapArgument {
    fn from(key: String) -> Self {
        MapArgument::Key(key)
    }
}

impl From<Expression> for MapArgument {
    fn from(value: Expression) -> Self {
        MapArgument::Value(value)
    }
}

impl From<Literal> for MapArgument {
    fn from(value: Literal) -> Self {
        MapArgument::Value(Expression::Literal(value))
    }
}

impl From<Parameter> for MapArgument {
    fn from(value: Parameter) -> Self {
        MapArgument::Value(Expression::Parameter(value))
    }
}

impl From<MapExpression> for MapArgument {
    fn from(value: MapExpression) -> Self {
        MapArgument::Value(Expression::Map(value))
    }
}

/// 映射字面量，保持声明顺序
#[derive(Debug, Clone, PartialEq)]
pub struct MapExpression {
    entries: Arc<[MapEntry]>,
}

impl MapExpression {
    /// 由交替的键值参数创建映射
    pub fn create(arguments: Vec<MapArgument>) -> Result<Self, ArgumentError> {
        if arguments.len() % 2 != 0 {
            return Err(ArgumentError::new("Need an even number of input parameters."));
        }

        let mut pairs = Vec::with_capacity(arguments.len() / 2);
        let mut arguments = arguments.into_iter();
        while let (Some(key), Some(value)) = (arguments.next(), arguments.next()) {
            let key = match key {
                MapArgument::Key(key) => key,
                MapArgument::Value(_) => {
                    return Err(ArgumentError::new("Key needs to be of type String."))
                }
            };
            let value = match value {
                MapArgument::Value(value) => value,
                MapArgument::Key(text) => Expression::Literal(Literal::from(text)),
            };
            pairs.push((key, value));
        }

        Self::from_pairs(pairs)
    }

    /// 由键值对创建映射
    pub fn from_pairs<K: AsRef<str>>(
        pairs: impl IntoIterator<Item = (K, Expression)>,
    ) -> Result<Self, ArgumentError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for (key, value) in pairs {
            let key = key.as_ref();
            if key.is_empty() {
                return Err(ArgumentError::new("Key needs to be of type String."));
            }
            if !seen.insert(key.to_string()) {
                return Err(ArgumentError::new(format!("Duplicate key '{}'", key)));
            }
            entries.push(MapEntry {
                key: Arc::from(key),
                value,
            });
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 列表字面量
#[derive(Debug, Clone, PartialEq)]
pub struct ListExpression {
    elements: Arc<[Expression]>,
}

impl ListExpression {
    pub fn new(elements: Vec<Expression>) -> Self {
        Self {
            elements: elements.into(),
        }
    }

    pub fn elements(&self) -> &[Expression] {
        &self.elements
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn symbol(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// 排序项
#[derive(Debug, Clone, PartialEq)]
pub struct SortItem {
    expression: Arc<Expression>,
    direction: Option<SortDirection>,
}

impl SortItem {
    pub fn new(expression: Expression, direction: Option<SortDirection>) -> Self {
        Self {
            expression: Arc::new(expression),
            direction,
        }
    }

    pub fn ascending(&self) -> Self {
        Self::new((*self.expression).clone(), Some(SortDirection::Ascending))
    }

    pub fn descending(&self) -> Self {
        Self::new((*self.expression).clone(), Some(SortDirection::Descending))
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn direction(&self) -> Option<&SortDirection> {
        self.direction.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(value: &str) -> Expression {
        Expression::Literal(Literal::from(value))
    }

    #[test]
    fn test_map_from_alternating_arguments() {
        let map = MapExpression::create(vec!["a".into(), lit("b").into(), "c".into(), lit("d").into()])
            .unwrap();
        let keys: Vec<&str> = map.entries().iter().map(MapEntry::key).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_map_requires_even_arguments() {
        let error = MapExpression::create(vec!["a".into()]).unwrap_err();
        assert_eq!(error.message(), "Need an even number of input parameters.");
    }

    #[test]
    fn test_map_requires_string_keys() {
        let error = MapExpression::create(vec![lit("a").into(), lit("b").into()]).unwrap_err();
        assert_eq!(error.message(), "Key needs to be of type String.");
    }

    #[test]
    fn test_map_rejects_duplicate_keys() {
        let error = MapExpression::from_pairs(vec![("a", lit("1")), ("a", lit("2"))]).unwrap_err();
        assert_eq!(error.message(), "Duplicate key 'a'");
    }

    #[test]
    fn test_alias_validation() {
        let error = AliasedExpression::new(Expression::Asterisk, "").unwrap_err();
        assert_eq!(error.message(), "The alias may not be null or empty.");
    }

    #[test]
    fn test_realiasing_replaces_alias() {
        let first = AliasedExpression::new(lit("x"), "a").unwrap();
        let second = AliasedExpression::new(Expression::Aliased(first), "b").unwrap();
        assert_eq!(second.alias().as_str(), "b");
        assert_eq!(second.expression(), &lit("x"));
    }

    #[test]
    fn test_operation_grouping() {
        let sum = Operation::binary(lit("a"), BinaryOperator::Addition, lit("b"));
        assert!(sum.needs_grouping());
        let set = Operation::set(lit("a"), lit("b"));
        assert!(!set.needs_grouping());
    }
}
