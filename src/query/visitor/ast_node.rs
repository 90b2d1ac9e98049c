//! AST 节点视图
//!
//! `AstNode` 是对语句树中任意节点的借用，每个变体显式声明自己的子节点。
//! 遍历器只依赖这一个封闭枚举，不需要运行时类型查找。

use crate::core::types::{
    AliasedExpression, Comparison, CompoundCondition, Condition, Expression, FunctionInvocation,
    HasLabels, ListExpression, Literal, MapEntry, MapExpression, Node, NodeLabel, Operation,
    Operator, Parameter, PatternElement, PropertyLookup, Relationship, RelationshipChain,
    RelationshipDetail, RelationshipLength, RelationshipTypes, SortDirection, SortItem,
    SymbolicName,
};
use crate::query::statement::{
    Clause, Create, Delete, ExpressionList, Limit, Match, Merge, Order, Pattern, Remove, Return,
    Set, SingleQuery, Skip, Statement, Unwind, Where, With,
};

/// 语句树中一个节点的借用
#[derive(Debug, Clone, Copy)]
pub enum AstNode<'a> {
    // 语句结构
    Statement(&'a Statement),
    SingleQuery(&'a SingleQuery),
    UnionPart { query: &'a SingleQuery, all: bool },

    // 子句
    Match(&'a Match),
    Where(&'a Where),
    Create(&'a Create),
    Merge(&'a Merge),
    Delete(&'a Delete),
    Set(&'a Set),
    Remove(&'a Remove),
    Unwind(&'a Unwind),
    With(&'a With),
    Return(&'a Return),
    Order(&'a Order),
    SortItem(&'a SortItem),
    SortDirection(&'a SortDirection),
    Skip(&'a Skip),
    Limit(&'a Limit),

    // 列表
    Pattern(&'a Pattern),
    ExpressionList(&'a ExpressionList),

    // 模式
    Node(&'a Node),
    NodeLabel(&'a NodeLabel),
    Properties(&'a MapExpression),
    Relationship(&'a Relationship),
    RelationshipChain(&'a RelationshipChain),
    RelationshipDetail(&'a RelationshipDetail),
    RelationshipTypes(&'a RelationshipTypes),
    RelationshipLength(&'a RelationshipLength),

    // 表达式
    Literal(&'a Literal),
    SymbolicName(&'a SymbolicName),
    Parameter(&'a Parameter),
    PropertyLookup(&'a PropertyLookup),
    FunctionInvocation(&'a FunctionInvocation),
    Operation(&'a Operation),
    Operator(&'a dyn Operator),
    Aliased(&'a AliasedExpression),
    Map(&'a MapExpression),
    MapEntry(&'a MapEntry),
    List(&'a ListExpression),
    Asterisk(&'a Expression),

    // 条件
    Comparison(&'a Comparison),
    CompoundCondition(&'a CompoundCondition),
    Not(&'a Condition),
    HasLabels(&'a HasLabels),
}

impl<'a> AstNode<'a> {
    /// 表达式对应的节点
    pub fn from_expression(expression: &'a Expression) -> Self {
        match expression {
            Expression::Literal(literal) => AstNode::Literal(literal),
            Expression::Variable(name) => AstNode::SymbolicName(name),
            Expression::Parameter(parameter) => AstNode::Parameter(parameter),
            Expression::Property(property) => AstNode::PropertyLookup(property),
            Expression::Function(function) => AstNode::FunctionInvocation(function),
            Expression::Operation(operation) => AstNode::Operation(operation),
            Expression::Condition(condition) => AstNode::from_condition(condition),
            Expression::Aliased(aliased) => AstNode::Aliased(aliased),
            Expression::Map(map) => AstNode::Map(map),
            Expression::List(list) => AstNode::List(list),
            Expression::Node(node) => AstNode::Node(node),
            Expression::Asterisk => AstNode::Asterisk(expression),
        }
    }

    /// 条件对应的节点
    pub fn from_condition(condition: &'a Condition) -> Self {
        match condition {
            Condition::Comparison(comparison) => AstNode::Comparison(comparison),
            Condition::Compound(compound) => AstNode::CompoundCondition(compound),
            Condition::Not(_) => AstNode::Not(condition),
            Condition::HasLabels(has_labels) => AstNode::HasLabels(has_labels),
        }
    }

    /// 子句对应的节点
    pub fn from_clause(clause: &'a Clause) -> Self {
        match clause {
            Clause::Match(c) => AstNode::Match(c),
            Clause::Create(c) => AstNode::Create(c),
            Clause::Merge(c) => AstNode::Merge(c),
            Clause::Delete(c) => AstNode::Delete(c),
            Clause::Set(c) => AstNode::Set(c),
            Clause::Remove(c) => AstNode::Remove(c),
            Clause::Unwind(c) => AstNode::Unwind(c),
            Clause::With(c) => AstNode::With(c),
            Clause::Return(c) => AstNode::Return(c),
        }
    }

    /// 模式元素对应的节点
    pub fn from_pattern_element(element: &'a PatternElement) -> Self {
        match element {
            PatternElement::Node(node) => AstNode::Node(node),
            PatternElement::Relationship(relationship) => AstNode::Relationship(relationship),
            PatternElement::Chain(chain) => AstNode::RelationshipChain(chain),
        }
    }

    /// 子节点，按渲染顺序排列
    pub fn children(&self) -> Vec<AstNode<'a>> {
        match *self {
            AstNode::Statement(statement) => match statement {
                Statement::Single(query) => vec![AstNode::SingleQuery(query)],
                Statement::Union(union) => union
                    .parts()
                    .iter()
                    .enumerate()
                    .map(|(index, query)| {
                        if index == 0 {
                            AstNode::SingleQuery(query)
                        } else {
                            AstNode::UnionPart {
                                query,
                                all: union.is_all(),
                            }
                        }
                    })
                    .collect(),
            },
            AstNode::SingleQuery(query) => {
                query.clauses().iter().map(AstNode::from_clause).collect()
            }
            AstNode::UnionPart { query, .. } => vec![AstNode::SingleQuery(query)],

            AstNode::Match(m) => {
                let mut children = vec![AstNode::Pattern(m.pattern())];
                children.extend(m.where_clause().map(AstNode::Where));
                children
            }
            AstNode::Where(w) => vec![AstNode::from_condition(w.condition())],
            AstNode::Create(c) => vec![AstNode::Pattern(c.pattern())],
            AstNode::Merge(m) => vec![AstNode::Pattern(m.pattern())],
            AstNode::Delete(d) => vec![AstNode::ExpressionList(d.items())],
            AstNode::Set(s) => vec![AstNode::ExpressionList(s.items())],
            AstNode::Remove(r) => vec![AstNode::ExpressionList(r.items())],
            AstNode::Unwind(u) => vec![AstNode::from_expression(u.expression())],
            AstNode::With(w) => {
                let body = w.body();
                let mut children = vec![AstNode::ExpressionList(body.items())];
                children.extend(body.order().map(AstNode::Order));
                children.extend(body.skip().map(AstNode::Skip));
                children.extend(body.limit().map(AstNode::Limit));
                children.extend(w.where_clause().map(AstNode::Where));
                children
            }
            AstNode::Return(r) => {
                let body = r.body();
                let mut children = vec![AstNode::ExpressionList(body.items())];
                children.extend(body.order().map(AstNode::Order));
                children.extend(body.skip().map(AstNode::Skip));
                children.extend(body.limit().map(AstNode::Limit));
                children
            }
            AstNode::Order(order) => order.items().iter().map(AstNode::SortItem).collect(),
            AstNode::SortItem(item) => {
                let mut children = vec![AstNode::from_expression(item.expression())];
                children.extend(item.direction().map(AstNode::SortDirection));
                children
            }

            AstNode::Pattern(pattern) => pattern
                .elements()
                .iter()
                .map(AstNode::from_pattern_element)
                .collect(),
            AstNode::ExpressionList(list) => list
                .expressions()
                .iter()
                .map(AstNode::from_expression)
                .collect(),

            AstNode::Node(node) => {
                let mut children = Vec::new();
                children.extend(node.symbolic_name().map(AstNode::SymbolicName));
                children.extend(node.labels().iter().map(AstNode::NodeLabel));
                children.extend(node.properties_map().map(AstNode::Properties));
                children
            }
            AstNode::Properties(map) => vec![AstNode::Map(map)],
            AstNode::Relationship(relationship) => vec![
                AstNode::Node(relationship.left()),
                AstNode::RelationshipDetail(relationship.detail()),
                AstNode::Node(relationship.right()),
            ],
            AstNode::RelationshipChain(chain) => {
                // 后一跳的左节点就是前一跳的右节点，只渲染一次
                let mut children = Vec::new();
                for (index, relationship) in chain.relationships().iter().enumerate() {
                    if index == 0 {
                        children.push(AstNode::Node(relationship.left()));
                    }
                    children.push(AstNode::RelationshipDetail(relationship.detail()));
                    children.push(AstNode::Node(relationship.right()));
                }
                children
            }
            AstNode::RelationshipDetail(detail) => {
                let mut children = Vec::new();
                children.extend(detail.symbolic_name().map(AstNode::SymbolicName));
                if !detail.types().is_empty() {
                    children.push(AstNode::RelationshipTypes(detail.types()));
                }
                children.extend(detail.length().map(AstNode::RelationshipLength));
                children.extend(detail.properties_map().map(AstNode::Properties));
                children
            }

            AstNode::PropertyLookup(property) => vec![AstNode::from_expression(property.subject())],
            AstNode::FunctionInvocation(function) => function
                .arguments()
                .iter()
                .map(AstNode::from_expression)
                .collect(),
            AstNode::Operation(operation) => match operation {
                Operation::Binary {
                    left,
                    operator,
                    right,
                } => vec![
                    AstNode::from_expression(left),
                    AstNode::Operator(operator),
                    AstNode::from_expression(right),
                ],
                Operation::Labels {
                    target,
                    operator,
                    labels,
                } => {
                    let mut children = vec![AstNode::SymbolicName(target), AstNode::Operator(operator)];
                    children.extend(labels.iter().map(AstNode::NodeLabel));
                    children
                }
            },
            AstNode::Aliased(aliased) => vec![AstNode::from_expression(aliased.expression())],
            AstNode::Map(map) => map.entries().iter().map(AstNode::MapEntry).collect(),
            AstNode::MapEntry(entry) => vec![AstNode::from_expression(entry.value())],
            AstNode::List(list) => list
                .elements()
                .iter()
                .map(AstNode::from_expression)
                .collect(),

            AstNode::Comparison(comparison) => {
                let mut children = vec![
                    AstNode::from_expression(comparison.left()),
                    AstNode::Operator(comparison.operator()),
                ];
                children.extend(comparison.right().map(AstNode::from_expression));
                children
            }
            AstNode::CompoundCondition(compound) => {
                let mut children = Vec::new();
                for (index, condition) in compound.conditions().iter().enumerate() {
                    if index > 0 {
                        children.push(AstNode::Operator(compound.operator()));
                    }
                    children.push(AstNode::from_condition(condition));
                }
                children
            }
            AstNode::Not(condition) => match condition {
                Condition::Not(inner) => vec![AstNode::from_condition(inner)],
                _ => Vec::new(),
            },
            AstNode::HasLabels(has_labels) => {
                let mut children = vec![AstNode::SymbolicName(has_labels.name())];
                children.extend(has_labels.labels().iter().map(AstNode::NodeLabel));
                children
            }

            AstNode::SortDirection(_)
            | AstNode::Skip(_)
            | AstNode::Limit(_)
            | AstNode::NodeLabel(_)
            | AstNode::RelationshipTypes(_)
            | AstNode::RelationshipLength(_)
            | AstNode::Literal(_)
            | AstNode::SymbolicName(_)
            | AstNode::Parameter(_)
            | AstNode::Operator(_)
            | AstNode::Asterisk(_) => Vec::new(),
        }
    }

    /// 子节点之间是否以逗号分隔
    pub fn is_typed_subtree(&self) -> bool {
        matches!(
            self,
            AstNode::Pattern(_)
                | AstNode::ExpressionList(_)
                | AstNode::Order(_)
                | AstNode::Map(_)
                | AstNode::List(_)
                | AstNode::FunctionInvocation(_)
        )
    }

    /// 节点种类名称，用于日志和错误信息
    pub fn kind(&self) -> &'static str {
        match self {
            AstNode::Statement(_) => "Statement",
            AstNode::SingleQuery(_) => "SingleQuery",
            AstNode::UnionPart { .. } => "UnionPart",
            AstNode::Match(_) => "Match",
            AstNode::Where(_) => "Where",
            AstNode::Create(_) => "Create",
            AstNode::Merge(_) => "Merge",
            AstNode::Delete(_) => "Delete",
            AstNode::Set(_) => "Set",
            AstNode::Remove(_) => "Remove",
            AstNode::Unwind(_) => "Unwind",
            AstNode::With(_) => "With",
            AstNode::Return(_) => "Return",
            AstNode::Order(_) => "Order",
            AstNode::SortItem(_) => "SortItem",
            AstNode::SortDirection(_) => "SortDirection",
            AstNode::Skip(_) => "Skip",
            AstNode::Limit(_) => "Limit",
            AstNode::Pattern(_) => "Pattern",
            AstNode::ExpressionList(_) => "ExpressionList",
            AstNode::Node(_) => "Node",
            AstNode::NodeLabel(_) => "NodeLabel",
            AstNode::Properties(_) => "Properties",
            AstNode::Relationship(_) => "Relationship",
            AstNode::RelationshipChain(_) => "RelationshipChain",
            AstNode::RelationshipDetail(_) => "RelationshipDetail",
            AstNode::RelationshipTypes(_) => "RelationshipTypes",
            AstNode::RelationshipLength(_) => "RelationshipLength",
            AstNode::Literal(_) => "Literal",
            AstNode::SymbolicName(_) => "SymbolicName",
            AstNode::Parameter(_) => "Parameter",
            AstNode::PropertyLookup(_) => "PropertyLookup",
            AstNode::FunctionInvocation(_) => "FunctionInvocation",
            AstNode::Operation(_) => "Operation",
            AstNode::Operator(_) => "Operator",
            AstNode::Aliased(_) => "Aliased",
            AstNode::Map(_) => "Map",
            AstNode::MapEntry(_) => "MapEntry",
            AstNode::List(_) => "List",
            AstNode::Asterisk(_) => "Asterisk",
            AstNode::Comparison(_) => "Comparison",
            AstNode::CompoundCondition(_) => "CompoundCondition",
            AstNode::Not(_) => "Not",
            AstNode::HasLabels(_) => "HasLabels",
        }
    }

    fn address(&self) -> *const () {
        match *self {
            AstNode::Statement(n) => n as *const Statement as *const (),
            AstNode::SingleQuery(n) | AstNode::UnionPart { query: n, .. } => {
                n as *const SingleQuery as *const ()
            }
            AstNode::Match(n) => n as *const Match as *const (),
            AstNode::Where(n) => n as *const Where as *const (),
            AstNode::Create(n) => n as *const Create as *const (),
            AstNode::Merge(n) => n as *const Merge as *const (),
            AstNode::Delete(n) => n as *const Delete as *const (),
            AstNode::Set(n) => n as *const Set as *const (),
            AstNode::Remove(n) => n as *const Remove as *const (),
            AstNode::Unwind(n) => n as *const Unwind as *const (),
            AstNode::With(n) => n as *const With as *const (),
            AstNode::Return(n) => n as *const Return as *const (),
            AstNode::Order(n) => n as *const Order as *const (),
            AstNode::SortItem(n) => n as *const SortItem as *const (),
            AstNode::SortDirection(n) => n as *const SortDirection as *const (),
            AstNode::Skip(n) => n as *const Skip as *const (),
            AstNode::Limit(n) => n as *const Limit as *const (),
            AstNode::Pattern(n) => n as *const Pattern as *const (),
            AstNode::ExpressionList(n) => n as *const ExpressionList as *const (),
            AstNode::Node(n) => n as *const Node as *const (),
            AstNode::NodeLabel(n) => n as *const NodeLabel as *const (),
            AstNode::Properties(n) | AstNode::Map(n) => n as *const MapExpression as *const (),
            AstNode::Relationship(n) => n as *const Relationship as *const (),
            AstNode::RelationshipChain(n) => n as *const RelationshipChain as *const (),
            AstNode::RelationshipDetail(n) => n as *const RelationshipDetail as *const (),
            AstNode::RelationshipTypes(n) => n as *const RelationshipTypes as *const (),
            AstNode::RelationshipLength(n) => n as *const RelationshipLength as *const (),
            AstNode::Literal(n) => n as *const Literal as *const (),
            AstNode::SymbolicName(n) => n as *const SymbolicName as *const (),
            AstNode::Parameter(n) => n as *const Parameter as *const (),
            AstNode::PropertyLookup(n) => n as *const PropertyLookup as *const (),
            AstNode::FunctionInvocation(n) => n as *const FunctionInvocation as *const (),
            AstNode::Operation(n) => n as *const Operation as *const (),
            AstNode::Operator(n) => n as *const dyn Operator as *const (),
            AstNode::Aliased(n) => n as *const AliasedExpression as *const (),
            AstNode::MapEntry(n) => n as *const MapEntry as *const (),
            AstNode::List(n) => n as *const ListExpression as *const (),
            AstNode::Asterisk(n) => n as *const Expression as *const (),
            AstNode::Comparison(n) => n as *const Comparison as *const (),
            AstNode::CompoundCondition(n) => n as *const CompoundCondition as *const (),
            AstNode::Not(n) => n as *const Condition as *const (),
            AstNode::HasLabels(n) => n as *const HasLabels as *const (),
        }
    }

    /// 是否为同一个节点：种类相同且指向同一地址
    pub fn is_same(&self, other: &AstNode<'a>) -> bool {
        self.kind() == other.kind() && self.address() == other.address()
    }
}
