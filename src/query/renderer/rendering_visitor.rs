//! 文本渲染访问器
//!
//! 在遍历过程中把每个节点的文本片段追加到缓冲区。规则概要：
//!
//! | 节点 | enter | leave |
//! |------|-------|-------|
//! | MATCH | `[OPTIONAL ]MATCH ` | 空格 |
//! | WHERE | ` WHERE ` | |
//! | WITH | `WITH [DISTINCT ]` | 空格 |
//! | RETURN | `RETURN [DISTINCT ]` | |
//! | 节点 | `(` | `)` |
//! | 关系详情 | `-[` / `<-[` | `]->` / `]-` |
//! | 复合条件 | `(` | `)` |
//! | 算术运算 | `(` | `)` |
//!
//! 逗号分隔的子树（模式、表达式列表、排序、映射、列表、函数参数）
//! 在相邻子节点之间写入 `, `。

use crate::core::types::{
    AliasedExpression, Comparison, Operator, OperatorType, SymbolicName,
};
use crate::query::renderer::parameter_collector::ParameterTable;
use crate::query::visitor::{AstNode, Visitor};
use crate::utils::escape_name;
use std::collections::HashSet;

/// 把语句树渲染成文本
#[derive(Debug)]
pub struct RenderingVisitor<'a> {
    builder: String,
    parameters: ParameterTable,
    /// 已经渲染过的命名节点
    visited_named: HashSet<SymbolicName>,
    /// 已经渲染过的别名表达式
    visited_aliased: Vec<&'a AliasedExpression>,
    /// 当前节点已渲染过，跳过它的标签和属性
    skip_node_content: bool,
    /// 每个逗号分隔子树已写出的子节点数
    separators: Vec<usize>,
}

impl<'a> RenderingVisitor<'a> {
    pub fn new(parameters: ParameterTable) -> Self {
        Self {
            builder: String::new(),
            parameters,
            visited_named: HashSet::new(),
            visited_aliased: Vec::new(),
            skip_node_content: false,
            separators: Vec::new(),
        }
    }

    /// 返回去掉首尾空白的文本和参数表
    pub fn into_parts(self) -> (String, ParameterTable) {
        (self.builder.trim().to_string(), self.parameters)
    }

    fn write_separator(&mut self, ancestors: &[AstNode<'a>]) {
        let in_typed_subtree = ancestors
            .last()
            .is_some_and(|parent| parent.is_typed_subtree());
        if !in_typed_subtree {
            return;
        }
        if let Some(count) = self.separators.last_mut() {
            if *count > 0 {
                self.builder.push_str(", ");
            }
            *count += 1;
        }
    }

    fn write_operator(&mut self, operator: &dyn Operator) {
        let operator_type = operator.operator_type();
        if operator_type == OperatorType::Label {
            return;
        }
        if operator_type != OperatorType::Prefix {
            self.builder.push(' ');
        }
        self.builder.push_str(operator.name());
        if operator_type != OperatorType::Postfix {
            self.builder.push(' ');
        }
    }

    fn write_label(&mut self, label: &str) {
        self.builder.push(':');
        self.builder.push_str(&escape_name(label));
    }

    /// 嵌套在另一个比较里、且优先级不高于外层时需要括号
    fn needs_parentheses(comparison: &Comparison, ancestors: &[AstNode<'a>]) -> bool {
        match ancestors.last() {
            Some(AstNode::Comparison(parent)) => {
                comparison.operator().precedence() <= parent.operator().precedence()
            }
            _ => false,
        }
    }
}

impl<'a> Visitor<'a> for RenderingVisitor<'a> {
    fn pre_enter(&mut self, node: AstNode<'a>, ancestors: &[AstNode<'a>]) -> bool {
        if self.skip_node_content {
            return false;
        }
        self.write_separator(ancestors);

        if let AstNode::Aliased(aliased) = node {
            if self.visited_aliased.iter().any(|visited| *visited == aliased) {
                self.builder.push_str(aliased.alias().as_str());
                return false;
            }
        }
        true
    }

    fn enter(&mut self, node: AstNode<'a>, ancestors: &[AstNode<'a>]) {
        if node.is_typed_subtree() {
            self.separators.push(0);
        }

        match node {
            AstNode::Statement(_) | AstNode::SingleQuery(_) => {}
            AstNode::UnionPart { all, .. } => {
                if !self.builder.ends_with(' ') {
                    self.builder.push(' ');
                }
                self.builder.push_str("UNION ");
                if all {
                    self.builder.push_str("ALL ");
                }
            }

            AstNode::Match(m) => {
                if m.is_optional() {
                    self.builder.push_str("OPTIONAL ");
                }
                self.builder.push_str("MATCH ");
            }
            AstNode::Where(_) => self.builder.push_str(" WHERE "),
            AstNode::Create(_) => self.builder.push_str("CREATE "),
            AstNode::Merge(_) => self.builder.push_str("MERGE "),
            AstNode::Delete(delete) => {
                if delete.is_detach() {
                    self.builder.push_str("DETACH ");
                }
                self.builder.push_str("DELETE ");
            }
            AstNode::Set(_) => self.builder.push_str("SET "),
            AstNode::Remove(_) => self.builder.push_str("REMOVE "),
            AstNode::Unwind(_) => self.builder.push_str("UNWIND "),
            AstNode::With(with) => {
                self.builder.push_str("WITH ");
                if with.body().is_distinct() {
                    self.builder.push_str("DISTINCT ");
                }
            }
            AstNode::Return(returning) => {
                self.builder.push_str("RETURN ");
                if returning.body().is_distinct() {
                    self.builder.push_str("DISTINCT ");
                }
            }
            AstNode::Order(_) => self.builder.push_str(" ORDER BY "),
            AstNode::SortItem(_) => {}
            AstNode::SortDirection(direction) => {
                self.builder.push(' ');
                self.builder.push_str(direction.symbol());
            }
            AstNode::Skip(skip) => {
                self.builder.push_str(" SKIP ");
                self.builder.push_str(&skip.0.to_string());
            }
            AstNode::Limit(limit) => {
                self.builder.push_str(" LIMIT ");
                self.builder.push_str(&limit.0.to_string());
            }

            AstNode::Pattern(_) | AstNode::ExpressionList(_) => {}

            AstNode::Node(node) => {
                self.builder.push('(');
                // 同名节点第二次出现时只写名字
                if let Some(name) = node.symbolic_name() {
                    self.skip_node_content = !self.visited_named.insert(name.clone());
                    if self.skip_node_content {
                        self.builder.push_str(name.as_str());
                    }
                }
            }
            AstNode::NodeLabel(label) => self.write_label(label.value()),
            AstNode::Properties(_) => self.builder.push(' '),
            AstNode::Relationship(_) | AstNode::RelationshipChain(_) => {}
            AstNode::RelationshipDetail(detail) => {
                self.builder.push_str(detail.direction().symbol_left());
                self.builder.push('[');
            }
            AstNode::RelationshipTypes(types) => {
                for (index, value) in types.values().enumerate() {
                    self.builder.push_str(if index == 0 { ":" } else { "|" });
                    self.builder.push_str(&escape_name(value));
                }
            }
            AstNode::RelationshipLength(length) => {
                self.builder.push('*');
                if !length.is_unbounded() {
                    if let Some(minimum) = length.minimum() {
                        self.builder.push_str(&minimum.to_string());
                    }
                    self.builder.push_str("..");
                    if let Some(maximum) = length.maximum() {
                        self.builder.push_str(&maximum.to_string());
                    }
                }
            }

            AstNode::Literal(literal) => self.builder.push_str(&literal.as_cypher()),
            AstNode::SymbolicName(name) => self.builder.push_str(name.as_str()),
            AstNode::Parameter(parameter) => {
                let name = self.parameters.register(parameter);
                self.builder.push('$');
                self.builder.push_str(&name);
            }
            AstNode::PropertyLookup(_) => {}
            AstNode::FunctionInvocation(function) => {
                self.builder.push_str(function.name());
                self.builder.push('(');
            }
            AstNode::Operation(operation) => {
                if operation.needs_grouping() {
                    self.builder.push('(');
                }
            }
            AstNode::Operator(operator) => self.write_operator(operator),
            AstNode::Aliased(aliased) => self.visited_aliased.push(aliased),
            AstNode::Map(_) => self.builder.push('{'),
            AstNode::MapEntry(entry) => {
                self.builder.push_str(entry.key());
                self.builder.push_str(": ");
            }
            AstNode::List(_) => self.builder.push('['),
            AstNode::Asterisk(_) => self.builder.push('*'),

            AstNode::Comparison(comparison) => {
                if Self::needs_parentheses(comparison, ancestors) {
                    self.builder.push('(');
                }
            }
            AstNode::CompoundCondition(_) => self.builder.push('('),
            AstNode::Not(_) => self.builder.push_str("NOT ("),
            AstNode::HasLabels(_) => {}
        }
    }

    fn leave(&mut self, node: AstNode<'a>, ancestors: &[AstNode<'a>]) {
        if node.is_typed_subtree() {
            self.separators.pop();
        }

        match node {
            AstNode::Match(_)
            | AstNode::Create(_)
            | AstNode::Merge(_)
            | AstNode::Delete(_)
            | AstNode::Set(_)
            | AstNode::Remove(_)
            | AstNode::With(_) => self.builder.push(' '),
            AstNode::Unwind(unwind) => {
                self.builder.push_str(" AS ");
                self.builder.push_str(unwind.variable().as_str());
                self.builder.push(' ');
            }

            AstNode::Node(_) => {
                self.builder.push(')');
                self.skip_node_content = false;
            }
            AstNode::RelationshipDetail(detail) => {
                self.builder.push(']');
                self.builder.push_str(detail.direction().symbol_right());
            }

            AstNode::PropertyLookup(property) => {
                self.builder.push('.');
                self.builder.push_str(property.key());
            }
            AstNode::FunctionInvocation(_) => self.builder.push(')'),
            AstNode::Operation(operation) => {
                if operation.needs_grouping() {
                    self.builder.push(')');
                }
            }
            AstNode::Aliased(aliased) => {
                self.builder.push_str(" AS ");
                self.builder.push_str(aliased.alias().as_str());
            }
            AstNode::Map(_) => self.builder.push('}'),
            AstNode::List(_) => self.builder.push(']'),

            AstNode::Comparison(comparison) => {
                if Self::needs_parentheses(comparison, ancestors) {
                    self.builder.push(')');
                }
            }
            AstNode::CompoundCondition(_) | AstNode::Not(_) => self.builder.push(')'),

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ExpressionExt, Literal, Node};
    use crate::query::builder::{Cypher, ExposesClauses};
    use crate::query::statement::Statement;
    use crate::query::visitor::Dispatcher;
    use crate::utils::AnonParamGenerator;

    fn render(statement: &Statement) -> String {
        let table = ParameterTable::new(AnonParamGenerator::default(), &[]);
        let mut visitor = RenderingVisitor::new(table);
        Dispatcher::dispatch(statement, &mut visitor).unwrap();
        visitor.into_parts().0
    }

    #[test]
    fn test_arithmetic_is_grouped() {
        let n = Node::any().named("n").unwrap();
        let statement = Cypher::match_([&n])
            .unwrap()
            .returning([Cypher::literal_of(1).plus(Literal::Integer(2))])
            .unwrap()
            .build();
        assert_eq!(render(&statement), "MATCH (n) RETURN (1 + 2)");
    }

    #[test]
    fn test_nested_comparison_is_grouped() {
        let comparison = Cypher::literal_of(1).gt(Cypher::literal_of(2));
        let statement = Cypher::returning([comparison.clone()]).unwrap().build();
        assert_eq!(render(&statement), "RETURN 1 > 2");

        let nested = comparison.is_true();
        let statement = Cypher::returning([nested.clone()]).unwrap().build();
        assert_eq!(render(&statement), "RETURN (1 > 2) = true");

        let statement = Cypher::returning([nested.is_false()]).unwrap().build();
        assert_eq!(render(&statement), "RETURN ((1 > 2) = true) = false");
    }

    #[test]
    fn test_repeated_node_renders_name_only() {
        let bike = Node::create("Bike", &[]).unwrap().named("b").unwrap();
        let user = Node::create("User", &[]).unwrap().named("u").unwrap();
        let statement = Cypher::match_([&bike])
            .unwrap()
            .match_([bike.relationship_from(&user, &["OWNS"])])
            .unwrap()
            .returning([&bike])
            .unwrap()
            .build();
        assert_eq!(
            render(&statement),
            "MATCH (b:`Bike`) MATCH (b)<-[:`OWNS`]-(u:`User`) RETURN b"
        );
    }

    #[test]
    fn test_relationship_lengths() {
        let a = Node::any().named("a").unwrap();
        let b = Node::any().named("b").unwrap();
        let cases = [
            (a.relationship_to(&b, &[]).unbounded(), "(a)-[*]->(b)"),
            (a.relationship_to(&b, &[]).length(1, 4), "(a)-[*1..4]->(b)"),
            (a.relationship_to(&b, &[]).min_length(2), "(a)-[*2..]->(b)"),
            (a.relationship_to(&b, &[]).max_length(4), "(a)-[*..4]->(b)"),
            (a.relationship_to(&b, &["A", "B"]), "(a)-[:`A`|`B`]->(b)"),
        ];
        for (relationship, expected) in cases {
            let statement = Cypher::match_([relationship])
                .unwrap()
                .returning([Cypher::asterisk()])
                .unwrap()
                .build();
            assert_eq!(render(&statement), format!("MATCH {} RETURN *", expected));
        }
    }

    #[test]
    fn test_aliased_expression_renders_alias_on_reuse() {
        let n = Node::any().named("n").unwrap();
        let aliased = n.property("name").unwrap().as_("name").unwrap();
        let statement = Cypher::match_([&n])
            .unwrap()
            .returning([aliased.clone()])
            .unwrap()
            .order_by([aliased.ascending()])
            .unwrap()
            .build();
        assert_eq!(
            render(&statement),
            "MATCH (n) RETURN n.name AS name ORDER BY name ASC"
        );
    }
}
