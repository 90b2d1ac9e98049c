//! 图模式元素
//!
//! 节点、关系和关系链。所有方法返回新值，接收者保持不变。
//! 关系链从左向右追加，每一跳保留自己的方向。

use crate::core::error::ArgumentError;
use crate::core::types::condition::{Condition, HasLabels};
use crate::core::types::expression::{
    Expression, MapArgument, MapExpression, PropertyLookup,
};
use crate::core::types::symbolic_name::SymbolicName;
use std::sync::Arc;

/// 节点标签，渲染时总是加反引号
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeLabel(Arc<str>);

impl NodeLabel {
    pub fn new(value: &str) -> Result<Self, ArgumentError> {
        if value.is_empty() {
            return Err(ArgumentError::new("An empty label is not allowed."));
        }
        Ok(NodeLabel(Arc::from(value)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// 节点
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    name: Option<SymbolicName>,
    labels: Arc<[NodeLabel]>,
    properties: Option<MapExpression>,
}

impl Node {
    /// 创建带主标签和附加标签的节点
    pub fn create(primary_label: &str, additional_labels: &[&str]) -> Result<Self, ArgumentError> {
        if primary_label.is_empty() {
            return Err(ArgumentError::new("A primary label is required."));
        }
        let mut labels = vec![NodeLabel::new(primary_label)?];
        for label in additional_labels {
            labels.push(NodeLabel::new(label)?);
        }
        Ok(Self {
            name: None,
            labels: labels.into(),
            properties: None,
        })
    }

    /// 没有标签和属性的节点
    pub fn any() -> Self {
        Self::default()
    }

    /// 返回带新符号名的副本
    pub fn named(&self, name: &str) -> Result<Self, ArgumentError> {
        Ok(Self {
            name: Some(SymbolicName::new(name)?),
            ..self.clone()
        })
    }

    /// 返回带属性映射的副本，参数为交替的键和值
    ///
    /// 空参数列表得到没有属性的节点。
    pub fn properties(&self, keys_and_values: Vec<MapArgument>) -> Result<Self, ArgumentError> {
        let properties = if keys_and_values.is_empty() {
            None
        } else {
            Some(MapExpression::create(keys_and_values)?)
        };
        Ok(Self {
            properties,
            ..self.clone()
        })
    }

    /// 返回带给定属性映射的副本
    pub fn with_properties(&self, properties: MapExpression) -> Self {
        Self {
            properties: Some(properties),
            ..self.clone()
        }
    }

    pub fn symbolic_name(&self) -> Option<&SymbolicName> {
        self.name.as_ref()
    }

    pub fn labels(&self) -> &[NodeLabel] {
        &self.labels
    }

    pub fn properties_map(&self) -> Option<&MapExpression> {
        self.properties.as_ref()
    }

    fn required_name(&self) -> Result<&SymbolicName, ArgumentError> {
        self.name
            .as_ref()
            .ok_or_else(|| ArgumentError::new("The node needs to be named."))
    }

    /// 节点属性 `n.key`，节点必须已命名
    pub fn property(&self, key: &str) -> Result<Expression, ArgumentError> {
        let subject = Expression::Variable(self.required_name()?.clone());
        Ok(Expression::Property(PropertyLookup::new(subject, key)?))
    }

    /// 标签谓词 `n:A:B`
    pub fn has_labels(&self, labels: &[&str]) -> Result<Condition, ArgumentError> {
        HasLabels::create(self.required_name()?.clone(), labels)
    }

    /// 出边 `(this)-[:TYPE]->(other)`
    pub fn relationship_to(&self, other: &Node, types: &[&str]) -> Relationship {
        Relationship::create(self, Direction::LeftToRight, other, types)
    }

    /// 入边 `(this)<-[:TYPE]-(other)`
    pub fn relationship_from(&self, other: &Node, types: &[&str]) -> Relationship {
        Relationship::create(self, Direction::RightToLeft, other, types)
    }

    /// 无向边 `(this)-[:TYPE]-(other)`
    pub fn relationship_between(&self, other: &Node, types: &[&str]) -> Relationship {
        Relationship::create(self, Direction::Undirected, other, types)
    }
}

/// 关系方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    Undirected,
}

impl Direction {
    pub fn symbol_left(&self) -> &'static str {
        match self {
            Direction::RightToLeft => "<-",
            Direction::LeftToRight | Direction::Undirected => "-",
        }
    }

    pub fn symbol_right(&self) -> &'static str {
        match self {
            Direction::LeftToRight => "->",
            Direction::RightToLeft | Direction::Undirected => "-",
        }
    }
}

/// 关系类型列表，渲染为 `:`A`|`B``
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationshipTypes(Arc<[Arc<str>]>);

impl RelationshipTypes {
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|value| value.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 变长关系范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelationshipLength {
    minimum: Option<u32>,
    maximum: Option<u32>,
}

impl RelationshipLength {
    pub fn minimum(&self) -> Option<u32> {
        self.minimum
    }

    pub fn maximum(&self) -> Option<u32> {
        self.maximum
    }

    pub fn is_unbounded(&self) -> bool {
        self.minimum.is_none() && self.maximum.is_none()
    }
}

/// 关系的方括号部分
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipDetail {
    direction: Direction,
    name: Option<SymbolicName>,
    types: RelationshipTypes,
    length: Option<RelationshipLength>,
    properties: Option<MapExpression>,
}

impl RelationshipDetail {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn symbolic_name(&self) -> Option<&SymbolicName> {
        self.name.as_ref()
    }

    pub fn types(&self) -> &RelationshipTypes {
        &self.types
    }

    pub fn length(&self) -> Option<&RelationshipLength> {
        self.length.as_ref()
    }

    pub fn properties_map(&self) -> Option<&MapExpression> {
        self.properties.as_ref()
    }

    /// 类型不能为空，长度下限不能超过上限
    fn validate(&self) -> Result<(), ArgumentError> {
        if self.types.values().any(str::is_empty) {
            return Err(ArgumentError::new("An empty relationship type is not allowed."));
        }
        if let Some(RelationshipLength {
            minimum: Some(minimum),
            maximum: Some(maximum),
        }) = self.length
        {
            if minimum > maximum {
                return Err(ArgumentError::new(format!(
                    "Invalid length range {}..{}: the minimum exceeds the maximum.",
                    minimum, maximum
                )));
            }
        }
        Ok(())
    }

    fn with_length(&self, minimum: Option<u32>, maximum: Option<u32>) -> Self {
        let current = self.length.unwrap_or_default();
        Self {
            length: Some(RelationshipLength {
                minimum: minimum.or(current.minimum),
                maximum: maximum.or(current.maximum),
            }),
            ..self.clone()
        }
    }
}

/// 两个节点之间的一条关系
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    left: Node,
    detail: RelationshipDetail,
    right: Node,
}

impl Relationship {
    fn create(left: &Node, direction: Direction, right: &Node, types: &[&str]) -> Self {
        let types = types
            .iter()
            .map(|value| Arc::from(*value))
            .collect::<Vec<Arc<str>>>();
        Self {
            left: left.clone(),
            detail: RelationshipDetail {
                direction,
                name: None,
                types: RelationshipTypes(types.into()),
                length: None,
                properties: None,
            },
            right: right.clone(),
        }
    }

    fn with_detail(&self, detail: RelationshipDetail) -> Self {
        Self {
            detail,
            ..self.clone()
        }
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn detail(&self) -> &RelationshipDetail {
        &self.detail
    }

    pub fn right(&self) -> &Node {
        &self.right
    }

    pub fn symbolic_name(&self) -> Option<&SymbolicName> {
        self.detail.name.as_ref()
    }

    /// 返回带符号名的副本
    pub fn named(&self, name: &str) -> Result<Self, ArgumentError> {
        Ok(self.with_detail(RelationshipDetail {
            name: Some(SymbolicName::new(name)?),
            ..self.detail.clone()
        }))
    }

    /// 变长范围 `*min..max`
    pub fn length(&self, minimum: u32, maximum: u32) -> Self {
        self.with_detail(self.detail.with_length(Some(minimum), Some(maximum)))
    }

    /// 只设置下限 `*min..`
    pub fn min_length(&self, minimum: u32) -> Self {
        self.with_detail(self.detail.with_length(Some(minimum), None))
    }

    /// 只设置上限 `*..max`
    pub fn max_length(&self, maximum: u32) -> Self {
        self.with_detail(self.detail.with_length(None, Some(maximum)))
    }

    /// 不限长度 `*`
    pub fn unbounded(&self) -> Self {
        self.with_detail(RelationshipDetail {
            length: Some(RelationshipLength::default()),
            ..self.detail.clone()
        })
    }

    /// 返回带属性映射的副本
    pub fn properties(&self, keys_and_values: Vec<MapArgument>) -> Result<Self, ArgumentError> {
        let properties = if keys_and_values.is_empty() {
            None
        } else {
            Some(MapExpression::create(keys_and_values)?)
        };
        Ok(self.with_detail(RelationshipDetail {
            properties,
            ..self.detail.clone()
        }))
    }

    /// 返回带给定属性映射的副本
    pub fn with_properties(&self, properties: MapExpression) -> Self {
        self.with_detail(RelationshipDetail {
            properties: Some(properties),
            ..self.detail.clone()
        })
    }

    fn required_name(&self) -> Result<&SymbolicName, ArgumentError> {
        self.symbolic_name()
            .ok_or_else(|| ArgumentError::new("The relationship needs to be named."))
    }

    /// 关系属性 `r.key`，关系必须已命名
    pub fn property(&self, key: &str) -> Result<Expression, ArgumentError> {
        let subject = Expression::Variable(self.required_name()?.clone());
        Ok(Expression::Property(PropertyLookup::new(subject, key)?))
    }

    /// 作为表达式引用该关系
    pub fn as_expression(&self) -> Result<Expression, ArgumentError> {
        Ok(Expression::Variable(self.required_name()?.clone()))
    }

    pub fn relationship_to(&self, other: &Node, types: &[&str]) -> RelationshipChain {
        RelationshipChain::from(self.clone()).relationship_to(other, types)
    }

    pub fn relationship_from(&self, other: &Node, types: &[&str]) -> RelationshipChain {
        RelationshipChain::from(self.clone()).relationship_from(other, types)
    }

    pub fn relationship_between(&self, other: &Node, types: &[&str]) -> RelationshipChain {
        RelationshipChain::from(self.clone()).relationship_between(other, types)
    }
}

/// 关系链，按声明顺序保存每一跳
///
/// 命名、长度和属性设置都作用在最后一跳上。
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipChain {
    relationships: Arc<[Relationship]>,
}

impl From<Relationship> for RelationshipChain {
    fn from(relationship: Relationship) -> Self {
        Self {
            relationships: Arc::from(vec![relationship]),
        }
    }
}

impl RelationshipChain {
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    fn last(&self) -> &Relationship {
        // 链至少包含一跳
        &self.relationships[self.relationships.len() - 1]
    }

    fn append(&self, direction: Direction, other: &Node, types: &[&str]) -> Self {
        let next = Relationship::create(self.last().right(), direction, other, types);
        let mut relationships = self.relationships.to_vec();
        relationships.push(next);
        Self {
            relationships: relationships.into(),
        }
    }

    fn map_last(&self, f: impl FnOnce(&Relationship) -> Relationship) -> Self {
        let mut relationships = self.relationships.to_vec();
        if let Some(last) = relationships.last_mut() {
            *last = f(last);
        }
        Self {
            relationships: relationships.into(),
        }
    }

    fn try_map_last(
        &self,
        f: impl FnOnce(&Relationship) -> Result<Relationship, ArgumentError>,
    ) -> Result<Self, ArgumentError> {
        let mut relationships = self.relationships.to_vec();
        if let Some(last) = relationships.last_mut() {
            *last = f(last)?;
        }
        Ok(Self {
            relationships: relationships.into(),
        })
    }

    pub fn relationship_to(&self, other: &Node, types: &[&str]) -> Self {
        self.append(Direction::LeftToRight, other, types)
    }

    pub fn relationship_from(&self, other: &Node, types: &[&str]) -> Self {
        self.append(Direction::RightToLeft, other, types)
    }

    pub fn relationship_between(&self, other: &Node, types: &[&str]) -> Self {
        self.append(Direction::Undirected, other, types)
    }

    pub fn named(&self, name: &str) -> Result<Self, ArgumentError> {
        self.try_map_last(|last| last.named(name))
    }

    pub fn length(&self, minimum: u32, maximum: u32) -> Self {
        self.map_last(|last| last.length(minimum, maximum))
    }

    pub fn min_length(&self, minimum: u32) -> Self {
        self.map_last(|last| last.min_length(minimum))
    }

    pub fn max_length(&self, maximum: u32) -> Self {
        self.map_last(|last| last.max_length(maximum))
    }

    pub fn unbounded(&self) -> Self {
        self.map_last(Relationship::unbounded)
    }

    pub fn properties(&self, keys_and_values: Vec<MapArgument>) -> Result<Self, ArgumentError> {
        self.try_map_last(|last| last.properties(keys_and_values))
    }
}

/// 可以出现在 MATCH/CREATE/MERGE 中的模式元素
#[derive(Debug, Clone, PartialEq)]
pub enum PatternElement {
    Node(Node),
    Relationship(Relationship),
    Chain(RelationshipChain),
}

impl PatternElement {
    /// 检查元素中每一跳关系的类型和长度
    ///
    /// 关系的流式方法不返回 `Result`，进入子句前在这里统一校验。
    pub fn validate(&self) -> Result<(), ArgumentError> {
        match self {
            PatternElement::Node(_) => Ok(()),
            PatternElement::Relationship(relationship) => relationship.detail.validate(),
            PatternElement::Chain(chain) => chain
                .relationships()
                .iter()
                .try_for_each(|relationship| relationship.detail.validate()),
        }
    }
}

impl From<Node> for PatternElement {
    fn from(node: Node) -> Self {
        PatternElement::Node(node)
    }
}

impl From<&Node> for PatternElement {
    fn from(node: &Node) -> Self {
        PatternElement::Node(node.clone())
    }
}

impl From<Relationship> for PatternElement {
    fn from(relationship: Relationship) -> Self {
        PatternElement::Relationship(relationship)
    }
}

impl From<&Relationship> for PatternElement {
    fn from(relationship: &Relationship) -> Self {
        PatternElement::Relationship(relationship.clone())
    }
}

impl From<RelationshipChain> for PatternElement {
    fn from(chain: RelationshipChain) -> Self {
        PatternElement::Chain(chain)
    }
}

impl From<&RelationshipChain> for PatternElement {
    fn from(chain: &RelationshipChain) -> Self {
        PatternElement::Chain(chain.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_relationship_type_is_rejected() {
        let a = Node::any().named("a").unwrap();
        let b = Node::any().named("b").unwrap();

        let element = PatternElement::from(a.relationship_to(&b, &["KNOWS", ""]));
        let error = element.validate().unwrap_err();
        assert_eq!(error.message(), "An empty relationship type is not allowed.");

        let chain = a.relationship_to(&b, &["KNOWS"]).relationship_from(&a, &[""]);
        assert!(PatternElement::from(chain).validate().is_err());

        let valid = a.relationship_between(&b, &[]).relationship_to(&a, &["LIKES"]);
        assert!(PatternElement::from(valid).validate().is_ok());
    }

    #[test]
    fn test_inverted_length_range_is_rejected() {
        let a = Node::any().named("a").unwrap();
        let b = Node::any().named("b").unwrap();
        let relationship = a.relationship_to(&b, &[]);

        let error = PatternElement::from(relationship.length(4, 1))
            .validate()
            .unwrap_err();
        assert_eq!(
            error.message(),
            "Invalid length range 4..1: the minimum exceeds the maximum."
        );

        let merged = relationship.min_length(5).max_length(2);
        assert!(PatternElement::from(merged).validate().is_err());

        for ok in [
            relationship.length(2, 2),
            relationship.min_length(3),
            relationship.max_length(3),
            relationship.unbounded(),
        ] {
            assert!(PatternElement::from(ok).validate().is_ok());
        }
    }

    #[test]
    fn test_node_requires_primary_label() {
        let error = Node::create("", &[]).unwrap_err();
        assert_eq!(error.message(), "A primary label is required.");

        let error = Node::create("Person", &["Actor", ""]).unwrap_err();
        assert_eq!(error.message(), "An empty label is not allowed.");
    }

    #[test]
    fn test_named_returns_new_node() {
        let node = Node::create("Movie", &[]).unwrap();
        let named = node.named("m").unwrap();

        assert!(node.symbolic_name().is_none());
        assert_eq!(named.symbolic_name().map(SymbolicName::as_str), Some("m"));
        assert_eq!(named.labels(), node.labels());
    }

    #[test]
    fn test_named_requires_name() {
        let error = Node::any().named("").unwrap_err();
        assert_eq!(error.message(), "Symbolic name is required.");
    }

    #[test]
    fn test_property_requires_named_node() {
        let error = Node::any().property("name").unwrap_err();
        assert_eq!(error.message(), "The node needs to be named.");
    }

    #[test]
    fn test_properties_argument_validation() {
        let node = Node::any();
        let error = node.properties(vec!["name".into()]).unwrap_err();
        assert_eq!(error.message(), "Need an even number of input parameters.");

        let cleared = node.properties(Vec::new()).unwrap();
        assert!(cleared.properties_map().is_none());
    }

    #[test]
    fn test_chain_preserves_hop_directions() {
        let a = Node::any().named("a").unwrap();
        let b = Node::any().named("b").unwrap();
        let c = Node::any().named("c").unwrap();

        let chain = a.relationship_to(&b, &["X"]).relationship_from(&c, &["Y"]);
        let hops = chain.relationships();
        assert_eq!(hops.len(), 2);
        assert_eq!(hops[0].detail().direction(), Direction::LeftToRight);
        assert_eq!(hops[1].detail().direction(), Direction::RightToLeft);
        assert_eq!(hops[1].left(), &b);
    }

    #[test]
    fn test_length_applies_to_last_hop() {
        let a = Node::any();
        let chain = a
            .relationship_to(&Node::any(), &[])
            .relationship_to(&Node::any(), &[])
            .length(1, 4);
        let hops = chain.relationships();
        assert!(hops[0].detail().length().is_none());
        let length = hops[1].detail().length().copied().unwrap();
        assert_eq!(length.minimum(), Some(1));
        assert_eq!(length.maximum(), Some(4));
    }

    #[test]
    fn test_min_and_max_length_combine() {
        let relationship = Node::any()
            .relationship_between(&Node::any(), &[])
            .min_length(2)
            .max_length(5);
        let length = relationship.detail().length().copied().unwrap();
        assert_eq!(length.minimum(), Some(2));
        assert_eq!(length.maximum(), Some(5));

        let unbounded = relationship.unbounded();
        assert!(unbounded.detail().length().unwrap().is_unbounded());
    }

    #[test]
    fn test_relationship_property_requires_name() {
        let relationship = Node::any().relationship_to(&Node::any(), &["OWNS"]);
        let error = relationship.property("since").unwrap_err();
        assert_eq!(error.message(), "The relationship needs to be named.");
        assert!(relationship.named("r").unwrap().property("since").is_ok());
    }
}
