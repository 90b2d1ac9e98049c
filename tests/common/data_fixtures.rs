//! 测试数据生成模块
//!
//! 提供各测试共用的节点

use cypher_dsl::prelude::*;

fn labelled(label: &str, name: &str) -> Node {
    Cypher::node(label)
        .and_then(|node| node.named(name))
        .expect("fixture node")
}

/// `(b:Bike)`
pub fn bike() -> Node {
    labelled("Bike", "b")
}

/// `(u:User)`
pub fn user() -> Node {
    labelled("User", "u")
}

/// `(t:Trip)`
pub fn trip() -> Node {
    labelled("Trip", "t")
}

/// `(o:U)`
pub fn other() -> Node {
    labelled("U", "o")
}

/// `(m:Movie)`
pub fn movie(name: &str) -> Node {
    labelled("Movie", name)
}

/// `(p:Person)`
pub fn person(name: &str) -> Node {
    labelled("Person", name)
}

/// 字符串字面量
pub fn text(value: &str) -> Expression {
    Cypher::literal_of(value)
}
