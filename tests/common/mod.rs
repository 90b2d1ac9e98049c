//! 集成测试共享工具模块
//!
//! 提供测试中反复使用的节点和渲染辅助函数

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use cypher_dsl::prelude::*;

/// 渲染语句文本
pub fn cypher(statement: &Statement) -> String {
    render(statement).cypher().to_string()
}

/// 断言语句渲染为指定文本
pub fn assert_cypher(statement: &Statement, expected: &str) {
    assert_eq!(cypher(statement), expected);
}
