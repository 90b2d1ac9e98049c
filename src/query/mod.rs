//! 查询模块
//!
//! - `statement`：不可变的语句树
//! - `builder`：分阶段构建语句的流式 API
//! - `visitor`：语句树的遍历调度
//! - `renderer`：把语句渲染成文本和参数表

pub mod builder;
pub mod renderer;
pub mod statement;
pub mod visitor;

pub use builder::{Cypher, ExposesClauses};
pub use renderer::{render, RenderedStatement, Renderer};
pub use statement::Statement;
