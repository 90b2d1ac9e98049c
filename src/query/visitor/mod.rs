//! 语句树遍历
//!
//! `AstNode` 是所有节点种类组成的封闭枚举，`Dispatcher` 按 `children()`
//! 给出的顺序深度优先遍历，并把每个节点交给 `Visitor` 的回调处理。

mod ast_node;
mod dispatcher;

pub use ast_node::AstNode;
pub use dispatcher::{Dispatcher, Visitor};
