//! 遍历调度器
//!
//! 深度优先遍历语句树，对每个节点依次调用 `pre_enter`、`enter`，
//! 访问子节点后调用 `leave` 和 `post_leave`。调度器维护一个打开节点栈，
//! 只有当节点恰好位于栈顶时才会调用 `leave`。

use crate::core::error::DispatchError;
use crate::query::statement::Statement;
use crate::query::visitor::ast_node::AstNode;

/// 遍历回调
///
/// `ancestors` 是当前节点之上的打开节点，最后一个元素是直接父节点。
pub trait Visitor<'a> {
    /// 返回 false 时跳过该节点及其整个子树
    fn pre_enter(&mut self, _node: AstNode<'a>, _ancestors: &[AstNode<'a>]) -> bool {
        true
    }

    fn enter(&mut self, _node: AstNode<'a>, _ancestors: &[AstNode<'a>]) {}

    fn leave(&mut self, _node: AstNode<'a>, _ancestors: &[AstNode<'a>]) {}

    /// 在 `leave` 之后无条件调用
    fn post_leave(&mut self, _node: AstNode<'a>, _ancestors: &[AstNode<'a>]) {}
}

/// 遍历调度器，每次遍历使用一个新实例
#[derive(Debug, Default)]
pub struct Dispatcher<'a> {
    stack: Vec<AstNode<'a>>,
    errors: Vec<DispatchError>,
}

impl<'a> Dispatcher<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以语句为根遍历整棵树
    pub fn dispatch<V: Visitor<'a>>(
        statement: &'a Statement,
        visitor: &mut V,
    ) -> Result<(), DispatchError> {
        let mut dispatcher = Dispatcher::new();
        dispatcher.visit(AstNode::Statement(statement), visitor);
        dispatcher.finish()
    }

    /// 遍历一个节点及其子树
    pub fn visit<V: Visitor<'a>>(&mut self, node: AstNode<'a>, visitor: &mut V) {
        if !visitor.pre_enter(node, &self.stack) {
            return;
        }
        self.enter(node, visitor);
        for child in node.children() {
            self.visit(child, visitor);
        }
        self.leave(node, visitor);
    }

    /// 打开节点：调用 `enter` 并压栈
    pub fn enter<V: Visitor<'a>>(&mut self, node: AstNode<'a>, visitor: &mut V) {
        visitor.enter(node, &self.stack);
        self.stack.push(node);
    }

    /// 关闭节点：节点必须位于栈顶，否则记录不平衡错误并跳过 `leave`
    pub fn leave<V: Visitor<'a>>(&mut self, node: AstNode<'a>, visitor: &mut V) {
        let on_top = self.stack.last().is_some_and(|top| top.is_same(&node));
        if on_top {
            self.stack.pop();
            visitor.leave(node, &self.stack);
        } else {
            let error = DispatchError::Imbalance {
                expected: self
                    .stack
                    .last()
                    .map_or("nothing", |top| top.kind())
                    .to_string(),
                found: node.kind().to_string(),
            };
            log::error!("{}", error);
            self.errors.push(error);
        }
        visitor.post_leave(node, &self.stack);
    }

    /// 当前打开的节点数
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// 结束遍历，返回遇到的第一个错误
    pub fn finish(mut self) -> Result<(), DispatchError> {
        if !self.errors.is_empty() {
            return Err(self.errors.remove(0));
        }
        if !self.stack.is_empty() {
            let error = DispatchError::Unclosed {
                open: self.stack.len(),
            };
            log::error!("{}", error);
            return Err(error);
        }
        Ok(())
    }
}
