//! 持久化子句列表
//!
//! 构建器每一步都返回新值。子句以单链表保存，新版本只追加一个节点，
//! 前缀在各版本之间共享。

use crate::query::statement::Clause;
use std::sync::Arc;

#[derive(Debug)]
struct ClauseCell {
    clause: Clause,
    previous: Option<Arc<ClauseCell>>,
}

/// 已完成的子句序列
#[derive(Debug, Clone, Default)]
pub struct ClauseList {
    head: Option<Arc<ClauseCell>>,
    len: usize,
}

impl ClauseList {
    /// 返回追加了一个子句的新列表
    pub(crate) fn push(&self, clause: Clause) -> Self {
        Self {
            head: Some(Arc::new(ClauseCell {
                clause,
                previous: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last(&self) -> Option<&Clause> {
        self.head.as_deref().map(|cell| &cell.clause)
    }

    /// 按声明顺序展开
    pub(crate) fn to_vec(&self) -> Vec<Clause> {
        let mut clauses = Vec::with_capacity(self.len);
        let mut current = self.head.as_deref();
        while let Some(cell) = current {
            clauses.push(cell.clause.clone());
            current = cell.previous.as_deref();
        }
        clauses.reverse();
        clauses
    }

    #[cfg(test)]
    fn shares_prefix_with(&self, other: &ClauseList) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => match &a.previous {
                Some(previous) => Arc::ptr_eq(previous, b),
                None => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Expression;
    use crate::query::statement::{Delete, ExpressionList, Set};

    fn delete() -> Clause {
        Clause::Delete(Delete::new(false, ExpressionList::new(vec![Expression::Asterisk])))
    }

    fn set() -> Clause {
        Clause::Set(Set::new(ExpressionList::new(vec![Expression::Asterisk])))
    }

    #[test]
    fn test_push_keeps_original() {
        let empty = ClauseList::default();
        let one = empty.push(delete());
        let two = one.push(set());

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 2);
        assert_eq!(two.to_vec(), vec![delete(), set()]);
        assert_eq!(one.to_vec(), vec![delete()]);
    }

    #[test]
    fn test_versions_share_prefix() {
        let base = ClauseList::default().push(delete());
        let left = base.push(set());
        let right = base.push(delete());

        assert!(left.shares_prefix_with(&base));
        assert!(right.shares_prefix_with(&base));
        assert_eq!(left.last(), Some(&set()));
        assert_eq!(right.last(), Some(&delete()));
    }
}
