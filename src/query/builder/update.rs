//! 更新阶段

use crate::query::builder::clause_list::ClauseList;
use crate::query::builder::exposes::ExposesClauses;
use crate::query::builder::finish;
use crate::query::statement::Statement;

/// 以更新子句结尾的阶段，无需 RETURN 即可构建
#[derive(Debug, Clone)]
pub struct OngoingUpdate {
    clauses: ClauseList,
}

impl OngoingUpdate {
    pub(crate) fn new(clauses: ClauseList) -> Self {
        Self { clauses }
    }

    pub fn build(&self) -> Statement {
        finish(self.clauses.to_vec())
    }
}

impl ExposesClauses for OngoingUpdate {
    fn clauses(&self) -> ClauseList {
        self.clauses.clone()
    }
}
