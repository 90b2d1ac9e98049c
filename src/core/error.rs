//! 统一错误处理 for cypher-dsl
//!
//! ## 设计理念
//!
//! 1. **构造期失败**：所有参数校验都发生在 AST 节点构造时，
//!    `ArgumentError` 携带稳定的英文消息，调用方可以直接断言。
//! 2. **分层转换**：各子错误通过 `#[from]` 汇入 `CypherError`，
//!    `CypherResult<T>` 作为统一的返回类型。
//! 3. **内部不变量**：`DispatchError` 只在遍历引擎自身出错时出现，
//!    正常使用不会暴露给调用方。

use thiserror::Error;

/// 统一的错误类型
#[derive(Error, Debug)]
pub enum CypherError {
    #[error("{0}")]
    Argument(#[from] ArgumentError),

    #[error("{0}")]
    Statement(#[from] StatementError),

    #[error("{0}")]
    Dispatch(#[from] DispatchError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 统一的结果类型
pub type CypherResult<T> = Result<T, CypherError>;

/// 参数错误（结构化设计）
///
/// 构造 AST 节点时参数不合法：缺失操作数、空操作符、
/// 属性列表格式错误、不支持的字面量类型等。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ArgumentError {
    /// 错误消息
    pub message: String,
}

impl ArgumentError {
    /// 创建新的参数错误
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// 获取错误消息
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 语句构建错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// 缺少必需子句时调用了 `build()`
    #[error("Incomplete statement: the {missing} clause is missing.")]
    Incomplete { missing: &'static str },
}

impl StatementError {
    /// 创建缺少子句错误
    pub fn incomplete(missing: &'static str) -> Self {
        StatementError::Incomplete { missing }
    }

    /// 缺失的子句名称
    pub fn missing_clause(&self) -> &'static str {
        match self {
            StatementError::Incomplete { missing } => missing,
        }
    }
}

/// 遍历引擎内部错误
///
/// 表示 enter/leave 不平衡，属于引擎自身的缺陷。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unbalanced traversal: leaving {found} while {expected} is open.")]
    Imbalance { expected: String, found: String },

    #[error("Unbalanced traversal: {open} node(s) still open after traversal.")]
    Unclosed { open: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_error_message_is_verbatim() {
        let error = ArgumentError::new("Right expression must not be null.");
        assert_eq!(error.to_string(), "Right expression must not be null.");
        assert_eq!(error.message(), "Right expression must not be null.");
    }

    #[test]
    fn test_incomplete_statement_names_missing_clause() {
        let error = StatementError::incomplete("RETURN");
        assert_eq!(error.missing_clause(), "RETURN");
        assert_eq!(
            error.to_string(),
            "Incomplete statement: the RETURN clause is missing."
        );
    }

    #[test]
    fn test_conversion_into_cypher_error() {
        let error: CypherError = ArgumentError::new("Operator must not be empty.").into();
        assert!(matches!(error, CypherError::Argument(_)));
        assert_eq!(error.to_string(), "Operator must not be empty.");

        let error: CypherError = DispatchError::Unclosed { open: 2 }.into();
        assert!(matches!(error, CypherError::Dispatch(_)));
    }
}
