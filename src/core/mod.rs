pub mod error;
pub mod types;

// 错误和结果类型
pub use error::{ArgumentError, CypherError, CypherResult, DispatchError, StatementError};

// 核心数据类型
pub use types::*;
