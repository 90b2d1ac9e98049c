//! 统一表达式类型定义
//!
//! 本模块定义语句 AST 中使用的统一表达式类型 `Expression`。
//!
//! ## 变体说明
//!
//! | 变体 | 用途 |
//! |------|------|
//! | `Literal` | 字面量值 |
//! | `Variable` | 变量引用 |
//! | `Parameter` | 参数占位符 |
//! | `Property` | 属性访问 |
//! | `Function` | 函数调用 |
//! | `Operation` | 算术与更新运算 |
//! | `Condition` | 布尔条件 |
//! | `Aliased` | 别名 |
//! | `Map` | 映射字面量 |
//! | `List` | 列表字面量 |
//! | `Node` | 匿名节点模式 |
//! | `Asterisk` | `*` |
//!
//! ## 使用示例
//!
//! ```rust
//! use cypher_dsl::core::types::expression::{Expression, ExpressionExt};
//!
//! let released = Expression::variable("m").unwrap().property("released").unwrap();
//! let condition = released.gte(Expression::literal(1990));
//! ```

mod constructors;
mod def;
pub mod functions;

pub use constructors::ExpressionExt;
pub use def::{
    AliasedExpression, Expression, FunctionInvocation, ListExpression, MapArgument, MapEntry,
    MapExpression, Operation, PropertyLookup, SortDirection, SortItem,
};
