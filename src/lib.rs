//! Cypher DSL - a fluent, immutable Cypher statement builder and renderer
//!
//! Statements are assembled through a staged builder into an immutable tree,
//! then rendered into query text plus an ordered parameter map.
//!
//! ```rust
//! use cypher_dsl::prelude::*;
//!
//! let movie = Cypher::node("Movie").unwrap().named("m").unwrap();
//! let statement = Cypher::match_([&movie])
//!     .unwrap()
//!     .returning([&movie])
//!     .unwrap()
//!     .build();
//! assert_eq!(statement.cypher(), "MATCH (m:`Movie`) RETURN m");
//! ```

pub mod config;
pub mod core;
pub mod query;
pub mod utils;

pub use crate::core::error::{ArgumentError, CypherError, CypherResult, StatementError};
pub use crate::query::{render, Cypher, RenderedStatement, Renderer, Statement};

/// 常用类型和扩展 trait
pub mod prelude {
    pub use crate::core::error::{ArgumentError, CypherError, CypherResult, StatementError};
    pub use crate::core::types::expression::functions;
    pub use crate::core::types::{
        Condition, Expression, ExpressionExt, Literal, MapArgument, MapExpression, Node,
        Operation, Parameter, PatternElement, Relationship, RelationshipChain, SortItem,
        SymbolicName,
    };
    pub use crate::query::builder::{Cypher, ExposesClauses};
    pub use crate::query::renderer::{render, RenderedStatement, Renderer};
    pub use crate::query::statement::Statement;
}
