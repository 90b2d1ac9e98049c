// 核心类型系统模块
//
// 包含语句 AST 的值类型：字面量、符号名、表达式、条件、操作符和图模式元素

pub mod condition;
pub mod expression;
pub mod literal;
pub mod operators;
pub mod pattern;
pub mod symbolic_name;

pub use condition::{Comparison, CompoundCondition, Condition, HasLabels};
pub use expression::{
    AliasedExpression, Expression, ExpressionExt, FunctionInvocation, ListExpression, MapArgument,
    MapEntry, MapExpression, Operation, PropertyLookup, SortDirection, SortItem,
};
pub use literal::Literal;
pub use operators::{
    BinaryOperator, LogicalOperator, Operator, OperatorInstance, OperatorType, UnaryOperator,
};
pub use pattern::{
    Direction, Node, NodeLabel, PatternElement, Relationship, RelationshipChain,
    RelationshipDetail, RelationshipLength, RelationshipTypes,
};
pub use symbolic_name::{Parameter, ParameterKey, SymbolicName};
