//! 操作符类型定义
//!
//! 定义 Cypher 表达式中使用的各种操作符类型和接口。
//! 优先级只在渲染时用于决定是否加括号，构建器按组合顺序原样保存表达式树。

use serde::{Deserialize, Serialize};

/// 操作符特征定义
pub trait Operator: std::fmt::Debug {
    /// 获取操作符的名称（即渲染出来的符号）
    fn name(&self) -> &str;

    /// 获取操作符的优先级，数值越大结合越紧
    fn precedence(&self) -> u8;

    /// 获取操作符的书写位置
    fn operator_type(&self) -> OperatorType;
}

/// 操作符的书写位置，决定渲染时两侧是否补空格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorType {
    /// `a + b`
    Binary,
    /// `NOT a`
    Prefix,
    /// `a IS NULL`
    Postfix,
    /// `n.a = b`
    Property,
    /// `n:A:B`
    Label,
}

/// 二元操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    // 算术操作
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    Exponent,

    // 字符串操作
    Concat,

    // 比较操作
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,

    // 字符串与集合谓词
    Matches,
    StartsWith,
    EndsWith,
    Contains,
    In,

    // 更新操作
    Set,
    SetLabel,
    RemoveLabel,
}

impl BinaryOperator {
    /// 是否为比较类操作符（结果为布尔值）
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Equality
                | BinaryOperator::Inequality
                | BinaryOperator::LessThan
                | BinaryOperator::LessThanOrEqualTo
                | BinaryOperator::GreaterThan
                | BinaryOperator::GreaterThanOrEqualTo
                | BinaryOperator::Matches
                | BinaryOperator::StartsWith
                | BinaryOperator::EndsWith
                | BinaryOperator::Contains
                | BinaryOperator::In
        )
    }

    /// 是否为算术或字符串运算
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Addition
                | BinaryOperator::Subtraction
                | BinaryOperator::Multiplication
                | BinaryOperator::Division
                | BinaryOperator::Modulo
                | BinaryOperator::Exponent
                | BinaryOperator::Concat
        )
    }
}

impl Operator for BinaryOperator {
    fn name(&self) -> &str {
        match self {
            BinaryOperator::Addition => "+",
            BinaryOperator::Subtraction => "-",
            BinaryOperator::Multiplication => "*",
            BinaryOperator::Division => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Exponent => "^",
            BinaryOperator::Concat => "+",
            BinaryOperator::Equality => "=",
            BinaryOperator::Inequality => "<>",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqualTo => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqualTo => ">=",
            BinaryOperator::Matches => "=~",
            BinaryOperator::StartsWith => "STARTS WITH",
            BinaryOperator::EndsWith => "ENDS WITH",
            BinaryOperator::Contains => "CONTAINS",
            BinaryOperator::In => "IN",
            BinaryOperator::Set => "=",
            BinaryOperator::SetLabel | BinaryOperator::RemoveLabel => "",
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            // 标签操作直接贴在变量后面
            BinaryOperator::SetLabel | BinaryOperator::RemoveLabel => 10,

            BinaryOperator::Exponent => 8,
            BinaryOperator::Multiplication | BinaryOperator::Division | BinaryOperator::Modulo => 7,
            BinaryOperator::Addition | BinaryOperator::Subtraction | BinaryOperator::Concat => 6,

            // 比较与谓词：低于 NOT，高于 AND
            BinaryOperator::Equality
            | BinaryOperator::Inequality
            | BinaryOperator::LessThan
            | BinaryOperator::LessThanOrEqualTo
            | BinaryOperator::GreaterThan
            | BinaryOperator::GreaterThanOrEqualTo
            | BinaryOperator::Matches
            | BinaryOperator::StartsWith
            | BinaryOperator::EndsWith
            | BinaryOperator::Contains
            | BinaryOperator::In => 4,

            BinaryOperator::Set => 1,
        }
    }

    fn operator_type(&self) -> OperatorType {
        match self {
            BinaryOperator::Set => OperatorType::Property,
            BinaryOperator::SetLabel | BinaryOperator::RemoveLabel => OperatorType::Label,
            _ => OperatorType::Binary,
        }
    }
}

/// 一元操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    // 逻辑操作
    Not,

    // 存在性检查
    IsNull,
    IsNotNull,
}

impl Operator for UnaryOperator {
    fn name(&self) -> &str {
        match self {
            UnaryOperator::Not => "NOT",
            UnaryOperator::IsNull => "IS NULL",
            UnaryOperator::IsNotNull => "IS NOT NULL",
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            UnaryOperator::Not => 5,
            UnaryOperator::IsNull | UnaryOperator::IsNotNull => 4,
        }
    }

    fn operator_type(&self) -> OperatorType {
        match self {
            UnaryOperator::Not => OperatorType::Prefix,
            UnaryOperator::IsNull | UnaryOperator::IsNotNull => OperatorType::Postfix,
        }
    }
}

/// 逻辑连接操作符，用于组合条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
    Xor,
}

impl Operator for LogicalOperator {
    fn name(&self) -> &str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
            LogicalOperator::Xor => "XOR",
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            LogicalOperator::And => 3,
            LogicalOperator::Or | LogicalOperator::Xor => 2,
        }
    }

    fn operator_type(&self) -> OperatorType {
        OperatorType::Binary
    }
}

/// 比较条件中使用的操作符实例，使用枚举避免动态分发
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorInstance {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

impl Operator for OperatorInstance {
    fn name(&self) -> &str {
        match self {
            OperatorInstance::Binary(op) => op.name(),
            OperatorInstance::Unary(op) => op.name(),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            OperatorInstance::Binary(op) => op.precedence(),
            OperatorInstance::Unary(op) => op.precedence(),
        }
    }

    fn operator_type(&self) -> OperatorType {
        match self {
            OperatorInstance::Binary(op) => op.operator_type(),
            OperatorInstance::Unary(op) => op.operator_type(),
        }
    }
}

impl From<BinaryOperator> for OperatorInstance {
    fn from(op: BinaryOperator) -> Self {
        OperatorInstance::Binary(op)
    }
}

impl From<UnaryOperator> for OperatorInstance {
    fn from(op: UnaryOperator) -> Self {
        OperatorInstance::Unary(op)
    }
}
