//! 字面量类型定义
//!
//! 字面量在构造时完成类型检查，渲染时直接输出其 Cypher 文本形式。

use crate::core::error::ArgumentError;
use crate::utils::string_utils::quote_string_literal;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// 类型化常量
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(Arc<str>),
    List(Arc<[Literal]>),
}

impl Literal {
    /// 创建浮点字面量，NaN 和无穷大没有 Cypher 字面量形式
    pub fn float(value: f64) -> Result<Self, ArgumentError> {
        if value.is_finite() {
            Ok(Literal::Float(value))
        } else {
            Err(ArgumentError::new(format!(
                "Unsupported literal type: {}",
                value
            )))
        }
    }

    /// 创建列表字面量
    pub fn list(values: impl IntoIterator<Item = Literal>) -> Self {
        Literal::List(values.into_iter().collect())
    }

    /// 获取字面量的 Cypher 文本形式
    pub fn as_cypher(&self) -> String {
        match self {
            Literal::Null => "NULL".to_string(),
            Literal::Boolean(b) => b.to_string(),
            Literal::Integer(i) => i.to_string(),
            Literal::Float(f) => format_float(*f),
            Literal::String(s) => quote_string_literal(s),
            Literal::List(values) => {
                let items: Vec<String> = values.iter().map(Literal::as_cypher).collect();
                format!("[{}]", items.join(", "))
            }
        }
    }
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_cypher())
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Integer(i64::from(value))
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Integer(i64::from(value))
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(Arc::from(value))
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(Arc::from(value))
    }
}

impl From<Vec<Literal>> for Literal {
    fn from(values: Vec<Literal>) -> Self {
        Literal::List(values.into())
    }
}

impl TryFrom<f64> for Literal {
    type Error = ArgumentError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Literal::float(value)
    }
}

impl TryFrom<Value> for Literal {
    type Error = ArgumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Literal::Null),
            Value::Bool(b) => Ok(Literal::Boolean(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Literal::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Literal::float(f)
                } else {
                    Err(ArgumentError::new(format!("Unsupported literal type: {}", n)))
                }
            }
            Value::String(s) => Ok(Literal::from(s)),
            Value::Array(values) => values
                .into_iter()
                .map(Literal::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Literal::from),
            Value::Object(_) => Err(ArgumentError::new("Unsupported literal type: map")),
        }
    }
}
