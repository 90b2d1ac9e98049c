//! 符号名与参数
//!
//! 符号名绑定到模式元素或别名上，之后按名字引用；参数是渲染时
//! 外置到参数表中的占位符。

use crate::core::error::ArgumentError;
use crate::utils::string_utils::strip_parameter_prefix;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

fn identifier_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[\p{L}_][\p{L}\p{N}_]*$").ok())
        .as_ref()
}

/// 检查名字是否为合法的未加引号标识符
pub fn is_identifier(name: &str) -> bool {
    identifier_pattern().is_some_and(|pattern| pattern.is_match(name))
}

/// 符号名
///
/// 按名字的值比较相等，渲染时不加引号。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolicName(Arc<str>);

impl SymbolicName {
    /// 创建符号名，名字必须是合法标识符
    pub fn new(name: impl AsRef<str>) -> Result<Self, ArgumentError> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(ArgumentError::new("Symbolic name is required."));
        }
        if !is_identifier(name) {
            return Err(ArgumentError::new(format!(
                "'{}' is not a valid symbolic name.",
                name
            )));
        }
        Ok(SymbolicName(Arc::from(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static NEXT_PARAMETER_ID: AtomicU64 = AtomicU64::new(1);

/// 参数在参数表中的身份
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterKey {
    Named(Arc<str>),
    Anonymous(u64),
}

/// 参数占位符
///
/// 命名参数按名字去重；匿名参数按创建时分配的 id 去重，
/// 它的克隆与原值共享同一个 id，名字在渲染时生成。
#[derive(Debug, Clone)]
pub struct Parameter {
    id: u64,
    name: Option<Arc<str>>,
    value: Option<Arc<Value>>,
}

impl Parameter {
    /// 创建命名参数，允许带前导 `$`
    pub fn named(name: &str) -> Result<Self, ArgumentError> {
        let name = strip_parameter_prefix(name);
        if name.is_empty() {
            return Err(ArgumentError::new("The parameter name is required."));
        }
        if !is_identifier(name) {
            return Err(ArgumentError::new(format!(
                "'{}' is not a valid parameter name.",
                name
            )));
        }
        Ok(Self {
            id: NEXT_PARAMETER_ID.fetch_add(1, Ordering::Relaxed),
            name: Some(Arc::from(name)),
            value: None,
        })
    }

    /// 创建匿名参数，只携带值
    pub fn anonymous(value: impl Into<Value>) -> Self {
        Self {
            id: NEXT_PARAMETER_ID.fetch_add(1, Ordering::Relaxed),
            name: None,
            value: Some(Arc::new(value.into())),
        }
    }

    /// 返回绑定了值的新参数
    pub fn with_value(&self, value: impl Into<Value>) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            value: Some(Arc::new(value.into())),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }

    pub fn key(&self) -> ParameterKey {
        match &self.name {
            Some(name) => ParameterKey::Named(name.clone()),
            None => ParameterKey::Anonymous(self.id),
        }
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.value == other.value
    }
}
