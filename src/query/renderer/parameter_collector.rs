//! 参数收集
//!
//! 渲染前先遍历一遍语句，记下所有命名参数的名字，
//! 这样匿名参数生成名字时可以避开它们。

use crate::core::types::{Parameter, ParameterKey};
use crate::query::visitor::{AstNode, Visitor};
use crate::utils::AnonParamGenerator;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;

/// 收集语句中出现的命名参数名
#[derive(Debug, Default)]
pub struct ParameterCollector {
    names: Vec<String>,
}

impl ParameterCollector {
    /// 按首次出现顺序返回去重后的名字
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl<'a> Visitor<'a> for ParameterCollector {
    fn enter(&mut self, node: AstNode<'a>, _ancestors: &[AstNode<'a>]) {
        if let AstNode::Parameter(parameter) = node {
            if let Some(name) = parameter.name() {
                if !self.names.iter().any(|known| known == name) {
                    self.names.push(name.to_string());
                }
            }
        }
    }
}

/// 渲染过程中的参数表
///
/// 参数按首次出现的顺序登记；同一个参数再次出现时返回已有的名字。
#[derive(Debug)]
pub struct ParameterTable {
    generator: AnonParamGenerator,
    names: HashMap<ParameterKey, String>,
    values: IndexMap<String, Value>,
}

impl ParameterTable {
    pub fn new(generator: AnonParamGenerator, named: &[String]) -> Self {
        let mut generator = generator;
        for name in named {
            generator.reserve(name.clone());
        }
        Self {
            generator,
            names: HashMap::new(),
            values: IndexMap::new(),
        }
    }

    /// 登记参数并返回它在语句中的名字
    pub fn register(&mut self, parameter: &Parameter) -> String {
        let key = parameter.key();
        let name = match self.names.get(&key).cloned() {
            Some(name) => name,
            None => {
                let name = match parameter.name() {
                    Some(name) => name.to_string(),
                    None => self.generator.next_name(),
                };
                self.names.insert(key, name.clone());
                name
            }
        };

        let value = parameter.value().cloned();
        match self.values.entry(name.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(value.unwrap_or(Value::Null));
            }
            Entry::Occupied(mut entry) => {
                if let Some(value) = value {
                    let existing = entry.get_mut();
                    if existing.is_null() {
                        *existing = value;
                    } else if *existing != value {
                        log::warn!(
                            "Parameter '{}' bound to conflicting values, keeping {}",
                            name,
                            existing
                        );
                    }
                }
            }
        }
        name
    }

    pub fn into_values(self) -> IndexMap<String, Value> {
        self.values
    }
}
