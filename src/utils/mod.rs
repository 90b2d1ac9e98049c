// 工具模块 - 仅用于导出各个子模块，不包含具体实现

// 日志模块
pub mod logging;

// 字符串工具模块
pub mod string_utils;
pub use string_utils::{
    escape_name, escape_string_literal, quote_string_literal, strip_parameter_prefix,
};

// 匿名参数名生成器模块
pub mod anon_var_generator;
pub use anon_var_generator::AnonParamGenerator;
