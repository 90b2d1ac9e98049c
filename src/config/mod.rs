use crate::core::error::{CypherError, CypherResult};
use crate::core::types::symbolic_name::is_identifier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "cypher-dsl".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 渲染配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RendererConfig {
    /// 匿名参数名前缀
    pub anonymous_parameter_prefix: String,
    /// 是否以 debug 级别记录渲染结果
    pub log_statements: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            anonymous_parameter_prefix: "__p".to_string(),
            log_statements: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub renderer: RendererConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> CypherResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| CypherError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> CypherResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CypherError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 前缀必须能作为参数名的开头
    fn validate(&self) -> CypherResult<()> {
        let prefix = &self.renderer.anonymous_parameter_prefix;
        if !is_identifier(prefix) {
            return Err(CypherError::Config(format!(
                "Invalid anonymous parameter prefix '{}'",
                prefix
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.renderer.anonymous_parameter_prefix, "__p");
        assert!(!config.renderer.log_statements);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.renderer.anonymous_parameter_prefix = "param".to_string();
        config.renderer.log_statements = true;
        config.save(&path).expect("Failed to save config");

        let loaded = Config::load(&path).expect("Failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[renderer]\nlog_statements = true\n").expect("Failed to write");

        let loaded = Config::load(&path).expect("Failed to load config");
        assert!(loaded.renderer.log_statements);
        assert_eq!(loaded.renderer.anonymous_parameter_prefix, "__p");
        assert_eq!(loaded.log, LogConfig::default());
    }

    #[test]
    fn test_invalid_prefix_is_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[renderer]\nanonymous_parameter_prefix = \"1x\"\n")
            .expect("Failed to write");

        assert!(matches!(Config::load(&path), Err(CypherError::Config(_))));
    }

    #[test]
    fn test_prefix_follows_symbolic_name_rule() {
        use crate::core::types::SymbolicName;

        for prefix in ["__p", "arg", "pä_", "_1", "", "1x", "a-b", "a b"] {
            let mut config = Config::default();
            config.renderer.anonymous_parameter_prefix = prefix.to_string();
            assert_eq!(
                config.validate().is_ok(),
                SymbolicName::new(prefix).is_ok(),
                "prefix '{}'",
                prefix
            );
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = Config::load(temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(CypherError::Io(_))));
    }
}
