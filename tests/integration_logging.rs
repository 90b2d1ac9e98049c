//! 日志与配置集成测试
//!
//! 测试范围:
//! - 配置文件读写和默认值
//! - 配置中的渲染选项生效
//! - 日志文件创建和写入

mod common;

use std::fs;

use common::data_fixtures::user;
use cypher_dsl::config::{Config, LogConfig, RendererConfig};
use cypher_dsl::prelude::*;
use cypher_dsl::utils::logging;
use cypher_dsl::CypherError;
use serial_test::serial;
use tempfile::TempDir;

fn sample_statement() -> Statement {
    let u = user();
    Cypher::match_([&u])
        .unwrap()
        .where_(
            u.property("name")
                .unwrap()
                .is_equal_to(Cypher::anonymous_parameter("Tom")),
        )
        .returning([&u])
        .unwrap()
        .build()
}

// ==================== 配置 ====================

#[test]
fn test_config_round_trip_through_file() {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let path = temp_dir.path().join("cypher.toml");

    let config = Config {
        log: LogConfig {
            level: "debug".to_string(),
            dir: "test_logs".to_string(),
            file: "test_cypher".to_string(),
            max_file_size: 50 * 1024 * 1024,
            max_files: 3,
        },
        renderer: RendererConfig {
            anonymous_parameter_prefix: "arg".to_string(),
            log_statements: true,
        },
    };
    config.save(&path).expect("保存配置失败");

    let toml_str = fs::read_to_string(&path).expect("读取配置失败");
    assert!(toml_str.contains("[log]"));
    assert!(toml_str.contains("[renderer]"));
    assert!(toml_str.contains("anonymous_parameter_prefix = \"arg\""));
    assert!(toml_str.contains("max_file_size = 52428800"));

    assert_eq!(Config::load(&path).expect("加载配置失败"), config);
}

#[test]
fn test_renderer_uses_loaded_prefix() {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let path = temp_dir.path().join("cypher.toml");
    fs::write(&path, "[renderer]\nanonymous_parameter_prefix = \"arg\"\n").expect("写入配置失败");

    let config = Config::load(&path).expect("加载配置失败");
    let renderer = Renderer::new(config.renderer);
    let rendered = renderer.render(&sample_statement());

    assert_eq!(
        rendered.cypher(),
        "MATCH (u:`User`) WHERE u.name = $arg0 RETURN u"
    );
    assert!(rendered.parameters().contains_key("arg0"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let temp_dir = TempDir::new().expect("创建临时目录失败");

    let bad_toml = temp_dir.path().join("bad.toml");
    fs::write(&bad_toml, "[renderer\n").expect("写入配置失败");
    assert!(matches!(Config::load(&bad_toml), Err(CypherError::Config(_))));

    let bad_prefix = temp_dir.path().join("prefix.toml");
    fs::write(&bad_prefix, "[renderer]\nanonymous_parameter_prefix = \"a-b\"\n")
        .expect("写入配置失败");
    let err = Config::load(&bad_prefix).expect_err("前缀应该被拒绝");
    assert!(err.to_string().contains("a-b"));

    let missing = temp_dir.path().join("missing.toml");
    assert!(matches!(Config::load(&missing), Err(CypherError::Io(_))));
}

// ==================== 日志 ====================

#[test]
#[serial]
fn test_rendered_statements_are_logged_to_file() {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let log_config = LogConfig {
        level: "debug".to_string(),
        dir: temp_dir.path().to_string_lossy().into_owned(),
        file: "render".to_string(),
        ..LogConfig::default()
    };

    logging::init(&log_config).expect("日志初始化失败");
    assert!(logging::is_initialized());

    let renderer = Renderer::new(RendererConfig {
        log_statements: true,
        ..RendererConfig::default()
    });
    renderer.render(&sample_statement());
    logging::shutdown();
    assert!(!logging::is_initialized());

    let mut contents = String::new();
    for entry in fs::read_dir(temp_dir.path()).expect("读取日志目录失败") {
        let path = entry.expect("目录项").path();
        if path.extension().is_some_and(|ext| ext == "log") {
            contents.push_str(&fs::read_to_string(&path).expect("读取日志文件失败"));
        }
    }
    assert!(
        contents.contains("Rendered statement: MATCH (u:`User`) WHERE u.name = $__p0 RETURN u"),
        "日志内容: {}",
        contents
    );
}
