//! 语句渲染
//!
//! 渲染分两遍：第一遍收集命名参数，第二遍生成文本并登记参数值。
//! 每次调用都使用新的遍历状态，同一条语句可以在多个线程中同时渲染。

mod parameter_collector;
mod rendering_visitor;

pub use parameter_collector::{ParameterCollector, ParameterTable};
pub use rendering_visitor::RenderingVisitor;

use crate::config::RendererConfig;
use crate::query::statement::Statement;
use crate::query::visitor::Dispatcher;
use crate::utils::AnonParamGenerator;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// 渲染结果：语句文本和按首次出现顺序排列的参数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedStatement {
    cypher: String,
    parameters: IndexMap<String, Value>,
}

impl RenderedStatement {
    pub fn cypher(&self) -> &str {
        &self.cypher
    }

    pub fn parameters(&self) -> &IndexMap<String, Value> {
        &self.parameters
    }

    pub fn into_parts(self) -> (String, IndexMap<String, Value>) {
        (self.cypher, self.parameters)
    }
}

/// 渲染器
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn render(&self, statement: &Statement) -> RenderedStatement {
        let mut collector = ParameterCollector::default();
        if let Err(e) = Dispatcher::dispatch(statement, &mut collector) {
            log::error!("Parameter collection failed: {}", e);
        }

        let generator = AnonParamGenerator::new(self.config.anonymous_parameter_prefix.clone());
        let table = ParameterTable::new(generator, &collector.into_names());
        let mut visitor = RenderingVisitor::new(table);
        if let Err(e) = Dispatcher::dispatch(statement, &mut visitor) {
            log::error!("Rendering failed: {}", e);
        }

        let (cypher, table) = visitor.into_parts();
        let parameters = table.into_values();
        if self.config.log_statements {
            log::debug!("Rendered statement: {} {:?}", cypher, parameters);
        }
        RenderedStatement { cypher, parameters }
    }
}

/// 使用默认配置渲染
pub fn render(statement: &Statement) -> RenderedStatement {
    Renderer::default().render(statement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ExpressionExt, Node};
    use crate::query::builder::{Cypher, ExposesClauses};
    use serde_json::json;

    #[test]
    fn test_named_parameter_without_value() {
        let n = Node::any().named("n").unwrap();
        let statement = Cypher::match_([&n])
            .unwrap()
            .where_(
                n.property("a")
                    .unwrap()
                    .is_equal_to(Cypher::parameter("aParameter").unwrap()),
            )
            .returning([&n])
            .unwrap()
            .build();
        let rendered = render(&statement);
        assert_eq!(rendered.cypher(), "MATCH (n) WHERE n.a = $aParameter RETURN n");
        assert_eq!(rendered.parameters().get("aParameter"), Some(&Value::Null));
    }

    #[test]
    fn test_anonymous_prefix_from_config() {
        let n = Node::any().named("n").unwrap();
        let statement = Cypher::match_([&n])
            .unwrap()
            .where_(
                n.property("a")
                    .unwrap()
                    .is_equal_to(Cypher::anonymous_parameter(42)),
            )
            .returning([&n])
            .unwrap()
            .build();

        let renderer = Renderer::new(RendererConfig {
            anonymous_parameter_prefix: "p".to_string(),
            log_statements: true,
        });
        let (cypher, parameters) = renderer.render(&statement).into_parts();
        assert_eq!(cypher, "MATCH (n) WHERE n.a = $p0 RETURN n");
        assert_eq!(parameters["p0"], json!(42));
    }

    #[test]
    fn test_anonymous_name_skips_named_parameter() {
        let n = Node::any().named("n").unwrap();
        let condition = n
            .property("a")
            .unwrap()
            .is_equal_to(Cypher::anonymous_parameter(1))
            .and(n.property("b").unwrap().is_equal_to(Cypher::parameter("__p0").unwrap()));
        let statement = Cypher::match_([&n])
            .unwrap()
            .where_(condition)
            .returning([&n])
            .unwrap()
            .build();

        let rendered = render(&statement);
        assert_eq!(
            rendered.cypher(),
            "MATCH (n) WHERE (n.a = $__p1 AND n.b = $__p0) RETURN n"
        );
        let keys: Vec<&str> = rendered.parameters().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["__p1", "__p0"]);
    }

    #[test]
    fn test_render_is_repeatable() {
        let n = Node::any().named("n").unwrap();
        let statement = Cypher::match_([&n])
            .unwrap()
            .where_(n.property("a").unwrap().is_equal_to(Cypher::anonymous_parameter(1)))
            .returning([&n])
            .unwrap()
            .build();
        assert_eq!(render(&statement), render(&statement));
    }

    #[test]
    fn test_serialize_rendered_statement() {
        let n = Node::any().named("n").unwrap();
        let statement = Cypher::match_([&n])
            .unwrap()
            .where_(
                n.property("a")
                    .unwrap()
                    .is_equal_to(Cypher::parameter_with_value("a", "x").unwrap()),
            )
            .returning([&n])
            .unwrap()
            .build();
        let value = serde_json::to_value(render(&statement)).unwrap();
        assert_eq!(
            value,
            json!({
                "cypher": "MATCH (n) WHERE n.a = $a RETURN n",
                "parameters": {"a": "x"}
            })
        );
    }
}
