//! 匿名参数名生成器
//!
//! 为没有名字的参数生成 `<前缀><序号>` 形式的名字，跳过已被占用的名字。

use std::collections::HashSet;

/// 匿名参数名生成器，每次渲染使用一个新实例
#[derive(Debug, Clone)]
pub struct AnonParamGenerator {
    prefix: String,
    counter: u64,
    reserved: HashSet<String>,
}

impl AnonParamGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
            reserved: HashSet::new(),
        }
    }

    /// 标记一个已被命名参数占用的名字
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.reserved.insert(name.into());
    }

    /// 生成下一个未被占用的名字
    pub fn next_name(&mut self) -> String {
        loop {
            let name = format!("{}{}", self.prefix, self.counter);
            self.counter += 1;
            if self.reserved.insert(name.clone()) {
                log::trace!("Build anon parameter: {}", name);
                return name;
            }
        }
    }
}

impl Default for AnonParamGenerator {
    fn default() -> Self {
        Self::new("__p")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_sequential() {
        let mut generator = AnonParamGenerator::default();
        assert_eq!(generator.next_name(), "__p0");
        assert_eq!(generator.next_name(), "__p1");
    }

    #[test]
    fn test_reserved_names_are_skipped() {
        let mut generator = AnonParamGenerator::new("p");
        generator.reserve("p0");
        generator.reserve("p2");
        assert_eq!(generator.next_name(), "p1");
        assert_eq!(generator.next_name(), "p3");
    }
}
