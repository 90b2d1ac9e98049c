//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败且错误消息完全一致
pub fn assert_err_message<T: std::fmt::Debug, E: std::fmt::Display>(
    result: Result<T, E>,
    expected_msg: &str,
) {
    let err = result.expect_err("操作应该失败");
    assert_eq!(err.to_string(), expected_msg);
}

/// 断言结果失败并包含错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(
    result: Result<T, E>,
    expected_msg: &str,
) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言文本中某个片段出现的次数
pub fn assert_occurrences(text: &str, fragment: &str, expected: usize) {
    assert_eq!(
        text.matches(fragment).count(),
        expected,
        "'{}' 在 '{}' 中的出现次数不匹配",
        fragment,
        text
    );
}
