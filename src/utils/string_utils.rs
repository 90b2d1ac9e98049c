/// Quotes a label, relationship type or other name with backticks.
///
/// Backticks inside the name are doubled, so the result is always wrapped exactly once.
pub fn escape_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len() + 2);
    escaped.push('`');
    escaped.push_str(&name.replace('`', "``"));
    escaped.push('`');
    escaped
}

/// Escapes a string for use inside a single-quoted Cypher string literal
pub fn escape_string_literal(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Quotes and escapes a string literal
pub fn quote_string_literal(s: &str) -> String {
    format!("'{}'", escape_string_literal(s))
}

/// Strips a single leading `$` from a parameter name
pub fn strip_parameter_prefix(name: &str) -> &str {
    name.strip_prefix('$').unwrap_or(name)
}
