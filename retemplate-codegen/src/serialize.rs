use retemplate_dom::Value;

/// Turns a runtime value into expression source text. The output may span
/// several lines for composite literals.
pub trait ExpressionSerializer {
    fn serialize(&self, value: &Value) -> String;
}

/// Serializes values as JavaScript expressions: single-quoted strings,
/// multi-line object and array literals with trailing commas, named
/// functions by name and anonymous ones by their source.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsSerializer;

impl ExpressionSerializer for JsSerializer {
    fn serialize(&self, value: &Value) -> String {
        let mut out = String::new();
        write_value(value, 0, &mut out);
        out
    }
}

const INDENT: &str = "  ";

fn write_value(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Undefined => out.push_str("undefined"),
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&number(*n)),
        Value::String(s) => string_literal(s, out),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for item in items {
                out.push_str(&INDENT.repeat(depth + 1));
                write_value(item, depth + 1, out);
                out.push_str(",\n");
            }
            out.push_str(&INDENT.repeat(depth));
            out.push(']');
        }
        Value::Object(entries) => {
            if entries.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            for (key, item) in entries {
                out.push_str(&INDENT.repeat(depth + 1));
                if is_identifier(key) {
                    out.push_str(key);
                } else {
                    string_literal(key, out);
                }
                out.push_str(": ");
                write_value(item, depth + 1, out);
                out.push_str(",\n");
            }
            out.push_str(&INDENT.repeat(depth));
            out.push('}');
        }
        Value::Function { name, source } => match name.as_deref() {
            Some(name) if !name.is_empty() => out.push_str(name),
            _ => out.push_str(source),
        },
        Value::Expression(source) => out.push_str(source),
    }
}

fn number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

fn string_literal(s: &str, out: &mut String) {
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c == '_' || c == '$' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c == '$' || c.is_ascii_alphanumeric())
}

/// Strip the setup-scope qualifier and split serialized text into lines.
pub fn clean_lines(serialized: &str, scope_prefix: &str) -> Vec<String> {
    let cleaned = strip_scope(serialized, scope_prefix);
    cleaned
        .split('\n')
        .map(|l| l.trim_end_matches('\r').to_string())
        .collect()
}

pub fn strip_scope(text: &str, scope_prefix: &str) -> String {
    if scope_prefix.is_empty() {
        text.to_string()
    } else {
        text.replace(scope_prefix, "")
    }
}
