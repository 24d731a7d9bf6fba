use retemplate_dom::{Props, Value};

use crate::casing::kebab_case;
use crate::serialize::{ExpressionSerializer, clean_lines};

/// One attribute of the regenerated tag. Holds more than one line when the
/// bound expression spans lines.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeLine {
    lines: Vec<String>,
}

impl AttributeLine {
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    /// `head="<value>"`, with the quote opened on the first value line and
    /// closed on the last one.
    pub fn quoted(head: &str, value_lines: &[String]) -> Self {
        let lines = match value_lines {
            [] => vec![format!("{head}=\"\"")],
            [only] => vec![format!("{head}=\"{only}\"")],
            [first, middle @ .., last] => {
                let mut lines = Vec::with_capacity(value_lines.len());
                lines.push(format!("{head}=\"{first}"));
                lines.extend(middle.iter().cloned());
                lines.push(format!("{last}\""));
                lines
            }
        };
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_multiline(&self) -> bool {
        self.lines.len() > 1
    }
}

/// Event listener props: `on` followed by a non-lowercase character.
/// Returns the event part, e.g. `Click` for `onClick`.
pub fn event_name(prop: &str) -> Option<&str> {
    let rest = prop.strip_prefix("on")?;
    match rest.chars().next() {
        Some(c) if !c.is_ascii_lowercase() => Some(rest),
        _ => None,
    }
}

/// Keys the runtime uses for its own bookkeeping; never emitted.
pub fn is_internal_key(prop: &str) -> bool {
    prop.starts_with("__")
}

/// Serializes values and encodes props as attributes.
pub struct Encoder<'a> {
    pub serializer: &'a dyn ExpressionSerializer,
    pub scope_prefix: &'a str,
}

impl Encoder<'_> {
    pub fn expression_lines(&self, value: &Value) -> Vec<String> {
        clean_lines(&self.serializer.serialize(value), self.scope_prefix)
    }

    pub fn encode_prop(&self, name: &str, value: &Value, dynamic: bool) -> AttributeLine {
        match value {
            Value::String(s) if !dynamic => {
                AttributeLine::single(format!("{}=\"{}\"", kebab_case(name), s))
            }
            _ => {
                let head = match event_name(name) {
                    Some(event) => format!("@{}", kebab_case(event)),
                    None => format!(":{}", kebab_case(name)),
                };
                AttributeLine::quoted(&head, &self.expression_lines(value))
            }
        }
    }

    /// Encode every prop not listed in `skip`, in prop order.
    pub fn encode_props(&self, props: &Props, skip: &[String]) -> Vec<AttributeLine> {
        props
            .attrs
            .iter()
            .filter(|(name, _)| !is_internal_key(name) && !skip.iter().any(|s| s == *name))
            .map(|(name, value)| self.encode_prop(name, value, props.is_dynamic(name)))
            .collect()
    }
}
