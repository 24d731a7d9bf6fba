use crate::attrs::AttributeLine;

/// Prefix every non-empty line with `indent` spaces.
pub fn indent(lines: &[String], indent: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    lines
        .iter()
        .map(|l| if l.is_empty() { String::new() } else { format!("{pad}{l}") })
        .collect()
}

/// Attributes go on their own lines when there are several of them or one
/// of them spans lines.
pub fn needs_multiline(attrs: &[AttributeLine]) -> bool {
    attrs.len() > 1 || attrs.iter().any(AttributeLine::is_multiline)
}

/// Compose a tag with its attributes and already printed children.
pub fn format_element(
    tag: &str,
    attrs: &[AttributeLine],
    children: &[String],
    indent_width: usize,
) -> Vec<String> {
    let mut open = vec![format!("<{tag}")];
    if needs_multiline(attrs) {
        for attr in attrs {
            open.extend(indent(attr.lines(), indent_width));
        }
        if !children.is_empty() {
            open.push(">".to_string());
        }
    } else {
        if let [attr] = attrs {
            for line in attr.lines() {
                open[0].push(' ');
                open[0].push_str(line);
            }
        }
        if !children.is_empty() {
            open[0].push('>');
        }
    }

    let mut lines = open;
    if !children.is_empty() {
        lines.extend(indent(children, indent_width));
        lines.push(format!("</{tag}>"));
    } else if lines.len() > 1 {
        lines.push("/>".to_string());
    } else {
        lines[0].push_str(" />");
    }
    lines
}
