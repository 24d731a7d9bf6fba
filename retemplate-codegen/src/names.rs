use retemplate_dom::{Component, ComponentDef, RenderNode};

use crate::casing::pascal_case;

pub const ANONYMOUS: &str = "Anonymous";

/// Tag name to print for `node`. Async components are expected to be
/// resolved already; a pending one falls back to the placeholder.
pub fn resolve_tag_name(node: &RenderNode) -> String {
    let name = match node {
        RenderNode::Text(_) => None,
        RenderNode::Element { tag, .. } => Some(tag.clone()),
        RenderNode::Component {
            component: Component::Async(lazy),
            ..
        } => lazy.resolved().and_then(|def| definition_name(&def)),
        RenderNode::Component {
            component: Component::Definition(def),
            ..
        } => definition_name(def),
    };
    name.unwrap_or_else(|| {
        if !matches!(node, RenderNode::Text(_)) {
            log::debug!("component has no usable name, printing `{ANONYMOUS}`");
        }
        ANONYMOUS.to_string()
    })
}

/// Declared name first, then the name derived from the source file.
fn definition_name(def: &ComponentDef) -> Option<String> {
    def.name
        .as_deref()
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .or_else(|| def.file.as_deref().and_then(name_from_file))
}

/// Extension of single-file component sources.
const COMPONENT_EXT: &str = ".vue";

/// `src/components/my-button.vue` -> `MyButton`. The last path segment must
/// be a non-empty stem followed by the component file extension.
pub fn name_from_file(file: &str) -> Option<String> {
    let segment = file.rsplit(['/', '\\']).next()?;
    let stem = segment.strip_suffix(COMPONENT_EXT)?;
    let name = pascal_case(stem);
    if name.is_empty() { None } else { Some(name) }
}
