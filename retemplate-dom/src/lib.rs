use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

pub mod component;
pub mod directive;
pub mod value;

pub use component::{AsyncComponent, Component, ComponentDef, ComponentLoader, LoadError, LoadFuture};
pub use directive::{
    AppContext, ComponentInstance, Directive, DirectiveBinding, DirectiveKind, DirectiveRegistry,
    ModelKind,
};
pub use value::{Value, object};

/// A node of an evaluated render tree.
#[derive(Debug, Clone)]
pub enum RenderNode {
    Text(String),
    Element { tag: String, data: NodeData },
    Component { component: Component, data: NodeData },
}

impl RenderNode {
    pub fn data(&self) -> Option<&NodeData> {
        match self {
            RenderNode::Text(_) => None,
            RenderNode::Element { data, .. } | RenderNode::Component { data, .. } => Some(data),
        }
    }

    /// Attach a directive. Text nodes carry none, so this is a no-op for them.
    pub fn with_directive(mut self, binding: DirectiveBinding) -> Self {
        match &mut self {
            RenderNode::Text(_) => {}
            RenderNode::Element { data, .. } | RenderNode::Component { data, .. } => {
                data.directives.push(binding);
            }
        }
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct NodeData {
    pub props: Props,
    pub directives: Vec<DirectiveBinding>,
    pub children: Children,
}

/// Props in insertion order, plus the names that were bound dynamically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Props {
    pub attrs: IndexMap<String, Value>,
    dynamic: Vec<String>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, k: impl Into<String>, v: impl Into<Value>) -> Self {
        self.attrs.insert(k.into(), v.into());
        self
    }

    /// Set a prop whose source form was a binding even if the value is a plain string.
    pub fn set_dynamic(mut self, k: impl Into<String>, v: impl Into<Value>) -> Self {
        let k = k.into();
        if !self.dynamic.contains(&k) {
            self.dynamic.push(k.clone());
        }
        self.attrs.insert(k, v.into());
        self
    }

    pub fn get(&self, k: &str) -> Option<&Value> {
        self.attrs.get(k)
    }

    pub fn is_dynamic(&self, k: &str) -> bool {
        self.dynamic.iter().any(|d| d == k)
    }

}

impl From<()> for Props {
    fn from(_: ()) -> Self {
        Props::default()
    }
}
impl From<Vec<(&str, &str)>> for Props {
    fn from(v: Vec<(&str, &str)>) -> Self {
        v.into_iter().fold(Props::new(), |p, (k, v)| p.set(k, v))
    }
}

pub type SlotFn = Rc<dyn Fn() -> Vec<RenderNode>>;

/// Child content of a node.
#[derive(Clone, Default)]
pub enum Children {
    #[default]
    Empty,
    /// Raw text content, as produced by `<p>hello</p>`.
    Text(String),
    Nodes(Vec<RenderNode>),
    /// Default slot of a component; invoked with no arguments.
    Slot(SlotFn),
}

/// What a node's children expand to.
pub enum ChildContent<'a> {
    Text(&'a str),
    Nodes(Cow<'a, [RenderNode]>),
}

impl Children {
    pub fn slot(f: impl Fn() -> Vec<RenderNode> + 'static) -> Self {
        Children::Slot(Rc::new(f))
    }

    pub fn content(&self) -> ChildContent<'_> {
        match self {
            Children::Empty => ChildContent::Nodes(Cow::Borrowed(&[])),
            Children::Text(t) => ChildContent::Text(t),
            Children::Nodes(nodes) => ChildContent::Nodes(Cow::Borrowed(nodes)),
            Children::Slot(f) => ChildContent::Nodes(Cow::Owned(f())),
        }
    }
}

impl fmt::Debug for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Children::Empty => f.write_str("Empty"),
            Children::Text(t) => f.debug_tuple("Text").field(t).finish(),
            Children::Nodes(n) => f.debug_tuple("Nodes").field(n).finish(),
            Children::Slot(_) => f.write_str("Slot(..)"),
        }
    }
}

impl From<Vec<RenderNode>> for Children {
    fn from(nodes: Vec<RenderNode>) -> Self {
        if nodes.is_empty() {
            Children::Empty
        } else {
            Children::Nodes(nodes)
        }
    }
}
impl From<&str> for Children {
    fn from(t: &str) -> Self {
        Children::Text(t.to_string())
    }
}
impl From<String> for Children {
    fn from(t: String) -> Self {
        Children::Text(t)
    }
}
impl From<()> for Children {
    fn from(_: ()) -> Self {
        Children::Empty
    }
}

pub fn h(tag: impl Into<String>, props: impl Into<Props>, children: impl Into<Children>) -> RenderNode {
    RenderNode::Element {
        tag: tag.into(),
        data: NodeData {
            props: props.into(),
            directives: Vec::new(),
            children: children.into(),
        },
    }
}

pub fn component(
    component: impl Into<Component>,
    props: impl Into<Props>,
    children: impl Into<Children>,
) -> RenderNode {
    RenderNode::Component {
        component: component.into(),
        data: NodeData {
            props: props.into(),
            directives: Vec::new(),
            children: children.into(),
        },
    }
}

pub fn text(t: impl Into<String>) -> RenderNode {
    RenderNode::Text(t.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_tree() {
        let node = h(
            "div",
            vec![("class", "app")],
            vec![text("hello"), h("span", (), vec![text("world")])],
        );
        if let RenderNode::Element { tag, data } = node {
            assert_eq!(tag, "div");
            assert_eq!(data.props.get("class"), Some(&Value::from("app")));
            let ChildContent::Nodes(children) = data.children.content() else {
                panic!("expected nodes");
            };
            assert_eq!(children.len(), 2);
        } else {
            panic!("expected element");
        }
    }

    #[test]
    fn dynamic_keys_are_props() {
        let props = Props::new().set("a", "1").set_dynamic("b", "2").set_dynamic("b", "3");
        assert!(props.is_dynamic("b"));
        assert!(!props.is_dynamic("a"));
        assert_eq!(props, Props::new().set("a", "1").set_dynamic("b", "3"));
        assert_eq!(props.get("b"), Some(&Value::from("3")));
    }

    #[test]
    fn text_nodes_ignore_directives() {
        let node = text("x").with_directive(DirectiveBinding::model(ModelKind::Text, "v"));
        assert!(node.data().is_none());
    }
}
