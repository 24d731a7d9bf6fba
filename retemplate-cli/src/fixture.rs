//! JSON description of a render tree, for driving the generator from files.

use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{Result, bail};
use retemplate_dom::{
    AppContext, Children, Component, ComponentDef, ComponentInstance, Directive,
    DirectiveBinding, LoadError, ModelKind, NodeData, Props, RenderNode, Value,
};
use serde::Deserialize;
use serde_json::{Map, Value as Json};

#[derive(Debug, Deserialize)]
pub struct Fixture {
    /// App-wide custom directive names.
    #[serde(default)]
    pub directives: Vec<String>,
    #[serde(default)]
    pub components: HashMap<String, ComponentDesc>,
    pub tree: OneOrMany,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentDesc {
    pub name: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(NodeDesc),
    Many(Vec<NodeDesc>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NodeDesc {
    Text {
        text: String,
    },
    Element {
        tag: String,
        #[serde(flatten)]
        data: DataDesc,
    },
    Component {
        component: String,
        #[serde(default, rename = "async")]
        is_async: bool,
        #[serde(flatten)]
        data: DataDesc,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDesc {
    #[serde(default)]
    pub props: Map<String, Json>,
    #[serde(default)]
    pub dynamic_props: Vec<String>,
    #[serde(default)]
    pub directives: Vec<DirectiveDesc>,
    #[serde(default)]
    pub children: Option<ChildrenDesc>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ChildrenDesc {
    Text(String),
    Nodes(Vec<NodeDesc>),
    Slots { default: Vec<NodeDesc> },
}

#[derive(Debug, Deserialize)]
pub struct DirectiveDesc {
    pub model: Option<String>,
    pub name: Option<String>,
    pub arg: Option<String>,
    #[serde(default)]
    pub modifiers: Map<String, Json>,
    /// Absent or `null` means the directive has no value.
    #[serde(default)]
    pub value: Option<Json>,
}

impl Fixture {
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    /// Build the render tree roots described by this fixture.
    pub fn build(&self) -> Result<Vec<RenderNode>> {
        let app = self
            .directives
            .iter()
            .fold(AppContext::new(), |app, name| {
                app.directive(name.as_str(), Directive::new(name.as_str()))
            });
        let builder = TreeBuilder {
            components: &self.components,
            instance: Rc::new(ComponentInstance::new(Rc::new(app))),
        };
        match &self.tree {
            OneOrMany::One(node) => Ok(vec![builder.node(node)?]),
            OneOrMany::Many(nodes) => nodes.iter().map(|n| builder.node(n)).collect(),
        }
    }
}

struct TreeBuilder<'a> {
    components: &'a HashMap<String, ComponentDesc>,
    instance: Rc<ComponentInstance>,
}

impl TreeBuilder<'_> {
    fn node(&self, desc: &NodeDesc) -> Result<RenderNode> {
        Ok(match desc {
            NodeDesc::Text { text } => RenderNode::Text(text.clone()),
            NodeDesc::Element { tag, data } => RenderNode::Element {
                tag: tag.clone(),
                data: self.data(data)?,
            },
            NodeDesc::Component {
                component,
                is_async,
                data,
            } => RenderNode::Component {
                component: self.component(component, *is_async)?,
                data: self.data(data)?,
            },
        })
    }

    fn component(&self, key: &str, is_async: bool) -> Result<Component> {
        let def = self.components.get(key).map(|desc| ComponentDef {
            name: desc.name.clone(),
            file: desc.file.clone(),
        });
        if is_async {
            let key = key.to_string();
            return Ok(Component::lazy(move || {
                std::future::ready(def.clone().ok_or_else(|| LoadError::NotFound(key.clone())))
            }));
        }
        match def {
            Some(def) => Ok(Component::definition(def)),
            None => bail!("component `{key}` is not declared in `components`"),
        }
    }

    fn data(&self, desc: &DataDesc) -> Result<NodeData> {
        let mut props = Props::new();
        for (name, value) in &desc.props {
            let value = to_value(value);
            props = if desc.dynamic_props.contains(name) {
                props.set_dynamic(name.as_str(), value)
            } else {
                props.set(name.as_str(), value)
            };
        }
        for name in &desc.dynamic_props {
            if props.get(name).is_none() {
                bail!("dynamic prop `{name}` has no value in `props`");
            }
        }

        let directives = desc
            .directives
            .iter()
            .map(|d| self.directive(d))
            .collect::<Result<Vec<_>>>()?;

        let children = match &desc.children {
            None => Children::Empty,
            Some(ChildrenDesc::Text(t)) => Children::Text(t.clone()),
            Some(ChildrenDesc::Nodes(nodes)) => nodes
                .iter()
                .map(|n| self.node(n))
                .collect::<Result<Vec<_>>>()?
                .into(),
            Some(ChildrenDesc::Slots { default }) => {
                let nodes = default
                    .iter()
                    .map(|n| self.node(n))
                    .collect::<Result<Vec<_>>>()?;
                Children::slot(move || nodes.clone())
            }
        };

        Ok(NodeData {
            props,
            directives,
            children,
        })
    }

    fn directive(&self, desc: &DirectiveDesc) -> Result<DirectiveBinding> {
        let value = desc.value.as_ref().map(to_value).unwrap_or(Value::Undefined);
        let mut binding = match (&desc.model, &desc.name) {
            (Some(kind), None) => {
                let kind: ModelKind = kind.parse().map_err(anyhow::Error::msg)?;
                DirectiveBinding::model(kind, value)
            }
            (None, Some(name)) => {
                // Names missing from the app registry get a fresh, unregistered implementation.
                let directive = self
                    .instance
                    .app()
                    .directives()
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| Directive::new(name.as_str()));
                DirectiveBinding::custom(directive, self.instance.clone(), value)
            }
            _ => bail!("a directive needs exactly one of `model` or `name`"),
        };
        if let Some(arg) = &desc.arg {
            binding = binding.arg(arg.as_str());
        }
        for (modifier, enabled) in &desc.modifiers {
            binding = binding.modifier(modifier.as_str(), enabled.as_bool().unwrap_or(false));
        }
        Ok(binding)
    }
}

/// `{"$fn": src, "name"?: n}` is a closure and `{"$expr": src}` raw
/// expression text; everything else maps onto plain values.
pub fn to_value(json: &Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => Value::Array(items.iter().map(to_value).collect()),
        Json::Object(map) => {
            if let Some(Json::String(source)) = map.get("$fn") {
                return Value::Function {
                    name: map.get("name").and_then(Json::as_str).map(str::to_string),
                    source: source.clone(),
                };
            }
            if let Some(Json::String(source)) = map.get("$expr") {
                return Value::Expression(source.clone());
            }
            Value::Object(map.iter().map(|(k, v)| (k.clone(), to_value(v))).collect())
        }
    }
}
