use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use retemplate_dom::{
    ComponentInstance, Directive, DirectiveBinding, DirectiveKind, NodeData, Value,
};

use crate::attrs::{AttributeLine, Encoder};
use crate::listener::assignment_target;
use crate::serialize::strip_scope;

/// Reverse lookup from a directive implementation to the name it was
/// registered under. Local registrations shadow app-wide ones.
#[derive(Debug, Default)]
pub struct DirectiveIndex {
    names: HashMap<usize, String>,
}

impl DirectiveIndex {
    pub fn build(instance: &ComponentInstance) -> Self {
        let mut names = HashMap::new();
        for registry in [instance.directives(), instance.app().directives()] {
            for (name, directive) in registry {
                names.entry(directive.id()).or_insert_with(|| name.clone());
            }
        }
        Self { names }
    }

    pub fn name_of(&self, directive: &Directive) -> Option<&str> {
        self.names.get(&directive.id()).map(String::as_str)
    }
}

/// Directive indexes for one render pass, one per component instance.
#[derive(Default)]
pub struct DirectiveNames {
    by_instance: RefCell<HashMap<usize, Rc<DirectiveIndex>>>,
}

impl DirectiveNames {
    pub fn lookup(&self, binding: &DirectiveBinding, directive: &Directive) -> Option<String> {
        let instance = binding.instance.as_ref()?;
        let key = Rc::as_ptr(instance) as usize;
        let index = self
            .by_instance
            .borrow_mut()
            .entry(key)
            .or_insert_with(|| Rc::new(DirectiveIndex::build(instance)))
            .clone();
        index.name_of(directive).map(str::to_string)
    }
}

/// Attributes recovered from a node's directives, plus the props they
/// consumed and which must not be printed again.
#[derive(Debug, Default)]
pub struct DirectiveAttrs {
    pub attrs: Vec<AttributeLine>,
    pub consumed: Vec<String>,
}

pub fn reconstruct(data: &NodeData, encoder: &Encoder<'_>, names: &DirectiveNames) -> DirectiveAttrs {
    let mut out = DirectiveAttrs::default();
    for binding in &data.directives {
        match &binding.kind {
            DirectiveKind::Model(kind) => {
                let target = binding
                    .arg
                    .as_deref()
                    .filter(|a| !a.is_empty())
                    .unwrap_or("modelValue");
                let listener_key = format!("onUpdate:{target}");
                let mut value_code = None;
                if let Some(listener) = data.props.get(&listener_key) {
                    value_code = listener_source(listener)
                        .and_then(assignment_target)
                        .map(|t| strip_scope(t, encoder.scope_prefix))
                        .filter(|t| !t.is_empty());
                    if value_code.is_none() {
                        log::debug!(
                            "v-model ({}) listener `{listener_key}` has an unrecognized shape, using bound value",
                            kind.as_str()
                        );
                    }
                    out.consumed.push(listener_key);
                }
                out.attrs.push(directive_line("model", binding, value_code, encoder));
            }
            DirectiveKind::Custom(directive) => match names.lookup(binding, directive) {
                Some(name) => out.attrs.push(directive_line(&name, binding, None, encoder)),
                None => log::debug!("dropping unregistered directive {directive:?}"),
            },
        }
    }
    out
}

fn listener_source(listener: &Value) -> Option<&str> {
    match listener {
        Value::Function { source, .. } | Value::Expression(source) => Some(source),
        _ => None,
    }
}

/// `v-<name>[.modifier]*[:arg]="<value>"`, with the recovered expression
/// when there is one and the serialized bound value otherwise.
fn directive_line(
    name: &str,
    binding: &DirectiveBinding,
    value_code: Option<String>,
    encoder: &Encoder<'_>,
) -> AttributeLine {
    let mut head = format!("v-{name}");
    for (modifier, enabled) in &binding.modifiers {
        if *enabled {
            head.push('.');
            head.push_str(modifier);
        }
    }
    if let Some(arg) = binding.arg.as_deref().filter(|a| !a.is_empty()) {
        head.push(':');
        head.push_str(arg);
    }
    let value_lines = match value_code {
        Some(code) => vec![code],
        None => encoder.expression_lines(&binding.value),
    };
    AttributeLine::quoted(&head, &value_lines)
}
