use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::value::Value;

/// A directive implementation. Two `Directive` handles are the same
/// directive only when they point at the same implementation object.
#[derive(Clone)]
pub struct Directive(Rc<DirectiveImpl>);

struct DirectiveImpl {
    label: String,
}

impl Directive {
    /// `label` is only used for debug output; lookups go by identity.
    pub fn new(label: impl Into<String>) -> Self {
        Directive(Rc::new(DirectiveImpl {
            label: label.into(),
        }))
    }

    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    pub fn ptr_eq(&self, other: &Directive) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Directive({}@{:#x})", self.0.label, self.id())
    }
}

pub type DirectiveRegistry = IndexMap<String, Directive>;

/// App-wide state shared by every component instance.
#[derive(Debug, Default)]
pub struct AppContext {
    directives: DirectiveRegistry,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directive(mut self, name: impl Into<String>, directive: Directive) -> Self {
        self.directives.insert(name.into(), directive);
        self
    }

    pub fn directives(&self) -> &DirectiveRegistry {
        &self.directives
    }
}

/// The component instance whose render produced a node.
#[derive(Debug)]
pub struct ComponentInstance {
    directives: DirectiveRegistry,
    app: Rc<AppContext>,
}

impl ComponentInstance {
    pub fn new(app: Rc<AppContext>) -> Self {
        Self {
            directives: DirectiveRegistry::new(),
            app,
        }
    }

    /// Register a directive locally on this instance.
    pub fn directive(mut self, name: impl Into<String>, directive: Directive) -> Self {
        self.directives.insert(name.into(), directive);
        self
    }

    pub fn directives(&self) -> &DirectiveRegistry {
        &self.directives
    }

    pub fn app(&self) -> &AppContext {
        &self.app
    }
}

/// Built-in two-way-binding directive flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Text,
    Checkbox,
    Radio,
    Select,
    Dynamic,
}

impl ModelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Text => "text",
            ModelKind::Checkbox => "checkbox",
            ModelKind::Radio => "radio",
            ModelKind::Select => "select",
            ModelKind::Dynamic => "dynamic",
        }
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ModelKind::Text),
            "checkbox" => Ok(ModelKind::Checkbox),
            "radio" => Ok(ModelKind::Radio),
            "select" => Ok(ModelKind::Select),
            "dynamic" => Ok(ModelKind::Dynamic),
            other => Err(format!("unknown model kind `{other}`")),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DirectiveKind {
    Model(ModelKind),
    Custom(Directive),
}

/// One directive attached to a node.
#[derive(Debug, Clone)]
pub struct DirectiveBinding {
    pub kind: DirectiveKind,
    pub arg: Option<String>,
    /// Modifier flags in the order they were written.
    pub modifiers: IndexMap<String, bool>,
    pub value: Value,
    /// Instance used to look up the directive's registered name.
    pub instance: Option<Rc<ComponentInstance>>,
}

impl DirectiveBinding {
    pub fn model(kind: ModelKind, value: impl Into<Value>) -> Self {
        Self {
            kind: DirectiveKind::Model(kind),
            arg: None,
            modifiers: IndexMap::new(),
            value: value.into(),
            instance: None,
        }
    }

    pub fn custom(
        directive: Directive,
        instance: Rc<ComponentInstance>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            kind: DirectiveKind::Custom(directive),
            arg: None,
            modifiers: IndexMap::new(),
            value: value.into(),
            instance: Some(instance),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    pub fn modifier(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.modifiers.insert(name.into(), enabled);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_identity_ignores_label() {
        let a = Directive::new("focus");
        let b = Directive::new("focus");
        assert!(a.ptr_eq(&a.clone()));
        assert!(!a.ptr_eq(&b));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn model_kind_round_trips_names() {
        for kind in [
            ModelKind::Text,
            ModelKind::Checkbox,
            ModelKind::Radio,
            ModelKind::Select,
            ModelKind::Dynamic,
        ] {
            assert_eq!(kind.as_str().parse::<ModelKind>(), Ok(kind));
        }
        assert!("range".parse::<ModelKind>().is_err());
    }

    #[test]
    fn binding_builder_keeps_modifier_order() {
        let b = DirectiveBinding::model(ModelKind::Text, "x")
            .modifier("trim", true)
            .modifier("lazy", false)
            .arg("title");
        assert_eq!(b.arg.as_deref(), Some("title"));
        assert_eq!(b.modifiers.keys().collect::<Vec<_>>(), vec!["trim", "lazy"]);
        assert!(matches!(b.kind, DirectiveKind::Model(ModelKind::Text)));
    }
}
