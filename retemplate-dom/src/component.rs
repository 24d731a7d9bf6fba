use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// A concrete component definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentDef {
    /// Declared `name` option.
    pub name: Option<String>,
    /// Source file the component was compiled from, e.g. `src/components/MyButton.vue`.
    pub file: Option<String>,
}

impl ComponentDef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            file: None,
        }
    }

    pub fn from_file(file: impl Into<String>) -> Self {
        Self {
            name: None,
            file: Some(file.into()),
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("component `{0}` is not registered")]
    NotFound(String),
    #[error("component load failed: {0}")]
    Failed(String),
}

pub type LoadFuture<'a> = Pin<Box<dyn Future<Output = Result<ComponentDef, LoadError>> + 'a>>;

/// Loads the backing definition of an async component.
pub trait ComponentLoader {
    fn load(&self) -> LoadFuture<'_>;
}

impl<F, Fut> ComponentLoader for F
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<ComponentDef, LoadError>> + 'static,
{
    fn load(&self) -> LoadFuture<'_> {
        Box::pin(self())
    }
}

/// A lazily loaded component. Once resolved the definition is kept and
/// further `resolve` calls return it without touching the loader.
pub struct AsyncComponent {
    loader: Box<dyn ComponentLoader>,
    resolved: RefCell<Option<Rc<ComponentDef>>>,
}

impl AsyncComponent {
    pub fn new(loader: impl ComponentLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            resolved: RefCell::new(None),
        }
    }

    pub fn resolved(&self) -> Option<Rc<ComponentDef>> {
        self.resolved.borrow().clone()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.borrow().is_some()
    }

    pub async fn resolve(&self) -> Result<Rc<ComponentDef>, LoadError> {
        if let Some(def) = self.resolved() {
            return Ok(def);
        }
        let def = Rc::new(self.loader.load().await?);
        *self.resolved.borrow_mut() = Some(def.clone());
        Ok(def)
    }
}

impl fmt::Debug for AsyncComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncComponent")
            .field("resolved", &*self.resolved.borrow())
            .finish_non_exhaustive()
    }
}

/// Identity of a component node.
#[derive(Debug, Clone)]
pub enum Component {
    Definition(Rc<ComponentDef>),
    Async(Rc<AsyncComponent>),
}

impl Component {
    pub fn definition(def: ComponentDef) -> Self {
        Component::Definition(Rc::new(def))
    }

    pub fn lazy(loader: impl ComponentLoader + 'static) -> Self {
        Component::Async(Rc::new(AsyncComponent::new(loader)))
    }
}

impl From<ComponentDef> for Component {
    fn from(def: ComponentDef) -> Self {
        Component::definition(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn resolve_loads_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let comp = AsyncComponent::new(move || {
            counter.set(counter.get() + 1);
            std::future::ready(Ok::<_, LoadError>(ComponentDef::named("Lazy")))
        });
        assert!(!comp.is_resolved());

        let first = pollster::block_on(comp.resolve()).unwrap();
        let second = pollster::block_on(comp.resolve()).unwrap();
        assert_eq!(first.name.as_deref(), Some("Lazy"));
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn failed_load_stays_unresolved() {
        let comp = AsyncComponent::new(|| {
            std::future::ready(Err::<ComponentDef, _>(LoadError::Failed("offline".into())))
        });
        let err = pollster::block_on(comp.resolve()).unwrap_err();
        assert_eq!(err, LoadError::Failed("offline".into()));
        assert!(!comp.is_resolved());
    }
}
