use indexmap::IndexMap;

/// A runtime prop or directive value as the templating engine left it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
    /// A closure. `source` is what the runtime prints for it, e.g.
    /// `($event) => $setup.count = $event`.
    Function {
        name: Option<String>,
        source: String,
    },
    /// Expression text that is passed through verbatim.
    Expression(String),
}

impl Value {
    pub fn function(source: impl Into<String>) -> Self {
        Value::Function {
            name: None,
            source: source.into(),
        }
    }

    pub fn named_function(name: impl Into<String>, source: impl Into<String>) -> Self {
        Value::Function {
            name: Some(name.into()),
            source: source.into(),
        }
    }

    pub fn expr(source: impl Into<String>) -> Self {
        Value::Expression(source.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}
impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Build an object value keeping insertion order.
pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Value
where
    K: Into<String>,
    V: Into<Value>,
{
    Value::Object(
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}
