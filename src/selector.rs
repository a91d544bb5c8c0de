// selectors are shared by cheap handle, so comparators stay cloneable
use std::fmt;
use std::sync::Arc;

use crate::datatype::SortValue;

/// A record that can be addressed by a field path.
///
/// Implementations resolve one path segment per nesting level and yield
/// [`SortValue::Null`] for anything missing or unreachable. Resolution never
/// errors; "missing" semantics are deferred to the value comparator, which
/// orders absent values first.
///
/// A ready-made implementation exists for [`serde_json::Value`]. Native
/// structs participate by matching on the path themselves:
///
/// ```
/// use sortby::datatype::SortValue;
/// use sortby::selector::Record;
///
/// struct User { name: String, age: i64 }
///
/// impl Record for User {
///     fn value_at(&self, path: &[String]) -> SortValue {
///         match path {
///             [field] => match field.as_str() {
///                 "name" => self.name.as_str().into(),
///                 "age" => self.age.into(),
///                 _ => SortValue::Null,
///             },
///             _ => SortValue::Null,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Resolve the value at the given path, one segment per nesting level.
    fn value_at(&self, path: &[String]) -> SortValue;
}

/// Objects are indexed by key, arrays by numeric segment. Any other
/// intermediate (including an explicit null) short-circuits to
/// [`SortValue::Null`] rather than failing.
impl Record for serde_json::Value {
    fn value_at(&self, path: &[String]) -> SortValue {
        let mut current = self;
        for segment in path {
            let next = match current {
                serde_json::Value::Object(map) => map.get(segment),
                serde_json::Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index)),
                _ => None,
            };
            current = match next {
                Some(value) => value,
                None => return SortValue::Null,
            };
        }
        SortValue::from(current)
    }
}

/// The function shape behind [`Selector::Key`].
pub type KeyFn<R> = Arc<dyn Fn(&R) -> SortValue + Send + Sync>;

/// A specification of how to extract a comparable value from a record.
///
/// The shape is fixed at construction: dot-path strings are split once in
/// the `From<&str>` conversion, so resolving inside a running sort never
/// parses anything.
pub enum Selector<R> {
    /// A single top-level field.
    Field(String),
    /// An ordered sequence of path segments addressing a nested field.
    Path(Vec<String>),
    /// A function mapping a record to a value.
    Key(KeyFn<R>),
}

impl<R> Selector<R> {
    pub fn field(name: impl Into<String>) -> Self {
        Selector::Field(name.into())
    }

    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selector::Path(segments.into_iter().map(Into::into).collect())
    }

    /// Wrap a key-extraction function. Anything convertible into a
    /// [`SortValue`] may be returned, `Option`s included (`None` becomes
    /// [`SortValue::Null`]).
    pub fn key<F, V>(f: F) -> Self
    where
        F: Fn(&R) -> V + Send + Sync + 'static,
        V: Into<SortValue>,
    {
        Selector::Key(Arc::new(move |record| f(record).into()))
    }
}

impl<R: Record> Selector<R> {
    /// Extract this selector's value from a record.
    pub fn resolve(&self, record: &R) -> SortValue {
        match self {
            Selector::Field(name) => record.value_at(std::slice::from_ref(name)),
            Selector::Path(segments) => record.value_at(segments),
            Selector::Key(extract) => extract(record),
        }
    }
}

impl<R> From<&str> for Selector<R> {
    fn from(spec: &str) -> Selector<R> {
        if spec.contains('.') {
            Selector::Path(spec.split('.').map(String::from).collect())
        } else {
            Selector::Field(spec.to_string())
        }
    }
}

impl<R> From<String> for Selector<R> {
    fn from(spec: String) -> Selector<R> {
        Selector::from(spec.as_str())
    }
}

impl<R> From<Vec<String>> for Selector<R> {
    fn from(segments: Vec<String>) -> Selector<R> {
        Selector::Path(segments)
    }
}

impl<R> From<Vec<&str>> for Selector<R> {
    fn from(segments: Vec<&str>) -> Selector<R> {
        Selector::path(segments)
    }
}

impl<R, const N: usize> From<[&str; N]> for Selector<R> {
    fn from(segments: [&str; N]) -> Selector<R> {
        Selector::path(segments)
    }
}

// manual impls: Key holds a function handle, so neither derive applies
impl<R> Clone for Selector<R> {
    fn clone(&self) -> Self {
        match self {
            Selector::Field(name) => Selector::Field(name.clone()),
            Selector::Path(segments) => Selector::Path(segments.clone()),
            Selector::Key(extract) => Selector::Key(Arc::clone(extract)),
        }
    }
}

impl<R> fmt::Debug for Selector<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Selector::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Selector::Path(segments) => f.debug_tuple("Path").field(segments).finish(),
            Selector::Key(_) => f.write_str("Key(<fn>)"),
        }
    }
}
