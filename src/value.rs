// Pattern 10: Prototype - a dynamically shaped object graph
//
// Lists and objects are reference-counted cells, so a `Value` can alias,
// nest to any depth and even point back at itself. `Value::clone` (the
// `Clone` trait) only copies the reference; use `Cloner` for real copies.
// A graph that points back at itself is an `Rc` cycle and leaks unless one of
// its nodes is emptied with `Value::clear` before the last handle is dropped.

use crate::shape::Shape;
use rustc_hash::FxHashSet;
use serde_json::json;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

pub type ListRef = Rc<RefCell<Vec<Value>>>;
pub type ObjectRef = Rc<RefCell<BTreeMap<String, Value>>>;

#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(ListRef),
    Object(ObjectRef),
    Function(NativeFn),
    Handle(Rc<ResourceHandle>),
}

/// A callable stored inside a value graph.
#[derive(Clone)]
pub struct NativeFn {
    name: String,
    func: Rc<dyn Fn(&[Value]) -> Value>,
}

impl NativeFn {
    pub fn new(name: impl Into<String>, func: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    pub fn ptr_eq(&self, other: &NativeFn) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NativeFn({})", self.name)
    }
}

/// Stand-in for a live resource (socket, file descriptor, connection).
/// It has identity but no meaningful copy.
#[derive(Debug, PartialEq, Eq)]
pub struct ResourceHandle {
    pub label: String,
    pub id: u64,
}

impl Value {
    pub fn object() -> Self {
        Value::Object(Rc::new(RefCell::new(BTreeMap::new())))
    }

    pub fn object_from<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Value::Object(Rc::new(RefCell::new(map)))
    }

    pub fn list<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        let items = items.into_iter().map(Into::into).collect();
        Value::List(Rc::new(RefCell::new(items)))
    }

    pub fn function(name: impl Into<String>, func: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Value::Function(NativeFn::new(name, func))
    }

    pub fn handle(label: impl Into<String>, id: u64) -> Self {
        Value::Handle(Rc::new(ResourceHandle {
            label: label.into(),
            id,
        }))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::Handle(_) => "handle",
        }
    }

    /// Objects and lists; everything a cloner accepts as a source.
    pub fn is_structured(&self) -> bool {
        matches!(self, Value::List(_) | Value::Object(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Reference to the field `key` of an object. Shares storage with `self`.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(obj) => obj.borrow().get(key).cloned(),
            _ => None,
        }
    }

    pub fn at(&self, index: usize) -> Option<Value> {
        match self {
            Value::List(list) => list.borrow().get(index).cloned(),
            _ => None,
        }
    }

    /// Follows a dotted path such as `dimensions.width`.
    pub fn lookup(&self, path: &str) -> Option<Value> {
        path.split('.')
            .try_fold(self.clone(), |current, key| current.get(key))
    }

    /// Writes `key` on an object. Returns `false` when `self` is not an object.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        match self {
            Value::Object(obj) => {
                obj.borrow_mut().insert(key.into(), value.into());
                true
            }
            _ => false,
        }
    }

    /// Appends to a list. Returns `false` when `self` is not a list.
    pub fn push(&self, value: impl Into<Value>) -> bool {
        match self {
            Value::List(list) => {
                list.borrow_mut().push(value.into());
                true
            }
            _ => false,
        }
    }

    /// Empties a list or object, releasing every reference it held.
    /// This is how a cyclic graph is torn down.
    pub fn clear(&self) {
        match self {
            Value::List(list) => {
                let released = std::mem::take(&mut *list.borrow_mut());
                drop(released);
            }
            Value::Object(obj) => {
                let released = std::mem::take(&mut *obj.borrow_mut());
                drop(released);
            }
            _ => {}
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Value::List(list) => list.borrow().len(),
            Value::Object(obj) => obj.borrow().len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identity of a shared node, used to key visited sets.
    pub fn node_id(&self) -> Option<usize> {
        match self {
            Value::List(list) => Some(Rc::as_ptr(list) as *const () as usize),
            Value::Object(obj) => Some(Rc::as_ptr(obj) as *const () as usize),
            _ => None,
        }
    }

    /// True when both values point at the same allocation.
    pub fn same_node(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Handle(a), Value::Handle(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Structural equality that terminates on cyclic graphs.
    ///
    /// Functions and handles compare by identity. A pair of nodes already
    /// under comparison is assumed equal, which makes two cycles of the same
    /// shape compare equal.
    pub fn deep_eq(&self, other: &Value) -> bool {
        let mut assumed = FxHashSet::default();
        deep_eq_inner(self, other, &mut assumed)
    }

    /// Renders the graph as JSON. Back-edges become `"[Circular]"`.
    pub fn to_json(&self) -> serde_json::Value {
        let mut path = FxHashSet::default();
        to_json_inner(self, &mut path)
    }
}

fn deep_eq_inner(a: &Value, b: &Value, assumed: &mut FxHashSet<(usize, usize)>) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::Text(x), Value::Text(y)) => x == y,
        (Value::Function(x), Value::Function(y)) => x.ptr_eq(y),
        (Value::Handle(x), Value::Handle(y)) => Rc::ptr_eq(x, y),
        (Value::List(x), Value::List(y)) => {
            let key = (Rc::as_ptr(x) as usize, Rc::as_ptr(y) as usize);
            if !assumed.insert(key) {
                return true;
            }
            let (Ok(xs), Ok(ys)) = (x.try_borrow(), y.try_borrow()) else {
                return false;
            };
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|(l, r)| deep_eq_inner(l, r, assumed))
        }
        (Value::Object(x), Value::Object(y)) => {
            let key = (Rc::as_ptr(x) as usize, Rc::as_ptr(y) as usize);
            if !assumed.insert(key) {
                return true;
            }
            let (Ok(xs), Ok(ys)) = (x.try_borrow(), y.try_borrow()) else {
                return false;
            };
            xs.len() == ys.len()
                && xs.iter().zip(ys.iter()).all(|((lk, lv), (rk, rv))| {
                    lk == rk && deep_eq_inner(lv, rv, assumed)
                })
        }
        _ => false,
    }
}

fn to_json_inner(value: &Value, path: &mut FxHashSet<usize>) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => json!(b),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Text(s) => json!(s),
        Value::Function(f) => json!(format!("[Function {}]", f.name())),
        Value::Handle(h) => json!(format!("[Handle {}#{}]", h.label, h.id)),
        Value::List(_) | Value::Object(_) => {
            let id = value.node_id().unwrap_or_default();
            if !path.insert(id) {
                return json!("[Circular]");
            }
            let rendered = match value {
                Value::List(list) => match list.try_borrow() {
                    Ok(items) => serde_json::Value::Array(
                        items.iter().map(|item| to_json_inner(item, path)).collect(),
                    ),
                    Err(_) => json!("[Busy]"),
                },
                Value::Object(obj) => match obj.try_borrow() {
                    Ok(fields) => serde_json::Value::Object(
                        fields
                            .iter()
                            .map(|(k, v)| (k.clone(), to_json_inner(v, path)))
                            .collect(),
                    ),
                    Err(_) => json!("[Busy]"),
                },
                _ => unreachable!(),
            };
            path.remove(&id);
            rendered
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Copies a [`Shape`] into a fresh object graph:
/// `{ type: <kind>, dimensions: { <name>: <number>, .. } }`.
impl From<&Shape> for Value {
    fn from(shape: &Shape) -> Self {
        let dimensions = Value::object_from(
            shape
                .dimensions
                .borrow()
                .iter()
                .map(|(k, v)| (k.to_string(), v)),
        );
        Value::object_from([
            ("type", Value::from(shape.kind.as_str())),
            ("dimensions", dimensions),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangle() -> Value {
        Value::from(&Shape::rectangle(10.0, 20.0))
    }

    #[test]
    fn test_clone_trait_copies_reference_only() {
        let original = rectangle();
        let alias = original.clone();

        assert!(alias.same_node(&original));
        alias.set("type", "Square");
        assert_eq!(original.get("type").unwrap().as_text(), Some("Square"));
    }

    #[test]
    fn test_lookup_dotted_path() {
        let shape = rectangle();
        assert_eq!(shape.lookup("dimensions.width").unwrap().as_number(), Some(10.0));
        assert!(shape.lookup("dimensions.depth").is_none());
        assert!(shape.lookup("type.width").is_none());
    }

    #[test]
    fn test_set_and_push_reject_wrong_kind() {
        let list = Value::list([1.0, 2.0]);
        assert!(!list.set("x", 1.0));
        assert!(list.push(3.0));
        assert_eq!(list.len(), 3);
        assert_eq!(list.at(2).unwrap().as_number(), Some(3.0));

        let obj = Value::object();
        assert!(!obj.push(1.0));
        assert!(obj.is_empty());
    }

    #[test]
    fn test_to_json_marks_cycles() {
        let node = Value::object_from([("name", "loop")]);
        node.set("me", node.clone());

        assert_eq!(node.to_json(), json!({"me": "[Circular]", "name": "loop"}));
    }

    #[test]
    fn test_to_json_shared_but_acyclic_is_rendered_twice() {
        let shared = Value::list([1.0]);
        let root = Value::object_from([("a", shared.clone()), ("b", shared)]);

        assert_eq!(root.to_json(), json!({"a": [1.0], "b": [1.0]}));
    }

    #[test]
    fn test_to_json_opaque_values() {
        let obj = Value::object_from([
            ("area", Value::function("area", |_| Value::Number(0.0))),
            ("conn", Value::handle("db", 7)),
        ]);
        assert_eq!(
            obj.to_json(),
            json!({"area": "[Function area]", "conn": "[Handle db#7]"})
        );
    }

    #[test]
    fn test_deep_eq_on_equal_cycles() {
        let a = Value::object_from([("n", 1.0)]);
        a.set("self", a.clone());
        let b = Value::object_from([("n", 1.0)]);
        b.set("self", b.clone());

        assert!(a.deep_eq(&b));
        b.set("n", 2.0);
        assert!(!a.deep_eq(&b));
    }

    #[test]
    fn test_clear_breaks_cycle() {
        let node = Value::object_from([("n", 1.0)]);
        node.set("me", node.clone());
        let Value::Object(cell) = &node else {
            panic!("node is an object");
        };
        let weak = Rc::downgrade(cell);

        node.clear();
        assert!(node.is_empty());
        drop(node);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_deep_eq_functions_by_identity() {
        let f = Value::function("f", |_| Value::Null);
        let g = Value::function("f", |_| Value::Null);
        assert!(f.deep_eq(&f.clone()));
        assert!(!f.deep_eq(&g));
    }

    #[test]
    fn test_native_fn_call() {
        let double = NativeFn::new("double", |args| match args.first() {
            Some(Value::Number(n)) => Value::Number(n * 2.0),
            _ => Value::Null,
        });
        assert_eq!(double.call(&[Value::Number(4.0)]).as_number(), Some(8.0));
        assert_eq!(double.name(), "double");
    }

    #[test]
    fn test_from_shape_is_a_copy() {
        let shape = Shape::rectangle(10.0, 20.0);
        let value = Value::from(&shape);

        shape.set_dimension("width", 99.0);
        assert_eq!(value.lookup("dimensions.width").unwrap().as_number(), Some(10.0));
        assert_eq!(value.get("type").unwrap().kind(), "text");
    }
}
