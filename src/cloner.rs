// Pattern 10: Prototype - shallow and deep copies of a value graph

use crate::config::{ClonerConfig, CyclePolicy, OpaquePolicy, MAX_DEPTH_LIMIT};
use crate::error::CloneError;
use crate::value::Value;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Produces shallow and deep copies of structured [`Value`]s.
#[derive(Debug, Clone, Default)]
pub struct Cloner {
    config: ClonerConfig,
}

impl Cloner {
    /// `max_depth` is clamped to `1..=MAX_DEPTH_LIMIT`.
    pub fn new(config: ClonerConfig) -> Self {
        let max_depth = config.max_depth.clamp(1, MAX_DEPTH_LIMIT);
        Self {
            config: config.max_depth(max_depth),
        }
    }

    pub fn config(&self) -> &ClonerConfig {
        &self.config
    }

    /// New top-level node whose entries are the source's entries.
    ///
    /// Scalars are copied; every nested list, object, function or handle
    /// is the same allocation as in `source`.
    pub fn clone_shallow(&self, source: &Value) -> Result<Value, CloneError> {
        let busy = || CloneError::Busy {
            path: "$".to_string(),
        };
        match source {
            Value::Object(obj) => {
                let fields = obj.try_borrow().map_err(|_| busy())?;
                debug!("shallow copy: object with {} fields", fields.len());
                Ok(Value::Object(Rc::new(RefCell::new(fields.clone()))))
            }
            Value::List(list) => {
                let items = list.try_borrow().map_err(|_| busy())?;
                debug!("shallow copy: list with {} items", items.len());
                Ok(Value::List(Rc::new(RefCell::new(items.clone()))))
            }
            other => Err(CloneError::InvalidInput {
                found: other.kind(),
            }),
        }
    }

    /// Copies every reachable list and object into new storage.
    ///
    /// Nodes reached twice are copied once, so aliasing inside the source is
    /// kept in the result. Cycles and opaque values follow the configured
    /// policies.
    pub fn clone_deep(&self, source: &Value) -> Result<Value, CloneError> {
        if !source.is_structured() {
            return Err(CloneError::InvalidInput {
                found: source.kind(),
            });
        }
        let mut pass = DeepCopy {
            config: &self.config,
            copies: FxHashMap::default(),
            in_progress: FxHashSet::default(),
            path: Vec::new(),
        };
        let copy = pass.copy(source, 0)?;
        debug!("deep copy: {} nodes allocated", pass.copies.len());
        // The root is structured, so it is never skipped.
        Ok(copy.unwrap_or(Value::Null))
    }
}

/// State of one `clone_deep` call.
struct DeepCopy<'a> {
    config: &'a ClonerConfig,
    /// Source node identity -> its copy.
    copies: FxHashMap<usize, Value>,
    /// Nodes on the current traversal path; meeting one again is a cycle.
    in_progress: FxHashSet<usize>,
    path: Vec<String>,
}

impl DeepCopy<'_> {
    fn path_string(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.path {
            out.push_str(segment);
        }
        out
    }

    /// `None` means the value is dropped under `OpaquePolicy::Skip`.
    fn copy(&mut self, value: &Value, depth: usize) -> Result<Option<Value>, CloneError> {
        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Text(_) => {
                Ok(Some(value.clone()))
            }
            Value::Function(_) | Value::Handle(_) => self.copy_opaque(value),
            Value::List(_) | Value::Object(_) => self.copy_node(value, depth),
        }
    }

    fn copy_opaque(&self, value: &Value) -> Result<Option<Value>, CloneError> {
        match self.config.opaque {
            OpaquePolicy::Reject => Err(CloneError::unsupported(value.kind(), self.path_string())),
            OpaquePolicy::Skip => {
                debug!("deep copy: skipping {} at {}", value.kind(), self.path_string());
                Ok(None)
            }
            OpaquePolicy::Share => {
                debug!("deep copy: sharing {} at {}", value.kind(), self.path_string());
                Ok(Some(value.clone()))
            }
        }
    }

    fn copy_node(&mut self, value: &Value, depth: usize) -> Result<Option<Value>, CloneError> {
        let id = value.node_id().unwrap_or_default();

        if self.in_progress.contains(&id) {
            return match self.config.cycles {
                CyclePolicy::Reject => Err(CloneError::unsupported("cycle", self.path_string())),
                CyclePolicy::Preserve => {
                    debug!("deep copy: back-edge at {}", self.path_string());
                    Ok(self.copies.get(&id).cloned())
                }
            };
        }
        if let Some(existing) = self.copies.get(&id) {
            debug!("deep copy: reusing copy of shared node at {}", self.path_string());
            return Ok(Some(existing.clone()));
        }
        if depth >= self.config.max_depth {
            return Err(CloneError::DepthExceeded {
                limit: self.config.max_depth,
                path: self.path_string(),
            });
        }

        // Register the (still empty) copy first so back-edges can point at it.
        let copy = match value {
            Value::List(_) => Value::list(Vec::<Value>::new()),
            _ => Value::object(),
        };
        self.copies.insert(id, copy.clone());
        self.in_progress.insert(id);

        match (value, &copy) {
            (Value::List(src), Value::List(dst)) => {
                let items = self.copy_items(src, depth)?;
                *dst.borrow_mut() = items;
            }
            (Value::Object(src), Value::Object(dst)) => {
                let fields = self.copy_fields(src, depth)?;
                *dst.borrow_mut() = fields;
            }
            _ => unreachable!("copy allocated with the source's kind"),
        }

        self.in_progress.remove(&id);
        Ok(Some(copy))
    }

    fn copy_items(
        &mut self,
        src: &RefCell<Vec<Value>>,
        depth: usize,
    ) -> Result<Vec<Value>, CloneError> {
        let items = src.try_borrow().map_err(|_| CloneError::Busy {
            path: self.path_string(),
        })?;
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            self.path.push(format!("[{index}]"));
            let copied = self.copy(item, depth + 1)?;
            self.path.pop();
            out.push(copied.unwrap_or(Value::Null));
        }
        Ok(out)
    }

    fn copy_fields(
        &mut self,
        src: &RefCell<BTreeMap<String, Value>>,
        depth: usize,
    ) -> Result<BTreeMap<String, Value>, CloneError> {
        let fields = src.try_borrow().map_err(|_| CloneError::Busy {
            path: self.path_string(),
        })?;
        let mut out = BTreeMap::new();
        for (key, field) in fields.iter() {
            self.path.push(format!(".{key}"));
            let copied = self.copy(field, depth + 1)?;
            self.path.pop();
            if let Some(copied) = copied {
                out.insert(key.clone(), copied);
            }
        }
        Ok(out)
    }
}
