//! Lexically-scoped environments: a name-to-object mapping chained to an
//! optional outer frame. Shared via `Rc` so a closure's captured frame can
//! outlive its textual scope.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::object::Obj;

struct EnvironmentData {
    store: HashMap<String, Obj>,
    outer: Option<Environment>,
}

/// A single scope frame, or a chain of them via `outer`. Cloning an
/// `Environment` clones the handle, not the frame: both handles see the
/// same bindings.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<EnvironmentData>>);

impl Environment {
    /// A fresh, outer-less environment (the global scope).
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(EnvironmentData {
            store: HashMap::new(),
            outer: None,
        })))
    }

    /// A new frame enclosed by `outer`, as created on function activation.
    pub fn enclosed(outer: &Environment) -> Self {
        Self(Rc::new(RefCell::new(EnvironmentData {
            store: HashMap::new(),
            outer: Some(outer.clone()),
        })))
    }

    /// Looks up `name`, walking from this frame outward.
    pub fn get(&self, name: &str) -> Option<Obj> {
        let data = self.0.borrow();
        match data.store.get(name) {
            Some(value) => Some(value.clone()),
            None => data.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` in this (innermost) frame, regardless of whether an
    /// outer frame already defines it.
    pub fn set(&self, name: &str, value: Obj) {
        self.0.borrow_mut().store.insert(name.to_owned(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Environment(..)")
    }
}
