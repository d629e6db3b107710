//! Runtime objects: tagged variants with a common capability (type tag,
//! inspection string) flowing through the evaluator.

use std::fmt;
use std::rc::Rc;

use crate::ast::{Block, Identifier};
use crate::builtins::NativeFn;
use crate::environment::Environment;

/// A reference-counted handle to a runtime object. Cheap to clone; this is
/// the value type the evaluator passes around.
pub type Obj = Rc<Object>;

#[derive(Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    Return(Obj),
    Error(String),
    Function {
        parameters: Vec<Identifier>,
        body: Block,
        env: Environment,
    },
    String(String),
    Builtin(NativeFn),
}

impl Object {
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Null => "NULL",
            Object::Return(_) => "RETURN",
            Object::Error(_) => "ERROR",
            Object::Function { .. } => "FUNCTION",
            Object::String(_) => "STRING",
            Object::Builtin(_) => "BUILTIN",
        }
    }

    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(value) => value.to_string(),
            Object::Boolean(value) => (if *value { "verdadero" } else { "falso" }).to_owned(),
            Object::Null => "nulo".to_owned(),
            Object::Return(inner) => inner.inspect(),
            Object::Error(message) => format!("Error: {message}"),
            Object::Function {
                parameters, body, ..
            } => {
                let params: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                format!("procedimiento({}) {{\n{}\n}}", params.join(", "), body)
            }
            Object::String(value) => value.clone(),
            Object::Builtin(_) => "builtin function".to_owned(),
        }
    }
}

// Manual Debug: a Function's captured Environment may (and for recursive
// definitions, does) end up holding a reference back to this very object,
// so we deliberately don't recurse into it.
impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Function { parameters, .. } => f
                .debug_struct("Function")
                .field("parameters", parameters)
                .finish_non_exhaustive(),
            other => write!(f, "{}({})", other.type_name(), other.inspect()),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

// `Object` holds an `Rc`, so it cannot live behind a `Sync` static; these are
// process-wide only in the sense that every `Environment` on this thread
// shares the same handles. The interpreter is single-threaded by design
// (see SPEC_FULL.md §5), so a `thread_local!` singleton is the natural fit.
thread_local! {
    static TRUE: Obj = Rc::new(Object::Boolean(true));
    static FALSE: Obj = Rc::new(Object::Boolean(false));
    static NULL_SINGLETON: Obj = Rc::new(Object::Null);
}

/// Maps a native `bool` to the canonical singleton `Boolean` object.
pub fn native_bool(value: bool) -> Obj {
    if value {
        TRUE.with(Clone::clone)
    } else {
        FALSE.with(Clone::clone)
    }
}

/// The canonical singleton `Null` object.
pub fn null() -> Obj {
    NULL_SINGLETON.with(Clone::clone)
}

pub fn new_error(message: String) -> Obj {
    Rc::new(Object::Error(message))
}

pub fn is_error(obj: &Obj) -> bool {
    matches!(obj.as_ref(), Object::Error(_))
}

pub fn is_truthy(obj: &Obj) -> bool {
    match obj.as_ref() {
        Object::Null => false,
        Object::Boolean(value) => *value,
        _ => true,
    }
}
