//! The built-in function registry. Consulted by the evaluator only after an
//! identifier fails to resolve in any user scope (see `environment`).

use std::collections::HashMap;
use std::rc::Rc;

use once_cell::sync::Lazy;

use crate::object::{new_error, Obj, Object};

/// A native callable: takes the already-evaluated argument list, returns an
/// object (an `Error` object on misuse, never a panic).
pub type NativeFn = fn(&[Obj]) -> Obj;

static BUILTINS: Lazy<HashMap<&'static str, NativeFn>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, NativeFn> = HashMap::new();
    m.insert("longitud", longitud);
    m
});

/// Looks up a built-in by identifier string.
pub fn lookup(name: &str) -> Option<NativeFn> {
    BUILTINS.get(name).copied()
}

fn longitud(args: &[Obj]) -> Obj {
    if args.len() != 1 {
        return new_error(format!(
            "Número incorrecto de argumentos para longitud: se obtuvieron {}, se esperaba 1.",
            args.len()
        ));
    }

    match args[0].as_ref() {
        Object::String(value) => Rc::new(Object::Integer(value.chars().count() as i64)),
        other => new_error(format!(
            "argumento no válido para longitud, se obtuvo {}",
            other.type_name()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitud_counts_characters() {
        let result = longitud(&[Rc::new(Object::String("hola".to_owned()))]);
        assert!(matches!(result.as_ref(), Object::Integer(4)));
    }

    #[test]
    fn longitud_rejects_wrong_arity() {
        let result = longitud(&[]);
        assert!(matches!(result.as_ref(), Object::Error(_)));
    }

    #[test]
    fn longitud_rejects_non_string() {
        let result = longitud(&[Rc::new(Object::Integer(5))]);
        assert!(matches!(result.as_ref(), Object::Error(_)));
    }

    #[test]
    fn unknown_builtin_is_none() {
        assert!(lookup("no_existe").is_none());
    }
}
