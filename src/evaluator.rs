//! The recursive tree-walking evaluator: `evaluate(node, env) -> Obj`.
//!
//! Every recursive call checks for an `Error` object before consuming a
//! sub-result; errors are values, not host-level exceptions, and they
//! short-circuit statement sequences, block evaluation, function
//! application, and argument evaluation (see SPEC_FULL.md §4.3).

use std::rc::Rc;

use log::trace;

use crate::ast::{Block, Call, Expression, Identifier, If, Prefix, Program, Statement};
use crate::builtins;
use crate::environment::Environment;
use crate::object::{is_error, is_truthy, native_bool, new_error, null, Obj, Object};

/// Evaluates a whole program. Unwraps a trailing `Return`; an `Error`
/// anywhere becomes the final result immediately.
pub fn eval_program(program: &Program, env: &Environment) -> Obj {
    let mut result = null();

    for statement in &program.statements {
        result = eval_statement(statement, env);

        match result.as_ref() {
            Object::Return(inner) => return inner.clone(),
            Object::Error(_) => return result,
            _ => {}
        }
    }

    result
}

/// Evaluates a block. Unlike `eval_program`, a `Return` is propagated
/// *wrapped* — only the enclosing program or the function-call boundary
/// unwraps it, so nested blocks bubble early returns straight up.
fn eval_block(block: &Block, env: &Environment) -> Obj {
    let mut result = null();

    for statement in &block.statements {
        result = eval_statement(statement, env);

        if matches!(result.as_ref(), Object::Return(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: &Environment) -> Obj {
    match statement {
        Statement::Expression(node) => eval_expression(&node.expression, env),
        Statement::Return(node) => {
            let value = eval_expression(&node.return_value, env);
            if is_error(&value) {
                return value;
            }
            Rc::new(Object::Return(value))
        }
        Statement::Let(node) => {
            let value = eval_expression(&node.value, env);
            if is_error(&value) {
                return value;
            }
            env.set(&node.name.value, value);
            null()
        }
    }
}

pub fn eval_expression(expression: &Expression, env: &Environment) -> Obj {
    match expression {
        Expression::IntegerLiteral(node) => Rc::new(Object::Integer(node.value)),
        Expression::BooleanLiteral(node) => native_bool(node.value),
        Expression::StringLiteral(node) => Rc::new(Object::String(node.value.clone())),
        Expression::Identifier(node) => eval_identifier(node, env),
        Expression::Prefix(node) => eval_prefix_expression(node, env),
        Expression::Infix(node) => {
            let left = eval_expression(&node.left, env);
            if is_error(&left) {
                return left;
            }
            let right = eval_expression(&node.right, env);
            if is_error(&right) {
                return right;
            }
            eval_infix_expression(&node.operator, &left, &right)
        }
        Expression::If(node) => eval_if_expression(node, env),
        Expression::FunctionLiteral(node) => Rc::new(Object::Function {
            parameters: node.parameters.clone(),
            body: node.body.clone(),
            env: env.clone(),
        }),
        Expression::Call(node) => eval_call_expression(node, env),
    }
}

fn eval_identifier(ident: &Identifier, env: &Environment) -> Obj {
    if let Some(value) = env.get(&ident.value) {
        return value;
    }

    if let Some(native) = builtins::lookup(&ident.value) {
        return Rc::new(Object::Builtin(native));
    }

    new_error(format!("Identificador no encontrado: {}", ident.value))
}

fn eval_prefix_expression(node: &Prefix, env: &Environment) -> Obj {
    let right = eval_expression(&node.right, env);
    if is_error(&right) {
        return right;
    }

    match node.operator.as_str() {
        "!" => native_bool(!is_truthy(&right)),
        "-" => match right.as_ref() {
            Object::Integer(value) => Rc::new(Object::Integer(-value)),
            other => new_error(format!("Operador desconocido: -{}", other.type_name())),
        },
        other => new_error(format!("Operador desconocido: {other}{}", right.type_name())),
    }
}

fn eval_infix_expression(operator: &str, left: &Obj, right: &Obj) -> Obj {
    match (left.as_ref(), right.as_ref()) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::String(l), Object::String(r)) => eval_string_infix(operator, l, r),
        _ if left.type_name() != right.type_name() => new_error(format!(
            "Discrepancia de tipos: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
        _ => match operator {
            "==" => native_bool(Rc::ptr_eq(left, right)),
            "!=" => native_bool(!Rc::ptr_eq(left, right)),
            _ => new_error(format!(
                "Operador desconocido: {} {operator} {}",
                left.type_name(),
                right.type_name()
            )),
        },
    }
}

/// Floor division: truncates toward negative infinity, not toward zero.
fn floor_div(l: i64, r: i64) -> i64 {
    let q = l / r;
    let rem = l % r;
    if rem != 0 && (rem < 0) != (r < 0) {
        q - 1
    } else {
        q
    }
}

fn eval_integer_infix(operator: &str, l: i64, r: i64) -> Obj {
    match operator {
        "+" => Rc::new(Object::Integer(l + r)),
        "-" => Rc::new(Object::Integer(l - r)),
        "*" => Rc::new(Object::Integer(l * r)),
        "/" => {
            if r == 0 {
                new_error("No se puede dividir entre cero.".to_owned())
            } else {
                Rc::new(Object::Integer(floor_div(l, r)))
            }
        }
        "<" => native_bool(l < r),
        ">" => native_bool(l > r),
        "==" => native_bool(l == r),
        "!=" => native_bool(l != r),
        _ => new_error(format!("Operador desconocido: INTEGER {operator} INTEGER")),
    }
}

fn eval_string_infix(operator: &str, l: &str, r: &str) -> Obj {
    match operator {
        "+" => Rc::new(Object::String(format!("{l}{r}"))),
        "==" => native_bool(l == r),
        "!=" => native_bool(l != r),
        _ => new_error(format!("Operador desconocido: STRING {operator} STRING")),
    }
}

fn eval_if_expression(node: &If, env: &Environment) -> Obj {
    let condition = eval_expression(&node.condition, env);
    if is_error(&condition) {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block(&node.consequence, env)
    } else if let Some(alternative) = &node.alternative {
        eval_block(alternative, env)
    } else {
        null()
    }
}

fn eval_call_expression(node: &Call, env: &Environment) -> Obj {
    let function = eval_expression(&node.function, env);
    if is_error(&function) {
        return function;
    }

    let mut args = Vec::with_capacity(node.arguments.len());
    for arg_expr in &node.arguments {
        let arg = eval_expression(arg_expr, env);
        if is_error(&arg) {
            return arg;
        }
        args.push(arg);
    }

    trace!("calling {} with {} argument(s)", node.function, args.len());
    apply_function(&function, &args)
}

fn apply_function(function: &Obj, args: &[Obj]) -> Obj {
    match function.as_ref() {
        Object::Function {
            parameters,
            body,
            env,
        } => {
            let call_env = Environment::enclosed(env);
            for (param, arg) in parameters.iter().zip(args.iter()) {
                call_env.set(&param.value, arg.clone());
            }
            unwrap_return(eval_block(body, &call_env))
        }
        Object::Builtin(native) => native(args),
        other => new_error(format!("No es una función: {}", other.type_name())),
    }
}

fn unwrap_return(obj: Obj) -> Obj {
    match obj.as_ref() {
        Object::Return(inner) => inner.clone(),
        _ => obj,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn eval(input: &str) -> Obj {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();
        assert!(
            parser.errors.is_empty(),
            "unexpected parse errors: {:?}",
            parser.errors
        );
        let env = Environment::new();
        eval_program(&program, &env)
    }

    #[test]
    fn integer_arithmetic_precedence() {
        assert_eq!(eval("5 + 5 * 2").inspect(), "15");
    }

    #[test]
    fn comparison_of_comparisons() {
        assert_eq!(eval("(1 < 2) == verdadero").inspect(), "verdadero");
    }

    #[test]
    fn if_else_takes_the_falsy_branch() {
        assert_eq!(eval("si (1 > 2) { 10 } si_no { 20 }").inspect(), "20");
    }

    #[test]
    fn let_bindings_chain() {
        assert_eq!(
            eval("variable a = 5; variable b = a; variable c = a + b + 5; c;").inspect(),
            "15"
        );
    }

    #[test]
    fn closures_capture_their_environment() {
        assert_eq!(
            eval(
                "variable suma = procedimiento(x, y) { regresa x + y; }; \
                 suma(5 + 5, suma(10, 10));"
            )
            .inspect(),
            "30"
        );
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(eval(r#""Hola" + " mundo""#).inspect(), "Hola mundo");
    }

    #[test]
    fn type_mismatch_is_a_runtime_error() {
        let result = eval("5 + verdadero");
        assert!(matches!(result.as_ref(), Object::Error(_)));
        assert_eq!(result.inspect(), "Error: Discrepancia de tipos: INTEGER + BOOLEAN");
    }

    #[test]
    fn unknown_identifier_is_a_runtime_error() {
        let result = eval("foobar;");
        assert_eq!(result.inspect(), "Error: Identificador no encontrado: foobar");
    }

    #[test]
    fn builtin_longitud() {
        assert_eq!(eval(r#"longitud("hola")"#).inspect(), "4");
    }

    #[test]
    fn nested_early_return() {
        assert_eq!(
            eval("si (10 > 1) { si (10 > 1) { regresa 10; } regresa 1; }").inspect(),
            "10"
        );
    }

    #[test]
    fn error_short_circuits_enclosing_statements() {
        let result = eval("5 + verdadero; 10;");
        assert_eq!(result.inspect(), "Error: Discrepancia de tipos: INTEGER + BOOLEAN");
    }

    #[test]
    fn let_with_erroring_rhs_does_not_bind() {
        let result = eval("variable x = 5 + verdadero; x;");
        assert_eq!(result.inspect(), "Error: Discrepancia de tipos: INTEGER + BOOLEAN");
    }

    #[test]
    fn builtin_can_be_shadowed() {
        assert_eq!(
            eval(r#"variable longitud = procedimiento(x) { regresa 99; }; longitud("hola");"#)
                .inspect(),
            "99"
        );
    }

    #[test]
    fn boolean_truthiness_of_zero() {
        // 0 is truthy: only `nulo` and `falso` are falsy.
        assert_eq!(eval("si (0) { 1 } si_no { 2 }").inspect(), "1");
    }

    #[test]
    fn negative_integer_division_truncates_toward_negative_infinity() {
        assert_eq!(eval("-7 / 2").inspect(), "-4");
    }

    #[test]
    fn division_by_zero_is_a_runtime_error() {
        let result = eval("1 / 0");
        assert_eq!(result.inspect(), "Error: No se puede dividir entre cero.");
    }

    #[test]
    fn calling_a_non_function_is_a_runtime_error() {
        let result = eval("variable x = 5; x();");
        assert_eq!(result.inspect(), "Error: No es una función: INTEGER");
    }

    #[test]
    fn recursive_function_via_shared_environment() {
        assert_eq!(
            eval(
                "variable factorial = procedimiento(n) { \
                     si (n == 0) { regresa 1; } si_no { regresa n * factorial(n - 1); } \
                 }; \
                 factorial(5);"
            )
            .inspect(),
            "120"
        );
    }
}
