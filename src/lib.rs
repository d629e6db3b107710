//! Lenguaje: a small, dynamically-typed, expression-oriented interpreter
//! with Spanish keywords.
//!
//! The pipeline is the classic three stages: [`lexer`] turns source text
//! into a [`token`] stream, [`parser`] turns that stream into an [`ast`],
//! and [`evaluator`] walks the tree against an [`environment`] to produce
//! an [`object`].

pub mod ast;
pub mod builtins;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod repl;
pub mod token;

use environment::Environment;
use lexer::Lexer;
use object::Obj;
use parser::Parser;

/// Runs a full program against `env`: lexes, parses, and evaluates it.
///
/// On a parse failure, returns the accumulated diagnostic messages instead
/// of evaluating anything — a program that doesn't parse is never
/// partially run.
pub fn run_source(source: &str, env: &Environment) -> Result<Obj, Vec<String>> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors.is_empty() {
        return Err(parser.errors);
    }

    Ok(evaluator::eval_program(&program, env))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_source_evaluates_a_program() {
        let env = Environment::new();
        let result = run_source("1 + 2", &env).expect("should parse");
        assert_eq!(result.inspect(), "3");
    }

    #[test]
    fn run_source_surfaces_parse_errors() {
        let env = Environment::new();
        let errors = run_source("variable = 5;", &env).expect_err("should fail to parse");
        assert!(!errors.is_empty());
    }

    #[test]
    fn run_source_shares_bindings_across_calls() {
        let env = Environment::new();
        run_source("variable x = 10;", &env).expect("should parse");
        let result = run_source("x + 5", &env).expect("should parse");
        assert_eq!(result.inspect(), "15");
    }
}
