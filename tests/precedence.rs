use lenguaje::environment::Environment;
use lenguaje::run_source;

#[test]
fn multiplication_binds_tighter_than_addition() {
    let env = Environment::new();
    let result = run_source("5 + 5 * 2", &env).expect("should parse");
    assert_eq!(result.inspect(), "15");
}

#[test]
fn comparison_of_a_parenthesized_comparison() {
    let env = Environment::new();
    let result = run_source("(1 < 2) == verdadero", &env).expect("should parse");
    assert_eq!(result.inspect(), "verdadero");
}
