use lenguaje::environment::Environment;
use lenguaje::run_source;

#[test]
fn later_bindings_see_earlier_ones() {
    let env = Environment::new();
    let source = "variable a = 5; variable b = a; variable c = a + b + 5; c;";
    let result = run_source(source, &env).expect("should parse");
    assert_eq!(result.inspect(), "15");
}

#[test]
fn bindings_persist_across_separate_run_source_calls() {
    let env = Environment::new();
    run_source("variable contador = 1;", &env).expect("should parse");
    run_source("variable contador = contador + 1;", &env).expect("should parse");
    let result = run_source("contador;", &env).expect("should parse");
    assert_eq!(result.inspect(), "2");
}
