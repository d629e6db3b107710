use lenguaje::environment::Environment;
use lenguaje::run_source;

#[test]
fn referencing_an_unbound_name_is_a_runtime_error() {
    let env = Environment::new();
    let result = run_source("foobar;", &env).expect("should parse");
    assert_eq!(
        result.inspect(),
        "Error: Identificador no encontrado: foobar"
    );
}

#[test]
fn a_name_bound_in_an_outer_scope_is_visible_to_an_inner_call() {
    let env = Environment::new();
    let source = "variable saludo = \"hola\"; \
                  variable identidad = procedimiento(x) { regresa x; }; \
                  identidad(saludo);";
    let result = run_source(source, &env).expect("should parse");
    assert_eq!(result.inspect(), "hola");
}
