use lenguaje::environment::Environment;
use lenguaje::run_source;

#[test]
fn strings_concatenate_with_plus() {
    let env = Environment::new();
    let result = run_source(r#""Hola" + " mundo""#, &env).expect("should parse");
    assert_eq!(result.inspect(), "Hola mundo");
}

#[test]
fn string_equality_compares_contents_not_identity() {
    let env = Environment::new();
    let result = run_source(r#""hola" == "hola""#, &env).expect("should parse");
    assert_eq!(result.inspect(), "verdadero");
}
