use lenguaje::environment::Environment;
use lenguaje::run_source;

#[test]
fn a_recursive_function_can_call_itself_by_name() {
    let env = Environment::new();
    let source = "variable factorial = procedimiento(n) { \
                      si (n == 0) { regresa 1; } si_no { regresa n * factorial(n - 1); } \
                  }; \
                  factorial(6);";
    let result = run_source(source, &env).expect("should parse");
    assert_eq!(result.inspect(), "720");
}

#[test]
fn mutual_style_recursion_via_a_shared_environment() {
    let env = Environment::new();
    let source = "variable fib = procedimiento(n) { \
                      si (n < 2) { regresa n; } \
                      regresa fib(n - 1) + fib(n - 2); \
                  }; \
                  fib(10);";
    let result = run_source(source, &env).expect("should parse");
    assert_eq!(result.inspect(), "55");
}
