//! The interactive read-eval-print loop. Each line is appended to the
//! session's accumulated source and the whole buffer is re-parsed and
//! re-evaluated from scratch against a fresh `Environment` — there is no
//! mutation in this language, so replaying the full history is equivalent
//! to (and far simpler than) threading one environment through in place.

use std::io::{self, BufRead, Write};

use log::error;

use crate::environment::Environment;
use crate::run_source;

const PROMPT: &str = ">> ";
const EXIT_SENTINEL: &str = "salir()";

/// Runs the REPL against `input`/`output`, returning once `input` is
/// exhausted (EOF) or the `salir()` sentinel is read.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut buffer = String::new();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed == EXIT_SENTINEL {
            return Ok(());
        }
        if trimmed.is_empty() {
            continue;
        }

        let attempt_start = buffer.len();
        buffer.push_str(trimmed);
        buffer.push('\n');

        let env = Environment::new();
        match run_source(&buffer, &env) {
            Ok(result) => writeln!(output, "{}", result.inspect())?,
            Err(parse_errors) => {
                buffer.truncate(attempt_start);
                for message in &parse_errors {
                    error!("{message}");
                    writeln!(output, "{message}")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_accumulated_bindings_on_every_line() {
        let input = b"variable x = 5;\nx + 1;\n" as &[u8];
        let mut output = Vec::new();

        start(input, &mut output).unwrap();

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("nulo"));
        assert!(rendered.contains('6'));
    }

    #[test]
    fn surfaces_parse_errors_without_polluting_later_replays() {
        let input = b"variable = 5;\nvariable x = 1;\nx;\n" as &[u8];
        let mut output = Vec::new();

        start(input, &mut output).unwrap();

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("Se esperaba"));
        assert!(rendered.contains('1'));
    }

    #[test]
    fn salir_ends_the_session_without_evaluating_it() {
        let input = b"variable x = 5;\nsalir()\nx;\n" as &[u8];
        let mut output = Vec::new();

        start(input, &mut output).unwrap();

        let rendered = String::from_utf8(output).unwrap();
        assert!(!rendered.contains('5'));
    }
}
