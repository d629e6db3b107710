//! Host-level errors: failures in the surrounding CLI/REPL shell, as opposed
//! to the language's own parse errors (`Vec<String>` from the parser) or
//! runtime errors (`Object::Error`), neither of which are ever routed
//! through this type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LenguajeError {
    #[error("no se pudo leer el archivo {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fallo de E/S en la consola: {0}")]
    Io(#[from] std::io::Error),
}
