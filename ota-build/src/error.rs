use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("OUT_DIR is not set, the hook has to run from a build script")]
    MissingOutDir,

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not emit build directives: {0}")]
    Emit(#[from] std::io::Error),
}
