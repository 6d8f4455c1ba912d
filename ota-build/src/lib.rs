//! Build script hook that injects the firmware OTA version and hardware
//! revision into the compile.
//!
//! ```no_run
//! // build.rs
//! fn main() -> Result<(), ota_build::BuildError> {
//!     ota_build::run()?;
//!     Ok(())
//! }
//! ```
//!
//! `OTA_VERSION` (default `dev`) ends up as a string literal and `HW_VERSION`
//! (default `1`) as a raw token, both as `rustc-env` variables, in the
//! generated `ota_version.rs` / `ota_version.h` under `OUT_DIR`, and as `-D`
//! flags via [`Resolved::compiler_flags`].

pub mod config;
pub mod define;
pub mod emit;
mod error;
pub mod generate;
pub mod resolve;
pub mod source;

use std::io::Write;
use std::path::Path;

pub use config::HookConfig;
pub use define::{Define, DefineKind, stringify_macro};
pub use emit::Emitter;
pub use error::BuildError;
pub use resolve::{Resolved, resolve};
pub use source::{EnvSource, ProcessEnv};

pub struct Hook<E: EnvSource> {
    config: HookConfig,
    env: E,
}

impl<E: EnvSource> Hook<E> {
    pub fn new(config: HookConfig, env: E) -> Self {
        Self { config, env }
    }
    pub fn config(&self) -> &HookConfig {
        &self.config
    }
    /// Resolve, emit directives and log lines to `out`, and write the
    /// generated files when `out_dir` is given.
    pub fn run<W: Write>(&self, out: W, out_dir: Option<&Path>) -> Result<Resolved, BuildError> {
        let resolved = resolve(&self.config, &self.env);
        if let Some(dir) = out_dir {
            generate::write_artifacts(&resolved, dir)?;
        }
        Emitter::new(out).emit(&self.config, &resolved)?;
        Ok(resolved)
    }
}

/// Same as [`run`], with the environment and output handed in.
pub fn run_with<E: EnvSource, W: Write>(env: E, out: W) -> Result<Resolved, BuildError> {
    let config = HookConfig::from_env(&env);
    let out_dir = env.get("OUT_DIR").ok_or(BuildError::MissingOutDir)?;
    Hook::new(config, env).run(out, Some(Path::new(&out_dir)))
}

/// Entry point for `build.rs`.
pub fn run() -> Result<Resolved, BuildError> {
    let stdout = std::io::stdout();
    run_with(ProcessEnv, stdout.lock())
}
