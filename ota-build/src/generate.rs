use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BuildError;
use crate::resolve::Resolved;

pub const RUST_MODULE: &str = "ota_version.rs";
pub const C_HEADER: &str = "ota_version.h";

/// Constants for `include!(concat!(env!("OUT_DIR"), "/ota_version.rs"))`.
pub fn rust_module(resolved: &Resolved) -> String {
    let ota = resolved.ota_version();
    let hw = resolved.hw_version();
    let revision = match resolved.hw_revision() {
        Some(r) => format!("Some({})", r),
        None => "None".to_string(),
    };
    format!(
        "pub const {}: &str = {:?};\npub const {}: &str = {:?};\npub const HW_REVISION: Option<u32> = {};\n",
        ota.name(),
        ota.raw(),
        hw.name(),
        hw.raw(),
        revision,
    )
}

/// Same defines as the compiler flags, for C sources built next to the firmware.
pub fn c_header(resolved: &Resolved) -> String {
    let mut out = String::from("#pragma once\n");
    for d in resolved.defines() {
        out.push_str(&d.header_line());
        out.push('\n');
    }
    out
}

/// Write `contents` unless the file already holds exactly that, so the
/// mtime only moves when a value changed.
fn write_if_changed(path: &Path, contents: &str) -> Result<bool, BuildError> {
    if let Ok(existing) = fs::read_to_string(path) {
        if existing == contents {
            return Ok(false);
        }
    }
    fs::write(path, contents).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Writes both artifacts into `out_dir`, returning their paths.
pub fn write_artifacts(resolved: &Resolved, out_dir: &Path) -> Result<[PathBuf; 2], BuildError> {
    let module = out_dir.join(RUST_MODULE);
    let header = out_dir.join(C_HEADER);
    write_if_changed(&module, &rust_module(resolved))?;
    write_if_changed(&header, &c_header(resolved))?;
    Ok([module, header])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HookConfig;
    use crate::resolve::resolve;

    #[test]
    fn module_escapes_like_rust_literals() {
        let env = [("OTA_VERSION", "v\"1\""), ("HW_VERSION", "4")];
        let r = resolve(&HookConfig::default(), &env);
        assert_eq!(
            rust_module(&r),
            "pub const OTA_VERSION: &str = \"v\\\"1\\\"\";\n\
             pub const HW_VERSION: &str = \"4\";\n\
             pub const HW_REVISION: Option<u32> = Some(4);\n"
        );
    }

    #[test]
    fn header_has_both_defines() {
        let r = resolve(&HookConfig::default(), &[("HW_VERSION", "rev_b")]);
        assert_eq!(
            c_header(&r),
            "#pragma once\n#define OTA_VERSION \"dev\"\n#define HW_VERSION rev_b\n"
        );
        assert!(rust_module(&r).contains("HW_REVISION: Option<u32> = None;"));
    }

    #[test]
    fn write_if_changed_reports_writes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(RUST_MODULE);
        assert!(write_if_changed(&path, "a").unwrap());
        assert!(!write_if_changed(&path, "a").unwrap());
        assert!(write_if_changed(&path, "b").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "b");
    }
}
