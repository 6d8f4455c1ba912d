use std::io::{self, Write};

use crate::config::{HookConfig, VarSpec, WARNINGS_VAR};
use crate::define::Define;
use crate::resolve::Resolved;

/// Writes cargo build script directives and the hook's log lines.
pub struct Emitter<W: Write> {
    out: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
    pub fn into_inner(self) -> W {
        self.out
    }
    fn directive(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "cargo:{}={}", key, value)
    }
    pub fn rerun_if_env_changed(&mut self, name: &str) -> io::Result<()> {
        self.directive("rerun-if-env-changed", name)
    }
    pub fn rustc_env(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.directive("rustc-env", &format!("{}={}", name, value))
    }
    pub fn rustc_cfg(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.directive("rustc-check-cfg", &format!("cfg({}, values(any()))", name))?;
        self.directive("rustc-cfg", &format!("{}={:?}", name, value))
    }
    pub fn warning(&mut self, msg: &str) -> io::Result<()> {
        self.directive("warning", msg)
    }
    pub fn log(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }

    fn define(&mut self, config: &HookConfig, spec: &VarSpec, define: &Define) -> io::Result<()> {
        self.rerun_if_env_changed(define.name())?;
        if is_single_line(define.raw()) {
            self.rustc_env(define.name(), define.raw())?;
            if spec.cfg {
                self.rustc_cfg(&spec.cfg_name(), define.raw())?;
            }
        } else {
            // a line break would end the directive and start a new one
            self.warning(&format!(
                "{} contains a line break, not exported to rustc",
                define.name()
            ))?;
        }
        let line = config.log_line(define.name(), &escape_line_breaks(define.raw()));
        self.log(&line)?;
        if config.cargo_warnings {
            self.warning(&line)?;
        }
        Ok(())
    }

    /// Everything cargo needs for one invocation, OTA first then HW.
    pub fn emit(&mut self, config: &HookConfig, resolved: &Resolved) -> io::Result<()> {
        self.rerun_if_env_changed(WARNINGS_VAR)?;
        self.define(config, &config.ota, resolved.ota_version())?;
        self.define(config, &config.hw, resolved.hw_version())?;
        self.out.flush()
    }
}

fn is_single_line(v: &str) -> bool {
    !v.contains(['\n', '\r'])
}

fn escape_line_breaks(v: &str) -> String {
    v.replace('\r', "\\r").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;

    fn emit_to_string(config: &HookConfig, env: &[(&str, &str); 2]) -> String {
        let resolved = resolve(config, env);
        let mut emitter = Emitter::new(Vec::new());
        emitter.emit(config, &resolved).unwrap();
        String::from_utf8(emitter.into_inner()).unwrap()
    }

    #[test]
    fn directives_in_order() {
        let out = emit_to_string(
            &HookConfig::default(),
            &[("OTA_VERSION", "2.0.1"), ("HW_VERSION", "2")],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "cargo:rerun-if-env-changed=OTA_BUILD_WARNINGS",
                "cargo:rerun-if-env-changed=OTA_VERSION",
                "cargo:rustc-env=OTA_VERSION=2.0.1",
                "## ota-build: OTA_VERSION set to 2.0.1",
                "cargo:rerun-if-env-changed=HW_VERSION",
                "cargo:rustc-env=HW_VERSION=2",
                "cargo:rustc-check-cfg=cfg(hw_version, values(any()))",
                "cargo:rustc-cfg=hw_version=\"2\"",
                "## ota-build: HW_VERSION set to 2",
            ]
        );
    }

    #[test]
    fn warnings_mirror_log_lines() {
        let config = HookConfig {
            cargo_warnings: true,
            ..HookConfig::default()
        };
        let out = emit_to_string(&config, &[("A", "a"), ("B", "b")]);
        assert!(out.contains("cargo:warning=## ota-build: OTA_VERSION set to dev\n"));
        assert!(out.contains("cargo:warning=## ota-build: HW_VERSION set to 1\n"));
    }

    #[test]
    fn line_breaks_do_not_leak_directives() {
        let out = emit_to_string(
            &HookConfig::default(),
            &[("OTA_VERSION", "1.0\r\n"), ("HW_VERSION", "2\ncargo:rustc-cfg=injected")],
        );
        assert!(!out.lines().any(|l| l == "cargo:rustc-cfg=injected"));
        assert!(!out.contains("cargo:rustc-env=HW_VERSION"));
        assert!(!out.contains("cargo:rustc-env=OTA_VERSION"));
        assert!(!out.contains("cargo:rustc-cfg=hw_version"));
        assert!(out.contains("cargo:warning=HW_VERSION contains a line break"));

        let logs: Vec<&str> = out.lines().filter(|l| !l.starts_with("cargo:")).collect();
        assert_eq!(
            logs,
            vec![
                "## ota-build: OTA_VERSION set to 1.0\\r\\n",
                "## ota-build: HW_VERSION set to 2\\ncargo:rustc-cfg=injected",
            ]
        );
    }
}
