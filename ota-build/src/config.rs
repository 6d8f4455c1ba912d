use crate::define::DefineKind;
use crate::source::EnvSource;

/// Env var that mirrors the log lines as `cargo:warning`, so they show up in
/// normal `cargo build` output.
pub const WARNINGS_VAR: &str = "OTA_BUILD_WARNINGS";

pub const DEFAULT_LOG_PREFIX: &str = "## ota-build:";

/// One injected variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    pub name: String,
    pub default: String,
    pub kind: DefineKind,
    /// also expose the value as `cfg(<lowercase name> = "...")`
    pub cfg: bool,
}

impl VarSpec {
    pub fn new(name: &str, default: &str, kind: DefineKind) -> Self {
        Self {
            name: name.to_string(),
            default: default.to_string(),
            kind,
            cfg: false,
        }
    }
    pub fn with_cfg(mut self) -> Self {
        self.cfg = true;
        self
    }
    pub fn cfg_name(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    pub ota: VarSpec,
    pub hw: VarSpec,
    pub log_prefix: String,
    pub cargo_warnings: bool,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            ota: VarSpec::new("OTA_VERSION", "dev", DefineKind::Stringified),
            hw: VarSpec::new("HW_VERSION", "1", DefineKind::Raw).with_cfg(),
            log_prefix: DEFAULT_LOG_PREFIX.to_string(),
            cargo_warnings: false,
        }
    }
}

impl HookConfig {
    pub fn from_env<E: EnvSource>(env: &E) -> Self {
        let mut config = Self::default();
        if let Some(v) = env.get(WARNINGS_VAR) {
            config.cargo_warnings = is_truthy(&v);
        }
        config
    }
    pub fn log_line(&self, name: &str, value: &str) -> String {
        format!("{} {} set to {}", self.log_prefix, name, value)
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = HookConfig::default();
        assert_eq!(c.ota.name, "OTA_VERSION");
        assert_eq!(c.ota.default, "dev");
        assert_eq!(c.ota.kind, DefineKind::Stringified);
        assert!(!c.ota.cfg);
        assert_eq!(c.hw.name, "HW_VERSION");
        assert_eq!(c.hw.default, "1");
        assert_eq!(c.hw.kind, DefineKind::Raw);
        assert_eq!(c.hw.cfg_name(), "hw_version");
        assert!(!c.cargo_warnings);
    }

    #[test]
    fn warnings_from_env() {
        assert!(HookConfig::from_env(&[(WARNINGS_VAR, "TRUE")]).cargo_warnings);
        assert!(HookConfig::from_env(&[(WARNINGS_VAR, " 1 ")]).cargo_warnings);
        assert!(!HookConfig::from_env(&[(WARNINGS_VAR, "0")]).cargo_warnings);
        assert!(!HookConfig::from_env(&[("OTHER", "1")]).cargo_warnings);
    }

    #[test]
    fn log_line_format() {
        let c = HookConfig::default();
        assert_eq!(
            c.log_line("OTA_VERSION", "dev"),
            "## ota-build: OTA_VERSION set to dev"
        );
    }
}
