use crate::config::{HookConfig, VarSpec};
use crate::define::Define;
use crate::source::EnvSource;

/// The values one build invocation settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    ota: Define,
    hw: Define,
}

impl Resolved {
    pub fn ota_version(&self) -> &Define {
        &self.ota
    }
    pub fn hw_version(&self) -> &Define {
        &self.hw
    }
    /// hardware revision as a number, if the raw token is one
    pub fn hw_revision(&self) -> Option<u32> {
        self.hw.raw().trim().parse().ok()
    }
    pub fn defines(&self) -> [&Define; 2] {
        [&self.ota, &self.hw]
    }
    pub fn compiler_flags(&self) -> Vec<String> {
        self.defines().iter().map(|d| d.compiler_flag()).collect()
    }
}

fn resolve_var<E: EnvSource>(spec: &VarSpec, env: &E) -> Define {
    // set-but-empty counts as set
    let raw = env.get(&spec.name).unwrap_or_else(|| spec.default.clone());
    Define::new(spec.name.clone(), raw, spec.kind)
}

pub fn resolve<E: EnvSource>(config: &HookConfig, env: &E) -> Resolved {
    Resolved {
        ota: resolve_var(&config.ota, env),
        hw: resolve_var(&config.hw, env),
    }
}
