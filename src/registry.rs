use std::path::{Path, PathBuf};

use crate::schema::v1::AnalysisKind;

/// A supported scoring back-end: display name, executable id, analysis kind.
#[derive(Debug, Clone, Copy)]
pub struct ScorerDef {
    pub name: &'static str,
    pub id: &'static str,
    pub kind: AnalysisKind,
}

/// Immutable table of supported scorers, built once at startup and threaded
/// through the run context.
#[derive(Debug, Clone)]
pub struct ScorerRegistry {
    defs: Vec<ScorerDef>,
}

impl ScorerRegistry {
    pub fn builtin() -> Self {
        use AnalysisKind::{Sequence, Structure};
        let defs = vec![
            ScorerDef {
                name: "ESM-1v",
                id: "esm1v",
                kind: Sequence,
            },
            ScorerDef {
                name: "ESM2-650M",
                id: "esm2",
                kind: Sequence,
            },
            ScorerDef {
                name: "ESM-1b",
                id: "esm1b",
                kind: Sequence,
            },
            ScorerDef {
                name: "SaProt",
                id: "saprot",
                kind: Structure,
            },
            ScorerDef {
                name: "ESM-IF1",
                id: "esmif1",
                kind: Structure,
            },
            ScorerDef {
                name: "MIF-ST",
                id: "mifst",
                kind: Structure,
            },
            ScorerDef {
                name: "ProSST-2048",
                id: "prosst",
                kind: Structure,
            },
            ScorerDef {
                name: "ProtSSN",
                id: "protssn",
                kind: Structure,
            },
        ];
        Self { defs }
    }

    pub fn find(&self, name: &str, kind: AnalysisKind) -> Option<&ScorerDef> {
        self.defs.iter().find(|d| d.name == name && d.kind == kind)
    }

    pub fn for_kind(&self, kind: AnalysisKind) -> impl Iterator<Item = &ScorerDef> {
        self.defs.iter().filter(move |d| d.kind == kind)
    }

    pub fn executable_path(&self, def: &ScorerDef, scorers_dir: &Path) -> PathBuf {
        scorers_dir.join(def.id)
    }
}

/// A supported AI summarization provider.
#[derive(Debug, Clone, Copy)]
pub struct ProviderDef {
    pub name: &'static str,
    pub api_base: &'static str,
    pub model: &'static str,
    pub key_env: &'static str,
}

#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    defs: Vec<ProviderDef>,
}

impl ProviderRegistry {
    pub fn builtin() -> Self {
        let defs = vec![ProviderDef {
            name: "DeepSeek",
            api_base: "https://api.deepseek.com/v1",
            model: "deepseek-chat",
            key_env: "DEEPSEEK_API_KEY",
        }];
        Self { defs }
    }

    pub fn find(&self, name: &str) -> Option<&ProviderDef> {
        self.defs.iter().find(|d| d.name == name)
    }
}
