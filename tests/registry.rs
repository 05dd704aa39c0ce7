use std::path::Path;

use kira_mutscan::registry::{ProviderRegistry, ScorerRegistry};
use kira_mutscan::schema::v1::AnalysisKind;

#[test]
fn scorer_lookup_is_kind_scoped() {
    let registry = ScorerRegistry::builtin();
    assert!(registry.find("ESM-1v", AnalysisKind::Sequence).is_some());
    assert!(registry.find("ESM-1v", AnalysisKind::Structure).is_none());
    assert!(registry.find("SaProt", AnalysisKind::Structure).is_some());
}

#[test]
fn executable_path_joins_scorers_dir_and_id() {
    let registry = ScorerRegistry::builtin();
    let def = registry.find("MIF-ST", AnalysisKind::Structure).unwrap();
    let path = registry.executable_path(def, Path::new("/opt/scorers"));
    assert_eq!(path, Path::new("/opt/scorers/mifst"));
}

#[test]
fn provider_registry_carries_the_deepseek_contract() {
    let registry = ProviderRegistry::builtin();
    let provider = registry.find("DeepSeek").unwrap();
    assert_eq!(provider.api_base, "https://api.deepseek.com/v1");
    assert_eq!(provider.model, "deepseek-chat");
    assert_eq!(provider.key_env, "DEEPSEEK_API_KEY");
    assert!(registry.find("Unknown").is_none());
}
