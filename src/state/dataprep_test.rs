use super::*;
use std::collections::BTreeMap;

// =============================================================
// SamplerMethod
// =============================================================

#[test]
fn sampler_wire_names_round_trip() {
    for method in SamplerMethod::ALL {
        assert_eq!(SamplerMethod::parse(method.as_str()), Some(method));
    }
}

#[test]
fn sampler_parse_rejects_unknown_values() {
    assert_eq!(SamplerMethod::parse("systematic"), None);
    assert_eq!(SamplerMethod::parse("FIRST"), None);
    assert_eq!(SamplerMethod::parse(""), None);
}

#[test]
fn sampler_resolve_defaults_to_first_for_missing_or_invalid() {
    assert_eq!(SamplerMethod::resolve(None), SamplerMethod::First);
    assert_eq!(SamplerMethod::resolve(Some("systematic")), SamplerMethod::First);
    assert_eq!(SamplerMethod::resolve(Some("poisson")), SamplerMethod::Poisson);
}

#[test]
fn sampler_labels_are_distinct() {
    let labels: Vec<_> = SamplerMethod::ALL.iter().map(|m| m.label()).collect();
    let mut deduped = labels.clone();
    deduped.dedup();
    assert_eq!(labels.len(), deduped.len());
}

// =============================================================
// DataPrepState
// =============================================================

fn workspace_info(id: &str, pairs: &[(&str, &str)]) -> WorkspaceInfo {
    WorkspaceInfo {
        id: id.to_owned(),
        name: Some("logs sample".to_owned()),
        properties: pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[test]
fn apply_workspace_adopts_properties_and_clears_error() {
    let mut state = DataPrepState::default();
    state.set_error("stale".to_owned());

    state.apply_workspace(workspace_info("ws-1", &[("path", "/data/events.csv"), ("sampler", "bernoulli")]));

    assert_eq!(state.workspace_id.as_deref(), Some("ws-1"));
    assert_eq!(state.path().as_deref(), Some("/data/events.csv"));
    assert_eq!(state.sampler().as_deref(), Some("bernoulli"));
    assert!(state.error.is_none());
}

#[test]
fn apply_workspace_tolerates_missing_properties() {
    let mut state = DataPrepState::default();

    state.apply_workspace(workspace_info("ws-2", &[]));

    assert!(state.path().is_none());
    assert!(state.sampler().is_none());
}

#[test]
fn set_and_clear_error_round_trip() {
    let mut state = DataPrepState::default();
    state.set_error("read failed".to_owned());
    assert_eq!(state.error.as_deref(), Some("read failed"));

    state.clear_error();
    assert!(state.error.is_none());
}
