use super::*;

fn row(name: &str, status: ServiceHealth, provisioned: Option<u32>, requested: Option<u32>) -> ServiceStatus {
    ServiceStatus {
        name: name.to_owned(),
        status,
        provisioned,
        requested,
    }
}

// =============================================================
// ServiceHealth
// =============================================================

#[test]
fn health_parses_backend_strings() {
    assert_eq!(ServiceHealth::parse("OK"), ServiceHealth::Ok);
    assert_eq!(ServiceHealth::parse("NOTOK"), ServiceHealth::NotOk);
}

#[test]
fn health_parse_maps_unrecognized_to_unknown() {
    assert_eq!(ServiceHealth::parse("ok"), ServiceHealth::Unknown);
    assert_eq!(ServiceHealth::parse(""), ServiceHealth::Unknown);
    assert_eq!(ServiceHealth::parse("DEGRADED"), ServiceHealth::Unknown);
}

#[test]
fn health_default_is_unknown() {
    assert_eq!(ServiceHealth::default(), ServiceHealth::Unknown);
}

// =============================================================
// SystemServicesState reconciliation
// =============================================================

#[test]
fn adopt_bulk_replaces_rows_when_different() {
    let mut state = SystemServicesState::default();
    let u1 = vec![row("metrics", ServiceHealth::Ok, Some(1), Some(1))];
    let u2 = vec![
        row("metrics", ServiceHealth::NotOk, Some(1), Some(2)),
        row("runtime", ServiceHealth::Ok, Some(1), Some(1)),
    ];

    assert!(state.adopt_bulk(u1));
    assert!(state.adopt_bulk(u2.clone()));
    assert_eq!(state.services, u2);
}

#[test]
fn adopt_bulk_is_a_no_op_for_deep_equal_snapshots() {
    let u1 = vec![row("metrics", ServiceHealth::Ok, Some(1), Some(1))];
    let mut state = SystemServicesState { services: u1.clone() };

    assert!(!state.adopt_bulk(u1.clone()));
    assert_eq!(state.services, u1);
}

#[test]
fn merge_poll_updates_status_in_place_preserving_counts_and_order() {
    let mut state = SystemServicesState {
        services: vec![
            row("appfabric", ServiceHealth::Ok, Some(1), Some(1)),
            row("metrics", ServiceHealth::Unknown, Some(2), Some(3)),
        ],
    };

    state.merge_poll("metrics", ServiceHealth::Ok);

    assert_eq!(state.services[0].name, "appfabric");
    assert_eq!(state.services[1].name, "metrics");
    assert_eq!(state.services[1].status, ServiceHealth::Ok);
    assert_eq!(state.services[1].provisioned, Some(2));
    assert_eq!(state.services[1].requested, Some(3));
}

#[test]
fn merge_poll_appends_unknown_names_without_counts() {
    let mut state = SystemServicesState::default();

    state.merge_poll("transaction", ServiceHealth::NotOk);

    assert_eq!(state.services.len(), 1);
    assert_eq!(state.services[0], ServiceStatus::from_poll("transaction", ServiceHealth::NotOk));
    assert!(state.services[0].provisioned.is_none());
    assert!(state.services[0].requested.is_none());
}

#[test]
fn later_bulk_wins_over_earlier_poll_merges() {
    let mut state = SystemServicesState::default();
    state.merge_poll("metrics", ServiceHealth::NotOk);

    let bulk = vec![row("metrics", ServiceHealth::Ok, Some(1), Some(1))];
    assert!(state.adopt_bulk(bulk.clone()));
    assert_eq!(state.services, bulk);
}

// =============================================================
// ServicesUiState
// =============================================================

#[test]
fn begin_edit_is_exclusive_across_rows() {
    let mut ui = ServicesUiState::default();
    ui.begin_edit("metrics");
    assert!(ui.is_editing("metrics"));

    ui.begin_edit("runtime");
    assert!(ui.is_editing("runtime"));
    assert!(!ui.is_editing("metrics"));
}

#[test]
fn clear_edit_leaves_no_row_editing() {
    let mut ui = ServicesUiState::default();
    ui.begin_edit("metrics");
    ui.clear_edit();
    assert!(ui.editing.is_none());
}

#[test]
fn fail_instances_clears_edit_and_raises_error_alert() {
    let mut ui = ServicesUiState::default();
    ui.begin_edit("metrics");

    ui.fail_instances("requested instances out of range".to_owned());

    assert!(ui.editing.is_none());
    let alert = ui.alert.expect("alert should be raised");
    assert_eq!(alert.kind, AlertKind::Error);
    assert_eq!(alert.kind.as_str(), "error");
    assert_eq!(alert.message, "requested instances out of range");
}

#[test]
fn dismiss_alert_resets_entirely() {
    let mut ui = ServicesUiState::default();
    ui.fail_instances("boom".to_owned());

    ui.dismiss_alert();

    assert_eq!(ui, ServicesUiState::default());
}
