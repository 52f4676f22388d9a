use super::*;

#[test]
fn service_log_path_targets_the_service() {
    assert_eq!(service_log_path("metrics"), "/api/system/services/metrics/logs");
}

#[test]
fn service_log_url_encodes_the_backend_path() {
    assert_eq!(
        service_log_url("metrics"),
        "/downloadLogs?type=raw&backendUrl=%2Fapi%2Fsystem%2Fservices%2Fmetrics%2Flogs"
    );
}

#[test]
fn service_log_url_keeps_dotted_names_intact() {
    assert_eq!(
        service_log_url("dataset.executor"),
        "/downloadLogs?type=raw&backendUrl=%2Fapi%2Fsystem%2Fservices%2Fdataset.executor%2Flogs"
    );
}
