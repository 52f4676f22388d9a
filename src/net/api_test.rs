use super::*;

#[test]
fn service_status_endpoint_formats_expected_path() {
    assert_eq!(service_status_endpoint("metrics.processor"), "/api/system/services/metrics.processor/status");
}

#[test]
fn service_instances_endpoint_formats_expected_path() {
    assert_eq!(service_instances_endpoint("runtime"), "/api/system/services/runtime/instances");
}

#[test]
fn workspace_endpoint_formats_expected_path() {
    assert_eq!(workspace_endpoint("ws-42"), "/api/dataprep/workspaces/ws-42");
}

#[test]
fn failure_messages_format_status() {
    assert_eq!(services_fetch_failed_message(502), "services fetch failed: 502");
    assert_eq!(status_check_failed_message(404), "status check failed: 404");
    assert_eq!(instances_update_failed_message(400), "instances update failed: 400");
    assert_eq!(sample_read_failed_message(503), "sample read failed: 503");
    assert_eq!(workspace_fetch_failed_message(500), "workspace fetch failed: 500");
}

#[test]
fn error_message_from_body_prefers_server_message() {
    let body = r#"{ "message": "instances must be at least 1" }"#;
    assert_eq!(
        error_message_from_body(body, "instances update failed: 400".to_owned()),
        "instances must be at least 1"
    );
}

#[test]
fn error_message_from_body_falls_back_for_opaque_bodies() {
    assert_eq!(
        error_message_from_body("<html>Bad Gateway</html>", "instances update failed: 502".to_owned()),
        "instances update failed: 502"
    );
    assert_eq!(
        error_message_from_body(r#"{ "message": "" }"#, "instances update failed: 400".to_owned()),
        "instances update failed: 400"
    );
}

#[test]
fn sample_query_pairs_carry_fixed_read_parameters() {
    let pairs = sample_query_pairs("default", "/data/events.csv", "poisson");
    assert_eq!(
        pairs,
        vec![
            ("namespace", "default".to_owned()),
            ("path", "/data/events.csv".to_owned()),
            ("lines", "10000".to_owned()),
            ("fraction", "0.35".to_owned()),
            ("sampler", "poisson".to_owned()),
        ]
    );
}
