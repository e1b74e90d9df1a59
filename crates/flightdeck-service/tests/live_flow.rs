use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use flightdeck_service::protocol::JsonRpcRequest;
use flightdeck_service::FlightDeckServer;
use serde_json::{json, Value};

static TEMP_SEQ: AtomicU64 = AtomicU64::new(1);

fn temp_db_path() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    let pid = std::process::id();
    std::env::temp_dir()
        .join(format!("flightdeck-live-test-{pid}-{now}-{seq}.json"))
        .display()
        .to_string()
}

fn call(server: &FlightDeckServer, id: u64, method: &str, params: Value) -> Value {
    let req = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(id)),
        method: method.to_string(),
        params,
    };
    let resp = server.handle_request(req);
    assert!(resp.error.is_none(), "{method} failed: {:?}", resp.error);
    resp.result.expect("result")
}

#[test]
fn live_status_starts_inactive() {
    let server = FlightDeckServer::with_db_path(temp_db_path()).expect("server with temp db");

    let result = call(&server, 1, "live/status", Value::Null);
    let status = result.get("status").expect("status");
    assert_eq!(status.get("is_active").and_then(Value::as_bool), Some(false));
    assert_eq!(
        status.get("answered_count").and_then(Value::as_u64),
        Some(0)
    );
}

#[test]
fn update_recomputes_scores_and_suggests_journeys() {
    let server = FlightDeckServer::with_db_path(temp_db_path()).expect("server with temp db");

    let result = call(
        &server,
        1,
        "live/update",
        json!({
            "responses": {"strategy": 80.0},
            "tech_score": 4.0,
            "total_questions": 10
        }),
    );

    let status = result.get("status").expect("status");
    assert_eq!(status.get("is_active").and_then(Value::as_bool), Some(true));
    assert_eq!(
        status.get("answered_count").and_then(Value::as_u64),
        Some(1)
    );
    assert_eq!(
        status.get("current_score").and_then(Value::as_f64),
        Some(80.0)
    );
    assert_eq!(
        status.get("combined_score").and_then(Value::as_f64),
        Some(6.0)
    );
    assert_eq!(result.get("flight_miles").and_then(Value::as_i64), Some(600));
    assert_eq!(
        result
            .get("plane_level")
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str),
        Some("Wide-body Jet")
    );

    let suggestions = result
        .get("suggestions")
        .and_then(Value::as_array)
        .expect("suggestions");
    assert!(!suggestions.is_empty() && suggestions.len() <= 3);
}

#[test]
fn clear_resets_the_board() {
    let server = FlightDeckServer::with_db_path(temp_db_path()).expect("server with temp db");

    call(
        &server,
        1,
        "live/update",
        json!({"responses": {"strategy": 80.0}, "tech_score": 4.0}),
    );
    let cleared = call(&server, 2, "live/clear", Value::Null);
    let status = cleared.get("status").expect("status");
    assert_eq!(status.get("is_active").and_then(Value::as_bool), Some(false));
    assert_eq!(
        status.get("combined_score").and_then(Value::as_f64),
        Some(0.0)
    );
}

#[test]
fn journeys_suggest_honors_points_and_count() {
    let server = FlightDeckServer::with_db_path(temp_db_path()).expect("server with temp db");

    let zero = call(&server, 1, "journeys/suggest", json!({"points": 0}));
    let zero_suggestions = zero
        .get("suggestions")
        .and_then(Value::as_array)
        .expect("suggestions");
    assert_eq!(zero_suggestions.len(), 3);
    assert_eq!(
        zero_suggestions[0].get("id").and_then(Value::as_str),
        Some("manual_to_automated")
    );

    let capped = call(
        &server,
        2,
        "journeys/suggest",
        json!({"points": 400, "max_count": 2}),
    );
    let capped_suggestions = capped
        .get("suggestions")
        .and_then(Value::as_array)
        .expect("suggestions");
    assert!(capped_suggestions.len() <= 2);
}
