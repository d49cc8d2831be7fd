//! HTTP flow tests driving the full router with `oneshot`

use axum::Router;
use axum::body::Body;
use canteen_server::auth::JwtConfig;
use canteen_server::db::DbService;
use canteen_server::orders::NewOrder;
use canteen_server::{Config, ServerState, build_router};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const EMPLOYEE_LINK: &str = "emp-link-test";
const KITCHEN_LINK: &str = "chef-link-test";
const BOUNDARY: &str = "canteen-test-boundary";

struct TestApp {
    _dir: tempfile::TempDir,
    app: Router,
    state: ServerState,
}

async fn setup() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(dir.path().to_string_lossy(), 0);
    config.employee_link = EMPLOYEE_LINK.to_string();
    config.kitchen_link = KITCHEN_LINK.to_string();
    config.menu_assets_dir = dir.path().join("menu").to_string_lossy().to_string();
    config.kitchen_window_hours = 1;
    config.jwt = JwtConfig {
        secret: "integration-test-secret-0123456789abcdef".to_string(),
        expiration_minutes: 60,
        issuer: "canteen-server".to_string(),
        audience: "canteen-clients".to_string(),
    };
    config.ensure_work_dir_structure().unwrap();

    let pool = DbService::in_memory().await.unwrap().pool;
    let state = ServerState::new(config, pool);
    TestApp {
        _dir: dir,
        app: build_router(state.clone()),
        state,
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn raw_request(method: &str, uri: &str, token: Option<&str>, body: &'static str) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    raw_request("GET", uri, token, "")
}

fn employee(path: &str) -> String {
    format!("/api/employee/{EMPLOYEE_LINK}{path}")
}

fn kitchen(path: &str) -> String {
    format!("/api/kitchen/{KITCHEN_LINK}{path}")
}

/// Multipart order form; `voice` is (file name, bytes)
fn order_form(token: &str, fields: &[(&str, &str)], voice: Option<(&str, &[u8])>) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, data)) = voice {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"voice\"; filename=\"{file_name}\"\r\nContent-Type: audio/webm\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(employee("/orders"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap()
}

async fn employee_token(app: &Router, name: &str) -> String {
    let (status, body) = send(
        app,
        json_request("POST", &employee("/session"), None, json!({ "employee_name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "employee");
    assert_eq!(body["employee_name"], name);
    body["token"].as_str().unwrap().to_string()
}

async fn kitchen_token(app: &Router) -> String {
    let (status, body) = send(app, raw_request("POST", &kitchen("/session"), None, "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "kitchen");
    body["token"].as_str().unwrap().to_string()
}

async fn place_tea_order(app: &Router, token: &str) -> u64 {
    let (status, body) = send(
        app,
        order_form(token, &[("order_items_json", r#"[{"name":"Tea","qty":2}]"#)], None),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_u64().unwrap()
}

// ========================================================================
// Access links and sessions
// ========================================================================

#[tokio::test]
async fn test_unknown_link_is_not_found() {
    let t = setup().await;

    let (status, body) = send(
        &t.app,
        json_request(
            "POST",
            "/api/employee/wrong-link/session",
            None,
            json!({ "employee_name": "Priya" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not found");

    // the employee link does not open kitchen routes
    let (status, _) = send(
        &t.app,
        raw_request("POST", &format!("/api/kitchen/{EMPLOYEE_LINK}/session"), None, ""),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_session_required_and_role_enforced() {
    let t = setup().await;

    let (status, _) = send(&t.app, get(&employee("/orders"), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&t.app, get(&employee("/orders"), Some("garbage"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let kitchen_tok = kitchen_token(&t.app).await;
    let (status, _) = send(&t.app, get(&employee("/orders"), Some(&kitchen_tok))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let priya = employee_token(&t.app, "Priya").await;
    let (status, _) = send(&t.app, get(&kitchen("/orders"), Some(&priya))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_employee_session_requires_name() {
    let t = setup().await;
    let (status, body) = send(
        &t.app,
        json_request("POST", &employee("/session"), None, json!({ "employee_name": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please enter your name.");
}

// ========================================================================
// Orders
// ========================================================================

#[tokio::test]
async fn test_create_order_synthesizes_text() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;

    let (status, body) = send(
        &t.app,
        order_form(
            &priya,
            &[
                (
                    "order_items_json",
                    r#"[{"name":"Tea","qty":2},{"name":"Coffee","qty":"1"},{"name":"Juice","qty":0}]"#,
                ),
                ("requirements", "less sugar"),
            ],
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["order_text"], "Tea x2, Coffee x1");
    assert_eq!(body["employee_name"], "Priya");
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["requirements"], "less sugar");
    assert_eq!(body["order_items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_empty_order_rejected() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;

    let (status, body) = send(
        &t.app,
        order_form(&priya, &[("order_items_json", "[]"), ("order_text", " ")], None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4007);
    assert_eq!(body["message"], "Please add at least one item.");
}

#[tokio::test]
async fn test_malformed_item_list_rejected() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;

    let (status, body) = send(
        &t.app,
        order_form(
            &priya,
            &[("order_items_json", "not json"), ("order_text", "Tea x1")],
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert_eq!(body["details"]["field"], "order_items_json");

    let (_, body) = send(&t.app, get(&employee("/orders"), Some(&priya))).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_my_orders_include_mate_orders() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;
    let arjun = employee_token(&t.app, "Arjun").await;

    let own = place_tea_order(&t.app, &priya).await;
    let (status, body) = send(
        &t.app,
        order_form(
            &arjun,
            &[("order_text", "Coffee x1"), ("mate_name", "priya")],
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let shared = body["id"].as_u64().unwrap();

    let (status, body) = send(&t.app, get(&employee("/orders"), Some(&priya))).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![shared, own]);

    let (status, body) = send(
        &t.app,
        get(&employee(&format!("/orders/{own}")), Some(&arjun)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], own);

    let (status, body) = send(&t.app, get(&employee("/orders/999"), Some(&priya))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_cancel_rules_and_ring() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;
    let meera = employee_token(&t.app, "Meera").await;
    let chef = kitchen_token(&t.app).await;
    let id = place_tea_order(&t.app, &priya).await;

    let cancel = employee(&format!("/orders/{id}/cancel"));
    let (status, _) = send(&t.app, raw_request("POST", &cancel, Some(&meera), "")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&t.app, raw_request("POST", &cancel, Some(&priya), "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Cancelled");

    let (status, body) = send(&t.app, get(&kitchen("/rings"), Some(&chef))).await;
    assert_eq!(status, StatusCode::OK);
    let rings = body.as_array().unwrap();
    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0]["message"], format!("Order #{id} cancelled"));

    // a cancelled order is frozen
    let (status, _) = send(
        &t.app,
        json_request(
            "POST",
            &kitchen(&format!("/orders/{id}/status")),
            Some(&chef),
            json!({ "status": "Ready" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cannot_cancel_ready_order() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;
    let chef = kitchen_token(&t.app).await;
    let id = place_tea_order(&t.app, &priya).await;

    let (status, _) = send(
        &t.app,
        json_request(
            "POST",
            &kitchen(&format!("/orders/{id}/status")),
            Some(&chef),
            json!({ "status": "Ready" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &t.app,
        raw_request("POST", &employee(&format!("/orders/{id}/cancel")), Some(&priya), ""),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);
}

// ========================================================================
// Kitchen
// ========================================================================

#[tokio::test]
async fn test_prep_minutes_validation() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;
    let chef = kitchen_token(&t.app).await;
    let id = place_tea_order(&t.app, &priya).await;
    let prep = kitchen(&format!("/orders/{id}/prep"));

    for minutes in [json!(0), json!(241), json!("soon")] {
        let (status, _) = send(
            &t.app,
            json_request("POST", &prep, Some(&chef), json!({ "minutes": minutes })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "minutes = {minutes}");
    }

    let (status, body) = send(
        &t.app,
        json_request("POST", &prep, Some(&chef), json!({ "minutes": "15" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Preparing");
    assert_eq!(body["prep_minutes"], 15);
    assert!(body["prep_started_at"].is_i64());
}

#[tokio::test]
async fn test_cancelled_order_rejects_prep() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;
    let chef = kitchen_token(&t.app).await;
    let id = place_tea_order(&t.app, &priya).await;

    let (status, _) = send(
        &t.app,
        raw_request("POST", &employee(&format!("/orders/{id}/cancel")), Some(&priya), ""),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &t.app,
        json_request(
            "POST",
            &kitchen(&format!("/orders/{id}/prep")),
            Some(&chef),
            json!({ "minutes": 15 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);

    let (_, body) = send(&t.app, get(&employee(&format!("/orders/{id}")), Some(&priya))).await;
    assert_eq!(body["status"], "Cancelled");
    assert!(body["prep_minutes"].is_null());
}

#[tokio::test]
async fn test_wrong_field_type_is_rejected() {
    let t = setup().await;
    let chef = kitchen_token(&t.app).await;

    send(
        &t.app,
        json_request("POST", &kitchen("/lunch-ready"), Some(&chef), json!({ "ready": true })),
    )
    .await;
    let (status, body) = send(
        &t.app,
        json_request("POST", &kitchen("/lunch-ready"), Some(&chef), json!({ "ready": "false" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "ready");

    // the flag is untouched
    let (_, body) = send(&t.app, get(&kitchen("/lunch-ready"), Some(&chef))).await;
    assert_eq!(body["is_ready"], true);
}

#[tokio::test]
async fn test_status_updates() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;
    let chef = kitchen_token(&t.app).await;
    let id = place_tea_order(&t.app, &priya).await;
    let status_uri = kitchen(&format!("/orders/{id}/status"));

    // malformed JSON is an empty payload: missing status
    let (status, body) = send(&t.app, raw_request("POST", &status_uri, Some(&chef), "{oops")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);

    let (status, _) = send(
        &t.app,
        json_request("POST", &status_uri, Some(&chef), json!({ "status": "Cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &t.app,
        json_request("POST", &status_uri, Some(&chef), json!({ "status": "Ready" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["ready_at"].is_i64());

    let (status, body) = send(
        &t.app,
        json_request("POST", &status_uri, Some(&chef), json!({ "status": "Pending" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4005);

    let (status, _) = send(
        &t.app,
        json_request(
            "POST",
            &kitchen("/orders/999/status"),
            Some(&chef),
            json!({ "status": "Ready" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_kitchen_orders_carry_suggested_eta() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;
    let chef = kitchen_token(&t.app).await;
    let first = place_tea_order(&t.app, &priya).await;
    let second = place_tea_order(&t.app, &priya).await;

    let (status, body) = send(&t.app, get(&kitchen("/orders"), Some(&chef))).await;
    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["id"], second);
    assert_eq!(orders[1]["id"], first);
    // no completed history yet
    assert!(orders.iter().all(|o| o["suggested_eta"].is_null()));
}

#[tokio::test]
async fn test_voice_message_lifecycle() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;
    let chef = kitchen_token(&t.app).await;

    let (status, body) = send(
        &t.app,
        order_form(&priya, &[], Some(("note.webm", b"voice-bytes"))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_u64().unwrap();
    let voice_ref = body["voice_ref"].as_str().unwrap().to_string();
    let voice_path = t.state.config.voice_dir().join(&voice_ref);
    assert!(voice_path.exists());

    let response = t
        .app
        .clone()
        .oneshot(get(&kitchen(&format!("/orders/{id}/voice")), Some(&chef)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/webm");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"voice-bytes");

    let (status, body) = send(
        &t.app,
        json_request(
            "POST",
            &kitchen(&format!("/orders/{id}/status")),
            Some(&chef),
            json!({ "status": "Delivered" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["voice_ref"].is_null());
    assert!(!voice_path.exists());

    let (status, _) = send(
        &t.app,
        get(&kitchen(&format!("/orders/{id}/voice")), Some(&chef)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancel_removes_voice_file() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;

    let (status, body) = send(
        &t.app,
        order_form(&priya, &[("order_text", "Tea x1")], Some(("note.webm", b"voice"))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_u64().unwrap();
    let voice_path = t
        .state
        .config
        .voice_dir()
        .join(body["voice_ref"].as_str().unwrap());
    assert!(voice_path.exists());

    let (status, body) = send(
        &t.app,
        raw_request("POST", &employee(&format!("/orders/{id}/cancel")), Some(&priya), ""),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["voice_ref"].is_null());
    assert!(!voice_path.exists());
}

#[tokio::test]
async fn test_expired_order_voice_file_is_removed() {
    let t = setup().await;
    let chef = kitchen_token(&t.app).await;

    let reference = t
        .state
        .voice
        .save(b"old voice", Some("old.webm"))
        .await
        .unwrap()
        .unwrap();
    let voice_path = t.state.config.voice_dir().join(&reference);
    let thirteen_hours_ago = shared::util::now_millis() - 13 * shared::util::HOUR_MILLIS;
    t.state
        .orders
        .create(
            NewOrder {
                employee_name: "Priya".to_string(),
                order_text: Some("Tea x1".to_string()),
                voice_ref: Some(reference),
                ..Default::default()
            },
            thirteen_hours_ago,
        )
        .unwrap();
    assert!(voice_path.exists());

    let (status, body) = send(&t.app, get(&kitchen("/orders"), Some(&chef))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
    assert!(!voice_path.exists());
}

#[tokio::test]
async fn test_presets_flow() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;
    let chef = kitchen_token(&t.app).await;

    let (status, _) = send(
        &t.app,
        json_request("POST", &kitchen("/presets"), Some(&chef), json!({ "name": "Morning" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &t.app,
        json_request(
            "POST",
            &kitchen("/presets"),
            Some(&chef),
            json!({ "name": "Morning", "order_text": "Tea x1", "requirements": "hot" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, body) = send(&t.app, get(&employee("/presets"), Some(&priya))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Morning");
}

#[tokio::test]
async fn test_menu_availability() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;
    let chef = kitchen_token(&t.app).await;

    let (status, _) = send(
        &t.app,
        json_request(
            "POST",
            &kitchen("/menu/availability"),
            Some(&chef),
            json!({ "item_name": " ", "available": false }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &t.app,
        json_request(
            "POST",
            &kitchen("/menu/availability"),
            Some(&chef),
            json!({ "name": "TEA", "available": false }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&t.app, get(&employee("/menu"), Some(&priya))).await;
    assert_eq!(status, StatusCode::OK);
    let items: Vec<&Value> = body
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|c| c["items"].as_array().unwrap())
        .collect();
    let tea = items.iter().find(|i| i["name"] == "Tea").unwrap();
    assert_eq!(tea["available"], false);
    let coffee = items.iter().find(|i| i["name"] == "Coffee").unwrap();
    assert_eq!(coffee["available"], true);
}

#[tokio::test]
async fn test_ring_and_lunch_ready() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;
    let chef = kitchen_token(&t.app).await;

    let (status, body) = send(
        &t.app,
        raw_request("POST", &employee("/ring"), Some(&priya), "not json"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["employee_name"], "Priya");
    assert!(body["message"].is_null());

    let (status, body) = send(&t.app, get(&employee("/lunch-ready"), Some(&priya))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_ready"], false);

    let (status, body) = send(
        &t.app,
        json_request("POST", &kitchen("/lunch-ready"), Some(&chef), json!({ "ready": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_ready"], true);
    assert!(body["updated_at"].is_i64());

    let (_, body) = send(&t.app, get(&employee("/lunch-ready"), Some(&priya))).await;
    assert_eq!(body["is_ready"], true);
}

#[tokio::test]
async fn test_lunch_check_in_flow() {
    let t = setup().await;
    let priya = employee_token(&t.app, "Priya").await;
    let arjun = employee_token(&t.app, "Arjun").await;
    let chef = kitchen_token(&t.app).await;

    let (status, body) = send(
        &t.app,
        json_request("POST", &employee("/lunch"), Some(&priya), json!({ "checked_in": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checked_in"], true);
    assert_eq!(body["count"], 1);

    // checking in twice keeps a single row
    send(
        &t.app,
        json_request("POST", &employee("/lunch"), Some(&priya), json!({ "checked_in": true })),
    )
    .await;
    let (_, body) = send(
        &t.app,
        json_request("POST", &employee("/lunch"), Some(&arjun), json!({ "checked_in": true })),
    )
    .await;
    assert_eq!(body["count"], 2);

    let (status, body) = send(&t.app, get(&kitchen("/lunch"), Some(&chef))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["names"], json!(["Arjun", "Priya"]));
    assert_eq!(body["count"], 2);
    assert!(body["predicted"].is_null());

    // toggle without a body flips the current state
    let (_, body) = send(&t.app, raw_request("POST", &employee("/lunch"), Some(&priya), "")).await;
    assert_eq!(body["checked_in"], false);
    assert_eq!(body["count"], 1);

    let (status, body) = send(&t.app, get(&kitchen("/lunch?date=2020-13-40"), Some(&chef))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7001);

    let (status, body) = send(&t.app, get(&kitchen("/lunch?date=2020-01-06"), Some(&chef))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_health() {
    let t = setup().await;
    let (status, body) = send(&t.app, get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "ok");
}
