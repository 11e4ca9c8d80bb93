use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::notification::mock::RecordingNotificationSender;
use service::service_order::repository::mock::InMemoryServiceOrderRepository;
use tokio::net::TcpListener;

use server::routes;
use server::startup::build_cors;
use server::state::ServerState;

struct TestApp {
    base_url: String,
    notifier: Arc<RecordingNotificationSender>,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let notifier = Arc::new(RecordingNotificationSender::default());
    let state = ServerState::new(Arc::new(InMemoryServiceOrderRepository::default()), notifier.clone());

    let app: Router = routes::build_router(state, build_cors(&[]));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, notifier })
}

fn ana() -> Value {
    json!({
        "clientName": "Ana",
        "phoneNumber": "555",
        "carModel": "Civic",
        "serviceType": "oil change",
        "serviceValue": 49.90
    })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(app.url("/health")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_order_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/service-orders")).json(&ana()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "PENDING");
    assert_eq!(created["messageWasSent"], false);
    assert_eq!(created["paymentMethod"], Value::Null);

    let res = c.put(app.url("/service-orders/1/status?status=COMPLETED")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let completed = res.json::<Value>().await?;
    assert_eq!(completed["status"], "COMPLETED");
    assert_eq!(completed["messageWasSent"], true);

    let res = c.put(app.url("/service-orders/1/payment?paymentMethod=CASH")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let paid = res.json::<Value>().await?;
    assert_eq!(paid["paymentMethod"], "CASH");
    assert_eq!(paid["status"], "COMPLETED");
    assert_eq!(paid["clientName"], "Ana");
    assert_eq!(paid["serviceValue"], 49.90);

    // a second completion does not notify again
    c.put(app.url("/service-orders/1/status?status=COMPLETED")).send().await?;
    assert_eq!(app.notifier.sent().await, vec![1]);

    let listed = c.get(app.url("/service-orders")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], paid);

    let res = c.delete(app.url("/service-orders/1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.bytes().await?.is_empty());
    let listed = c.get(app.url("/service-orders")).send().await?.json::<Vec<Value>>().await?;
    assert!(listed.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_create_forces_pending() -> anyhow::Result<()> {
    let app = start_server().await?;
    let mut body = ana();
    body["status"] = json!("COMPLETED");
    body["messageWasSent"] = json!(true);
    body["id"] = json!(99);

    let created = reqwest::Client::new()
        .post(app.url("/service-orders"))
        .json(&body)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "PENDING");
    assert_eq!(created["messageWasSent"], false);
    assert!(app.notifier.sent().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_missing_order_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.put(app.url("/service-orders/42/status?status=IN_PROGRESS")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Not Found");

    let res = c.put(app.url("/service-orders/42/payment?paymentMethod=PIX")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let listed = c.get(app.url("/service-orders")).send().await?.json::<Vec<Value>>().await?;
    assert!(listed.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_delete_missing_is_ok() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    c.post(app.url("/service-orders")).json(&ana()).send().await?;

    let res = c.delete(app.url("/service-orders/777")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let listed = c.get(app.url("/service-orders")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(listed.len(), 1);
    Ok(())
}

#[tokio::test]
async fn e2e_rejects_unknown_enum_values() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    c.post(app.url("/service-orders")).json(&ana()).send().await?;

    let res = c.put(app.url("/service-orders/1/status?status=DONE")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let res = c.put(app.url("/service-orders/1/payment?paymentMethod=CHEQUE")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let res = c.put(app.url("/service-orders/1/status")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let order = c.get(app.url("/service-orders")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(order[0]["status"], "PENDING");
    Ok(())
}

#[tokio::test]
async fn e2e_export_csv() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    c.post(app.url("/service-orders")).json(&ana()).send().await?;
    c.put(app.url("/service-orders/1/status?status=COMPLETED")).send().await?;

    let res = c.get(app.url("/service-orders/export")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let content_type = res.headers().get("content-type").and_then(|v| v.to_str().ok()).unwrap_or_default().to_string();
    assert!(content_type.starts_with("text/csv"));
    let disposition = res.headers().get("content-disposition").and_then(|v| v.to_str().ok()).unwrap_or_default().to_string();
    assert!(disposition.contains("ordens_servico_"));

    let text = res.text().await?;
    let lines: Vec<&str> = text.trim_start_matches('\u{feff}').lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID,Nome do Cliente"));
    assert_eq!(lines[1], "1,Ana,555,Civic,oil change,49.9,Pronto,,Sim");
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document() -> anyhow::Result<()> {
    let app = start_server().await?;
    let doc = reqwest::get(app.url("/api-docs/openapi.json")).await?.json::<Value>().await?;
    assert!(doc["paths"]["/service-orders/{id}/status"]["put"].is_object());
    Ok(())
}
