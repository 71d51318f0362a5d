use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;

async fn settlement(headers: HeaderMap) -> impl IntoResponse {
    let signed_in = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("sessionid=s3cret"));
    if !signed_in {
        return (StatusCode::UNAUTHORIZED, Json(json!({})));
    }
    (
        StatusCode::OK,
        Json(json!({
            "context": {
                "skus": [
                    {"id": 1, "name": "Mug", "price": "10.00", "count": 2},
                    {"id": 2, "name": "Tea", "price": "5.50", "count": 1}
                ],
                "freight": "3",
                "addresses": [{"receiver": "Li", "city": "Beijing"}]
            }
        })),
    )
}

async fn commit() -> impl IntoResponse {
    Json(json!({"order_id": 8675309}))
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/orders/settlement/", get(settlement))
        .route("/orders/commit/", post(commit));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn checkout(host: &str, storage: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("storefront-checkout"));
    cmd.arg("--host").arg(host).arg("--storage-dir").arg(storage);
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_settlement_prints_csv() {
    let host = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();

    checkout(&host, dir.path())
        .args(["login-cookie", "s3cret", "--username", "alice"])
        .assert()
        .success();

    checkout(&host, dir.path())
        .arg("settlement")
        .assert()
        .success()
        .stdout(predicate::str::contains("sku,name,price,count,amount"))
        .stdout(predicate::str::contains("1,Mug,10.00,2,20.00"))
        .stdout(predicate::str::contains("3,25.50,3.00,28.50"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_settlement_without_session_redirects() {
    let host = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();

    checkout(&host, dir.path())
        .arg("settlement")
        .assert()
        .success()
        .stdout(predicate::str::contains("navigate: /login.html?next=/cart.html"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_submit_navigates_to_success_page() {
    let host = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();

    checkout(&host, dir.path())
        .args(["login-cookie", "s3cret"])
        .assert()
        .success();

    checkout(&host, dir.path())
        .args(["submit", "--address", "0", "--pay-method", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "navigate: /order_success.html?order_id=8675309&amount=28.50&pay=2",
        ));
}

#[test]
fn test_cli_rejects_unknown_pay_method() {
    let dir = tempfile::tempdir().unwrap();
    checkout("http://127.0.0.1:9", dir.path())
        .args(["submit", "--pay-method", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown payment method: 7"));
}

#[test]
fn test_cli_logout_clears_storage() {
    let dir = tempfile::tempdir().unwrap();

    checkout("http://127.0.0.1:9", dir.path())
        .args(["login-cookie", "abc", "--username", "bob"])
        .assert()
        .success();
    assert!(dir.path().join("local.json").exists());

    checkout("http://127.0.0.1:9", dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("navigate: /login.html"));

    assert!(!dir.path().join("local.json").exists());
    assert!(!dir.path().join("session.json").exists());
}
