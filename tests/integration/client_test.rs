//! Client tests against a loopback server

use crate::support::serve_once;
use ftx_rest::config::ClientConfig;
use ftx_rest::rest::TransportError;
use ftx_rest::{Credentials, Params, RestClient, RestError};
use serde_json::json;
use std::time::Duration;

const SECRET: &str = "T4lPid48QtjNxjLUFOcUZghD7CUJ7sTVsfuvQZF2";

fn config(base_url: String) -> ClientConfig {
    ClientConfig {
        base_url,
        ..ClientConfig::default()
    }
}

#[tokio::test]
async fn test_signed_get_on_the_wire() {
    let (base_url, server) =
        serve_once(200, r#"{"success":true,"result":[]}"#, Duration::ZERO).await;
    let client = RestClient::new(&config(base_url), Credentials::new("my-key", SECRET)).unwrap();

    let result = client
        .call("get_fills", &Params::new().with("market", "BTC-PERP"))
        .await
        .unwrap();
    assert_eq!(result, json!([]));

    let request = server.await.unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/api/fills?market=BTC-PERP");
    assert_eq!(request.header("FTX-KEY"), Some("my-key"));
    assert!(request.header("FTX-SUBACCOUNT").is_none());
    assert!(request.body.is_empty());

    let ts: i64 = request.header("FTX-TS").unwrap().parse().unwrap();
    let expected = Credentials::new("my-key", SECRET)
        .sign(ts, "GET", "/api/fills?market=BTC-PERP", None)
        .unwrap();
    assert_eq!(request.header("FTX-SIGN"), Some(expected.as_str()));
}

#[tokio::test]
async fn test_signed_post_body_matches_signature() {
    let (base_url, server) =
        serve_once(200, r#"{"success":true,"result":{"id":9596912}}"#, Duration::ZERO).await;
    let credentials = Credentials::new("my-key", SECRET).with_subaccount("alpha beta");
    let client = RestClient::new(&config(base_url), credentials).unwrap();

    let params = Params::new()
        .with("market", "XRP-PERP")
        .with("side", "sell")
        .with("price", 0.306525)
        .with("type", "limit")
        .with("size", 31431)
        .with("clientId", json!(null));
    let result = client.call("place_order", &params).await.unwrap();
    assert_eq!(result["id"], json!(9596912));

    let request = server.await.unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.target, "/api/orders");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("FTX-SUBACCOUNT"), Some("alpha%20beta"));

    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body["market"], json!("XRP-PERP"));
    assert!(body.get("clientId").is_none());

    let ts: i64 = request.header("FTX-TS").unwrap().parse().unwrap();
    let expected = Credentials::new("my-key", SECRET)
        .sign(ts, "POST", "/api/orders", Some(request.body.as_slice()))
        .unwrap();
    assert_eq!(request.header("FTX-SIGN"), Some(expected.as_str()));
}

#[tokio::test]
async fn test_path_placeholder_escaped_on_the_wire() {
    let (base_url, server) =
        serve_once(200, r#"{"success":true,"result":"Order queued for cancellation"}"#, Duration::ZERO)
            .await;
    let client = RestClient::new(&config(base_url), Credentials::new("k", SECRET)).unwrap();

    client
        .call(
            "cancel_order_by_client_id",
            &Params::new().with("client_order_id", "a b/c"),
        )
        .await
        .unwrap();

    let request = server.await.unwrap();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.target, "/api/orders/by_client_id/a%20b%2Fc");
}

#[tokio::test]
async fn test_non_json_503() {
    let (base_url, _server) = serve_once(503, "Service Unavailable", Duration::ZERO).await;
    let client = RestClient::new(&config(base_url), Credentials::new("k", SECRET)).unwrap();

    let err = client.call("get_markets", &Params::new()).await.unwrap_err();
    assert_eq!(
        err,
        RestError::Transport(TransportError::InvalidBody {
            status: 503,
            body: "Service Unavailable".to_string(),
        })
    );
}

#[tokio::test]
async fn test_api_error_envelope() {
    let (base_url, _server) =
        serve_once(400, r#"{"success":false,"error":"Not enough balances"}"#, Duration::ZERO).await;
    let client = RestClient::new(&config(base_url), Credentials::new("k", SECRET)).unwrap();

    let err = client
        .call("request_withdrawal", &Params::new().with("coin", "USD").with("size", 10).with("address", "x"))
        .await
        .unwrap_err();
    assert_eq!(err, RestError::api("Not enough balances"));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let (base_url, _server) =
        serve_once(200, r#"{"success":true}"#, Duration::from_secs(5)).await;
    let client = RestClient::new(&config(base_url), Credentials::new("k", SECRET))
        .unwrap()
        .with_timeout(Duration::from_millis(100));

    let err = client.call("get_markets", &Params::new()).await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RestClient::new(
        &config(format!("http://{addr}/api/")),
        Credentials::new("k", SECRET),
    )
    .unwrap();

    let err = client.call("get_markets", &Params::new()).await.unwrap_err();
    assert!(matches!(
        err,
        RestError::Transport(TransportError::Network { status: None, .. })
    ));
}
