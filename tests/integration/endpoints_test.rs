//! Endpoint table and signing tests through the public API

use ftx_rest::auth::{Credentials, RequestSigner};
use ftx_rest::endpoints::{self, ParamLocation, Params, ENDPOINTS};
use ftx_rest::rest::HttpMethod;
use serde_json::json;
use std::sync::Arc;

fn signer() -> RequestSigner {
    let credentials = Credentials::new("key", "T4lPid48QtjNxjLUFOcUZghD7CUJ7sTVsfuvQZF2");
    RequestSigner::new(Arc::new(credentials), "https://ftx.com/api", "FTX").unwrap()
}

/// Fill every placeholder and required parameter with a dummy value
fn dummy_params(endpoint: &endpoints::EndpointDescriptor) -> Params {
    let mut params = Params::new();
    for name in endpoint.placeholders() {
        params.set(name, "x");
    }
    for spec in endpoint.params.iter().filter(|p| p.required) {
        params.set(spec.name, 1);
    }
    params
}

#[test]
fn test_every_endpoint_builds_and_signs() {
    let signer = signer();
    for endpoint in ENDPOINTS {
        let spec = endpoint
            .build_request(&dummy_params(endpoint))
            .unwrap_or_else(|e| panic!("{}: {e}", endpoint.name));
        let signed = signer
            .sign_at(&spec, 1588591511721)
            .unwrap_or_else(|e| panic!("{}: {e}", endpoint.name));

        assert!(signed.url.path().starts_with("/api/"), "{}", endpoint.name);
        assert_eq!(signed.signature.len(), 64, "{}", endpoint.name);
        assert_eq!(
            signed.body.is_some(),
            endpoint.location == ParamLocation::Body,
            "{}",
            endpoint.name
        );
    }
}

#[test]
fn test_orderbook_signature_covers_query() {
    let endpoint = endpoints::find("get_orderbook").unwrap();
    let spec = endpoint
        .build_request(&Params::new().with("market_name", "BTC-PERP").with("depth", 20))
        .unwrap();
    let signed = signer().sign_at(&spec, 1588591511721).unwrap();

    assert_eq!(signed.method, HttpMethod::Get);
    assert_eq!(
        signed.path_and_query(),
        "/api/markets/BTC-PERP/orderbook?depth=20"
    );
}

#[test]
fn test_known_order_signature() {
    let endpoint = endpoints::find("place_order").unwrap();
    let params = Params::new()
        .with("market", "BTC-PERP")
        .with("side", "buy")
        .with("price", 8500)
        .with("type", "limit")
        .with("size", 1)
        .with("reduceOnly", false)
        .with("ioc", false)
        .with("postOnly", false);
    let spec = endpoint.build_request(&params).unwrap();
    let signed = signer().sign_at(&spec, 1588591856950).unwrap();

    assert_eq!(
        signed.body.as_deref(),
        Some(
            br#"{"ioc":false,"market":"BTC-PERP","postOnly":false,"price":8500,"reduceOnly":false,"side":"buy","size":1,"type":"limit"}"#
                .as_slice()
        )
    );
    assert_eq!(
        signed.signature,
        "9d61c9ad6b525b5d4006cecc68453e2613e87b48599ba7e1d6b8bf0dd957f967"
    );
}

#[test]
fn test_bulk_cancel_sends_array_body() {
    let endpoint = endpoints::find("bulk_cancel_orders").unwrap();
    let spec = endpoint
        .build_request(&Params::new().with("orderIds", json!([1, 2, 3])))
        .unwrap();

    assert_eq!(spec.method, HttpMethod::Delete);
    assert_eq!(spec.body.unwrap()["orderIds"], json!([1, 2, 3]));
}

#[test]
fn test_groups_in_table_order() {
    let groups = endpoints::groups();
    assert_eq!(groups[0], "Account");
    assert_eq!(groups.last(), Some(&"Wallet"));
    assert!(endpoints::in_group("spot margin").all(|e| e.group == "Spot Margin"));
}
