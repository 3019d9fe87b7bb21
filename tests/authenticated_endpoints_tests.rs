mod common;

use base64::{engine::general_purpose, Engine as _};
use bitfinex::exchanges::bitfinex::{
    BitfinexV1Signer, BitfinexV2Signer, DepositRequest, NewOrder, OrderSide, OrderType, V1Endpoint,
    WalletName,
};
use bitfinex::{AccountInfo, ExchangeError, Lenient, OrderPlacer};
use common::{
    authenticated_connector, header_value, public_connector, setup_mock_server, TEST_API_KEY,
    TEST_SECRET,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tokio_test::assert_ok;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

fn decoded_payload(request: &wiremock::Request) -> Value {
    let encoded = header_value(request, "x-bfx-payload");
    let json = general_purpose::STANDARD
        .decode(encoded)
        .expect("payload header is base64");
    serde_json::from_slice(&json).expect("payload is JSON")
}

#[tokio::test]
async fn test_active_orders_v2_signature() {
    let server = setup_mock_server().await;
    let body = json!([[123_456, null, 1, "tBTCUSD"]]);
    Mock::given(method("POST"))
        .and(path("/v2/auth/r/orders"))
        .and(header("bfx-apikey", TEST_API_KEY))
        .and(header("content-type", "application/json"))
        .and(header_exists("bfx-nonce"))
        .and(header_exists("bfx-signature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let connector = authenticated_connector(&server);
    let orders = assert_ok!(connector.active_orders().await);
    assert_eq!(orders, body);

    let requests = server.received_requests().await.expect("recording enabled");
    let request = &requests[0];
    let nonce = header_value(request, "bfx-nonce");
    let sent_body = String::from_utf8(request.body.clone()).unwrap();
    assert_eq!(sent_body, "{}");

    let expected = BitfinexV2Signer::new(TEST_API_KEY.to_string(), TEST_SECRET.to_string())
        .signature("v2/auth/r/orders", &nonce, &sent_body)
        .unwrap();
    assert_eq!(header_value(request, "bfx-signature"), expected);
}

#[tokio::test]
async fn test_v1_endpoints_return_body_unmodified() {
    let server = setup_mock_server().await;
    let read_only = [
        V1Endpoint::AccountInfos,
        V1Endpoint::AccountFees,
        V1Endpoint::Balances,
        V1Endpoint::KeyInfo,
        V1Endpoint::Summary,
    ];
    for (i, endpoint) in read_only.iter().enumerate() {
        Mock::given(method("POST"))
            .and(path(endpoint.path()))
            .and(header("x-bfx-apikey", TEST_API_KEY))
            .and(header_exists("x-bfx-signature"))
            .and(header_exists("x-bfx-payload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "endpoint": i })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let connector = authenticated_connector(&server);
    assert_eq!(assert_ok!(connector.account_infos().await), json!({"endpoint": 0}));
    assert_eq!(assert_ok!(connector.account_fees().await), json!({"endpoint": 1}));
    assert_eq!(assert_ok!(connector.balances().await), json!({"endpoint": 2}));
    assert_eq!(assert_ok!(connector.key_info().await), json!({"endpoint": 3}));
    assert_eq!(assert_ok!(connector.summary().await), json!({"endpoint": 4}));

    let requests = server.received_requests().await.expect("recording enabled");
    let signer = BitfinexV1Signer::new(TEST_API_KEY.to_string(), TEST_SECRET.to_string());
    let mut last_nonce = 0_u64;
    for (request, endpoint) in requests.iter().zip(read_only) {
        let payload = decoded_payload(request);
        assert_eq!(payload["request"], json!(endpoint.path()));

        let nonce: u64 = payload["nonce"].as_str().unwrap().parse().unwrap();
        assert!(nonce > last_nonce);
        last_nonce = nonce;

        let encoded = header_value(request, "x-bfx-payload");
        assert_eq!(
            header_value(request, "x-bfx-signature"),
            signer.signature(&encoded).unwrap()
        );
        assert_eq!(payload, serde_json::from_slice::<Value>(&request.body).unwrap());
    }
}

#[tokio::test]
async fn test_new_order_payload() {
    let server = setup_mock_server().await;
    let body = json!({"id": 448_364_249, "symbol": "btcusd", "is_live": true});
    Mock::given(method("POST"))
        .and(path("/v1/order/new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let connector = authenticated_connector(&server);
    let order = NewOrder::new(
        "btcusd",
        Decimal::new(10, 1),
        Decimal::new(1000, 1),
        OrderSide::Buy,
        OrderType::Limit,
    );
    assert_eq!(assert_ok!(connector.new_order(&order).await), body);

    let requests = server.received_requests().await.expect("recording enabled");
    let payload = decoded_payload(&requests[0]);
    assert_eq!(payload["request"], json!("/v1/order/new"));
    assert_eq!(payload["symbol"], json!("btcusd"));
    assert_eq!(payload["amount"], json!("1.0"));
    assert_eq!(payload["price"], json!("100.0"));
    assert_eq!(payload["side"], json!("buy"));
    assert_eq!(payload["type"], json!("limit"));
    assert_eq!(payload["exchange"], json!("bitfinex"));
    assert_eq!(payload["use_all_available"], json!(0));
    assert_eq!(payload["ocoorder"], json!(false));
    assert_eq!(payload["buy_price_oco"], json!(0));
    assert_eq!(payload["sell_price_oco"], json!(0));
}

#[tokio::test]
async fn test_cancel_order_and_deposit_payloads() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v1/order/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 446_915_287})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/deposit/new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
        .mount(&server)
        .await;

    let connector = authenticated_connector(&server);
    assert_ok!(connector.cancel_order(446_915_287).await);
    let deposit = DepositRequest {
        method: "bitcoin".to_string(),
        wallet_name: WalletName::Exchange,
        renew: false,
    };
    assert_eq!(
        assert_ok!(connector.new_deposit(&deposit).await),
        json!({"result": "success"})
    );

    let requests = server.received_requests().await.expect("recording enabled");
    let cancel = decoded_payload(&requests[0]);
    assert_eq!(cancel["order_id"], json!(446_915_287));

    let deposit = decoded_payload(&requests[1]);
    assert_eq!(deposit["method"], json!("bitcoin"));
    assert_eq!(deposit["wallet_name"], json!("exchange"));
    assert_eq!(deposit["renew"], json!(0));
}

#[tokio::test]
async fn test_rejected_signature_is_structured_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/auth/r/orders"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"["error",10100,"apikey: invalid"]"#),
        )
        .mount(&server)
        .await;

    let connector = authenticated_connector(&server);
    match connector.active_orders().await {
        Err(ExchangeError::AuthenticationRejected { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.contains("apikey: invalid"));
        }
        other => panic!("unexpected result: {other:?}"),
    }

    // Compatibility mode: failure becomes the empty sentinel
    assert_eq!(connector.active_orders().await.lenient(), None);
}

#[tokio::test]
async fn test_rate_limit_is_classified() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v1/balances"))
        .respond_with(ResponseTemplate::new(429).set_body_string("ERR_RATE_LIMIT"))
        .mount(&server)
        .await;

    let connector = authenticated_connector(&server);
    let err = connector.balances().await.unwrap_err();
    assert!(matches!(err, ExchangeError::RateLimitExceeded(ref body) if body == "ERR_RATE_LIMIT"));
    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn test_missing_credentials_never_hit_the_network() {
    let server = setup_mock_server().await;
    let connector = public_connector(&server);

    assert!(matches!(
        connector.active_orders().await,
        Err(ExchangeError::AuthError(_))
    ));
    assert!(matches!(
        connector.balances().await,
        Err(ExchangeError::AuthError(_))
    ));

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}
