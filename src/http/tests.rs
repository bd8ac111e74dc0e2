use std::sync::Arc;

use actix_web::body::to_bytes;
use actix_web::http::{Method, StatusCode, header};
use actix_web::{App, ResponseError, test, web};
use serde_json::{Value, json};
use trust_dns_resolver::error::ResolveError;

use super::ApiError;
use crate::mx::tests::StubResolver;
use crate::mx::{LookupMx, MxRecord};

macro_rules! test_app {
    ($stub:expr) => {{
        let resolver: Arc<dyn LookupMx> = Arc::new($stub);
        test::init_service(
            App::new()
                .wrap(super::cors())
                .app_data(web::Data::from(resolver))
                .configure(super::configure_routes),
        )
        .await
    }};
}

fn refusing_stub() -> StubResolver {
    StubResolver::new(|_| panic!("lookup should not run"))
}

#[actix_web::test]
async fn preflight_is_empty_with_cors_headers() {
    let app = test_app!(refusing_stub());

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/validate")
        .insert_header((header::ORIGIN, "https://shop.example"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn plain_options_is_empty_200() {
    let app = test_app!(refusing_stub());

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/validate")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn options_with_origin_only_is_empty_200_with_cors_headers() {
    let app = test_app!(refusing_stub());

    // Origin but no Access-Control-Request-Method: not preflight-shaped, so
    // the middleware passes it through to the OPTIONS route.
    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/validate")
        .insert_header((header::ORIGIN, "https://shop.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn malformed_json_is_a_400() {
    let app = test_app!(refusing_stub());

    let req = test::TestRequest::post()
        .uri("/validate")
        .set_payload("not json at all")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"valid": false, "error": "No email provided"}));
}

#[actix_web::test]
async fn missing_email_field_is_a_400() {
    let app = test_app!(refusing_stub());

    for payload in [json!({}), json!({"email": 42})] {
        let req = test::TestRequest::post()
            .uri("/validate")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"valid": false, "error": "No email provided"}));
    }
}

#[actix_web::test]
async fn address_without_at_is_invalid_not_an_error() {
    let app = test_app!(refusing_stub());

    let req = test::TestRequest::post()
        .uri("/validate")
        .set_json(json!({"email": "nodomain"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"valid": false}));
}

#[actix_web::test]
async fn domain_with_mx_is_valid() {
    let app = test_app!(StubResolver::new(|domain| {
        assert_eq!(domain, "gmail.com");
        Ok(vec![MxRecord::new(5, "gmail-smtp-in.l.google.com")])
    }));

    let req = test::TestRequest::post()
        .uri("/validate")
        .insert_header((header::ORIGIN, "https://shop.example"))
        .set_json(json!({"email": "user@gmail.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"valid": true}));
}

#[actix_web::test]
async fn no_records_is_invalid() {
    let app = test_app!(StubResolver::new(|_| Ok(Vec::new())));

    let req = test::TestRequest::post()
        .uri("/validate")
        .set_json(json!({"email": "user@example.org"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"valid": false}));
}

#[actix_web::test]
async fn dns_failure_is_invalid_not_an_error() {
    let app = test_app!(StubResolver::new(|_| Err(ResolveError::from("no such domain"))));

    let req = test::TestRequest::post()
        .uri("/validate")
        .set_json(json!({"email": "user@thisdomaindoesnotexist1234567.invalid"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"valid": false}));
}

#[actix_web::test]
async fn internal_error_renders_server_error() {
    let resp = ApiError::Internal.error_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = to_bytes(resp.into_body()).await.expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body, json!({"valid": false, "error": "Server error"}));
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = test_app!(refusing_stub());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}
