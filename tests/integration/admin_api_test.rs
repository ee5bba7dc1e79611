//! HTTP tests for the admin deduction endpoints

use actix_web::{http::header, test, App};
use base64::{engine::general_purpose::STANDARD, Engine};
use incometax::app::{self, AppState};
use incometax::middleware::AdminCredentials;
use incometax::taxes::InMemoryDeductionStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::str::FromStr;

/// Response amounts keep their two-decimal literal, so compare numerically
fn amount(value: &Value) -> Decimal {
    Decimal::from_str(&value.to_string()).unwrap()
}

fn state(store: &InMemoryDeductionStore) -> AppState {
    let credentials = AdminCredentials::new("adminTax", "admin!").unwrap();
    AppState::in_memory(store.clone(), credentials)
}

fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
}

fn admin_request(path: &str, value: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri(path)
        .insert_header((header::AUTHORIZATION, basic_auth("adminTax", "admin!")))
        .set_json(json!({ "amount": value }))
}

#[actix_web::test]
async fn test_update_personal_deduction() {
    let store = InMemoryDeductionStore::with_defaults();
    let app = test::init_service(App::new().configure(app::configure(state(&store)))).await;

    let req = admin_request("/admin/deductions/personal", json!(70000.0)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(amount(&body["personalDeduction"]), dec!(70000));
}

#[actix_web::test]
async fn test_update_kreceipt_deduction() {
    let store = InMemoryDeductionStore::with_defaults();
    let app = test::init_service(App::new().configure(app::configure(state(&store)))).await;

    let req = admin_request("/admin/deductions/k-receipt", json!(70000.0)).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(amount(&body["kReceipt"]), dec!(70000));
}

#[actix_web::test]
async fn test_amount_above_ceiling_is_rejected() {
    let store = InMemoryDeductionStore::with_defaults();
    let app = test::init_service(App::new().configure(app::configure(state(&store)))).await;

    let req = admin_request("/admin/deductions/personal", json!(100001.0)).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_missing_amount_is_rejected() {
    let store = InMemoryDeductionStore::with_defaults();
    let app = test::init_service(App::new().configure(app::configure(state(&store)))).await;

    let req = test::TestRequest::post()
        .uri("/admin/deductions/personal")
        .insert_header((header::AUTHORIZATION, basic_auth("adminTax", "admin!")))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_wrong_password_is_unauthorized() {
    let store = InMemoryDeductionStore::with_defaults();
    let app = test::init_service(App::new().configure(app::configure(state(&store)))).await;

    let req = test::TestRequest::post()
        .uri("/admin/deductions/personal")
        .insert_header((header::AUTHORIZATION, basic_auth("adminTax", "wrong")))
        .set_json(json!({ "amount": 70000.0 }))
        .to_request();
    let err = test::try_call_service(&app, req).await.unwrap_err();

    assert_eq!(err.as_response_error().status_code(), 401);
}

#[actix_web::test]
async fn test_missing_credentials_are_unauthorized() {
    let store = InMemoryDeductionStore::with_defaults();
    let app = test::init_service(App::new().configure(app::configure(state(&store)))).await;

    let req = test::TestRequest::post()
        .uri("/admin/deductions/k-receipt")
        .set_json(json!({ "amount": 70000.0 }))
        .to_request();
    let err = test::try_call_service(&app, req).await.unwrap_err();

    assert_eq!(err.as_response_error().status_code(), 401);
}

#[actix_web::test]
async fn test_updated_personal_deduction_applies_to_next_calculation() {
    let store = InMemoryDeductionStore::with_defaults();
    let app = test::init_service(App::new().configure(app::configure(state(&store)))).await;

    let req = admin_request("/admin/deductions/personal", json!(100000.0)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::post()
        .uri("/tax/calculations")
        .set_json(json!({ "totalIncome": 500000.0 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    // 500000 - 100000 = 400000
    assert_eq!(amount(&body["tax"]), dec!(25000));
}

#[actix_web::test]
async fn test_updated_kreceipt_ceiling_caps_allowance() {
    let store = InMemoryDeductionStore::with_defaults();
    let app = test::init_service(App::new().configure(app::configure(state(&store)))).await;

    let req = admin_request("/admin/deductions/k-receipt", json!(20000.0)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::post()
        .uri("/tax/calculations")
        .set_json(json!({
            "totalIncome": 500000.0,
            "allowances": [{ "allowanceType": "k-receipt", "amount": 50000.0 }]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    // 500000 - 60000 - 20000 = 420000
    assert_eq!(amount(&body["tax"]), dec!(27000));
}
