//! End-to-end sweep against a mocked MVM API.

use epr_audit::{CheckRegistry, Sweep, SweepSummary, Termination};
use epr_core::SellerId;
use epr_mvm::{CustomFieldIds, MvmClient, MvmError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIELDS: CustomFieldIds = CustomFieldIds {
    fr_epr_reg_number: 22305,
    de_lucid_reg_number: 22316,
};

fn test_client(base_url: &str) -> MvmClient {
    MvmClient::new(base_url, "test-token", 5, FIELDS).expect("client construction should not fail")
}

async fn mount_page(server: &MockServer, page: u32, sellers: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/sellers.json"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sellers": sellers })))
        .mount(server)
        .await;
}

async fn mount_shipping(server: &MockServer, seller_id: i64, shipping_id: i64, countries: &[&str]) {
    Mock::given(method("GET"))
        .and(path(format!("/feature-apps/shipping/{seller_id}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shipping": { "available_shipping": [ { "seller_shipping_id": shipping_id } ] }
        })))
        .mount(server)
        .await;

    let ranges: Vec<_> = countries
        .iter()
        .map(|c| json!({ "country_iso_code": c }))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!(
            "/feature-apps/shipping/range-price/{seller_id}.json"
        )))
        .and(query_param("seller_shipping_id", shipping_id.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "range-price": { "country_ranges": ranges } })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn sweep_reports_fr_violation_for_unregistered_french_seller() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        1,
        json!([{
            "id": 42,
            "id_country": { "iso_code": "DE" },
            "custom_fields": r#"{"22316": {"value": "X"}}"#
        }]),
    )
    .await;
    mount_page(&server, 2, json!([])).await;
    mount_shipping(&server, 42, 7, &["FR"]).await;

    let client = test_client(&server.uri());
    let registry = CheckRegistry::default();
    let report = Sweep::new(&client, &registry)
        .with_page_size(100)
        .run()
        .await
        .expect("sweep should succeed");

    assert_eq!(report.termination, Termination::Exhausted { empty_page: 2 });
    let result = &report.results[&SellerId(42)];
    assert_eq!(result.checks_passed, ["SellerCanSellInDE"]);
    assert_eq!(result.checks_failed, ["SellerCanSellInFR"]);
    assert_eq!(
        report.summary(),
        SweepSummary {
            analyzed: 1,
            passed: 0,
            failed: 1
        }
    );
}

#[tokio::test]
async fn sweep_deduplicates_overlapping_pages() {
    let server = MockServer::start().await;

    let seller_1 = json!({ "id": 1, "custom_fields": "[]" });
    let seller_2 = json!({ "id": 2, "custom_fields": "[]" });
    mount_page(&server, 1, json!([seller_1, seller_2.clone()])).await;
    mount_page(&server, 2, json!([seller_2])).await;
    mount_page(&server, 3, json!([])).await;

    for id in [1, 2] {
        Mock::given(method("GET"))
            .and(path(format!("/feature-apps/shipping/{id}.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = test_client(&server.uri());
    let registry = CheckRegistry::default();
    let report = Sweep::new(&client, &registry).run().await.unwrap();

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.summary().passed, 2);
}

#[tokio::test]
async fn sweep_aborts_when_listing_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sellers.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let registry = CheckRegistry::default();
    let result = Sweep::new(&client, &registry).run().await;

    assert!(
        matches!(result, Err(MvmError::UnexpectedStatus { status: 503, .. })),
        "expected 503 to abort the sweep"
    );
}
