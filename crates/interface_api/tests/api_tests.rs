//! HTTP endpoint tests for interface_api

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_claims::demo::FAILURE_MESSAGE;
use domain_claims::StaticCatalogAdapter;
use interface_api::{config::ApiConfig, create_router};
use test_utils::DemoFixtures;

fn server_with(config: ApiConfig) -> TestServer {
    let app = create_router(Arc::new(StaticCatalogAdapter::new()), config);
    TestServer::new(app).unwrap()
}

fn server() -> TestServer {
    server_with(ApiConfig {
        demo_latency_ms: 0,
        ..ApiConfig::default()
    })
}

fn ids(rows: &Value) -> Vec<&str> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect()
}

// ============================================================================
// Health
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let response = server().get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_data_source() {
        let response = server().get("/health/ready").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["data_source"]["healthy"], true);
        assert_eq!(body["data_source"]["source"], "static-catalog");
    }

    #[tokio::test]
    async fn test_request_id_is_set() {
        let response = server().get("/api/v1/dashboard").await;
        response.assert_status_ok();
        assert!(response.headers().contains_key("x-request-id"));
    }
}

// ============================================================================
// Claims Table and Detail
// ============================================================================

mod claims_tests {
    use super::*;

    #[tokio::test]
    async fn test_default_listing_is_newest_first() {
        let response = server().get("/api/v1/claims").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(ids(&body["rows"]), vec!["CLM-005", "CLM-003", "CLM-001", "CLM-002", "CLM-004"]);
        assert_eq!(body["sort"], json!({ "field": "submission_date", "direction": "desc" }));
        assert_eq!(body["rows"][0]["amount_display"], "Rs 1,53,000");
        assert_eq!(body["rows"][0]["status_badge"]["icon"], "clock");
    }

    #[tokio::test]
    async fn test_sort_and_search() {
        let response = server()
            .get("/api/v1/claims")
            .add_query_param("search", "hmp")
            .add_query_param("sort", "amount")
            .add_query_param("direction", "desc")
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(ids(&body["rows"]), vec!["CLM-005", "CLM-001", "CLM-003"]);
        assert_eq!(body["total"], 3);
    }

    #[tokio::test]
    async fn test_sort_without_direction_is_ascending() {
        let response = server()
            .get("/api/v1/claims")
            .add_query_param("sort", "policyNumber")
            .await;
        let body = response.json::<Value>();
        assert_eq!(body["sort"]["direction"], "asc");
        assert_eq!(body["rows"][0]["policy_number"], "HMP-2024-011");
    }

    #[tokio::test]
    async fn test_unknown_sort_field_is_bad_request() {
        let response = server()
            .get("/api/v1/claims")
            .add_query_param("sort", "channel")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_vehicle_claim_detail() {
        let response = server().get("/api/v1/claims/CLM-002").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["summary"]["type"], "Vehicle");
        assert_eq!(body["summary"]["variance_display"], "+Rs 12,000");
        assert_eq!(body["breakdown"].as_array().unwrap().len(), 5);
        assert_eq!(body["channel_icon"], "smartphone");
    }

    #[tokio::test]
    async fn test_claim_lookup_ignores_case() {
        let response = server().get("/api/v1/claims/clm-001").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["claim"]["id"], "CLM-001");
    }

    #[tokio::test]
    async fn test_missing_claim_is_404() {
        let response = server().get("/api/v1/claims/CLM-999").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "Claim CLM-999 not found");
    }
}

// ============================================================================
// Review Actions
// ============================================================================

mod review_tests {
    use super::*;

    #[tokio::test]
    async fn test_review_returns_notice_without_mutation() {
        let server = server();
        let response = server
            .post("/api/v1/claims/CLM-001/review")
            .json(&json!({ "action": "verify", "comment": "All bills stamped" }))
            .await;
        response.assert_status_ok();
        let notice = response.json::<Value>();
        assert_eq!(notice["title"], "Status Updated");
        assert_eq!(notice["description"], "Claim CLM-001 has been verified.");
        assert_eq!(notice["requested_status"], "Verified");

        let claim = server.get("/api/v1/claims/CLM-001").await.json::<Value>();
        assert_eq!(claim["claim"]["status"], "Pending");
    }

    #[tokio::test]
    async fn test_review_of_missing_claim_is_404() {
        let response = server()
            .post("/api/v1/claims/CLM-999/review")
            .json(&json!({ "action": "send_for_review" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_action_is_rejected() {
        let response = server()
            .post("/api/v1/claims/CLM-001/review")
            .json(&json!({ "action": "approve" }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

// ============================================================================
// Pipeline Board
// ============================================================================

mod pipeline_tests {
    use super::*;

    #[tokio::test]
    async fn test_board_columns() {
        let response = server().get("/api/v1/pipeline").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        let counts: Vec<u64> = body["columns"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["count"].as_u64().unwrap())
            .collect();
        assert_eq!(counts, vec![1, 2, 1, 1, 1]);
        assert_eq!(body["columns"][0]["id"], "received");
        assert_eq!(body["columns"][1]["stage"], "AI Processed");
        assert_eq!(body["filters_active"], false);
    }

    #[tokio::test]
    async fn test_board_filters() {
        let response = server()
            .get("/api/v1/pipeline")
            .add_query_param("source", "portal")
            .add_query_param("type", "vehicle")
            .await;
        let body = response.json::<Value>();
        assert_eq!(body["total"], 2);
        assert_eq!(body["total_claims"], 6);
        assert_eq!(body["filters_active"], true);
        assert_eq!(body["columns"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_all_means_no_filter() {
        let response = server()
            .get("/api/v1/pipeline")
            .add_query_param("source", "all")
            .add_query_param("type", "all")
            .await;
        let body = response.json::<Value>();
        assert_eq!(body["total"], 6);
        assert_eq!(body["filters_active"], false);
    }

    #[tokio::test]
    async fn test_unknown_source_is_bad_request() {
        let response = server()
            .get("/api/v1/pipeline")
            .add_query_param("source", "fax")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_drawer_uses_display_timezone() {
        let response = server().get("/api/v1/pipeline/CLM-101").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["updated"], "January 16, 2024 at 08:05 PM");
        assert_eq!(body["fields"].as_array().unwrap().len(), 3);
        assert_eq!(body["source_icon"], "mail");
    }
}

// ============================================================================
// Dashboard
// ============================================================================

mod dashboard_tests {
    use super::*;

    #[tokio::test]
    async fn test_dashboard_sections() {
        let response = server().get("/api/v1/dashboard").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["kpis"][0]["value"], "1,200");
        assert_eq!(body["kpis"][3]["value"], "92%");
        assert_eq!(body["kpis"][4]["value"], "4.2 days");
        assert_eq!(body["ai_performance"]["latest"]["status"], "Excellent");
        assert_eq!(body["ai_performance"]["total_overrides"], 30);
        assert_eq!(body["vehicle"]["top_claims"][1]["variance_color"], "text-red-600");
        assert_eq!(body["medical"]["hardcopy_verification"][1]["name"], "Exceptions");
    }
}

// ============================================================================
// Working Demo
// ============================================================================

mod demo_tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_submission_processed() {
        let submission = serde_json::to_value(DemoFixtures::submission()).unwrap();
        let response = server().post("/api/v1/demo/submissions").json(&submission).await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["status"], "processed");
        assert_eq!(body["error"], Value::Null);
        let result = &body["result"];
        assert_eq!(result["structured_data"]["claimant"], "Ram Bahadur Thapa");
        let url = result["attachments"][0]["url"].as_str().unwrap();
        assert!(url.starts_with("/demo/uploads/"));
        assert!(url.ends_with("/pharmacy_bill.pdf"));
    }

    #[tokio::test]
    async fn test_invalid_email_is_422() {
        let response = server()
            .post("/api/v1/demo/submissions")
            .json(&json!({ "from_email": "not-an-email", "subject": "Claim", "body": "Bills" }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["details"][0], "from_email: Enter a valid email address");
    }

    #[tokio::test]
    async fn test_unsupported_attachment_is_422() {
        let submission =
            serde_json::to_value(DemoFixtures::submission_with(&[("notes.txt", "text/plain")])).unwrap();
        let response = server().post("/api/v1/demo/submissions").json(&submission).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_simulated_failure_shows_banner() {
        let server = server_with(ApiConfig {
            demo_latency_ms: 0,
            demo_failure_rate: 1.0,
            ..ApiConfig::default()
        });
        let submission = serde_json::to_value(DemoFixtures::submission()).unwrap();
        let response = server.post("/api/v1/demo/submissions").json(&submission).await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "processing_failed");
        assert_eq!(body["message"], FAILURE_MESSAGE);
    }
}

// ============================================================================
// Diagram Viewer
// ============================================================================

mod viewer_tests {
    use super::*;

    #[tokio::test]
    async fn test_zoom_clamped_and_download_effect() {
        let response = server()
            .post("/api/v1/viewer/events")
            .json(&json!({
                "inputs": [
                    { "kind": "open" },
                    { "kind": "set_zoom", "zoom": 50.0 },
                    { "kind": "download" }
                ]
            }))
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["state"]["zoom"], 5.0);
        assert_eq!(body["zoom_percent"], 500);
        assert_eq!(
            body["effects"],
            json!([{ "kind": "download", "href": "/systemflow.png", "filename": "system-flow-diagram.png" }])
        );
    }

    #[tokio::test]
    async fn test_closed_viewer_ignores_input() {
        let response = server()
            .post("/api/v1/viewer/events")
            .json(&json!({ "inputs": [{ "kind": "zoom_in" }, { "kind": "key", "key": "f" }] }))
            .await;
        let body = response.json::<Value>();
        assert_eq!(body["state"]["open"], false);
        assert_eq!(body["state"]["zoom"], 1.0);
        assert_eq!(body["effects"], json!([]));
    }

    #[tokio::test]
    async fn test_supplied_state_zoom_is_clamped() {
        let response = server()
            .post("/api/v1/viewer/events")
            .json(&json!({
                "state": {
                    "open": true,
                    "zoom": 50.0,
                    "position": { "x": 0.0, "y": 0.0 },
                    "dragging": false,
                    "last_pointer": { "x": 0.0, "y": 0.0 },
                    "fullscreen": false
                },
                "inputs": [{ "kind": "pointer_up" }]
            }))
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["state"]["zoom"], 5.0);
        assert_eq!(body["zoom_percent"], 500);
    }
}
