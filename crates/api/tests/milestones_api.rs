//! Integration tests for `/api/v1/milestones/summary`.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

fn history() -> serde_json::Value {
    json!({
        "milestones": [
            {
                "id": 1,
                "tipo_id": 1,
                "fecha": "2025-05-10",
                "titulo": "Firma de contrato",
                "responsable_id": 7,
                "participantes": [7, 99],
                "documentos": [
                    {"id": 10, "tipo_documento_id": 1, "nombre": "contrato.pdf"},
                ],
            },
            {
                "hitoId": 2,
                "tipoId": 2,
                "fecha": "2025-06-18",
                "titulo": "Radicación ante el operador",
                "documentos": [
                    {"id": 11, "tipo_documento_id": 2, "nombre": "solicitud.pdf"},
                    {"tipo_documento_id": 2, "nombre": "anexo.pdf"},
                ],
            },
            {
                "id": 3,
                "tipo_id": 1,
                "titulo": "Sin fecha",
            },
        ],
        "documents": [
            {"id": 20, "tipo_documento_id": 1, "nombre": "cedula.pdf"},
        ],
        "users": [
            {"id": 7, "nombre": "Laura Gómez"},
        ],
    })
}

#[tokio::test]
async fn summary_counts_milestones_and_documents() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/milestones/summary", history()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    let summary = &data["summary"];

    assert_eq!(summary["milestone_count"], 3);
    assert_eq!(summary["milestone_documents"], 3);
    assert_eq!(summary["project_documents"], 1);
    assert_eq!(summary["total_documents"], 4);

    let by_type = summary["milestones_by_type"].as_array().unwrap();
    assert_eq!(by_type.len(), 2);
    assert_eq!(by_type[0]["type_id"], 1);
    assert_eq!(by_type[0]["count"], 2);
}

#[tokio::test]
async fn most_recent_is_latest_dated_milestone() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/milestones/summary", history()).await;

    let data = body_json(response).await["data"].clone();
    let recent = &data["summary"]["most_recent"];

    assert_eq!(recent["id"], 2);
    assert_eq!(recent["document_count"], 2);
    assert_eq!(recent["responsible_name"], "Sin asignar");
}

#[tokio::test]
async fn history_is_newest_first_with_resolved_names() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/milestones/summary", history()).await;

    let data = body_json(response).await["data"].clone();
    let history = data["history"].as_array().unwrap();

    let ids: Vec<i64> = history.iter().map(|m| m["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![2, 1, 3]);

    assert_eq!(history[1]["responsible_name"], "Laura Gómez");
    assert_eq!(
        history[1]["participant_names"],
        json!(["Laura Gómez", "Sin asignar"])
    );
}

#[tokio::test]
async fn documents_are_flattened_with_owner() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/milestones/summary", history()).await;

    let data = body_json(response).await["data"].clone();
    let documents = data["documents"].as_array().unwrap();

    assert_eq!(documents.len(), 4);
    assert_eq!(documents[0]["milestone_id"], 1);
    assert_eq!(documents[2]["document"]["id"], 0);
    assert!(documents[3]["milestone_id"].is_null());
}

#[tokio::test]
async fn empty_history_has_no_most_recent() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/milestones/summary", json!({"milestones": []})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["summary"]["milestone_count"], 0);
    assert!(data["summary"]["most_recent"].is_null());
}

#[tokio::test]
async fn milestone_without_id_is_rejected() {
    let app = common::build_test_app();
    let body = json!({"milestones": [{"titulo": "huérfano"}]});
    let response = post_json(app, "/api/v1/milestones/summary", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
