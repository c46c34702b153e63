use crate::ApiError;

use sb_domain::DomainError;

use std::panic::Location;

use axum::response::IntoResponse;
use chrono::NaiveDate;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Card not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Card not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "title must not be empty".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_validation_error_without_field_omits_field_key() {
    let error = ApiError::Validation {
        message: "bad input".into(),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_already_checked_in_returns_409() {
    let error = ApiError::AlreadyCheckedIn {
        message: "Already checked in on 2024-01-05".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "ALREADY_CHECKED_IN");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "Session expired or unknown".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INVALID_CREDENTIAL");
}

#[tokio::test]
async fn test_storage_unavailable_returns_503() {
    let error = ApiError::StorageUnavailable {
        message: "Storage operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "STORAGE_UNAVAILABLE");
}

#[test]
fn test_domain_already_checked_in_maps_to_conflict() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    let error: ApiError = DomainError::already_checked_in(date).into();

    assert!(matches!(error, ApiError::AlreadyCheckedIn { .. }));
}

#[test]
fn test_domain_not_found_maps_to_not_found_with_entity_name() {
    let error: ApiError = DomainError::not_found("Card").into();

    match error {
        ApiError::NotFound { message, .. } => assert_eq!(message, "Card not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_domain_validation_maps_to_validation_with_field() {
    let error: ApiError = DomainError::validation("title must not be empty", Some("title")).into();

    match error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("title")),
        other => panic!("expected Validation, got {:?}", other),
    }
}
