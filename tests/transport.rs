//! Integration tests for `CanvasHttp` and the `Canvas` facade.

use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use canvas_sdk::error::{HttpError, SdkError};
use canvas_sdk::prelude::*;

const TOKEN: &str = "secret-token-1234";

async fn http(server: &MockServer) -> CanvasHttp {
    CanvasHttp::new(&server.uri(), TOKEN).unwrap()
}

async fn error_for(status: u16, challenge: bool) -> HttpError {
    let server = MockServer::start().await;
    let mut template = ResponseTemplate::new(status).set_body_string("{\"errors\":[]}");
    if challenge {
        template = template.insert_header("WWW-Authenticate", "Bearer realm=\"canvas-lms\"");
    }
    Mock::given(method("GET"))
        .and(path("/api/v1/anything"))
        .respond_with(template)
        .mount(&server)
        .await;

    http(&server)
        .await
        .get("anything", Params::new())
        .await
        .unwrap_err()
}

#[tokio::test]
async fn test_status_classification() {
    assert!(matches!(error_for(400, false).await, HttpError::BadRequest(_)));
    assert!(matches!(
        error_for(401, true).await,
        HttpError::InvalidAccessToken(_)
    ));
    assert!(matches!(error_for(401, false).await, HttpError::Unauthorized(_)));
    assert!(matches!(error_for(403, false).await, HttpError::Forbidden(_)));
    assert!(matches!(
        error_for(404, false).await,
        HttpError::NotFound(ref body) if body == "{\"errors\":[]}"
    ));
    assert!(matches!(error_for(409, false).await, HttpError::Conflict(_)));
    assert!(matches!(error_for(422, false).await, HttpError::Unprocessable(_)));

    for status in [418, 500, 502] {
        let err = error_for(status, false).await;
        assert_eq!(err.status(), Some(status));
        assert_eq!(
            err.to_string(),
            format!("Encountered an error: status code {}", status)
        );
    }
}

#[tokio::test]
async fn test_non_success_below_400_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let err = http(&server)
        .await
        .get("courses", Params::new())
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::Status { status: 304, .. }));
}

#[tokio::test]
async fn test_error_body_is_kept() {
    let err = error_for(400, false).await;
    assert!(matches!(err, HttpError::BadRequest(ref body) if body == "{\"errors\":[]}"));
}

#[tokio::test]
async fn test_bearer_token_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/self"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = http(&server).await.get("users/self", Params::new()).await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_without_auth_omits_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    http(&server)
        .await
        .send(Method::Get, "public", RequestOptions::new().without_auth())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_query_params_lowercase_booleans() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .and(query_param("include_deleted", "false"))
        .and(query_param("published", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let params = Params::new()
        .insert("published", true)
        .insert("include_deleted", false);
    http(&server).await.get("courses", params).await.unwrap();
}

#[tokio::test]
async fn test_form_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/accounts/1/courses"))
        .and(body_string("name=Algebra&published=true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let params = Params::new()
        .insert("name", "Algebra")
        .insert("published", true);
    http(&server)
        .await
        .send(
            Method::Post,
            "accounts/1/courses",
            RequestOptions::new().params(params),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/courses/9"))
        .and(body_json(json!({"course": {"name": "Geometry"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let params = Params::new().insert("course", json!({"name": "Geometry"}));
    http(&server)
        .await
        .send(
            Method::Put,
            "courses/9",
            RequestOptions::new().params(params).json(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_absolute_url_target_used_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/5/download"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/files/5/download", server.uri());
    let body = http(&server)
        .await
        .get(url, Params::new())
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_debug_masks_token() {
    let server = MockServer::start().await;
    let rendered = format!("{:?}", http(&server).await);
    assert!(!rendered.contains(TOKEN));
    assert!(rendered.contains("1234"));
}

// ─── Facade ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_one_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "Ada Lovelace",
            "created_at": "2020-02-03T04:05:06Z"
        })))
        .mount(&server)
        .await;

    let canvas = Canvas::new(&server.uri(), TOKEN).unwrap();
    let user = canvas.users().get(7).await.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.name, "Ada Lovelace");
    assert!(user.created_at.is_some());
}

#[tokio::test]
async fn test_get_course_by_sis_id_encodes_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/courses/sis_course_id:MATH%20101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "name": "Math",
            "course_code": "MATH 101"
        })))
        .mount(&server)
        .await;

    let canvas = Canvas::new(&server.uri(), TOKEN).unwrap();
    let course = canvas
        .courses()
        .get_by_sis_id("MATH 101", Params::new())
        .await
        .unwrap();
    assert_eq!(course.id, 12);
}

#[tokio::test]
async fn test_get_one_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/courses/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let canvas = Canvas::new(&server.uri(), TOKEN).unwrap();
    let err = canvas.courses().get(404, Params::new()).await.unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::NotFound(_))));
}

#[tokio::test]
async fn test_enrollment_terms_unwrap_and_stamp() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/1/terms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "enrollment_terms": [
                {"id": 1, "name": "Fall", "start_at": "2024-08-26T00:00:00Z"},
                {"id": 2, "name": "Spring", "start_at": null}
            ]
        })))
        .mount(&server)
        .await;

    let canvas = Canvas::new(&server.uri(), TOKEN).unwrap();
    let terms = canvas
        .enrollment_terms()
        .list(1, Params::new())
        .collect_all()
        .await
        .unwrap();

    assert_eq!(terms.len(), 2);
    assert!(terms.iter().all(|t| t.account_id == Some(1)));
    assert!(terms[0].start_at.is_some());
    assert!(terms[1].start_at.is_none());
}

/// Runs against a real instance configured through `.env`.
#[tokio::test]
#[ignore]
async fn test_live_list_courses() {
    dotenvy::dotenv().ok();
    let canvas = Canvas::from_env().unwrap();
    let courses = canvas.courses().list(Params::new());
    let first = courses.range(..5).collect_all().await.unwrap();
    assert!(first.len() <= 5);
}
