use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

mod common;

fn inquiry_body(name: &str, contact: &str, email: &str, issue: &str) -> String {
    serde_urlencoded::to_string([
        ("name", name),
        ("contact", contact),
        ("email", email),
        ("issue", issue),
    ])
    .unwrap()
}

async fn post_inquiry(app: axum::Router, body: String) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/inquiry")
                .header("host", "acceleron.test")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_successful_submission_shows_thank_you_and_clears_fields() {
    let intake = common::StubIntake::resolving();
    let app = common::test_app(intake.clone());

    let body = inquiry_body(
        "A. Sharma",
        "9660515666",
        "a@example.com",
        "Kitchen facing wrong direction",
    );
    let (status, page) = post_inquiry(app, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(intake.calls(), 1);
    assert!(page.contains(r#"id="inquiry-success""#));
    assert!(!page.contains(r#"id="inquiry-error""#));

    // All four fields come back empty
    assert!(!page.contains(r#"value="A. Sharma""#));
    assert!(!page.contains(r#"value="9660515666""#));
    assert!(!page.contains(r#"value="a@example.com""#));
    assert!(!page.contains("Kitchen facing wrong direction"));
}

#[tokio::test]
async fn test_failed_submission_shows_error_and_keeps_fields() {
    let intake = common::StubIntake::failing();
    let app = common::test_app(intake.clone());

    let body = inquiry_body(
        "A. Sharma",
        "9660515666",
        "a@example.com",
        "Kitchen facing wrong direction",
    );
    let (status, page) = post_inquiry(app, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(intake.calls(), 1);
    assert!(page.contains(r#"id="inquiry-error""#));
    assert!(!page.contains(r#"id="inquiry-success""#));

    // Entered values survive for a manual retry
    assert!(page.contains(r#"value="A. Sharma""#));
    assert!(page.contains(r#"value="9660515666""#));
    assert!(page.contains(r#"value="a@example.com""#));
    assert!(page.contains("Kitchen facing wrong direction"));
}

#[tokio::test]
async fn test_missing_field_blocks_submission_without_dispatch() {
    let intake = common::StubIntake::resolving();
    let app = common::test_app(intake.clone());

    let body = inquiry_body("A. Sharma", "9660515666", "a@example.com", "");
    let (status, page) = post_inquiry(app, body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(intake.calls(), 0);
    assert!(!page.contains(r#"id="inquiry-success""#));
    assert!(!page.contains(r#"id="inquiry-error""#));
    assert!(page.contains(r#"value="A. Sharma""#));
}

#[tokio::test]
async fn test_resubmission_after_error_succeeds_without_reload() {
    let failing = common::StubIntake::failing();
    let app = common::test_app(failing.clone());

    let body = inquiry_body(
        "A. Sharma",
        "9660515666",
        "a@example.com",
        "Kitchen facing wrong direction",
    );
    let (_, page) = post_inquiry(app, body.clone()).await;
    assert!(page.contains(r#"id="inquiry-error""#));

    // The rendered form still points at the action, so the same payload
    // can be posted again; this time the intake accepts it.
    assert!(page.contains(r#"action="/inquiry""#));

    let resolving = common::StubIntake::resolving();
    let retry_app = common::test_app(resolving.clone());
    let (status, page) = post_inquiry(retry_app, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resolving.calls(), 1);
    assert!(page.contains(r#"id="inquiry-success""#));
}
