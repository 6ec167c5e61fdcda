//! End-to-end router tests: the Basic Auth gate in front of the directory.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use staffdir_backend_lib::config::{HashingSettings, SeedUser, Settings};
use staffdir_backend_lib::directory::InMemoryDirectory;
use staffdir_backend_lib::router::create_router;
use staffdir_backend_lib::AppState;
use staffdir_common::Employee;
use tower::ServiceExt;

fn test_state() -> Arc<AppState<InMemoryDirectory>> {
    let mut settings = Settings::default();
    settings.hashing = HashingSettings {
        log_n: 8,
        r: 8,
        p: 1,
    };
    settings.users = vec![
        SeedUser {
            username: "tom".to_string(),
            password: "123".to_string(),
            role: "USER".to_string(),
        },
        SeedUser {
            username: "jerry".to_string(),
            password: "123".to_string(),
            role: "USER".to_string(),
        },
    ];

    let directory = InMemoryDirectory::new(vec![
        Employee {
            id: 1,
            name: "Ada Lovelace".to_string(),
            email: "ada@staffdir.example".to_string(),
            department: "Engineering".to_string(),
        },
        Employee {
            id: 2,
            name: "Grace Hopper".to_string(),
            email: "grace@staffdir.example".to_string(),
            department: "Engineering".to_string(),
        },
    ]);

    Arc::new(AppState::new(directory, settings).unwrap())
}

fn basic(username: &str, password: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{username}:{password}")))
}

fn employees_request(auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/employees");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn unauthenticated_request_is_rejected_with_challenge() {
    let app = create_router(test_state());

    let response = app.oneshot(employees_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"staffdir\""
    );
}

#[tokio::test]
async fn wrong_credentials_are_rejected() {
    let app = create_router(test_state());

    for auth in [
        basic("tom", "124"),
        basic("nobody", "123"),
        "Basic garbage".to_string(),
    ] {
        let response = app
            .clone()
            .oneshot(employees_request(Some(&auth)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn authenticated_request_lists_employees() {
    let app = create_router(test_state());

    let response = app
        .oneshot(employees_request(Some(&basic("tom", "123"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let employees: Vec<Employee> = serde_json::from_slice(&body).unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].name, "Ada Lovelace");
    assert_eq!(employees[1].department, "Engineering");
}

#[tokio::test]
async fn both_seed_users_can_authenticate() {
    let app = create_router(test_state());

    for user in ["tom", "jerry"] {
        let response = app
            .clone()
            .oneshot(employees_request(Some(&basic(user, "123"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
