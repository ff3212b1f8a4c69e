//! `HttpTransport` against a local `tiny_http` server.

use std::io::Read;
use std::thread::JoinHandle;
use std::time::Duration;

use pretty_assertions::assert_eq;
use qn_auth::{AuthError, AuthTransport, Credentials, HttpTransport, Registration};
use qn_core::enums::Role;

struct Captured {
    url: String,
    body: serde_json::Value,
}

/// Serve exactly one request with `status` and `body`, returning what was received.
fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<Captured>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind");
    let port = server
        .server_addr()
        .to_ip()
        .expect("ip listener")
        .port();

    let handle = std::thread::spawn(move || {
        let mut request = server.recv().expect("request");
        let mut raw = String::new();
        request
            .as_reader()
            .read_to_string(&mut raw)
            .expect("read body");
        let captured = Captured {
            url: request.url().to_string(),
            body: serde_json::from_str(&raw).expect("json body"),
        };
        let response = tiny_http::Response::from_string(body)
            .with_status_code(status)
            .with_header(
                tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
            );
        request.respond(response).expect("respond");
        captured
    });

    (format!("http://127.0.0.1:{port}/"), handle)
}

fn transport(base_url: &str) -> HttpTransport {
    HttpTransport::new(base_url, Duration::from_secs(5)).expect("client")
}

const BOB: &str = r#"{"id":"k3j9x0a2b","email":"bob@school.edu","name":"bob","role":"student","createdAt":"2026-03-01T09:30:00Z"}"#;

#[tokio::test]
async fn sign_in_posts_credentials_and_parses_user() {
    let (base, server) = serve_once(200, BOB);

    let user = transport(&base)
        .sign_in(&Credentials::new("bob@school.edu", "pw", Role::Student))
        .await
        .expect("sign in");

    let captured = server.join().expect("server thread");
    assert_eq!(captured.url, "/login");
    assert_eq!(
        captured.body,
        serde_json::json!({"email": "bob@school.edu", "password": "pw", "role": "student"})
    );
    assert_eq!(user.id, "k3j9x0a2b");
    assert_eq!(user.role, Role::Student);
}

#[tokio::test]
async fn sign_up_posts_to_register() {
    let (base, server) = serve_once(201, BOB);

    transport(&base)
        .sign_up(&Registration::new("bob@school.edu", "pw", "bob", Role::Student))
        .await
        .expect("sign up");

    let captured = server.join().expect("server thread");
    assert_eq!(captured.url, "/register");
    assert_eq!(captured.body["name"], "bob");
}

#[tokio::test]
async fn unauthorized_is_an_authentication_error() {
    let (base, server) = serve_once(401, "invalid credentials");

    let err = transport(&base)
        .sign_in(&Credentials::new("bob@school.edu", "wrong", Role::Student))
        .await
        .unwrap_err();
    server.join().expect("server thread");

    match err {
        AuthError::Authentication(detail) => assert_eq!(detail, "invalid credentials"),
        other => panic!("expected Authentication, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_a_transport_error() {
    let (base, server) = serve_once(500, "{}");

    let err = transport(&base)
        .sign_in(&Credentials::new("bob@school.edu", "pw", Role::Student))
        .await
        .unwrap_err();
    server.join().expect("server thread");

    assert!(matches!(err, AuthError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_user_is_a_transport_error() {
    let (base, server) = serve_once(200, r#"{"id": 7}"#);

    let err = transport(&base)
        .sign_in(&Credentials::new("bob@school.edu", "pw", Role::Student))
        .await
        .unwrap_err();
    server.join().expect("server thread");

    assert!(matches!(err, AuthError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn extra_response_fields_are_ignored() {
    let (base, server) = serve_once(
        200,
        r#"{"id":"k3j9x0a2b","email":"bob@school.edu","name":"bob","role":"student","createdAt":"2026-03-01T09:30:00Z","token":"eyJhbGciOi","lastSeen":null}"#,
    );

    let user = transport(&base)
        .sign_in(&Credentials::new("bob@school.edu", "pw", Role::Student))
        .await
        .expect("sign in");
    server.join().expect("server thread");

    assert_eq!(user.id, "k3j9x0a2b");
    assert_eq!(user.email, "bob@school.edu");
}
