//! HTTP tests for the travel and email clients against a loopback server.

use easyai_core::{
    config::ApiSettings,
    constants::RESPONSE_STYLE_SUFFIX,
    error::UNEXPECTED_ERROR_MESSAGE,
    models::{SendEmail, TravelQuery},
    EmailApiClient, EmailSender, ItineraryError, PlanSource, TravelApiClient,
};
use tokio::{
    io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader},
    net::TcpListener,
    task::JoinHandle,
};

/// One request as seen by the server.
struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Accepts a single connection, records the request and replies with
/// `status`, `content_type` and `body`.
async fn serve_once(
    status: &'static str,
    content_type: &'static str,
    body: &'static str,
) -> (ApiSettings, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind loopback listener");
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).await.unwrap();

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).await.unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((key, value)) = line.split_once(':') {
                headers.push((key.trim().to_string(), value.trim().to_string()));
            }
        }

        let length = headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or(0);
        let mut request_body = vec![0; length];
        reader.read_exact(&mut request_body).await.unwrap();

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let stream = reader.get_mut();
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();

        CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(request_body).unwrap(),
        }
    });

    let settings = ApiSettings {
        base_url: format!("http://{addr}"),
        timeout_secs: 10,
        ..ApiSettings::default()
    };
    (settings, handle)
}

#[tokio::test]
async fn test_travel_client_sends_headers_and_style_suffix() {
    let (settings, server) = serve_once(
        "200 OK",
        "application/json",
        r#"{"answer":"Day 1\n- Colosseum\n---\nBudget Hotels\n- Ibis"}"#,
    )
    .await;
    let client = TravelApiClient::new(&settings).unwrap();

    let answer = client.fetch_answer("Plan a trip to Rome").await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(answer, "Day 1\n- Colosseum\n---\nBudget Hotels\n- Ibis");
    assert!(request.request_line.starts_with("POST /query "));
    assert_eq!(request.header("ngrok-skip-browser-warning"), Some("true"));
    assert_eq!(request.header("content-type"), Some("application/json"));

    let sent: TravelQuery = serde_json::from_str(&request.body).unwrap();
    assert_eq!(
        sent.question,
        format!("Plan a trip to Rome{RESPONSE_STYLE_SUFFIX}")
    );
}

#[tokio::test]
async fn test_travel_client_maps_error_status_with_body() {
    let (settings, server) = serve_once(
        "500 Internal Server Error",
        "text/plain",
        "model overloaded",
    )
    .await;
    let client = TravelApiClient::new(&settings).unwrap();

    let err = client.fetch_answer("Plan a trip to Rome").await.unwrap_err();
    server.await.unwrap();

    match err {
        ItineraryError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "model overloaded");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_travel_client_empty_error_body_uses_generic_message() {
    let (settings, server) = serve_once("503 Service Unavailable", "text/plain", "").await;
    let client = TravelApiClient::new(&settings).unwrap();

    let err = client.fetch_answer("Plan a trip to Rome").await.unwrap_err();
    server.await.unwrap();

    match err {
        ItineraryError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, UNEXPECTED_ERROR_MESSAGE);
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_travel_client_rejects_html_success_page() {
    let (settings, server) = serve_once(
        "200 OK",
        "text/html",
        "<html><body>You are about to visit this site</body></html>",
    )
    .await;
    let client = TravelApiClient::new(&settings).unwrap();

    let err = client.fetch_answer("Plan a trip to Rome").await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, ItineraryError::InvalidResponse { .. }));
    assert!(err
        .to_string()
        .starts_with("Invalid response structure from server"));
}

#[tokio::test]
async fn test_travel_client_rejects_empty_answer() {
    let (settings, server) = serve_once("200 OK", "application/json", r#"{"answer":""}"#).await;
    let client = TravelApiClient::new(&settings).unwrap();

    let err = client.fetch_answer("Plan a trip to Rome").await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, ItineraryError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_email_client_posts_send_email() {
    let (settings, server) = serve_once(
        "200 OK",
        "application/json",
        r#"{"message":"Email sent"}"#,
    )
    .await;
    let client = EmailApiClient::new(&settings).unwrap();
    let email = SendEmail {
        email: vec!["a@example.com".to_string(), "b@example.com".to_string()],
        subject: "Your AI-Generated Travel Plan".to_string(),
        body: "See you in Rome".to_string(),
    };

    let receipt = client.send(&email).await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(receipt.message, "Email sent");
    assert!(request.request_line.starts_with("POST /send_email "));
    assert_eq!(request.header("ngrok-skip-browser-warning"), Some("true"));
    assert_eq!(request.header("content-type"), Some("application/json"));

    let sent: SendEmail = serde_json::from_str(&request.body).unwrap();
    assert_eq!(sent, email);
}

#[tokio::test]
async fn test_email_client_maps_error_status() {
    let (settings, server) = serve_once("502 Bad Gateway", "text/plain", "sendgrid down").await;
    let client = EmailApiClient::new(&settings).unwrap();
    let email = SendEmail {
        email: vec!["a@example.com".to_string()],
        subject: "Trip".to_string(),
        body: "Body".to_string(),
    };

    let err = client.send(&email).await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(
        err,
        ItineraryError::Api { status: 502, ref message } if message == "sendgrid down"
    ));
}
