use crate::common;
use bearer_client::prelude::*;
use mockito::{Matcher, Server};
use std::io::Write;

#[tokio::test]
async fn test_get_sends_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/Clientes")
        .match_header("authorization", "Bearer abc")
        .with_status(200)
        .with_body(r#"[{"id":1}]"#)
        .create_async()
        .await;

    let client = common::api_client(&server, 3);
    let body = client
        .get(&format!("{}/v1/Clientes", server.url()), Some("abc"))
        .await;

    assert_eq!(body.as_deref(), Some(r#"[{"id":1}]"#));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_found_is_attempted_four_times() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/Inexistente")
        .with_status(404)
        .expect(4)
        .create_async()
        .await;

    let client = common::api_client(&server, 3);
    let body = client
        .get(&format!("{}/v1/Inexistente", server.url()), None)
        .await;

    assert_eq!(body, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_unavailable_then_success() {
    let mut server = Server::new_async().await;
    let unavailable = server
        .mock("POST", "/v1/Pedidos")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    // mockito answers with the first matching mock that still expects hits
    let created = server
        .mock("POST", "/v1/Pedidos")
        .match_body(Matcher::JsonString(r#"{"a":1}"#.to_string()))
        .with_status(201)
        .with_body(r#"{"id":5}"#)
        .create_async()
        .await;

    let client = common::api_client(&server, 3);
    let url = format!("{}/v1/Pedidos", server.url());
    let response = client
        .post_raw(&url, Some(r#"{"a":1}"#), None, None)
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.text(), r#"{"id":5}"#);
    unavailable.assert_async().await;
    created.assert_async().await;
}

#[tokio::test]
async fn test_slow_response_times_out_without_retry() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/Lento")
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(std::time::Duration::from_millis(500));
            w.write_all(b"{}")
        })
        .expect(1)
        .create_async()
        .await;

    let client = common::api_client(&server, 3);
    let body = client
        .post(
            &format!("{}/v1/Lento", server.url()),
            None,
            Some(Duration::from_millis(100)),
            None,
        )
        .await;

    assert_eq!(body, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_with_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/Pedidos/9")
        .match_header("content-type", JSON_CONTENT_TYPE)
        .match_body(r#"{"motivo":"duplicado"}"#)
        .with_status(204)
        .create_async()
        .await;

    let client = common::api_client(&server, 0);
    let body = client
        .delete(
            &format!("{}/v1/Pedidos/9", server.url()),
            Some(r#"{"motivo":"duplicado"}"#),
            Some("abc"),
        )
        .await;

    assert_eq!(body.as_deref(), Some(""));
    mock.assert_async().await;
}
