//! POST state machine (RFC 3977 §6.3.1)

use crate::common::{serve, Step::*, GREETING};
use nntp_client::{Article, Headers};

fn test_article(body: &str) -> Article {
    let mut headers = Headers::new();
    headers.append("From", "x");
    Article::with_headers(headers).body_bytes(body)
}

#[tokio::test]
async fn test_post_success_with_dot_stuffing() {
    // The ".line" body line must cross the wire as "..line"
    let server = serve(vec![
        Send(GREETING),
        Expect("POST"),
        Send("340 Input article; end with <CR-LF>.<CR-LF>\r\n"),
        ExpectArticle(&["From: x", "", "..line"]),
        Send("240 Article received OK\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.post(test_article(".line\r\n")).await.unwrap();
    assert_eq!(response.status, 240);
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_post_prohibited_sends_nothing() {
    // On anything but 340 the article must not be transmitted; the script
    // would fail on unexpected input if it were
    let server = serve(vec![
        Send(GREETING),
        Expect("POST"),
        Send("440 Posting not permitted\r\n"),
        Expect("DATE"),
        Send("111 20230101120000\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.post(test_article("never sent\r\n")).await.unwrap();
    assert_eq!(response.status, 440);
    drop(response);

    let response = client.date().await.unwrap();
    assert_eq!(response.status, 111);
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_post_failed_after_send() {
    let server = serve(vec![
        Send(GREETING),
        Expect("POST"),
        Send("340 go ahead\r\n"),
        ExpectArticle(&["From: x", "", "rejected content"]),
        Send("441 Posting failed\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client
        .post(test_article("rejected content\r\n"))
        .await
        .unwrap();
    assert_eq!(response.status, 441);
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_post_streamed_body() {
    let server = serve(vec![
        Send(GREETING),
        Expect("POST"),
        Send("340 go ahead\r\n"),
        ExpectArticle(&["From: x", "", "streamed line", "..stuffed"]),
        Send("240 OK\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let mut headers = Headers::new();
    headers.append("From", "x");
    let body = std::io::Cursor::new(b"streamed line\r\n.stuffed\r\n".to_vec());
    let article = Article::with_headers(headers).body_stream(body);

    let response = client.post(article).await.unwrap();
    assert_eq!(response.status, 240);
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_post_terminator_added_without_trailing_crlf() {
    // A body not ending in CRLF gets one before the terminator line
    let server = serve(vec![
        Send(GREETING),
        Expect("POST"),
        Send("340 go ahead\r\n"),
        ExpectArticle(&["From: x", "", "no newline at end"]),
        Send("240 OK\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client
        .post(test_article("no newline at end"))
        .await
        .unwrap();
    assert_eq!(response.status, 240);
    drop(response);
    server.finish().await;
}
