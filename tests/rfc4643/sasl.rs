//! AUTHINFO SASL exchange (RFC 4643 §2.4)

use crate::common::{serve, Step::*, GREETING};
use nntp_client::{decode_sasl_data, encode_sasl_data, SaslPlain};

#[tokio::test]
async fn test_sasl_plain_with_initial_response() {
    // \0test\0secret base64-encoded rides on the command line
    let server = serve(vec![
        Send(GREETING),
        Expect("AUTHINFO SASL PLAIN AHRlc3QAc2VjcmV0"),
        Send("281 Authentication accepted\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client
        .authinfo_sasl(SaslPlain::new("test", "secret"))
        .await
        .unwrap();
    assert_eq!(response.status, 281);
    drop(response);
    assert!(client.is_authenticated());
    server.finish().await;
}

#[tokio::test]
async fn test_sasl_plain_rejected() {
    let server = serve(vec![
        Send(GREETING),
        Expect("AUTHINFO SASL PLAIN AGFsaWNlAHdyb25ncGFzcw=="),
        Send("481 Authentication failed\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client
        .authinfo_sasl(SaslPlain::new("alice", "wrongpass"))
        .await
        .unwrap();
    assert_eq!(response.status, 481);
    drop(response);
    assert!(!client.is_authenticated());
    server.finish().await;
}

#[tokio::test]
async fn test_sasl_repeat_is_suppressed() {
    let server = serve(vec![
        Send(GREETING),
        Expect("AUTHINFO SASL PLAIN AHRlc3QAc2VjcmV0"),
        Send("281 Authentication accepted\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client
        .authinfo_sasl(SaslPlain::new("test", "secret"))
        .await
        .unwrap();
    drop(response);

    // Already authenticated: nothing further may reach the wire
    let response = client
        .authinfo_sasl(SaslPlain::new("test", "secret"))
        .await
        .unwrap();
    assert_eq!(response.status, 281);
    drop(response);
    server.finish().await;
}

#[test]
fn test_sasl_framing_empty_marker() {
    assert_eq!(encode_sasl_data(&[]), "=");
    assert_eq!(decode_sasl_data("=").unwrap(), Vec::<u8>::new());
}

#[test]
fn test_sasl_framing_roundtrip() {
    let payload = b"\x00user\x00pass";
    let encoded = encode_sasl_data(payload);
    assert_eq!(decode_sasl_data(&encoded).unwrap(), payload);
}
