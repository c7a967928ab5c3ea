//! AUTHINFO USER/PASS state machine (RFC 4643 §2.3)

use crate::common::{serve, Step::*, GREETING};

#[tokio::test]
async fn test_user_then_pass_success() {
    let server = serve(vec![
        Send(GREETING),
        Expect("AUTHINFO USER u"),
        Send("381 Enter passphrase\r\n"),
        Expect("AUTHINFO PASS p"),
        Send("281 Authentication accepted\r\n"),
    ])
    .await;
    let mut client = server.client().await;
    assert!(!client.is_authenticated());

    let response = client.authinfo("u", Some("p")).await.unwrap();
    assert_eq!(response.status, 281);
    drop(response);
    assert!(client.is_authenticated());
    server.finish().await;
}

#[tokio::test]
async fn test_user_accepted_without_password() {
    let server = serve(vec![
        Send(GREETING),
        Expect("AUTHINFO USER wilma"),
        Send("281 Authentication accepted\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.authinfo("wilma", None).await.unwrap();
    assert_eq!(response.status, 281);
    drop(response);
    assert!(client.is_authenticated());
    server.finish().await;
}

#[tokio::test]
async fn test_repeat_authinfo_sends_nothing() {
    // No further Expect steps: a second AUTHINFO on the wire would hang
    // the exchange and fail the script
    let server = serve(vec![
        Send(GREETING),
        Expect("AUTHINFO USER u"),
        Send("381 Enter passphrase\r\n"),
        Expect("AUTHINFO PASS p"),
        Send("281 Authentication accepted\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.authinfo("u", Some("p")).await.unwrap();
    drop(response);
    assert!(client.is_authenticated());

    let response = client.authinfo("u", Some("p")).await.unwrap();
    assert_eq!(response.status, 281);
    drop(response);
    assert!(client.is_authenticated());
    server.finish().await;
}

#[tokio::test]
async fn test_rejected_credentials() {
    let server = serve(vec![
        Send(GREETING),
        Expect("AUTHINFO USER u"),
        Send("381 Enter passphrase\r\n"),
        Expect("AUTHINFO PASS wrong"),
        Send("481 Authentication failed\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.authinfo("u", Some("wrong")).await.unwrap();
    assert_eq!(response.status, 481);
    drop(response);
    assert!(!client.is_authenticated());
    server.finish().await;
}

#[tokio::test]
async fn test_user_rejected_outright() {
    let server = serve(vec![
        Send(GREETING),
        Expect("AUTHINFO USER baduser"),
        Send("481 Authentication failed\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.authinfo("baduser", Some("p")).await.unwrap();
    assert_eq!(response.status, 481);
    drop(response);
    assert!(!client.is_authenticated());
    server.finish().await;
}

#[tokio::test]
async fn test_tls_required() {
    let server = serve(vec![
        Send(GREETING),
        Expect("AUTHINFO USER u"),
        Send("483 Encryption or stronger authentication required\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.authinfo("u", Some("p")).await.unwrap();
    assert_eq!(response.status, 483);
    drop(response);
    assert!(!client.is_authenticated());
    server.finish().await;
}

#[tokio::test]
async fn test_password_requested_but_not_supplied() {
    // Without a password the 381 is handed back; nothing else is sent
    let server = serve(vec![
        Send(GREETING),
        Expect("AUTHINFO USER u"),
        Send("381 Enter passphrase\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.authinfo("u", None).await.unwrap();
    assert_eq!(response.status, 381);
    drop(response);
    assert!(!client.is_authenticated());
    server.finish().await;
}

#[tokio::test]
async fn test_auth_required_status_is_data() {
    // 480 on a normal command is data; the caller decides to authenticate
    let server = serve(vec![
        Send(GREETING),
        Expect("GROUP misc.test"),
        Send("480 Authentication required\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.group("misc.test").await.unwrap();
    assert_eq!(response.status, 480);
    drop(response);
    assert_eq!(client.current_group(), None);
    server.finish().await;
}
