//! GROUP vs LISTGROUP and the 211 disambiguation (RFC 3977 §6.1.1, §6.1.2)

use crate::common::{serve, Step::*, GREETING};
use nntp_client::commands::{parse_article_numbers, parse_group_status, ArticleRange};

#[tokio::test]
async fn test_group_211_is_single_line() {
    let server = serve(vec![
        Send(GREETING),
        Expect("GROUP misc.test"),
        Send("211 1234 3000234 3002322 misc.test\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.group("misc.test").await.unwrap();
    assert_eq!(response.status, 211);
    assert!(!response.has_body());

    let info = parse_group_status(&response.status_text).unwrap();
    assert_eq!(info.count, 1234);
    assert_eq!(info.first, 3000234);
    assert_eq!(info.last, 3002322);
    assert_eq!(info.name, "misc.test");

    drop(response);
    assert_eq!(client.current_group(), Some("misc.test"));
    server.finish().await;
}

#[tokio::test]
async fn test_listgroup_211_is_multi_line() {
    let server = serve(vec![
        Send(GREETING),
        Expect("LISTGROUP misc.test"),
        Send("211 1234 3000234 3002322 misc.test list follows\r\n3000234\r\n3000237\r\n.\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let mut response = client.listgroup(Some("misc.test"), None).await.unwrap();
    assert_eq!(response.status, 211);
    assert!(response.has_body());

    let body = response.read_body().await.unwrap();
    assert_eq!(body, b"3000234\r\n3000237\r\n");
    assert_eq!(parse_article_numbers(&body), vec![3000234, 3000237]);
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_listgroup_with_range() {
    let server = serve(vec![
        Send(GREETING),
        Expect("LISTGROUP misc.test 3000238-3000248"),
        Send("211 1234 3000234 3002322 misc.test list follows\r\n3000238\r\n.\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let mut response = client
        .listgroup(Some("misc.test"), Some(ArticleRange::Bounded(3000238, 3000248)))
        .await
        .unwrap();
    assert_eq!(parse_article_numbers(&response.read_body().await.unwrap()), vec![3000238]);
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_group_failure_leaves_current_group_unset() {
    let server = serve(vec![
        Send(GREETING),
        Expect("GROUP example.empty.newsgroup"),
        Send("411 example.empty.newsgroup is unknown\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.group("example.empty.newsgroup").await.unwrap();
    assert_eq!(response.status, 411);
    drop(response);
    assert_eq!(client.current_group(), None);
    server.finish().await;
}

#[tokio::test]
async fn test_navigation_last_and_next() {
    let server = serve(vec![
        Send(GREETING),
        Expect("NEXT"),
        Send("223 3000237 <668929@example> retrieved\r\n"),
        Expect("LAST"),
        Send("422 No previous article to retrieve\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.next().await.unwrap();
    assert_eq!(response.status, 223);
    assert!(response.status_text.starts_with("3000237"));
    drop(response);

    let response = client.last().await.unwrap();
    assert_eq!(response.status, 422);
    drop(response);
    server.finish().await;
}
