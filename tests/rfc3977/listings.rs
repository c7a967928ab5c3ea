//! LIST variants, NEWGROUPS, NEWNEWS, OVER, HDR (RFC 3977 §7, §8)

use chrono::{NaiveDate, NaiveTime};

use crate::common::{serve, Step::*, GREETING};
use nntp_client::commands::{
    parse_active_line, parse_hdr_line, parse_newsgroups_line, parse_over_line, ArticleRange,
    QueryTarget,
};
use nntp_client::Capabilities;

fn noon() -> (NaiveDate, NaiveTime) {
    (
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
    )
}

#[tokio::test]
async fn test_list_active_parses_entries() {
    let server = serve(vec![
        Send(GREETING),
        Expect("LIST ACTIVE"),
        Send("215 list follows\r\nmisc.test 3002322 3000234 y\r\nalt.old 0 1 =alt.new\r\n.\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let mut response = client.list_active(None).await.unwrap();
    assert_eq!(response.status, 215);
    let block = response.read_body_string().await.unwrap();
    let groups: Vec<_> = block.lines().filter_map(parse_active_line).collect();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "misc.test");
    assert_eq!(groups[0].high, 3002322);
    assert_eq!(groups[1].status, "=alt.new");
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_list_active_with_wildmat() {
    let server = serve(vec![
        Send(GREETING),
        Expect("LIST ACTIVE comp.lang.*"),
        Send("215 list follows\r\ncomp.lang.rust 9 1 y\r\n.\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let mut response = client.list_active(Some("comp.lang.*")).await.unwrap();
    let block = response.read_body_string().await.unwrap();
    assert!(block.starts_with("comp.lang.rust"));
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_bare_list_and_newsgroups() {
    let server = serve(vec![
        Send(GREETING),
        Expect("LIST"),
        Send("215 list follows\r\nmisc.test 10 1 y\r\n.\r\n"),
        Expect("LIST NEWSGROUPS"),
        Send("215 descriptions follow\r\nmisc.test\tTesting area\r\n.\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let mut response = client.list().await.unwrap();
    response.discard_body().await.unwrap();
    drop(response);

    let mut response = client.list_newsgroups(None).await.unwrap();
    let block = response.read_body_string().await.unwrap();
    let info = parse_newsgroups_line(block.lines().next().unwrap()).unwrap();
    assert_eq!(info.name, "misc.test");
    assert_eq!(info.description, "Testing area");
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_newgroups_appends_gmt_token() {
    let (date, time) = noon();
    let server = serve(vec![
        Send(GREETING),
        Expect("NEWGROUPS 20230101 120000 GMT"),
        Send("231 list of new newsgroups follows\r\nalt.rfc-writers.recovery 4 1 y\r\n.\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let mut response = client.newgroups(date, time, true).await.unwrap();
    assert_eq!(response.status, 231);
    let block = response.read_body_string().await.unwrap();
    let group = parse_active_line(block.lines().next().unwrap()).unwrap();
    assert_eq!(group.name, "alt.rfc-writers.recovery");
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_newgroups_local_time_omits_gmt() {
    let (date, time) = noon();
    let server = serve(vec![
        Send(GREETING),
        Expect("NEWGROUPS 20230101 120000"),
        Send("231 list follows\r\n.\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let mut response = client.newgroups(date, time, false).await.unwrap();
    response.discard_body().await.unwrap();
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_newnews_message_ids() {
    let (date, time) = noon();
    let server = serve(vec![
        Send(GREETING),
        Expect("NEWNEWS misc.* 20230101 120000 GMT"),
        Send("230 list of new articles follows\r\n<i.am.a.new.article@example.com>\r\n.\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let mut response = client.newnews("misc.*", date, time, true).await.unwrap();
    assert_eq!(response.status, 230);
    let block = response.read_body_string().await.unwrap();
    assert_eq!(block, "<i.am.a.new.article@example.com>\r\n");
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_over_range() {
    let server = serve(vec![
        Send(GREETING),
        Expect("OVER 3000234-3000235"),
        Send(concat!(
            "224 Overview information follows\r\n",
            "3000234\tI am just a test\tx@y\tMon, 01 Jan 2024\t<45223423@example.com>\t\t1234\t17\r\n",
            ".\r\n"
        )),
    ])
    .await;
    let mut client = server.client().await;

    let mut response = client
        .over(QueryTarget::Range(ArticleRange::Bounded(3000234, 3000235)))
        .await
        .unwrap();
    assert_eq!(response.status, 224);
    let block = response.read_body_string().await.unwrap();
    let entry = parse_over_line(block.lines().next().unwrap()).unwrap();
    assert_eq!(entry.article_number, 3000234);
    assert_eq!(entry.subject, "I am just a test");
    assert_eq!(entry.bytes, 1234);
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_over_current_article() {
    let server = serve(vec![
        Send(GREETING),
        Expect("OVER"),
        Send("420 no current article\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.over(QueryTarget::Current).await.unwrap();
    assert_eq!(response.status, 420);
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_hdr_subject_range() {
    let server = serve(vec![
        Send(GREETING),
        Expect("HDR Subject 3000234-"),
        Send("225 Headers follow\r\n3000234 I am just a test article\r\n.\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let mut response = client
        .hdr("Subject", QueryTarget::Range(ArticleRange::From(3000234)))
        .await
        .unwrap();
    assert_eq!(response.status, 225);
    let block = response.read_body_string().await.unwrap();
    let entry = parse_hdr_line(block.lines().next().unwrap()).unwrap();
    assert_eq!(entry.article_number, 3000234);
    assert_eq!(entry.value, "I am just a test article");
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_capabilities_roundtrip() {
    let server = serve(vec![
        Send(GREETING),
        Expect("CAPABILITIES"),
        Send("101 Capability list:\r\nVERSION 2\r\nREADER\r\nPOST\r\nLIST ACTIVE NEWSGROUPS\r\n.\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let mut response = client.capabilities().await.unwrap();
    assert_eq!(response.status, 101);
    let caps = Capabilities::parse(&response.read_body_string().await.unwrap());
    assert!(caps.has("READER"));
    assert!(caps.has_arg("LIST", "NEWSGROUPS"));
    assert_eq!(caps.args("VERSION").unwrap(), ["2"]);
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_mode_reader() {
    let server = serve(vec![
        Send(GREETING),
        Expect("MODE READER"),
        Send("200 Reader mode, posting permitted\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let response = client.mode_reader().await.unwrap();
    assert_eq!(response.status, 200);
    drop(response);
    server.finish().await;
}
