//! Command-line formatting rules (RFC 3977 §3.1): casing, argument
//! joining, message-id wrapping, and the 512-octet limit

use crate::common::{serve, Step::*, GREETING};
use nntp_client::{commands, Command, NntpError};

#[tokio::test]
async fn test_oversized_argument_fails_locally() {
    // No Expect step for the oversized command: it must never hit the wire
    let server = serve(vec![
        Send(GREETING),
        Expect("DATE"),
        Send("111 20230101120000\r\n"),
    ])
    .await;
    let mut client = server.client().await;

    let oversize = "x".repeat(600);
    let result = client.command(Command::Group, &[&oversize]).await;
    assert!(matches!(result, Err(NntpError::ArgumentTooLong { .. })));
    // Local failures do not poison the connection
    assert!(!client.is_closed());

    let response = client.date().await.unwrap();
    assert_eq!(response.status, 111);
    drop(response);
    server.finish().await;
}

#[tokio::test]
async fn test_line_limit_across_several_arguments() {
    let server = serve(vec![Send(GREETING)]).await;
    let mut client = server.client().await;

    let chunk = "y".repeat(200);
    let result = client
        .command(Command::Newnews, &[&chunk, &chunk, &chunk])
        .await;
    assert!(matches!(result, Err(NntpError::CommandTooLong { .. })));
    server.finish().await;
}

#[test]
fn test_max_command_line_constant() {
    assert_eq!(commands::MAX_COMMAND_OCTETS, 512);
    assert_eq!(commands::MAX_ARGUMENT_OCTETS, 497);
}

#[test]
fn test_keyword_casing_on_the_wire() {
    let line = commands::build_command_line(Command::Group, &["misc.test"]).unwrap();
    assert_eq!(line, "GROUP misc.test\r\n");
    assert!(line.ends_with("\r\n"));
    assert_eq!(line.matches("\r\n").count(), 1);
}

#[test]
fn test_two_word_keywords() {
    let line = commands::build_command_line(Command::ModeReader, &[]).unwrap();
    assert_eq!(line, "MODE READER\r\n");

    let line = commands::build_command_line(Command::AuthinfoUser, &["alice"]).unwrap();
    assert_eq!(line, "AUTHINFO USER alice\r\n");
}

#[test]
fn test_command_parse_is_case_insensitive() {
    assert_eq!("group".parse::<Command>().unwrap(), Command::Group);
    assert_eq!("GROUP".parse::<Command>().unwrap(), Command::Group);
    assert_eq!("Mode Reader".parse::<Command>().unwrap(), Command::ModeReader);
}

#[test]
fn test_message_id_wrapping() {
    assert_eq!(commands::ensure_message_id("a@b"), "<a@b>");
    assert_eq!(commands::ensure_message_id("<a@b>"), "<a@b>");
}
