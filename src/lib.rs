#![doc = include_str!("../README.md")]

/// Article representation and wire encoding (RFC 5536 headers, dot-stuffing)
pub mod article;
/// Lazy multi-line data block stream
pub mod body;
mod capabilities;
mod client;
/// Command keywords, typed arguments, and response payload parsers
pub mod commands;
mod config;
mod error;
mod framer;
mod reader;
mod response;
/// SASL authentication framework (RFC 4643)
pub mod sasl;

pub use article::{stuff, unstuff, Article, Body, Headers};
pub use body::BodyReader;
pub use capabilities::Capabilities;
pub use client::NntpClient;
pub use commands::{
    ActiveGroup, ArticleRange, ArticleRef, Command, GroupInfo, HdrEntry, NewsgroupInfo, OverEntry,
    QueryTarget,
};
pub use config::{ConnectOptions, LogLevel, PLAIN_PORT, TLS_PORT};
pub use error::{NntpError, Result};
pub use response::{codes, NntpResponse};
pub use sasl::{decode_sasl_data, encode_sasl_data, SaslMechanism, SaslPlain};
