//! NNTP capabilities parsing and storage (RFC 3977 Section 5.2)
//!
//! The CAPABILITIES command returns a 101 multi-line block, one capability
//! per line with optional arguments.

use std::collections::HashMap;

/// The capabilities advertised by an NNTP server
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    /// Capability name (uppercased) to its arguments
    capabilities: HashMap<String, Vec<String>>,
}

impl Capabilities {
    /// Create an empty capability set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse capabilities from a drained 101 data block
    ///
    /// Each line is `CAPABILITY [arg1 arg2 ...]`, e.g.:
    ///
    /// ```text
    /// VERSION 2
    /// READER
    /// POST
    /// OVER MSGID
    /// ```
    pub fn parse(block: &str) -> Self {
        let mut capabilities = HashMap::new();

        for line in block.lines() {
            let mut parts = line.split_whitespace();
            let Some(capability) = parts.next() else {
                continue;
            };
            let args: Vec<String> = parts.map(|s| s.to_string()).collect();
            capabilities.insert(capability.to_uppercase(), args);
        }

        Self { capabilities }
    }

    /// Check if a capability is advertised (case-insensitive)
    #[must_use]
    pub fn has(&self, capability: &str) -> bool {
        self.capabilities.contains_key(&capability.to_uppercase())
    }

    /// Arguments for a capability; `None` if not advertised
    #[must_use]
    pub fn args(&self, capability: &str) -> Option<&[String]> {
        self.capabilities
            .get(&capability.to_uppercase())
            .map(Vec::as_slice)
    }

    /// Check for a capability carrying a specific argument
    pub fn has_arg(&self, capability: &str, arg: &str) -> bool {
        self.args(capability)
            .map(|args| args.iter().any(|a| a.eq_ignore_ascii_case(arg)))
            .unwrap_or(false)
    }

    /// All advertised capability names
    pub fn list(&self) -> Vec<String> {
        self.capabilities.keys().cloned().collect()
    }
}
