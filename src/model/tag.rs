//! Tag sets: the closed vocabularies that select capabilities.
//!
//! Tags arrive as plain strings. Parsing is exact and case-sensitive;
//! what happens to an unknown tag is decided per lookup table by the
//! registries, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Sms,
    Push,
}

impl Channel {
    /// Parse a channel tag, returning `None` for anything outside the set.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "email" => Some(Self::Email),
            "sms" => Some(Self::Sms),
            "push" => Some(Self::Push),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Push => "push",
        }
    }
}

/// A kind of report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Sales,
    Inventory,
    Financial,
}

impl ReportKind {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "sales" => Some(Self::Sales),
            "inventory" => Some(Self::Inventory),
            "financial" => Some(Self::Financial),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Inventory => "inventory",
            Self::Financial => "financial",
        }
    }
}

/// A document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pdf,
    Excel,
    Html,
}

impl OutputFormat {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "pdf" => Some(Self::Pdf),
            "excel" => Some(Self::Excel),
            "html" => Some(Self::Html),
            _ => None,
        }
    }
}

/// How a finished report leaves the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    Email,
    Download,
    Cloud,
}

impl DeliveryMethod {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "email" => Some(Self::Email),
            "download" => Some(Self::Download),
            "cloud" => Some(Self::Cloud),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
