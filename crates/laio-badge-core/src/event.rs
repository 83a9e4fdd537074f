use crate::config::BadgeConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version tag sent with every event (`v`).
pub const EMBED_VERSION: &str = "v2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Impression,
    Click,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Impression => "impression",
            Self::Click => "click",
        }
    }
}

impl FromStr for EventKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "impression" => Ok(Self::Impression),
            "click" => Ok(Self::Click),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the badge is being shown. Supplied by the host page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub hostname: String,
    pub href: String,
    pub user_agent: String,
}

/// One tracking event as sent to the collector, either as a JSON body or as query pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackPayload {
    pub t: EventKind,
    pub slug: String,
    pub color: String,
    pub size: String,
    pub layout: String,
    pub v: String,
    pub domain: String,
    pub page: String,
    pub ua: String,
}

impl TrackPayload {
    pub fn new(kind: EventKind, config: &BadgeConfig, version: &str, page: &PageContext) -> Self {
        Self {
            t: kind,
            slug: config.slug.to_string(),
            color: config.color.to_string(),
            size: config.size.to_string(),
            layout: config.layout.to_string(),
            v: version.to_string(),
            domain: page.hostname.clone(),
            page: page.href.clone(),
            ua: page.user_agent.clone(),
        }
    }

    /// Fields in wire order, for query-string encoding.
    pub fn pairs(&self) -> [(&'static str, &str); 9] {
        [
            ("t", self.t.as_str()),
            ("slug", &self.slug),
            ("color", &self.color),
            ("size", &self.size),
            ("layout", &self.layout),
            ("v", &self.v),
            ("domain", &self.domain),
            ("page", &self.page),
            ("ua", &self.ua),
        ]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
