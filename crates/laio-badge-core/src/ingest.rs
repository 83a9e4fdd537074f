//! Validation of requests arriving at the tracking collector.
//!
//! The collector accepts the same event either as a `GET` pixel (query string) or as a `POST`
//! beacon (JSON body, whatever the content type). Only a missing `t`/`slug` or an unknown event
//! type is rejected with `400`; every other failure still answers with the pixel or `204` so
//! that badges never observe an error.

use crate::error::IngestError;
use crate::event::EventKind;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::OnceLock;
use url::Url;

const TRANSPARENT_GIF_BASE64: &str = "R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

const SLUG_LIMIT: usize = 50;
const DOMAIN_LIMIT: usize = 255;
const URL_LIMIT: usize = 2000;
const USER_AGENT_LIMIT: usize = 500;

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "authorization, x-client-info, apikey, content-type",
    ),
    ("Access-Control-Allow-Methods", "POST, GET, OPTIONS"),
];

/// 1x1 transparent GIF returned for pixel requests.
pub fn transparent_gif() -> &'static [u8] {
    static GIF: OnceLock<Vec<u8>> = OnceLock::new();
    GIF.get_or_init(|| {
        base64::engine::general_purpose::STANDARD
            .decode(TRANSPARENT_GIF_BASE64)
            .expect("valid gif literal")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Options,
}

/// A collector request, reduced to what ingestion needs.
#[derive(Debug, Clone)]
pub struct IngestRequest {
    pub method: Method,
    pub url: String,
    /// Header names are matched case-insensitively.
    pub headers: IndexMap<String, String>,
    pub body: String,
}

impl IngestRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: IndexMap::new(),
            body: String::new(),
        }
    }

    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: IndexMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Event fields as sent by the badge; all optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IncomingEvent {
    #[serde(deserialize_with = "loose_event_type")]
    pub t: Option<String>,
    pub slug: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub layout: Option<String>,
    pub v: Option<String>,
    pub domain: Option<String>,
    pub page: Option<String>,
    pub ua: Option<String>,
}

/// Beacon clients may send any JSON for `t`. Falsy values count as absent; other non-strings
/// keep their JSON text so they fail event-type validation instead of the body parse.
fn loose_event_type<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f == 0.0) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl IncomingEvent {
    fn from_query(url: &Url) -> Self {
        let mut out = Self::default();
        for (key, value) in url.query_pairs() {
            let slot = match key.as_ref() {
                "t" => &mut out.t,
                "slug" => &mut out.slug,
                "color" => &mut out.color,
                "size" => &mut out.size,
                "layout" => &mut out.layout,
                "v" => &mut out.v,
                "domain" => &mut out.domain,
                "page" => &mut out.page,
                "ua" => &mut out.ua,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        out
    }
}

/// A validated event, shaped like a row of the `events` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub event_type: EventKind,
    pub partner_slug: String,
    pub domain: Option<String>,
    pub page_url: Option<String>,
    pub badge_layout: String,
    pub badge_color: Option<String>,
    pub badge_size: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub country: Option<String>,
    pub received_at: DateTime<Utc>,
}

fn clip(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

fn clip_optional(value: Option<&str>, max: usize) -> Option<String> {
    value
        .map(|v| clip(v, max))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parses and validates a collector request.
pub fn parse_event(
    request: &IngestRequest,
    received_at: DateTime<Utc>,
) -> Result<EventRecord, IngestError> {
    let incoming = match request.method {
        Method::Post => serde_json::from_str::<IncomingEvent>(&request.body)?,
        Method::Get | Method::Options => IncomingEvent::from_query(&Url::parse(&request.url)?),
    };

    let (Some(t), Some(slug)) = (non_empty(incoming.t), non_empty(incoming.slug)) else {
        return Err(IngestError::MissingFields);
    };
    let event_type = t
        .parse::<EventKind>()
        .map_err(|_| IngestError::InvalidEventType { event_type: t })?;

    let country = request
        .header("cf-ipcountry")
        .or_else(|| request.header("x-country"))
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    Ok(EventRecord {
        event_type,
        partner_slug: clip(&slug, SLUG_LIMIT).to_string(),
        domain: clip_optional(incoming.domain.as_deref(), DOMAIN_LIMIT),
        page_url: clip_optional(incoming.page.as_deref(), URL_LIMIT),
        badge_layout: non_empty(incoming.layout).unwrap_or_else(|| "standard".to_string()),
        badge_color: non_empty(incoming.color),
        badge_size: non_empty(incoming.size),
        user_agent: clip_optional(incoming.ua.as_deref(), USER_AGENT_LIMIT),
        referrer: clip_optional(request.header("referer"), URL_LIMIT),
        country,
        received_at,
    })
}

/// Collector answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl IngestResponse {
    fn with_cors(status: u16, extra: &[(&str, &str)], body: Vec<u8>) -> Self {
        let headers = CORS_HEADERS
            .iter()
            .chain(extra.iter())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn preflight() -> Self {
        Self::with_cors(200, &[], Vec::new())
    }

    pub fn pixel() -> Self {
        Self::with_cors(
            200,
            &[
                ("Content-Type", "image/gif"),
                ("Cache-Control", "no-store, no-cache, must-revalidate"),
            ],
            transparent_gif().to_vec(),
        )
    }

    pub fn no_content() -> Self {
        Self::with_cors(204, &[], Vec::new())
    }

    pub fn bad_request(message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        Self::with_cors(
            400,
            &[("Content-Type", "application/json")],
            body.into_bytes(),
        )
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Result of handling one collector request.
#[derive(Debug)]
pub struct IngestOutcome {
    /// The record to store, if the request carried a valid event.
    pub record: Option<EventRecord>,
    /// Why no record was produced, if any.
    pub rejection: Option<IngestError>,
    pub response: IngestResponse,
}

/// Validates a request and picks the response the collector should send.
pub fn handle(request: &IngestRequest, received_at: DateTime<Utc>) -> IngestOutcome {
    if request.method == Method::Options {
        return IngestOutcome {
            record: None,
            rejection: None,
            response: IngestResponse::preflight(),
        };
    }

    let success = || match request.method {
        Method::Get => IngestResponse::pixel(),
        Method::Post | Method::Options => IngestResponse::no_content(),
    };

    match parse_event(request, received_at) {
        Ok(record) => IngestOutcome {
            record: Some(record),
            rejection: None,
            response: success(),
        },
        Err(err) if err.is_client_error() => {
            tracing::debug!(error = %err, "rejected tracking event");
            let message = match &err {
                IngestError::MissingFields => "Missing required fields: t, slug",
                _ => "Invalid event type",
            };
            IngestOutcome {
                record: None,
                response: IngestResponse::bad_request(message),
                rejection: Some(err),
            }
        }
        Err(err) => {
            tracing::debug!(error = %err, "unreadable tracking request");
            IngestOutcome {
                record: None,
                rejection: Some(err),
                response: success(),
            }
        }
    }
}
