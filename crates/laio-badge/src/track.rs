//! Best-effort delivery of impression and click events.
//!
//! Nothing here waits for a response or retries. Every failure is traced at `debug` and
//! dropped.

use laio_badge_core::{BadgeConfig, EMBED_VERSION, EventKind, PageContext, TrackPayload};
use tracing::debug;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://mteigxlxuvvqdagffvqw.supabase.co/functions/v1/track";

const TOKEN_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Collector endpoint. `None` disables emission entirely.
    pub endpoint: Option<Url>,
    pub version: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            endpoint: Some(Url::parse(DEFAULT_ENDPOINT).expect("valid default endpoint")),
            version: EMBED_VERSION.to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn disabled() -> Self {
        Self {
            endpoint: None,
            ..Self::default()
        }
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            endpoint: Some(Url::parse(endpoint)?),
            ..Self::default()
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("beacon was not queued by the user agent")]
    BeaconRefused,
    #[error("transport unavailable: {0}")]
    Unavailable(&'static str),
    #[error("{0}")]
    Host(String),
}

/// Fire-and-forget network primitives.
pub trait Transport {
    fn supports_beacon(&self) -> bool;

    /// Queues `body` as an `application/json` beacon.
    fn send_beacon(&mut self, endpoint: &Url, body: &str) -> Result<(), TransportError>;

    /// Starts a GET for `url` as an image request; the response is ignored.
    fn load_pixel(&mut self, url: &Url) -> Result<(), TransportError>;
}

/// How an event left the page, if it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Beacon,
    Pixel,
    Dropped,
}

#[derive(Debug)]
pub struct Tracker<T> {
    config: TrackerConfig,
    transport: T,
}

impl<T: Transport> Tracker<T> {
    pub fn new(config: TrackerConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Clicks prefer a JSON beacon and fall back to the pixel; impressions always use the pixel.
    pub fn emit(&mut self, kind: EventKind, badge: &BadgeConfig, page: &PageContext) -> Delivery {
        let Some(endpoint) = self.config.endpoint.as_ref() else {
            return Delivery::Dropped;
        };
        let payload = TrackPayload::new(kind, badge, &self.config.version, page);

        if kind == EventKind::Click && self.transport.supports_beacon() {
            match payload.to_json() {
                Ok(body) => match self.transport.send_beacon(endpoint, &body) {
                    Ok(()) => return Delivery::Beacon,
                    Err(err) => debug!(%err, "beacon failed; falling back to pixel"),
                },
                Err(err) => debug!(%err, "beacon body not serializable"),
            }
        }

        let url = pixel_url(endpoint, &payload, badge.debug);
        match self.transport.load_pixel(&url) {
            Ok(()) => Delivery::Pixel,
            Err(err) => {
                debug!(%err, event = %kind, "tracking pixel dropped");
                Delivery::Dropped
            }
        }
    }
}

/// `endpoint?t=..&slug=..&..&ua=..&r=<token>[&debug=1]`
pub fn pixel_url(endpoint: &Url, payload: &TrackPayload, debug: bool) -> Url {
    let mut url = endpoint.clone();
    {
        let mut query = url.query_pairs_mut();
        for (name, value) in payload.pairs() {
            query.append_pair(name, value);
        }
        query.append_pair("r", &random_token());
        if debug {
            query.append_pair("debug", "1");
        }
    }
    url
}

/// Short lowercase alphanumeric cache buster.
fn random_token() -> String {
    let mut token = uuid::Uuid::new_v4().simple().to_string();
    token.truncate(TOKEN_LEN);
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use laio_badge_core::EmbedAttributes;

    #[derive(Default)]
    struct Log {
        beacon: Option<bool>,
        beacons: Vec<String>,
        pixels: Vec<Url>,
    }

    impl Transport for Log {
        fn supports_beacon(&self) -> bool {
            self.beacon.is_some()
        }

        fn send_beacon(&mut self, _endpoint: &Url, body: &str) -> Result<(), TransportError> {
            if self.beacon == Some(true) {
                self.beacons.push(body.to_string());
                Ok(())
            } else {
                Err(TransportError::BeaconRefused)
            }
        }

        fn load_pixel(&mut self, url: &Url) -> Result<(), TransportError> {
            self.pixels.push(url.clone());
            Ok(())
        }
    }

    fn page() -> PageContext {
        PageContext {
            hostname: "partner.example".to_string(),
            href: "https://partner.example/about?x=1".to_string(),
            user_agent: "agent/1.0".to_string(),
        }
    }

    fn badge(debug: &str) -> BadgeConfig {
        BadgeConfig::resolve(
            &EmbedAttributes::new()
                .with("data-slug", "acme")
                .with("data-debug", debug),
        )
    }

    #[test]
    fn pixel_query_carries_payload_token_and_debug() {
        let mut tracker = Tracker::new(TrackerConfig::default(), Log::default());
        assert_eq!(
            tracker.emit(EventKind::Impression, &badge("1"), &page()),
            Delivery::Pixel
        );
        let url = &tracker.transport().pixels[0];
        assert!(url.as_str().starts_with(DEFAULT_ENDPOINT));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["t", "slug", "color", "size", "layout", "v", "domain", "page", "ua", "r", "debug"]
        );
        assert_eq!(pairs[0].1, "impression");
        assert_eq!(pairs[7].1, "https://partner.example/about?x=1");
        assert_eq!(pairs[9].1.len(), TOKEN_LEN);
        assert!(pairs[9].1.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn pixel_omits_debug_flag_by_default() {
        let mut tracker = Tracker::new(TrackerConfig::default(), Log::default());
        tracker.emit(EventKind::Impression, &badge("0"), &page());
        assert!(
            !tracker.transport().pixels[0]
                .query_pairs()
                .any(|(k, _)| k == "debug")
        );
    }

    #[test]
    fn click_prefers_beacon() {
        let log = Log {
            beacon: Some(true),
            ..Log::default()
        };
        let mut tracker = Tracker::new(TrackerConfig::default(), log);
        assert_eq!(
            tracker.emit(EventKind::Click, &badge("0"), &page()),
            Delivery::Beacon
        );
        assert!(tracker.transport().pixels.is_empty());
        let body: serde_json::Value =
            serde_json::from_str(&tracker.transport().beacons[0]).unwrap();
        assert_eq!(body["t"], "click");
        assert_eq!(body["domain"], "partner.example");
    }

    #[test]
    fn refused_beacon_falls_back_to_pixel() {
        let log = Log {
            beacon: Some(false),
            ..Log::default()
        };
        let mut tracker = Tracker::new(TrackerConfig::default(), log);
        assert_eq!(
            tracker.emit(EventKind::Click, &badge("0"), &page()),
            Delivery::Pixel
        );
        assert_eq!(tracker.transport().pixels.len(), 1);
    }

    #[test]
    fn impressions_never_use_beacon() {
        let log = Log {
            beacon: Some(true),
            ..Log::default()
        };
        let mut tracker = Tracker::new(TrackerConfig::default(), log);
        tracker.emit(EventKind::Impression, &badge("0"), &page());
        assert!(tracker.transport().beacons.is_empty());
        assert_eq!(tracker.transport().pixels.len(), 1);
    }

    #[test]
    fn missing_endpoint_drops_everything() {
        let mut tracker = Tracker::new(TrackerConfig::disabled(), Log::default());
        assert_eq!(
            tracker.emit(EventKind::Click, &badge("0"), &page()),
            Delivery::Dropped
        );
        assert!(tracker.transport().pixels.is_empty());
    }
}
