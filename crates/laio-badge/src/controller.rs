//! Keeps one badge mounted for the lifetime of a page.
//!
//! The controller owns the [`BadgeState`] and reacts to [`HostEvent`]s. It never returns
//! errors to the host: a failed cycle is traced and the next mutation retries it.

use crate::host::{Host, HostError, WatchHandle};
use crate::track::{Tracker, TrackerConfig, Transport};
use laio_badge_core::{BadgeConfig, EventKind};
use laio_badge_render::BadgeElement;
use laio_badge_render::element::default_link_base;
use tracing::{debug, trace};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeState<N> {
    pub config: BadgeConfig,
    /// The embedding script element. Not owned.
    pub anchor: Option<N>,
    /// Current wrapper. Replaced on re-mount, never reused.
    pub mounted: Option<N>,
    pub impression_logged: bool,
    pub observer: Option<WatchHandle>,
}

impl<N> BadgeState<N> {
    pub fn new(config: BadgeConfig, anchor: Option<N>) -> Self {
        Self {
            config,
            anchor,
            mounted: None,
            impression_logged: false,
            observer: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub tracker: TrackerConfig,
    /// Base of the marketing link the badge points at.
    pub link_base: Url,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            link_base: default_link_base(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The document left `Loading`.
    Ready,
    /// A batch of child-list mutations somewhere in the document.
    Mutation,
    /// History push/replace or back/forward.
    Navigation,
    /// The tick scheduled by [`Host::defer_remount`].
    DeferredRemount,
    /// The badge anchor was clicked.
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Mount attempted and observation installed.
    Started,
    /// Waiting for [`HostEvent::Ready`].
    Deferred,
}

pub struct BadgeController<H: Host, T> {
    host: H,
    tracker: Tracker<T>,
    link_base: Url,
    state: BadgeState<H::Node>,
    started: bool,
}

impl<H: Host, T: Transport> BadgeController<H, T> {
    pub fn new(
        host: H,
        transport: T,
        config: BadgeConfig,
        anchor: Option<H::Node>,
        options: ControllerOptions,
    ) -> Self {
        Self {
            host,
            tracker: Tracker::new(options.tracker, transport),
            link_base: options.link_base,
            state: BadgeState::new(config, anchor),
            started: false,
        }
    }

    pub fn state(&self) -> &BadgeState<H::Node> {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn tracker(&self) -> &Tracker<T> {
        &self.tracker
    }

    /// Mounts and starts observing once the document is interactive.
    ///
    /// While the document is loading nothing is mounted. If the host cannot report readiness,
    /// the removal watcher is installed early and the first host event seen after the document
    /// becomes interactive starts the badge.
    pub fn start(&mut self) -> StartOutcome {
        if self.host.ready_state().can_mount() {
            self.go();
            return StartOutcome::Started;
        }
        if let Err(err) = self.host.notify_when_ready() {
            debug!(%err, "ready notification unavailable; waiting for document activity");
            self.start_observer();
        }
        StartOutcome::Deferred
    }

    pub fn handle(&mut self, event: HostEvent) {
        trace!(?event, "badge host event");
        match event {
            HostEvent::Ready => {
                if !self.started {
                    self.go();
                }
            }
            HostEvent::Mutation | HostEvent::Navigation | HostEvent::DeferredRemount
                if !self.started =>
            {
                if self.host.ready_state().can_mount() {
                    self.go();
                }
            }
            HostEvent::Mutation => {
                let present = self
                    .state
                    .mounted
                    .as_ref()
                    .is_some_and(|node| self.host.is_connected(node));
                if !present {
                    self.mount();
                }
            }
            HostEvent::Navigation => self.host.defer_remount(),
            HostEvent::DeferredRemount => {
                self.mount();
            }
            HostEvent::Click => {
                if self.state.config.track {
                    let page = self.host.page();
                    self.tracker.emit(EventKind::Click, &self.state.config, &page);
                }
            }
        }
    }

    fn go(&mut self) {
        self.started = true;
        self.mount();
        self.start_observer();
    }

    /// Ensures the badge is in the document and returns its wrapper.
    ///
    /// A connected badge is left alone. Returns `None` when the page offers no insertion point
    /// or the host failed; both are retried on the next mutation.
    pub fn mount(&mut self) -> Option<H::Node> {
        match self.try_mount() {
            Ok(node) => node,
            Err(err) => {
                debug!(%err, "badge mount abandoned");
                None
            }
        }
    }

    fn try_mount(&mut self) -> Result<Option<H::Node>, HostError> {
        if let Some(node) = &self.state.mounted {
            if self.host.is_connected(node) {
                return Ok(Some(node.clone()));
            }
        }

        let target = self
            .state
            .config
            .target_id
            .as_ref()
            .and_then(|id| self.host.element_by_id(id.as_str()));
        let anchor_parent = self
            .state
            .anchor
            .as_ref()
            .and_then(|anchor| self.host.parent(anchor));
        let Some(parent) = target
            .clone()
            .or_else(|| anchor_parent.clone())
            .or_else(|| self.host.body())
            .or_else(|| self.host.document_element())
        else {
            trace!("no insertion point for badge");
            return Ok(None);
        };

        let element = BadgeElement::build_with_link_base(&self.state.config, &self.link_base);
        let badge = self.host.build_badge(&element)?;
        match (&target, &self.state.anchor, &anchor_parent) {
            (None, Some(anchor), Some(anchor_parent)) => {
                self.host.insert_before(anchor_parent, &badge.wrapper, anchor)?;
            }
            _ => self.host.append_child(&parent, &badge.wrapper)?,
        }
        self.state.mounted = Some(badge.wrapper.clone());

        if self.state.config.track && !self.state.impression_logged {
            let page = self.host.page();
            self.tracker
                .emit(EventKind::Impression, &self.state.config, &page);
            self.state.impression_logged = true;
        }

        if let Err(err) = self.host.listen_click(&badge.anchor) {
            debug!(%err, "click listener not attached");
        }

        Ok(Some(badge.wrapper))
    }

    /// Installs the removal watcher and navigation hooks. Later calls do nothing.
    pub fn start_observer(&mut self) {
        if self.state.observer.is_some() {
            return;
        }
        match self.host.watch_removals() {
            Ok(handle) => self.state.observer = Some(handle),
            Err(err) => {
                debug!(%err, "removal watcher unavailable");
                return;
            }
        }
        if let Err(err) = self.host.watch_navigation() {
            debug!(%err, "navigation hooks unavailable");
        }
    }
}
