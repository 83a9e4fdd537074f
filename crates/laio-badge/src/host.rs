//! Capabilities a page must provide to carry a badge.
//!
//! The controller never touches a DOM directly. Browsers implement [`Host`] with `web-sys`
//! (see `web` on `wasm32`); tests use the in-memory arena in `testing`.

use laio_badge_core::PageContext;
use laio_badge_render::BadgeElement;
use std::fmt;

/// `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    pub fn from_dom(value: &str) -> Self {
        match value {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            _ => Self::Complete,
        }
    }

    pub fn can_mount(self) -> bool {
        !matches!(self, Self::Loading)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("DOM operation `{op}` failed: {message}")]
    Dom { op: &'static str, message: String },
    #[error("host capability unavailable: {0}")]
    Unavailable(&'static str),
    #[error("unknown node")]
    UnknownNode,
}

impl HostError {
    pub fn dom(op: &'static str, message: impl fmt::Display) -> Self {
        Self::Dom {
            op,
            message: message.to_string(),
        }
    }
}

/// Opaque token for a removal watcher. Hosts keep the watcher itself alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchHandle(pub u32);

/// Nodes created for one badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltBadge<N> {
    /// Outer `<span data-laio-badge>`; this is what gets inserted and tracked.
    pub wrapper: N,
    /// The `<a>` inside the wrapper; click listeners go here.
    pub anchor: N,
}

pub trait Host {
    type Node: Clone + PartialEq + fmt::Debug;

    fn ready_state(&self) -> ReadyState;

    /// Asks for a single [`crate::HostEvent::Ready`] once the document leaves `Loading`.
    fn notify_when_ready(&mut self) -> Result<(), HostError>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
    fn document_element(&self) -> Option<Self::Node>;
    fn is_connected(&self, node: &Self::Node) -> bool;

    /// Creates the wrapper/anchor/svg subtree for `element`, detached.
    fn build_badge(&mut self, element: &BadgeElement) -> Result<BuiltBadge<Self::Node>, HostError>;

    fn insert_before(
        &mut self,
        parent: &Self::Node,
        node: &Self::Node,
        reference: &Self::Node,
    ) -> Result<(), HostError>;

    fn append_child(&mut self, parent: &Self::Node, node: &Self::Node) -> Result<(), HostError>;

    /// Routes clicks on `anchor` back as [`crate::HostEvent::Click`]. On success the listener
    /// from the previous call is removed and released.
    fn listen_click(&mut self, anchor: &Self::Node) -> Result<(), HostError>;

    /// Subtree-wide child-list watcher on the document root. Every batch of mutations is
    /// delivered as [`crate::HostEvent::Mutation`].
    fn watch_removals(&mut self) -> Result<WatchHandle, HostError>;

    /// History push/replace and back/forward, each delivered as
    /// [`crate::HostEvent::Navigation`].
    fn watch_navigation(&mut self) -> Result<(), HostError>;

    /// Schedules [`crate::HostEvent::DeferredRemount`] on the next turn of the event loop.
    fn defer_remount(&mut self);

    fn page(&self) -> PageContext;
}
