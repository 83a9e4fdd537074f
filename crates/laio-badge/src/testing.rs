//! In-memory document and transport for driving a [`BadgeController`] without a browser.
//!
//! [`MemoryHost`] is a small arena DOM: nodes are indices, parents and children are links, and
//! connectedness is reachability from the document node. Host capabilities queue
//! [`HostEvent`]s instead of calling back; [`run_until_idle`] feeds them to the controller.

use crate::controller::{BadgeController, HostEvent};
use crate::host::{BuiltBadge, Host, HostError, ReadyState, WatchHandle};
use crate::track::{Transport, TransportError};
use laio_badge_core::{EventKind, PageContext};
use laio_badge_render::BadgeElement;
use laio_badge_render::element::WRAPPER_MARKER;
use std::collections::VecDeque;
use url::Url;

/// Upper bound on events processed by one [`run_until_idle`] call.
const MAX_EVENTS: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    inner_html: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            inner_html: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct MemoryHost {
    nodes: Vec<Node>,
    document: NodeId,
    document_element: Option<NodeId>,
    body: Option<NodeId>,
    ready: ReadyState,
    ready_requested: bool,
    events: VecDeque<HostEvent>,
    click_listener: Option<NodeId>,
    watchers: u32,
    navigation_hooked: bool,
    fail_once: Option<&'static str>,
    page: PageContext,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// `<html><head></head><body></body></html>`, ready state `Complete`.
    pub fn new() -> Self {
        let mut host = Self::empty();
        let html = host.create_element("html");
        let head = host.create_element("head");
        let body = host.create_element("body");
        host.link(host.document, html, None);
        host.link(html, head, None);
        host.link(html, body, None);
        host.document_element = Some(html);
        host.body = Some(body);
        host
    }

    /// A document node with no children at all.
    pub fn empty() -> Self {
        Self {
            nodes: vec![Node::new("#document")],
            document: NodeId(0),
            document_element: None,
            body: None,
            ready: ReadyState::Complete,
            ready_requested: false,
            events: VecDeque::new(),
            click_listener: None,
            watchers: 0,
            navigation_hooked: false,
            fail_once: None,
            page: PageContext {
                hostname: "partner.example".to_string(),
                href: "https://partner.example/".to_string(),
                user_agent: "memory-host".to_string(),
            },
        }
    }

    pub fn with_page(mut self, page: PageContext) -> Self {
        self.page = page;
        self
    }

    pub fn body_node(&self) -> Option<NodeId> {
        self.body
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Node::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let attrs = &mut self.nodes[node.0].attrs;
        match attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn inner_html(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].inner_html.as_deref()
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Page-side `appendChild`. Queues a mutation when a watcher is installed.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.link(parent, child, None);
        self.mutated();
    }

    /// Page-side `remove()`. Queues a mutation when a watcher is installed.
    pub fn remove(&mut self, node: NodeId) {
        self.unlink(node);
        self.mutated();
    }

    /// Connected wrappers carrying the badge marker, in document order.
    pub fn badges(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_badges(self.document, &mut out);
        out
    }

    pub fn set_ready_state(&mut self, ready: ReadyState) {
        self.ready = ready;
        if ready.can_mount() && self.ready_requested {
            self.ready_requested = false;
            self.events.push_back(HostEvent::Ready);
        }
    }

    /// `history.pushState` or a back/forward step.
    pub fn navigate(&mut self) {
        if self.navigation_hooked {
            self.events.push_back(HostEvent::Navigation);
        }
    }

    /// Dispatches a click on `node`. Only the node holding the listener produces an event.
    pub fn click(&mut self, node: NodeId) {
        if self.click_listener == Some(node) {
            self.events.push_back(HostEvent::Click);
        }
    }

    /// Anchor currently holding the click listener.
    pub fn click_listener(&self) -> Option<NodeId> {
        self.click_listener
    }

    /// Makes the next call of the named host operation fail.
    pub fn fail_once(&mut self, op: &'static str) {
        self.fail_once = Some(op);
    }

    pub fn watcher_count(&self) -> u32 {
        self.watchers
    }

    pub fn navigation_hooked(&self) -> bool {
        self.navigation_hooked
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn next_event(&mut self) -> Option<HostEvent> {
        self.events.pop_front()
    }

    fn check(&mut self, op: &'static str) -> Result<(), HostError> {
        if self.fail_once == Some(op) {
            self.fail_once = None;
            return Err(HostError::dom(op, "injected failure"));
        }
        Ok(())
    }

    fn mutated(&mut self) {
        if self.watchers > 0 {
            self.events.push_back(HostEvent::Mutation);
        }
    }

    fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    fn link(&mut self, parent: NodeId, child: NodeId, before: Option<NodeId>) {
        self.unlink(child);
        let children = &mut self.nodes[parent.0].children;
        let at = before
            .and_then(|r| children.iter().position(|c| *c == r))
            .unwrap_or(children.len());
        children.insert(at, child);
        self.nodes[child.0].parent = Some(parent);
    }

    fn unlink(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    fn connected(&self, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == self.document {
                return true;
            }
            cursor = self.nodes[current.0].parent;
        }
        false
    }

    fn collect_badges(&self, node: NodeId, out: &mut Vec<NodeId>) {
        if self.attribute(node, WRAPPER_MARKER).is_some() {
            out.push(node);
        }
        for child in &self.nodes[node.0].children {
            self.collect_badges(*child, out);
        }
    }
}

impl Host for MemoryHost {
    type Node = NodeId;

    fn ready_state(&self) -> ReadyState {
        self.ready
    }

    fn notify_when_ready(&mut self) -> Result<(), HostError> {
        self.check("notify_when_ready")?;
        self.ready_requested = true;
        Ok(())
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|n| self.attribute(*n, "id") == Some(id) && self.connected(*n))
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    fn body(&self) -> Option<NodeId> {
        self.body.filter(|b| self.connected(*b))
    }

    fn document_element(&self) -> Option<NodeId> {
        self.document_element.filter(|e| self.connected(*e))
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        self.contains(*node) && self.connected(*node)
    }

    fn build_badge(&mut self, element: &BadgeElement) -> Result<BuiltBadge<NodeId>, HostError> {
        self.check("build_badge")?;
        let wrapper = self.create_element("span");
        self.set_attribute(wrapper, WRAPPER_MARKER, "");
        self.set_attribute(wrapper, "style", &element.wrapper_style);

        let anchor = self.create_element("a");
        self.set_attribute(anchor, "href", &element.href);
        self.set_attribute(anchor, "target", element.target);
        self.set_attribute(anchor, "rel", element.rel);
        self.nodes[anchor.0].inner_html = Some(element.svg.clone());
        self.link(wrapper, anchor, None);

        Ok(BuiltBadge { wrapper, anchor })
    }

    fn insert_before(
        &mut self,
        parent: &NodeId,
        node: &NodeId,
        reference: &NodeId,
    ) -> Result<(), HostError> {
        self.check("insert_before")?;
        if !self.contains(*parent) || !self.contains(*node) || !self.contains(*reference) {
            return Err(HostError::UnknownNode);
        }
        if self.nodes[reference.0].parent != Some(*parent) {
            return Err(HostError::dom(
                "insert_before",
                "reference is not a child of parent",
            ));
        }
        self.link(*parent, *node, Some(*reference));
        self.mutated();
        Ok(())
    }

    fn append_child(&mut self, parent: &NodeId, node: &NodeId) -> Result<(), HostError> {
        self.check("append_child")?;
        if !self.contains(*parent) || !self.contains(*node) {
            return Err(HostError::UnknownNode);
        }
        self.link(*parent, *node, None);
        self.mutated();
        Ok(())
    }

    fn listen_click(&mut self, anchor: &NodeId) -> Result<(), HostError> {
        self.check("listen_click")?;
        self.click_listener = Some(*anchor);
        Ok(())
    }

    fn watch_removals(&mut self) -> Result<WatchHandle, HostError> {
        self.check("watch_removals")?;
        self.watchers += 1;
        Ok(WatchHandle(self.watchers))
    }

    fn watch_navigation(&mut self) -> Result<(), HostError> {
        self.check("watch_navigation")?;
        self.navigation_hooked = true;
        Ok(())
    }

    fn defer_remount(&mut self) {
        self.events.push_back(HostEvent::DeferredRemount);
    }

    fn page(&self) -> PageContext {
        self.page.clone()
    }
}

/// Delivers queued host events until the queue is empty. Returns how many were handled.
pub fn run_until_idle<T: Transport>(controller: &mut BadgeController<MemoryHost, T>) -> usize {
    let mut handled = 0;
    while handled < MAX_EVENTS {
        let Some(event) = controller.host_mut().next_event() else {
            break;
        };
        controller.handle(event);
        handled += 1;
    }
    handled
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Beacon { endpoint: Url, body: String },
    Pixel(Url),
}

impl Sent {
    /// The `t` field of the request.
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            Self::Beacon { body, .. } => serde_json::from_str::<serde_json::Value>(body)
                .ok()?
                .get("t")?
                .as_str()?
                .parse::<EventKind>()
                .ok(),
            Self::Pixel(url) => url
                .query_pairs()
                .find(|(k, _)| k == "t")
                .and_then(|(_, v)| v.parse::<EventKind>().ok()),
        }
    }
}

/// Records every request instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    pub beacon_supported: bool,
    pub refuse_beacons: bool,
    pub fail_pixels: bool,
    pub sent: Vec<Sent>,
}

impl RecordingTransport {
    pub fn with_beacon() -> Self {
        Self {
            beacon_supported: true,
            ..Self::default()
        }
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.sent.iter().filter_map(Sent::kind).collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.kinds().into_iter().filter(|k| *k == kind).count()
    }
}

impl Transport for RecordingTransport {
    fn supports_beacon(&self) -> bool {
        self.beacon_supported
    }

    fn send_beacon(&mut self, endpoint: &Url, body: &str) -> Result<(), TransportError> {
        if self.refuse_beacons {
            return Err(TransportError::BeaconRefused);
        }
        self.sent.push(Sent::Beacon {
            endpoint: endpoint.clone(),
            body: body.to_string(),
        });
        Ok(())
    }

    fn load_pixel(&mut self, url: &Url) -> Result<(), TransportError> {
        if self.fail_pixels {
            return Err(TransportError::Host("image request blocked".to_string()));
        }
        self.sent.push(Sent::Pixel(url.clone()));
        Ok(())
    }
}
