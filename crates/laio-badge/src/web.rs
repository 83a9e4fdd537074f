//! Browser binding: [`Host`] and [`Transport`] over `web-sys`.
//!
//! Only compiled on `wasm32`. The loader script calls [`mount_badge`] with its own
//! `document.currentScript`; everything after that is driven by DOM callbacks.

use crate::controller::{BadgeController, ControllerOptions, HostEvent};
use crate::host::{BuiltBadge, Host, HostError, ReadyState, WatchHandle};
use crate::script::{embed_attributes, is_embed_script};
use crate::track::{Transport, TransportError};
use js_sys::{Array, Function, Reflect};
use laio_badge_core::{BadgeConfig, EmbedAttributes, PageContext};
use laio_badge_render::BadgeElement;
use laio_badge_render::element::WRAPPER_MARKER;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};
use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Blob, BlobPropertyBag, Document, Element, History,
    HtmlImageElement, MutationObserver, MutationObserverInit, Navigator, Node, Window,
};

type WebController = BadgeController<WebHost, WebTransport>;

thread_local! {
    // Controllers live for the page; DOM callbacks only hold weak references.
    static BADGES: RefCell<Vec<Rc<RefCell<WebController>>>> = const { RefCell::new(Vec::new()) };
}

fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

fn dom_err(op: &'static str) -> impl Fn(JsValue) -> HostError {
    move |value| HostError::dom(op, describe(&value))
}

/// Routes JS callbacks back into the controller that owns the host.
#[derive(Clone, Default)]
struct Dispatcher(Rc<RefCell<Weak<RefCell<WebController>>>>);

impl Dispatcher {
    fn bind(&self, controller: &Rc<RefCell<WebController>>) {
        *self.0.borrow_mut() = Rc::downgrade(controller);
    }

    fn dispatch(&self, event: HostEvent) {
        let Some(controller) = self.0.borrow().upgrade() else {
            return;
        };
        let Ok(mut controller) = controller.try_borrow_mut() else {
            trace!(?event, "badge controller busy; event dropped");
            return;
        };
        controller.handle(event);
    }

    fn callback(&self, event: HostEvent) -> JsValue {
        let dispatcher = self.clone();
        Closure::once_into_js(move || dispatcher.dispatch(event))
    }
}

type ClickListener = Closure<dyn FnMut(web_sys::Event)>;

pub struct WebHost {
    window: Window,
    document: Document,
    dispatcher: Dispatcher,
    observer: Option<MutationObserver>,
    /// Listener on the current badge anchor. Replaced, and the old one dropped, on re-mount.
    click_listener: Option<(Node, ClickListener)>,
}

impl WebHost {
    fn new(window: Window, document: Document, dispatcher: Dispatcher) -> Self {
        Self {
            window,
            document,
            dispatcher,
            observer: None,
            click_listener: None,
        }
    }

    fn create(&self, tag: &str) -> Result<Element, HostError> {
        self.document
            .create_element(tag)
            .map_err(dom_err("createElement"))
    }

    /// Replaces `history[name]` with a wrapper that calls the original on `history` with the
    /// `(state, title, url)` arguments, returns its result, then reports a navigation.
    fn wrap_history(&self, history: &History, name: &str) -> Result<(), HostError> {
        let original: Function = Reflect::get(history, &JsValue::from_str(name))
            .map_err(dom_err("history"))?
            .dyn_into()
            .map_err(|_| HostError::Unavailable("history method"))?;
        let target = history.clone();
        let dispatcher = self.dispatcher.clone();
        let wrapper = Closure::<dyn FnMut(JsValue, JsValue, JsValue) -> Result<JsValue, JsValue>>::new(
            move |state: JsValue, title: JsValue, url: JsValue| {
                let result = original.call3(&target, &state, &title, &url)?;
                dispatcher.dispatch(HostEvent::Navigation);
                Ok(result)
            },
        );
        Reflect::set(history, &JsValue::from_str(name), wrapper.as_ref())
            .map_err(dom_err("history"))?;
        // Installed for the lifetime of the page.
        wrapper.forget();
        Ok(())
    }
}

impl Host for WebHost {
    type Node = Node;

    fn ready_state(&self) -> ReadyState {
        ReadyState::from_dom(&self.document.ready_state())
    }

    fn notify_when_ready(&mut self) -> Result<(), HostError> {
        let callback = self.dispatcher.callback(HostEvent::Ready);
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        self.document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                callback.unchecked_ref(),
                &options,
            )
            .map_err(dom_err("addEventListener"))
    }

    fn element_by_id(&self, id: &str) -> Option<Node> {
        self.document.get_element_by_id(id).map(Into::into)
    }

    fn parent(&self, node: &Node) -> Option<Node> {
        node.parent_node()
    }

    fn body(&self) -> Option<Node> {
        self.document.body().map(Into::into)
    }

    fn document_element(&self) -> Option<Node> {
        self.document.document_element().map(Into::into)
    }

    fn is_connected(&self, node: &Node) -> bool {
        node.is_connected()
    }

    fn build_badge(&mut self, element: &BadgeElement) -> Result<BuiltBadge<Node>, HostError> {
        let set = dom_err("setAttribute");
        let wrapper = self.create("span")?;
        wrapper.set_attribute(WRAPPER_MARKER, "").map_err(&set)?;
        wrapper
            .set_attribute("style", &element.wrapper_style)
            .map_err(&set)?;

        let anchor = self.create("a")?;
        anchor.set_attribute("href", &element.href).map_err(&set)?;
        anchor.set_attribute("target", element.target).map_err(&set)?;
        anchor.set_attribute("rel", element.rel).map_err(&set)?;
        anchor.set_inner_html(&element.svg);

        wrapper
            .append_child(&anchor)
            .map_err(dom_err("appendChild"))?;
        Ok(BuiltBadge {
            wrapper: wrapper.into(),
            anchor: anchor.into(),
        })
    }

    fn insert_before(&mut self, parent: &Node, node: &Node, reference: &Node) -> Result<(), HostError> {
        parent
            .insert_before(node, Some(reference))
            .map(drop)
            .map_err(dom_err("insertBefore"))
    }

    fn append_child(&mut self, parent: &Node, node: &Node) -> Result<(), HostError> {
        parent
            .append_child(node)
            .map(drop)
            .map_err(dom_err("appendChild"))
    }

    fn listen_click(&mut self, anchor: &Node) -> Result<(), HostError> {
        let dispatcher = self.dispatcher.clone();
        let listener = ClickListener::new(move |_: web_sys::Event| {
            dispatcher.dispatch(HostEvent::Click);
        });
        anchor
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(dom_err("addEventListener"))?;
        if let Some((previous, old)) = self.click_listener.replace((anchor.clone(), listener)) {
            let _ = previous
                .remove_event_listener_with_callback("click", old.as_ref().unchecked_ref());
        }
        Ok(())
    }

    fn watch_removals(&mut self) -> Result<WatchHandle, HostError> {
        let root = self
            .document
            .document_element()
            .ok_or(HostError::Unavailable("documentElement"))?;
        let dispatcher = self.dispatcher.clone();
        let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(
            move |_records: Array, _observer: MutationObserver| {
                dispatcher.dispatch(HostEvent::Mutation);
            },
        );
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
            .map_err(dom_err("MutationObserver"))?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer
            .observe_with_options(&root, &init)
            .map_err(dom_err("observe"))?;
        callback.forget();
        self.observer = Some(observer);
        Ok(WatchHandle(1))
    }

    fn watch_navigation(&mut self) -> Result<(), HostError> {
        let history = self.window.history().map_err(dom_err("history"))?;
        self.wrap_history(&history, "pushState")?;
        self.wrap_history(&history, "replaceState")?;

        let dispatcher = self.dispatcher.clone();
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            dispatcher.dispatch(HostEvent::Navigation);
        });
        self.window
            .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
            .map_err(dom_err("addEventListener"))?;
        listener.forget();
        Ok(())
    }

    fn defer_remount(&mut self) {
        let callback = self.dispatcher.callback(HostEvent::DeferredRemount);
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0)
        {
            debug!(err = %describe(&err), "setTimeout failed; re-mount skipped");
        }
    }

    fn page(&self) -> PageContext {
        let location = self.window.location();
        PageContext {
            hostname: location.hostname().unwrap_or_default(),
            href: location.href().unwrap_or_default(),
            user_agent: self.window.navigator().user_agent().unwrap_or_default(),
        }
    }
}

pub struct WebTransport {
    navigator: Navigator,
}

impl Transport for WebTransport {
    fn supports_beacon(&self) -> bool {
        Reflect::has(&self.navigator, &JsValue::from_str("sendBeacon")).unwrap_or(false)
    }

    fn send_beacon(&mut self, endpoint: &Url, body: &str) -> Result<(), TransportError> {
        let parts = Array::of1(&JsValue::from_str(body));
        let options = BlobPropertyBag::new();
        options.set_type("application/json");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|err| TransportError::Host(describe(&err)))?;
        let queued = self
            .navigator
            .send_beacon_with_opt_blob(endpoint.as_str(), Some(&blob))
            .map_err(|err| TransportError::Host(describe(&err)))?;
        if queued {
            Ok(())
        } else {
            Err(TransportError::BeaconRefused)
        }
    }

    fn load_pixel(&mut self, url: &Url) -> Result<(), TransportError> {
        let image = HtmlImageElement::new_with_width_and_height(1, 1)
            .map_err(|err| TransportError::Host(describe(&err)))?;
        image.set_src(url.as_str());
        Ok(())
    }
}

/// Last script on the page that looks like a badge embed.
fn find_embed_script(document: &Document) -> Option<Element> {
    let scripts = document.get_elements_by_tag_name("script");
    (0..scripts.length())
        .rev()
        .filter_map(|i| scripts.item(i))
        .find(|script| {
            let src = script.get_attribute("src");
            is_embed_script(src.as_deref(), &read_attributes(script))
        })
}

fn read_attributes(element: &Element) -> EmbedAttributes {
    let names: Vec<String> = element
        .get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .collect();
    let values: Vec<(String, String)> = names
        .into_iter()
        .filter_map(|name| {
            let value = element.get_attribute(&name)?;
            Some((name, value))
        })
        .collect();
    embed_attributes(values.iter().map(|(n, v)| (n.as_str(), v.as_str())))
}

/// Mounts a badge configured by `script`'s `data-*` attributes.
///
/// Pass `document.currentScript` from the loader. When it is `null` the last script that looks
/// like an embed is used; with none at all the badge uses defaults and is appended to `<body>`.
#[wasm_bindgen(js_name = mountBadge)]
pub fn mount_badge(script: Option<Element>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let script = script.or_else(|| find_embed_script(&document));
    let attributes = script.as_ref().map(read_attributes).unwrap_or_default();
    let config = BadgeConfig::resolve(&attributes);
    let anchor = script.map(Node::from);

    let dispatcher = Dispatcher::default();
    let host = WebHost::new(window.clone(), document, dispatcher.clone());
    let transport = WebTransport {
        navigator: window.navigator(),
    };
    let controller = Rc::new(RefCell::new(BadgeController::new(
        host,
        transport,
        config,
        anchor,
        ControllerOptions::default(),
    )));
    dispatcher.bind(&controller);

    let outcome = controller.borrow_mut().start();
    trace!(?outcome, "badge started");
    BADGES.with(|badges| badges.borrow_mut().push(controller));
}
