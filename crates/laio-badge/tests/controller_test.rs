use laio_badge::testing::{MemoryHost, NodeId, RecordingTransport, Sent, run_until_idle};
use laio_badge::{
    BadgeConfig, BadgeController, ControllerOptions, EmbedAttributes, EventKind, ReadyState,
    StartOutcome, TrackerConfig,
};

type Controller = BadgeController<MemoryHost, RecordingTransport>;

/// Page with `<body><script data-...></script></body>`.
fn page_with_script(attrs: &[(&str, &str)]) -> (MemoryHost, NodeId) {
    let mut host = MemoryHost::new();
    let script = host.create_element("script");
    for (name, value) in attrs {
        host.set_attribute(script, name, value);
    }
    let body = host.body_node().unwrap();
    host.append(body, script);
    (host, script)
}

fn controller(host: MemoryHost, anchor: Option<NodeId>, attrs: &[(&str, &str)]) -> Controller {
    controller_with(host, anchor, attrs, RecordingTransport::default())
}

fn controller_with(
    host: MemoryHost,
    anchor: Option<NodeId>,
    attrs: &[(&str, &str)],
    transport: RecordingTransport,
) -> Controller {
    let config = BadgeConfig::resolve(&attrs.iter().copied().collect::<EmbedAttributes>());
    BadgeController::new(host, transport, config, anchor, ControllerOptions::default())
}

fn badge_anchor(controller: &Controller) -> NodeId {
    let wrapper = controller.state().mounted.unwrap();
    controller.host().children(wrapper)[0]
}

#[test]
fn mounts_before_embedding_script() {
    let attrs = [("data-slug", "acme")];
    let (host, script) = page_with_script(&attrs);
    let mut c = controller(host, Some(script), &attrs);

    assert_eq!(c.start(), StartOutcome::Started);

    let wrapper = c.state().mounted.expect("mounted");
    let body = c.host().body_node().unwrap();
    assert_eq!(c.host().children(body), &[wrapper, script]);
    assert_eq!(c.host().tag(wrapper), "span");
    assert_eq!(
        c.host().attribute(wrapper, "style"),
        Some("display:inline-block;line-height:0")
    );

    let anchor = badge_anchor(&c);
    assert_eq!(c.host().tag(anchor), "a");
    assert_eq!(
        c.host().attribute(anchor, "href"),
        Some("https://la.io/?ref=badge&slug=acme")
    );
    assert_eq!(c.host().attribute(anchor, "target"), Some("_blank"));
    assert_eq!(c.host().attribute(anchor, "rel"), Some("noopener"));
    assert!(c.host().inner_html(anchor).unwrap().starts_with("<svg "));

    assert_eq!(c.tracker().transport().kinds(), vec![EventKind::Impression]);
    assert!(c.state().impression_logged);
}

#[test]
fn mount_is_idempotent_while_connected() {
    let (host, script) = page_with_script(&[]);
    let mut c = controller(host, Some(script), &[]);

    let first = c.mount().unwrap();
    let second = c.mount().unwrap();
    assert_eq!(first, second);
    assert_eq!(c.host().badges(), vec![first]);
    assert_eq!(c.tracker().transport().count(EventKind::Impression), 1);
}

#[test]
fn remounts_after_removal_without_second_impression() {
    let (host, script) = page_with_script(&[("data-slug", "acme")]);
    let mut c = controller(host, Some(script), &[("data-slug", "acme")]);
    c.start();
    run_until_idle(&mut c);
    let first = c.state().mounted.unwrap();

    c.host_mut().remove(first);
    assert!(c.host().badges().is_empty());
    run_until_idle(&mut c);

    let second = c.state().mounted.unwrap();
    assert_ne!(first, second);
    assert_eq!(c.host().badges(), vec![second]);
    assert_eq!(c.tracker().transport().count(EventKind::Impression), 1);
}

#[test]
fn unrelated_mutations_leave_badge_alone() {
    let (host, script) = page_with_script(&[]);
    let mut c = controller(host, Some(script), &[]);
    c.start();
    let mounted = c.state().mounted;

    let body = c.host().body_node().unwrap();
    let div = c.host_mut().create_element("div");
    c.host_mut().append(body, div);
    c.host_mut().remove(div);
    run_until_idle(&mut c);

    assert_eq!(c.state().mounted, mounted);
    assert_eq!(c.host().badges().len(), 1);
}

#[test]
fn click_is_reported_after_impression() {
    let (host, script) = page_with_script(&[]);
    let mut c = controller_with(host, Some(script), &[], RecordingTransport::with_beacon());
    c.start();

    let anchor = badge_anchor(&c);
    c.host_mut().click(anchor);
    run_until_idle(&mut c);

    let sent = &c.tracker().transport().sent;
    assert_eq!(sent.len(), 2);
    assert!(matches!(sent[0], Sent::Pixel(_)));
    assert!(matches!(sent[1], Sent::Beacon { .. }));
    assert_eq!(
        c.tracker().transport().kinds(),
        vec![EventKind::Impression, EventKind::Click]
    );
}

#[test]
fn every_click_is_reported() {
    let (host, script) = page_with_script(&[]);
    let mut c = controller(host, Some(script), &[]);
    c.start();

    let anchor = badge_anchor(&c);
    for _ in 0..3 {
        c.host_mut().click(anchor);
    }
    run_until_idle(&mut c);
    assert_eq!(c.tracker().transport().count(EventKind::Click), 3);
}

#[test]
fn remounted_badge_gets_click_listener() {
    let (host, script) = page_with_script(&[]);
    let mut c = controller(host, Some(script), &[]);
    c.start();

    let first = c.state().mounted.unwrap();
    c.host_mut().remove(first);
    run_until_idle(&mut c);

    let anchor = badge_anchor(&c);
    c.host_mut().click(anchor);
    run_until_idle(&mut c);
    assert_eq!(c.tracker().transport().count(EventKind::Click), 1);
}

#[test]
fn remount_releases_previous_click_listener() {
    let (host, script) = page_with_script(&[]);
    let mut c = controller(host, Some(script), &[]);
    c.start();

    let old_anchor = badge_anchor(&c);
    for _ in 0..3 {
        let wrapper = c.state().mounted.unwrap();
        c.host_mut().remove(wrapper);
        run_until_idle(&mut c);
    }

    let anchor = badge_anchor(&c);
    assert_ne!(anchor, old_anchor);
    assert_eq!(c.host().click_listener(), Some(anchor));

    c.host_mut().click(old_anchor);
    run_until_idle(&mut c);
    assert_eq!(c.tracker().transport().count(EventKind::Click), 0);
}

#[test]
fn track_zero_sends_nothing() {
    let attrs = [("data-track", "0")];
    let (host, script) = page_with_script(&attrs);
    let mut c = controller(host, Some(script), &attrs);
    c.start();

    let anchor = badge_anchor(&c);
    c.host_mut().click(anchor);
    run_until_idle(&mut c);

    assert_eq!(c.host().badges().len(), 1);
    assert!(c.tracker().transport().sent.is_empty());
    assert!(!c.state().impression_logged);
}

#[test]
fn disabled_endpoint_sends_nothing() {
    let (host, script) = page_with_script(&[]);
    let config = BadgeConfig::default();
    let options = ControllerOptions {
        tracker: TrackerConfig::disabled(),
        ..ControllerOptions::default()
    };
    let mut c = BadgeController::new(
        host,
        RecordingTransport::default(),
        config,
        Some(script),
        options,
    );
    c.start();
    assert_eq!(c.host().badges().len(), 1);
    assert!(c.tracker().transport().sent.is_empty());
}

#[test]
fn explicit_target_receives_badge() {
    let attrs = [("data-target", "badge-slot")];
    let (mut host, script) = page_with_script(&attrs);
    let body = host.body_node().unwrap();
    let slot = host.create_element("div");
    host.set_attribute(slot, "id", "badge-slot");
    let existing = host.create_element("p");
    host.append(slot, existing);
    host.append(body, slot);

    let mut c = controller(host, Some(script), &attrs);
    c.start();

    let wrapper = c.state().mounted.unwrap();
    assert_eq!(c.host().children(slot), &[existing, wrapper]);
    assert_eq!(c.host().children(body), &[script, slot]);
}

#[test]
fn missing_target_falls_back_to_script_position() {
    let attrs = [("data-target", "nowhere")];
    let (host, script) = page_with_script(&attrs);
    let mut c = controller(host, Some(script), &attrs);
    c.start();

    let wrapper = c.state().mounted.unwrap();
    let body = c.host().body_node().unwrap();
    assert_eq!(c.host().children(body), &[wrapper, script]);
}

#[test]
fn detached_script_appends_to_body() {
    let mut host = MemoryHost::new();
    let script = host.create_element("script");
    let mut c = controller(host, Some(script), &[]);
    c.start();

    let wrapper = c.state().mounted.unwrap();
    let body = c.host().body_node().unwrap();
    assert_eq!(c.host().children(body), &[wrapper]);
}

#[test]
fn no_insertion_point_mounts_nothing() {
    let mut c = controller(MemoryHost::empty(), None, &[]);
    assert_eq!(c.mount(), None);
    assert!(c.state().mounted.is_none());
    assert!(!c.state().impression_logged);
    assert!(c.tracker().transport().sent.is_empty());
}

#[test]
fn defers_until_document_is_interactive() {
    let (mut host, script) = page_with_script(&[]);
    host.set_ready_state(ReadyState::Loading);
    let mut c = controller(host, Some(script), &[]);

    assert_eq!(c.start(), StartOutcome::Deferred);
    assert!(c.host().badges().is_empty());
    assert_eq!(c.host().watcher_count(), 0);

    c.host_mut().set_ready_state(ReadyState::Interactive);
    run_until_idle(&mut c);

    assert_eq!(c.host().badges().len(), 1);
    assert_eq!(c.host().watcher_count(), 1);
    assert!(c.host().navigation_hooked());
}

#[test]
fn never_mounts_while_loading_without_ready_notification() {
    let (mut host, script) = page_with_script(&[]);
    host.set_ready_state(ReadyState::Loading);
    host.fail_once("notify_when_ready");
    let mut c = controller(host, Some(script), &[]);

    assert_eq!(c.start(), StartOutcome::Deferred);
    assert!(c.host().badges().is_empty());
    assert!(c.tracker().transport().sent.is_empty());
    assert_eq!(c.host().watcher_count(), 1);

    // Parser keeps adding nodes; still loading.
    let body = c.host().body_node().unwrap();
    let early = c.host_mut().create_element("div");
    c.host_mut().append(body, early);
    run_until_idle(&mut c);
    assert!(c.host().badges().is_empty());
    assert!(!c.state().impression_logged);

    c.host_mut().set_ready_state(ReadyState::Interactive);
    let late = c.host_mut().create_element("div");
    c.host_mut().append(body, late);
    run_until_idle(&mut c);

    assert_eq!(c.host().badges().len(), 1);
    assert_eq!(c.host().watcher_count(), 1);
    assert!(c.host().navigation_hooked());
    assert_eq!(c.tracker().transport().kinds(), vec![EventKind::Impression]);
}

#[test]
fn observer_is_installed_once() {
    let (host, script) = page_with_script(&[]);
    let mut c = controller(host, Some(script), &[]);
    c.start();
    c.start_observer();
    c.handle(laio_badge::HostEvent::Ready);
    run_until_idle(&mut c);

    assert_eq!(c.host().watcher_count(), 1);
    assert!(c.state().observer.is_some());
}

#[test]
fn failed_cycle_is_retried_on_next_mutation() {
    let (host, script) = page_with_script(&[]);
    let mut c = controller(host, Some(script), &[]);
    c.start();
    let first = c.state().mounted.unwrap();

    c.host_mut().fail_once("insert_before");
    c.host_mut().remove(first);
    run_until_idle(&mut c);
    assert!(c.host().badges().is_empty());

    let body = c.host().body_node().unwrap();
    let div = c.host_mut().create_element("div");
    c.host_mut().append(body, div);
    run_until_idle(&mut c);
    assert_eq!(c.host().badges().len(), 1);
    assert_eq!(c.tracker().transport().count(EventKind::Impression), 1);
}

#[test]
fn navigation_triggers_deferred_remount() {
    let (host, script) = page_with_script(&[]);
    let mut c = controller(host, Some(script), &[]);
    c.start();
    let first = c.state().mounted.unwrap();

    c.host_mut().fail_once("build_badge");
    c.host_mut().remove(first);
    run_until_idle(&mut c);
    assert!(c.host().badges().is_empty());

    c.host_mut().navigate();
    assert_eq!(run_until_idle(&mut c), 3);
    assert_eq!(c.host().badges().len(), 1);
}

#[test]
fn navigation_keeps_connected_badge() {
    let (host, script) = page_with_script(&[]);
    let mut c = controller(host, Some(script), &[]);
    c.start();
    let mounted = c.state().mounted;

    c.host_mut().navigate();
    run_until_idle(&mut c);
    assert_eq!(c.state().mounted, mounted);
    assert_eq!(c.host().badges().len(), 1);
}

#[test]
fn click_listener_failure_keeps_mount() {
    let (host, script) = page_with_script(&[]);
    let mut c = controller(host, Some(script), &[]);
    c.host_mut().fail_once("listen_click");
    c.start();

    assert_eq!(c.host().badges().len(), 1);
    let anchor = badge_anchor(&c);
    c.host_mut().click(anchor);
    run_until_idle(&mut c);
    assert_eq!(c.tracker().transport().count(EventKind::Click), 0);
}

#[test]
fn debug_outlines_wrapper_and_flags_pixel() {
    let attrs = [("data-debug", "1")];
    let (host, script) = page_with_script(&attrs);
    let mut c = controller(host, Some(script), &attrs);
    c.start();

    let wrapper = c.state().mounted.unwrap();
    assert!(
        c.host()
            .attribute(wrapper, "style")
            .unwrap()
            .contains("outline:1px dashed #f0f")
    );
    let Sent::Pixel(url) = &c.tracker().transport().sent[0] else {
        panic!("expected pixel");
    };
    assert!(url.query_pairs().any(|(k, v)| k == "debug" && v == "1"));
    assert!(
        url.query_pairs()
            .any(|(k, v)| k == "domain" && v == "partner.example")
    );
}

#[test]
fn failed_pixel_still_counts_as_logged() {
    let (host, script) = page_with_script(&[]);
    let transport = RecordingTransport {
        fail_pixels: true,
        ..RecordingTransport::default()
    };
    let mut c = controller_with(host, Some(script), &[], transport);
    c.start();
    assert!(c.state().impression_logged);

    let first = c.state().mounted.unwrap();
    c.host_mut().remove(first);
    run_until_idle(&mut c);
    assert_eq!(c.host().badges().len(), 1);
    assert!(c.tracker().transport().sent.is_empty());
}
