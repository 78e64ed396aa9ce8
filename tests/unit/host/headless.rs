use super::*;

#[test]
fn events_only_fire_for_installed_listeners() {
    let mut host = HeadlessHost::cpu(Viewport::new(64, 64));
    assert_eq!(host.scroll_to(10.0), None);
    assert_eq!(host.scroll_y(), 10.0);

    let sub = host.subscribe(HostEventKind::Scroll);
    assert_eq!(host.scroll_to(20.0), Some(HostEvent::Scroll));
    assert_eq!(host.resize(Viewport::new(32, 32)), None);
    assert_eq!(host.viewport(), Viewport::new(32, 32));

    host.unsubscribe(sub);
    assert_eq!(host.scroll_to(30.0), None);
    assert_eq!(host.subscription_count(), 0);
}

#[test]
fn theme_events_carry_the_mode() {
    let mut host = HeadlessHost::cpu(Viewport::new(8, 8));
    host.subscribe(HostEventKind::ThemeChange);
    assert_eq!(
        host.set_theme(ThemeMode::Dark),
        Some(HostEvent::ThemeChanged(ThemeMode::Dark))
    );
}

#[test]
fn frames_are_single_shot_and_cancellable() {
    let mut host = HeadlessHost::cpu(Viewport::new(8, 8));
    assert_eq!(host.take_frame(), None);

    let a = host.request_frame();
    assert_eq!(host.take_frame(), Some(HostEvent::Frame(a)));
    assert_eq!(host.take_frame(), None);

    let b = host.request_frame();
    assert_ne!(a, b);
    host.cancel_frame(a);
    assert_eq!(host.pending_frame(), Some(b));
    host.cancel_frame(b);
    assert_eq!(host.pending_frame(), None);
}

#[test]
fn surface_is_handed_out_once() {
    let mut host = HeadlessHost::cpu(Viewport::new(8, 8));
    assert!(host.surface_2d().is_some());
    assert!(host.surface_2d().is_none());
}

#[test]
fn anchors_and_document_height() {
    let mut host = HeadlessHost::cpu(Viewport::new(8, 600));
    assert_eq!(host.document_height(), 600.0);
    host.set_anchor("music", 1200.0);
    host.set_document_height(4000.0);
    assert_eq!(host.anchor_offset("music"), Some(1200.0));
    assert_eq!(host.anchor_offset("max"), None);
    host.remove_anchor("music");
    assert_eq!(host.anchor_offset("music"), None);
    assert_eq!(host.document_height(), 4000.0);
}
