use super::*;
use crate::foundation::core::Viewport;
use crate::host::headless::HeadlessHost;
use crate::host::theme::FixedTheme;
use crate::render::cpu::CpuSurface;

fn config() -> BackdropConfig {
    BackdropConfig {
        seed: Some(11),
        ..BackdropConfig::default()
    }
}

fn page() -> HeadlessHost {
    let mut host = HeadlessHost::cpu(Viewport::new(48, 32));
    host.set_anchor("cs-projects", 1000.0);
    host.set_anchor("music", 2000.0);
    host.set_anchor("max", 3000.0);
    host.set_document_height(4000.0);
    host
}

fn start(host: &mut HeadlessHost, mode: ThemeMode) -> BackgroundRenderer<CpuSurface> {
    BackgroundRenderer::new(host, &FixedTheme(mode), config()).unwrap()
}

#[test]
fn construction_subscribes_and_schedules() {
    let mut host = page();
    let r = start(&mut host, ThemeMode::Light);
    assert_eq!(r.state(), RendererState::Running);
    assert_eq!(r.scene().len(), 6);
    assert_eq!(host.subscription_count(), 3);
    assert!(host.is_subscribed(HostEventKind::Resize));
    assert!(host.is_subscribed(HostEventKind::Scroll));
    assert!(host.is_subscribed(HostEventKind::ThemeChange));
    assert_eq!(host.pending_frame(), r.pending_frame());
    assert_eq!(r.surface().size(), Viewport::new(48, 32));
}

#[test]
fn missing_surface_fails_before_scheduling() {
    let mut host: HeadlessHost<CpuSurface> = HeadlessHost::new(Viewport::new(8, 8), None);
    let err = BackgroundRenderer::new(&mut host, &FixedTheme(ThemeMode::Light), config())
        .err()
        .unwrap();
    assert!(matches!(err, BackdropError::Surface(_)));
    assert_eq!(host.subscription_count(), 0);
    assert_eq!(host.pending_frame(), None);
}

#[test]
fn invalid_config_is_rejected() {
    let mut host = page();
    let cfg = BackdropConfig {
        polygon_count: 0,
        ..config()
    };
    let err = BackgroundRenderer::new(&mut host, &FixedTheme(ThemeMode::Light), cfg)
        .err()
        .unwrap();
    assert!(matches!(err, BackdropError::Validation(_)));
}

#[test]
fn frames_paint_and_reschedule() {
    let mut host = page();
    let mut r = start(&mut host, ThemeMode::Light);
    for _ in 0..3 {
        let ev = host.take_frame().unwrap();
        r.handle(&mut host, ev);
    }
    assert_eq!(r.stats().frames_painted, 3);
    assert!(host.pending_frame().is_some());

    let frame = r.surface_mut().snapshot().unwrap();
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn stale_frame_ids_are_ignored() {
    let mut host = page();
    let mut r = start(&mut host, ThemeMode::Light);
    r.handle(&mut host, HostEvent::Frame(FrameRequestId(9999)));
    assert_eq!(r.stats().frames_painted, 0);
}

#[test]
fn scroll_retargets_colors() {
    let mut host = page();
    let mut r = start(&mut host, ThemeMode::Light);
    let palette = Palette::default();

    let ev = host.scroll_to(1900.0).unwrap();
    r.handle(&mut host, ev);
    assert_eq!(r.section().index, 1);
    assert!((r.section().progress - 0.9).abs() < 1e-9);
    for p in r.scene().polygons() {
        assert_eq!(p.base, palette.color(1, p.slot));
        assert_eq!(p.target, palette.color(2, p.slot));
        assert_eq!(p.display, p.target);
    }

    let ev = host.scroll_to(3000.0).unwrap();
    r.handle(&mut host, ev);
    assert_eq!(
        r.section(),
        SectionPosition {
            index: 3,
            progress: 0.0
        }
    );
}

#[test]
fn missing_anchor_skips_the_scroll_only() {
    let mut host = page();
    let mut r = start(&mut host, ThemeMode::Light);
    let before = r.scene().clone();
    host.remove_anchor("music");

    let ev = host.scroll_to(2500.0).unwrap();
    r.handle(&mut host, ev);
    assert_eq!(r.stats().scrolls_skipped, 1);
    assert_eq!(r.scene(), &before);

    let ev = host.take_frame().unwrap();
    r.handle(&mut host, ev);
    assert_eq!(r.stats().frames_painted, 1);
    assert!(host.pending_frame().is_some());
}

#[test]
fn theme_events_switch_mode() {
    let mut host = page();
    let mut r = start(&mut host, ThemeMode::Light);
    let ev = host.set_theme(ThemeMode::Dark).unwrap();
    r.handle(&mut host, ev);
    assert_eq!(r.theme(), ThemeMode::Dark);

    let ev = host.take_frame().unwrap();
    r.handle(&mut host, ev);
    let frame = r.surface_mut().snapshot().unwrap();
    // Dark background and gray shapes keep every pixel neutral.
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert!(px[0] >= 12 && px[0] < 255, "got {px:?}");
    }
}

#[test]
fn resize_follows_viewport() {
    let mut host = page();
    let mut r = start(&mut host, ThemeMode::Light);
    let ev = host.resize(Viewport::new(20, 10)).unwrap();
    r.handle(&mut host, ev);
    assert_eq!(r.surface().size(), Viewport::new(20, 10));
}

#[test]
fn destroy_is_symmetric_and_idempotent() {
    let mut host = page();
    let mut r = start(&mut host, ThemeMode::Light);
    let pending = host.take_frame().unwrap();

    r.destroy(&mut host);
    assert_eq!(r.state(), RendererState::Disposed);
    assert_eq!(host.subscription_count(), 0);
    assert_eq!(host.pending_frame(), None);

    // Events already in flight are ignored and never reschedule.
    r.handle(&mut host, pending);
    r.handle(&mut host, HostEvent::Scroll);
    assert_eq!(host.pending_frame(), None);
    assert_eq!(r.stats().frames_painted, 0);

    r.destroy(&mut host);
    assert_eq!(r.state(), RendererState::Disposed);
}

#[test]
fn closure_theme_provider_is_accepted() {
    let mut host = page();
    let r = BackgroundRenderer::new(&mut host, &|| ThemeMode::Dark, config()).unwrap();
    assert_eq!(r.theme(), ThemeMode::Dark);
}
