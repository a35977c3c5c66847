use super::*;
use crate::state::nav::Section;
use crate::state::toast::ToastPhase;
use crate::util::host::{MemoryStore, RecordingMailer};

fn page(storage: &MemoryStore) -> PageState<&MemoryStore> {
    let mut page = PageState::new(SiteConfig::default(), storage, None, 0.0);
    page.mount();
    page
}

/// Drive timers and frames up to `until_ms`,
/// stepping one 16 ms frame at a time.
fn run_until(page: &mut PageState<&MemoryStore>, until_ms: f64) {
    let mut now = page.timeline.now_ms();
    while now <= until_ms {
        page.run_timers(now);
        page.run_frame(now);
        now += 16.0;
    }
}

fn messages(page: &PageState<&MemoryStore>) -> Vec<String> {
    page.toasts.toasts().iter().map(|t| t.message.clone()).collect()
}

// =============================================================
// Theme
// =============================================================

#[test]
fn toggle_from_light_stores_dark_and_announces_it() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    assert_eq!(page.theme(), Theme::Light);

    page.toggle_theme();

    assert_eq!(page.theme(), Theme::Dark);
    assert_eq!(storage.peek("theme").as_deref(), Some("dark"));
    assert_eq!(messages(&page), vec!["Switched to dark mode".to_owned()]);
    assert_eq!(page.toasts.toasts()[0].severity, Severity::Info);
}

#[test]
fn stored_dark_survives_a_fresh_page() {
    let storage = MemoryStore::new();
    page(&storage).set_theme(Theme::Dark);
    let fresh = PageState::new(SiteConfig::default(), &storage, Some(Theme::Light), 0.0);
    assert_eq!(fresh.theme(), Theme::Dark);
}

#[test]
fn double_toggle_restores_the_theme() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    page.toggle_theme();
    page.toggle_theme();
    assert_eq!(page.theme(), Theme::Light);
    assert_eq!(storage.peek("theme").as_deref(), Some("light"));
}

#[test]
fn system_dark_is_the_default_without_a_stored_value() {
    let storage = MemoryStore::new();
    let page = PageState::new(SiteConfig::default(), &storage, Some(Theme::Dark), 0.0);
    assert_eq!(page.theme(), Theme::Dark);
    assert_eq!(storage.peek("theme"), None);
}

#[test]
fn system_change_is_followed_silently_until_a_choice_is_made() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);

    page.system_theme_changed(Theme::Dark);
    assert_eq!(page.theme(), Theme::Dark);
    assert!(page.toasts.is_empty());

    page.set_theme(Theme::Light);
    page.system_theme_changed(Theme::Dark);
    assert_eq!(page.theme(), Theme::Light);
}

#[test]
fn clearing_the_preference_returns_to_the_system_scheme() {
    let storage = MemoryStore::with_entry("theme", "light");
    let mut page = PageState::new(SiteConfig::default(), &storage, Some(Theme::Dark), 0.0);
    assert_eq!(page.theme(), Theme::Light);

    assert_eq!(page.clear_theme_preference(), Theme::Dark);
    assert_eq!(storage.peek("theme"), None);
}

#[test]
fn set_theme_str_rejects_unknown_names() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    assert!(page.set_theme_str("sepia").is_err());
    assert_eq!(page.theme(), Theme::Light);
    assert!(page.toasts.is_empty());
    assert_eq!(page.set_theme_str("dark"), Ok(Theme::Dark));
}

#[test]
fn theme_effects_clear_on_their_own_timers() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    page.toggle_theme();
    let fx = page.theme_effects();
    assert!(fx.switching && fx.transitioning && fx.icon_spin);

    page.run_timers(THEME_SWITCHING_MS);
    assert!(!page.theme_effects().switching);
    assert!(page.theme_effects().transitioning);

    page.run_timers(ICON_SPIN_MS);
    let fx = page.theme_effects();
    assert!(!fx.transitioning && !fx.icon_spin);
}

#[test]
fn a_stale_effect_timer_does_not_cut_a_newer_change_short() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    page.toggle_theme();
    page.run_timers(250.0);
    page.toggle_theme();

    // First change's transition timer fires at 300; the second one runs to 550.
    page.run_timers(320.0);
    assert!(page.theme_effects().transitioning);
    page.run_timers(550.0);
    assert!(!page.theme_effects().transitioning);
}

// =============================================================
// Toasts
// =============================================================

#[test]
fn toast_enters_shows_leaves_and_is_removed() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    let id = page.notify("hello", Severity::Success).expect("mounted");
    assert_eq!(page.toasts.phase(id), Some(ToastPhase::Entering));

    page.run_frame(16.0);
    assert_eq!(page.toasts.phase(id), Some(ToastPhase::Shown));

    page.run_timers(TOAST_VISIBLE_MS);
    assert_eq!(page.toasts.phase(id), Some(ToastPhase::Leaving));

    page.run_timers(TOAST_VISIBLE_MS + TOAST_EXIT_MS);
    assert_eq!(page.toasts.phase(id), None);
}

#[test]
fn events_after_an_idle_stretch_are_timed_from_the_event() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    run_until(&mut page, 20_000.0);

    page.tick(60_000.0);
    page.toggle_theme();
    let id = page.toasts.toasts()[0].id;
    page.run_frame(60_016.0);
    page.run_timers(60_020.0);
    assert_eq!(page.toasts.phase(id), Some(ToastPhase::Shown));
    assert!(page.theme_effects().switching);

    page.run_timers(60_000.0 + TOAST_VISIBLE_MS - 1.0);
    assert_eq!(page.toasts.phase(id), Some(ToastPhase::Shown));
    page.run_timers(60_000.0 + TOAST_VISIBLE_MS);
    assert_eq!(page.toasts.phase(id), Some(ToastPhase::Leaving));
}

#[test]
fn toasts_before_mount_are_dropped() {
    let storage = MemoryStore::new();
    let mut page = PageState::new(SiteConfig::default(), &storage, None, 0.0);
    assert_eq!(page.notify("too early", Severity::Info), None);
    page.toggle_theme();
    assert_eq!(page.theme(), Theme::Dark);
    assert!(page.toasts.is_empty());
}

// =============================================================
// Reveal + counters
// =============================================================

#[test]
fn stat_42_counts_up_to_exactly_42() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    let id = page.register_reveal(ElementKind::Stat, Some("42"));

    page.intersections(&[IntersectionEntry { id, intersecting: true }]);
    run_until(&mut page, 2_000.0);

    let element = page.reveal.element(id).expect("registered");
    assert!(element.shown);
    assert_eq!(element.label(), Some("42"));
    let counter = element.counter().expect("counter started");
    assert_eq!(counter.phase(), CounterPhase::Complete);
    assert!((counter.value() - 42.0).abs() < f64::EPSILON);
}

#[test]
fn batch_reveals_are_staggered_by_100ms() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    let a = page.register_reveal(ElementKind::ProjectCard, None);
    let b = page.register_reveal(ElementKind::ProjectCard, None);

    page.intersections(&[
        IntersectionEntry { id: a, intersecting: true },
        IntersectionEntry { id: b, intersecting: true },
    ]);
    page.run_timers(0.0);
    assert!(page.reveal.is_shown(a));
    assert!(!page.reveal.is_shown(b));

    page.run_timers(100.0);
    assert!(page.reveal.has_effect(b, SecondaryEffect::ScaleIn));
}

#[test]
fn nothing_reveals_without_an_observer() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    let id = page.register_reveal(ElementKind::SectionTitle, None);
    page.observer_unavailable();
    page.intersections(&[IntersectionEntry { id, intersecting: true }]);
    run_until(&mut page, 500.0);
    assert!(!page.reveal.is_revealed(id));
}

// =============================================================
// Keyboard + scrolling
// =============================================================

#[test]
fn shortcut_toggles_theme_and_escape_closes_menu() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    let toggle = KeyInput { key: "T", ctrl: true, shift: true, ..KeyInput::default() };
    assert_eq!(page.handle_key(&toggle), Some(KeyAction::ToggleTheme));
    assert_eq!(page.theme(), Theme::Dark);

    page.nav.toggle_menu();
    let escape = KeyInput { key: "Escape", ..KeyInput::default() };
    assert_eq!(page.handle_key(&escape), Some(KeyAction::CloseMenu));
    assert!(!page.nav.menu_open);

    let letter = KeyInput { key: "p", ..KeyInput::default() };
    assert_eq!(page.handle_key(&letter), Some(KeyAction::ScrollTo(Section::Projects)));
}

#[test]
fn smooth_scroll_after_idling_still_animates() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    run_until(&mut page, 20_000.0);

    page.tick(60_000.0);
    page.scroll_to(0.0, 1_000.0);
    page.run_frame(60_016.0);
    let first = page.take_scroll_request().expect("first step");
    assert!(first > 0.0 && first < 920.0, "first frame jumped to {first}");
}

#[test]
fn smooth_scroll_lands_below_the_navbar() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    page.scroll_to(0.0, 1_000.0);

    let mut last = None;
    let mut now = 0.0;
    while page.has_frame_work() {
        now += 16.0;
        page.run_frame(now);
        if let Some(y) = page.take_scroll_request() {
            last = Some(y);
        }
    }
    assert!(now >= 800.0);
    assert_eq!(last, Some(920.0));
}

// =============================================================
// Contact + clipboard
// =============================================================

fn fill(page: &mut PageState<&MemoryStore>) {
    page.contact.name = "Ada".to_owned();
    page.contact.email = "ada@example.org".to_owned();
    page.contact.subject = "Hello there".to_owned();
    page.contact.message = "Nice site".to_owned();
}

#[test]
fn submission_hands_all_four_fields_to_the_mailer_and_clears_the_form() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    fill(&mut page);
    let mailer = RecordingMailer::new();

    assert_eq!(page.submit_contact(&mailer), Ok(()));

    let launched = mailer.launched();
    assert_eq!(launched.len(), 1);
    let url = &launched[0];
    assert!(url.starts_with("mailto:hello@example.com?subject=Hello%20there&body="));
    assert!(url.contains("Name%3A%20Ada"));
    assert!(url.contains("Email%3A%20ada%40example.org"));
    assert!(url.contains("Nice%20site"));
    assert!(page.contact.is_empty());
    assert_eq!(messages(&page), vec![CONTACT_SENT_MESSAGE.to_owned()]);
}

#[test]
fn blank_fields_warn_and_keep_the_draft() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    fill(&mut page);
    page.contact.message = "   ".to_owned();
    let mailer = RecordingMailer::new();

    let err = page.submit_contact(&mailer).expect_err("blank message");
    assert!(matches!(err, ContactError::MissingField(_)));
    assert!(mailer.launched().is_empty());
    assert_eq!(page.contact.name, "Ada");
    assert_eq!(page.toasts.toasts()[0].severity, Severity::Warning);
}

#[test]
fn launch_failure_shows_an_error_and_keeps_the_draft() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    fill(&mut page);

    let err = page.submit_contact(&RecordingMailer::failing()).expect_err("blocked");
    assert!(matches!(err, ContactError::Launch(_)));
    assert!(!page.contact.is_empty());
    assert_eq!(page.toasts.toasts()[0].severity, Severity::Error);
}

#[test]
fn copy_outcomes_map_to_feedback_toasts() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    page.copy_finished(CopyOutcome::CopiedWithFallback);
    page.copy_finished(CopyOutcome::Failed);
    assert_eq!(messages(&page), vec![COPY_OK_MESSAGE.to_owned(), COPY_FAILED_MESSAGE.to_owned()]);
}

// =============================================================
// Typewriter + loader
// =============================================================

#[test]
fn tagline_types_after_the_start_delay() {
    let storage = MemoryStore::new();
    let config = SiteConfig { tagline: "Hey".to_owned(), ..SiteConfig::default() };
    let mut page = PageState::new(config, &storage, None, 0.0);

    page.run_timers(TYPE_START_DELAY_MS - 1.0);
    assert_eq!(page.typed_tagline(), "");
    page.run_timers(TYPE_START_DELAY_MS);
    assert_eq!(page.typed_tagline(), "H");
    page.run_timers(TYPE_START_DELAY_MS + 2.0 * TYPE_CHAR_MS);
    assert_eq!(page.typed_tagline(), "Hey");
    assert!(page.is_idle());
}

#[test]
fn loader_fades_then_hides_after_window_load() {
    let storage = MemoryStore::new();
    let mut page = page(&storage);
    page.run_timers(200.0);
    page.window_loaded();
    assert_eq!(page.load_phase(), LoadPhase::Loading);

    page.run_timers(200.0 + LOADER_HOLD_MS);
    assert_eq!(page.load_phase(), LoadPhase::Fading);
    page.run_timers(200.0 + LOADER_HOLD_MS + LOADER_FADE_MS);
    assert_eq!(page.load_phase(), LoadPhase::Done);
}

#[test]
fn a_second_load_report_does_not_schedule_another_exit() {
    let storage = MemoryStore::new();
    let config = SiteConfig { tagline: String::new(), ..SiteConfig::default() };
    let mut page = PageState::new(config, &storage, None, 0.0);
    page.run_timers(TYPE_START_DELAY_MS);
    assert!(page.is_idle());

    let start = TYPE_START_DELAY_MS;
    page.window_loaded();
    page.run_timers(start + 300.0);
    page.window_loaded();

    page.run_timers(start + LOADER_HOLD_MS + LOADER_FADE_MS);
    assert_eq!(page.load_phase(), LoadPhase::Done);
    assert!(page.is_idle());
}
