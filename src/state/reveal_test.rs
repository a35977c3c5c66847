use super::*;

fn hit(id: ElementId) -> IntersectionEntry {
    IntersectionEntry { id, intersecting: true }
}

fn miss(id: ElementId) -> IntersectionEntry {
    IntersectionEntry { id, intersecting: false }
}

// =============================================================
// ElementKind
// =============================================================

#[test]
fn classify_picks_first_known_class() {
    assert_eq!(ElementKind::classify(["stat-item"]), Some(ElementKind::Stat));
    assert_eq!(ElementKind::classify(["card", "project-card", "stat-item"]), Some(ElementKind::ProjectCard));
    assert_eq!(ElementKind::classify(["btn", "hero"]), None);
}

#[test]
fn every_kind_round_trips_through_its_class() {
    for kind in ElementKind::ALL {
        assert_eq!(ElementKind::classify([kind.class_name()]), Some(kind));
    }
}

#[test]
fn secondary_effects_by_kind() {
    assert_eq!(ElementKind::SectionTitle.secondary_effect(), Some(SecondaryEffect::Animate));
    assert_eq!(ElementKind::ProjectCard.secondary_effect(), Some(SecondaryEffect::ScaleIn));
    assert_eq!(ElementKind::Stat.secondary_effect(), Some(SecondaryEffect::Counter));
    assert_eq!(ElementKind::AboutText.secondary_effect(), None);
}

// =============================================================
// Registration
// =============================================================

#[test]
fn registration_assigns_ids_and_transition_delays_in_order() {
    let mut reveal = RevealScheduler::new();
    let a = reveal.register(ElementKind::SectionTitle, None);
    let b = reveal.register(ElementKind::AboutText, None);
    assert_ne!(a, b);
    assert_eq!(reveal.element(a).map(|e| e.transition_delay_ms), Some(0));
    assert_eq!(reveal.element(b).map(|e| e.transition_delay_ms), Some(100));
    assert_eq!(reveal.len(), 2);
}

#[test]
fn stat_label_shows_registered_text_before_reveal() {
    let mut reveal = RevealScheduler::new();
    let stat = reveal.register(ElementKind::Stat, Some("42"));
    assert_eq!(reveal.element(stat).and_then(ObservableElement::label), Some("42"));
}

// =============================================================
// Edge-triggered reveal
// =============================================================

#[test]
fn never_intersecting_elements_stay_hidden() {
    let mut reveal = RevealScheduler::new();
    let id = reveal.register(ElementKind::ProjectCard, None);
    for _ in 0..5 {
        assert!(reveal.observe_batch(&[miss(id)]).is_empty());
    }
    assert!(!reveal.is_revealed(id));
    assert!(!reveal.is_shown(id));
}

#[test]
fn first_intersection_reveals_and_later_ones_are_no_ops() {
    let mut reveal = RevealScheduler::new();
    let id = reveal.register(ElementKind::SkillCategory, None);

    let first = reveal.observe_batch(&[hit(id)]);
    assert_eq!(first, vec![StaggeredReveal { id, delay_ms: 0.0 }]);
    assert!(reveal.is_revealed(id));

    assert!(reveal.observe_batch(&[hit(id)]).is_empty());
    assert!(reveal.observe_batch(&[miss(id)]).is_empty());
    assert!(reveal.is_revealed(id), "revealed must never reset");
}

#[test]
fn batch_stagger_counts_only_new_reveals() {
    let mut reveal = RevealScheduler::new();
    let a = reveal.register(ElementKind::ProjectCard, None);
    let b = reveal.register(ElementKind::ProjectCard, None);
    let c = reveal.register(ElementKind::ProjectCard, None);
    reveal.observe_batch(&[hit(a)]);

    let batch = reveal.observe_batch(&[hit(a), miss(b), hit(c), hit(b)]);
    assert_eq!(
        batch,
        vec![StaggeredReveal { id: c, delay_ms: 0.0 }, StaggeredReveal { id: b, delay_ms: REVEAL_STAGGER_MS }]
    );
}

#[test]
fn unknown_ids_are_skipped() {
    let mut reveal = RevealScheduler::new();
    assert!(reveal.observe_batch(&[hit(ElementId(99))]).is_empty());
}

#[test]
fn missing_observer_never_reveals() {
    let mut reveal = RevealScheduler::without_observer();
    let id = reveal.register(ElementKind::HeroContent, None);
    assert!(reveal.observe_batch(&[hit(id)]).is_empty());
    assert!(!reveal.is_revealed(id));
    assert!(!reveal.observer_available());
}

// =============================================================
// Show + secondary effects
// =============================================================

#[test]
fn show_requires_a_prior_reveal() {
    let mut reveal = RevealScheduler::new();
    let id = reveal.register(ElementKind::SectionTitle, None);
    assert_eq!(reveal.show(id), None);
    assert!(!reveal.is_shown(id));
}

#[test]
fn title_and_card_get_visual_flags() {
    let mut reveal = RevealScheduler::new();
    let title = reveal.register(ElementKind::SectionTitle, None);
    let card = reveal.register(ElementKind::ProjectCard, None);
    reveal.observe_batch(&[hit(title), hit(card)]);

    assert_eq!(reveal.show(title), Some(SecondaryEffect::Animate));
    assert_eq!(reveal.show(card), Some(SecondaryEffect::ScaleIn));
    assert!(reveal.has_effect(title, SecondaryEffect::Animate));
    assert!(reveal.has_effect(card, SecondaryEffect::ScaleIn));
}

#[test]
fn stat_counter_starts_once_and_runs_to_target() {
    let mut reveal = RevealScheduler::new();
    let stat = reveal.register(ElementKind::Stat, Some("42"));
    reveal.observe_batch(&[hit(stat)]);

    assert_eq!(reveal.show(stat), Some(SecondaryEffect::Counter));
    assert_eq!(reveal.element(stat).and_then(ObservableElement::label), Some("0"));
    assert_eq!(reveal.show(stat), None, "counter must not restart");

    let mut steps = 0;
    while reveal.step_counter(stat) == Some(CounterPhase::Running) {
        steps += 1;
        assert!(steps < 200);
    }
    assert_eq!(reveal.element(stat).and_then(ObservableElement::label), Some("42"));
}

#[test]
fn non_numeric_stat_is_shown_without_counter() {
    let mut reveal = RevealScheduler::new();
    let stat = reveal.register(ElementKind::Stat, Some("many"));
    reveal.observe_batch(&[hit(stat)]);
    assert_eq!(reveal.show(stat), None);
    assert!(reveal.is_shown(stat));
    assert_eq!(reveal.step_counter(stat), None);
}

#[test]
fn counter_step_on_forgotten_element_aborts_quietly() {
    let mut reveal = RevealScheduler::new();
    let stat = reveal.register(ElementKind::Stat, Some("10"));
    reveal.observe_batch(&[hit(stat)]);
    reveal.show(stat);
    assert!(reveal.forget(stat));
    assert_eq!(reveal.step_counter(stat), None);
    assert!(!reveal.forget(stat));
}
