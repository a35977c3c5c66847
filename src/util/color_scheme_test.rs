use super::*;

#[test]
fn body_classes_follow_effect_flags() {
    let fx = ThemeEffects { generation: 3, switching: true, transitioning: false, icon_spin: true };
    assert_eq!(body_classes(fx), [(SWITCHING_CLASS, true), (TRANSITION_CLASS, false)]);
    assert_eq!(body_classes(ThemeEffects::default()), [(SWITCHING_CLASS, false), (TRANSITION_CLASS, false)]);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_no_system_scheme() {
    assert_eq!(system_theme(), None);
    assert!(!watch(|_| {}));
    apply(Theme::Dark);
}
