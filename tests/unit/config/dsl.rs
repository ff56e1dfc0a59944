use super::*;

#[test]
fn builder_starts_from_defaults() {
    assert_eq!(
        BadgeConfigBuilder::new().build(),
        BadgeConfiguration::default()
    );
}

#[test]
fn builder_sets_fields() {
    let c = BadgeConfiguration::builder()
        .dot()
        .dot_height(12.0)
        .alignment(BadgeAlignment::TopLeading { x: 1.0, y: 1.0 })
        .border(Rgba8::WHITE, 2.0)
        .max_width(Some(40.0))
        .shadow(true)
        .opacity(0.8)
        .landscape_scale(0.5)
        .no_animation()
        .build();
    assert_eq!(c.kind, BadgeKind::Dot);
    assert_eq!(c.dot_height, 12.0);
    assert_eq!(c.border_color, Rgba8::WHITE);
    assert_eq!(c.border_width, 2.0);
    assert_eq!(c.max_width, Some(40.0));
    assert!(c.enable_shadow);
    assert_eq!(c.opacity, 0.8);
    assert_eq!(c.landscape_scale, 0.5);
    assert!(c.appear_animation.is_none());
    assert!(c.disappear_animation.is_none());
}

#[derive(Debug)]
struct Noop;

impl Transition for Noop {
    fn animate(&self, _targets: &mut crate::TransitionTargets<'_>) {}
}

#[test]
fn custom_transition_is_not_serializable() {
    let c = BadgeConfiguration::builder()
        .custom_appear(Arc::new(Noop))
        .build();
    assert!(matches!(
        c.appear_animation,
        Some(AppearTransition::Custom(_))
    ));
    assert!(c.to_json_string().is_err());
}
