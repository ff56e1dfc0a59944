use std::cell::Cell;

use super::*;
use crate::{
    config::model::Font,
    foundation::core::{Rect, Size},
};

#[derive(Default)]
struct Sink {
    log: Vec<String>,
    runs: Vec<(Vec<ShapeHandle>, Animation)>,
}

impl ShapeSink for Sink {
    fn apply_frame(&mut self, _handle: ShapeHandle, _frame: Rect) {}

    fn set_corner_radius(&mut self, _handle: ShapeHandle, _radius: f64) {}

    fn set_visible(&mut self, handle: ShapeHandle, visible: bool) {
        self.log.push(format!("visible {} {visible}", handle.0));
    }

    fn is_visible(&self, _handle: ShapeHandle) -> bool {
        false
    }

    fn set_transform(&mut self, handle: ShapeHandle, transform: Affine) {
        self.log
            .push(format!("transform {} {}", handle.0, transform.as_coeffs()[0]));
    }

    fn set_text(&mut self, _handle: ShapeHandle, _text: &str) {}

    fn set_font(&mut self, _handle: ShapeHandle, _font: &Font) {}

    fn measure_label(&self, _handle: ShapeHandle) -> Size {
        Size::ZERO
    }

    fn run_animation(&mut self, handles: &[ShapeHandle], animation: Animation) {
        self.log.push("run".to_owned());
        self.runs.push((handles.to_vec(), animation));
    }

    fn cancel_animations(&mut self, _handles: &[ShapeHandle]) {}
}

fn animate(t: &dyn Transition, label: Option<ShapeHandle>) -> Sink {
    let mut sink = Sink::default();
    let mut targets = TransitionTargets::new(&mut sink, ShapeHandle(1), label);
    t.animate(&mut targets);
    sink
}

#[test]
fn simple_appear_starts_collapsed_and_visible() {
    let sink = animate(&SimpleAppear, Some(ShapeHandle(2)));
    assert_eq!(
        sink.log,
        [
            "transform 1 0",
            "transform 2 0",
            "visible 1 true",
            "visible 2 true",
            "run"
        ]
    );
    let (handles, anim) = &sink.runs[0];
    assert_eq!(handles, &[ShapeHandle(1), ShapeHandle(2)]);
    assert_eq!(anim.duration, SIMPLE_DURATION);
    assert_eq!(anim.curve, Curve::EASE_IN);
    assert_eq!((anim.from_scale, anim.to_scale), (0.0, 1.0));
    assert_eq!(anim.completion.visible, None);
    assert!(anim.completion.reset_transform);
}

#[test]
fn simple_disappear_hides_on_completion_only() {
    let sink = animate(&SimpleDisappear, None);
    assert_eq!(sink.log, ["transform 1 1", "run"]);
    let (handles, anim) = &sink.runs[0];
    assert_eq!(handles, &[ShapeHandle(1)]);
    assert_eq!((anim.from_scale, anim.to_scale), (1.0, 0.1));
    assert_eq!(anim.completion.visible, Some(false));
    assert!(anim.completion.reset_transform);
}

#[test]
fn pop_appear_uses_half_damped_spring() {
    let sink = animate(&PopAppear, Some(ShapeHandle(2)));
    let (_, anim) = &sink.runs[0];
    assert_eq!(anim.duration, POP_DURATION);
    assert_eq!(
        anim.curve,
        Curve::Spring(Spring {
            damping_ratio: 0.5,
            initial_velocity: 0.0
        })
    );
    assert_eq!(anim.completion, Completion::default());
}

#[derive(Debug, Default)]
struct Counting(Cell<u32>);

impl Transition for Counting {
    fn animate(&self, _targets: &mut TransitionTargets<'_>) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn custom_strategies_dispatch_through_config_enums() {
    let counting = Arc::new(Counting::default());
    let appear = AppearTransition::Custom(counting.clone());
    let disappear = DisappearTransition::Custom(counting.clone());
    let sink = animate(&appear, None);
    assert!(sink.runs.is_empty());
    animate(&disappear, None);
    assert_eq!(counting.0.get(), 2);
    assert_eq!(appear.clone(), appear);
    assert_ne!(appear, AppearTransition::SimpleAppear);
}

#[test]
fn names_parse_case_insensitively() {
    assert_eq!(
        parse_appear_transition(" Pop ").unwrap(),
        Some(AppearTransition::PopAppear)
    );
    assert_eq!(
        parse_appear_transition("simple_appear").unwrap(),
        Some(AppearTransition::SimpleAppear)
    );
    assert_eq!(parse_appear_transition("NONE").unwrap(), None);
    assert_eq!(
        parse_disappear_transition("simple").unwrap(),
        Some(DisappearTransition::SimpleDisappear)
    );
    assert_eq!(parse_disappear_transition("none").unwrap(), None);
}

#[test]
fn unknown_names_are_config_errors() {
    assert!(matches!(
        parse_appear_transition("bounce"),
        Err(BadgeError::Config(_))
    ));
    assert!(matches!(
        parse_disappear_transition("pop"),
        Err(BadgeError::Config(_))
    ));
    assert!(parse_appear_transition("  ").is_err());
}
