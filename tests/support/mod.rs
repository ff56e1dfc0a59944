#![allow(dead_code)]

use std::{
    collections::{BTreeMap, BTreeSet},
    time::Duration,
};

use viewbadge::{
    Affine, Animation, AnimationTracks, BadgeShapes, Font, HostBinding, Orientation, Rect,
    ShapeHandle, ShapeSink, ShapeSpec, Size,
};

pub type HostId = u32;

/// Width of one glyph at 13pt; labels measure `chars * GLYPH * size / 13`.
pub const GLYPH: f64 = 7.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeRecord {
    pub host: HostId,
    pub is_label: bool,
    pub frame: Option<Rect>,
    pub corner_radius: Option<f64>,
    pub visible: bool,
    pub transform: Option<Affine>,
    pub text: String,
    pub font: Option<Font>,
}

#[derive(Debug, Default)]
pub struct ShapeTable {
    pub shapes: BTreeMap<ShapeHandle, ShapeRecord>,
}

impl ShapeTable {
    fn get_mut(&mut self, handle: ShapeHandle) -> &mut ShapeRecord {
        self.shapes
            .get_mut(&handle)
            .unwrap_or_else(|| panic!("unknown shape {handle:?}"))
    }
}

impl ShapeSink for ShapeTable {
    fn apply_frame(&mut self, handle: ShapeHandle, frame: Rect) {
        self.get_mut(handle).frame = Some(frame);
    }

    fn set_corner_radius(&mut self, handle: ShapeHandle, radius: f64) {
        self.get_mut(handle).corner_radius = Some(radius);
    }

    fn set_visible(&mut self, handle: ShapeHandle, visible: bool) {
        self.get_mut(handle).visible = visible;
    }

    fn is_visible(&self, handle: ShapeHandle) -> bool {
        self.shapes.get(&handle).is_some_and(|s| s.visible)
    }

    fn set_transform(&mut self, handle: ShapeHandle, transform: Affine) {
        self.get_mut(handle).transform = Some(transform);
    }

    fn set_text(&mut self, handle: ShapeHandle, text: &str) {
        self.get_mut(handle).text = text.to_owned();
    }

    fn set_font(&mut self, handle: ShapeHandle, font: &Font) {
        self.get_mut(handle).font = Some(font.clone());
    }

    fn measure_label(&self, handle: ShapeHandle) -> Size {
        let Some(shape) = self.shapes.get(&handle) else {
            return Size::ZERO;
        };
        let size = shape.font.as_ref().map_or(13.0, |f| f.size);
        let chars = shape.text.chars().count() as f64;
        Size::new(chars * GLYPH * size / 13.0, size * 1.2)
    }

    fn run_animation(&mut self, _handles: &[ShapeHandle], _animation: Animation) {}

    fn cancel_animations(&mut self, _handles: &[ShapeHandle]) {}
}

/// In-memory host binding that records every call.
#[derive(Debug)]
pub struct RecordingHost {
    pub table: ShapeTable,
    pub tracks: AnimationTracks,
    pub bounds: BTreeMap<HostId, Size>,
    pub orientation: Orientation,
    pub subscribed: BTreeSet<HostId>,
    pub attach_calls: Vec<HostId>,
    pub detach_calls: Vec<HostId>,
    pub subscribe_calls: Vec<HostId>,
    pub specs: Vec<ShapeSpec>,
    pub animations: Vec<(Vec<ShapeHandle>, Animation)>,
    pub cancel_calls: usize,
    next_handle: u64,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            table: ShapeTable::default(),
            tracks: AnimationTracks::new(),
            bounds: BTreeMap::new(),
            orientation: Orientation::Portrait,
            subscribed: BTreeSet::new(),
            attach_calls: Vec::new(),
            detach_calls: Vec::new(),
            subscribe_calls: Vec::new(),
            specs: Vec::new(),
            animations: Vec::new(),
            cancel_calls: 0,
            next_handle: 1,
        }
    }
}

impl RecordingHost {
    pub fn with_host(host: HostId, size: Size) -> Self {
        let mut h = Self::default();
        h.bounds.insert(host, size);
        h
    }

    pub fn shape(&self, handle: ShapeHandle) -> &ShapeRecord {
        &self.table.shapes[&handle]
    }

    pub fn shapes_of(&self, host: HostId) -> Vec<&ShapeRecord> {
        self.table
            .shapes
            .values()
            .filter(|s| s.host == host)
            .collect()
    }

    /// Run every in-flight animation to its end, as the UI loop would.
    pub fn finish_animations(&mut self) {
        self.tracks.finish_all(&mut self.table);
    }

    pub fn step_animations(&mut self, dt: Duration) {
        self.tracks.advance(dt, &mut self.table);
    }

    fn alloc(&mut self, host: HostId, is_label: bool) -> ShapeHandle {
        let handle = ShapeHandle(self.next_handle);
        self.next_handle += 1;
        self.table.shapes.insert(
            handle,
            ShapeRecord {
                host,
                is_label,
                visible: true,
                ..ShapeRecord::default()
            },
        );
        handle
    }
}

impl ShapeSink for RecordingHost {
    fn apply_frame(&mut self, handle: ShapeHandle, frame: Rect) {
        self.table.apply_frame(handle, frame);
    }

    fn set_corner_radius(&mut self, handle: ShapeHandle, radius: f64) {
        self.table.set_corner_radius(handle, radius);
    }

    fn set_visible(&mut self, handle: ShapeHandle, visible: bool) {
        self.table.set_visible(handle, visible);
    }

    fn is_visible(&self, handle: ShapeHandle) -> bool {
        self.table.is_visible(handle)
    }

    fn set_transform(&mut self, handle: ShapeHandle, transform: Affine) {
        self.table.set_transform(handle, transform);
    }

    fn set_text(&mut self, handle: ShapeHandle, text: &str) {
        self.table.set_text(handle, text);
    }

    fn set_font(&mut self, handle: ShapeHandle, font: &Font) {
        self.table.set_font(handle, font);
    }

    fn measure_label(&self, handle: ShapeHandle) -> Size {
        self.table.measure_label(handle)
    }

    fn run_animation(&mut self, handles: &[ShapeHandle], animation: Animation) {
        self.animations.push((handles.to_vec(), animation));
        self.tracks.start(handles, animation);
    }

    fn cancel_animations(&mut self, handles: &[ShapeHandle]) {
        self.cancel_calls += 1;
        self.tracks.cancel(handles);
    }
}

impl HostBinding for RecordingHost {
    type Host = HostId;

    fn attach_shapes(&mut self, host: HostId, spec: &ShapeSpec) -> BadgeShapes {
        self.attach_calls.push(host);
        self.specs.push(spec.clone());
        let circle = self.alloc(host, false);
        let label = spec.label.as_ref().map(|_| self.alloc(host, true));
        BadgeShapes { circle, label }
    }

    fn detach_shapes(&mut self, host: HostId, shapes: &BadgeShapes) {
        self.detach_calls.push(host);
        for handle in shapes.all() {
            self.table.shapes.remove(&handle);
        }
        self.tracks.cancel(&shapes.all().collect::<Vec<_>>());
    }

    fn current_bounds(&self, host: HostId) -> Size {
        self.bounds.get(&host).copied().unwrap_or(Size::ZERO)
    }

    fn current_orientation(&self) -> Orientation {
        self.orientation
    }

    fn subscribe_orientation_change(&mut self, host: HostId) {
        self.subscribe_calls.push(host);
        self.subscribed.insert(host);
    }

    fn unsubscribe(&mut self, host: HostId) {
        self.subscribed.remove(&host);
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
