use std::f32::consts::TAU;

use log::debug;

/// Number of sides of the face outline.
pub const FACE_SIDES: usize = 12;

/// Thickness of every hand.
pub const HAND_WIDTH: f32 = 10.;

/// A point relative to the face center, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    /// Hand length as a fraction of the face radius.
    pub fn ratio(self) -> f32 {
        match self {
            HandKind::Hour => 1. / 3.,
            HandKind::Minute => 2. / 3.,
            HandKind::Second => 2.5 / 3.,
        }
    }
}

/// Size of one hand plus the translation that puts its base on the pivot.
///
/// The hand is a `width x length` rectangle centered on the pivot, shifted
/// along its own axis by `pivot_offset` before rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandGeometry {
    pub width:        f32,
    pub length:       f32,
    pub pivot_offset: f32,
}

impl HandGeometry {
    fn new(kind: HandKind, radius: f32) -> Self {
        let length = radius * kind.ratio();

        Self {
            width: HAND_WIDTH,
            length,
            pivot_offset: -length / 2.,
        }
    }

    /// Distance from the pivot to the tip, measured along the unrotated axis.
    pub fn tip(&self) -> f32 {
        self.pivot_offset - self.length / 2.
    }

    /// Distance from the pivot to the base, measured along the unrotated axis.
    pub fn base(&self) -> f32 {
        self.pivot_offset + self.length / 2.
    }
}

/// Face outline and hand sizes for one radius.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLayout {
    radius:  f32,
    polygon: Vec<Vertex>,
    hour:    HandGeometry,
    minute:  HandGeometry,
    second:  HandGeometry,
}

impl FaceLayout {
    pub fn with_radius(radius: f32) -> Self {
        let radius = radius.max(0.);

        Self {
            radius,
            polygon: polygon_points(radius, FACE_SIDES),
            hour: HandGeometry::new(HandKind::Hour, radius),
            minute: HandGeometry::new(HandKind::Minute, radius),
            second: HandGeometry::new(HandKind::Second, radius),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn polygon(&self) -> &[Vertex] {
        &self.polygon
    }

    pub fn hand(&self, kind: HandKind) -> &HandGeometry {
        match kind {
            HandKind::Hour => &self.hour,
            HandKind::Minute => &self.minute,
            HandKind::Second => &self.second,
        }
    }
}

fn polygon_points(radius: f32, sides: usize) -> Vec<Vertex> {
    let step = TAU / sides as f32;

    (1..=sides)
        .map(|i| {
            let angle = step * i as f32;
            Vertex {
                x: angle.sin() * radius,
                y: angle.cos() * radius,
            }
        })
        .collect()
}

/// Tracks the container extent and regenerates the [`FaceLayout`] on resize.
///
/// A change along one axis is applied only while that axis is not the longer
/// one, which keeps the face from stretching into a non-square container.
/// Until a first layout exists the shorter axis is used unconditionally.
#[derive(Debug, Clone, Default)]
pub struct ContainerTracker {
    width:  f32,
    height: f32,
    layout: Option<FaceLayout>,
}

impl ContainerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self) -> Option<&FaceLayout> {
        self.layout.as_ref()
    }

    /// Record a new container size. Returns `true` when the layout changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let mut changed = false;

        if width != self.width {
            self.width = width;

            if width <= self.height {
                changed |= self.regenerate(width / 2.);
            }
        }

        if height != self.height {
            self.height = height;

            if height <= self.width {
                changed |= self.regenerate(height / 2.);
            }
        }

        if self.layout.is_none() {
            changed |= self.regenerate(width.min(height) / 2.);
        }

        changed
    }

    fn regenerate(&mut self, radius: f32) -> bool {
        let layout = FaceLayout::with_radius(radius);

        if self.layout.as_ref() == Some(&layout) {
            return false;
        }

        debug!("Regenerating clock face with radius {}", layout.radius());
        self.layout = Some(layout);
        true
    }
}
