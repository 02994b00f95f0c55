//! Clock face view layer - Pure rendering, no business logic

use dialclock_core::dial::{FaceLayout, HandGeometry, HandKind, RotationSnapshot};
use dialclock_proto::config::Appearance;
use iced::{
    Color, Point, Rectangle, Renderer, Theme, Vector, mouse,
    widget::canvas::{self, Cache, Frame, Geometry, LineCap, Path, Stroke},
};

/// Canvas program drawing the face outline and the three hands.
///
/// The outline is cached until the layout changes; hands are redrawn on
/// every frame.
pub struct Dial<'a> {
    layout:     Option<&'a FaceLayout>,
    rotation:   RotationSnapshot,
    appearance: &'a Appearance,
    face_cache: &'a Cache,
}

impl<'a> Dial<'a> {
    pub fn new(
        layout: Option<&'a FaceLayout>,
        rotation: RotationSnapshot,
        appearance: &'a Appearance,
        face_cache: &'a Cache,
    ) -> Self {
        Self {
            layout,
            rotation,
            appearance,
            face_cache,
        }
    }

    /// Hands in paint order; the hour hand ends up on top.
    fn hands(&self) -> [(HandKind, f32, Color); 3] {
        [
            (
                HandKind::Second,
                self.rotation.second_radians(),
                self.appearance.second_hand(),
            ),
            (
                HandKind::Minute,
                self.rotation.minute_radians(),
                self.appearance.minute_hand(),
            ),
            (
                HandKind::Hour,
                self.rotation.hour_radians(),
                self.appearance.hour_hand(),
            ),
        ]
    }
}

impl<Message> canvas::Program<Message> for Dial<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(layout) = self.layout else {
            return Vec::new();
        };

        let face = self.face_cache.draw(renderer, bounds.size(), |frame| {
            let outline = outline_path(&outline_points(layout, frame.center()));

            frame.stroke(
                &outline,
                Stroke::default()
                    .with_width(self.appearance.face_stroke_width)
                    .with_color(self.appearance.face()),
            );
        });

        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        frame.translate(Vector::new(center.x, center.y));

        for (kind, angle, color) in self.hands() {
            let hand = layout.hand(kind);
            let (base, tip) = hand_segment(hand);

            frame.with_save(|frame| {
                frame.rotate(angle);
                frame.stroke(
                    &Path::line(base, tip),
                    Stroke::default()
                        .with_width(hand.width)
                        .with_color(color)
                        .with_line_cap(LineCap::Round),
                );
            });
        }

        vec![face, frame.into_geometry()]
    }
}

fn outline_points(layout: &FaceLayout, center: Point) -> Vec<Point> {
    layout
        .polygon()
        .iter()
        .map(|vertex| Point::new(center.x + vertex.x, center.y + vertex.y))
        .collect()
}

fn outline_path(points: &[Point]) -> Path {
    Path::new(|builder| {
        let mut points = points.iter();

        if let Some(first) = points.next() {
            builder.move_to(*first);
            for point in points {
                builder.line_to(*point);
            }
            builder.close();
        }
    })
}

/// Endpoints of a round-capped stroke covering the hand's rounded rectangle,
/// before rotation. Hands shorter than their width shrink to a dot.
fn hand_segment(hand: &HandGeometry) -> (Point, Point) {
    let cap = hand.width / 2.;
    let middle = hand.pivot_offset;

    let base = (hand.base() - cap).max(middle);
    let tip = (hand.tip() + cap).min(middle);

    (Point::new(0., base), Point::new(0., tip))
}
