// src/render/skeleton_renderer.rs
//
// Draws one marker per tracked body part, each tethered by a line to a fixed
// anchor. Positions arrive as offsets from the viewport center in a
// top-left-origin screen space (y down), matching what the tracker sends.

use nannou::prelude::*;

use crate::models::{BodyPart, SkeletonState};

/// Where and how one body part gets drawn this frame. Coordinates are in
/// screen space (top-left origin, y down).
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLayout {
    pub part: BodyPart,
    pub position: Point2,
    pub anchor: Point2,
    pub color: Rgb,
}

/// Maps a (x, y) pose offset to screen space: offsets are relative to the
/// viewport center, with the vertical axis flipped so +y in the pose data
/// moves the marker up the screen.
pub fn screen_position(offset: Point2, viewport: Vec2) -> Point2 {
    pt2(
        offset.x + viewport.x / 2.0,
        viewport.y - (offset.y + viewport.y / 2.0),
    )
}

// Screen space to nannou's centered, y-up draw space.
fn to_draw_space(p: Point2, viewport: Vec2) -> Point2 {
    pt2(p.x - viewport.x / 2.0, viewport.y / 2.0 - p.y)
}

fn part_color(part: BodyPart) -> Rgb {
    match part {
        BodyPart::LeftLowerLeg => rgb(1.0, 0.0, 0.0),
        BodyPart::ChestBottom => rgb(0.0, 1.0, 0.0),
        BodyPart::LeftForeArm => rgb(0.0, 0.0, 1.0),
        BodyPart::RightForeArm => rgb(1.0, 1.0, 0.0),
        BodyPart::RightLowerLeg => rgb(1.0, 0.0, 1.0),
        BodyPart::Head => rgb(0.0, 1.0, 1.0),
    }
}

// Anchor endpoints in screen space. Two hang off the right/bottom edge, so
// they depend on the viewport size.
fn anchor_point(part: BodyPart, viewport: Vec2) -> Point2 {
    match part {
        BodyPart::LeftLowerLeg => pt2(0.0, 200.0),
        BodyPart::ChestBottom => pt2(viewport.x, 600.0),
        BodyPart::LeftForeArm => pt2(viewport.x, 400.0),
        BodyPart::RightForeArm => pt2(0.0, 0.0),
        BodyPart::RightLowerLeg => pt2(0.0, viewport.y),
        BodyPart::Head => pt2(0.0, 300.0),
    }
}

pub struct SkeletonRenderer {
    marker_radius: f32,
    line_weight: f32,
}

impl SkeletonRenderer {
    pub fn new(marker_radius: f32, line_weight: f32) -> Self {
        Self {
            marker_radius,
            line_weight,
        }
    }

    /// Computes this frame's markers from the current slot values. Pure:
    /// calling it twice with unchanged slots yields identical layouts.
    ///
    /// Parts whose slot holds fewer than two values (including never-updated
    /// parts) are left out entirely.
    pub fn layout(&self, skeleton: &SkeletonState, viewport: Vec2) -> Vec<MarkerLayout> {
        let mut markers = Vec::with_capacity(BodyPart::ALL.len());
        for part in BodyPart::ALL {
            let values = skeleton.get(part);
            if values.len() < 2 {
                continue;
            }
            markers.push(MarkerLayout {
                part,
                position: screen_position(pt2(values[0], values[1]), viewport),
                anchor: anchor_point(part, viewport),
                color: part_color(part),
            });
        }
        markers
    }

    pub fn draw(&self, draw: &Draw, skeleton: &SkeletonState, viewport: Vec2) {
        for marker in self.layout(skeleton, viewport) {
            let position = to_draw_space(marker.position, viewport);
            let anchor = to_draw_space(marker.anchor, viewport);

            draw.ellipse()
                .xy(position)
                .radius(self.marker_radius)
                .color(marker.color);
            draw.line()
                .points(anchor, position)
                .stroke_weight(self.line_weight)
                .color(marker.color);
        }
    }
}
