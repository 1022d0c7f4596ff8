//! Draw-command generation.
//!
//! The session never talks to a renderer.  It turns its state into a flat
//! list of [`DrawCommand`]s in screen space, using a host-supplied
//! [`Projector`] for world→screen mapping, and the host replays them.

use bm_core::{Color, PadFilter, PadKind, Vec2, Vec3};
use bm_notify::HudEntry;
use bm_pads::{NavGraph, RoutePlan};

/// World→screen projection.  `None` means the point is off screen or
/// behind the camera.
pub trait Projector {
    fn project(&self, world: Vec3) -> Option<Vec2>;
}

impl<F> Projector for F
where
    F: Fn(Vec3) -> Option<Vec2>,
{
    #[inline]
    fn project(&self, world: Vec3) -> Option<Vec2> {
        self(world)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: Vec2, to: Vec2, thickness: f32, color: Color },
    /// Filled rectangle; `origin` is the top-left corner.
    Rect { origin: Vec2, size: Vec2, color: Color },
    Text { origin: Vec2, text: String, color: Color },
}

// ── Notification panels ───────────────────────────────────────────────────────

/// Distance of the panel column from the right screen edge.
pub const PANEL_RIGHT_OFFSET: f32 = 400.0;
pub const PANEL_TOP: f32 = 100.0;
pub const PANEL_WIDTH: f32 = 350.0;
pub const PANEL_HEIGHT: f32 = 40.0;
pub const PANEL_GAP: f32 = 5.0;
const PANEL_BORDER: f32 = 3.0;
const PANEL_TEXT_INSET: f32 = 10.0;
const PANEL_BACKGROUND_ALPHA: f32 = 0.7;

/// Three commands per entry: background, top border, text.
pub fn notification_panels(entries: &[HudEntry], screen: Vec2) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(entries.len() * 3);
    for (i, e) in entries.iter().enumerate() {
        let origin = Vec2::new(
            screen.x - PANEL_RIGHT_OFFSET,
            PANEL_TOP + i as f32 * (PANEL_HEIGHT + PANEL_GAP),
        );
        out.push(DrawCommand::Rect {
            origin,
            size:  Vec2::new(PANEL_WIDTH, PANEL_HEIGHT),
            color: Color::BLACK.faded(PANEL_BACKGROUND_ALPHA * e.alpha),
        });
        out.push(DrawCommand::Rect {
            origin,
            size:  Vec2::new(PANEL_WIDTH, PANEL_BORDER),
            color: e.color.faded(e.alpha),
        });
        out.push(DrawCommand::Text {
            origin: Vec2::new(origin.x + PANEL_TEXT_INSET, origin.y + PANEL_TEXT_INSET),
            text:   e.message.clone(),
            color:  Color::WHITE.faded(e.alpha),
        });
    }
    out
}

// ── World overlays ────────────────────────────────────────────────────────────

/// One line per route segment whose endpoints both project.
pub fn route_overlay(
    graph: &NavGraph,
    plan: &RoutePlan,
    projector: &impl Projector,
    color: Color,
    thickness: f32,
) -> Vec<DrawCommand> {
    plan.segments(graph)
        .filter_map(|(a, b)| {
            let from = projector.project(a)?;
            let to = projector.project(b)?;
            Some(DrawCommand::Line { from, to, thickness, color })
        })
        .collect()
}

/// Side length in pixels of a pad marker.
pub fn marker_size(kind: PadKind) -> f32 {
    match kind {
        PadKind::Major => 12.0,
        PadKind::Minor => 6.0,
    }
}

pub fn marker_color(kind: PadKind) -> Color {
    match kind {
        PadKind::Major => Color::ORANGE,
        PadKind::Minor => Color::YELLOW,
    }
}

/// A square centred on every projectable pad admitted by `filter`.
pub fn pad_markers(graph: &NavGraph, filter: PadFilter, projector: &impl Projector) -> Vec<DrawCommand> {
    graph
        .nodes
        .iter()
        .filter(|n| filter.admits(n.kind))
        .filter_map(|n| {
            let centre = projector.project(n.position)?;
            let side = marker_size(n.kind);
            Some(DrawCommand::Rect {
                origin: Vec2::new(centre.x - side / 2.0, centre.y - side / 2.0),
                size:   Vec2::new(side, side),
                color:  marker_color(n.kind),
            })
        })
        .collect()
}
