//! Pickup categories and display colours.

/// Size category of a boost pad.  The yield is fixed per category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PadKind {
    /// Corner and midfield pads: refill to full.
    Major,
    /// Small pads between the majors.
    Minor,
}

impl PadKind {
    /// Boost granted on pickup, in boost units (0–100 scale).
    #[inline]
    pub fn yield_amount(self) -> f32 {
        match self {
            PadKind::Major => 100.0,
            PadKind::Minor => 12.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PadKind::Major => "major",
            PadKind::Minor => "minor",
        }
    }
}

impl std::fmt::Display for PadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Linear RGBA colour with components in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE:  Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK:  Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const RED:    Color = Color::rgba(1.0, 0.2, 0.2, 1.0);
    pub const GREEN:  Color = Color::rgba(0.2, 1.0, 0.2, 1.0);
    pub const YELLOW: Color = Color::rgba(1.0, 1.0, 0.0, 1.0);
    pub const ORANGE: Color = Color::rgba(1.0, 0.6, 0.0, 1.0);
    pub const CYAN:   Color = Color::rgba(0.2, 0.8, 1.0, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with alpha multiplied by `factor`.
    #[inline]
    pub fn faded(self, factor: f32) -> Self {
        Self { a: self.a * factor, ..self }
    }
}
