//! Notification data.

use bm_core::Color;

/// Seconds a notification stays on screen unless overridden.
pub const DEFAULT_LIFETIME_SECS: f32 = 3.0;

/// What a notification is about.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NotificationKind {
    /// Boost has stayed low for too long.
    LowResource,
    /// Boost has stayed full for too long.
    ResourceHoarding,
    HighEfficiency,
    /// The player is far from the ball.
    PositioningHint,
    /// Raised by a user-registered trigger.
    Custom(String),
}

impl NotificationKind {
    /// Colour used when a notification of this kind doesn't set one.
    pub fn default_color(&self) -> Color {
        match self {
            NotificationKind::LowResource => Color::RED,
            NotificationKind::ResourceHoarding => Color::ORANGE,
            NotificationKind::HighEfficiency => Color::GREEN,
            NotificationKind::PositioningHint => Color::CYAN,
            NotificationKind::Custom(_) => Color::YELLOW,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification {
    pub kind:     NotificationKind,
    pub message:  String,
    /// Seconds on screen.
    pub lifetime: f32,
    pub color:    Color,
    /// Seconds since shown.
    pub elapsed:  f32,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        let color = kind.default_color();
        Self { kind, message: message.into(), lifetime: DEFAULT_LIFETIME_SECS, color, elapsed: 0.0 }
    }

    /// Shorthand for a [`NotificationKind::Custom`] notification.
    pub fn custom(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Custom(tag.into()), message)
    }

    pub fn with_lifetime(mut self, secs: f32) -> Self {
        self.lifetime = secs;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.lifetime
    }

    /// Fade factor: `1 − elapsed / lifetime`, clamped to `0..=1`.
    pub fn alpha(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        (1.0 - self.elapsed / self.lifetime).clamp(0.0, 1.0)
    }
}

/// What the HUD needs to draw one active notification.
#[derive(Clone, Debug, PartialEq)]
pub struct HudEntry {
    pub message: String,
    pub alpha:   f32,
    pub color:   Color,
}
