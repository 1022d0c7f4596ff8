//! Built-in coaching rules.
//!
//! Each rule watches one condition.  While the condition holds its
//! [`Episode`] accumulates time; once the configured duration is reached
//! the rule fires a single notification.  It cannot fire again until the
//! condition clears and a new episode starts.

use bm_core::CoachConfig;
use bm_notify::{Notification, NotificationKind};

/// Time-in-condition tracker that fires once per episode.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Episode {
    held:  f32,
    fired: bool,
}

impl Episode {
    /// Advance by `dt`.  Returns `true` on the update where `held` first
    /// reaches `after_secs`; a `false` condition ends the episode.
    pub fn update(&mut self, condition: bool, dt: f32, after_secs: f32) -> bool {
        if !condition {
            *self = Self::default();
            return false;
        }
        self.held += dt.max(0.0);
        if !self.fired && self.held >= after_secs {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn held(&self) -> f32 {
        self.held
    }
}

#[derive(Clone, Debug, Default)]
pub struct CoachingRules {
    low:         Episode,
    hoarding:    Episode,
    positioning: Episode,
}

impl CoachingRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every rule for one frame and return the notifications that fired.
    pub fn evaluate(
        &mut self,
        config: &CoachConfig,
        boost: f32,
        ball_distance: Option<f32>,
        dt: f32,
    ) -> Vec<Notification> {
        let lifetime = config.notification_lifetime_secs;
        let mut fired = Vec::new();

        if self.low.update(boost < config.low_boost_threshold, dt, config.low_boost_secs) {
            fired.push(
                Notification::new(NotificationKind::LowResource, "Low boost! Grab a pad.")
                    .with_lifetime(lifetime),
            );
        }

        if self.hoarding.update(boost >= config.hoarding_level, dt, config.hoarding_secs) {
            fired.push(
                Notification::new(
                    NotificationKind::ResourceHoarding,
                    format!("Full boost for {:.0}s. Use it!", config.hoarding_secs),
                )
                .with_lifetime(lifetime),
            );
        }

        let far = ball_distance.is_some_and(|d| d > config.positioning_distance);
        if self.positioning.update(far, dt, config.positioning_secs) {
            fired.push(
                Notification::new(NotificationKind::PositioningHint, "Too far from the ball. Rotate in.")
                    .with_lifetime(lifetime),
            );
        }

        fired
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
