//! Per-frame input from the host.

use bm_core::Vec3;

/// Local player kinematics.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    /// uu/s.
    pub velocity: Vec3,
    /// Boost level, 0–100.
    pub boost:    f32,
}

/// Everything the session needs from one host frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameSample {
    /// Seconds since the previous frame.
    pub dt:            f32,
    pub player:        PlayerState,
    /// `None` when the host has no ball (e.g. between goals).
    pub ball_position: Option<Vec3>,
    pub ball_touched:  bool,
    pub eliminated:    bool,
}

impl FrameSample {
    pub fn new(dt: f32, player: PlayerState) -> Self {
        Self { dt, player, ..Self::default() }
    }

    pub fn with_ball(mut self, position: Vec3) -> Self {
        self.ball_position = Some(position);
        self
    }

    #[inline]
    pub fn ball_distance(&self) -> Option<f32> {
        self.ball_position.map(|b| b.distance(self.player.position))
    }
}
