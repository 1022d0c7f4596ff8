//! Unit tests for bm-core primitives.

#[cfg(test)]
mod ids {
    use crate::PadId;

    #[test]
    fn index_roundtrip() {
        let id = PadId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(PadId::try_from(7usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel() {
        assert_eq!(PadId::INVALID.0, u32::MAX);
        assert_eq!(PadId::default(), PadId::INVALID);
        assert!(!PadId::INVALID.is_valid());
        assert!(PadId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(PadId(3).to_string(), "PadId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{FieldBounds, Vec3};

    #[test]
    fn distance_345() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn centre_maps_to_middle_cell() {
        let f = FieldBounds::STANDARD;
        assert_eq!(f.cell_of(Vec3::ZERO, 64), Some((32, 32)));
    }

    #[test]
    fn corners() {
        let f = FieldBounds::STANDARD;
        assert_eq!(f.cell_of(Vec3::new(-4096.0, -5120.0, 0.0), 10), Some((0, 0)));
        assert_eq!(f.cell_of(Vec3::new(4095.0, 5119.0, 0.0), 10), Some((9, 9)));
    }

    #[test]
    fn out_of_bounds_rejected_not_clamped() {
        let f = FieldBounds::STANDARD;
        // Just below the lower bound: truncation would give cell 0.
        assert_eq!(f.cell_of(Vec3::new(-4100.0, 0.0, 0.0), 64), None);
        // Upper bound is exclusive.
        assert_eq!(f.cell_of(Vec3::new(4096.0, 0.0, 0.0), 64), None);
        assert_eq!(f.cell_of(Vec3::new(0.0, 6000.0, 0.0), 64), None);
        assert_eq!(f.cell_of(Vec3::new(f32::NAN, 0.0, 0.0), 64), None);
    }
}

#[cfg(test)]
mod time {
    use crate::GameClock;

    #[test]
    fn advance_accumulates() {
        let mut c = GameClock::new();
        c.advance(0.5);
        c.advance(0.25);
        assert_eq!(c.now(), 0.75);
        assert_eq!(c.frame, 2);
    }

    #[test]
    fn negative_delta_ignored() {
        let mut c = GameClock::new();
        c.advance(1.0);
        c.advance(-5.0);
        assert_eq!(c.now(), 1.0);
        assert_eq!(c.frame, 2);
    }

    #[test]
    fn display_minutes_seconds() {
        let mut c = GameClock::new();
        c.advance(125.0);
        assert_eq!(c.to_string(), "frame 1 (2:05)");
    }
}

#[cfg(test)]
mod config {
    use crate::{
        CoachConfig, Color, CoreError, MAX_GRID_SIZE, MAX_NOTIFICATION_CAPACITY, PadFilter, PadKind,
    };

    #[test]
    fn defaults_are_valid() {
        let cfg = CoachConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.low_boost_threshold, 20.0);
        assert_eq!(cfg.notification_capacity, 5);
        assert_eq!(cfg.efficiency_ttl_secs, 1.0);
    }

    #[test]
    fn out_of_range_rejected() {
        let cfg = CoachConfig { low_boost_secs: 0.0, ..CoachConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));

        let cfg = CoachConfig { grid_size: 0, ..CoachConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn records_round_trip() {
        let cfg = CoachConfig {
            low_boost_threshold: 15.0,
            use_astar:           true,
            pad_filter:          PadFilter::Only(PadKind::Minor),
            overlay_color:       Color::rgba(0.5, 0.25, 1.0, 1.0),
            ..CoachConfig::default()
        };
        let back = CoachConfig::from_records(cfg.to_records());
        assert_eq!(back, cfg);
    }

    #[test]
    fn malformed_and_unknown_records_keep_defaults() {
        let cfg = CoachConfig::from_records([
            ("low_threshold", "not-a-number"),
            ("nonsense", "1"),
            ("max_time", "7.5"),
        ]);
        assert_eq!(cfg.low_boost_threshold, 20.0);
        assert_eq!(cfg.hoarding_secs, 7.5);
    }

    #[test]
    fn grid_and_capacity_are_bounded() {
        let cfg = CoachConfig { grid_size: MAX_GRID_SIZE, ..CoachConfig::default() };
        cfg.validate().unwrap();
        let cfg = CoachConfig { grid_size: MAX_GRID_SIZE + 1, ..CoachConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));

        let cfg = CoachConfig { notification_capacity: MAX_NOTIFICATION_CAPACITY, ..CoachConfig::default() };
        cfg.validate().unwrap();
        let cfg = CoachConfig { notification_capacity: usize::MAX, ..CoachConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn lifetime_and_delta_must_be_finite() {
        for lifetime in [f32::NAN, 0.0, -1.0, f32::INFINITY] {
            let cfg = CoachConfig { notification_lifetime_secs: lifetime, ..CoachConfig::default() };
            assert!(cfg.validate().is_err(), "{lifetime}");
        }
        for delta in [f32::NAN, -0.5, f32::INFINITY] {
            let cfg = CoachConfig { efficiency_invalidate_delta: delta, ..CoachConfig::default() };
            assert!(cfg.validate().is_err(), "{delta}");
        }
        let cfg = CoachConfig { efficiency_invalidate_delta: 0.0, ..CoachConfig::default() };
        cfg.validate().unwrap();
    }

    #[test]
    fn out_of_range_records_are_skipped() {
        let cfg = CoachConfig::from_records([
            ("low_threshold", "500"),
            ("max_time", "7.5"),
            ("grid_size", "5000000000"),
            ("notification_cap", "18446744073709551615"),
            ("notification_time", "NaN"),
        ]);
        assert_eq!(cfg.low_boost_threshold, 20.0);
        assert_eq!(cfg.hoarding_secs, 7.5);
        assert_eq!(cfg.grid_size, 64);
        assert_eq!(cfg.notification_capacity, 5);
        assert_eq!(cfg.notification_lifetime_secs, 3.0);
        cfg.validate().unwrap();
    }

    #[test]
    fn apply_record_reports_outcome() {
        let mut cfg = CoachConfig::default();
        assert!(cfg.apply_record("pad_filter", "big").unwrap());
        assert_eq!(cfg.pad_filter, PadFilter::Only(PadKind::Major));
        assert!(!cfg.apply_record("unknown", "x").unwrap());
        assert!(matches!(cfg.apply_record("overlay_color", "1,2"), Err(CoreError::Parse(_))));
    }

    #[test]
    fn pad_filter_admits() {
        assert!(PadFilter::All.admits(PadKind::Minor));
        assert!(PadFilter::Only(PadKind::Major).admits(PadKind::Major));
        assert!(!PadFilter::Only(PadKind::Major).admits(PadKind::Minor));
    }
}
