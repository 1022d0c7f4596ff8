//! Unit tests for bm-profile.

#[cfg(test)]
mod profiler {
    use crate::{MAX_SAMPLES, Profiler, TimingStats};

    #[test]
    fn report_min_avg_max() {
        let mut p = Profiler::new();
        for v in [10, 20, 30] {
            p.record("X", v);
        }
        assert_eq!(p.report(), vec!["X - Avg: 20us, Min: 10us, Max: 30us".to_string()]);
        assert_eq!(p.stats("X"), Some(TimingStats { samples: 3, min: 10, avg: 20, max: 30 }));
    }

    #[test]
    fn average_truncates() {
        let mut p = Profiler::new();
        p.record("a", 1);
        p.record("a", 2);
        assert_eq!(p.stats("a").map(|s| s.avg), Some(1));
    }

    #[test]
    fn report_sorted_by_name() {
        let mut p = Profiler::new();
        p.record("render", 5);
        p.record("heatmap", 7);
        p.record("route", 9);
        let names: Vec<&str> = p.names().collect();
        assert_eq!(names, ["heatmap", "render", "route"]);
        assert!(p.report()[0].starts_with("heatmap - "));
    }

    #[test]
    fn series_are_independent() {
        let mut p = Profiler::new();
        for v in 0..(MAX_SAMPLES as u64 + 1) {
            p.record("tick", v);
        }
        p.record("route", 42);
        assert_eq!(p.stats("tick").map(|s| s.samples), Some(MAX_SAMPLES));
        assert_eq!(p.stats("route"), Some(TimingStats { samples: 1, min: 42, avg: 42, max: 42 }));
        assert_eq!(p.stats("render"), None);
    }

    #[test]
    fn series_keeps_latest_samples() {
        let mut p = Profiler::new();
        for v in 0..(MAX_SAMPLES as u64 + 10) {
            p.record("s", v);
        }
        let s = p.stats("s").unwrap();
        assert_eq!(s.samples, MAX_SAMPLES);
        assert_eq!(s.min, 10);
        assert_eq!(s.max, MAX_SAMPLES as u64 + 9);
    }

    #[test]
    fn empty_profiler_reports_nothing() {
        let mut p = Profiler::new();
        assert!(p.report().is_empty());
        assert_eq!(p.stats("missing"), None);
        p.record("x", 1);
        p.clear();
        assert!(p.report().is_empty());
    }
}

#[cfg(test)]
mod timer {
    use crate::Profiler;

    #[test]
    fn scope_records_on_drop() {
        let mut p = Profiler::new();
        {
            let _t = p.scope("block");
        }
        assert_eq!(p.stats("block").map(|s| s.samples), Some(1));
    }

    #[test]
    fn time_returns_closure_value() {
        let mut p = Profiler::new();
        let v = p.time("calc", || 6 * 7);
        assert_eq!(v, 42);
        assert_eq!(p.stats("calc").map(|s| s.samples), Some(1));
    }

    #[test]
    fn early_return_is_recorded() {
        fn work(p: &mut Profiler, bail: bool) -> Option<u32> {
            let _t = p.scope("work");
            if bail {
                return None;
            }
            Some(1)
        }
        let mut p = Profiler::new();
        work(&mut p, true);
        work(&mut p, false);
        assert_eq!(p.stats("work").map(|s| s.samples), Some(2));
    }

    #[test]
    fn unwinding_is_recorded() {
        let mut p = Profiler::new();
        let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _t = p.scope("panics");
            panic!("boom");
        }));
        assert!(r.is_err());
        assert_eq!(p.stats("panics").map(|s| s.samples), Some(1));
    }
}
