//! Unit tests for rdv-core primitives.

#[cfg(test)]
mod ids {
    use crate::RobotId;

    #[test]
    fn index_roundtrip() {
        let id = RobotId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RobotId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn lower_id_orders_first() {
        assert!(RobotId(0) < RobotId(1));
        assert!(RobotId(100) > RobotId(99));
    }

    #[test]
    fn display() {
        assert_eq!(RobotId(7).to_string(), "RobotId(7)");
    }
}

#[cfg(test)]
mod pos {
    use crate::Pos;

    #[test]
    fn manhattan_distance() {
        let a = Pos::new(0, 0);
        let b = Pos::new(3, 4);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn manhattan_with_negatives() {
        assert_eq!(Pos::new(-2, 1).manhattan(Pos::new(2, -1)), 6);
    }

    #[test]
    fn euclidean_distance() {
        let d = Pos::new(0, 0).euclidean(Pos::new(3, 4));
        assert!((d - 5.0).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn ordering_is_x_major() {
        assert!(Pos::new(0, 9) < Pos::new(1, 0));
        assert!(Pos::new(2, 1) < Pos::new(2, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Pos::new(3, -1).to_string(), "(3, -1)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn tick_display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn config_defaults() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.max_ticks, 50);
        assert_eq!(cfg.wait_threshold, 2);
        assert_eq!(cfg.end_tick(), Tick(50));
    }
}
