//! Unit tests for gn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::from_index(42), Some(id));
    }

    #[test]
    fn from_index_rejects_sentinel_and_overflow() {
        assert_eq!(NodeId::from_index(u32::MAX as usize), None);
        assert_eq!(AgentId::from_index(usize::MAX), None);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert!(!NodeId::INVALID.is_valid());
        assert!(AgentId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "n7");
        assert_eq!(AgentId(3).to_string(), "a3");
        assert_eq!(NodeId::INVALID.to_string(), "n-");
    }
}

#[cfg(test)]
mod geo {
    use crate::{PlaneBounds, Vec3};

    #[test]
    fn distance_is_euclidean() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 0.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn distance_xz_ignores_height() {
        let a = Vec3::new(1.0, 0.0, 1.0);
        let b = Vec3::new(1.0, 50.0, 1.0);
        assert_eq!(a.distance_xz(b), 0.0);
        assert!(a.distance(b) > 49.0);
    }

    #[test]
    fn move_towards_limits_step() {
        let a = Vec3::ZERO;
        let b = Vec3::new(10.0, 0.0, 0.0);
        let p = a.move_towards(b, 2.5);
        assert!((p.x - 2.5).abs() < 1e-6);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn move_towards_lands_exactly() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        let b = Vec3::new(1.5, 1.0, 1.0);
        assert_eq!(a.move_towards(b, 3.0), b);
        assert_eq!(b.move_towards(b, 1.0), b);
    }

    #[test]
    fn plane_bottom_left() {
        let plane = PlaneBounds::new(Vec3::new(5.0, 2.0, -5.0), 10.0, 20.0);
        assert_eq!(plane.bottom_left(), Vec3::new(0.0, 2.0, -15.0));
    }
}

#[cfg(test)]
mod config {
    use crate::{NavConfig, NavError};

    #[test]
    fn defaults_validate() {
        let cfg = NavConfig::default();
        assert_eq!(cfg.grid.nodes_x, 10);
        assert_eq!(cfg.grid.nodes_z, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_nodes_rejected() {
        let mut cfg = NavConfig::default();
        cfg.grid.nodes_z = 0;
        assert!(matches!(
            cfg.validate(),
            Err(NavError::InvalidDimensions { width: 10, height: 0 })
        ));
    }

    #[test]
    fn non_positive_speed_rejected() {
        let mut cfg = NavConfig::default();
        cfg.movement.move_speed = 0.0;
        assert!(matches!(cfg.validate(), Err(NavError::Config(_))));
        cfg.movement.move_speed = f32::NAN;
        assert!(matches!(cfg.validate(), Err(NavError::Config(_))));
    }

    #[test]
    fn negative_offset_rejected() {
        let mut cfg = NavConfig::default();
        cfg.grid.vertical_offset = -1.0;
        assert!(matches!(cfg.validate(), Err(NavError::Config(_))));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_config {
    use crate::NavConfig;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: NavConfig =
            serde_json::from_str(r#"{ "grid": { "nodes_x": 4 } }"#).unwrap();
        assert_eq!(cfg.grid.nodes_x, 4);
        assert_eq!(cfg.grid.nodes_z, 10);
        assert_eq!(cfg.movement.move_speed, 10.0);
    }
}
