mod common;

use common::*;
use fx_core::styles::{PARTICLE_STYLE_ID, RIPPLE_STYLE_ID, TRAIL_STYLE_ID};
use fx_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[test]
fn init_spawns_the_particle_field_once() {
    let mut h = Harness::new();
    assert!(h.init(TargetRegistry::default()));
    assert_eq!(h.engine.particles().len(), 30);
    assert_eq!(h.live_nodes(), 30);

    assert!(!h.init(TargetRegistry::default()));
    assert_eq!(h.live_nodes(), 30);
    assert!(h.engine.is_initialized());
}

#[test]
fn init_installs_each_stylesheet() {
    let mut h = Harness::new();
    h.init(TargetRegistry::default());
    for id in [PARTICLE_STYLE_ID, TRAIL_STYLE_ID, RIPPLE_STYLE_ID] {
        assert!(h.installed_styles.contains(&id), "missing {id}");
    }
}

#[test]
fn particles_stay_within_their_ranges_and_never_expire() {
    let mut h = Harness::new();
    h.init(TargetRegistry::default());
    for d in h.engine.particles().descriptors() {
        assert!((2.0..=6.0).contains(&d.size_px));
        assert!((0.0..=100.0).contains(&d.left_pct));
        assert!((0.0..=100.0).contains(&d.top_pct));
        assert!((10.0..=20.0).contains(&d.duration_sec));
        assert!((0.0..=5.0).contains(&d.delay_sec));
    }
    assert!(h.engine.particles().drift_px().abs() <= 50.0);

    h.advance(Duration::from_secs(3600));
    assert_eq!(h.live_nodes(), 30);
    assert!(h
        .engine
        .particles()
        .ids()
        .all(|id| h.engine.pool().is_live(id)));
}

#[test]
fn particle_node_carries_its_descriptor() {
    let desc = ParticleDescriptor {
        size_px: 4.0,
        left_pct: 12.5,
        top_pct: 80.0,
        duration_sec: 15.0,
        delay_sec: 2.0,
    };
    let spec = desc.node_spec();
    assert_eq!(spec.style("width"), Some("4.00px"));
    assert_eq!(spec.style("height"), Some("4.00px"));
    assert_eq!(spec.style("left"), Some("12.50%"));
    assert_eq!(spec.style("top"), Some("80.00%"));
    assert_eq!(spec.style("animation-delay"), Some("2.00s"));
    assert!(spec
        .style("animation")
        .unwrap()
        .starts_with("float-particle 15.00s"));
}

#[test]
fn same_seed_gives_the_same_field() {
    let field = |seed| {
        let mut pool = EffectPool::new();
        let mut out = Outbox::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let f = ParticleField::spawn(30, &mut rng, &mut pool, &mut out);
        f.descriptors().copied().collect::<Vec<_>>()
    };
    assert_eq!(field(7), field(7));
    assert_ne!(field(7), field(8));
}

#[test]
fn custom_particle_count_is_honored() {
    let mut h = Harness::with_config(FxConfig {
        particle_count: 0,
        ..FxConfig::default()
    });
    h.init(TargetRegistry::default());
    assert!(h.engine.particles().is_empty());
    assert_eq!(h.live_nodes(), 0);
}

#[test]
fn default_config_is_valid() {
    assert_eq!(FxConfig::default().validate(), Ok(()));
}

#[test]
fn invalid_configs_are_rejected() {
    let cases = [
        (
            FxConfig {
                trail_max_points: 0,
                ..FxConfig::default()
            },
            ConfigError::ZeroTrailCapacity,
        ),
        (
            FxConfig {
                magnetic_radius: 0.0,
                ..FxConfig::default()
            },
            ConfigError::NonPositiveRadius(0.0),
        ),
        (
            FxConfig {
                magnetic_strength: 1.5,
                ..FxConfig::default()
            },
            ConfigError::StrengthOutOfRange(1.5),
        ),
        (
            FxConfig {
                typing_threshold: 0.0,
                ..FxConfig::default()
            },
            ConfigError::ThresholdOutOfRange {
                name: "typing",
                value: 0.0,
            },
        ),
        (
            FxConfig {
                parallax_fade_distance: -1.0,
                ..FxConfig::default()
            },
            ConfigError::NonPositiveFadeDistance(-1.0),
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected));
    }
}

#[test]
fn engine_refuses_an_invalid_config() {
    let result = Engine::new(
        FxConfig {
            trail_max_points: 0,
            ..FxConfig::default()
        },
        StdRng::seed_from_u64(SEED),
        Box::<MemoryStore>::default(),
    );
    assert!(matches!(result, Err(ConfigError::ZeroTrailCapacity)));
}

#[test]
fn config_error_messages_name_the_field() {
    let err = ConfigError::ThresholdOutOfRange {
        name: "reveal",
        value: 2.0,
    };
    assert_eq!(err.to_string(), "reveal threshold must be within (0, 1], got 2");
}

#[test]
fn smaller_trail_capacity_is_respected() {
    let mut h = Harness::with_config(FxConfig {
        trail_max_points: 3,
        particle_count: 0,
        ..FxConfig::default()
    });
    h.init(TargetRegistry::default());
    for i in 0..10 {
        h.run(|e, out| e.on_pointer_move(glam::Vec2::splat(i as f32), out));
    }
    assert_eq!(h.live_nodes(), 3);
}
