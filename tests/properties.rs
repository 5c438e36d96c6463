//! Behavioural properties of the field pipeline.

use ember_engine::core::codec;
use ember_engine::systems::passes::diffuse_pass;
use ember_engine::{Cell, FireCore, Grid, SimulationParameters, SourceCell};

/// Deterministic xorshift32 stream mapped to `[-1, 1]`
fn samples(n: usize) -> impl Iterator<Item = f32> {
    let mut state = 0x9E37_79B9u32;
    (0..n).map(move |_| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state as f64 / u32::MAX as f64 * 2.0 - 1.0) as f32
    })
}

#[test]
fn codec_round_trip_error_is_one_quantum() {
    // floor on the 127 scale, decode on the 255 scale: positive values can
    // lose up to 1/127 plus half a 255-step
    let bound = 1.0 / 127.0 + 0.5 / 127.5 + 1e-6;
    for v in samples(1000) {
        let back = codec::decode_signed(codec::encode_signed(v));
        assert!((back - v).abs() <= bound, "v={v} back={back}");
    }
    for v in samples(1000).map(f32::abs) {
        let back = codec::decode_unit(codec::encode_unit(v));
        assert!((back - v).abs() <= 1.0 / 255.0 + 1e-6, "v={v} back={back}");
    }
}

#[test]
fn clear_sources_is_idempotent() {
    let mut sim = FireCore::new(32, 32).unwrap();
    sim.paint_source(0.3, 0.3, 0.4, Some(0.8), Some(-0.4), Some(0.6));
    for _ in 0..2 {
        sim.clear_sources();
        for cell in sim.source_field().cells() {
            assert_eq!(*cell, SourceCell::EMPTY);
            assert_eq!(cell.density(), 0.0);
            assert_eq!(cell.velocity(), (0.0, 0.0));
        }
    }
}

#[test]
fn paint_containment_on_64() {
    let mut sim = FireCore::new(64, 64).unwrap();
    sim.paint_source(0.2, 0.7, 0.05, None, Some(0.5), None);
    let before: Vec<SourceCell> = sim.source_field().cells().to_vec();

    sim.paint_source(0.5, 0.5, 0.1, Some(1.0), None, None);

    let field = sim.source_field();
    for y in 0..64u32 {
        for x in 0..64u32 {
            let dx = x as f32 / 64.0 - 0.5;
            let dy = y as f32 / 64.0 - 0.5;
            let prior = before[(y * 64 + x) as usize];
            let now = field.cell(x, y);
            if dx * dx + dy * dy < 0.1 * 0.1 {
                assert_eq!(now.density, 255);
                assert_eq!((now.velocity_x, now.velocity_y), (prior.velocity_x, prior.velocity_y));
            } else {
                assert_eq!(now, prior, "({x}, {y}) changed outside the brush");
            }
        }
    }
}

#[test]
fn diffusion_zeroes_the_ring_of_a_live_field() {
    let mut sim = FireCore::new(40, 30).unwrap();
    sim.paint_source(0.5, 0.5, 0.6, Some(1.0), Some(0.9), Some(-0.9));
    for _ in 0..4 {
        sim.tick(0.05);
    }
    let params = SimulationParameters::default();
    let coeffs = ember_engine::domain::TickCoefficients::from_params(&params, 0.05, 30);
    for k in [coeffs.diffuse, coeffs.diffuse.relaxation_only()] {
        let mut out = Grid::new(40, 30).unwrap();
        diffuse_pass(sim.current_field(), &k, &mut out);
        for y in 0..30 {
            for x in 0..40 {
                if x == 0 || y == 0 || x == 39 || y == 29 {
                    assert_eq!(out.cell(x, y), Cell::EMPTY, "({x}, {y})");
                }
            }
        }
    }
}

#[test]
fn still_parameters_keep_the_rest_state() {
    let mut sim = FireCore::with_params(32, 24, SimulationParameters::still()).unwrap();
    for _ in 0..20 {
        sim.tick(0.016);
    }
    assert!(sim.current_field().cells.iter().all(|c| *c == Cell::EMPTY));
    assert_eq!(sim.frame(), 20);
}

#[test]
fn fire_grows_from_the_source_but_not_to_the_top() {
    let params = SimulationParameters {
        speed: 500.0,
        burn_rate: 0.3,
        diffuse: 1.33,
        ..SimulationParameters::default()
    };
    let mut sim = FireCore::with_params(32, 32, params).unwrap();
    sim.paint_source(0.5, 0.9, 0.15, Some(1.0), None, None);
    for _ in 0..60 {
        sim.tick(0.016);
    }
    let field = sim.current_field();

    assert!(field.total_density() > 10.0);
    // inside the brush
    assert!(field.get_density(16, 28) > 0.5);
    // outside the brush (dy = 0.2125 > radius), reached by diffusion
    assert!(field.get_density(16, 22) > 0.0);
    assert!(field.get_density(9, 28) > 0.0);
    // far rows untouched
    for y in 0..10 {
        for x in 0..32 {
            assert_eq!(field.get_density(x, y), 0.0, "({x}, {y})");
        }
    }
}

#[test]
fn identical_inputs_give_identical_bytes() {
    let run = || {
        let mut sim = FireCore::new(48, 48).unwrap();
        for i in 0..30 {
            let u = 0.2 + 0.02 * i as f32;
            sim.paint_source(u, 0.8, 0.1, Some(1.0), Some(0.3), Some(-0.2));
            sim.tick(0.016 + 0.001 * (i % 3) as f32);
            if i == 15 {
                sim.clear_sources();
            }
        }
        sim.current_field().as_bytes().to_vec()
    };
    assert_eq!(run(), run());
}
