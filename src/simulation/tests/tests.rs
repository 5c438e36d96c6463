use super::*;
use crate::core::grid::Cell;
use crate::domain::coefficients::TickCoefficients;
use crate::error::FireError;
use crate::systems::passes::{diffuse_pass, Pass, PassKind};

/// Fails before the n-th pass of every tick; counts acquire/release.
struct FlakyHost {
    fail_at: usize,
    seen: usize,
    acquired: u32,
    released: u32,
}

impl FlakyHost {
    fn failing_at(fail_at: usize) -> Self {
        Self { fail_at, seen: 0, acquired: 0, released: 0 }
    }
}

impl RenderHost for FlakyHost {
    type Saved = ();

    fn acquire(&mut self) -> Result<(), FireError> {
        self.acquired += 1;
        self.seen = 0;
        Ok(())
    }

    fn release(&mut self, _saved: ()) {
        self.released += 1;
    }

    fn before_pass(&mut self, _kind: PassKind) -> Result<(), FireError> {
        self.seen += 1;
        if self.seen == self.fail_at {
            return Err(FireError::Host("context lost".into()));
        }
        Ok(())
    }
}

fn default_coeffs() -> TickCoefficients {
    TickCoefficients::from_params(&SimulationParameters::default(), 0.016, 16)
}

fn burning(width: u32, height: u32) -> FireCore {
    let mut sim = FireCore::new(width, height).unwrap();
    sim.paint_source(0.5, 0.8, 0.2, Some(1.0), None, None);
    sim
}

#[test]
fn tick_runs_the_eight_pass_pipeline() {
    let mut sim = burning(16, 16);
    sim.enable_perf_metrics(true);
    sim.tick(0.016);

    let stats = sim.get_perf_stats();
    assert_eq!(stats.diffuse_sweeps(), 6);
    assert_eq!(stats.ticks(), 1);
    assert!((stats.dt() - 0.8).abs() < 1e-5);
    assert_eq!(sim.frame(), 1);

    let passes: Vec<PassKind> = step::tick_passes(&sim.source, &default_coeffs())
        .map(|p| p.kind())
        .collect();
    assert_eq!(passes.len(), 8);
    assert_eq!(passes[0], PassKind::Source);
    assert!(passes[1..7].iter().all(|k| *k == PassKind::Diffuse));
    assert_eq!(passes[7], PassKind::Drift);
}

#[test]
fn only_the_sixth_sweep_applies_forcing() {
    let coeffs = default_coeffs();
    let field = SourceField::new(16, 16).unwrap();
    let diffuse: Vec<_> = step::tick_passes(&field, &coeffs)
        .filter_map(|p| match p {
            Pass::Diffuse(c) => Some(c),
            _ => None,
        })
        .collect();
    assert!(diffuse[..5].iter().all(|c| *c == coeffs.diffuse.relaxation_only()));
    assert_eq!(diffuse[5], coeffs.diffuse);
}

#[test]
fn failed_pass_rolls_back_the_tick() {
    let mut sim = burning(16, 16);
    sim.tick(0.016);
    let before = sim.current_field().clone();
    let frame = sim.frame();

    for fail_at in [1, 4, 8] {
        let mut host = FlakyHost::failing_at(fail_at);
        let result = sim.tick_with_host(&mut host, 0.016);
        assert!(matches!(result, Err(FireError::Host(_))));
        assert_eq!(sim.current_field(), &before, "fail_at={fail_at}");
        assert_eq!(sim.frame(), frame);
        assert_eq!(host.acquired, 1);
        assert_eq!(host.released, 1);
    }

    // a healthy host still advances normally afterwards
    let mut host = FlakyHost::failing_at(usize::MAX);
    sim.tick_with_host(&mut host, 0.016).unwrap();
    assert_eq!(sim.frame(), frame + 1);
    assert_eq!(host.released, 1);
}

#[test]
fn rolled_back_tick_keeps_the_last_perf_snapshot() {
    let mut sim = burning(16, 16);
    sim.enable_perf_metrics(true);
    sim.tick(0.016);
    let committed = sim.get_perf_stats();
    assert_eq!(committed.ticks(), 1);
    assert_eq!(committed.diffuse_sweeps(), 6);

    // fails before the drift pass, after source and all six sweeps ran
    let mut host = FlakyHost::failing_at(8);
    assert!(sim.tick_with_host(&mut host, 0.05).is_err());

    let stats = sim.get_perf_stats();
    assert_eq!(stats.ticks(), 1);
    assert_eq!(stats.diffuse_sweeps(), 6);
    assert_eq!(stats.dt(), committed.dt());
    assert_eq!(stats.step_ms(), committed.step_ms());
    assert_eq!(stats.source_ms(), committed.source_ms());
    assert_eq!(stats.diffuse_ms(), committed.diffuse_ms());
}

#[test]
fn headless_tick_always_commits() {
    let mut sim = burning(12, 12);
    for elapsed in [0.016, 0.0, -1.0, f32::NAN, 10.0] {
        let frame = sim.frame();
        sim.tick(elapsed);
        assert_eq!(sim.frame(), frame + 1, "elapsed={elapsed}");
    }
}

#[test]
fn host_tick_matches_headless_tick() {
    let mut a = burning(24, 24);
    let mut b = burning(24, 24);
    let mut host = FlakyHost::failing_at(usize::MAX);
    for _ in 0..5 {
        a.tick(0.02);
        b.tick_with_host(&mut host, 0.02).unwrap();
    }
    assert_eq!(a.current_field(), b.current_field());
}

#[test]
fn ring_is_zero_after_ticks() {
    let mut sim = FireCore::new(20, 12).unwrap();
    sim.paint_source(0.5, 0.5, 1.0, Some(1.0), Some(0.5), Some(-0.5));
    for _ in 0..3 {
        sim.tick(0.016);
    }
    // drift can pull edge values back in, so check right after the forcing sweep
    let coeffs = TickCoefficients::from_params(sim.params(), 0.016, 12);
    let mut out = Grid::new(20, 12).unwrap();
    diffuse_pass(sim.current_field(), &coeffs.diffuse, &mut out);
    for y in 0..12 {
        for x in 0..20 {
            if out.is_boundary(x, y) {
                assert_eq!(out.cell(x, y), Cell::EMPTY);
            }
        }
    }
}

#[test]
fn colorize_does_not_mutate_and_render_fills_buffer() {
    let mut sim = burning(16, 16);
    for _ in 0..10 {
        sim.tick(0.016);
    }
    let before = sim.current_field().clone();
    let owned = sim.colorize(RenderMode::Normal).unwrap();
    assert_eq!(sim.current_field(), &before);

    let pixels = sim.render(RenderMode::Normal).to_vec();
    assert_eq!(pixels, owned.pixels);
    assert!(pixels.iter().any(|p| p >> 24 != 0));
    assert_eq!(sim.colors_len_bytes(), 16 * 16 * 4);
}

#[test]
fn set_source_data_validates_length() {
    let mut sim = FireCore::new(4, 4).unwrap();
    assert!(matches!(
        sim.set_source_data(&[0; 10]),
        Err(FireError::SourceFieldShape { expected: 64, actual: 10 })
    ));
    let mut bytes = vec![0u8; 64];
    bytes[0] = 255;
    sim.set_source_data(&bytes).unwrap();
    assert_eq!(sim.source_field().cell(0, 0).density, 255);

    let other = SourceField::new(8, 8).unwrap();
    assert!(sim.set_source_field(&other).is_err());
}

#[test]
fn reset_zeroes_field_but_keeps_sources() {
    let mut sim = burning(16, 16);
    sim.tick(0.016);
    sim.reset();
    assert_eq!(sim.frame(), 0);
    assert!(sim.current_field().cells.iter().all(|c| *c == Cell::EMPTY));
    assert!(sim.source_field().cells().iter().any(|c| c.density > 0));
}

#[test]
fn options_select_resolution_and_mode() {
    let sim = FireCore::from_options_json(
        r#"{"textureWidth": 48, "textureHeight": 32, "debug": true, "params": {"speed": 250}}"#,
    )
    .unwrap();
    assert_eq!((sim.width(), sim.height()), (48, 32));
    assert_eq!(sim.render_mode(), RenderMode::Debug);
    assert_eq!(sim.params().speed, 250.0);
    assert!(!sim.supports_mipmaps());
    assert!(FireCore::new(64, 32).unwrap().supports_mipmaps());

    assert!(matches!(FireCore::from_options_json("{"), Err(FireError::Config(_))));
    assert!(matches!(
        FireCore::from_options_json(r#"{"textureWidth": 0}"#),
        Err(FireError::InvalidDimensions { .. })
    ));
}
