mod common;

use common::{Cmd, RecordingSurface};
use wave_core::constants::{AMPLITUDE, POINTER_SENTINEL, SPEED};
use wave_core::*;

fn viewport() -> Viewport {
    Viewport::new(1000.0, 500.0, 2.0).unwrap()
}

/// Run one second of frames at 10 ms spacing so the meter reports 100 fps.
fn run_fast_second(field: &mut WaveField, surface: &mut RecordingSurface, start_ms: f64) {
    for i in 1..=100 {
        field.step(start_ms + i as f64 * 10.0, surface);
    }
}

#[test]
fn configure_sets_backing_display_and_scale() {
    let mut s = RecordingSurface::default();
    configure_surface(&mut s, &viewport());
    assert_eq!(s.backing, (2000, 1000));
    assert_eq!(s.display, (1000.0, 500.0));
    assert_eq!(s.scale, 2.0);
}

#[test]
fn configure_is_idempotent() {
    let mut once = RecordingSurface::default();
    configure_surface(&mut once, &viewport());
    let mut twice = RecordingSurface::default();
    configure_surface(&mut twice, &viewport());
    configure_surface(&mut twice, &viewport());
    assert_eq!(once.backing, twice.backing);
    assert_eq!(once.display, twice.display);
    assert_eq!(once.scale, twice.scale);
    // each call resets rather than composes
    assert_eq!(twice.count(|c| matches!(c, Cmd::ResetAndScale(s) if *s == 2.0)), 2);
}

#[test]
fn initial_grid_carries_low_fps_shrink() {
    let field = WaveField::new(viewport(), FieldParams::default(), 0.0).unwrap();
    assert_eq!(field.fps(), 0);
    assert_eq!(field.density(), GridDensity { cols: 40, rows: 20 });
}

#[test]
fn resize_after_fast_frames_restores_full_density() {
    let mut s = RecordingSurface::default();
    let mut field = WaveField::new(viewport(), FieldParams::default(), 0.0).unwrap();
    run_fast_second(&mut field, &mut s, 0.0);
    assert_eq!(field.fps(), 100);
    // density is only re-evaluated on resize
    assert_eq!(field.density(), GridDensity { cols: 40, rows: 20 });

    field.resize(viewport(), &mut s);
    assert_eq!(field.density(), GridDensity { cols: 50, rows: 25 });
    assert_eq!(field.grid().base_points().len(), 51 * 26);
    assert_eq!(field.grid().rendered_points().len(), 51 * 26);
}

#[test]
fn resize_configures_the_surface() {
    let mut s = RecordingSurface::default();
    let mut field = WaveField::new(viewport(), FieldParams::default(), 0.0).unwrap();
    let smaller = Viewport::new(640.0, 480.0, 1.5).unwrap();
    field.resize(smaller, &mut s);
    assert_eq!(s.backing, (960, 720));
    assert_eq!(s.display, (640.0, 480.0));
    assert_eq!(s.scale, 1.5);
    assert_eq!(field.viewport(), &smaller);
}

#[test]
fn configuring_after_new_matches_resize() {
    let field = WaveField::new(viewport(), FieldParams::default(), 0.0).unwrap();
    let mut configured = RecordingSurface::default();
    configure_surface(&mut configured, field.viewport());

    let mut resized_field = WaveField::new(viewport(), FieldParams::default(), 0.0).unwrap();
    let mut resized = RecordingSurface::default();
    resized_field.resize(viewport(), &mut resized);

    assert_eq!(configured.commands, resized.commands);
    assert_eq!(field.density(), resized_field.density());
    assert_eq!(
        field.grid().base_points(),
        resized_field.grid().base_points()
    );
}

#[test]
fn step_advances_time_by_speed() {
    let mut s = RecordingSurface::default();
    let mut field = WaveField::new(viewport(), FieldParams::default(), 0.0).unwrap();
    for i in 1..=10 {
        field.step(i as f64, &mut s);
    }
    assert!((field.time() - 10.0 * SPEED).abs() < 1e-12);
    assert_eq!(s.count(|c| matches!(c, Cmd::Stroke)), 10);
}

#[test]
fn step_reports_completed_fps_samples() {
    let mut s = RecordingSurface::default();
    let mut field = WaveField::new(viewport(), FieldParams::default(), 0.0).unwrap();
    assert_eq!(field.step(500.0, &mut s), None);
    assert_eq!(field.step(1000.0, &mut s), Some(2));
}

#[test]
fn untouched_pointer_leaves_pure_noise() {
    let mut s = RecordingSurface::default();
    let mut field = WaveField::new(viewport(), FieldParams::default(), 0.0).unwrap();
    field.step(16.0, &mut s);
    assert_eq!(field.pointer().eased(), glam::DVec2::splat(POINTER_SENTINEL));

    let g = field.grid();
    for (base, out) in g.base_points().iter().zip(g.rendered_points()) {
        let expected = base.y + field.sampler().noise_at(*base, 0.0) * AMPLITUDE;
        assert!((out.y - expected).abs() < 1e-12);
    }
}

#[test]
fn pointer_is_eased_before_sampling() {
    let mut s = RecordingSurface::default();
    let mut field = WaveField::new(viewport(), FieldParams::default(), 0.0).unwrap();
    field.set_pointer(500.0, 250.0);
    field.step(16.0, &mut s);
    let eased = field.pointer().eased();
    let expected = POINTER_SENTINEL + (500.0 - POINTER_SENTINEL) / 8.0;
    assert!((eased.x - expected).abs() < 1e-9);
}

#[test]
fn sustained_low_fps_without_resize_keeps_grid() {
    let mut s = RecordingSurface::default();
    let mut field = WaveField::new(viewport(), FieldParams::default(), 0.0).unwrap();
    run_fast_second(&mut field, &mut s, 0.0);
    field.resize(viewport(), &mut s);
    // ten frames over the next second
    for i in 1..=10 {
        field.step(1000.0 + i as f64 * 100.0, &mut s);
    }
    assert_eq!(field.fps(), 10);
    assert_eq!(field.density(), GridDensity { cols: 50, rows: 25 });
}

#[test]
fn adaptive_mode_shrinks_on_low_fps_sample() {
    let params = FieldParams {
        adapt_on_low_fps: true,
        ..FieldParams::default()
    };
    let mut s = RecordingSurface::default();
    let mut field = WaveField::new(viewport(), params, 0.0).unwrap();
    run_fast_second(&mut field, &mut s, 0.0);
    field.resize(viewport(), &mut s);
    assert_eq!(field.density(), GridDensity { cols: 50, rows: 25 });
    for i in 1..=10 {
        field.step(1000.0 + i as f64 * 100.0, &mut s);
    }
    assert_eq!(field.density(), GridDensity { cols: 40, rows: 20 });
    assert_eq!(field.grid().rendered_points().len(), 41 * 21);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(
        Viewport::new(0.0, 500.0, 1.0),
        Err(ViewportError::Width(0.0))
    );
    assert!(matches!(
        Viewport::new(100.0, f64::NAN, 1.0),
        Err(ViewportError::Height(_))
    ));
    assert_eq!(
        Viewport::new(100.0, 100.0, -1.0),
        Err(ViewportError::PixelRatio(-1.0))
    );

    let bad = FieldParams {
        smoothness: 0.0,
        ..FieldParams::default()
    };
    assert!(matches!(
        WaveField::new(viewport(), bad, 0.0),
        Err(WaveError::Params(ParamsError::NotPositive {
            name: "smoothness",
            ..
        }))
    ));
    let no_cols = FieldParams {
        min_columns: 0,
        ..FieldParams::default()
    };
    assert_eq!(no_cols.validate(), Err(ParamsError::NoColumns));
    assert_eq!(FieldParams::default().validate(), Ok(()));
}
