//! Application state tests.

use surfview::app::{App, Theme};
use surfview::field::{DEFAULT_EXPRESSION, GRID_SIZE};
use surfview::util::ColorPalette;

#[test]
fn test_starts_on_default_expression() {
    let app = App::new(None).unwrap();
    assert_eq!(app.surface.source, DEFAULT_EXPRESSION);
    assert!(!app.help.is_open());
    assert!(!app.input.is_active());
    assert_eq!(app.theme, Theme::Dark);
    assert_eq!(app.palette, ColorPalette::Viridis);
}

#[test]
fn test_initial_probe_near_three_three() {
    // The startup slices are prescribed at x = 3 and y = 3.
    let app = App::new(None).unwrap();
    assert!((app.x_slice.fixed - 3.0).abs() < 0.06);
    assert!((app.y_slice.fixed - 3.0).abs() < 0.06);
}

#[test]
fn test_startup_slices_use_default_expression() {
    // Probing with nothing submitted falls back to the default
    // expression, and the slice range clamp comes from its surface.
    let app = App::new(None).unwrap();
    assert_eq!(app.x_slice.points.len(), GRID_SIZE);
    assert_eq!(app.y_slice.points.len(), GRID_SIZE);

    let x0 = app.x_slice.fixed;
    let y0 = app.y_slice.points[0].0;
    let expected = app.surface.expr.eval(x0, y0);
    let actual = app.x_slice.points[0].1;
    assert!(expected == actual || (expected.is_nan() && actual.is_nan()));

    let (z_min, z_max) = app.surface.z_range.unwrap();
    assert!(z_min.is_finite() && z_max.is_finite());
}

#[test]
fn test_submit_replaces_surface() {
    let mut app = App::new(None).unwrap();
    app.apply_expression("x+y");
    assert_eq!(app.surface.source, "x+y");
    // Slices follow the new surface.
    let x0 = app.x_slice.fixed;
    let (y0, v0) = app.x_slice.points[0];
    assert!((v0 - (x0 + y0)).abs() < 1e-9);
}

#[test]
fn test_bad_expression_retains_previous_surface() {
    let mut app = App::new(None).unwrap();
    app.apply_expression("x+y");
    let status_before = app.status.clone();

    app.apply_expression("x+");
    assert_eq!(app.surface.source, "x+y");
    // No user-facing message either; the status line is untouched.
    assert_eq!(app.status, status_before);

    app.apply_expression("sin(");
    assert_eq!(app.surface.source, "x+y");
}

#[test]
fn test_empty_submit_leaves_surface_unchanged() {
    let mut app = App::new(None).unwrap();
    app.apply_expression("x*y");
    assert_eq!(app.surface.source, "x*y");

    app.apply_expression("");
    assert_eq!(app.surface.source, "x*y");

    app.apply_expression("   ");
    assert_eq!(app.surface.source, "x*y");
}

#[test]
fn test_input_flow_submit() {
    let mut app = App::new(None).unwrap();
    app.input.start("");
    for c in "x*y".chars() {
        app.input.input(c);
    }
    assert!(app.input.is_active());
    app.submit_input();
    assert!(!app.input.is_active());
    assert_eq!(app.surface.source, "x*y");
}

#[test]
fn test_input_seeded_with_current_source() {
    let mut app = App::new(None).unwrap();
    app.start_input();
    assert_eq!(app.input.buffer(), DEFAULT_EXPRESSION);
    app.input.cancel();
    assert_eq!(app.input.buffer(), "");
    assert_eq!(app.surface.source, DEFAULT_EXPRESSION);
}

#[test]
fn test_input_backspace() {
    let mut app = App::new(None).unwrap();
    app.input.start("x+yy");
    app.input.backspace();
    app.submit_input();
    assert_eq!(app.surface.source, "x+y");
}

#[test]
fn test_info_panel_toggles_starting_closed() {
    let mut app = App::new(None).unwrap();
    assert!(!app.help.is_open());
    app.toggle_help();
    assert!(app.help.is_open());
    app.toggle_help();
    assert!(!app.help.is_open());
    app.toggle_help();
    assert!(app.help.is_open());
}

#[test]
fn test_probe_movement_updates_slices() {
    let mut app = App::new(None).unwrap();
    app.apply_expression("x+y");

    app.move_probe(0, 1);
    let x_after = app.probe_x();
    assert_eq!(app.x_slice.fixed, surfview::field::round_coord(x_after));

    app.move_probe(1, 0);
    let y_after = app.probe_y();
    assert_eq!(app.y_slice.fixed, surfview::field::round_coord(y_after));
}

#[test]
fn test_probe_clamps_to_grid() {
    let mut app = App::new(None).unwrap();
    app.move_probe(1000, 1000);
    assert_eq!(app.probe.row, GRID_SIZE - 1);
    assert_eq!(app.probe.col, GRID_SIZE - 1);
    assert_eq!(app.probe_x(), 5.0);

    app.move_probe(-1000, -1000);
    assert_eq!(app.probe.row, 0);
    assert_eq!(app.probe.col, 0);
    assert_eq!(app.probe_x(), -5.0);
}

#[test]
fn test_theme_cycles() {
    let mut app = App::new(None).unwrap();
    assert_eq!(app.theme, Theme::Dark);
    app.cycle_theme();
    assert_eq!(app.theme, Theme::Light);
    assert_eq!(app.status, "Theme: Light");
    app.cycle_theme();
    assert_eq!(app.theme, Theme::Dark);
}

#[test]
fn test_palette_cycles_back_around() {
    let mut app = App::new(None).unwrap();
    let start = app.palette;
    app.cycle_palette();
    assert_ne!(app.palette, start);
    app.cycle_palette();
    app.cycle_palette();
    app.cycle_palette();
    assert_eq!(app.palette, start);
}

#[test]
fn test_initial_cli_expression() {
    let app = App::new(Some("x*y**2")).unwrap();
    assert_eq!(app.surface.source, "x*y**2");
}

#[test]
fn test_invalid_cli_expression_keeps_default() {
    let app = App::new(Some("x**")).unwrap();
    assert_eq!(app.surface.source, DEFAULT_EXPRESSION);
}

#[test]
fn test_close_overlay_closes_help_and_input() {
    let mut app = App::new(None).unwrap();
    app.toggle_help();
    app.start_input();
    app.close_overlay();
    assert!(!app.help.is_open());
    assert!(!app.input.is_active());
}
