//! Grid evaluation, surface, and slice tests.

use surfview::field::{
    axis, nearest_index, round_coord, SurfaceField, DEFAULT_EXPRESSION, DOMAIN_MAX, DOMAIN_MIN,
    GRID_SIZE,
};

#[test]
fn test_axis_shape() {
    let a = axis();
    assert_eq!(a.len(), GRID_SIZE);
    assert_eq!(a[0], DOMAIN_MIN);
    assert!((a[GRID_SIZE - 1] - DOMAIN_MAX).abs() < 1e-12);
    // Strictly increasing, evenly spaced.
    let step = (DOMAIN_MAX - DOMAIN_MIN) / (GRID_SIZE - 1) as f64;
    for pair in a.windows(2) {
        assert!((pair[1] - pair[0] - step).abs() < 1e-12);
    }
}

#[test]
fn test_axis_excludes_zero() {
    // 100 evenly spaced points over [-5, 5] straddle zero without
    // sampling it; poles of the default expression land between samples.
    assert!(axis().iter().all(|&v| v != 0.0));
}

#[test]
fn test_nearest_index() {
    assert_eq!(nearest_index(DOMAIN_MIN), 0);
    assert_eq!(nearest_index(DOMAIN_MAX), GRID_SIZE - 1);
    assert_eq!(nearest_index(3.0), 79);
    // Out-of-domain coordinates clamp.
    assert_eq!(nearest_index(-100.0), 0);
    assert_eq!(nearest_index(100.0), GRID_SIZE - 1);
}

#[test]
fn test_round_coord() {
    assert_eq!(round_coord(2.979_797_979_8), 2.9798);
    assert_eq!(round_coord(-0.000_049), -0.0);
    assert_eq!(round_coord(3.0), 3.0);
}

#[test]
fn test_default_surface() {
    let surface = SurfaceField::evaluate(DEFAULT_EXPRESSION).unwrap();

    // The grid never samples a pole exactly (no grid point has
    // sin(7x) = 0 or sin(4y) = 0 in floating point), so every grid
    // value is finite...
    assert_eq!(surface.valid_count, GRID_SIZE * GRID_SIZE);
    let (z_min, z_max) = surface.z_range.unwrap();
    assert!(z_min.is_finite() && z_max.is_finite());
    assert!(z_min < 0.0 && z_max > 0.0);

    // ...while evaluating on a pole directly is non-finite.
    assert!(!surface.expr.eval(0.0, 1.0).is_finite());
    assert!(!surface.expr.eval(1.0, 0.0).is_finite());
}

#[test]
fn test_plane_surface_values() {
    let surface = SurfaceField::evaluate("x+y").unwrap();

    // Exact corners of the grid.
    assert!((surface.value_at(0, 0) + 10.0).abs() < 1e-9);
    assert!((surface.value_at(GRID_SIZE - 1, GRID_SIZE - 1) - 10.0).abs() < 1e-9);
    // Rows index y, columns index x.
    assert!((surface.value_at(0, GRID_SIZE - 1) - 0.0).abs() < 1e-9);

    // Off-grid evaluation through the compiled expression.
    assert!((surface.expr.eval(0.0, 0.0)).abs() < 1e-12);
    assert!((surface.expr.eval(5.0, 5.0) - 10.0).abs() < 1e-12);

    let (z_min, z_max) = surface.z_range.unwrap();
    assert!((z_min + 10.0).abs() < 1e-9);
    assert!((z_max - 10.0).abs() < 1e-9);
    assert_eq!(surface.valid_count, GRID_SIZE * GRID_SIZE);
}

#[test]
fn test_surface_with_nan_regions() {
    // log(x*y) is NaN wherever x*y < 0: exactly half of this grid.
    let surface = SurfaceField::evaluate("log(x*y)").unwrap();
    assert!(surface.valid_count > 0);
    assert!(surface.valid_count < GRID_SIZE * GRID_SIZE);
    let (z_min, z_max) = surface.z_range.unwrap();
    assert!(z_min.is_finite() && z_max.is_finite());
}

#[test]
fn test_surface_with_no_finite_values() {
    let surface = SurfaceField::evaluate("sqrt(-1)").unwrap();
    assert_eq!(surface.valid_count, 0);
    assert!(surface.z_range.is_none());
    assert!(surface.slice_at_x(3.0).finite_points().is_empty());
}

#[test]
fn test_invalid_expression_is_an_error() {
    assert!(SurfaceField::evaluate("x+").is_err());
    assert!(SurfaceField::evaluate("").is_err());
}

#[test]
fn test_slice_at_x() {
    let surface = SurfaceField::evaluate("x+y").unwrap();
    let slice = surface.slice_at_x(3.0);

    assert_eq!(slice.fixed_var, "x");
    assert_eq!(slice.fixed, 3.0);
    assert_eq!(slice.axis_label, "y");
    assert_eq!(slice.points.len(), GRID_SIZE);

    // Curve runs over y with x fixed: f(3, -5) = -2, f(3, 5) = 8.
    let (y0, v0) = slice.points[0];
    assert_eq!(y0, DOMAIN_MIN);
    assert!((v0 + 2.0).abs() < 1e-9);
    let (y_last, v_last) = slice.points[GRID_SIZE - 1];
    assert!((y_last - DOMAIN_MAX).abs() < 1e-12);
    assert!((v_last - 8.0).abs() < 1e-9);
}

#[test]
fn test_slice_at_y() {
    let surface = SurfaceField::evaluate("x*y").unwrap();
    let slice = surface.slice_at_y(2.0);

    assert_eq!(slice.fixed_var, "y");
    assert_eq!(slice.axis_label, "x");
    let (x0, v0) = slice.points[0];
    assert_eq!(x0, DOMAIN_MIN);
    assert!((v0 + 10.0).abs() < 1e-9);
}

#[test]
fn test_slice_rounds_probe_coordinate() {
    let surface = SurfaceField::evaluate("x+y").unwrap();
    // 2.97979797... rounds to 2.9798 before evaluation.
    let slice = surface.slice_at_x(2.979_797_979_8);
    assert_eq!(slice.fixed, 2.9798);
    let (_, v0) = slice.points[0];
    assert!((v0 - (2.9798 - 5.0)).abs() < 1e-12);
}

#[test]
fn test_slice_filters_non_finite_points() {
    let surface = SurfaceField::evaluate("1/sin(x)").unwrap();
    // x = 0 is a pole; the slice along y at x = 0 is infinite everywhere.
    let slice = surface.slice_at_x(0.0);
    assert!(slice.finite_points().is_empty());
    // The raw points are all present regardless.
    assert_eq!(slice.points.len(), GRID_SIZE);
}

#[test]
fn test_slice_range_clamp_source() {
    // The slice charts clamp to the surface's finite min/max; make sure
    // that range ignores non-finite samples.
    let surface = SurfaceField::evaluate("log(abs(x*y))").unwrap();
    let (z_min, z_max) = surface.z_range.unwrap();
    assert!(z_min.is_finite() && z_max.is_finite());
    assert!(z_min < z_max);
}
