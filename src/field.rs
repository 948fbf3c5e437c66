//! Grid evaluation of expressions into surface and slice data.
//!
//! All evaluation happens on one fixed grid: 100 samples per axis over
//! [-5, 5], inclusive endpoints. The evaluated surface keeps non-finite
//! values in place (the renderer marks them) but discards them when
//! computing the display range, so a single pole does not blow up the
//! color scale or the slice charts.

use crate::expr::{self, Expr};
use crate::Result;
use ndarray::Array2;

/// Samples per axis.
pub const GRID_SIZE: usize = 100;

/// Lower bound of both axes.
pub const DOMAIN_MIN: f64 = -5.0;

/// Upper bound of both axes.
pub const DOMAIN_MAX: f64 = 5.0;

/// Expression shown at startup and used whenever none has been submitted.
pub const DEFAULT_EXPRESSION: &str = "1/sin(7*x)+1/sin(4*y)";

/// Evenly spaced samples over the fixed domain, endpoints included.
pub fn axis() -> Vec<f64> {
    let step = (DOMAIN_MAX - DOMAIN_MIN) / (GRID_SIZE - 1) as f64;
    (0..GRID_SIZE).map(|i| DOMAIN_MIN + step * i as f64).collect()
}

/// Round a probe coordinate to 4 decimal places before slice evaluation.
pub fn round_coord(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Index of the grid sample nearest to a coordinate.
pub fn nearest_index(v: f64) -> usize {
    let step = (DOMAIN_MAX - DOMAIN_MIN) / (GRID_SIZE - 1) as f64;
    let idx = ((v - DOMAIN_MIN) / step).round();
    (idx.max(0.0) as usize).min(GRID_SIZE - 1)
}

/// An expression evaluated over the full grid.
#[derive(Debug, Clone)]
pub struct SurfaceField {
    /// Source text the surface was built from.
    pub source: String,
    /// Parsed expression, kept for slice evaluation.
    pub expr: Expr,
    /// X axis samples (column coordinates).
    pub x: Vec<f64>,
    /// Y axis samples (row coordinates).
    pub y: Vec<f64>,
    /// Evaluated values; `z[[row, col]] = f(x[col], y[row])`.
    pub z: Array2<f64>,
    /// Finite min/max of `z`, `None` when no sample is finite.
    pub z_range: Option<(f64, f64)>,
    /// Count of finite samples.
    pub valid_count: usize,
}

impl SurfaceField {
    /// Parse an expression and evaluate it over the grid.
    pub fn evaluate(source: &str) -> Result<Self> {
        let expr = expr::parse(source)?;
        Ok(Self::from_expr(source.to_string(), expr))
    }

    /// Build the startup surface from [`DEFAULT_EXPRESSION`].
    pub fn default_field() -> Result<Self> {
        Self::evaluate(DEFAULT_EXPRESSION)
    }

    fn from_expr(source: String, expr: Expr) -> Self {
        let x = axis();
        let y = axis();

        let mut z = Array2::from_elem((GRID_SIZE, GRID_SIZE), f64::NAN);
        for (row, &yv) in y.iter().enumerate() {
            for (col, &xv) in x.iter().enumerate() {
                z[[row, col]] = expr.eval(xv, yv);
            }
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut count = 0usize;
        for &v in z.iter() {
            if v.is_finite() {
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
                count += 1;
            }
        }
        let z_range = if count > 0 { Some((min, max)) } else { None };

        Self {
            source,
            expr,
            x,
            y,
            z,
            z_range,
            valid_count: count,
        }
    }

    /// Value at grid indices, row = y index, col = x index.
    pub fn value_at(&self, row: usize, col: usize) -> f64 {
        self.z.get([row, col]).copied().unwrap_or(f64::NAN)
    }

    /// Slice with x held fixed: the curve of `f(x0, y)` against y.
    /// `x0` is rounded to 4 decimal places first.
    pub fn slice_at_x(&self, x0: f64) -> SliceCurve {
        let fixed = round_coord(x0);
        let points = self
            .y
            .iter()
            .map(|&yv| (yv, self.expr.eval(fixed, yv)))
            .collect();
        SliceCurve {
            fixed_var: "x",
            fixed,
            axis_label: "y",
            points,
        }
    }

    /// Slice with y held fixed: the curve of `f(x, y0)` against x.
    /// `y0` is rounded to 4 decimal places first.
    pub fn slice_at_y(&self, y0: f64) -> SliceCurve {
        let fixed = round_coord(y0);
        let points = self
            .x
            .iter()
            .map(|&xv| (xv, self.expr.eval(xv, fixed)))
            .collect();
        SliceCurve {
            fixed_var: "y",
            fixed,
            axis_label: "x",
            points,
        }
    }
}

/// A 1D curve through the surface with one coordinate held fixed.
#[derive(Debug, Clone)]
pub struct SliceCurve {
    /// Which variable is held fixed ("x" or "y").
    pub fixed_var: &'static str,
    /// The fixed coordinate value, rounded to 4 decimals.
    pub fixed: f64,
    /// Label of the free axis ("y" or "x").
    pub axis_label: &'static str,
    /// (free coordinate, value) samples; may contain non-finite values.
    pub points: Vec<(f64, f64)>,
}

impl SliceCurve {
    /// Samples with finite values only, ready for charting.
    pub fn finite_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .copied()
            .filter(|(_, v)| v.is_finite())
            .collect()
    }
}
