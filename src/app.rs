//! Application state and logic.

use crate::clipboard;
use crate::field::{self, SliceCurve, SurfaceField, GRID_SIZE};
use crate::help::HelpState;
use crate::input::InputState;
use crate::util::ColorPalette;
use crate::Result;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark theme.
    Dark,
    /// Light theme.
    Light,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

/// Probe cursor position over the surface grid.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    /// Row index (y axis).
    pub row: usize,
    /// Column index (x axis).
    pub col: usize,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Expression input line.
    pub input: InputState,
    /// Surface currently displayed.
    pub surface: SurfaceField,
    /// Probe cursor over the surface.
    pub probe: Probe,
    /// Slice with x fixed at the probe position.
    pub x_slice: SliceCurve,
    /// Slice with y fixed at the probe position.
    pub y_slice: SliceCurve,
    /// Info panel state.
    pub help: HelpState,
    /// Current theme.
    pub theme: Theme,
    /// Surface color palette.
    pub palette: ColorPalette,
    /// Status message.
    pub status: String,
}

impl App {
    /// Create a new application instance. The surface starts on the default
    /// expression; `initial` (from the command line) is submitted on top of
    /// it and follows the usual bad-expression policy.
    pub fn new(initial: Option<&str>) -> Result<Self> {
        let surface = SurfaceField::default_field()?;
        let probe = Probe {
            row: field::nearest_index(3.0),
            col: field::nearest_index(3.0),
        };

        let mut app = Self {
            input: InputState::new(),
            surface,
            probe,
            x_slice: SliceCurve {
                fixed_var: "x",
                fixed: 0.0,
                axis_label: "y",
                points: Vec::new(),
            },
            y_slice: SliceCurve {
                fixed_var: "y",
                fixed: 0.0,
                axis_label: "x",
                points: Vec::new(),
            },
            help: HelpState::new(),
            theme: Theme::Dark,
            palette: ColorPalette::default(),
            status: "Ready".to_string(),
        };
        app.recompute_slices();

        if let Some(source) = initial {
            app.apply_expression(source);
        }

        Ok(app)
    }

    /// X coordinate under the probe.
    pub fn probe_x(&self) -> f64 {
        self.surface.x[self.probe.col]
    }

    /// Y coordinate under the probe.
    pub fn probe_y(&self) -> f64 {
        self.surface.y[self.probe.row]
    }

    /// Surface value under the probe.
    pub fn probe_value(&self) -> f64 {
        self.surface.value_at(self.probe.row, self.probe.col)
    }

    /// Begin editing the expression, seeded with the current source.
    pub fn start_input(&mut self) {
        let seed = self.surface.source.clone();
        self.input.start(&seed);
    }

    /// Submit whatever is in the input line.
    pub fn submit_input(&mut self) {
        let text = self.input.submit();
        self.apply_expression(&text);
    }

    /// Plot an expression. An empty or unparseable string leaves the
    /// currently displayed surface unchanged; parse failures additionally
    /// write a diagnostic to the log, with no user-facing message.
    pub fn apply_expression(&mut self, source: &str) {
        let trimmed = source.trim();

        if trimmed.is_empty() {
            return;
        }

        match SurfaceField::evaluate(trimmed) {
            Ok(surface) => {
                self.surface = surface;
                self.recompute_slices();
                self.status = format!("Plotted {}", trimmed);
                tracing::info!("plotted expression {:?}", trimmed);
            }
            Err(e) => {
                tracing::warn!("rejected expression {:?}: {}", trimmed, e);
            }
        }
    }

    /// Move the probe by a row/column delta, clamped to the grid.
    pub fn move_probe(&mut self, drow: isize, dcol: isize) {
        let row = self.probe.row as isize + drow;
        let col = self.probe.col as isize + dcol;
        self.probe.row = row.clamp(0, GRID_SIZE as isize - 1) as usize;
        self.probe.col = col.clamp(0, GRID_SIZE as isize - 1) as usize;
        self.recompute_slices();
    }

    /// Recompute both slice charts at the probe position.
    pub fn recompute_slices(&mut self) {
        self.x_slice = self.surface.slice_at_x(self.probe_x());
        self.y_slice = self.surface.slice_at_y(self.probe_y());
    }

    /// Flip the info panel open/closed.
    pub fn toggle_help(&mut self) {
        self.help.toggle();
        self.status = if self.help.is_open() {
            "Info panel opened".to_string()
        } else {
            "Info panel closed".to_string()
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Cycle to the next color palette.
    pub fn cycle_palette(&mut self) {
        self.palette = self.palette.next();
        self.status = format!("Palette: {}", self.palette.name());
    }

    /// Copy the current expression to the clipboard.
    pub fn copy_expression(&mut self) {
        match clipboard::copy_to_clipboard(&self.surface.source) {
            Ok(_) => self.status = "Expression copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Copy the probe readout to the clipboard.
    pub fn copy_probe_readout(&mut self) {
        let text = format!(
            "f({}, {}) = {}",
            field::round_coord(self.probe_x()),
            field::round_coord(self.probe_y()),
            self.probe_value()
        );
        match clipboard::copy_to_clipboard(&text) {
            Ok(_) => self.status = "Readout copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Close any open overlay and abandon input.
    pub fn close_overlay(&mut self) {
        self.help.close();
        self.input.cancel();
    }
}
