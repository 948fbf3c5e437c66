//! Info panel state and gallery content.

/// One group of example expressions shown in the info panel.
#[derive(Debug, Clone, Copy)]
pub struct GalleryCard {
    /// Introductory text for the group.
    pub blurb: &'static str,
    /// Expressions the user can try verbatim.
    pub expressions: &'static [&'static str],
}

/// The gallery shown in the info panel.
pub const GALLERY: &[GalleryCard] = &[
    GalleryCard {
        blurb: "To get started and to get a feel for the space try the following:",
        expressions: &["x+y", "x*y", "x*y**2", "x**2*y**2"],
    },
    GalleryCard {
        blurb: "You can also use sin() and cos(), but also tan() and log(). \
                My favorites are those:",
        expressions: &["sin(0.2*x*y)", "sin(0.5*x*y)+cos(x*3)+0.3*y*x", "log(x*y)"],
    },
    GalleryCard {
        blurb: "Finally, you can play around with mathematical concepts. E.g., \
                observe what happens when you divide by x and y or when you only \
                take the absolute:",
        expressions: &[
            "1/x+1/y",
            "1/sin(x)+1/tan(y)+y**3",
            "log(abs(x*y))",
            "log(abs(10+x*y))",
        ],
    },
];

/// Intro paragraph at the top of the info panel.
pub const INTRO: &str = "Surfview makes the invisible visible. It makes it easy to \
                         visualize 2d functions that are hard to imagine. Be inspired \
                         by the gallery below and have fun exploring the world of math.";

/// State of the info panel overlay.
#[derive(Debug)]
pub struct HelpState {
    visible: bool,
    /// Vertical scroll offset inside the panel.
    pub scroll: u16,
}

impl HelpState {
    /// Create a new state; the panel starts closed.
    pub fn new() -> Self {
        Self {
            visible: false,
            scroll: 0,
        }
    }

    /// Check if the panel is open.
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Flip the open/closed state.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if !self.visible {
            self.scroll = 0;
        }
    }

    /// Close the panel.
    pub fn close(&mut self) {
        self.visible = false;
        self.scroll = 0;
    }

    /// Scroll the panel content down.
    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_add(amount);
    }

    /// Scroll the panel content up.
    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}
