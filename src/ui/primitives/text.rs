//! Text painted with one of the theme's semantic colours

use crossterm::style::{Color, Stylize};

use crate::ui::theme::colors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Color,
    bold: bool,
}

impl ColoredText {
    fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    /// Completed pulls
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, colors::SUCCESS)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, colors::ERROR)
    }

    /// Remote sizes, which decide how long a fetch takes
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, colors::WARNING)
    }

    /// Hosts and pipeline names
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, colors::INFO)
    }

    /// Bookkeeping steps and fix hints
    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, colors::DIM)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Plain text when colour is off
    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }
        let styled = self.text.as_str().with(self.color);
        if self.bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}
