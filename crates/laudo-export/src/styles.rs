use serde::{Deserialize, Serialize};

/// Typography and page layout shared by the print and Word exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// CSS font stack for the print page.
    pub font_stack: String,

    /// Font family written into `.docx` runs.
    pub body_font: String,

    /// Body text size in points.
    pub body_size: usize,

    /// Clinic name size in points.
    pub heading_size: usize,

    pub line_height: f64,

    /// A4 page margin in centimetres.
    pub margin_cm: f64,

    pub text_color: String,
}

impl DocumentStyles {
    /// Body size in the half-points `.docx` runs are measured in.
    pub fn body_half_points(&self) -> usize {
        self.body_size * 2
    }

    pub fn heading_half_points(&self) -> usize {
        self.heading_size * 2
    }
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            font_stack: "'Helvetica Neue', Helvetica, Arial, sans-serif".to_string(),
            body_font: "Arial".to_string(),
            body_size: 11,
            heading_size: 14,
            line_height: 1.4,
            margin_cm: 1.5,
            text_color: "#333".to_string(),
        }
    }
}
