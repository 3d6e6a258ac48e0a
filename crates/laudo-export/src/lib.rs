//! laudo-export
//!
//! Print-ready HTML, Word-compatible `.doc` and `.docx` output for a
//! finished report and the clinic letterhead.

pub mod docx;
pub mod error;
pub mod html;
pub mod logo;
pub mod render;
pub mod styles;
pub mod word;
