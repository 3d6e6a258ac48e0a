//! laudo-builder
//!
//! Turns a [`FindingsRecord`] into the structured findings text that the
//! drafting service expands into the final report. Pure and synchronous:
//! the same record always produces byte-identical text.
//!
//! Each anatomical region implements [`Region`]. [`regions`] lists them in
//! the fixed clinical order the drafting prompt relies on.

pub mod grammar;
pub mod regions;
pub mod validation;

use laudo_core::FindingsRecord;

pub use validation::{InputWarning, validate};

/// Prefix of the extra line emitted for findings that suggest a conclusion.
/// The drafting prompt looks for this token verbatim.
pub const SUGGESTED_CONCLUSION_MARKER: &str = "CONCLUSÃO SUGESTIVA:";

/// One section of the findings text.
pub trait Region {
    /// Section label, as it prefixes the region's first line.
    fn heading(&self) -> &'static str;

    /// The region's lines. An empty vector omits the region entirely.
    fn compose(&self) -> Vec<String>;
}

impl<R: Region + ?Sized> Region for &R {
    fn heading(&self) -> &'static str {
        (**self).heading()
    }

    fn compose(&self) -> Vec<String> {
        (**self).compose()
    }
}

/// All regions of an abdominal exam, in report order.
pub fn regions(record: &FindingsRecord) -> Vec<Box<dyn Region + '_>> {
    vec![
        Box::new(&record.limitations),
        Box::new(&record.liver),
        Box::new(&record.gallbladder),
        Box::new(&record.bile_ducts),
        Box::new(&record.pancreas),
        Box::new(&record.spleen),
        Box::new(regions::vessels::Vessels::new(&record.aorta, &record.vena_cava)),
        Box::new(&record.bowel_loops),
        Box::new(&record.kidneys),
        Box::new(&record.bladder),
        Box::new(&record.bladder_volume),
        Box::new(&record.free_fluid),
        Box::new(&record.final_observations),
    ]
}

pub fn build_report_lines(record: &FindingsRecord) -> Vec<String> {
    let mut lines = Vec::new();
    for region in regions(record) {
        let composed = region.compose();
        tracing::trace!(region = region.heading(), lines = composed.len(), "composed region");
        lines.extend(composed);
    }
    tracing::debug!(lines = lines.len(), "built report text");
    lines
}

/// Findings text, one clause block per line.
pub fn build_report_text(record: &FindingsRecord) -> String {
    build_report_lines(record).join("\n")
}
