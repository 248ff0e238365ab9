//! Comprehensive diagnosis report.

use std::fmt;

/// A diagnosis assembled from catalog retrievals.
///
/// `possible_causes` is the ordered list of diagnostic hits (best first);
/// `likely_cause` is the first of them, or "Unknown issue" when the
/// retrieval came back empty. Consumers that need the likely cause read
/// the field — the rendered report is presentation only.
#[derive(Debug, Clone)]
pub struct DiagnosisReport {
    pub symptoms: String,
    pub possible_causes: Vec<String>,
    pub likely_cause: String,
    pub estimated_costs: Vec<String>,
    pub required_parts: Vec<String>,
}

impl DiagnosisReport {
    /// Assemble a report from retrieval results.
    pub fn new(
        symptoms: impl Into<String>,
        possible_causes: Vec<String>,
        estimated_costs: Vec<String>,
        required_parts: Vec<String>,
    ) -> Self {
        let likely_cause = possible_causes
            .first()
            .cloned()
            .unwrap_or_else(|| "Unknown issue".to_string());

        Self {
            symptoms: symptoms.into(),
            possible_causes,
            likely_cause,
            estimated_costs,
            required_parts,
        }
    }
}

impl fmt::Display for DiagnosisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comprehensive Diagnosis Report:")?;
        writeln!(f)?;
        writeln!(f, "Symptoms: {}", self.symptoms)?;
        writeln!(f)?;
        writeln!(f, "Possible Causes:")?;
        writeln!(f, "{:?}", self.possible_causes)?;
        writeln!(f)?;
        writeln!(f, "Most Likely Cause: {}", self.likely_cause)?;
        writeln!(f)?;
        writeln!(f, "Estimated Cost:")?;
        writeln!(f, "{:?}", self.estimated_costs)?;
        writeln!(f)?;
        writeln!(f, "Required Parts:")?;
        writeln!(f, "{:?}", self.required_parts)?;
        writeln!(f)?;
        write!(
            f,
            "Please note that this is an initial diagnosis. For accurate results, please consult with our professional mechanic."
        )
    }
}
