use crate::finding::{Finding, SchemaStatus};

/// Ordered findings of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    pub fn detail_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|finding| finding.is_detail())
    }

    pub fn missing_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| matches!(finding, Finding::Missing { .. }))
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| matches!(finding, Finding::ReadError { .. }))
            .count()
    }

    pub fn mismatch_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| {
                matches!(
                    finding,
                    Finding::Schema {
                        status: SchemaStatus::Mismatch,
                        ..
                    }
                )
            })
            .count()
    }

    pub fn detail_count(&self) -> usize {
        self.detail_findings().count()
    }

    /// True when every table loaded with the expected schema and no detail check fired.
    pub fn is_clean(&self) -> bool {
        self.findings.iter().all(|finding| {
            matches!(
                finding,
                Finding::Schema {
                    status: SchemaStatus::Ok,
                    ..
                }
            )
        })
    }
}
