//! # Diagnostics
//!
//! User-visible warning and error channel of the importer. Every entry is
//! mirrored to the `log` facade at its severity.

use pipeline_types::{Diagnostic, Severity, Stage};

/// Append-only list of diagnostics collected during a conversion.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and forwards it to the logger.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        let subject = diagnostic.subject.as_deref().unwrap_or("-");
        match diagnostic.severity {
            Severity::Error => {
                log::error!("[{:?}] {}: {}", diagnostic.stage, subject, diagnostic.message)
            }
            Severity::Warning => {
                log::warn!("[{:?}] {}: {}", diagnostic.stage, subject, diagnostic.message)
            }
        }
        self.entries.push(diagnostic);
    }

    pub fn warn(&mut self, stage: Stage, subject: &str, message: impl Into<String>) {
        self.push(Diagnostic::warning(stage, message).with_subject(subject));
    }

    pub fn error(&mut self, stage: Stage, subject: &str, message: impl Into<String>) {
        self.push(Diagnostic::error(stage, message).with_subject(subject));
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_error)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
