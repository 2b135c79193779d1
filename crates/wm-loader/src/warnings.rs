use wm_reader::{Diagnostic, Span};

/// Collects recoverable problems found during a load.
///
/// Each warning is logged through `tracing` and kept as a [`Diagnostic`] so
/// callers can render it against the map source.
#[derive(Debug, Default)]
pub struct Warnings {
    diagnostics: Vec<Diagnostic>,
}

impl Warnings {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning at `span` in the map document.
    pub fn warn(&mut self, span: Span, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.diagnostics.push(Diagnostic::warning(span, message));
    }

    /// Warnings recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of warnings recorded so far.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take the recorded warnings.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wm_reader::Severity;

    #[test]
    fn warnings_are_recorded_in_order() {
        let mut w = Warnings::new();
        w.warn(0..3, "first");
        w.warn(4..9, "second");
        assert_eq!(w.len(), 2);
        let diags = w.into_diagnostics();
        assert_eq!(diags[0].message, "first");
        assert_eq!(diags[1].span, 4..9);
        assert!(diags.iter().all(|d| d.severity == Severity::Warning));
    }
}
