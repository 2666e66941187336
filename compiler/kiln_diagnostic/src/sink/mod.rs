//! Bounded, append-only diagnostic storage.

use crate::Diagnostic;

/// Records a sink holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 256;

/// Returned when a record is pushed into a full sink.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("diagnostic sink is full ({capacity} records)")]
pub struct SinkFull {
    pub capacity: usize,
}

/// Append-only diagnostic list with a fixed capacity.
///
/// Storage is reserved up front; `push` never reallocates.
#[derive(Clone, Debug)]
pub struct DiagnosticSink {
    items: Vec<Diagnostic>,
    capacity: usize,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DiagnosticSink {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns [`SinkFull`] when the sink already holds `capacity` records;
    /// the record is not stored and earlier records are untouched.
    pub fn push(&mut self, diagnostic: Diagnostic) -> Result<(), SinkFull> {
        if self.items.len() >= self.capacity {
            return Err(SinkFull {
                capacity: self.capacity,
            });
        }
        self.items.push(diagnostic);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Forget all records, e.g. between compilation units.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a DiagnosticSink {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
