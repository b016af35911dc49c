use crate::domain::model::{Operation, StringReport, TextRecord};
use crate::domain::strings::{count_vowels, is_palindrome, reverse_string};

/// Applies a fixed selection of operations to each record.
#[derive(Debug, Clone)]
pub struct Analyzer {
    operations: Vec<Operation>,
}

impl Analyzer {
    /// An empty selection means every operation.
    pub fn new(operations: &[Operation]) -> Self {
        let mut selected = Vec::with_capacity(Operation::ALL.len());
        let requested = if operations.is_empty() {
            &Operation::ALL[..]
        } else {
            operations
        };
        for op in requested {
            if !selected.contains(op) {
                selected.push(*op);
            }
        }
        Self {
            operations: selected,
        }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn is_selected(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
    }

    pub fn analyze(&self, record: &TextRecord) -> StringReport {
        let mut report = StringReport {
            line: record.line,
            input: record.text.clone(),
            reversed: None,
            is_palindrome: None,
            vowel_count: None,
        };

        for op in &self.operations {
            match op {
                Operation::Reverse => report.reversed = Some(reverse_string(&record.text)),
                Operation::Palindrome => report.is_palindrome = Some(is_palindrome(&record.text)),
                Operation::Vowels => report.vowel_count = Some(count_vowels(&record.text)),
            }
        }

        tracing::trace!(line = record.line, "Analyzed input");
        report
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> TextRecord {
        TextRecord {
            line: 1,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_empty_selection_runs_everything() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.operations(), &Operation::ALL);

        let report = analyzer.analyze(&record("racecar"));
        assert_eq!(report.reversed.as_deref(), Some("racecar"));
        assert_eq!(report.is_palindrome, Some(true));
        assert_eq!(report.vowel_count, Some(3));
    }

    #[test]
    fn test_only_selected_fields_are_filled() {
        let analyzer = Analyzer::new(&[Operation::Vowels]);
        let report = analyzer.analyze(&record("Programming"));
        assert_eq!(report.input, "Programming");
        assert_eq!(report.vowel_count, Some(3));
        assert!(report.reversed.is_none());
        assert!(report.is_palindrome.is_none());
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let analyzer = Analyzer::new(&[Operation::Reverse, Operation::Palindrome, Operation::Reverse]);
        assert_eq!(analyzer.operations(), &[Operation::Reverse, Operation::Palindrome]);
        assert!(analyzer.is_selected(Operation::Reverse));
        assert!(!analyzer.is_selected(Operation::Vowels));
    }

    #[test]
    fn test_empty_input() {
        let report = Analyzer::default().analyze(&record(""));
        assert_eq!(report.reversed.as_deref(), Some(""));
        assert_eq!(report.is_palindrome, Some(true));
        assert_eq!(report.vowel_count, Some(0));
    }
}
