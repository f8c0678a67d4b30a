use super::{PatternError, TextReplacer};

/// Result of running a [`TextCleaner`] over a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub text: String,
    pub changed: bool,
}

/// Ordered chain of replacers.
///
/// Later replacers see the output of earlier ones, so registration order is part
/// of the cleaner's meaning.
///
/// # Change detection
///
/// `changed` is decided by comparing lengths only, measured in UTF-16 code units
/// (the unit of the native wide clipboard text). A chain that rewrites content
/// while preserving length reports `changed == false` and the rewrite is not
/// written back. A content-equality check would be stricter; the length rule is
/// kept because existing configurations rely on it to stop feedback loops.
#[derive(Debug, Default)]
pub struct TextCleaner {
    replacers: Vec<TextReplacer>,
}

impl TextCleaner {
    pub fn new(replacers: Vec<TextReplacer>) -> Self {
        Self { replacers }
    }

    /// Compiles and appends a replacer, returning `self` for chaining.
    pub fn push(
        &mut self,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<&mut Self, PatternError> {
        self.replacers.push(TextReplacer::new(pattern, replacement)?);
        Ok(self)
    }

    pub fn replacers(&self) -> &[TextReplacer] {
        &self.replacers
    }

    pub fn len(&self) -> usize {
        self.replacers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacers.is_empty()
    }

    /// Runs every replacer in order.
    pub fn apply(&self, input: &str) -> Cleaned {
        let original_len = wide_len(input);

        let text = self
            .replacers
            .iter()
            .fold(input.to_owned(), |text, replacer| replacer.apply(&text));

        let changed = wide_len(&text) != original_len;
        core_debug!(
            replacers = self.replacers.len(),
            original_len,
            changed,
            "text cleaned"
        );

        Cleaned { text, changed }
    }

    /// Returns the cleaned text only when it is reported as changed.
    pub fn clean(&self, input: &str) -> Option<String> {
        let cleaned = self.apply(input);
        cleaned.changed.then_some(cleaned.text)
    }
}

impl From<Vec<TextReplacer>> for TextCleaner {
    fn from(replacers: Vec<TextReplacer>) -> Self {
        Self::new(replacers)
    }
}

/// Length of `text` in UTF-16 code units.
pub fn wide_len(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cleaner_is_identity() {
        let cleaner = TextCleaner::default();
        let cleaned = cleaner.apply("anything");

        assert_eq!(cleaned.text, "anything");
        assert!(!cleaned.changed);
        assert!(cleaner.clean("anything").is_none());
    }

    #[test]
    fn replacers_run_in_registration_order() {
        let mut first = TextCleaner::default();
        first.push("a", "b").unwrap().push("b", "cc").unwrap();

        let mut second = TextCleaner::default();
        second.push("b", "cc").unwrap().push("a", "b").unwrap();

        assert_eq!(first.apply("a").text, "cc");
        assert_eq!(second.apply("a").text, "b");
    }

    #[test]
    fn equal_length_rewrite_reports_unchanged() {
        let mut cleaner = TextCleaner::default();
        cleaner.push("cat", "dog").unwrap();

        let cleaned = cleaner.apply("a cat");
        assert_eq!(cleaned.text, "a dog");
        assert!(!cleaned.changed);
        assert_eq!(cleaner.clean("a cat"), None);
    }

    #[test]
    fn length_is_measured_in_wide_units() {
        // 'é' is one UTF-16 unit but two UTF-8 bytes.
        let mut cleaner = TextCleaner::default();
        cleaner.push("é", "ab").unwrap();

        assert!(cleaner.apply("é").changed);
        assert_eq!(wide_len("é"), 1);
        assert_eq!(wide_len("😀"), 2);
    }

    #[test]
    fn clean_returns_text_on_change() {
        let mut cleaner = TextCleaner::default();
        cleaner.push(r"\s+$", "").unwrap();

        assert_eq!(cleaner.clean("trailing   ").as_deref(), Some("trailing"));
        assert_eq!(cleaner.len(), 1);
        assert!(!cleaner.is_empty());
    }

    #[test]
    fn builds_from_replacer_list() {
        let cleaner = TextCleaner::from(vec![
            TextReplacer::new("x", "").unwrap(),
            TextReplacer::new("y", "").unwrap(),
        ]);

        assert_eq!(cleaner.replacers().len(), 2);
        assert_eq!(cleaner.apply("xaybx").text, "ab");
    }
}
