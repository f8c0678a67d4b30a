use std::fmt;

use fancy_regex::{Expander, Regex, RegexBuilder};

use super::template::to_expander_template;
use super::PatternError;

/// Backtracking steps a single search may take before it is abandoned.
///
/// Rules such as `.*(.+)\1+` cost roughly the cube of the line length; this
/// covers hooked lines of several hundred characters.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 100_000_000;

/// A single compiled pattern and its replacement template.
///
/// The template uses `$1` / `$&` / `$<name>` references to captured groups,
/// `${name}` is accepted as well. Both parts are validated in
/// [`TextReplacer::new`], so `apply` cannot fail on malformed input from the
/// configuration.
pub struct TextReplacer {
    pattern: Regex,
    replacement: String,
    template: String,
}

impl TextReplacer {
    /// Compiles `pattern` and checks `replacement` against its capture groups.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, PatternError> {
        Self::with_backtrack_limit(pattern, replacement, DEFAULT_BACKTRACK_LIMIT)
    }

    /// Like [`new`](Self::new) with an explicit backtracking budget per search.
    pub fn with_backtrack_limit(
        pattern: &str,
        replacement: impl Into<String>,
        backtrack_limit: usize,
    ) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .backtrack_limit(backtrack_limit)
            .build()
            .map_err(|source| PatternError::InvalidPattern {
                pattern: pattern.to_string(),
                source: Box::new(source),
            })?;

        Self::from_regex(regex, replacement)
    }

    /// Wraps an already compiled regex.
    pub fn from_regex(pattern: Regex, replacement: impl Into<String>) -> Result<Self, PatternError> {
        let replacement = replacement.into();
        let template = to_expander_template(&replacement, pattern.captures_len());

        Expander::default()
            .check(&template, &pattern)
            .map_err(|source| PatternError::InvalidReplacement {
                pattern: pattern.as_str().to_string(),
                replacement: replacement.clone(),
                source: Box::new(source),
            })?;

        Ok(Self {
            pattern,
            replacement,
            template,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replaces every non-overlapping match in `input` with the expanded template.
    ///
    /// Should the backtracking engine hit its limit on a pathological input, the
    /// input is returned untouched and the event is logged.
    pub fn apply(&self, input: &str) -> String {
        let expander = Expander::default();
        let mut output = String::with_capacity(input.len());
        let mut last_end = 0;

        for captures in self.pattern.captures_iter(input) {
            let captures = match captures {
                Ok(captures) => captures,
                Err(err) => {
                    core_warn!(pattern = %self.pattern.as_str(), error = %err, "pattern matching aborted, keeping input");
                    return input.to_string();
                }
            };

            let Some(whole) = captures.get(0) else {
                continue;
            };

            output.push_str(&input[last_end..whole.start()]);
            expander.append_expansion(&mut output, &self.template, &captures);
            last_end = whole.end();
        }

        output.push_str(&input[last_end..]);
        output
    }
}

impl fmt::Debug for TextReplacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextReplacer")
            .field("pattern", &self.pattern.as_str())
            .field("replacement", &self.replacement)
            .finish()
    }
}
