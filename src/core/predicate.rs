use crate::core::matcher::find_matches;
use crate::core::options::PredicateOptions;

/// Suggestion cycler over the last computed match set.
///
/// `find` recomputes the set and rewinds the cursor; `prev`/`next` cycle the
/// existing set with wraparound and never recompute. On an empty set every
/// operation returns `""` and leaves the cursor alone.
#[derive(Debug, Clone, Default)]
pub struct Predicate {
    options: PredicateOptions,
    matches: Vec<String>,
    index: usize,
}

impl Predicate {
    pub fn new(options: PredicateOptions) -> Self {
        Self {
            options,
            matches: Vec::new(),
            index: 0,
        }
    }

    pub fn options(&self) -> PredicateOptions {
        self.options
    }

    /// Recompute the match set for `query` and return the first suggestion.
    pub fn find(&mut self, candidates: &[String], query: &str) -> &str {
        self.matches = find_matches(
            candidates,
            query,
            self.options.policy,
            self.options.case_sensitive,
        );
        self.index = 0;
        self.current()
    }

    /// The suggestion under the cursor, or `""` when the set is empty.
    pub fn current(&self) -> &str {
        self.matches
            .get(self.index)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn prev(&mut self) -> &str {
        let len = self.matches.len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
        self.current()
    }

    pub fn next(&mut self) -> &str {
        let len = self.matches.len();
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
        self.current()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn predicates(&self) -> &[String] {
        self.matches.as_slice()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
