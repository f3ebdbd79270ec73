use unicode_width::UnicodeWidthChar;

/// Holds the suggestion text the collaborator overlays behind the input.
///
/// The mask never renders itself; it only tracks the value and hands the
/// overlay geometry to whoever does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mask {
    default_value: String,
    value: String,
}

impl Mask {
    pub fn new(default_value: impl Into<String>) -> Self {
        let default_value = default_value.into();
        let value = default_value.clone();
        Self {
            default_value,
            value,
        }
    }

    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    pub fn default_value(&self) -> &str {
        self.default_value.as_str()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Back to the configured default.
    pub fn reset(&mut self) {
        self.value = self.default_value.clone();
    }

    /// The part of the mask that extends past the typed input, or `None`
    /// when the mask does not complete it. The comparison is case-folded so
    /// a lower-cased suggestion still lines up behind mixed-case input.
    pub fn ghost_suffix(&self, input: &str) -> Option<String> {
        if self.value.is_empty() {
            return None;
        }
        if !self
            .value
            .to_lowercase()
            .starts_with(&input.to_lowercase())
        {
            return None;
        }

        let suffix: String = self.value.chars().skip(input.chars().count()).collect();
        if suffix.is_empty() { None } else { Some(suffix) }
    }
}

/// Display column where a ghost suffix begins, i.e. the rendered width of
/// the typed input.
pub fn display_col(input: &str) -> u16 {
    let width: usize = input
        .chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum();
    width as u16
}
