pub mod mask;
pub mod value_access;

use crate::core::options::GhostOptions;
use crate::core::predicate::Predicate;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use mask::Mask;
use value_access::ValueAccess;

/// Replacement search supplied by the host: typed value and candidate list
/// in, suggestion out. With a custom search there is no match session, so
/// `cycle_prev`/`cycle_next` are not supported in that mode.
pub type PredicateFn = Box<dyn Fn(&str, &[String]) -> String>;

/// Hook run before every search. A failing hook is logged and the search
/// still runs.
pub type BeforeFindHook = Box<dyn FnMut(&str) -> Result<(), String>>;

/// Cursor position within the current match set, for "X of Y" UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionPos {
    pub index: usize,
    pub total: usize,
}

/// A suggestion the collaborator should render in the mask. `position` is
/// absent when the match set is empty or a custom search produced the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
    pub position: Option<SuggestionPos>,
}

/// What a field operation did, for the collaborator to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The mask now shows a (possibly empty) suggestion.
    Masked(Suggestion),
    /// The mask was reset to its default value.
    MaskCleared,
    /// The mask value was written into the host element.
    Accepted(String),
    /// The key was consumed without changing anything.
    Swallowed,
    Ignored,
}

/// Ghost-text field controller: owns the candidate list, the mask and the
/// last match session, and turns input/key events into mask updates.
pub struct GhostField {
    options: GhostOptions,
    list: Vec<String>,
    mask: Mask,
    last_predicate: Option<Predicate>,
    predicate_fn: Option<PredicateFn>,
    before_find: Option<BeforeFindHook>,
    generation: u64,
}

impl GhostField {
    pub fn new(list: Vec<String>, options: GhostOptions) -> Self {
        let mask = Mask::new(options.mask_default_value.clone());
        Self {
            options,
            list,
            mask,
            last_predicate: None,
            predicate_fn: None,
            before_find: None,
            generation: 0,
        }
    }

    pub fn with_predicate_fn(
        mut self,
        predicate_fn: impl Fn(&str, &[String]) -> String + 'static,
    ) -> Self {
        self.predicate_fn = Some(Box::new(predicate_fn));
        self
    }

    pub fn with_before_find(
        mut self,
        hook: impl FnMut(&str) -> Result<(), String> + 'static,
    ) -> Self {
        self.before_find = Some(Box::new(hook));
        self
    }

    pub fn options(&self) -> &GhostOptions {
        &self.options
    }

    pub fn list(&self) -> &[String] {
        self.list.as_slice()
    }

    /// Replace the candidate list wholesale. The in-progress match session
    /// is invalidated and the mask returns to its default.
    pub fn set_list(&mut self, list: Vec<String>) {
        tracing::debug!(candidates = list.len(), "candidate list replaced");
        self.list = list;
        self.last_predicate = None;
        self.mask.reset();
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn last_predicate(&self) -> Option<&Predicate> {
        self.last_predicate.as_ref()
    }

    /// Bumped on every search and list replacement. Hosts resolving async
    /// pre-search hooks compare generations to discard results that settle
    /// after a newer search already ran.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current suggestion with its position in the match set, if a
    /// session is live and non-empty.
    pub fn suggestion(&self) -> Option<Suggestion> {
        let predicate = self.last_predicate.as_ref()?;
        if predicate.is_empty() {
            return None;
        }
        Some(Suggestion {
            text: predicate.current().to_string(),
            position: Some(SuggestionPos {
                index: predicate.current_index(),
                total: predicate.len(),
            }),
        })
    }

    /// Run the search for `value` immediately and update the mask. Hosts
    /// normally reach this through `on_input_key` after debouncing.
    pub fn find_now(&mut self, value: &str) -> FieldOutcome {
        self.generation = self.generation.wrapping_add(1);

        if let Some(hook) = self.before_find.as_mut()
            && let Err(error) = hook(value)
        {
            tracing::error!(%error, "before-find hook failed");
        }

        if let Some(predicate_fn) = self.predicate_fn.as_ref() {
            let text = predicate_fn(value, &self.list);
            self.last_predicate = None;
            self.mask.set_value(text.clone());
            return FieldOutcome::Masked(Suggestion {
                text,
                position: None,
            });
        }

        let mut predicate = Predicate::new(self.options.predicate_options());
        let text = predicate.find(&self.list, value).to_string();
        tracing::debug!(query = %value, matches = predicate.len(), "predicate search");
        self.mask.set_value(text.clone());
        let position = (!predicate.is_empty()).then(|| SuggestionPos {
            index: predicate.current_index(),
            total: predicate.len(),
        });
        self.last_predicate = Some(predicate);
        FieldOutcome::Masked(Suggestion { text, position })
    }

    /// Debounced input-settled handler: decides whether `value` warrants a
    /// search, a mask reset, or nothing. Tab, Enter and Alt-modified keys
    /// never trigger a search; Ctrl+Backspace and too-short input clear the
    /// mask.
    pub fn on_input_key(&mut self, key: KeyEvent, value: &str) -> FieldOutcome {
        if matches!(key.code, KeyCode::Tab | KeyCode::Enter)
            || key.modifiers.contains(KeyModifiers::ALT)
        {
            return FieldOutcome::Swallowed;
        }

        let clearing =
            key.code == KeyCode::Backspace && key.modifiers.contains(KeyModifiers::CONTROL);
        if !clearing && value.chars().count() >= self.options.min_length {
            return self.find_now(value);
        }

        self.mask.reset();
        FieldOutcome::MaskCleared
    }

    /// Keydown handler: Tab accepts the mask into `element`, Enter is
    /// swallowed, Alt+Left/Alt+Right cycle the live session.
    pub fn on_key(&mut self, key: KeyEvent, element: &mut impl ValueAccess) -> FieldOutcome {
        match key.code {
            KeyCode::Enter => FieldOutcome::Swallowed,
            KeyCode::Tab => match self.accept(element) {
                FieldOutcome::Ignored => FieldOutcome::Swallowed,
                outcome => outcome,
            },
            KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => self.cycle_prev(),
            KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => self.cycle_next(),
            _ => FieldOutcome::Ignored,
        }
    }

    /// Write the mask into the element. Ignored when the mask is empty or
    /// already equal to the element value.
    pub fn accept(&mut self, element: &mut impl ValueAccess) -> FieldOutcome {
        let accepted = self.mask.value().to_string();
        if accepted.is_empty() || element.value() == accepted {
            return FieldOutcome::Ignored;
        }

        element.set_value(&accepted);
        self.mask.reset();
        self.last_predicate = None;
        tracing::debug!(value = %accepted, "suggestion accepted");
        FieldOutcome::Accepted(accepted)
    }

    pub fn cycle_prev(&mut self) -> FieldOutcome {
        self.cycle(true)
    }

    pub fn cycle_next(&mut self) -> FieldOutcome {
        self.cycle(false)
    }

    /// Reset the mask to its default without touching the match session.
    pub fn reset_mask(&mut self) {
        self.mask.reset();
    }

    fn cycle(&mut self, reverse: bool) -> FieldOutcome {
        let Some(predicate) = self.last_predicate.as_mut() else {
            return FieldOutcome::Ignored;
        };

        let text = if reverse {
            predicate.prev().to_string()
        } else {
            predicate.next().to_string()
        };
        let position = (!predicate.is_empty()).then(|| SuggestionPos {
            index: predicate.current_index(),
            total: predicate.len(),
        });
        self.mask.set_value(text.clone());
        FieldOutcome::Masked(Suggestion { text, position })
    }
}
