pub mod core;
pub mod field;
pub mod runtime;
pub mod terminal;

pub use crate::core::candidates;
pub use crate::core::matcher;
pub use crate::core::options::{GhostOptions, PredicateOptions};
pub use crate::core::policy::{InvalidPolicyError, MatchPolicy};
pub use crate::core::predicate::Predicate;

pub use field::mask::Mask;
pub use field::value_access::{BufferValue, Mirrored, ValueAccess};
pub use field::{FieldOutcome, GhostField, Suggestion, SuggestionPos};

pub use runtime::debounce::{DEFAULT_DEBOUNCE, Debouncer, Generation, Ticket};

pub use terminal::{KeyCode, KeyEvent, KeyModifiers};
