pub mod debounce;

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer, Generation, Ticket};
