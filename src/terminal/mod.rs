pub mod input_event;

pub use input_event::{KeyCode, KeyEvent, KeyModifiers, map_key_event};
