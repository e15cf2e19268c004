//! Autocorrect core for a plain-text notepad
//!
//! As the user types, the host editor hands the full buffer to this crate
//! after a short idle pause and swaps in the corrected result. The crate is
//! split into separate components for the different concerns:
//!
//! - `dictionary`: correction mapping loading with a built-in fallback set
//! - `corrector`: whole-word, case-preserving text substitution
//! - `config`: persisted settings (dictionary path, toggle, idle delay)
//! - `session`: idle-debounce, enable toggle, and cursor restoration

pub mod config;
pub mod corrector;
pub mod dictionary;
pub mod session;

// Re-export the main entry points for convenience
pub use config::Config;
pub use corrector::{correct_text, AutoCorrect};
pub use dictionary::{default_corrections, load_corrections, DictionaryError};
pub use session::{EditorSession, IdleDebounce};
