//! Configurable keyboard shortcuts
//!
//! Maps keystrokes to editor commands, with Ctrl and Cmd treated alike and
//! conditions on where focus is. Users can override the shipped bindings in
//! a YAML file.
//!
//! ```text
//! KeyboardEvent → Keystroke → Keymap::lookup_with_context() → Command → Vec<Msg>
//! ```

mod binding;
mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, load_user_keymap,
    merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
