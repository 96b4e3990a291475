//! Type-safe key bindings for pager navigation.
//!
//! Each [`Binding`] pairs a set of key codes with help text and can be
//! matched against incoming [`KeyMsg`] events. Keymaps implement the
//! [`KeyMap`] trait so help views can enumerate their bindings.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Help information for a key binding.
///
/// The `key` field is the label shown in help views (e.g. "←/h") and `desc`
/// is a short description of the action (e.g. "prev page").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key label shown in help views.
    pub key: String,
    /// A short description of the action.
    pub desc: String,
}

/// A single key binding: one action reachable through several key codes.
///
/// # Examples
///
/// ```rust
/// use pagewindow::key::Binding;
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let next = Binding::new(vec![KeyCode::PageDown, KeyCode::Char('l')])
///     .with_help("→/l", "next page");
///
/// let press = KeyMsg {
///     key: KeyCode::Char('l'),
///     modifiers: KeyModifiers::NONE,
/// };
/// assert!(next.matches(&press));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding that matches any of the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text to the binding (builder pattern).
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Returns the key codes this binding responds to.
    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// Returns the binding's help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding.
    ///
    /// Disabled bindings never match and should be hidden from help views.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns true if the key message matches this binding.
    ///
    /// Matching is by key code; modifier-qualified combinations are not
    /// needed for pager navigation.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.contains(&msg.key)
    }
}

/// Trait implemented by component keymaps to expose bindings to help views.
pub trait KeyMap {
    /// The essential bindings, for compact help views.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, organized into columns, for expanded help views.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_matches_any_bound_key() {
        let b = Binding::new(vec![KeyCode::Left, KeyCode::Char('h')]);
        assert!(b.matches(&press(KeyCode::Left)));
        assert!(b.matches(&press(KeyCode::Char('h'))));
        assert!(!b.matches(&press(KeyCode::Right)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]);
        assert!(b.enabled());

        b.set_enabled(false);
        assert!(!b.enabled());
        assert!(!b.matches(&press(KeyCode::Enter)));

        b.set_enabled(true);
        assert!(b.matches(&press(KeyCode::Enter)));
    }

    #[test]
    fn test_empty_binding_is_not_enabled() {
        let b = Binding::new(vec![]);
        assert!(!b.enabled());
    }

    #[test]
    fn test_with_help() {
        let b = Binding::new(vec![KeyCode::PageUp]).with_help("pgup", "prev page");
        assert_eq!(b.help().key, "pgup");
        assert_eq!(b.help().desc, "prev page");
    }
}
