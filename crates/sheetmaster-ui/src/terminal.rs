//! Terminal detection utilities.

use std::env;
use std::sync::atomic::{AtomicU8, Ordering};

const AUTO: u8 = 0;
const FORCE_ON: u8 = 1;
const FORCE_OFF: u8 = 2;

static COLOR_OVERRIDE: AtomicU8 = AtomicU8::new(AUTO);

/// Returns `true` if stdout is connected to a terminal (TTY).
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Returns the terminal width in columns, defaulting to 80 if detection fails.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _rows)| cols as usize)
        .unwrap_or(80)
}

/// Pin color on or off for the rest of the process. `None` restores
/// environment-based detection.
pub fn set_color_override(choice: Option<bool>) {
    let value = match choice {
        None => AUTO,
        Some(true) => FORCE_ON,
        Some(false) => FORCE_OFF,
    };
    COLOR_OVERRIDE.store(value, Ordering::Relaxed);
}

/// Determines if ANSI color codes should be used.
///
/// An override from [`set_color_override`] wins. Otherwise:
/// - `NO_COLOR` (any value): disables color (<https://no-color.org/>)
/// - `CLICOLOR=0`: disables color
/// - `TERM=dumb`: disables color
/// - `CLICOLOR_FORCE` (any value): forces color even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    match COLOR_OVERRIDE.load(Ordering::Relaxed) {
        FORCE_ON => true,
        FORCE_OFF => false,
        _ => color_from_env(|key| env::var(key).ok(), is_tty()),
    }
}

/// The environment part of [`supports_color`], with the lookup injected.
pub fn color_from_env(var: impl Fn(&str) -> Option<String>, tty: bool) -> bool {
    if var("NO_COLOR").is_some() {
        return false;
    }
    if var("CLICOLOR").as_deref() == Some("0") {
        return false;
    }
    if var("TERM").as_deref() == Some("dumb") {
        return false;
    }
    if var("CLICOLOR_FORCE").is_some() {
        return true;
    }
    tty
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn terminal_width_returns_positive() {
        assert!(terminal_width() > 0);
    }

    #[test]
    fn tty_decides_by_default() {
        assert!(color_from_env(lookup(&[]), true));
        assert!(!color_from_env(lookup(&[]), false));
    }

    #[test]
    fn no_color_wins_over_force() {
        let env = lookup(&[("NO_COLOR", ""), ("CLICOLOR_FORCE", "1")]);
        assert!(!color_from_env(env, true));
    }

    #[test]
    fn clicolor_zero_and_dumb_term() {
        assert!(!color_from_env(lookup(&[("CLICOLOR", "0")]), true));
        assert!(!color_from_env(lookup(&[("TERM", "dumb")]), true));
        assert!(color_from_env(lookup(&[("CLICOLOR", "1")]), true));
    }

    #[test]
    fn force_without_tty() {
        assert!(color_from_env(lookup(&[("CLICOLOR_FORCE", "1")]), false));
    }
}
