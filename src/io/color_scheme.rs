//! Startup color-scheme hint.
//!
//! Terminals don't report a light/dark preference directly. Many set
//! `COLORFGBG` to `"<fg>;<bg>"` (sometimes `"<fg>;<default>;<bg>"`) using
//! the 16 ANSI color indices; a dark background index means a dark scheme.

/// Interpret a `COLORFGBG` value. `None` when it can't be parsed.
pub fn dark_from_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}

/// What the host environment reports, defaulting to light
pub fn host_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| dark_from_colorfgbg(&v))
        .unwrap_or(false)
}

/// Resolve the initial display mode: command line, then config, then host.
/// The host is only consulted when neither override is set.
pub fn initial_dark(
    cli: Option<bool>,
    config: Option<bool>,
    host: impl FnOnce() -> bool,
) -> bool {
    cli.or(config).unwrap_or_else(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorfgbg_dark_backgrounds() {
        assert_eq!(dark_from_colorfgbg("15;0"), Some(true));
        assert_eq!(dark_from_colorfgbg("7;8"), Some(true));
        assert_eq!(dark_from_colorfgbg("15;default;0"), Some(true));
    }

    #[test]
    fn test_colorfgbg_light_backgrounds() {
        assert_eq!(dark_from_colorfgbg("0;15"), Some(false));
        assert_eq!(dark_from_colorfgbg("0;7"), Some(false));
    }

    #[test]
    fn test_colorfgbg_garbage() {
        assert_eq!(dark_from_colorfgbg(""), None);
        assert_eq!(dark_from_colorfgbg("default;default"), None);
        assert_eq!(dark_from_colorfgbg("15;200"), None);
    }

    #[test]
    fn test_initial_dark_precedence() {
        assert!(initial_dark(Some(true), Some(false), || false));
        assert!(!initial_dark(Some(false), Some(true), || true));
        assert!(initial_dark(None, Some(true), || false));
        assert!(initial_dark(None, None, || true));
        assert!(!initial_dark(None, None, || false));
    }

    #[test]
    fn test_host_not_consulted_when_overridden() {
        let mut asked = false;
        initial_dark(None, Some(false), || {
            asked = true;
            true
        });
        assert!(!asked);
    }
}
