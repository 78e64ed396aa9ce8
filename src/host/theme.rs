/// Light/dark color-scheme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light scheme; colors animate with scroll.
    #[default]
    Light,
    /// Dark scheme; shapes paint fixed grays.
    Dark,
}

impl ThemeMode {
    /// Map a "prefers dark" flag to a mode.
    pub fn from_prefers_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// `true` for [`ThemeMode::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Source of the platform's current color-scheme preference.
///
/// Injected at renderer construction; later changes arrive as
/// [`HostEvent::ThemeChanged`](crate::HostEvent::ThemeChanged).
pub trait ThemeProvider {
    /// Current preference.
    fn current_mode(&self) -> ThemeMode;
}

/// A provider that always reports the same mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedTheme(pub ThemeMode);

impl ThemeProvider for FixedTheme {
    fn current_mode(&self) -> ThemeMode {
        self.0
    }
}

impl<F> ThemeProvider for F
where
    F: Fn() -> ThemeMode,
{
    fn current_mode(&self) -> ThemeMode {
        self()
    }
}
