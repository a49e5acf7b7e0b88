//! Merchant override hooks for locale resolution.
//!
//! Each hook is a plain value transformation: it receives the computed
//! value and returns a replacement. Hooks are passed explicitly into the
//! resolver rather than dispatched through any global event mechanism.

use osm_core::LanguageTag;

/// A boxed language-tag transformation.
pub type TagOverrideFn = Box<dyn Fn(LanguageTag) -> LanguageTag + Send + Sync>;

/// Override hooks consulted during locale resolution.
#[derive(Default)]
pub struct LocaleOverrides {
    /// Final pass over any resolved tag before it is used.
    pub locale: Option<TagOverrideFn>,
    /// Replaces the default tag used for unrecognized Eurozone countries.
    pub default_euro_locale: Option<TagOverrideFn>,
    /// When set, EUR resolution returns the default tag for every country.
    pub force_euro_locale: bool,
}

impl LocaleOverrides {
    pub fn with_locale(
        mut self,
        f: impl Fn(LanguageTag) -> LanguageTag + Send + Sync + 'static,
    ) -> Self {
        self.locale = Some(Box::new(f));
        self
    }

    pub fn with_default_euro_locale(
        mut self,
        f: impl Fn(LanguageTag) -> LanguageTag + Send + Sync + 'static,
    ) -> Self {
        self.default_euro_locale = Some(Box::new(f));
        self
    }

    pub fn with_force_euro_locale(mut self, force: bool) -> Self {
        self.force_euro_locale = force;
        self
    }
}

/// Apply an optional override to a value.
pub(crate) fn apply(hook: &Option<TagOverrideFn>, value: LanguageTag) -> LanguageTag {
    match hook {
        Some(f) => f(value),
        None => value,
    }
}
