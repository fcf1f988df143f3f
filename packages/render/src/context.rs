//! Per-invocation rendering context.
//!
//! The host platform supplies two collaborators: the current UI language
//! (which may change between invocations, so it is read per call and never
//! cached here) and an asset resolver that turns relative icon paths into
//! absolute URLs.

use chrono::Locale;

/// Resolves a relative image path to a fully-qualified URL.
///
/// The engine never fetches or validates the image; it only embeds the
/// resolved URL in the icon descriptor.
pub trait AssetResolver {
    /// Returns the absolute URL for `relative_path`.
    fn resolve(&self, relative_path: &str) -> String;
}

/// Resolves assets against a fixed base URL by plain path joining.
///
/// An empty base passes relative paths through unchanged, which keeps
/// offline/batch runs usable.
#[derive(Debug, Clone, Default)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a resolver rooted at `base` (with or without trailing slash).
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }
}

impl AssetResolver for BaseUrl {
    fn resolve(&self, relative_path: &str) -> String {
        if self.0.is_empty() {
            return relative_path.to_string();
        }
        format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            relative_path.trim_start_matches('/')
        )
    }
}

/// Everything a renderer needs beyond the entity itself.
pub struct RenderContext<'a> {
    locale: Locale,
    assets: &'a dyn AssetResolver,
}

impl<'a> RenderContext<'a> {
    /// Builds a context for one invocation. `language` is a BCP 47-ish code
    /// as reported by the platform ("en", "es", "pt-PT", ...).
    #[must_use]
    pub fn new(language: &str, assets: &'a dyn AssetResolver) -> Self {
        Self {
            locale: locale_for(language),
            assets,
        }
    }

    /// The date-formatting locale for this invocation.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolves an icon path through the platform's asset resolver.
    #[must_use]
    pub fn icon_url(&self, relative_path: &str) -> String {
        self.assets.resolve(relative_path)
    }
}

/// Maps a platform language code to a chrono locale.
///
/// Only the languages the mashup platform actually ships are mapped; any
/// other code falls back to `en_US`.
fn locale_for(language: &str) -> Locale {
    let primary = language
        .split(['-', '_'])
        .next()
        .unwrap_or(language)
        .to_ascii_lowercase();
    match primary.as_str() {
        "es" => Locale::es_ES,
        "pt" => Locale::pt_PT,
        "fr" => Locale::fr_FR,
        "de" => Locale::de_DE,
        "it" => Locale::it_IT,
        _ => Locale::en_US,
    }
}
