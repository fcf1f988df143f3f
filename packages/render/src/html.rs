//! Info-window HTML assembly.
//!
//! The map widget renders each POI popup from a raw HTML fragment. The
//! fragment shapes (font-awesome icon markers, bold labels, two-space
//! indented list items) are part of the widget contract, so they are
//! centralized here instead of being rebuilt in every renderer. Rows are
//! only ever added for fields that are present; an absent field produces
//! no markup at all.

use std::fmt::Write as _;

/// Font-awesome icon classes used across the info windows.
pub mod icons {
    pub const CLOCK: &str = "fa fa-fw fa-clock-o";
    pub const FEED: &str = "fa fa-fw fa-feed";
    pub const INFO: &str = "fa fa-fw fa-info";
    pub const LIST: &str = "fa fa-fw fa-list-ul";
    pub const MAP_MARKER: &str = "fa fa-fw fa-map-marker";
    pub const THERMOMETER: &str = "fa fa-fw fa-thermometer-half";
    pub const TINT: &str = "fa fa-fw fa-tint";
}

/// Incremental builder for one info-window fragment.
#[derive(Debug)]
pub struct InfoWindow {
    html: String,
}

impl Default for InfoWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoWindow {
    /// Opens the fragment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            html: String::from("<div>"),
        }
    }

    /// A bare paragraph (entity descriptions).
    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        let _ = write!(self.html, "<p>{text}</p>");
        self
    }

    /// `<p><b><icon/> Label: </b> value</p>` — the heading-style row used
    /// for dates and sources.
    pub fn labeled(&mut self, icon: &str, label: &str, value: &str) -> &mut Self {
        let _ = write!(
            self.html,
            "<p><b><i class=\"{icon}\"/> {label}: </b> {value}</p>"
        );
        self
    }

    /// `<p><icon/> <b>Label:</b> value</p>` — the detail-style row used for
    /// individual measurements.
    pub fn field(&mut self, icon: &str, label: &str, value: &str) -> &mut Self {
        let _ = write!(
            self.html,
            "<p><i class=\"{icon}\"/> <b>{label}:</b> {value}</p>"
        );
        self
    }

    /// `<p><icon/> text</p>` — an unlabeled informational row.
    pub fn note(&mut self, icon: &str, text: &str) -> &mut Self {
        let _ = write!(self.html, "<p><i class=\"{icon}\"/> {text}</p>");
        self
    }

    /// Appends a prebuilt fragment (the formatted address block). Empty
    /// fragments are a no-op, so callers don't need to guard.
    pub fn raw(&mut self, fragment: &str) -> &mut Self {
        self.html.push_str(fragment);
        self
    }

    /// A titled list of `<b>key</b>: value` items. Skipped entirely when
    /// `items` is empty.
    pub fn keyed_list(&mut self, title: &str, items: &[(String, String)]) -> &mut Self {
        if items.is_empty() {
            return self;
        }
        self.list_header(title);
        for (key, value) in items {
            let _ = write!(self.html, "  <li><b>{key}</b>: {value}</li>");
        }
        self.html.push_str("</ul>");
        self
    }

    /// A titled list of plain items. Skipped entirely when `items` is empty.
    pub fn plain_list(&mut self, title: &str, items: &[String]) -> &mut Self {
        if items.is_empty() {
            return self;
        }
        self.list_header(title);
        for item in items {
            let _ = write!(self.html, "  <li>{item}</li>");
        }
        self.html.push_str("</ul>");
        self
    }

    fn list_header(&mut self, title: &str) {
        let _ = write!(
            self.html,
            "<p><b><i class=\"{}\"/> {title}</b>:</p><ul>",
            icons::LIST
        );
    }

    /// Closes and returns the fragment.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.html.push_str("</div>");
        self.html
    }
}
