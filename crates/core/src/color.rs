//! Display color derived from the host a book is published on.

use serde::{Deserialize, Serialize};
use url::Url;

/// Palette used by the book cards. Names match the stylesheet's classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Amber,
    Sky,
    Rose,
    Indigo,
    /// Fallback for hosts not in [`KNOWN_HOSTS`] and for unparsable URLs.
    Slate,
    /// Highlight for a book card returned straight after it was added.
    Emerald,
}

impl ColorTag {
    pub const DEFAULT: Self = Self::Slate;
    pub const JUST_ADDED: Self = Self::Emerald;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Amber => "amber",
            Self::Sky => "sky",
            Self::Rose => "rose",
            Self::Indigo => "indigo",
            Self::Slate => "slate",
            Self::Emerald => "emerald",
        }
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hosts with a dedicated color, compared without a leading `www.`.
pub const KNOWN_HOSTS: [(&str, ColorTag); 4] = [
    ("royalroad.com", ColorTag::Amber),
    ("scribblehub.com", ColorTag::Sky),
    ("archiveofourown.org", ColorTag::Rose),
    ("webnovel.com", ColorTag::Indigo),
];

/// Color for a book URL. Never fails: anything unrecognised is [`ColorTag::DEFAULT`].
#[must_use]
pub fn color_for(url: &str) -> ColorTag {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return ColorTag::DEFAULT;
    };
    let Some(host) = parsed.host_str() else {
        return ColorTag::DEFAULT;
    };
    let host = host.strip_prefix("www.").unwrap_or(host);
    KNOWN_HOSTS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(host))
        .map_or(ColorTag::DEFAULT, |&(_, color)| color)
}
