//! Page titles: prefixed display text and canonical URLs.

use crate::config::SiteConfig;
use crate::{Error, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Namespace {
    /// A regular page. Stream titles arrive already carrying their
    /// namespace prefix, so no further qualification happens here.
    Main,
    Special,
}

/// Characters MediaWiki never allows in a title.
const FORBIDDEN: &[char] = &['#', '<', '>', '[', ']', '|', '{', '}'];

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Title {
    ns: Namespace,
    text: String,
}

impl Title {
    /// Wraps text that is already in canonical prefixed form, such as
    /// the `title` field of a change event.
    pub fn page(text: impl Into<String>) -> Self {
        Self {
            ns: Namespace::Main,
            text: text.into(),
        }
    }

    /// Parses untrusted text, e.g. a log parameter.
    pub fn from_text(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() || text.contains(FORBIDDEN) || text.chars().any(char::is_control) {
            return Err(Error::BadTitle(text.to_owned()));
        }
        Ok(Self {
            ns: Namespace::Main,
            text: text.replace('_', " "),
        })
    }

    /// The synthetic `Special:Log/<type>` title. Built by hand rather
    /// than through special-page name lookup; IRC consumers match on
    /// the literal "Log" path.
    pub fn log(log_type: &str) -> Self {
        Self {
            ns: Namespace::Special,
            text: format!("Log/{log_type}"),
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.ns
    }

    pub fn prefixed_text(&self) -> String {
        match self.ns {
            Namespace::Main => self.text.clone(),
            Namespace::Special => format!("Special:{}", self.text),
        }
    }

    /// Prefixed text in URL form, spaces turned to underscores.
    pub fn dbkey(&self) -> String {
        self.prefixed_text().replace(' ', "_")
    }

    /// Full permalink for this title on `site`.
    pub fn canonical_url(&self, site: &SiteConfig) -> String {
        let key = encode_dbkey(&self.dbkey());
        match &site.article_path {
            Some(path) => format!("{}{}", site.canonical_server, path.replace("$1", &key)),
            None => format!(
                "{}{}?title={}",
                site.canonical_server, site.script_path, key
            ),
        }
    }
}

// percent-encode, but keep `:` and `/` readable the way MediaWiki's own
// URL encoding does
fn encode_dbkey(key: &str) -> String {
    urlencoding::encode(key).replace("%2F", "/").replace("%3A", ":")
}
