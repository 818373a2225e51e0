//! Feed and site configuration.
//!
//! Site-wide settings reach the formatter as an explicit [`SiteConfig`]
//! snapshot passed with every call, never as process-global state. The
//! caller refreshes the snapshot when site configuration changes.

use std::fmt;

use serde::de::Deserializer;
use serde::Deserialize;
use url::Url;

/// How a feed prefixes titles when several wikis share one channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InterwikiPrefix {
    #[default]
    Off,
    /// Use the first entry of [`SiteConfig::local_interwikis`].
    FirstLocal,
    /// A fixed prefix for this feed.
    Literal(String),
}

// Feed files carry the historical tri-state: `false`, `true`, or an
// explicit prefix string.
impl<'de> Deserialize<'de> for InterwikiPrefix {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct Visitor;
        impl<'a> serde::de::Visitor<'a> for Visitor {
            type Value = InterwikiPrefix;
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.pad("a boolean or a prefix string")
            }
            fn visit_bool<E>(self, b: bool) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(if b {
                    InterwikiPrefix::FirstLocal
                } else {
                    InterwikiPrefix::Off
                })
            }
            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(if s.is_empty() {
                    InterwikiPrefix::Off
                } else {
                    InterwikiPrefix::Literal(s.to_owned())
                })
            }
        }

        d.deserialize_any(Visitor)
    }
}

/// Per-feed settings.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FeedConfig {
    #[serde(default)]
    pub add_interwiki_prefix: InterwikiPrefix,
}

/// Read-only snapshot of the site settings the formatter needs.
#[derive(Deserialize, Debug, Clone)]
pub struct SiteConfig {
    /// Server part of canonical URLs, no trailing slash.
    pub canonical_server: String,
    /// Path of the script entry point, e.g. `/w/index.php`.
    pub script_path: String,
    /// Pretty-URL pattern containing `$1`, e.g. `/wiki/$1`. Without it,
    /// canonical URLs go through `script_path` with a `title` query.
    #[serde(default)]
    pub article_path: Option<String>,
    #[serde(default)]
    pub local_interwikis: Vec<String>,
    #[serde(default)]
    pub use_rc_patrol: bool,
    #[serde(default)]
    pub use_new_page_patrol: bool,
}

impl SiteConfig {
    pub fn new(canonical_server: &str, script_path: impl Into<String>) -> crate::Result<Self> {
        let url: Url = canonical_server.parse()?;
        assert!(url.query().is_none());

        Ok(Self {
            canonical_server: canonical_server.trim_end_matches('/').to_owned(),
            script_path: script_path.into(),
            article_path: None,
            local_interwikis: Vec::new(),
            use_rc_patrol: false,
            use_new_page_patrol: false,
        })
    }

    pub fn from_json(s: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        let _: Url = config.canonical_server.parse()?;
        Ok(config)
    }

    pub fn article_path(mut self, path: impl Into<String>) -> Self {
        self.article_path = Some(path.into());
        self
    }

    pub fn local_interwikis(mut self, prefixes: Vec<String>) -> Self {
        self.local_interwikis = prefixes;
        self
    }

    pub fn rc_patrol(mut self, on: bool) -> Self {
        self.use_rc_patrol = on;
        self
    }

    pub fn new_page_patrol(mut self, on: bool) -> Self {
        self.use_new_page_patrol = on;
        self
    }
}
