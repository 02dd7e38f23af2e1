//! Reader for OpenCorpora annotation dumps.
//!
//! The dump is a flat XML document:
//!
//! ```xml
//! <annotation version="0.12" revision="4191054">
//!   <text id="1"> ... <tokens>
//!     <token id="1" text="Школа"><tfr rev_id="1" t="Школа">
//!       <v><l id="1" t="школа"><g v="NOUN"/><g v="femn"/></l></v>
//!     </tfr></token>
//!   </tokens> ... </text>
//! </annotation>
//! ```
//!
//! Tokens are scanned with regular expressions instead of a full XML parser;
//! only the first analysis variant of each token is read.

use std::borrow::Cow;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::token::CorpusToken;

/// Attributes of the root `annotation` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusHeader {
    pub version: String,
    pub revision: String,
}

/// One piece of an element's attribute list. Quoted values may contain `>`.
const ATTRS: &str = r#"(?:"[^"]*"|'[^']*'|[^"'>])"#;

pub struct CorpusReader {
    annotation: Regex,
    token: Regex,
    lemma: Regex,
    grammeme: Regex,
    version_attr: Regex,
    revision_attr: Regex,
    text_attr: Regex,
    t_attr: Regex,
}

impl Default for CorpusReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusReader {
    pub fn new() -> Self {
        let re = |pattern: &str| Regex::new(pattern).expect("corpus pattern is valid");

        Self {
            annotation: re(&format!(r"<annotation\b({ATTRS}*)>")),
            token: re(&format!(r"(?s)<token\b({ATTRS}*?)(?:/>|>(.*?)</token>)")),
            lemma: re(&format!(r"(?s)<l\b({ATTRS}*?)(?:/>|>(.*?)</l>)")),
            grammeme: re(&format!(r#"<g\b{ATTRS}*?\bv="([^"]*)""#)),
            version_attr: re(r#"\bversion="([^"]*)""#),
            revision_attr: re(r#"\brevision="([^"]*)""#),
            text_attr: re(r#"\btext="([^"]*)""#),
            t_attr: re(r#"\bt="([^"]*)""#),
        }
    }

    /// Reads the `version` and `revision` of the dump.
    pub fn header(&self, xml: &str) -> Result<CorpusHeader> {
        let attrs = self
            .annotation
            .captures(xml)
            .and_then(|c| c.get(1))
            .ok_or_else(|| Error::malformed("no <annotation> root element"))?
            .as_str();

        Ok(CorpusHeader {
            version: attribute(&self.version_attr, attrs).unwrap_or_default(),
            revision: attribute(&self.revision_attr, attrs).unwrap_or_default(),
        })
    }

    /// Yields every token of the dump in document order.
    ///
    /// Tokens without an analysis, including self-closing `<token/>`
    /// elements, come back with an empty tag list.
    pub fn tokens<'a>(&'a self, xml: &'a str) -> impl Iterator<Item = CorpusToken> + 'a {
        self.token.captures_iter(xml).map(move |caps| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            let text = attribute(&self.text_attr, attrs).unwrap_or_default();
            self.analysis(text, body)
        })
    }

    fn analysis(&self, text: String, body: &str) -> CorpusToken {
        let Some(lemma) = self.lemma.captures(body) else {
            return CorpusToken::untagged(text);
        };

        let lemma_attrs = lemma.get(1).map_or("", |m| m.as_str());
        let grammemes = lemma.get(2).map_or("", |m| m.as_str());
        let tags = self
            .grammeme
            .captures_iter(grammemes)
            .map(|c| decode(&c[1]).into_owned())
            .collect();

        CorpusToken::new(
            text,
            attribute(&self.t_attr, lemma_attrs).unwrap_or_default(),
            tags,
        )
    }
}

fn attribute(pattern: &Regex, attrs: &str) -> Option<String> {
    pattern
        .captures(attrs)
        .map(|c| decode(&c[1]).into_owned())
}

fn decode(value: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(value)
}
