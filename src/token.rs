use serde::{Deserialize, Serialize};

/// One word occurrence from the corpus, carrying the tags of its first
/// analysis variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusToken {
    pub text: String,
    pub lemma: String,
    /// Grammeme codes in the order the corpus emits them.
    pub tags: Vec<String>,
}

impl CorpusToken {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            tags,
        }
    }

    /// Token without any analysis (the corpus gave no `<l>` element for it).
    pub fn untagged(text: impl Into<String>) -> Self {
        Self::new(text, String::new(), Vec::new())
    }

    /// Lowercased surface form, used as the lexicon key.
    pub fn word(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
