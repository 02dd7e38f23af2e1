use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::RulesConfig;
use crate::corpus::CorpusHeader;
use crate::error::Result;
use crate::features::{FeatureRecord, PartOfSpeech};
use crate::languages::LanguageRules;
use crate::languages::russian::Russian;
use crate::tagger::TagClassifier;
use crate::token::CorpusToken;

pub const SOURCE: &str = "OpenCorpora";
pub const OPTIMIZED_SOURCE: &str = "OpenCorpora (Optimized)";
pub const PRUNED_SOURCE: &str = "OpenCorpora (Filtered)";

/// Lowercase word form → features, in the order words were first seen.
///
/// A word form is stored at most once: later insertions of the same key are
/// rejected and leave the stored record untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    words: IndexMap<String, FeatureRecord>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under `word` unless the word is already present.
    /// Returns whether the record was stored.
    pub fn insert(&mut self, word: String, record: FeatureRecord) -> bool {
        if self.words.contains_key(&word) {
            return false;
        }
        self.words.insert(word, record);
        true
    }

    pub fn get(&self, word: &str) -> Option<&FeatureRecord> {
        self.words.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FeatureRecord)> {
        self.words.iter()
    }

    /// Number of entries per part of speech. Entries without one are not counted.
    pub fn pos_distribution(&self) -> BTreeMap<PartOfSpeech, usize> {
        let mut counts = BTreeMap::new();
        for pos in self.words.values().filter_map(|r| r.pos) {
            *counts.entry(pos).or_insert(0) += 1;
        }
        counts
    }

    /// Keeps at most `limits` entries per part of speech, in first-seen order.
    /// Parts of speech without a limit are dropped.
    pub fn optimize(&self, limits: &OptimizeLimits) -> Lexicon {
        let mut taken: BTreeMap<PartOfSpeech, usize> = BTreeMap::new();
        let mut optimized = Lexicon::new();

        for (word, record) in &self.words {
            let Some(pos) = record.pos else { continue };
            let Some(cap) = limits.limit(pos) else { continue };
            let count = taken.entry(pos).or_insert(0);
            if *count < cap {
                *count += 1;
                optimized.insert(word.clone(), record.clone());
            }
        }
        optimized
    }

    /// Removes every blocked word form and returns the removed keys in
    /// first-seen order. The remaining entries keep their order.
    pub fn prune(&mut self, blocklist: &Blocklist) -> Vec<String> {
        let mut removed = Vec::new();
        self.words.retain(|word, _| {
            if blocklist.is_blocked(word) {
                removed.push(word.clone());
                false
            } else {
                true
            }
        });
        removed
    }
}

/// Word forms to drop from a finished lexicon: exact matches plus any word
/// containing one of the fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    words: HashSet<String>,
    fragments: Vec<String>,
}

impl Blocklist {
    pub fn new(words: Vec<String>, fragments: Vec<String>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
            fragments: fragments
                .into_iter()
                .map(|f| f.to_lowercase())
                .filter(|f| !f.is_empty())
                .collect(),
        }
    }

    pub fn is_blocked(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.contains(&word) || self.fragments.iter().any(|f| word.contains(f.as_str()))
    }
}

/// Per part-of-speech caps used by [`Lexicon::optimize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeLimits {
    limits: Vec<(PartOfSpeech, usize)>,
}

impl Default for OptimizeLimits {
    fn default() -> Self {
        Self {
            limits: vec![
                (PartOfSpeech::Noun, 2000),
                (PartOfSpeech::Verb, 1000),
                (PartOfSpeech::Adjective, 800),
                (PartOfSpeech::Adverb, 400),
                (PartOfSpeech::Conjunction, 200),
            ],
        }
    }
}

impl OptimizeLimits {
    pub fn new(limits: Vec<(PartOfSpeech, usize)>) -> Self {
        Self { limits }
    }

    pub fn limit(&self, pos: PartOfSpeech) -> Option<usize> {
        self.limits.iter().find(|(p, _)| *p == pos).map(|(_, cap)| *cap)
    }
}

/// What happened to a token handed to [`LexiconBuilder::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Inserted,
    /// Carries a skip tag (punctuation, preposition, particle).
    Filtered,
    /// The token had no grammemes at all.
    MissingGrammemes,
    /// Grammemes were present but none of them named a part of speech.
    NoPartOfSpeech,
    /// The word form is already in the lexicon.
    Duplicate,
}

/// Token counts by outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    pub tokens: usize,
    pub inserted: usize,
    pub filtered: usize,
    pub missing_grammemes: usize,
    pub no_part_of_speech: usize,
    pub duplicates: usize,
}

impl ConversionStats {
    fn record(&mut self, outcome: Outcome) {
        self.tokens += 1;
        match outcome {
            Outcome::Inserted => self.inserted += 1,
            Outcome::Filtered => self.filtered += 1,
            Outcome::MissingGrammemes => self.missing_grammemes += 1,
            Outcome::NoPartOfSpeech => self.no_part_of_speech += 1,
            Outcome::Duplicate => self.duplicates += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.tokens - self.inserted
    }
}

/// Feeds corpus tokens through classification and inference into a [`Lexicon`].
pub struct LexiconBuilder {
    classifier: TagClassifier,
    rules: Box<dyn LanguageRules>,
    skip_tags: HashSet<String>,
    lexicon: Lexicon,
    stats: ConversionStats,
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new(&RulesConfig::default())
    }
}

impl LexiconBuilder {
    pub fn new(config: &RulesConfig) -> Self {
        Self::with_rules(Box::new(Russian::from_config(config)), config.skip_tags())
    }

    pub fn with_rules(rules: Box<dyn LanguageRules>, skip_tags: HashSet<String>) -> Self {
        Self {
            classifier: TagClassifier::new(),
            rules,
            skip_tags,
            lexicon: Lexicon::new(),
            stats: ConversionStats::default(),
        }
    }

    pub fn add(&mut self, token: &CorpusToken) -> Outcome {
        let outcome = self.process(token);
        self.stats.record(outcome);
        if outcome == Outcome::Inserted && self.lexicon.len() % 1000 == 0 {
            debug!("{} unique words so far", self.lexicon.len());
        }
        outcome
    }

    fn process(&mut self, token: &CorpusToken) -> Outcome {
        let word = token.word();
        if self.skip_tags.iter().any(|t| token.has_tag(t)) {
            return Outcome::Filtered;
        }

        let Some(mut record) = self.classifier.classify(&token.lemma, &token.tags) else {
            return Outcome::MissingGrammemes;
        };
        if record.pos.is_none() {
            return Outcome::NoPartOfSpeech;
        }
        self.rules.apply_rules(&mut record);

        if self.lexicon.insert(word, record) {
            Outcome::Inserted
        } else {
            Outcome::Duplicate
        }
    }

    pub fn extend<'a, I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = &'a CorpusToken>,
    {
        for token in tokens {
            self.add(token);
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn stats(&self) -> ConversionStats {
        self.stats
    }

    pub fn finish(self) -> (Lexicon, ConversionStats) {
        (self.lexicon, self.stats)
    }
}

/// Serialized form of a lexicon: `{"metadata": {..., "words": {...}}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconDocument {
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub source: String,
    pub version: String,
    pub revision: String,
    pub total_words: usize,
    pub words: Lexicon,
}

impl LexiconDocument {
    pub fn new(source: impl Into<String>, header: &CorpusHeader, words: Lexicon) -> Self {
        Self {
            metadata: Metadata {
                source: source.into(),
                version: header.version.clone(),
                revision: header.revision.clone(),
                total_words: words.len(),
                words,
            },
        }
    }

    pub fn header(&self) -> CorpusHeader {
        CorpusHeader {
            version: self.metadata.version.clone(),
            revision: self.metadata.revision.clone(),
        }
    }

    pub fn optimize(&self, limits: &OptimizeLimits) -> LexiconDocument {
        LexiconDocument::new(
            OPTIMIZED_SOURCE,
            &self.header(),
            self.metadata.words.optimize(limits),
        )
    }

    /// Drops blocked words and recounts `total_words`. Version and revision
    /// are carried over.
    pub fn prune(&self, blocklist: &Blocklist) -> (LexiconDocument, Vec<String>) {
        let mut words = self.metadata.words.clone();
        let removed = words.prune(blocklist);
        for word in &removed {
            debug!("removed {}", word);
        }
        (LexiconDocument::new(PRUNED_SOURCE, &self.header(), words), removed)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let document: LexiconDocument = serde_json::from_reader(reader)?;
        if document.metadata.total_words != document.metadata.words.len() {
            warn!(
                "total_words is {} but the document holds {} words",
                document.metadata.total_words,
                document.metadata.words.len()
            );
        }
        Ok(document)
    }

    pub fn write_to<W: Write>(&self, writer: W, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_json::to_writer(writer, self)?;
        }
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer, pretty)?;
        writer.flush()?;
        Ok(())
    }
}
