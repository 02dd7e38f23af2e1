use serde::{Deserialize, Serialize};

/// Part of speech as reported by the corpus, collapsed to the coarse classes
/// the lexicon distinguishes (`ADJF`, `ADJS` and `COMP` are all adjectives).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Conjunction,
    Particle,
    Preposition,
    Pronoun,
    Numeral,
    Interjection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Number {
    Singular,
    Plural,
}

/// `loct`, `loc1` and `loc2` all collapse to `Prepositional`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Declension {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
    /// Nouns in -мя (время, имя) that mix endings of several declensions.
    #[serde(rename = "heteroclitic")]
    Heteroclitic,
    /// Borrowed nouns that never inflect (кофе, метро).
    #[serde(rename = "indeclinable")]
    Indeclinable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conjugation {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Aspect {
    Perfective,
    Imperfective,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Transitivity {
    Transitive,
    Intransitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    Indicative,
    Imperative,
    Infinitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tense {
    Present,
    Past,
    Future,
}

/// Grammatical person. Serialized as `"1"`, `"2"`, `"3"` to stay readable by
/// consumers of earlier lexicon dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Animacy {
    Animate,
    Inanimate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Degree {
    Short,
    Comparative,
}

/// Normalized morphological description of one word form.
///
/// Every field holds at most one value. Unset fields serialize as `null` so
/// that every entry of a lexicon dump has the same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub lemma: Option<String>,
    pub pos: Option<PartOfSpeech>,
    pub gender: Option<Gender>,
    pub number: Option<Number>,
    pub case: Option<Case>,
    pub declension: Option<Declension>,
    pub conjugation: Option<Conjugation>,
    pub aspect: Option<Aspect>,
    pub transitivity: Option<Transitivity>,
    pub mood: Option<Mood>,
    pub tense: Option<Tense>,
    pub person: Option<Person>,
    pub animacy: Option<Animacy>,
    pub degree: Option<Degree>,
}

impl FeatureRecord {
    pub fn new(lemma: impl Into<String>) -> Self {
        Self {
            lemma: Some(lemma.into()),
            ..Default::default()
        }
    }

    /// True for the dictionary citation form of a noun (nominative singular),
    /// the only form declension is inferred from.
    pub fn is_noun_citation_form(&self) -> bool {
        self.pos == Some(PartOfSpeech::Noun)
            && self.case == Some(Case::Nominative)
            && self.number == Some(Number::Singular)
    }

    pub fn is_infinitive(&self) -> bool {
        self.pos == Some(PartOfSpeech::Verb) && self.mood == Some(Mood::Infinitive)
    }

    pub fn lemma(&self) -> &str {
        self.lemma.as_deref().unwrap_or_default()
    }
}
