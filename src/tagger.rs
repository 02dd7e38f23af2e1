use std::collections::HashMap;

use tracing::trace;

use crate::features::{
    Animacy, Aspect, Case, Degree, FeatureRecord, Gender, Mood, Number, PartOfSpeech, Person,
    Tense, Transitivity,
};

/// A single field assignment produced by one grammeme code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammeme {
    Pos(PartOfSpeech),
    Gender(Gender),
    Number(Number),
    Case(Case),
    Animacy(Animacy),
    Aspect(Aspect),
    Transitivity(Transitivity),
    Mood(Mood),
    Tense(Tense),
    Person(Person),
    Degree(Degree),
}

impl Grammeme {
    fn apply(self, record: &mut FeatureRecord) {
        match self {
            Grammeme::Pos(v) => record.pos = Some(v),
            Grammeme::Gender(v) => record.gender = Some(v),
            Grammeme::Number(v) => record.number = Some(v),
            Grammeme::Case(v) => record.case = Some(v),
            Grammeme::Animacy(v) => record.animacy = Some(v),
            Grammeme::Aspect(v) => record.aspect = Some(v),
            Grammeme::Transitivity(v) => record.transitivity = Some(v),
            Grammeme::Mood(v) => record.mood = Some(v),
            Grammeme::Tense(v) => record.tense = Some(v),
            Grammeme::Person(v) => record.person = Some(v),
            Grammeme::Degree(v) => record.degree = Some(v),
        }
    }
}

use Grammeme as G;

/// OpenCorpora grammeme codes and the assignments each one performs, in
/// application order.
pub const GRAMMEMES: &[(&str, &[Grammeme])] = &[
    ("NOUN", &[G::Pos(PartOfSpeech::Noun)]),
    ("VERB", &[G::Pos(PartOfSpeech::Verb)]),
    ("INFN", &[G::Pos(PartOfSpeech::Verb), G::Mood(Mood::Infinitive)]),
    ("ADJF", &[G::Pos(PartOfSpeech::Adjective)]),
    ("ADJS", &[G::Pos(PartOfSpeech::Adjective), G::Degree(Degree::Short)]),
    ("COMP", &[G::Pos(PartOfSpeech::Adjective), G::Degree(Degree::Comparative)]),
    ("ADVB", &[G::Pos(PartOfSpeech::Adverb)]),
    ("CONJ", &[G::Pos(PartOfSpeech::Conjunction)]),
    ("PRCL", &[G::Pos(PartOfSpeech::Particle)]),
    ("PREP", &[G::Pos(PartOfSpeech::Preposition)]),
    ("NPRO", &[G::Pos(PartOfSpeech::Pronoun)]),
    ("NUMR", &[G::Pos(PartOfSpeech::Numeral)]),
    ("INTJ", &[G::Pos(PartOfSpeech::Interjection)]),
    ("masc", &[G::Gender(Gender::Masculine)]),
    ("femn", &[G::Gender(Gender::Feminine)]),
    ("neut", &[G::Gender(Gender::Neuter)]),
    ("sing", &[G::Number(Number::Singular)]),
    ("plur", &[G::Number(Number::Plural)]),
    ("nomn", &[G::Case(Case::Nominative)]),
    ("gent", &[G::Case(Case::Genitive)]),
    ("datv", &[G::Case(Case::Dative)]),
    ("accs", &[G::Case(Case::Accusative)]),
    ("ablt", &[G::Case(Case::Instrumental)]),
    ("loct", &[G::Case(Case::Prepositional)]),
    ("loc1", &[G::Case(Case::Prepositional)]),
    ("loc2", &[G::Case(Case::Prepositional)]),
    ("anim", &[G::Animacy(Animacy::Animate)]),
    ("inan", &[G::Animacy(Animacy::Inanimate)]),
    ("perf", &[G::Aspect(Aspect::Perfective)]),
    ("impf", &[G::Aspect(Aspect::Imperfective)]),
    ("tran", &[G::Transitivity(Transitivity::Transitive)]),
    ("intr", &[G::Transitivity(Transitivity::Intransitive)]),
    ("indc", &[G::Mood(Mood::Indicative)]),
    ("impr", &[G::Mood(Mood::Imperative)]),
    ("pres", &[G::Tense(Tense::Present)]),
    ("past", &[G::Tense(Tense::Past)]),
    ("futr", &[G::Tense(Tense::Future)]),
    ("1per", &[G::Person(Person::First)]),
    ("2per", &[G::Person(Person::Second)]),
    ("3per", &[G::Person(Person::Third)]),
];

/// Maps grammeme code sequences onto [`FeatureRecord`]s.
pub struct TagClassifier {
    table: HashMap<&'static str, &'static [Grammeme]>,
}

impl Default for TagClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TagClassifier {
    pub fn new() -> Self {
        Self {
            table: GRAMMEMES.iter().copied().collect(),
        }
    }

    pub fn lookup(&self, tag: &str) -> Option<&'static [Grammeme]> {
        self.table.get(tag).copied()
    }

    /// Classifies one lemma's tag sequence.
    ///
    /// Tags are applied left to right, so when two tags target the same field
    /// the later one wins. Unknown tags are ignored. Returns `None` when there
    /// are no tags at all.
    pub fn classify<S: AsRef<str>>(&self, lemma: &str, tags: &[S]) -> Option<FeatureRecord> {
        if tags.is_empty() {
            return None;
        }

        let mut record = FeatureRecord::new(lemma);
        for tag in tags {
            let tag = tag.as_ref();
            match self.lookup(tag) {
                Some(assignments) => {
                    for grammeme in assignments {
                        grammeme.apply(&mut record);
                    }
                }
                None => trace!("ignoring grammeme '{}' of '{}'", tag, lemma),
            }
        }
        Some(record)
    }
}
