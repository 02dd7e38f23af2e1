use crate::features::{Conjugation, Declension, FeatureRecord, Gender};

/// Inflection-class heuristics for a language.
pub trait LanguageRules: Send + Sync {
    /// Declension class of a noun given its nominative singular lemma.
    fn declension(&self, lemma: &str, gender: Option<Gender>) -> Declension;

    /// Conjugation class of a verb given its infinitive.
    fn conjugation(&self, lemma: &str) -> Conjugation;

    /// Fills `declension` for noun citation forms and `conjugation` for
    /// infinitives. Other records are left untouched.
    fn apply_rules(&self, record: &mut FeatureRecord) {
        if record.is_noun_citation_form() {
            record.declension = Some(self.declension(record.lemma(), record.gender));
        }
        if record.is_infinitive() {
            record.conjugation = Some(self.conjugation(record.lemma()));
        }
    }
}

pub mod russian;
