use std::collections::HashSet;

use super::LanguageRules;
use crate::config::RulesConfig;
use crate::data;
use crate::features::{Conjugation, Declension, Gender};

pub struct Russian {
    indeclinable: HashSet<String>,
    conjugation_exceptions: HashSet<String>,
    second_conjugation_endings: Vec<String>,
}

impl Default for Russian {
    fn default() -> Self {
        Self::from_config(&RulesConfig::default())
    }
}

impl Russian {
    pub fn from_config(config: &RulesConfig) -> Self {
        let list = |custom: &Option<Vec<String>>, builtin: &[&str]| {
            custom.clone().unwrap_or_else(|| data::to_owned_list(builtin))
        };

        Self {
            indeclinable: list(&config.indeclinable_nouns, data::INDECLINABLE_NOUNS)
                .into_iter()
                .collect(),
            conjugation_exceptions: list(
                &config.second_conjugation_exceptions,
                data::SECOND_CONJUGATION_EXCEPTIONS,
            )
            .into_iter()
            .collect(),
            second_conjugation_endings: list(
                &config.second_conjugation_endings,
                data::SECOND_CONJUGATION_ENDINGS,
            ),
        }
    }

    pub fn is_indeclinable(&self, lemma: &str) -> bool {
        self.indeclinable.contains(lemma)
    }
}

impl LanguageRules for Russian {
    /// First matching rule wins:
    /// feminine in -ь, then -мя, then -а/-я, then -о/-е or neuter (with the
    /// indeclinable loanwords carved out), then 1st as the fallback.
    fn declension(&self, lemma: &str, gender: Option<Gender>) -> Declension {
        if gender == Some(Gender::Feminine) && lemma.ends_with('ь') {
            Declension::Third
        } else if lemma.ends_with("мя") {
            Declension::Heteroclitic
        } else if lemma.ends_with(['а', 'я']) {
            Declension::First
        } else if lemma.ends_with(['о', 'е']) || gender == Some(Gender::Neuter) {
            if self.is_indeclinable(lemma) {
                Declension::Indeclinable
            } else {
                Declension::Second
            }
        } else {
            Declension::First
        }
    }

    fn conjugation(&self, lemma: &str) -> Conjugation {
        if self.conjugation_exceptions.contains(lemma) {
            return Conjugation::Second;
        }
        if self
            .second_conjugation_endings
            .iter()
            .any(|ending| lemma.ends_with(ending.as_str()))
        {
            Conjugation::Second
        } else {
            Conjugation::First
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{Case, FeatureRecord, Mood, Number, PartOfSpeech};

    #[test]
    fn test_declension_corrected_order() {
        let ru = Russian::default();
        // -мя is checked before -а/-я, and the indeclinable list before -о/-е;
        // время and кофе would land in 1st and 2nd otherwise
        assert_eq!(ru.declension("время", Some(Gender::Neuter)), Declension::Heteroclitic);
        assert_eq!(ru.declension("кофе", Some(Gender::Masculine)), Declension::Indeclinable);
    }

    #[test]
    fn test_declension() {
        let ru = Russian::default();
        let cases = [
            ("книга", Some(Gender::Feminine), Declension::First),
            ("дядя", Some(Gender::Masculine), Declension::First),
            ("окно", Some(Gender::Neuter), Declension::Second),
            ("поле", Some(Gender::Neuter), Declension::Second),
            ("ночь", Some(Gender::Feminine), Declension::Third),
            ("время", Some(Gender::Neuter), Declension::Heteroclitic),
            ("имя", None, Declension::Heteroclitic),
            ("кофе", Some(Gender::Masculine), Declension::Indeclinable),
            ("метро", Some(Gender::Neuter), Declension::Indeclinable),
            // masculine in -ь and consonant stems fall through to the default
            ("день", Some(Gender::Masculine), Declension::First),
            ("стол", Some(Gender::Masculine), Declension::First),
        ];
        for (lemma, gender, expected) in cases {
            assert_eq!(ru.declension(lemma, gender), expected, "lemma {}", lemma);
        }
    }

    #[test]
    fn test_neuter_without_vowel_ending() {
        let ru = Russian::default();
        assert_eq!(ru.declension("дитя", Some(Gender::Neuter)), Declension::First);
        assert_eq!(ru.declension("тсс", Some(Gender::Neuter)), Declension::Second);
    }

    #[test]
    fn test_conjugation() {
        let ru = Russian::default();
        assert_eq!(ru.conjugation("любить"), Conjugation::Second);
        assert_eq!(ru.conjugation("брить"), Conjugation::Second);
        assert_eq!(ru.conjugation("зиждиться"), Conjugation::Second);
        assert_eq!(ru.conjugation("читать"), Conjugation::Second);
        assert_eq!(ru.conjugation("нести"), Conjugation::First);
        assert_eq!(ru.conjugation("беречь"), Conjugation::First);
        assert_eq!(ru.conjugation("мыть"), Conjugation::First);
    }

    #[test]
    fn test_configured_lists() {
        let config = RulesConfig {
            indeclinable_nouns: Some(vec!["пальто".to_string()]),
            second_conjugation_endings: Some(vec!["ить".to_string()]),
            ..Default::default()
        };
        let ru = Russian::from_config(&config);

        assert_eq!(ru.declension("пальто", None), Declension::Indeclinable);
        assert_eq!(ru.declension("кофе", None), Declension::Second);
        assert_eq!(ru.conjugation("читать"), Conjugation::First);
        assert_eq!(ru.conjugation("брить"), Conjugation::Second);
    }

    #[test]
    fn test_apply_rules_only_touches_qualifying_records() {
        let ru = Russian::default();

        let mut noun = FeatureRecord {
            pos: Some(PartOfSpeech::Noun),
            case: Some(Case::Nominative),
            number: Some(Number::Singular),
            gender: Some(Gender::Feminine),
            ..FeatureRecord::new("книга")
        };
        ru.apply_rules(&mut noun);
        assert_eq!(noun.declension, Some(Declension::First));
        assert_eq!(noun.conjugation, None);

        let mut oblique = FeatureRecord {
            case: Some(Case::Genitive),
            ..noun.clone()
        };
        oblique.declension = None;
        ru.apply_rules(&mut oblique);
        assert_eq!(oblique.declension, None);

        let mut infinitive = FeatureRecord {
            pos: Some(PartOfSpeech::Verb),
            mood: Some(Mood::Infinitive),
            ..FeatureRecord::new("любить")
        };
        ru.apply_rules(&mut infinitive);
        assert_eq!(infinitive.conjugation, Some(Conjugation::Second));
        assert_eq!(infinitive.declension, None);

        let mut finite = FeatureRecord {
            pos: Some(PartOfSpeech::Verb),
            mood: Some(Mood::Indicative),
            ..FeatureRecord::new("любить")
        };
        ru.apply_rules(&mut finite);
        assert_eq!(finite.conjugation, None);
    }
}
