use std::fs;

use opencorpora_lexicon::features::{Declension, Person};
use opencorpora_lexicon::lexicon::{OPTIMIZED_SOURCE, OptimizeLimits, PRUNED_SOURCE};
use opencorpora_lexicon::{Blocklist, Converter, LexiconDocument, RulesConfig};

const CORPUS: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>
<annotation version="0.12" revision="4191054">
<text id="1" parent="0" name="Тест">
<paragraphs><paragraph id="1"><sentence id="1"><source>Кофе и кофе, я иду в кафе.</source><tokens>
<token id="1" text="Кофе"><tfr rev_id="1" t="Кофе"><v><l id="10" t="кофе"><g v="NOUN"/><g v="inan"/><g v="masc"/><g v="Fixd"/><g v="sing"/><g v="nomn"/></l></v></tfr></token>
<token id="2" text="и"><tfr rev_id="2" t="и"><v><l id="11" t="и"><g v="CONJ"/></l></v></tfr></token>
<token id="3" text="кофе"><tfr rev_id="3" t="кофе"><v><l id="10" t="кофе"><g v="NOUN"/><g v="gent"/></l></v></tfr></token>
<token id="4" text=","><tfr rev_id="4" t=","><v><l id="0" t=","><g v="PNCT"/></l></v></tfr></token>
<token id="5" text="я"><tfr rev_id="5" t="я"><v><l id="12" t="я"><g v="NPRO"/><g v="1per"/><g v="sing"/><g v="nomn"/></l></v></tfr></token>
<token id="6" text="иду"><tfr rev_id="6" t="иду"><v><l id="13" t="идти"><g v="VERB"/><g v="impf"/><g v="intr"/><g v="sing"/><g v="1per"/><g v="pres"/><g v="indc"/></l></v></tfr></token>
<token id="7" text="в"><tfr rev_id="7" t="в"><v><l id="14" t="в"><g v="PREP"/></l></v></tfr></token>
<token id="8" text="кафе"><tfr rev_id="8" t="кафе"><v><l id="15" t="кафе"><g v="NOUN"/><g v="inan"/><g v="neut"/><g v="Fixd"/><g v="sing"/><g v="loct"/></l></v></tfr></token>
<token id="9" text="."><tfr rev_id="9" t="."><v><l id="0" t="."><g v="PNCT"/></l></v></tfr></token>
</tokens></sentence></paragraph></paragraphs>
</text>
</annotation>
"#;

#[test]
fn convert_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("corpus.xml");
    let output = dir.path().join("lexicon.json");
    fs::write(&input, CORPUS).unwrap();

    let conversion = Converter::default().convert_path(&input).unwrap();
    conversion.document.save(&output, true).unwrap();

    let document = LexiconDocument::from_path(&output).unwrap();
    assert_eq!(document, conversion.document);

    let metadata = &document.metadata;
    assert_eq!(metadata.source, "OpenCorpora");
    assert_eq!(metadata.version, "0.12");
    assert_eq!(metadata.total_words, 5);

    let words: Vec<&str> = metadata.words.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, ["кофе", "и", "я", "иду", "кафе"]);

    let coffee = metadata.words.get("кофе").unwrap();
    assert_eq!(coffee.declension, Some(Declension::Indeclinable));

    // only the nominative singular gets a declension
    assert_eq!(metadata.words.get("кафе").unwrap().declension, None);

    let verb = metadata.words.get("иду").unwrap();
    assert_eq!(verb.lemma(), "идти");
    assert_eq!(verb.person, Some(Person::First));
    assert_eq!(verb.conjugation, None);

    assert_eq!(conversion.stats.tokens, 9);
    assert_eq!(conversion.stats.filtered, 3);
    assert_eq!(conversion.stats.duplicates, 1);
}

#[test]
fn serialized_person_is_a_string() {
    let conversion = Converter::default().convert(CORPUS).unwrap();
    let json = serde_json::to_value(&conversion.document).unwrap();
    assert_eq!(json["metadata"]["words"]["я"]["person"], "1");
    assert_eq!(json["metadata"]["words"]["я"]["pos"], "PRONOUN");
}

#[test]
fn rules_file_changes_inference() {
    let config = RulesConfig::from_toml("indeclinable_nouns = []").unwrap();
    let conversion = Converter::new(config).convert(CORPUS).unwrap();
    let coffee = conversion.document.metadata.words.get("кофе").unwrap();
    assert_eq!(coffee.declension, Some(Declension::Second));
}

#[test]
fn optimize_drops_uncapped_parts_of_speech() {
    let conversion = Converter::default().convert(CORPUS).unwrap();
    let optimized = conversion.document.optimize(&OptimizeLimits::default());

    assert_eq!(optimized.metadata.source, OPTIMIZED_SOURCE);
    assert_eq!(optimized.metadata.revision, "4191054");
    // the pronoun has no cap and is dropped
    assert_eq!(optimized.metadata.total_words, 4);
    assert!(!optimized.metadata.words.contains("я"));
}

#[test]
fn prune_from_rules_file() {
    let dir = tempfile::tempdir().unwrap();
    let rules = dir.path().join("rules.toml");
    fs::write(&rules, "blocked_words = [\"кофе\"]\nblocked_fragments = [\"аф\"]\n").unwrap();

    let conversion = Converter::default().convert(CORPUS).unwrap();
    let blocklist = RulesConfig::from_path(&rules).unwrap().blocklist();
    let (pruned, removed) = conversion.document.prune(&blocklist);

    assert_eq!(removed, ["кофе", "кафе"]);
    assert_eq!(pruned.metadata.source, PRUNED_SOURCE);
    assert_eq!(pruned.metadata.version, "0.12");
    assert_eq!(pruned.metadata.total_words, 3);

    let words: Vec<&str> = pruned.metadata.words.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, ["и", "я", "иду"]);

    let (unchanged, removed) = pruned.prune(&Blocklist::default());
    assert!(removed.is_empty());
    assert_eq!(unchanged.metadata.words, pruned.metadata.words);
}
