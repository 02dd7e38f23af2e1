use std::fs::read_to_string;
use std::path::Path;

use tracing::{debug, info};

use crate::config::RulesConfig;
use crate::corpus::CorpusReader;
use crate::error::Result;
use crate::lexicon::{ConversionStats, LexiconBuilder, LexiconDocument, SOURCE};

/// Result of converting one corpus dump.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: LexiconDocument,
    pub stats: ConversionStats,
}

/// Turns an OpenCorpora dump into a lexicon document.
pub struct Converter {
    reader: CorpusReader,
    config: RulesConfig,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl Converter {
    pub fn new(config: RulesConfig) -> Self {
        Self {
            reader: CorpusReader::new(),
            config,
        }
    }

    pub fn convert(&self, xml: &str) -> Result<Conversion> {
        let header = self.reader.header(xml)?;
        debug!("corpus version '{}', revision '{}'", header.version, header.revision);

        let mut builder = LexiconBuilder::new(&self.config);
        for token in self.reader.tokens(xml) {
            builder.add(&token);
        }
        let (lexicon, stats) = builder.finish();

        info!(
            "extracted {} unique words from {} tokens ({} skipped)",
            lexicon.len(),
            stats.tokens,
            stats.skipped()
        );

        Ok(Conversion {
            document: LexiconDocument::new(SOURCE, &header, lexicon),
            stats,
        })
    }

    pub fn convert_path<P: AsRef<Path>>(&self, path: P) -> Result<Conversion> {
        let path = path.as_ref();
        info!("parsing {}", path.display());
        let xml = read_to_string(path)?;
        self.convert(&xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::features::{Conjugation, Declension, PartOfSpeech};

    const CORPUS: &str = r#"<annotation version="0.12" revision="100">
<text id="1"><paragraphs><paragraph id="1"><sentence id="1"><tokens>
<token id="1" text="Время"><tfr><v><l id="1" t="время"><g v="NOUN"/><g v="inan"/><g v="neut"/><g v="sing"/><g v="nomn"/></l></v></tfr></token>
<token id="2" text="любить"><tfr><v><l id="2" t="любить"><g v="INFN"/><g v="impf"/><g v="tran"/></l></v></tfr></token>
<token id="3" text="."><tfr><v><l id="3" t="."><g v="PNCT"/></l></v></tfr></token>
<token id="4" text="время"><tfr><v><l id="1" t="время"><g v="NOUN"/><g v="accs"/></l></v></tfr></token>
</tokens></sentence></paragraph></paragraphs></text>
</annotation>"#;

    #[test]
    fn test_convert() {
        let conversion = Converter::default().convert(CORPUS).unwrap();
        let metadata = &conversion.document.metadata;

        assert_eq!(metadata.revision, "100");
        assert_eq!(metadata.total_words, 2);

        let noun = metadata.words.get("время").unwrap();
        assert_eq!(noun.declension, Some(Declension::Heteroclitic));

        let verb = metadata.words.get("любить").unwrap();
        assert_eq!(verb.pos, Some(PartOfSpeech::Verb));
        assert_eq!(verb.conjugation, Some(Conjugation::Second));

        assert_eq!(conversion.stats.tokens, 4);
        assert_eq!(conversion.stats.filtered, 1);
        assert_eq!(conversion.stats.duplicates, 1);
    }

    #[test]
    fn test_convert_rejects_non_corpus() {
        let err = Converter::default().convert("{}").unwrap_err();
        assert!(matches!(err, Error::MalformedCorpus(_)));
    }
}
