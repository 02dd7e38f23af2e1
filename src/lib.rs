pub mod config;
pub mod convert;
pub mod corpus;
pub mod data;
pub mod error;
pub mod features;
pub mod languages;
pub mod lexicon;
pub mod tagger;
pub mod token;

pub use config::RulesConfig;
pub use convert::{Conversion, Converter};
pub use error::{Error, Result};
pub use features::FeatureRecord;
pub use lexicon::{Blocklist, Lexicon, LexiconBuilder, LexiconDocument};
pub use tagger::TagClassifier;
pub use token::CorpusToken;
