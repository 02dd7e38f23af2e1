//! Built-in word lists for Russian declension and conjugation inference.

/// Grammemes that exclude a token from the lexicon: punctuation,
/// prepositions and particles.
pub const SKIP_TAGS: &[&str] = &["PNCT", "PREP", "PRCL"];

/// Borrowed nouns ending in -о/-е that do not inflect.
pub const INDECLINABLE_NOUNS: &[&str] = &[
    "кофе", "какао", "радио", "метро", "кино", "кабаре", "бюро", "депо", "фойе", "ателье",
    "кафе", "пенсне", "колье",
];

/// Infinitives classified as 2nd conjugation regardless of their ending.
pub const SECOND_CONJUGATION_EXCEPTIONS: &[&str] = &["брить", "стелить", "зиждиться"];

/// Infinitive endings classified as 2nd conjugation.
///
/// `ать` is kept here to stay compatible with existing lexicon dumps, even
/// though school grammar puts most such verbs in the 1st conjugation.
pub const SECOND_CONJUGATION_ENDINGS: &[&str] = &["ить", "ать", "ять", "еть", "уть", "оть"];

/// Word forms removed by [`crate::lexicon::Lexicon::prune`].
pub const BLOCKED_WORDS: &[&str] = &[
    "порнограф", "порнография", "секс", "сексуальный", "проститутка", "проституция",
    "наркотик", "наркотики", "кокаин", "героин", "марихуана", "гашиш", "наркота",
    "алкоголь", "водка", "пиво", "вино", "пьяный", "пьянство",
    "убийство", "убийца", "самоубийство", "самоубийца", "смерть", "труп",
    "насилие", "изнасилование", "изнасиловать", "насиловать",
    "терроризм", "террорист", "бомба", "взрыв", "убивать",
    "вор", "кража", "украсть", "грабеж", "грабитель",
    "преступление", "преступник", "тюрьма", "арест", "арестовать",
    "курение", "сигарета", "табак", "курить",
    "азарт", "казино", "ставка", "ставки",
    "коррупция", "взятка", "взятки", "коррумпированный",
    "суицид", "суицидальный", "депрессия", "психиатрия",
];

/// Substrings that remove any word form containing them.
pub const BLOCKED_FRAGMENTS: &[&str] = &[
    "порн", "секс", "нарк", "алког", "убий", "насил", "терр", "взрыв", "бомб", "суицид",
];

pub fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
