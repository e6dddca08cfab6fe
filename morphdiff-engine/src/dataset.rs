//! Fixed sample word lists

use morphdiff_core::{Language, WordList};

/// English demonstration words
pub const ENGLISH_SAMPLE: [&str; 8] = [
    "running", "jumped", "better", "happiest", "studies", "mice", "was", "are",
];

/// Russian demonstration words
pub const RUSSIAN_SAMPLE: [&str; 8] = [
    "бежавший",
    "стоял",
    "лучше",
    "счастливейший",
    "учусь",
    "мыши",
    "был",
    "есть",
];

/// Sample word list for `language`
pub fn sample(language: Language) -> WordList {
    match language {
        Language::English => WordList::new(language, ENGLISH_SAMPLE),
        Language::Russian => WordList::new(language, RUSSIAN_SAMPLE),
    }
}

/// Sample lists for every supported language, in display order
pub fn samples() -> Vec<WordList> {
    Language::ALL.into_iter().map(sample).collect()
}
