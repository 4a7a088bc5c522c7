use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::text::tokenize;
use crate::types::{Importance, KeywordMatch};

/// Extraction never returns more than this many keywords.
pub const MAX_KEYWORDS: usize = 20;

/// Adjacent-pair terms get a ranking boost over single words; multi-word
/// technical and role terms carry more signal than generic nouns.
const BIGRAM_BOOST: f64 = 1.5;

/// Common English words excluded from keyword ranking. Includes a few
/// resume-specific noise words ("work", "experience", "ability").
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can",
    "need", "dare", "ought", "used", "this", "that", "these", "those", "i", "me", "my", "we",
    "our", "you", "your", "he", "him", "his", "she", "her", "it", "its", "they", "them", "their",
    "what", "which", "who", "whom", "not", "no", "nor", "so", "if", "then", "than", "too", "very",
    "just", "also", "about", "up", "out", "into", "over", "after", "before", "between", "under",
    "above", "such", "each", "every", "all", "both", "any", "few", "more", "most", "other",
    "some", "only", "own", "same", "work", "working", "experience", "ability", "able", "etc",
    "including", "include",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Counts occurrences while remembering first-seen order, so that ranking
/// ties resolve deterministically by first appearance in the text.
#[derive(Default)]
struct OrderedCounter {
    counts: HashMap<String, u32>,
    order: Vec<String>,
}

impl OrderedCounter {
    fn bump(&mut self, term: &str) {
        match self.counts.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(term.to_string(), 1);
                self.order.push(term.to_string());
            }
        }
    }

    fn into_ordered(self) -> Vec<(String, u32)> {
        let Self { counts, order } = self;
        order
            .into_iter()
            .map(|term| {
                let count = counts[&term];
                (term, count)
            })
            .collect()
    }
}

/// Derives the ranked keyword set from job-description text: unigram and
/// bigram frequencies (stop words excluded, unigrams must be >2 chars),
/// bigrams boosted, stable-sorted by weighted frequency, top 20 kept and
/// tiered by rank. Returned matches start with `found = false`.
pub fn extract_keywords(jd_text: &str) -> Vec<KeywordMatch> {
    let words = tokenize(jd_text);

    let mut unigrams = OrderedCounter::default();
    for word in &words {
        if !is_stop_word(word) && word.chars().count() > 2 {
            unigrams.bump(word);
        }
    }

    let mut bigrams = OrderedCounter::default();
    for pair in words.windows(2) {
        if !is_stop_word(&pair[0]) && !is_stop_word(&pair[1]) {
            bigrams.bump(&format!("{} {}", pair[0], pair[1]));
        }
    }

    let mut ranked: Vec<(String, f64)> = unigrams
        .into_ordered()
        .into_iter()
        .map(|(term, count)| (term, f64::from(count)))
        .chain(
            bigrams
                .into_ordered()
                .into_iter()
                .map(|(term, count)| (term, f64::from(count) * BIGRAM_BOOST)),
        )
        .collect();

    // Stable sort keeps first-seen order among equal weights.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(MAX_KEYWORDS);

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, (keyword, weight))| KeywordMatch {
            keyword,
            found: false,
            frequency: 0,
            required_frequency: ((weight / 2.0).floor() as u32).max(1),
            importance: match rank {
                0..=6 => Importance::High,
                7..=13 => Importance::Medium,
                _ => Importance::Low,
            },
        })
        .collect()
}

/// Fills in `found`/`frequency` for each keyword against the resume text.
/// Unigrams are looked up in a token frequency map; bigrams are counted as
/// non-overlapping substring occurrences of the lowercased raw text.
pub fn match_keywords(resume_text: &str, keywords: &[KeywordMatch]) -> Vec<KeywordMatch> {
    let resume_lower = resume_text.to_lowercase();
    let mut word_counts: HashMap<String, u32> = HashMap::new();
    for word in tokenize(resume_text) {
        *word_counts.entry(word).or_insert(0) += 1;
    }

    keywords
        .iter()
        .map(|keyword| {
            let term = keyword.keyword.to_lowercase();
            let frequency = if term.contains(' ') {
                count_substring(&resume_lower, &term)
            } else {
                word_counts.get(&term).copied().unwrap_or(0)
            };
            KeywordMatch {
                found: frequency > 0,
                frequency,
                ..keyword.clone()
            }
        })
        .collect()
}

fn count_substring(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        count += 1;
        start += pos + needle.len();
    }
    count
}
