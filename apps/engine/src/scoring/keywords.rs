//! Keyword extraction from job descriptions and keyword scoring of résumés.

use std::collections::HashMap;

use regex::Regex;

use crate::models::KeywordHit;
use crate::text::fuzzy::fuzzy_eq;
use crate::text::{self, Stopwords};

/// Keyword sets are capped at the top 20 terms by frequency.
pub const KEYWORD_LIMIT: usize = 20;

const FUZZY_KEYWORD_THRESHOLD: f64 = 0.85;

/// Derives a ranked keyword set from a job description: frequency descending,
/// ties broken by first occurrence, at most [`KEYWORD_LIMIT`] terms.
///
/// Empty or whitespace-only input yields an empty set, not an error.
pub fn extract_keywords(description: &str, stopwords: &Stopwords) -> Vec<String> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut ranked: Vec<String> = Vec::new();

    for token in text::tokenize(description, stopwords) {
        match counts.get_mut(&token) {
            Some(count) => *count += 1,
            None => {
                counts.insert(token.clone(), 1);
                ranked.push(token);
            }
        }
    }

    // Stable sort: equal counts keep their first-occurrence order.
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
    ranked.truncate(KEYWORD_LIMIT);
    ranked
}

/// Outcome of scoring a résumé against a keyword set.
#[derive(Debug, Clone)]
pub struct KeywordReport {
    pub matched: Vec<KeywordHit>,
    pub missing: Vec<String>,
    /// `matched / total * 100`, or 0 for an empty keyword set.
    pub score: f64,
}

/// Scores a résumé against an extracted keyword set.
///
/// Each keyword is first counted with a word-boundary match over the
/// lowercased résumé; keywords with no exact occurrence get one fuzzy pass
/// over whitespace-split résumé tokens before being declared missing.
pub fn match_keywords(keywords: &[String], resume_text: &str) -> KeywordReport {
    let resume_lower = resume_text.to_lowercase();
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for keyword in keywords {
        let keyword_lower = keyword.to_lowercase();

        let count = exact_occurrences(&resume_lower, &keyword_lower);
        if count > 0 {
            matched.push(KeywordHit {
                keyword: keyword.clone(),
                count,
            });
            continue;
        }

        let fuzzy_found = resume_lower
            .split_whitespace()
            .any(|word| fuzzy_eq(word, &keyword_lower, FUZZY_KEYWORD_THRESHOLD));

        if fuzzy_found {
            matched.push(KeywordHit {
                keyword: keyword.clone(),
                count: 1,
            });
        } else {
            missing.push(keyword.clone());
        }
    }

    let score = if keywords.is_empty() {
        0.0
    } else {
        matched.len() as f64 / keywords.len() as f64 * 100.0
    };

    KeywordReport {
        matched,
        missing,
        score,
    }
}

/// Counts word-boundary-delimited occurrences of `keyword_lower`.
///
/// The keyword is escaped before compilation: keyword text is untrusted
/// free-form input and must never be interpreted as pattern syntax.
fn exact_occurrences(haystack_lower: &str, keyword_lower: &str) -> u32 {
    if keyword_lower.is_empty() {
        return 0;
    }

    let pattern = format!(r"\b{}\b", regex::escape(keyword_lower));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(haystack_lower).count() as u32,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_extract_ranks_by_frequency() {
        let stopwords = Stopwords::default();
        let extracted = extract_keywords(
            "rust rust rust tokio tokio async runtime",
            &stopwords,
        );
        assert_eq!(extracted, vec!["rust", "tokio", "async", "runtime"]);
    }

    #[test]
    fn test_extract_breaks_ties_by_first_occurrence() {
        let stopwords = Stopwords::default();
        let extracted = extract_keywords("zebra apple zebra apple mango", &stopwords);
        assert_eq!(extracted, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_extract_caps_at_twenty() {
        let stopwords = Stopwords::default();
        let description: String = (0..30)
            .map(|n| format!("keyword{n:02} "))
            .collect();
        let extracted = extract_keywords(&description, &stopwords);
        assert_eq!(extracted.len(), KEYWORD_LIMIT);
    }

    #[test]
    fn test_extract_returns_all_when_fewer_than_twenty() {
        let stopwords = Stopwords::default();
        let extracted = extract_keywords("backend engineer python", &stopwords);
        assert_eq!(extracted.len(), 3);
    }

    #[test]
    fn test_extract_empty_input_yields_empty_set() {
        let stopwords = Stopwords::default();
        assert!(extract_keywords("", &stopwords).is_empty());
        assert!(extract_keywords("   \n ", &stopwords).is_empty());
    }

    #[test]
    fn test_match_counts_exact_occurrences() {
        let report = match_keywords(
            &keywords(&["python", "react", "docker"]),
            "I have 5 years of Python and Docker experience",
        );

        assert_eq!(
            report.matched,
            vec![
                KeywordHit {
                    keyword: "python".into(),
                    count: 1
                },
                KeywordHit {
                    keyword: "docker".into(),
                    count: 1
                },
            ]
        );
        assert_eq!(report.missing, vec!["react"]);
        assert!((report.score - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_match_counts_repeated_occurrences() {
        let report = match_keywords(
            &keywords(&["python"]),
            "Python services. More Python. python everywhere.",
        );
        assert_eq!(report.matched[0].count, 3);
    }

    #[test]
    fn test_match_falls_back_to_fuzzy_on_typos() {
        // "pyton" has no exact word-boundary hit but clears the 0.85 ratio
        let report = match_keywords(&keywords(&["python"]), "expert in pyton scripting");
        assert_eq!(
            report.matched,
            vec![KeywordHit {
                keyword: "python".into(),
                count: 1
            }]
        );
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_match_empty_keyword_set_scores_zero() {
        let report = match_keywords(&[], "any resume text");
        assert_eq!(report.score, 0.0);
        assert!(report.matched.is_empty());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_match_score_bounds() {
        let all = match_keywords(&keywords(&["rust"]), "rust developer");
        assert_eq!(all.score, 100.0);

        let none = match_keywords(&keywords(&["haskell"]), "rust developer");
        assert_eq!(none.score, 0.0);
    }

    #[test]
    fn test_regex_metacharacters_in_keywords_are_literal() {
        // Must neither panic nor match everything
        let report = match_keywords(
            &keywords(&["c++", "(urgent)", "a.b"]),
            "familiar with acb and urgency",
        );
        assert_eq!(report.matched.len(), 0);
        assert_eq!(report.missing.len(), 3);
    }

    #[test]
    fn test_matching_is_idempotent() {
        let set = keywords(&["python", "docker"]);
        let resume = "Python and Docker in production";
        let first = match_keywords(&set, resume);
        let second = match_keywords(&set, resume);
        assert_eq!(first.score, second.score);
        assert_eq!(first.matched, second.matched);
    }
}
