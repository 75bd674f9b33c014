//! Résumé profile extraction — contact details and stated experience pulled
//! from plain text with cheap heuristics. Extraction never fails; a résumé
//! that yields nothing produces an empty profile.

use regex::Regex;

/// Candidate details recoverable from résumé text alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub years_of_experience: u32,
}

pub fn extract_profile(text: &str) -> ResumeProfile {
    ResumeProfile {
        name: extract_name(text),
        email: extract_email(text),
        years_of_experience: extract_experience_years(text),
    }
}

/// First email address in the text, if any.
pub fn extract_email(text: &str) -> Option<String> {
    let re = Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").ok()?;
    re.find(text).map(|m| m.as_str().to_string())
}

/// Heuristic name pick: the first of the opening five non-empty lines that
/// is short and purely alphabetic.
pub fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(5)
        .find(|line| {
            line.len() < 50
                && line
                    .chars()
                    .all(|c| c.is_alphabetic() || c.is_whitespace())
        })
        .map(str::to_string)
}

/// Largest plausible years-of-experience figure stated in the text.
///
/// Looks for "5 years", "5+ years of experience", "experience: 7 years".
/// Figures of 50 and above are treated as noise (dates, percentages).
pub fn extract_experience_years(text: &str) -> u32 {
    let patterns = [
        r"(?i)(\d+)\+?\s*years?\s*(?:of\s*)?(?:experience)?",
        r"(?i)experience[:\s]+(\d+)\+?\s*years?",
    ];

    let mut max_years = 0u32;
    for pattern in patterns {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(_) => continue,
        };
        for caps in re.captures_iter(text) {
            let years = caps
                .get(1)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .unwrap_or(0);
            if years > 0 && years < 50 {
                max_years = max_years.max(years);
            }
        }
    }

    max_years
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\
Jane Doe
Senior Backend Engineer
jane.doe@example.com | San Francisco

8 years of experience building distributed systems.
Previously: 3 years at a fintech startup.";

    #[test]
    fn test_extracts_email() {
        assert_eq!(extract_email(RESUME).as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_no_email_yields_none() {
        assert_eq!(extract_email("no contact details here"), None);
    }

    #[test]
    fn test_extracts_name_from_opening_lines() {
        assert_eq!(extract_name(RESUME).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_name_skips_long_and_non_alphabetic_lines() {
        let text = "123 Main St, Apt 4\nReach me at +1-555-0100\nJohn Smith\n";
        assert_eq!(extract_name(text).as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_extracts_maximum_stated_years() {
        assert_eq!(extract_experience_years(RESUME), 8);
    }

    #[test]
    fn test_years_with_plus_suffix() {
        assert_eq!(extract_experience_years("10+ years of Python"), 10);
    }

    #[test]
    fn test_implausible_year_figures_are_ignored() {
        assert_eq!(extract_experience_years("spanning 100 years of history"), 0);
    }

    #[test]
    fn test_no_stated_experience_is_zero() {
        assert_eq!(extract_experience_years("fresh graduate, eager to learn"), 0);
    }

    #[test]
    fn test_full_profile() {
        let profile = extract_profile(RESUME);
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(profile.years_of_experience, 8);
    }
}
