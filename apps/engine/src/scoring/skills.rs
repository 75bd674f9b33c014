//! Skill scoring — weighted matching of a job's required skills against a
//! résumé, with a synonym table for the spellings candidates actually use.

use std::collections::HashMap;

use crate::models::RequiredSkill;
use crate::text::fuzzy::fuzzy_eq;

const FUZZY_SKILL_THRESHOLD: f64 = 0.85;

/// Common spelling variations for tech skills, keyed by canonical name.
/// Key lookup is case-sensitive; the variation comparison against résumé
/// text is not.
#[derive(Debug, Clone)]
pub struct SynonymTable(HashMap<&'static str, Vec<&'static str>>);

impl Default for SynonymTable {
    fn default() -> Self {
        Self(HashMap::from([
            ("JavaScript", vec!["JS", "ECMAScript", "ES6", "ES2015"]),
            ("TypeScript", vec!["TS"]),
            ("Python", vec!["Py"]),
            ("React", vec!["ReactJS", "React.js"]),
            ("Node.js", vec!["Node", "NodeJS"]),
            ("MongoDB", vec!["Mongo"]),
            ("PostgreSQL", vec!["Postgres", "PSQL"]),
            ("Machine Learning", vec!["ML"]),
            ("Artificial Intelligence", vec!["AI"]),
            ("Natural Language Processing", vec!["NLP"]),
            ("Kubernetes", vec!["K8s"]),
            ("Docker", vec!["Containerization"]),
            ("AWS", vec!["Amazon Web Services"]),
            ("GCP", vec!["Google Cloud Platform"]),
            ("Azure", vec!["Microsoft Azure"]),
        ]))
    }
}

impl SynonymTable {
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    pub fn variations(&self, skill: &str) -> &[&'static str] {
        self.0.get(skill).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Outcome of scoring a résumé against a required-skills list.
#[derive(Debug, Clone)]
pub struct SkillReport {
    /// Skill names in their original casing.
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// `matched_weight / total_weight * 100`, or 0 when no skills are listed.
    pub score: f64,
}

/// Scores a résumé against importance-weighted required skills.
///
/// Match precedence per skill, first hit wins: substring containment of the
/// name, containment of any synonym-table variation, then a fuzzy token
/// match for typos.
pub fn match_skills(
    skills: &[RequiredSkill],
    resume_text: &str,
    synonyms: &SynonymTable,
) -> SkillReport {
    let resume_lower = resume_text.to_lowercase();
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut total_weight = 0.0;
    let mut matched_weight = 0.0;

    for skill in skills {
        let weight = skill.importance.weight();
        total_weight += weight;

        if resume_mentions(&resume_lower, &skill.name, synonyms) {
            matched.push(skill.name.clone());
            matched_weight += weight;
        } else {
            missing.push(skill.name.clone());
        }
    }

    let score = if total_weight > 0.0 {
        matched_weight / total_weight * 100.0
    } else {
        0.0
    };

    SkillReport {
        matched,
        missing,
        score,
    }
}

fn resume_mentions(resume_lower: &str, skill_name: &str, synonyms: &SynonymTable) -> bool {
    let name_lower = skill_name.to_lowercase();

    if resume_lower.contains(&name_lower) {
        return true;
    }

    if synonyms
        .variations(skill_name)
        .iter()
        .any(|variation| resume_lower.contains(&variation.to_lowercase()))
    {
        return true;
    }

    resume_lower
        .split_whitespace()
        .any(|word| fuzzy_eq(word, &name_lower, FUZZY_SKILL_THRESHOLD))
}
