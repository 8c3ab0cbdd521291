//! Shapes the views derive from fetched collections.

use std::collections::HashSet;

use super::entities::{Experience, Skill};

/// Pseudo-category that selects every skill.
pub const ALL_CATEGORIES: &str = "All";

/// Distinct company names, in the order the backend listed them.
pub fn unique_companies(experiences: &[Experience]) -> Vec<String> {
    first_seen(experiences.iter().map(|e| e.company.as_str()))
}

/// Distinct skill categories, in the order the backend listed them.
pub fn skill_categories(skills: &[Skill]) -> Vec<String> {
    first_seen(skills.iter().map(|s| s.category.as_str()))
}

pub fn skills_in_category<'a>(skills: &'a [Skill], category: &str) -> Vec<&'a Skill> {
    skills
        .iter()
        .filter(|s| category == ALL_CATEGORIES || s.category == category)
        .collect()
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn skill(id: i64, category: &str, name: &str) -> Skill {
        Skill {
            id,
            category: category.to_string(),
            skill: name.to_string(),
            description: String::new(),
            icon_name: name.to_lowercase(),
            icon_color: "#fff".to_string(),
        }
    }

    fn job(id: i64, company: &str) -> Experience {
        Experience {
            id,
            company: company.to_string(),
            role: "Engineer".to_string(),
            start_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap().into(),
            end_date: None,
            location: String::new(),
            achievements: vec![],
        }
    }

    #[test]
    fn companies_deduplicated_in_order() {
        let jobs = vec![job(1, "Norstella"), job(2, "Acme"), job(3, "Norstella")];

        assert_eq!(unique_companies(&jobs), vec!["Norstella", "Acme"]);
    }

    #[test]
    fn categories_deduplicated_in_order() {
        let skills = vec![
            skill(1, "Languages", "Rust"),
            skill(2, "Cloud", "AWS"),
            skill(3, "Languages", "Go"),
        ];

        assert_eq!(skill_categories(&skills), vec!["Languages", "Cloud"]);
    }

    #[test]
    fn category_filter() {
        let skills = vec![
            skill(1, "Languages", "Rust"),
            skill(2, "Cloud", "AWS"),
            skill(3, "Languages", "Go"),
        ];

        let languages: Vec<i64> = skills_in_category(&skills, "Languages")
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(languages, vec![1, 3]);
        assert_eq!(skills_in_category(&skills, ALL_CATEGORIES).len(), 3);
        assert!(skills_in_category(&skills, "Databases").is_empty());
    }
}
