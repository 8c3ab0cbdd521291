use chrono::{TimeZone, Utc};
use maplit::btreemap;

use crate::modules::portfolio::domain::{Certification, Experience, Profile, Project, Skill};

pub fn sample_profile() -> Profile {
    Profile {
        id: 1,
        name: "Jane Doe".to_string(),
        title: "Software Engineer".to_string(),
        subtitle: "Building data platforms".to_string(),
        about_me: "I like fast feedback loops.".to_string(),
        resume_url: "https://assets.example.com/cv.pdf".to_string(),
        social_links: btreemap! {
            "github".to_string() => "https://github.com/jane".to_string(),
            "linkedin".to_string() => "https://linkedin.com/in/jane".to_string(),
        },
    }
}

pub fn sample_experience() -> Vec<Experience> {
    vec![
        Experience {
            id: 2,
            company: "Norstella".to_string(),
            role: "Software Engineer".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap().into(),
            end_date: None,
            location: "Remote".to_string(),
            achievements: vec!["Cut processing time by 95%".to_string()],
        },
        Experience {
            id: 1,
            company: "Acme".to_string(),
            role: "Intern".to_string(),
            start_date: Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap().into(),
            end_date: Some(Utc.with_ymd_and_hms(2021, 6, 30, 0, 0, 0).unwrap().into()),
            location: "Boston, MA".to_string(),
            achievements: vec![],
        },
    ]
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "RAG Pipeline".to_string(),
            description: "Retrieval over filings".to_string(),
            tech_stack: vec!["Python".to_string(), "Postgres".to_string()],
            repo_link: "https://github.com/jane/rag".to_string(),
            live_link: String::new(),
            featured: true,
            display_order: 1,
        },
        Project {
            id: 2,
            title: "Dotfiles".to_string(),
            description: "Shell setup".to_string(),
            tech_stack: vec!["Nix".to_string()],
            repo_link: String::new(),
            live_link: String::new(),
            featured: false,
            display_order: 2,
        },
    ]
}

pub fn featured_projects() -> Vec<Project> {
    sample_projects().into_iter().filter(|p| p.featured).collect()
}

pub fn sample_skills() -> Vec<Skill> {
    vec![
        Skill {
            id: 1,
            category: "Languages".to_string(),
            skill: "Rust".to_string(),
            description: "Services and CLIs".to_string(),
            icon_name: "rust".to_string(),
            icon_color: "#dea584".to_string(),
        },
        Skill {
            id: 2,
            category: "Cloud".to_string(),
            skill: "AWS".to_string(),
            description: "Lambda, S3".to_string(),
            icon_name: "aws".to_string(),
            icon_color: "#ff9900".to_string(),
        },
    ]
}

pub fn sample_certifications() -> Vec<Certification> {
    vec![Certification {
        id: 1,
        name: "Solutions Architect".to_string(),
        issuer: "AWS".to_string(),
        issue_date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap().into(),
        credential_url: "https://example.com/cred/1".to_string(),
        display_order: 1,
    }]
}

/// The body the backend would send for `value`.
pub fn body_of<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap()
}
