//! Content tables for the published page, plus loading and validation of
//! replacement content files.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{ContentError, Result};
use crate::types::{
    ContactInfo, PortfolioContent, Profile, Project, Skill, SkillIcon, SocialIcon, SocialLink,
};

const PROJECT_IMAGE: &str = "/placeholder.svg?height=300&width=500";

fn project(title: &str, description: &str, tech: &[&str]) -> Project {
    Project {
        title: title.into(),
        description: description.into(),
        tech: tech.iter().map(|t| (*t).to_string()).collect(),
        image: PROJECT_IMAGE.into(),
        link: "#".into(),
    }
}

fn skill(name: &str, icon: SkillIcon, color: &str) -> Skill {
    Skill {
        name: name.into(),
        icon,
        color: color.into(),
    }
}

fn social(label: &str, icon: SocialIcon) -> SocialLink {
    SocialLink {
        label: label.into(),
        icon,
        url: "#".into(),
    }
}

/// The project gallery, in display order.
pub fn projects() -> Vec<Project> {
    vec![
        project(
            "E-commerce Platform",
            "Plataforma completa de e-commerce com Django e PostgreSQL",
            &["Django", "PostgreSQL", "JavaScript", "CSS"],
        ),
        project(
            "Task Management App",
            "Aplicativo de gerenciamento de tarefas com interface moderna",
            &["Python", "Django", "HTML", "CSS"],
        ),
        project(
            "Portfolio Website",
            "Site portfólio responsivo com animações avançadas",
            &["HTML", "CSS", "JavaScript"],
        ),
    ]
}

/// The skill table, in ring order.
pub fn skills() -> Vec<Skill> {
    vec![
        skill("HTML", SkillIcon::Code, "#E34F26"),
        skill("CSS", SkillIcon::Palette, "#1572B6"),
        skill("JavaScript", SkillIcon::Code, "#F7DF1E"),
        skill("Python", SkillIcon::Server, "#3776AB"),
        skill("PostgreSQL", SkillIcon::Database, "#336791"),
        skill("Django", SkillIcon::Server, "#092E20"),
        skill("Tailwind", SkillIcon::Palette, "#06B6D4"),
    ]
}

/// Social profile links.
pub fn socials() -> Vec<SocialLink> {
    vec![
        social("GitHub", SocialIcon::Github),
        social("LinkedIn", SocialIcon::Linkedin),
        social("Instagram", SocialIcon::Instagram),
    ]
}

/// The page as published.
pub fn published() -> PortfolioContent {
    PortfolioContent {
        profile: Profile {
            name: "ACADL".into(),
            tagline: "Web Developer & Digital Innovator".into(),
            summary: "Transformo ideias em experiências digitais únicas. Especializado em \
                      desenvolvimento web full-stack com foco em inovação e performance."
                .into(),
            portrait: None,
        },
        projects: projects(),
        skills: skills(),
        contact: ContactInfo {
            email: "acadl@email.com".into(),
            phone: "+55 (11) 99999-9999".into(),
            location: "São Paulo, Brasil".into(),
        },
        socials: socials(),
        footer: "© 2024 ACADL. Desenvolvido com 💜 e muito código.".into(),
    }
}

/// Check identity keys and skill colors.
pub fn validate(content: &PortfolioContent) -> Result<()> {
    let mut titles = HashSet::new();
    for project in &content.projects {
        if !titles.insert(project.title.as_str()) {
            return Err(ContentError::DuplicateProject(project.title.clone()));
        }
    }

    let mut names = HashSet::new();
    for skill in &content.skills {
        if !names.insert(skill.name.as_str()) {
            return Err(ContentError::DuplicateSkill(skill.name.clone()));
        }
        if !is_hex_color(&skill.color) {
            return Err(ContentError::InvalidColor {
                name: skill.name.clone(),
                color: skill.color.clone(),
            });
        }
    }

    let mut labels = HashSet::new();
    for link in &content.socials {
        if !labels.insert(link.label.as_str()) {
            return Err(ContentError::DuplicateSocial(link.label.clone()));
        }
    }

    Ok(())
}

fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Parse and validate content from a JSON string.
pub fn from_json(json: &str) -> Result<PortfolioContent> {
    let content: PortfolioContent = serde_json::from_str(json)?;
    validate(&content)?;
    tracing::debug!(
        projects = content.projects.len(),
        skills = content.skills.len(),
        "content parsed"
    );
    Ok(content)
}

/// Read, parse and validate a content file.
pub fn load(path: &Path) -> Result<PortfolioContent> {
    let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = from_json(&json)?;
    tracing::info!(path = %path.display(), "loaded portfolio content");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn published_tables_are_valid() {
        let content = published();
        validate(&content).unwrap();
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.skills.len(), 7);
        assert_eq!(content.socials.len(), 3);
    }

    #[test]
    fn project_order_is_fixed() {
        let titles: Vec<_> = projects().into_iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec!["E-commerce Platform", "Task Management App", "Portfolio Website"]
        );
    }

    #[test]
    fn skill_names_are_unique() {
        let skills = skills();
        let names: HashSet<_> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.len(), skills.len());
    }

    #[test]
    fn rejects_duplicate_project() {
        let mut content = published();
        content.projects.push(content.projects[0].clone());
        assert!(matches!(
            validate(&content),
            Err(ContentError::DuplicateProject(t)) if t == "E-commerce Platform"
        ));
    }

    #[test]
    fn rejects_duplicate_skill() {
        let mut content = published();
        content.skills.push(content.skills[6].clone());
        assert!(matches!(
            validate(&content),
            Err(ContentError::DuplicateSkill(n)) if n == "Tailwind"
        ));
    }

    #[test]
    fn rejects_bad_color() {
        let mut content = published();
        content.skills[0].color = "E34F26".into();
        assert!(matches!(validate(&content), Err(ContentError::InvalidColor { .. })));

        content.skills[0].color = "#E34G26".into();
        assert!(matches!(validate(&content), Err(ContentError::InvalidColor { .. })));

        content.skills[0].color = "#fff".into();
        validate(&content).unwrap();
    }

    #[test]
    fn json_round_trip_of_published_content() {
        let json = serde_json::to_string(&published()).unwrap();
        assert_eq!(from_json(&json).unwrap(), published());
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(from_json("{"), Err(ContentError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
