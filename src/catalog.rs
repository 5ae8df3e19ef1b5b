use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

const BUILTIN: &str = include_str!("../assets/portfolio.json");

/// Link value meaning "no link yet".
pub const PLACEHOLDER_LINK: &str = "#";

/// A single project shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image: String,
    pub demo_link: String,
    pub github_link: String,
}

impl ProjectRecord {
    /// Tag shown as the card badge.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tech_stack.first().map(String::as_str)
    }

    pub fn demo_href(&self) -> Option<&str> {
        real_link(&self.demo_link)
    }

    pub fn github_href(&self) -> Option<&str> {
        real_link(&self.github_link)
    }
}

fn real_link(link: &str) -> Option<&str> {
    let trimmed = link.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER_LINK {
        None
    } else {
        Some(trimmed)
    }
}

/// A labelled contact link in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub label: String,
    pub href: String,
}

/// Hero section content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Owner {
    pub name: String,
    pub role: String,
    pub tagline: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

#[derive(Deserialize)]
struct RawPortfolio {
    owner: Owner,
    projects: Vec<ProjectRecord>,
}

/// The owner plus the ordered project catalog.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub owner: Owner,
    pub projects: Vec<Arc<ProjectRecord>>,
}

impl Portfolio {
    /// Parse and validate the catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawPortfolio = serde_json::from_str(json)?;
        validate(&raw.projects)?;
        tracing::debug!(projects = raw.projects.len(), "catalog loaded");
        Ok(Portfolio {
            owner: raw.owner,
            projects: raw.projects.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn find(&self, id: &str) -> Option<&Arc<ProjectRecord>> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// Ids must be unique and every record needs at least one tag for its badge.
pub fn validate(projects: &[ProjectRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(project.id.as_str()) {
            return Err(CatalogError::DuplicateId(project.id.clone()));
        }
        if project.tech_stack.is_empty() {
            return Err(CatalogError::EmptyTechStack(project.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn record(id: &str, title: &str, tags: &[&str]) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        short_description: format!("{} in short", title),
        description: format!("All about {}", title),
        tech_stack: tags.iter().map(|t| t.to_string()).collect(),
        image: format!("https://img.example/{}.jpg", id),
        demo_link: format!("https://demo.example/{}", id),
        github_link: format!("https://github.example/{}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let portfolio = Portfolio::builtin().expect("builtin catalog");
        assert_eq!(portfolio.projects.len(), 2);
        assert_eq!(portfolio.projects[0].id, "virtual-home-builder");
        assert_eq!(portfolio.projects[1].id, "parking-system");
        assert_eq!(portfolio.projects[0].primary_tag(), Some("Python"));
        assert!(!portfolio.owner.name.is_empty());
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r##"{
            "owner": {"name": "N", "role": "R", "tagline": "T"},
            "projects": [{
                "id": "a", "title": "A", "shortDescription": "s",
                "description": "d", "techStack": ["X", "Y"],
                "image": "i", "demoLink": "#", "githubLink": "https://g"
            }]
        }"##;
        let portfolio = Portfolio::from_json(json).unwrap();
        let a = &portfolio.projects[0];
        assert_eq!(a.short_description, "s");
        assert_eq!(a.tech_stack, vec!["X", "Y"]);
        assert_eq!(a.demo_href(), None);
        assert_eq!(a.github_href(), Some("https://g"));
        assert!(portfolio.owner.contacts.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let projects = vec![record("a", "A", &["X"]), record("a", "B", &["Y"])];
        match validate(&projects) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_tech_stack_rejected() {
        let projects = vec![record("a", "A", &[])];
        assert!(matches!(
            validate(&projects),
            Err(CatalogError::EmptyTechStack(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Portfolio::from_json("{"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_find_by_id() {
        let portfolio = Portfolio::builtin().unwrap();
        assert_eq!(
            portfolio.find("parking-system").map(|p| p.title.as_str()),
            Some("Online Car Parking Reservation System")
        );
        assert!(portfolio.find("missing").is_none());
    }
}
