use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::validate_not_blank;

/// Declared in alphabetical order so that ordering by the enum column
/// matches ordering by the category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Ai,
    Backend,
    Database,
    Devops,
    Frontend,
    Mobile,
    Other,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillCategory::Ai => "ai",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Devops => "devops",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Mobile => "mobile",
            SkillCategory::Other => "other",
        };
        write!(f, "{s}")
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai" => Ok(SkillCategory::Ai),
            "backend" => Ok(SkillCategory::Backend),
            "database" => Ok(SkillCategory::Database),
            "devops" => Ok(SkillCategory::Devops),
            "frontend" => Ok(SkillCategory::Frontend),
            "mobile" => Ok(SkillCategory::Mobile),
            "other" => Ok(SkillCategory::Other),
            _ => Err(format!("Unknown skill category: {s}")),
        }
    }
}

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    /// Proficiency level from 1-100.
    pub proficiency: i16,
    pub icon_class: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

impl SkillGroup {
    /// Partitions an already-ordered skill sequence into category groups.
    /// Groups appear in first-seen order and each group keeps the input's
    /// internal ordering, so a (category, proficiency DESC) input yields
    /// proficiency-descending groups.
    pub fn group_by_category(skills: Vec<Skill>) -> Vec<SkillGroup> {
        let mut groups: Vec<SkillGroup> = Vec::new();

        for skill in skills {
            match groups.iter_mut().find(|g| g.category == skill.category) {
                Some(group) => group.skills.push(skill),
                None => groups.push(SkillGroup {
                    category: skill.category,
                    skills: vec![skill],
                }),
            }
        }

        groups
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewSkillRequest {
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,

    pub category: SkillCategory,

    #[validate(range(min = 1, max = 100, message = "Proficiency must be between 1 and 100"))]
    pub proficiency: i16,

    #[validate(length(max = 100))]
    pub icon_class: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn skill(name: &str, category: SkillCategory, proficiency: i16) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            proficiency,
            icon_class: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn grouping_preserves_per_category_order() {
        // Input ordered as the repository returns it: category ASC,
        // proficiency DESC.
        let skills = vec![
            skill("SQL", SkillCategory::Database, 90),
            skill("PostgreSQL", SkillCategory::Database, 75),
            skill("HTML5", SkillCategory::Frontend, 90),
            skill("CSS3", SkillCategory::Frontend, 85),
            skill("JavaScript", SkillCategory::Frontend, 75),
        ];

        let groups = SkillGroup::group_by_category(skills);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, SkillCategory::Database);
        let names: Vec<&str> = groups[0].skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["SQL", "PostgreSQL"]);

        assert_eq!(groups[1].category, SkillCategory::Frontend);
        let names: Vec<&str> = groups[1].skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["HTML5", "CSS3", "JavaScript"]);
    }

    #[test]
    fn grouping_empty_input_yields_no_groups() {
        assert!(SkillGroup::group_by_category(Vec::new()).is_empty());
    }

    #[test]
    fn proficiency_is_bounded() {
        let valid = NewSkillRequest {
            name: "Rust".into(),
            category: SkillCategory::Backend,
            proficiency: 100,
            icon_class: None,
        };
        assert!(valid.validate().is_ok());

        let out_of_range = NewSkillRequest {
            name: "Rust".into(),
            category: SkillCategory::Backend,
            proficiency: 0,
            icon_class: None,
        };
        assert!(out_of_range.validate().is_err());

        let too_high = NewSkillRequest {
            name: "Rust".into(),
            category: SkillCategory::Backend,
            proficiency: 101,
            icon_class: None,
        };
        assert!(too_high.validate().is_err());
    }
}
