use serde::{Deserialize, Serialize};

use super::SkillId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Skill {
    pub fn new(id: SkillId, name: &str, category: &str, description: Option<&str>) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: category.to_string(),
            description: description.map(String::from),
        }
    }
}
