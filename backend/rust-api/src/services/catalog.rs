use crate::models::Skill;

/// Read-only list of skills, seeded once at start-up.
#[derive(Clone, Debug)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self { skills }
    }

    /// The three skills the service ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Skill::new(1, "Python Programming", "Tech", Some("Learn to code in Python!")),
            Skill::new(
                2,
                "Guitar Lessons",
                "Music",
                Some("Master the guitar basics or advanced techniques."),
            ),
            Skill::new(
                3,
                "Cooking Thai Cuisine",
                "Cooking",
                Some("Discover the flavors of Thailand with authentic recipes."),
            ),
        ])
    }

    /// All skills in insertion order.
    pub fn list(&self) -> &[Skill] {
        &self.skills
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_has_three_skills_in_order() {
        let catalog = SkillCatalog::seeded();
        let ids: Vec<_> = catalog.list().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.list()[1].name, "Guitar Lessons");
        assert_eq!(catalog.list()[1].category, "Music");
    }

    #[test]
    fn listing_is_stable() {
        let catalog = SkillCatalog::seeded();
        assert_eq!(catalog.list(), catalog.list());
    }
}
