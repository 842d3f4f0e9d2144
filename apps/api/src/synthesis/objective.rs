//! Career objective templates.

use crate::lexicon::RoleProfile;

/// Skills named in the objective sentence.
const OBJECTIVE_SKILLS: usize = 3;

/// What the candidate's background rests on, in branch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Internships,
    Projects,
    Foundation,
}

impl Background {
    pub fn detect(has_internships: bool, has_projects: bool) -> Self {
        if has_internships {
            Background::Internships
        } else if has_projects {
            Background::Projects
        } else {
            Background::Foundation
        }
    }
}

/// "A", "A and B", "A, B and C".
pub fn join_natural(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Objective paragraph; the role name appears only when a role was matched.
pub fn objective(role: Option<&RoleProfile>, skills: &[String], background: Background) -> String {
    let mut named: Vec<String> = skills.iter().take(OBJECTIVE_SKILLS).cloned().collect();
    if named.is_empty() {
        if let Some(role) = role {
            named = role
                .technical_skills
                .iter()
                .take(OBJECTIVE_SKILLS)
                .cloned()
                .collect();
        }
    }
    let skills = if named.is_empty() {
        "core technical skills".to_string()
    } else {
        join_natural(&named)
    };

    match (role, background) {
        (Some(role), Background::Internships) => format!(
            "Results-driven candidate with hands-on internship experience in {skills}, \
             seeking a {} position to apply industry exposure and deliver measurable impact.",
            role.role_name
        ),
        (Some(role), Background::Projects) => format!(
            "Motivated candidate who has built practical projects using {skills}, \
             seeking a {} position to turn project experience into production-quality work.",
            role.role_name
        ),
        (Some(role), Background::Foundation) => format!(
            "Enthusiastic candidate with a strong foundation in {skills}, \
             seeking a {} position to learn quickly and contribute to a collaborative team.",
            role.role_name
        ),
        (None, Background::Internships) => format!(
            "Results-driven candidate with hands-on internship experience in {skills}, \
             seeking an opportunity to apply industry exposure and deliver measurable impact."
        ),
        (None, Background::Projects) => format!(
            "Motivated candidate who has built practical projects using {skills}, \
             seeking an opportunity to turn project experience into production-quality work."
        ),
        (None, Background::Foundation) => format!(
            "Enthusiastic candidate with a strong foundation in {skills}, \
             seeking an opportunity to learn quickly and contribute to a collaborative team."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconStore;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_branch_priority() {
        assert_eq!(Background::detect(true, true), Background::Internships);
        assert_eq!(Background::detect(false, true), Background::Projects);
        assert_eq!(Background::detect(false, false), Background::Foundation);
    }

    #[test]
    fn test_role_name_interpolated() {
        let lexicon = LexiconStore::builtin().unwrap();
        let role = lexicon.role("data analyst");
        let text = objective(role, &skills(&["SQL", "Excel"]), Background::Projects);
        assert!(text.contains("Data Analyst position"));
        assert!(text.contains("SQL and Excel"));
    }

    #[test]
    fn test_generic_branch_has_no_role() {
        let lexicon = LexiconStore::builtin().unwrap();
        let text = objective(None, &[], Background::Foundation);
        assert!(text.contains("core technical skills"));
        assert!(lexicon.roles().iter().all(|r| !text.contains(&r.role_name)));
    }

    #[test]
    fn test_role_skills_fill_empty_list() {
        let lexicon = LexiconStore::builtin().unwrap();
        let role = lexicon.role("software engineer");
        let text = objective(role, &[], Background::Internships);
        assert!(text.contains("Python, Java and JavaScript"));
    }

    #[test]
    fn test_join_natural() {
        assert_eq!(join_natural(&skills(&[])), "");
        assert_eq!(join_natural(&skills(&["A"])), "A");
        assert_eq!(join_natural(&skills(&["A", "B", "C"])), "A, B and C");
    }
}
