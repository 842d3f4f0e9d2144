//! Template-driven cover letter.

use crate::lexicon::{LexiconStore, RoleProfile};
use crate::synthesis::objective::join_natural;
use crate::text::contains_term;

const TOP_SKILLS: usize = 3;
const TOP_KEYWORDS: usize = 2;
const TOP_SOFT_SKILLS: usize = 2;

const FALLBACK_SIGNATURE: &str = "Candidate";

/// Inputs the letter draws on; every optional clause drops out when empty.
#[derive(Debug, Clone, Default)]
pub struct LetterContext<'a> {
    pub role: Option<&'a RoleProfile>,
    pub name: &'a str,
    pub email: &'a str,
    pub skills: &'a [String],
    /// Title of the first project, used for the teaser.
    pub project: Option<&'a str>,
}

fn opening(role: Option<&RoleProfile>) -> String {
    match role {
        Some(role) => format!(
            "I am writing to express my interest in the {} position. My background in {} \
             and my hands-on work with the tools this role relies on have prepared me to \
             contribute from day one.",
            role.role_name, role.domain
        ),
        None => "I am writing to express my interest in joining your team. I am eager to \
                 apply my skills and grow with an organization that values initiative and \
                 continuous learning."
            .to_string(),
    }
}

/// Bullet lines in fixed order: technical skills, role keywords, soft skills.
fn highlights(lexicon: &LexiconStore, ctx: &LetterContext<'_>) -> Vec<String> {
    let is_soft = |s: &String| lexicon.soft_skills().iter().any(|k| k.eq_ignore_ascii_case(s));

    let mut technical: Vec<String> = ctx
        .skills
        .iter()
        .filter(|s| !is_soft(s))
        .take(TOP_SKILLS)
        .cloned()
        .collect();
    let mut soft: Vec<String> = ctx
        .skills
        .iter()
        .filter(|s| is_soft(s))
        .take(TOP_SOFT_SKILLS)
        .cloned()
        .collect();
    let mut keywords = Vec::new();

    if let Some(role) = ctx.role {
        if technical.is_empty() {
            technical = role.technical_skills.iter().take(TOP_SKILLS).cloned().collect();
        }
        if soft.is_empty() {
            soft = role.soft_skills.iter().take(TOP_SOFT_SKILLS).cloned().collect();
        }
        keywords = role
            .ats_keywords
            .iter()
            .filter(|k| !technical.iter().any(|t| contains_term(t, k)))
            .take(TOP_KEYWORDS)
            .cloned()
            .collect();
    }

    let mut bullets = Vec::new();
    if !technical.is_empty() {
        bullets.push(format!("• Technical proficiency in {}", join_natural(&technical)));
    }
    if !keywords.is_empty() {
        bullets.push(format!("• Practical exposure to {}", join_natural(&keywords)));
    }
    if !soft.is_empty() {
        bullets.push(format!("• Proven {}", join_natural(&soft).to_lowercase()));
    }
    bullets
}

pub fn cover_letter(lexicon: &LexiconStore, ctx: &LetterContext<'_>) -> String {
    let mut parts = vec!["Dear Hiring Manager,".to_string(), opening(ctx.role)];

    let bullets = highlights(lexicon, ctx);
    if !bullets.is_empty() {
        parts.push(format!("What I bring:\n{}", bullets.join("\n")));
    }

    if let Some(project) = ctx.project.filter(|p| !p.trim().is_empty()) {
        parts.push(format!(
            "Most recently I worked on {project}, which sharpened my ability to take an idea \
             from design to a working product."
        ));
    }

    parts.push(
        "Thank you for considering my application. I would welcome the opportunity to \
         discuss how I can contribute to your team."
            .to_string(),
    );

    let name = if ctx.name.trim().is_empty() {
        FALLBACK_SIGNATURE
    } else {
        ctx.name.trim()
    };
    let mut signature = format!("Sincerely,\n{name}");
    if !ctx.email.trim().is_empty() {
        signature.push('\n');
        signature.push_str(ctx.email.trim());
    }
    parts.push(signature);

    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_role_letter_structure() {
        let lexicon = LexiconStore::builtin().unwrap();
        let skills = skills(&["Python", "React", "SQL", "Docker", "Teamwork"]);
        let ctx = LetterContext {
            role: lexicon.role("software engineer"),
            name: "John Smith",
            email: "john@x.com",
            skills: &skills,
            project: Some("Chat App"),
        };
        let letter = cover_letter(&lexicon, &ctx);
        assert!(letter.starts_with("Dear Hiring Manager,"));
        assert!(letter.contains("Software Engineer position"));
        assert!(letter.contains("• Technical proficiency in Python, React and SQL"));
        assert!(letter.contains("• Proven teamwork"));
        assert!(letter.contains("Chat App"));
        assert!(letter.ends_with("Sincerely,\nJohn Smith\njohn@x.com"));

        let tech = letter.find("Technical proficiency").unwrap();
        let exposure = letter.find("Practical exposure").unwrap();
        let soft = letter.find("Proven").unwrap();
        assert!(tech < exposure && exposure < soft);
    }

    #[test]
    fn test_generic_letter_omits_role_and_optional_clauses() {
        let lexicon = LexiconStore::builtin().unwrap();
        let ctx = LetterContext::default();
        let letter = cover_letter(&lexicon, &ctx);
        assert!(letter.contains("joining your team"));
        assert!(!letter.contains("What I bring"));
        assert!(!letter.contains("Most recently"));
        assert!(letter.ends_with("Sincerely,\nCandidate"));
        assert!(lexicon.roles().iter().all(|r| !letter.contains(&r.role_name)));
    }
}
