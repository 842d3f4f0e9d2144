use serde::{Deserialize, Serialize};

/// Named component values of a sub-score, in table order.
pub trait Components {
    fn components(&self) -> Vec<(&'static str, u32)>;
}

/// One weighted category of the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScore<D> {
    pub score: u32,
    pub issues: Vec<String>,
    pub details: D,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    pub parse_rate: u32,
    pub quantification: u32,
    pub repetition: u32,
    pub grammar: u32,
    pub quantified_hits: usize,
    pub repeated_word_ratio: f64,
    pub misspellings: Vec<String>,
}

impl Components for ContentDetails {
    fn components(&self) -> Vec<(&'static str, u32)> {
        vec![
            ("parseRate", self.parse_rate),
            ("quantification", self.quantification),
            ("repetition", self.repetition),
            ("grammar", self.grammar),
        ]
    }
}

/// Coverage of a fixed checklist: which items were found and the resulting score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    pub score: u32,
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionsDetails {
    pub essential_sections: Coverage,
    pub contact_info: Coverage,
}

impl Components for SectionsDetails {
    fn components(&self) -> Vec<(&'static str, u32)> {
        vec![
            ("essentialSections", self.essential_sections.score),
            ("contactInfo", self.contact_info.score),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsDetails {
    pub file_format: u32,
    pub design: u32,
    pub email: u32,
    pub hyperlinks: u32,
    pub special_characters: usize,
    pub average_line_length: f64,
}

impl Components for AtsDetails {
    fn components(&self) -> Vec<(&'static str, u32)> {
        vec![
            ("fileFormat", self.file_format),
            ("design", self.design),
            ("email", self.email),
            ("hyperlinks", self.hyperlinks),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailoringDetails {
    pub hard_skills: u32,
    pub soft_skills: u32,
    pub action_verbs: u32,
    pub title_alignment: u32,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub strong_verb_hits: usize,
    pub weak_verb_hits: usize,
}

impl Components for TailoringDetails {
    fn components(&self) -> Vec<(&'static str, u32)> {
        vec![
            ("hardSkills", self.hard_skills),
            ("softSkills", self.soft_skills),
            ("actionVerbs", self.action_verbs),
            ("titleAlignment", self.title_alignment),
        ]
    }
}

/// Full multi-factor score for one résumé against one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub content: SubScore<ContentDetails>,
    pub sections: SubScore<SectionsDetails>,
    pub ats_essentials: SubScore<AtsDetails>,
    pub tailoring: SubScore<TailoringDetails>,
    pub overall: u32,
}

impl ScoreBreakdown {
    /// Sub-score values in the fixed aggregation order.
    pub fn sub_scores(&self) -> [(&'static str, u32); 4] {
        [
            ("content", self.content.score),
            ("sections", self.sections.score),
            ("ats_essentials", self.ats_essentials.score),
            ("tailoring", self.tailoring.score),
        ]
    }

    /// Every issue across the four categories.
    pub fn all_issues(&self) -> Vec<&str> {
        self.content
            .issues
            .iter()
            .chain(&self.sections.issues)
            .chain(&self.ats_essentials.issues)
            .chain(&self.tailoring.issues)
            .map(String::as_str)
            .collect()
    }
}
