use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TechProficiency {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    Expert,
}

/// A mock persona shown for a role/client combination.
///
/// Profiles live in static tables, so every field borrows `'static` data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
    pub tech_proficiency: TechProficiency,
    pub pain_points: &'static [&'static str],
    pub goals: &'static [&'static str],
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
