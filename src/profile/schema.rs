use serde::{Deserialize, Serialize};

/// Rating fields (1-5 sliders in the onboarding UI) default to the
/// midpoint, matching the web app's blank form.
fn mid_rating() -> u32 {
    3
}

/// Everything the onboarding wizard collects, one struct per section.
///
/// Field names serialize as camelCase so a profile exported from the
/// GrowthCharters web app loads directly. Every section defaults to the
/// blank-form state: empty strings and lists, ratings at 3, tri-state
/// answers unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompleteProfile {
    pub candidate_foundation: CandidateFoundation,
    pub career_vision: CareerVision,
    pub career_milestones: CareerMilestones,
    pub skill_vision: SkillVision,
    pub learning_preferences: LearningPreferences,
    pub career_constraints: CareerConstraints,
    pub motivation_purpose: MotivationPurpose,
    pub commitment_statement: CommitmentStatement,
    pub work_identity: WorkIdentity,
    pub purpose_values: PurposeValues,
    pub work_style: WorkStyle,
    pub wellbeing_sustainability: WellbeingSustainability,
    pub gamification_triggers: GamificationTriggers,
    pub income_lifestyle: IncomeLifestyle,
    pub community_influence: CommunityInfluence,
    pub tech_readiness: TechReadiness,
    pub leadership_indicators: LeadershipIndicators,
    pub final_preferences: FinalPreferences,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateFoundation {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub date_of_birth: String,
    pub current_role: String,
    pub industry: String,
    pub total_experience: String,
    pub current_industry: String,
    pub past_key_roles: String,
    pub biggest_achievement: String,
    pub biggest_challenge: String,
    pub highest_qualification: String,
    pub location: String,
    pub linkedin_profile: String,
    pub career_stage: String,
    pub professional_status: String,
    pub top_priorities: Vec<String>,
    pub motivations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerVision {
    pub ten_year_vision: String,
    pub primary_aspirations: Vec<String>,
    pub dream_roles: String,
    pub preferred_impact_type: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerMilestones {
    pub target_role_3_years: String,
    pub target_role_5_years: String,
    pub career_movement_preference: Vec<String>,
    pub aspiring_organizations: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillVision {
    pub areas_to_improve: Vec<String>,
    pub core_skills_to_master: Vec<String>,
    pub skill_confidence: SkillConfidence,
    pub critical_next_role_skills: String,
}

/// The eight self-rated skill dimensions averaged by the skill pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillConfidence {
    pub technical: u32,
    pub functional: u32,
    pub problem_solving: u32,
    pub communication: u32,
    pub decision_making: u32,
    pub leadership: u32,
    pub business_acumen: u32,
    pub digital_readiness: u32,
}

impl Default for SkillConfidence {
    fn default() -> Self {
        Self {
            technical: mid_rating(),
            functional: mid_rating(),
            problem_solving: mid_rating(),
            communication: mid_rating(),
            decision_making: mid_rating(),
            leadership: mid_rating(),
            business_acumen: mid_rating(),
            digital_readiness: mid_rating(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningPreferences {
    pub learning_speed: String,
    pub thinking_style: String,
    pub problem_solving_approach: String,
    pub preferred_learning_style: Vec<String>,
    /// One of "<2", "2-5", "5-8", "8+" (or empty when unanswered).
    pub weekly_learning_time: String,
    pub certification_importance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerConstraints {
    pub current_constraints: Vec<String>,
    pub risk_appetite: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotivationPurpose {
    pub primary_motivation: Vec<String>,
    pub career_success_meaning: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommitmentStatement {
    /// Tri-state: Some(true) committed, Some(false) declined, None unanswered.
    pub is_committed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkIdentity {
    pub professional_identity: String,
    pub personal_brand_attributes: Vec<String>,
    pub visibility_preferences: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurposeValues {
    pub long_term_goal: String,
    pub stopping_factors: String,
    pub ninety_day_change: String,
    pub guidance_preference: Vec<String>,
    pub causes_you_care: Vec<String>,
    pub work_values: Vec<String>,
    pub deal_breakers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkStyle {
    pub working_style: String,
    pub consistency: String,
    pub deadline_handling: String,
    pub discipline_rating: u32,
    pub preferred_work_model: String,
    pub ideal_work_rhythm: String,
    pub autonomy_level: u32,
    pub ideal_team_structure: String,
}

impl Default for WorkStyle {
    fn default() -> Self {
        Self {
            working_style: String::new(),
            consistency: String::new(),
            deadline_handling: String::new(),
            discipline_rating: mid_rating(),
            preferred_work_model: String::new(),
            ideal_work_rhythm: String::new(),
            autonomy_level: mid_rating(),
            ideal_team_structure: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WellbeingSustainability {
    pub current_energy_level: u32,
    pub stress_triggers: Vec<String>,
    pub performance_helpers: Vec<String>,
    pub stress_management: String,
    pub social_comfort: String,
    pub personality_description: String,
    pub conflict_handling: String,
    pub wellbeing_check_frequency: String,
}

impl Default for WellbeingSustainability {
    fn default() -> Self {
        Self {
            current_energy_level: mid_rating(),
            stress_triggers: Vec::new(),
            performance_helpers: Vec::new(),
            stress_management: String::new(),
            social_comfort: String::new(),
            personality_description: String::new(),
            conflict_handling: String::new(),
            wellbeing_check_frequency: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GamificationTriggers {
    pub learning_engagement: Vec<String>,
    pub feedback_style: String,
    pub recognition_preference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeLifestyle {
    pub income_growth_expectation: String,
    pub lifestyle_priorities: Vec<String>,
    pub side_hustle_comfort: String,
    pub priority_choice: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommunityInfluence {
    pub career_influencer: String,
    pub community_learning: String,
    pub peer_benchmarking_comfort: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechReadiness {
    pub ai_comfort_level: u32,
    pub disappearing_roles: String,
    pub future_skills: Vec<String>,
}

impl Default for TechReadiness {
    fn default() -> Self {
        Self {
            ai_comfort_level: mid_rating(),
            disappearing_roles: String::new(),
            future_skills: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadershipIndicators {
    pub enjoys_leading: Option<bool>,
    pub advisor_role: Option<bool>,
    pub delegation_comfort: Option<bool>,
    pub five_year_position: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinalPreferences {
    pub communication_mode: String,
    pub wants_personalized_preview: Option<bool>,
    pub consent_granted: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_blank_form() {
        let profile = CompleteProfile::default();
        assert!(profile.career_vision.ten_year_vision.is_empty());
        assert!(profile.skill_vision.areas_to_improve.is_empty());
        assert_eq!(profile.skill_vision.skill_confidence.technical, 3);
        assert_eq!(profile.work_style.discipline_rating, 3);
        assert_eq!(profile.tech_readiness.ai_comfort_level, 3);
        assert_eq!(profile.commitment_statement.is_committed, None);
    }

    #[test]
    fn test_camel_case_json_loads() {
        let json = r#"{
            "careerVision": {
                "tenYearVision": "Lead a product org",
                "primaryAspirations": ["leadership"],
                "dreamRoles": "VP Product"
            },
            "careerMilestones": {
                "targetRole3Years": "Senior PM",
                "targetRole5Years": "Director"
            },
            "techReadiness": { "aiComfortLevel": 5 }
        }"#;
        let profile: CompleteProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.career_vision.ten_year_vision, "Lead a product org");
        assert_eq!(profile.career_milestones.target_role_3_years, "Senior PM");
        assert_eq!(profile.tech_readiness.ai_comfort_level, 5);
        // Missing sections fall back to defaults
        assert_eq!(profile.work_style.discipline_rating, 3);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut profile = CompleteProfile::default();
        profile.candidate_foundation.full_name = "Ada".to_string();
        profile.commitment_statement.is_committed = Some(true);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"fullName\":\"Ada\""));
        assert!(json.contains("\"isCommitted\":true"));
        let parsed: CompleteProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, parsed);
    }

    #[test]
    fn test_yaml_profile_loads() {
        let yaml = r#"
workStyle:
  disciplineRating: 5
  consistency: "Mostly consistent"
commitmentStatement:
  isCommitted: false
"#;
        let profile: CompleteProfile = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(profile.work_style.discipline_rating, 5);
        assert_eq!(profile.work_style.consistency, "Mostly consistent");
        assert_eq!(profile.commitment_statement.is_committed, Some(false));
    }
}
