use serde::{Deserialize, Serialize};

use super::pillars::{percentile, weekly_time_points, Band, Pillar};
use crate::profile::schema::CompleteProfile;

/// Score and per-rule detail strings for one pillar. Details are
/// display-only; they never feed back into the arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarResult {
    pub score: u32,
    pub max_score: u32,
    pub details: Vec<String>,
}

/// Complete GC Score breakdown. A plain value: computed fresh on each
/// call, never mutated or incrementally updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub career_clarity: PillarResult,
    pub skill_readiness: PillarResult,
    pub execution: PillarResult,
    pub motivation_purpose: PillarResult,
    pub learning_agility: PillarResult,
    pub commitment: PillarResult,
    pub total_score: u32,
    pub percentile: u32,
    pub band: Band,
}

impl ScoreReport {
    /// Pillar results in report order, paired with their pillar.
    pub fn pillars(&self) -> [(Pillar, &PillarResult); 6] {
        [
            (Pillar::CareerClarity, &self.career_clarity),
            (Pillar::SkillReadiness, &self.skill_readiness),
            (Pillar::Execution, &self.execution),
            (Pillar::MotivationPurpose, &self.motivation_purpose),
            (Pillar::LearningAgility, &self.learning_agility),
            (Pillar::Commitment, &self.commitment),
        ]
    }
}

fn text_len(s: &str) -> usize {
    s.chars().count()
}

/// Calculate the GC Score for a complete onboarding profile.
///
/// Pure and total: missing or empty answers contribute zero to their
/// rule, never an error. Each pillar accumulates independently and is
/// clamped to its maximum before summing, so the total is always in
/// [0, 100].
pub fn calculate_score(profile: &CompleteProfile) -> ScoreReport {
    // Pillar 1: Career Clarity & Vision (20 pts)
    let mut career_clarity = 0u32;
    let mut career_clarity_details = Vec::new();

    // 10-year vision (6 pts)
    let vision_len = text_len(&profile.career_vision.ten_year_vision);
    if vision_len > 50 {
        career_clarity += 6;
        career_clarity_details.push("Clear 10-year vision articulated".to_string());
    } else if vision_len > 20 {
        career_clarity += 3;
        career_clarity_details.push("10-year vision needs more detail".to_string());
    }

    // 3 & 5 year target roles (5 pts)
    let has_3y = !profile.career_milestones.target_role_3_years.is_empty();
    let has_5y = !profile.career_milestones.target_role_5_years.is_empty();
    if has_3y && has_5y {
        career_clarity += 5;
        career_clarity_details.push("Short and mid-term goals defined".to_string());
    } else if has_3y || has_5y {
        career_clarity += 2;
        career_clarity_details.push("Partial milestone planning".to_string());
    }

    // Aspiration alignment (5 pts)
    if !profile.career_vision.primary_aspirations.is_empty()
        && !profile.career_vision.dream_roles.is_empty()
    {
        career_clarity += 5;
        career_clarity_details.push("Aspirations aligned with dream roles".to_string());
    }

    // Leadership/career positioning (4 pts)
    if !profile.leadership_indicators.five_year_position.is_empty() {
        career_clarity += 4;
        career_clarity_details.push("5-year positioning clarity".to_string());
    }

    // Pillar 2: Skill Readiness & Capability (25 pts)
    let mut skill_readiness = 0u32;
    let mut skill_readiness_details = Vec::new();

    // Skill confidence index (10 pts, average of 8 ratings)
    let confidence = &profile.skill_vision.skill_confidence;
    let avg_confidence = f64::from(
        confidence.technical
            + confidence.functional
            + confidence.problem_solving
            + confidence.communication
            + confidence.decision_making
            + confidence.leadership
            + confidence.business_acumen
            + confidence.digital_readiness,
    ) / 8.0;
    skill_readiness += (avg_confidence / 5.0 * 10.0).round() as u32;
    skill_readiness_details.push(format!("Average skill confidence: {:.1}/5", avg_confidence));

    // Skill awareness (8 pts)
    if profile.skill_vision.areas_to_improve.len() >= 3 {
        skill_readiness += 5;
        skill_readiness_details.push("Clear improvement areas identified".to_string());
    }
    if text_len(&profile.skill_vision.critical_next_role_skills) > 20 {
        skill_readiness += 3;
        skill_readiness_details.push("Next-role skills identified".to_string());
    }

    // Core skills to master (7 pts)
    if profile.skill_vision.core_skills_to_master.len() >= 3 {
        skill_readiness += 7;
        skill_readiness_details.push("Core mastery goals set".to_string());
    } else if !profile.skill_vision.core_skills_to_master.is_empty() {
        skill_readiness += 4;
        skill_readiness_details.push("Some mastery goals defined".to_string());
    }

    // Pillar 3: Execution & Work Behaviour (15 pts)
    let mut execution = 0u32;
    let mut execution_details = Vec::new();

    // Discipline rating (5 pts)
    execution += profile.work_style.discipline_rating;
    execution_details.push(format!(
        "Discipline rating: {}/5",
        profile.work_style.discipline_rating
    ));

    // Consistency & deadline behavior (5 pts)
    match profile.work_style.consistency.as_str() {
        "100% consistent" | "Mostly consistent" => {
            execution += 5;
            execution_details.push("Strong consistency track record".to_string());
        }
        "Consistent only when motivated" => {
            execution += 3;
            execution_details.push("Motivation-driven consistency".to_string());
        }
        _ => execution += 1,
    }

    // Stress management (5 pts)
    match profile.wellbeing_sustainability.stress_management.as_str() {
        "Very well" | "Well" => {
            execution += 5;
            execution_details.push("Strong stress management".to_string());
        }
        "Moderate" => {
            execution += 3;
            execution_details.push("Moderate stress handling".to_string());
        }
        _ => execution += 1,
    }

    // Pillar 4: Motivation, Purpose & Values (15 pts)
    let mut motivation_purpose = 0u32;
    let mut motivation_details = Vec::new();

    // Clear motivation driver (5 pts)
    if !profile.motivation_purpose.primary_motivation.is_empty() {
        motivation_purpose += 5;
        motivation_details.push("Primary motivation identified".to_string());
    }

    // Success definition (4 pts)
    let meaning_len = text_len(&profile.motivation_purpose.career_success_meaning);
    if meaning_len > 30 {
        motivation_purpose += 4;
        motivation_details.push("Career success clearly defined".to_string());
    } else if meaning_len > 10 {
        motivation_purpose += 2;
    }

    // Values clarity (4 pts)
    if profile.purpose_values.work_values.len() >= 3 {
        motivation_purpose += 4;
        motivation_details.push("Core values articulated".to_string());
    }

    // Purpose consistency (2 pts)
    if text_len(&profile.purpose_values.long_term_goal) > 20 {
        motivation_purpose += 2;
        motivation_details.push("Long-term goal defined".to_string());
    }

    // Pillar 5: Learning Agility & Future Readiness (15 pts)
    let learning_max = Pillar::LearningAgility.max_score();
    let mut learning_agility = 0u32;
    let mut learning_details = Vec::new();

    // Learning speed & style clarity (4 pts)
    let has_speed = !profile.learning_preferences.learning_speed.is_empty();
    if has_speed && profile.learning_preferences.preferred_learning_style.len() >= 2 {
        learning_agility += 4;
        learning_details.push("Learning style understood".to_string());
    } else if has_speed {
        learning_agility += 2;
    }

    // Weekly learning commitment (4 pts)
    let weekly = &profile.learning_preferences.weekly_learning_time;
    learning_agility += weekly_time_points(weekly);
    if !weekly.is_empty() {
        learning_details.push(format!("{}hrs/week learning commitment", weekly));
    }

    // AI & future readiness (5 pts + capped bonus)
    learning_agility += profile.tech_readiness.ai_comfort_level;
    if profile.tech_readiness.future_skills.len() >= 2 {
        learning_agility = (learning_agility + 2).min(learning_max);
        learning_details.push("Future skills identified".to_string());
    }

    // Gamification openness (capped bonus)
    if profile.gamification_triggers.learning_engagement.len() >= 2 {
        learning_agility = (learning_agility + 2).min(learning_max);
        learning_details.push("Engaged with growth triggers".to_string());
    }

    // Pillar 6: Commitment & Growth Ownership (10 pts)
    let mut commitment = 0u32;
    let mut commitment_details = Vec::new();

    // Explicit commitment (4 pts). Anything short of an explicit "yes"
    // lands in exploring mode: add 2, capped at 6. The cap reproduces
    // the app's stable behavior exactly, quirky as it reads.
    if profile.commitment_statement.is_committed == Some(true) {
        commitment += 4;
        commitment_details.push("Growth Charter commitment made".to_string());
    } else {
        commitment = (commitment + 2).min(6);
        commitment_details.push("Exploring mode - full points on commitment".to_string());
    }

    // Realistic constraint awareness (3 pts)
    if profile.career_constraints.current_constraints.len() >= 2 {
        commitment += 3;
        commitment_details.push("Self-aware of constraints".to_string());
    } else if !profile.career_constraints.current_constraints.is_empty() {
        commitment += 2;
    }

    // Risk appetite aligned (3 pts)
    if !profile.career_constraints.risk_appetite.is_empty() {
        commitment += 3;
        commitment_details.push("Risk tolerance defined".to_string());
    }

    // Clamp every pillar to its max. The rules above should not exceed
    // the maxes on their own, but the clamp must survive rule edits.
    let career_clarity = career_clarity.min(Pillar::CareerClarity.max_score());
    let skill_readiness = skill_readiness.min(Pillar::SkillReadiness.max_score());
    let execution = execution.min(Pillar::Execution.max_score());
    let motivation_purpose = motivation_purpose.min(Pillar::MotivationPurpose.max_score());
    let learning_agility = learning_agility.min(learning_max);
    let commitment = commitment.min(Pillar::Commitment.max_score());

    let total_score = career_clarity
        + skill_readiness
        + execution
        + motivation_purpose
        + learning_agility
        + commitment;

    ScoreReport {
        career_clarity: PillarResult {
            score: career_clarity,
            max_score: Pillar::CareerClarity.max_score(),
            details: career_clarity_details,
        },
        skill_readiness: PillarResult {
            score: skill_readiness,
            max_score: Pillar::SkillReadiness.max_score(),
            details: skill_readiness_details,
        },
        execution: PillarResult {
            score: execution,
            max_score: Pillar::Execution.max_score(),
            details: execution_details,
        },
        motivation_purpose: PillarResult {
            score: motivation_purpose,
            max_score: Pillar::MotivationPurpose.max_score(),
            details: motivation_details,
        },
        learning_agility: PillarResult {
            score: learning_agility,
            max_score: learning_max,
            details: learning_details,
        },
        commitment: PillarResult {
            score: commitment,
            max_score: Pillar::Commitment.max_score(),
            details: commitment_details,
        },
        total_score,
        percentile: percentile(total_score),
        band: Band::from_total(total_score),
    }
}

/// Early "encouragement" score shown right after the contact step:
/// 5 points each for name and email, 3 for phone, max 13. Not part of
/// the GC Score report.
pub fn encouragement_score(has_name: bool, has_email: bool, has_phone: bool) -> u32 {
    let mut score = 0;
    if has_name {
        score += 5;
    }
    if has_email {
        score += 5;
    }
    if has_phone {
        score += 3;
    }
    score
}
