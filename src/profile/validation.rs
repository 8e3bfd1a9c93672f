use super::schema::CompleteProfile;

const WEEKLY_TIME_BUCKETS: [&str; 4] = ["<2", "2-5", "5-8", "8+"];

fn check_rating(errors: &mut Vec<String>, field: &str, value: u32) {
    if !(1..=5).contains(&value) {
        errors.push(format!("{}: must be between 1 and 5 (got {})", field, value));
    }
}

/// Validate a profile at the input boundary before scoring.
/// Returns all validation errors at once (not just the first).
///
/// The scoring engine itself never validates; it degrades to zero
/// credit on anything missing. This check exists so a hand-edited
/// profile file fails loudly instead of scoring strangely.
pub fn validate_profile(profile: &CompleteProfile) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let confidence = &profile.skill_vision.skill_confidence;
    check_rating(
        &mut errors,
        "skillVision.skillConfidence.technical",
        confidence.technical,
    );
    check_rating(
        &mut errors,
        "skillVision.skillConfidence.functional",
        confidence.functional,
    );
    check_rating(
        &mut errors,
        "skillVision.skillConfidence.problemSolving",
        confidence.problem_solving,
    );
    check_rating(
        &mut errors,
        "skillVision.skillConfidence.communication",
        confidence.communication,
    );
    check_rating(
        &mut errors,
        "skillVision.skillConfidence.decisionMaking",
        confidence.decision_making,
    );
    check_rating(
        &mut errors,
        "skillVision.skillConfidence.leadership",
        confidence.leadership,
    );
    check_rating(
        &mut errors,
        "skillVision.skillConfidence.businessAcumen",
        confidence.business_acumen,
    );
    check_rating(
        &mut errors,
        "skillVision.skillConfidence.digitalReadiness",
        confidence.digital_readiness,
    );

    check_rating(
        &mut errors,
        "workStyle.disciplineRating",
        profile.work_style.discipline_rating,
    );
    check_rating(
        &mut errors,
        "workStyle.autonomyLevel",
        profile.work_style.autonomy_level,
    );
    check_rating(
        &mut errors,
        "wellbeingSustainability.currentEnergyLevel",
        profile.wellbeing_sustainability.current_energy_level,
    );
    check_rating(
        &mut errors,
        "techReadiness.aiComfortLevel",
        profile.tech_readiness.ai_comfort_level,
    );

    let weekly = &profile.learning_preferences.weekly_learning_time;
    if !weekly.is_empty() && !WEEKLY_TIME_BUCKETS.contains(&weekly.as_str()) {
        errors.push(format!(
            "learningPreferences.weeklyLearningTime: unknown bucket '{}' (expected one of {})",
            weekly,
            WEEKLY_TIME_BUCKETS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(validate_profile(&CompleteProfile::default()).is_ok());
    }

    #[test]
    fn test_rating_out_of_range() {
        let mut profile = CompleteProfile::default();
        profile.work_style.discipline_rating = 0;
        let errors = validate_profile(&profile).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("workStyle.disciplineRating"));
    }

    #[test]
    fn test_unknown_time_bucket() {
        let mut profile = CompleteProfile::default();
        profile.learning_preferences.weekly_learning_time = "10+".to_string();
        let errors = validate_profile(&profile).unwrap_err();
        assert!(errors[0].contains("weeklyLearningTime"));
        assert!(errors[0].contains("10+"));
    }

    #[test]
    fn test_empty_time_bucket_allowed() {
        let mut profile = CompleteProfile::default();
        profile.learning_preferences.weekly_learning_time = String::new();
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut profile = CompleteProfile::default();
        profile.skill_vision.skill_confidence.technical = 9;
        profile.tech_readiness.ai_comfort_level = 0;
        profile.learning_preferences.weekly_learning_time = "lots".to_string();
        let errors = validate_profile(&profile).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
