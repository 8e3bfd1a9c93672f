use serde::{Deserialize, Serialize};

/// The six GC Score pillars, in report order. Per-pillar maximums sum
/// to exactly 100, so the total needs no separate normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pillar {
    CareerClarity,
    SkillReadiness,
    Execution,
    MotivationPurpose,
    LearningAgility,
    Commitment,
}

impl Pillar {
    pub const ALL: [Pillar; 6] = [
        Pillar::CareerClarity,
        Pillar::SkillReadiness,
        Pillar::Execution,
        Pillar::MotivationPurpose,
        Pillar::LearningAgility,
        Pillar::Commitment,
    ];

    pub fn max_score(self) -> u32 {
        match self {
            Pillar::CareerClarity => 20,
            Pillar::SkillReadiness => 25,
            Pillar::Execution => 15,
            Pillar::MotivationPurpose => 15,
            Pillar::LearningAgility => 15,
            Pillar::Commitment => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Pillar::CareerClarity => "Career Clarity & Vision",
            Pillar::SkillReadiness => "Skill Readiness & Capability",
            Pillar::Execution => "Execution & Work Behaviour",
            Pillar::MotivationPurpose => "Motivation, Purpose & Values",
            Pillar::LearningAgility => "Learning Agility & Future Readiness",
            Pillar::Commitment => "Commitment & Growth Ownership",
        }
    }

    /// Pillar weight as shown in the score summary ("Weight: 20%").
    /// Maximums double as weights since they sum to 100.
    pub fn weight_label(self) -> &'static str {
        match self {
            Pillar::CareerClarity => "20%",
            Pillar::SkillReadiness => "25%",
            Pillar::Execution => "15%",
            Pillar::MotivationPurpose => "15%",
            Pillar::LearningAgility => "15%",
            Pillar::Commitment => "10%",
        }
    }
}

/// Qualitative band for a total score. Thresholds are inclusive lower
/// bounds checked highest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Band {
    HighClarity,
    GoodPotential,
    DirectionForming,
    Exploration,
    LowClarity,
}

impl Band {
    pub fn from_total(total: u32) -> Band {
        if total >= 80 {
            Band::HighClarity
        } else if total >= 65 {
            Band::GoodPotential
        } else if total >= 50 {
            Band::DirectionForming
        } else if total >= 35 {
            Band::Exploration
        } else {
            Band::LowClarity
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::HighClarity => "High Clarity",
            Band::GoodPotential => "Good Potential",
            Band::DirectionForming => "Direction Forming",
            Band::Exploration => "Exploration Stage",
            Band::LowClarity => "Discovery Phase",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Band::HighClarity => "Strong readiness for your next level",
            Band::GoodPotential => "Focused development will accelerate growth",
            Band::DirectionForming => "Your path is becoming clearer",
            Band::Exploration => "Building your foundation",
            Band::LowClarity => "Every journey starts with a first step",
        }
    }
}

/// Points for the weekly learning-time bucket. Unknown or unanswered
/// buckets score zero.
pub fn weekly_time_points(bucket: &str) -> u32 {
    match bucket {
        "<2" => 1,
        "2-5" => 2,
        "5-8" => 3,
        "8+" => 4,
        _ => 0,
    }
}

/// Linear placeholder percentile, not a real population statistic:
/// total/100 * 90 + 5, rounded, clamped to [5, 95].
pub fn percentile(total: u32) -> u32 {
    let raw = (f64::from(total) / 100.0 * 90.0 + 5.0).round() as i64;
    raw.clamp(5, 95) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pillar_maxes_sum_to_100() {
        let sum: u32 = Pillar::ALL.iter().map(|p| p.max_score()).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(Band::from_total(100), Band::HighClarity);
        assert_eq!(Band::from_total(80), Band::HighClarity);
        assert_eq!(Band::from_total(79), Band::GoodPotential);
        assert_eq!(Band::from_total(65), Band::GoodPotential);
        assert_eq!(Band::from_total(64), Band::DirectionForming);
        assert_eq!(Band::from_total(50), Band::DirectionForming);
        assert_eq!(Band::from_total(49), Band::Exploration);
        assert_eq!(Band::from_total(35), Band::Exploration);
        assert_eq!(Band::from_total(34), Band::LowClarity);
        assert_eq!(Band::from_total(0), Band::LowClarity);
    }

    #[test]
    fn test_band_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Band::HighClarity).unwrap(),
            "\"high-clarity\""
        );
        assert_eq!(
            serde_json::to_string(&Band::DirectionForming).unwrap(),
            "\"direction-forming\""
        );
        let band: Band = serde_json::from_str("\"good-potential\"").unwrap();
        assert_eq!(band, Band::GoodPotential);
    }

    #[test]
    fn test_percentile_endpoints() {
        assert_eq!(percentile(0), 5);
        assert_eq!(percentile(50), 50);
        assert_eq!(percentile(100), 95);
    }

    #[test]
    fn test_percentile_stays_in_range() {
        for total in 0..=100 {
            let p = percentile(total);
            assert!((5..=95).contains(&p), "total {} gave percentile {}", total, p);
        }
    }

    #[test]
    fn test_weekly_time_points_map() {
        assert_eq!(weekly_time_points("<2"), 1);
        assert_eq!(weekly_time_points("2-5"), 2);
        assert_eq!(weekly_time_points("5-8"), 3);
        assert_eq!(weekly_time_points("8+"), 4);
        assert_eq!(weekly_time_points(""), 0);
        assert_eq!(weekly_time_points("10"), 0);
    }
}
