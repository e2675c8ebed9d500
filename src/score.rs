use crate::profile::Profile;

pub const BASE_SCORE: u32 = 50;
pub const INTEREST_WEIGHT: u32 = 5;
pub const SKILL_WEIGHT: u32 = 8;
pub const SNS_WEIGHT: u32 = 5;
pub const MAX_SCORE: u32 = 100;

/// Profiles scoring at least this much count as matched
pub const HIGH_MATCH_THRESHOLD: u8 = 80;

/// Completeness heuristic of a profile, always within `[50, 100]`
pub fn score(profile: &Profile) -> u8 {
    let total = BASE_SCORE
        + INTEREST_WEIGHT * count(profile.interests.len())
        + SKILL_WEIGHT * count(profile.skills.len())
        + SNS_WEIGHT * count(profile.sns.count());

    // bounded by MAX_SCORE, fits in u8
    total.min(MAX_SCORE) as u8
}

pub fn is_high_match(profile: &Profile) -> bool {
    score(profile) >= HIGH_MATCH_THRESHOLD
}

/// Number of profiles scoring at or above [HIGH_MATCH_THRESHOLD]
pub fn high_match_count<'a, I>(profiles: I) -> usize
where
    I: IntoIterator<Item = &'a Profile>,
{
    profiles
        .into_iter()
        .filter(|profile| is_high_match(profile))
        .count()
}

// Saturating so that absurd list lengths still clamp to MAX_SCORE
fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX).min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    fn profile(value: Value) -> Profile {
        Profile::from_value(value).unwrap()
    }

    fn with_counts(interests: usize, skills: usize, sns: usize) -> Profile {
        let platforms = ["instagram", "tiktok", "twitter", "youtube"];
        let sns: serde_json::Map<String, Value> = platforms
            .iter()
            .take(sns)
            .map(|p| (p.to_string(), json!(format!("https://{}.example", p))))
            .collect();
        let interests: Vec<String> =
            (0..interests).map(|i| format!("i{}", i)).collect();
        let skills: Vec<String> =
            (0..skills).map(|i| format!("s{}", i)).collect();
        profile(json!({
            "id": 1,
            "interests": interests,
            "skills": skills,
            "sns": sns,
        }))
    }

    #[test]
    fn weighted_sum_of_filled_fields() {
        let p = profile(json!({
            "id": 1,
            "interests": ["AI", "Design"],
            "skills": ["Python", "Figma", "Excel"],
            "sns": {"instagram": "x", "tiktok": "", "twitter": "y"}
        }));

        assert_eq!(score(&p), 94);
        assert!(is_high_match(&p));
    }

    #[rstest]
    #[case(0, 0, 0, 50)]
    #[case(1, 0, 0, 55)]
    #[case(0, 1, 0, 58)]
    #[case(0, 0, 3, 65)]
    #[case(2, 2, 0, 76)]
    #[case(6, 0, 0, 80)]
    #[case(5, 5, 3, 100)]
    #[case(40, 40, 4, 100)]
    fn score_table(
        #[case] interests: usize,
        #[case] skills: usize,
        #[case] sns: usize,
        #[case] expected: u8,
    ) {
        assert_eq!(score(&with_counts(interests, skills, sns)), expected);
    }

    #[test]
    fn bounded_and_monotone() {
        for interests in 0..8 {
            for skills in 0..8 {
                for sns in 0..4 {
                    let current = score(&with_counts(interests, skills, sns));
                    assert!((50..=100).contains(&current));

                    let more_interests =
                        score(&with_counts(interests + 1, skills, sns));
                    let more_skills =
                        score(&with_counts(interests, skills + 1, sns));
                    let more_sns =
                        score(&with_counts(interests, skills, sns + 1));
                    assert!(more_interests >= current);
                    assert!(more_skills >= current);
                    assert!(more_sns >= current);
                }
            }
        }
    }

    #[test]
    fn null_entries_are_not_counted() {
        let p = profile(json!({
            "id": 1,
            "interests": ["AI", null],
            "skills": [null, "Rust"],
            "sns": {"instagram": null}
        }));

        assert_eq!(score(&p), 63);
    }

    #[test]
    fn counts_high_matches() {
        let profiles = vec![
            with_counts(0, 0, 0),
            with_counts(6, 0, 0),
            with_counts(2, 2, 0),
            with_counts(5, 5, 3),
        ];

        assert_eq!(high_match_count(&profiles), 2);
        assert_eq!(high_match_count(&[] as &[Profile]), 0);
    }
}
