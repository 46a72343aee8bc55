//! Profile Assigner - maps signal counts to exactly one profile.

use serde::{Deserialize, Serialize};

use super::{Answer, Profile, SignalScoreMap, SignalScorer};

/// Cluster score of one profile for a given score map.
///
/// Widened to `u64` so two saturated `u32` counts still add exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterScore {
    pub profile: Profile,
    pub score: u64,
}

/// Result of scoring a full answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAssignment {
    pub profile: Profile,
    pub signal_scores: SignalScoreMap,
}

/// Stateless profile assignment.
pub struct ProfileAssigner;

impl ProfileAssigner {
    /// Cluster score for every profile, in [`Profile::all`] order.
    pub fn cluster_scores(scores: &SignalScoreMap) -> Vec<ClusterScore> {
        Profile::all()
            .iter()
            .map(|profile| {
                let [a, b] = profile.cluster();
                ClusterScore {
                    profile: *profile,
                    score: u64::from(scores.get(a)) + u64::from(scores.get(b)),
                }
            })
            .collect()
    }

    /// Picks the profile with the highest cluster score.
    ///
    /// Ties go to the profile declared first in [`Profile::all`]. An all-zero
    /// map therefore yields [`Profile::SystemsThinker`].
    pub fn assign_profile(scores: &SignalScoreMap) -> Profile {
        let mut best = ClusterScore {
            profile: Profile::all()[0],
            score: 0,
        };

        for candidate in Self::cluster_scores(scores) {
            // strict: an equal score never displaces an earlier profile
            if candidate.score > best.score {
                best = candidate;
            }
        }

        best.profile
    }

    /// Scores the answers and assigns a profile in one step.
    pub fn assign_user_profile(answers: &[Answer]) -> ProfileAssignment {
        let signal_scores = SignalScorer::score(answers);
        ProfileAssignment {
            profile: Self::assign_profile(&signal_scores),
            signal_scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profiling::Signal;
    use proptest::prelude::*;

    fn answers_tagged(tags: &[&[Signal]]) -> Vec<Answer> {
        tags.iter()
            .enumerate()
            .map(|(idx, signals)| Answer::new(idx as u32 + 1, "a", signals.to_vec()))
            .collect()
    }

    #[test]
    fn all_zero_scores_yield_systems_thinker() {
        assert_eq!(
            ProfileAssigner::assign_profile(&SignalScoreMap::zero()),
            Profile::SystemsThinker
        );
    }

    #[test]
    fn empty_answers_yield_systems_thinker_and_zero_scores() {
        let result = ProfileAssigner::assign_user_profile(&[]);
        assert_eq!(result.profile, Profile::SystemsThinker);
        assert_eq!(result.signal_scores, SignalScoreMap::zero());
    }

    #[test]
    fn eight_systems_thinking_answers_tie_to_systems_thinker() {
        let systems: &[Signal] = &[Signal::SystemsThinking];
        let tags = vec![systems; 8];
        let result = ProfileAssigner::assign_user_profile(&answers_tagged(&tags));

        assert_eq!(result.signal_scores.get(Signal::SystemsThinking), 8);
        assert_eq!(result.signal_scores.total(), 8);

        let clusters = ProfileAssigner::cluster_scores(&result.signal_scores);
        let at_eight: Vec<Profile> = clusters
            .iter()
            .filter(|c| c.score == 8)
            .map(|c| c.profile)
            .collect();
        assert_eq!(
            at_eight,
            vec![
                Profile::SystemsThinker,
                Profile::WorkflowOptimizer,
                Profile::StrategicObserver
            ]
        );
        assert_eq!(result.profile, Profile::SystemsThinker);
    }

    #[test]
    fn trust_and_efficiency_yield_trust_focused_operator() {
        let trust: &[Signal] = &[Signal::Trust];
        let efficiency: &[Signal] = &[Signal::Efficiency];
        let mut tags = vec![trust; 4];
        tags.extend(vec![efficiency; 4]);
        let result = ProfileAssigner::assign_user_profile(&answers_tagged(&tags));

        let clusters = ProfileAssigner::cluster_scores(&result.signal_scores);
        let trust_focused = clusters
            .iter()
            .find(|c| c.profile == Profile::TrustFocusedOperator)
            .unwrap();
        assert_eq!(trust_focused.score, 8);
        assert!(clusters
            .iter()
            .filter(|c| c.profile != Profile::TrustFocusedOperator)
            .all(|c| c.score < 8));
        assert_eq!(result.profile, Profile::TrustFocusedOperator);
    }

    #[test]
    fn duplicate_human_behavior_tie_goes_to_adoption_realist() {
        let doubled: &[Signal] = &[Signal::HumanBehavior, Signal::HumanBehavior];
        let tags = vec![doubled];
        let result = ProfileAssigner::assign_user_profile(&answers_tagged(&tags));

        assert_eq!(result.signal_scores.get(Signal::HumanBehavior), 2);
        let clusters = ProfileAssigner::cluster_scores(&result.signal_scores);
        assert_eq!(clusters[1].score, 2); // Adoption Realist
        assert_eq!(clusters[3].score, 2); // Human-Centered Technologist
        assert_eq!(result.profile, Profile::AdoptionRealist);
    }

    #[test]
    fn strict_maximum_wins_regardless_of_order() {
        let scores = SignalScoreMap::from_counts(&[
            (Signal::SystemsThinking, 1),
            (Signal::Trust, 5),
        ]);
        // Strategic Observer = 6, Trust-Focused Operator = 5
        assert_eq!(
            ProfileAssigner::assign_profile(&scores),
            Profile::StrategicObserver
        );
    }

    #[test]
    fn cluster_scores_follow_declaration_order() {
        let clusters = ProfileAssigner::cluster_scores(&SignalScoreMap::zero());
        let order: Vec<Profile> = clusters.iter().map(|c| c.profile).collect();
        assert_eq!(order, Profile::all().to_vec());
    }

    #[test]
    fn assignment_serializes_camel_case() {
        let result = ProfileAssigner::assign_user_profile(&[]);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["profile"], "Systems Thinker");
        assert_eq!(json["signalScores"]["Trust"], 0);
    }

    #[test]
    fn saturated_counts_do_not_overflow() {
        let scores: SignalScoreMap =
            serde_json::from_str(r#"{"Trust": 4294967295, "Efficiency": 1}"#).unwrap();

        let clusters = ProfileAssigner::cluster_scores(&scores);
        assert_eq!(clusters[2].score, u64::from(u32::MAX) + 1);
        assert_eq!(
            ProfileAssigner::assign_profile(&scores),
            Profile::TrustFocusedOperator
        );
    }

    #[test]
    fn max_counts_everywhere_tie_to_systems_thinker() {
        let pairs: Vec<(Signal, u32)> = Signal::all().iter().map(|s| (*s, u32::MAX)).collect();
        let scores = SignalScoreMap::from_counts(&pairs);

        assert_eq!(
            ProfileAssigner::assign_profile(&scores),
            Profile::SystemsThinker
        );
    }

    fn counts_map(counts: Vec<u32>) -> SignalScoreMap {
        let pairs: Vec<(Signal, u32)> = Signal::all().iter().copied().zip(counts).collect();
        SignalScoreMap::from_counts(&pairs)
    }

    fn arb_scores() -> impl Strategy<Value = SignalScoreMap> {
        prop::collection::vec(0u32..6, 6).prop_map(|counts| {
            let pairs: Vec<(Signal, u32)> = Signal::all()
                .iter()
                .copied()
                .zip(counts)
                .collect();
            SignalScoreMap::from_counts(&pairs)
        })
    }

    proptest! {
        #[test]
        fn winner_is_first_profile_at_the_maximum(scores in arb_scores()) {
            let clusters = ProfileAssigner::cluster_scores(&scores);
            let max = clusters.iter().map(|c| c.score).max().unwrap();
            let expected = clusters.iter().find(|c| c.score == max).unwrap().profile;

            prop_assert_eq!(ProfileAssigner::assign_profile(&scores), expected);
        }

        #[test]
        fn any_counts_pick_the_first_maximum(counts in prop::collection::vec(any::<u32>(), 6)) {
            let scores = counts_map(counts);
            let clusters = ProfileAssigner::cluster_scores(&scores);
            let max = clusters.iter().map(|c| c.score).max().unwrap();
            let expected = clusters.iter().find(|c| c.score == max).unwrap().profile;

            prop_assert_eq!(ProfileAssigner::assign_profile(&scores), expected);
        }

        #[test]
        fn assignment_is_repeatable(scores in arb_scores()) {
            let first = ProfileAssigner::assign_profile(&scores);
            for _ in 0..3 {
                prop_assert_eq!(ProfileAssigner::assign_profile(&scores), first);
            }
        }
    }
}
