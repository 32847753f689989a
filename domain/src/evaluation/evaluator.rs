//! Label vote evaluation
//!
//! Turns a label configuration and its current votes into a [`LabelStatus`].
//! Every function is described by one row of the table in [`evaluate`];
//! adding a function means adding a row there and nowhere else.
//!
//! Only the highest and lowest votes matter. A vote equal to the label's
//! maximum counts as approval only when that maximum is positive, and a vote
//! equal to the minimum counts only when the minimum is negative, so a zero
//! vote on a `0..+1` label is neither.

use super::permitted::PermittedRange;
use super::status::{LabelStatus, LabelStatuses};
use crate::label::{LabelConfig, LabelFunction, LabelTypes};
use crate::vote::VoteSet;
use std::collections::BTreeMap;

/// Evaluate the votes on one label
///
/// Deterministic and total: an empty vote set yields the default status with
/// every flag cleared.
///
/// # Example
///
/// ```
/// use labelgate_domain::{LabelConfig, LabelFunction, LabelValue, Vote, VoteSet, Voter, evaluate};
///
/// let label = LabelConfig::new(
///     "CustomLabel",
///     [LabelValue::new(1, "Positive"), LabelValue::new(0, "No score"), LabelValue::new(-1, "Negative")],
/// )
/// .unwrap()
/// .with_function(LabelFunction::AnyWithBlock);
///
/// let votes: VoteSet = [Vote::new(Voter::account(1000), -1)].into_iter().collect();
/// let status = evaluate(&label, &votes);
///
/// assert!(status.rejected);
/// assert!(status.blocking);
/// assert!(!status.disliked);
/// ```
pub fn evaluate(config: &LabelConfig, votes: &VoteSet) -> LabelStatus {
    let (Some(max_vote), Some(min_vote)) = (votes.max_vote(), votes.min_vote()) else {
        return LabelStatus::default();
    };

    let at_max = config.max() > 0 && max_vote == config.max();
    let at_min = config.min() < 0 && min_vote == config.min();
    let negative = min_vote < 0;
    let function = config.function();

    //                                 approved  rejected  blocking  disliked
    let (approved, rejected, blocking, disliked) = match function {
        LabelFunction::NoOp => (false, at_min, false, false),
        LabelFunction::NoBlock => (at_max, negative, false, negative),
        LabelFunction::MaxNoBlock => (at_max, at_min, false, negative && !at_min),
        LabelFunction::AnyWithBlock => (at_max, negative, negative, false),
        LabelFunction::MaxWithBlock => (at_max, at_min, at_min, negative && !at_min),
    };

    let recommended = function.reports_approval() && !approved && max_vote > 0;

    LabelStatus {
        has_votes: true,
        approved,
        recommended,
        disliked,
        rejected,
        blocking,
        impossible: false,
        value: Some(if negative { min_vote } else { max_vote }),
    }
}

/// Evaluate one label, also deciding whether it is impossible to satisfy
///
/// A label is impossible when its function needs the maximum value, nobody
/// has cast it yet, and no eligible voter is permitted to.
pub fn evaluate_with_permitted(
    config: &LabelConfig,
    votes: &VoteSet,
    permitted: PermittedRange,
) -> LabelStatus {
    let mut status = evaluate(config, votes);
    status.impossible =
        config.function().requires_max() && !status.approved && permitted.max < config.max();
    status
}

/// Evaluate every configured label, in definition order
///
/// Labels without an entry in `votes` are evaluated against an empty vote
/// set. Entries for labels that are not configured are ignored.
pub fn evaluate_all(labels: &LabelTypes, votes: &BTreeMap<String, VoteSet>) -> LabelStatuses {
    let empty = VoteSet::new();
    labels
        .iter()
        .map(|label| {
            let label_votes = votes.get(label.name()).unwrap_or(&empty);
            (label.name(), evaluate(label, label_votes))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LabelValue;
    use crate::vote::{Vote, Voter};

    // ==================== Helpers ====================

    /// -1..+1 label
    fn custom(function: LabelFunction) -> LabelConfig {
        LabelConfig::new(
            "CustomLabel",
            [
                LabelValue::new(1, "Positive"),
                LabelValue::new(0, "No score"),
                LabelValue::new(-1, "Negative"),
            ],
        )
        .unwrap()
        .with_function(function)
    }

    /// 0..+1 label
    fn positive_only(function: LabelFunction) -> LabelConfig {
        LabelConfig::new(
            "CustomLabel2",
            [LabelValue::new(1, "Positive"), LabelValue::new(0, "No score")],
        )
        .unwrap()
        .with_function(function)
    }

    /// -2..+2 label
    fn wide(function: LabelFunction) -> LabelConfig {
        LabelConfig::code_review().with_function(function)
    }

    fn votes(values: &[i16]) -> VoteSet {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Vote::new(Voter::account(1000 + i as u32), *v))
            .collect()
    }

    // ==================== Properties across all functions ====================

    #[test]
    fn empty_vote_set_is_all_false() {
        for function in LabelFunction::ALL {
            for label in [custom(function), positive_only(function), wide(function)] {
                assert_eq!(evaluate(&label, &VoteSet::new()), LabelStatus::default());
            }
        }
    }

    #[test]
    fn max_vote_approves_except_noop() {
        for function in LabelFunction::ALL {
            let status = evaluate(&wide(function), &votes(&[2]));
            assert_eq!(
                status.approved,
                function != LabelFunction::NoOp,
                "{function}"
            );
            assert!(!status.recommended, "{function}");
            assert!(status.has_votes);
        }
    }

    #[test]
    fn min_vote_rejects_everywhere_blocks_only_with_block_functions() {
        for function in LabelFunction::ALL {
            for label in [custom(function), wide(function)] {
                let status = evaluate(&label, &votes(&[label.min()]));
                assert!(status.rejected, "{function} {}", label.range());
                assert_eq!(
                    status.blocking,
                    matches!(
                        function,
                        LabelFunction::AnyWithBlock | LabelFunction::MaxWithBlock
                    ),
                    "{function} {}",
                    label.range()
                );
            }
        }
    }

    #[test]
    fn non_min_negative_vote_blocks_only_any_with_block() {
        for function in LabelFunction::ALL {
            let status = evaluate(&wide(function), &votes(&[-1]));
            assert_eq!(
                status.blocking,
                function == LabelFunction::AnyWithBlock,
                "{function}"
            );
            assert_eq!(
                status.disliked,
                matches!(
                    function,
                    LabelFunction::NoBlock
                        | LabelFunction::MaxNoBlock
                        | LabelFunction::MaxWithBlock
                ),
                "{function}"
            );
        }
    }

    #[test]
    fn noop_never_blocks() {
        let label = wide(LabelFunction::NoOp);
        let sets: [&[i16]; 6] = [&[-2], &[-1], &[-2, 2], &[0, 0], &[1], &[-2, -1, 0, 1, 2]];
        for set in sets {
            let status = evaluate(&label, &votes(set));
            assert!(!status.blocking);
            assert!(!status.approved);
            assert!(!status.recommended);
            assert!(!status.disliked);
        }
    }

    // ==================== Decision table rows ====================

    #[test]
    fn no_block_rejects_any_negative_without_blocking() {
        let status = evaluate(&wide(LabelFunction::NoBlock), &votes(&[-1]));
        assert!(status.rejected);
        assert!(status.disliked);
        assert!(!status.blocking);
    }

    #[test]
    fn max_no_block_separates_rejected_and_disliked() {
        let label = wide(LabelFunction::MaxNoBlock);

        let min = evaluate(&label, &votes(&[-2]));
        assert!(min.rejected);
        assert!(!min.disliked);
        assert!(!min.blocking);

        let dislike = evaluate(&label, &votes(&[-1]));
        assert!(!dislike.rejected);
        assert!(dislike.disliked);
    }

    #[test]
    fn any_with_block_blocks_on_any_negative() {
        let status = evaluate(&wide(LabelFunction::AnyWithBlock), &votes(&[-1, 2]));
        assert!(status.rejected);
        assert!(status.blocking);
        assert!(!status.disliked);
        assert!(status.approved);
    }

    #[test]
    fn max_with_block_only_min_blocks() {
        let label = wide(LabelFunction::MaxWithBlock);

        let dislike = evaluate(&label, &votes(&[-1, 1]));
        assert!(dislike.disliked);
        assert!(!dislike.rejected);
        assert!(!dislike.blocking);
        assert!(dislike.recommended);

        let veto = evaluate(&label, &votes(&[-2, -1, 2]));
        assert!(veto.rejected);
        assert!(veto.blocking);
        assert!(!veto.disliked);
        assert!(veto.approved);
    }

    #[test]
    fn recommended_excludes_approved() {
        let label = wide(LabelFunction::MaxWithBlock);

        let recommended = evaluate(&label, &votes(&[1]));
        assert!(recommended.recommended);
        assert!(!recommended.approved);

        let approved = evaluate(&label, &votes(&[1, 2]));
        assert!(approved.approved);
        assert!(!approved.recommended);
    }

    #[test]
    fn zero_votes_only_mark_has_votes() {
        for function in LabelFunction::ALL {
            let status = evaluate(&wide(function), &votes(&[0, 0]));
            assert!(status.has_votes);
            assert!(status.is_no_effect(), "{function}");
            assert_eq!(status.value, Some(0));
        }
    }

    #[test]
    fn representative_value_prefers_negative() {
        let label = wide(LabelFunction::MaxWithBlock);
        assert_eq!(evaluate(&label, &votes(&[2, -1])).value, Some(-1));
        assert_eq!(evaluate(&label, &votes(&[1, 2, 0])).value, Some(2));
        assert_eq!(evaluate(&label, &VoteSet::new()).value, None);
    }

    #[test]
    fn internal_votes_count() {
        let label = custom(LabelFunction::MaxWithBlock);
        let set: VoteSet = [Vote::new(Voter::Internal, -1)].into_iter().collect();
        assert!(evaluate(&label, &set).blocking);
    }

    // ==================== Single-label outcomes ====================

    #[test]
    fn noop_min_vote_rejects_without_blocking() {
        let status = evaluate(&custom(LabelFunction::NoOp), &votes(&[-1]));
        assert!(status.rejected);
        assert!(!status.blocking);
    }

    #[test]
    fn any_with_block_min_vote_rejects_and_blocks() {
        let status = evaluate(&custom(LabelFunction::AnyWithBlock), &votes(&[-1]));
        assert!(status.rejected);
        assert!(status.blocking);
        assert!(!status.disliked);
    }

    #[test]
    fn max_with_block_min_vote_blocks_despite_zero_vote() {
        let status = evaluate(&custom(LabelFunction::default()), &votes(&[-1, 0]));
        assert!(status.rejected);
        assert!(status.blocking);
        assert!(!status.disliked);
    }

    #[test]
    fn any_with_block_zero_votes_on_positive_only_label_have_no_effect() {
        let label = positive_only(LabelFunction::AnyWithBlock);

        for set in [votes(&[0]), votes(&[0, 0])] {
            let status = evaluate(&label, &set);
            assert!(status.has_votes);
            assert!(!status.approved);
            assert!(!status.rejected);
            assert!(!status.blocking);
            assert!(!status.disliked);
        }
    }

    #[test]
    fn zero_vote_on_positive_only_label_is_not_a_rejection() {
        for function in LabelFunction::ALL {
            let status = evaluate(&positive_only(function), &votes(&[0]));
            assert!(!status.rejected, "{function}");
            assert!(!status.blocking, "{function}");
        }
    }

    // ==================== Impossible hook ====================

    #[test]
    fn impossible_when_nobody_may_cast_max() {
        let label = wide(LabelFunction::MaxWithBlock);

        let status = evaluate_with_permitted(&label, &votes(&[1]), PermittedRange::new(-1, 1));
        assert!(status.impossible);

        let possible = evaluate_with_permitted(&label, &votes(&[1]), PermittedRange::new(-2, 2));
        assert!(!possible.impossible);
    }

    #[test]
    fn impossible_ignored_when_approved_or_not_required() {
        let approved = evaluate_with_permitted(
            &wide(LabelFunction::MaxWithBlock),
            &votes(&[2]),
            PermittedRange::NONE,
        );
        assert!(!approved.impossible);

        for function in [
            LabelFunction::AnyWithBlock,
            LabelFunction::NoBlock,
            LabelFunction::NoOp,
        ] {
            let status =
                evaluate_with_permitted(&wide(function), &VoteSet::new(), PermittedRange::NONE);
            assert!(!status.impossible, "{function}");
        }
    }

    #[test]
    fn plain_evaluate_never_impossible() {
        let status = evaluate(&wide(LabelFunction::MaxWithBlock), &VoteSet::new());
        assert!(!status.impossible);
    }

    // ==================== evaluate_all ====================

    #[test]
    fn evaluate_all_follows_definition_order() {
        let labels = LabelTypes::new(vec![
            positive_only(LabelFunction::AnyWithBlock),
            custom(LabelFunction::MaxWithBlock),
        ])
        .unwrap();

        let mut by_label = BTreeMap::new();
        by_label.insert("CustomLabel".to_string(), votes(&[-1]));
        by_label.insert("Unconfigured".to_string(), votes(&[1]));

        let statuses = evaluate_all(&labels, &by_label);
        let names: Vec<&str> = statuses.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["CustomLabel2", "CustomLabel"]);
        assert!(!statuses.get("CustomLabel2").unwrap().has_votes);
        assert!(statuses.get("CustomLabel").unwrap().blocking);
        assert!(statuses.get("Unconfigured").is_none());
    }
}
