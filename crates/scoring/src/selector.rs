//! Best-candidate selection.

use manifest::SoundRequest;
use sources::Candidate;
use tracing::debug;

use crate::scorer::Scorer;
use crate::verdict::{SelectionOutcome, Verdict};

/// Pick the best accepted candidate for a request.
///
/// Candidates are scored in the order the source produced them, with no
/// re-sorting. The running best is replaced only on a strictly greater
/// score: on a tie the earlier candidate wins, since the source's own
/// relevance order puts presumptively better matches first. If nothing is
/// accepted (or the sequence is empty), returns
/// [`SelectionOutcome::NoneFound`].
pub fn select_best(
    scorer: &Scorer,
    candidates: &[Candidate],
    request: &SoundRequest,
) -> SelectionOutcome {
    let mut best: Option<(&Candidate, u32)> = None;

    for candidate in candidates {
        match scorer.evaluate(candidate, request) {
            Verdict::Rejected => {
                debug!(
                    title = %candidate.title,
                    channel = %candidate.channel_name,
                    "candidate rejected"
                );
            }
            Verdict::Accepted(score) => {
                debug!(
                    title = %candidate.title,
                    channel = %candidate.channel_name,
                    score,
                    "candidate accepted"
                );
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((candidate, score));
                }
            }
        }
    }

    match best {
        Some((candidate, score)) => SelectionOutcome::Selected {
            candidate: candidate.clone(),
            score,
        },
        None => SelectionOutcome::NoneFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifest::SoundManifest;

    fn scorer() -> Scorer {
        let manifest = SoundManifest::builtin();
        Scorer::new(manifest.trusted_channels, manifest.weights)
    }

    fn request() -> SoundRequest {
        SoundRequest::new("sign.mp3", "wax seal stamp sound effect", 10, "")
    }

    fn candidate(url: &str, channel: &str, followers: Option<u64>, duration: u64) -> Candidate {
        Candidate {
            title: "clip".to_string(),
            channel_name: channel.to_string(),
            follower_count: followers,
            duration_secs: Some(duration),
            source_url: url.to_string(),
        }
    }

    #[test]
    fn empty_sequence_yields_none_found() {
        assert_eq!(
            select_best(&scorer(), &[], &request()),
            SelectionOutcome::NoneFound
        );
    }

    #[test]
    fn all_rejected_yields_none_found() {
        let candidates = vec![
            candidate("u1", "nobody1", Some(10), 5),
            candidate("u2", "nobody2", None, 5),
        ];
        assert_eq!(
            select_best(&scorer(), &candidates, &request()),
            SelectionOutcome::NoneFound
        );
    }

    #[test]
    fn tie_keeps_earlier_candidate() {
        // both trusted, same duration fit, identical scores
        let candidates = vec![
            candidate("u1", "Pixabay", None, 5),
            candidate("u2", "ZapSplat", None, 5),
        ];
        match select_best(&scorer(), &candidates, &request()) {
            SelectionOutcome::Selected { candidate, score } => {
                assert_eq!(candidate.source_url, "u1");
                assert_eq!(score, 25);
            }
            SelectionOutcome::NoneFound => panic!("expected a selection"),
        }
    }

    #[test]
    fn strictly_better_later_candidate_replaces_earlier() {
        let candidates = vec![
            candidate("u1", "bighit", Some(200_000), 5), // 15
            candidate("u2", "Pixabay", None, 5),         // 25
        ];
        match select_best(&scorer(), &candidates, &request()) {
            SelectionOutcome::Selected { candidate, score } => {
                assert_eq!(candidate.source_url, "u2");
                assert_eq!(score, 25);
            }
            SelectionOutcome::NoneFound => panic!("expected a selection"),
        }
    }

    #[test]
    fn rejected_candidates_never_win_over_low_scores() {
        // a single accepted candidate beats any number of rejections
        let candidates = vec![
            candidate("u1", "nobody", Some(5), 5),
            candidate("u2", "bighit", Some(200_000), 5),
            candidate("u3", "nobody2", None, 5),
        ];
        match select_best(&scorer(), &candidates, &request()) {
            SelectionOutcome::Selected { candidate, .. } => {
                assert_eq!(candidate.source_url, "u2");
            }
            SelectionOutcome::NoneFound => panic!("expected a selection"),
        }
    }

    #[test]
    fn wax_seal_scenario_selects_first_url() {
        let candidates = vec![
            Candidate {
                title: "Wax Seal Stamp SFX - Royalty Free".to_string(),
                channel_name: "Free Sound Effects".to_string(),
                follower_count: Some(50_000),
                duration_secs: Some(8),
                source_url: "u1".to_string(),
            },
            Candidate {
                title: "Random seal video".to_string(),
                channel_name: "randomguy99".to_string(),
                follower_count: Some(500),
                duration_secs: Some(9),
                source_url: "u2".to_string(),
            },
        ];
        match select_best(&scorer(), &candidates, &request()) {
            SelectionOutcome::Selected { candidate, score } => {
                assert_eq!(candidate.source_url, "u1");
                assert_eq!(score, 30);
            }
            SelectionOutcome::NoneFound => panic!("expected a selection"),
        }
    }
}
