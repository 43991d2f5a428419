//! The candidate scorer.
//!
//! Four checks run in a fixed order; the first rejecting one wins:
//!
//! 1. **Trust** — trust-listed channel earns `trust_bonus`; never rejects.
//! 2. **Popularity** — followers above `popularity_bonus_threshold` earn
//!    `popularity_bonus`; an untrusted channel with unknown or
//!    sub-`popularity_floor` followers is rejected outright. Untrusted
//!    channels between the floor and the threshold, and trusted channels
//!    with low or unknown reach, get neither bonus nor rejection.
//! 3. **Duration** — clips longer than `duration_tolerance_factor` times the
//!    request bound are rejected (the factor tolerates intros/outros);
//!    acceptable clips earn `duration_bonus`.
//! 4. **Keyword** — a licensing keyword in the title earns `keyword_bonus`;
//!    never rejects.
//!
//! With the default weights the maximum score is 40. An accepted trusted
//! candidate scores at least 25 (trust + duration). An accepted untrusted
//! one scores at least 15 (popularity + duration) above the bonus
//! threshold, or the bare duration bonus of 5 in the tolerated middle
//! tier.

use manifest::{ScoreWeights, SoundRequest, TrustList};
use sources::Candidate;

use crate::verdict::Verdict;

/// Title substrings that mark a clip as explicitly licensed.
const LICENSE_KEYWORDS: [&str; 2] = ["royalty free", "no copyright"];

/// What a single check contributes.
enum CheckOutcome {
    Award(u32),
    Neutral,
    Reject,
}

/// Evaluates one candidate against one request's acceptance policy.
///
/// Pure and deterministic: no I/O, no state retained between calls.
pub struct Scorer {
    trust: TrustList,
    weights: ScoreWeights,
}

impl Scorer {
    pub fn new(trust: TrustList, weights: ScoreWeights) -> Self {
        Self { trust, weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Score `candidate` for `request`.
    ///
    /// Checks run in their fixed order and evaluation stops at the first
    /// rejection, so no points accumulate past a rejecting check.
    pub fn evaluate(&self, candidate: &Candidate, request: &SoundRequest) -> Verdict {
        let trusted = self.trust.matches(&candidate.channel_name);

        let mut points = 0u32;
        if trusted {
            points += self.weights.trust_bonus;
        }

        match self.popularity_check(candidate, trusted) {
            CheckOutcome::Award(p) => points += p,
            CheckOutcome::Neutral => {}
            CheckOutcome::Reject => return Verdict::Rejected,
        }

        match self.duration_check(candidate, request) {
            CheckOutcome::Award(p) => points += p,
            CheckOutcome::Neutral => {}
            CheckOutcome::Reject => return Verdict::Rejected,
        }

        if let CheckOutcome::Award(p) = self.keyword_check(candidate) {
            points += p;
        }

        Verdict::Accepted(points)
    }

    /// Integer form of [`evaluate`](Self::evaluate): score, or -1 on
    /// rejection.
    pub fn score(&self, candidate: &Candidate, request: &SoundRequest) -> i64 {
        self.evaluate(candidate, request).score()
    }

    fn popularity_check(&self, candidate: &Candidate, trusted: bool) -> CheckOutcome {
        match candidate.follower_count {
            Some(n) if n > self.weights.popularity_bonus_threshold => {
                CheckOutcome::Award(self.weights.popularity_bonus)
            }
            // An untrusted channel with unknown or low reach is never
            // acceptable, whatever the other signals say.
            Some(n) if !trusted && n < self.weights.popularity_floor => CheckOutcome::Reject,
            None if !trusted => CheckOutcome::Reject,
            _ => CheckOutcome::Neutral,
        }
    }

    fn duration_check(&self, candidate: &Candidate, request: &SoundRequest) -> CheckOutcome {
        let tolerated =
            request.max_duration_secs as u64 * self.weights.duration_tolerance_factor as u64;
        if candidate.effective_duration_secs() > tolerated {
            CheckOutcome::Reject
        } else {
            CheckOutcome::Award(self.weights.duration_bonus)
        }
    }

    fn keyword_check(&self, candidate: &Candidate) -> CheckOutcome {
        let title = candidate.title.to_lowercase();
        if LICENSE_KEYWORDS.iter().any(|kw| title.contains(kw)) {
            CheckOutcome::Award(self.weights.keyword_bonus)
        } else {
            CheckOutcome::Neutral
        }
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

    fn candidate(
        title: &str,
        channel: &str,
        followers: Option<u64>,
        duration: Option<u64>,
    ) -> Candidate {
        Candidate {
            title: title.to_string(),
            channel_name: channel.to_string(),
            follower_count: followers,
            duration_secs: duration,
            source_url: "u".to_string(),
        }
    }

    #[test]
    fn untrusted_low_reach_is_rejected_regardless_of_other_signals() {
        let s = scorer();
        let r = request();
        // perfect title and duration do not save a low-reach unknown channel
        let low = candidate("Royalty Free perfection", "randomguy99", Some(500), Some(3));
        let unknown = candidate("Royalty Free perfection", "randomguy99", None, Some(3));
        assert_eq!(s.score(&low, &r), -1);
        assert_eq!(s.score(&unknown, &r), -1);
    }

    #[test]
    fn overlong_clip_is_rejected_even_when_trusted_and_popular() {
        let s = scorer();
        let r = request();
        let c = candidate("Seal SFX", "Pixabay", Some(2_000_000), Some(31));
        assert_eq!(s.score(&c, &r), -1);
    }

    #[test]
    fn duration_tolerance_boundary_is_inclusive() {
        let s = scorer();
        let r = request();
        // exactly 3x the bound still passes; one second more rejects
        let at_limit = candidate("Seal SFX", "Pixabay", None, Some(30));
        let over = candidate("Seal SFX", "Pixabay", None, Some(31));
        assert_eq!(s.score(&at_limit, &r), 25);
        assert_eq!(s.score(&over, &r), -1);
    }

    #[test]
    fn unknown_duration_rejects_by_default() {
        let s = scorer();
        let r = request();
        let c = candidate("Seal SFX", "Pixabay", Some(2_000_000), None);
        assert_eq!(s.score(&c, &r), -1);
    }

    #[test]
    fn unknown_duration_tolerated_by_long_form_request() {
        let s = scorer();
        let long_form = SoundRequest::new("ambience.mp3", "ambient loop", 340, "");
        let c = candidate("Ambience", "Pixabay", None, None);
        // 999 sentinel < 3 * 340, so the duration check passes
        assert_eq!(s.score(&c, &long_form), 25);
    }

    #[test]
    fn trusted_accepted_candidate_never_scores_below_twenty() {
        let s = scorer();
        let r = request();
        // worst accepted case for a trusted channel: no followers known,
        // no keyword, just trust + duration
        let c = candidate("some clip", "ZapSplat", None, Some(5));
        assert_eq!(s.score(&c, &r), 25);
        assert!(s.score(&c, &r) >= 20);
    }

    #[test]
    fn untrusted_accepted_floor_is_fifteen() {
        let s = scorer();
        let r = request();
        // the popularity gate forces >100k followers on untrusted channels
        let c = candidate("some clip", "bigrandomchannel", Some(100_001), Some(5));
        assert_eq!(s.score(&c, &r), 15);
    }

    #[test]
    fn maximum_score_is_forty() {
        let s = scorer();
        let r = request();
        let c = candidate(
            "Wax Seal - Royalty Free",
            "Pixabay",
            Some(500_000),
            Some(8),
        );
        assert_eq!(s.score(&c, &r), 40);
    }

    #[test]
    fn untrusted_middle_tier_is_tolerated_without_bonus() {
        let s = scorer();
        let r = request();
        // 10k..=100k followers: no bonus, no rejection
        let c = candidate("some clip", "midchannel", Some(50_000), Some(5));
        assert_eq!(s.score(&c, &r), 5);
    }

    #[test]
    fn bonus_threshold_is_exclusive() {
        let s = scorer();
        let r = request();
        let at = candidate("c", "bigchannel", Some(100_000), Some(5));
        let above = candidate("c", "bigchannel", Some(100_001), Some(5));
        assert_eq!(s.score(&at, &r), 5);
        assert_eq!(s.score(&above, &r), 15);
    }

    #[test]
    fn popularity_floor_is_exclusive() {
        let s = scorer();
        let r = request();
        let at_floor = candidate("c", "smallchannel", Some(10_000), Some(5));
        let below = candidate("c", "smallchannel", Some(9_999), Some(5));
        assert_eq!(s.score(&at_floor, &r), 5);
        assert_eq!(s.score(&below, &r), -1);
    }

    #[test]
    fn trusted_channel_survives_low_or_unknown_followers() {
        let s = scorer();
        let r = request();
        let low = candidate("c", "Epidemic Sound", Some(12), Some(5));
        let unknown = candidate("c", "Epidemic Sound", None, Some(5));
        assert_eq!(s.score(&low, &r), 25);
        assert_eq!(s.score(&unknown, &r), 25);
    }

    #[test]
    fn keyword_bonus_is_case_insensitive() {
        let s = scorer();
        let r = request();
        let royalty = candidate("ROYALTY FREE seal", "Pixabay", None, Some(5));
        let copyright = candidate("seal (No Copyright)", "Pixabay", None, Some(5));
        assert_eq!(s.score(&royalty, &r), 30);
        assert_eq!(s.score(&copyright, &r), 30);
    }

    #[test]
    fn wax_seal_scenario() {
        let s = scorer();
        let r = SoundRequest::new("sign.mp3", "wax seal stamp sound effect", 10, "");
        let u1 = candidate(
            "Wax Seal Stamp SFX - Royalty Free",
            "Free Sound Effects",
            Some(50_000),
            Some(8),
        );
        let u2 = candidate("Random seal video", "randomguy99", Some(500), Some(9));
        // trust 20 + duration 5 + keyword 5; 50k followers earn no bonus
        assert_eq!(s.score(&u1, &r), 30);
        assert_eq!(s.score(&u2, &r), -1);
    }

    #[test]
    fn evaluate_is_deterministic() {
        let s = scorer();
        let r = request();
        let c = candidate("clip", "Pixabay", Some(200_000), Some(5));
        assert_eq!(s.evaluate(&c, &r), s.evaluate(&c, &r));
    }
}
