//! Core configuration types: sound requests and scoring weights.

use serde::Deserialize;

/// One desired output artifact.
///
/// A request names the file to produce, the free-text query used to find
/// candidates for it, and a soft upper bound on acceptable clip length.
/// Requests are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SoundRequest {
    /// Output filename, unique within a manifest (e.g. "sign.mp3")
    pub target_name: String,

    /// Free-text search string sent to the candidate source
    pub query: String,

    /// Soft upper bound on clip length; the scorer tolerates up to
    /// `duration_tolerance_factor` times this value
    pub max_duration_secs: u32,

    /// Human-readable label shown in progress output
    #[serde(default)]
    pub description: String,
}

impl SoundRequest {
    pub fn new(
        target_name: impl Into<String>,
        query: impl Into<String>,
        max_duration_secs: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            target_name: target_name.into(),
            query: query.into(),
            max_duration_secs,
            description: description.into(),
        }
    }
}

/// Point values and thresholds of the candidate-scoring heuristic.
///
/// The defaults reproduce the hardcoded heuristic the tool shipped with
/// (20/10/5/5 points, 100k/10k follower cutoffs, 3x duration tolerance).
/// They can be overridden per field from the manifest file, but changing
/// them changes which candidates win, so the defaults are the
/// behavior-compatible choice.
///
/// Note the two distinct follower cutoffs: above `popularity_bonus_threshold`
/// a channel earns the bonus, below `popularity_floor` an untrusted channel
/// is rejected outright, and the band in between is tolerated without a
/// bonus. The three-tier shape is intentional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Points for a channel matching the trust list
    pub trust_bonus: u32,

    /// Points for a channel above `popularity_bonus_threshold` followers
    pub popularity_bonus: u32,

    /// Follower count above which the popularity bonus applies
    pub popularity_bonus_threshold: u64,

    /// Follower count below which an untrusted channel is rejected
    pub popularity_floor: u64,

    /// Points for a clip within the tolerated duration
    pub duration_bonus: u32,

    /// Multiplier on a request's max duration before rejection fires
    pub duration_tolerance_factor: u32,

    /// Points for a licensing keyword in the title
    pub keyword_bonus: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            trust_bonus: 20,
            popularity_bonus: 10,
            popularity_bonus_threshold: 100_000,
            popularity_floor: 10_000,
            duration_bonus: 5,
            duration_tolerance_factor: 3,
            keyword_bonus: 5,
        }
    }
}
