//! Scoring and selection result types.

use sources::Candidate;

/// Outcome of scoring one candidate against one request.
///
/// `Rejected` always means "never selectable": it overrides any points a
/// candidate earned before the rejecting check fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Comparable quality score; higher is better
    Accepted(u32),
    /// Candidate must never be chosen
    Rejected,
}

impl Verdict {
    /// Conventional integer projection: the score, or -1 for a rejection.
    pub fn score(self) -> i64 {
        match self {
            Verdict::Accepted(points) => points as i64,
            Verdict::Rejected => -1,
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

/// Per-request selection result.
///
/// Never silently converted to success: `NoneFound` must surface in the
/// run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected { candidate: Candidate, score: u32 },
    NoneFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_projects_to_minus_one() {
        assert_eq!(Verdict::Rejected.score(), -1);
        assert!(!Verdict::Rejected.is_accepted());
    }

    #[test]
    fn accepted_projects_to_points() {
        assert_eq!(Verdict::Accepted(30).score(), 30);
        assert!(Verdict::Accepted(0).is_accepted());
    }
}
