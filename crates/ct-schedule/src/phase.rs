//! Motion phases of the simulated day.

/// Which motion rule applies at a timestamp.
///
/// Commute variants carry the fractional progress through their window,
/// in `[0, 1)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phase {
    /// At home, before the morning commute.
    BeforeMorning,
    /// Travelling home → job.
    MorningCommute(f64),
    /// At the job, between the two commutes.
    MidDay,
    /// Travelling job → home.
    EveningCommute(f64),
    /// At home, after the evening commute.
    AfterEvening,
}

impl Phase {
    /// `true` for the two interpolation phases, which carry no jitter.
    pub fn is_commute(self) -> bool {
        matches!(self, Phase::MorningCommute(_) | Phase::EveningCommute(_))
    }

    /// Short stable name, used in logs and summaries.
    pub fn name(self) -> &'static str {
        match self {
            Phase::BeforeMorning => "before-morning",
            Phase::MorningCommute(_) => "morning-commute",
            Phase::MidDay => "mid-day",
            Phase::EveningCommute(_) => "evening-commute",
            Phase::AfterEvening => "after-evening",
        }
    }
}
