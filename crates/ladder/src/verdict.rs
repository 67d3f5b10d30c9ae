//! Outcome of evaluating a single tier.

/// The result of evaluating one tier for one cycle.
///
/// A tier that acts has fully decided the cycle; a tier that passes hands
/// the decision to the next tier down. Passing is not an error: missing
/// preconditions (no target, no path) are expected every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict<A> {
    /// The tier chose this action.
    Act(A),
    /// The tier has nothing to say this cycle.
    Pass,
}

impl<A> From<Option<A>> for Verdict<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        match value {
            Some(action) => Verdict::Act(action),
            None => Verdict::Pass,
        }
    }
}
