//! Composite ladder nodes.
//!
//! [`Ladder`] is the arbitration root (first acting tier wins) and
//! [`Guarded`] gates a tier behind a read-only predicate.

use crate::{Tier, Verdict};

type Guard<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;

/// Name reported when every tier passed and the default action was used.
pub const DEFAULT_TIER: &str = "default";

/// The action chosen for one cycle and the tier that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision<A> {
    pub tier: &'static str,
    pub action: A,
}

/// Evaluates tiers in order until one acts.
///
/// # Semantics
///
/// - If a tier returns `Act`, the ladder **stops immediately** with that action
/// - If a tier returns `Pass`, the ladder **continues** to the next tier
/// - If every tier passes, the ladder returns its default action
///
/// This is a short-circuited logical OR over the tiers, with a guaranteed
/// terminal value so a cycle can never end without an action.
pub struct Ladder<C, A> {
    tiers: Vec<Box<dyn Tier<C, A>>>,
    default: A,
}

impl<C, A: Copy> Ladder<C, A> {
    /// Creates a ladder from tiers in priority order.
    ///
    /// # Panics
    ///
    /// Panics if `tiers` is empty. A ladder with no tiers always returns the
    /// default and almost certainly indicates a wiring mistake.
    pub fn new(tiers: Vec<Box<dyn Tier<C, A>>>, default: A) -> Self {
        assert!(!tiers.is_empty(), "Ladder must have at least one tier");
        Self { tiers, default }
    }

    /// Tier names in evaluation order.
    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }

    /// Runs one cycle of arbitration.
    pub fn decide(&self, ctx: &mut C) -> Decision<A> {
        for tier in &self.tiers {
            if let Verdict::Act(action) = tier.evaluate(ctx) {
                return Decision {
                    tier: tier.name(),
                    action,
                };
            }
        }
        Decision {
            tier: DEFAULT_TIER,
            action: self.default,
        }
    }
}

/// Runs `tier` only when `guard` holds; passes otherwise.
///
/// The guard sees the context read-only, so a failed guard never leaves side
/// effects behind. This is a short-circuited AND of guard and tier.
pub struct Guarded<C, A> {
    guard: Guard<C>,
    tier: Box<dyn Tier<C, A>>,
}

impl<C, A> Guarded<C, A> {
    pub fn new<G>(guard: G, tier: Box<dyn Tier<C, A>>) -> Self
    where
        G: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self {
            guard: Box::new(guard),
            tier,
        }
    }
}

impl<C, A> Tier<C, A> for Guarded<C, A> {
    fn name(&self) -> &'static str {
        self.tier.name()
    }

    fn evaluate(&self, ctx: &mut C) -> Verdict<A> {
        if (self.guard)(ctx) {
            self.tier.evaluate(ctx)
        } else {
            Verdict::Pass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FnTier;

    struct TestContext {
        value: i32,
        visited: Vec<&'static str>,
    }

    impl TestContext {
        fn new(value: i32) -> Self {
            Self {
                value,
                visited: Vec::new(),
            }
        }
    }

    struct PassAlways(&'static str);
    impl Tier<TestContext, char> for PassAlways {
        fn name(&self) -> &'static str {
            self.0
        }

        fn evaluate(&self, ctx: &mut TestContext) -> Verdict<char> {
            ctx.visited.push(self.0);
            Verdict::Pass
        }
    }

    struct ActWith(&'static str, char);
    impl Tier<TestContext, char> for ActWith {
        fn name(&self) -> &'static str {
            self.0
        }

        fn evaluate(&self, ctx: &mut TestContext) -> Verdict<char> {
            ctx.visited.push(self.0);
            Verdict::Act(self.1)
        }
    }

    #[test]
    fn first_acting_tier_wins() {
        let ladder = Ladder::new(
            vec![
                Box::new(PassAlways("a")),
                Box::new(ActWith("b", 'b')),
                Box::new(ActWith("c", 'c')), // Should not execute
            ],
            'z',
        );

        let mut ctx = TestContext::new(0);
        let decision = ladder.decide(&mut ctx);
        assert_eq!(decision, Decision { tier: "b", action: 'b' });
        assert_eq!(ctx.visited, vec!["a", "b"]);
    }

    #[test]
    fn all_passing_falls_back_to_default() {
        let ladder = Ladder::new(vec![Box::new(PassAlways("a")), Box::new(PassAlways("b"))], 'z');

        let mut ctx = TestContext::new(0);
        let decision = ladder.decide(&mut ctx);
        assert_eq!(decision.tier, DEFAULT_TIER);
        assert_eq!(decision.action, 'z');
    }

    #[test]
    fn guard_blocks_tier_without_side_effects() {
        let guarded: Guarded<TestContext, char> =
            Guarded::new(|ctx: &TestContext| ctx.value > 10, Box::new(ActWith("hot", 'h')));

        let mut cold = TestContext::new(3);
        assert_eq!(guarded.evaluate(&mut cold), Verdict::Pass);
        assert!(cold.visited.is_empty());

        let mut hot = TestContext::new(42);
        assert_eq!(guarded.evaluate(&mut hot), Verdict::Act('h'));
        assert_eq!(guarded.name(), "hot");
    }

    #[test]
    fn closures_can_be_tiers() {
        let ladder = Ladder::new(
            vec![
                Box::new(FnTier::new("bump", |ctx: &mut TestContext| {
                    ctx.value += 1;
                    Verdict::Pass
                })),
                Box::new(FnTier::new("read", |ctx: &mut TestContext| {
                    Verdict::from((ctx.value == 1).then_some('r'))
                })),
            ],
            'z',
        );

        let mut ctx = TestContext::new(0);
        assert_eq!(ladder.decide(&mut ctx).action, 'r');
        assert_eq!(ladder.tier_names(), vec!["bump", "read"]);
    }
}
