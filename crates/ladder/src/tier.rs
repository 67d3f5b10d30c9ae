//! Core tier trait.
//!
//! This module defines the [`Tier`] trait, the abstraction for every rung of
//! a ladder. The trait is generic over a context type `C` (the blackboard the
//! tier reads and may update) and an action type `A`.

use crate::Verdict;

/// One rung of a priority ladder.
pub trait Tier<C, A>: Send + Sync {
    /// Stable name used in logs and decision records.
    fn name(&self) -> &'static str;

    /// Evaluate this tier against the context.
    ///
    /// Tiers may mutate the context even when they pass (e.g. to discard a
    /// stale memory entry), so evaluation order matters.
    fn evaluate(&self, ctx: &mut C) -> Verdict<A>;
}

/// Blanket implementation for boxed tiers, enabling heterogeneous ladders.
impl<C, A> Tier<C, A> for Box<dyn Tier<C, A>> {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn evaluate(&self, ctx: &mut C) -> Verdict<A> {
        (**self).evaluate(ctx)
    }
}

type TierFn<C, A> = Box<dyn Fn(&mut C) -> Verdict<A> + Send + Sync>;

/// Adapts a closure into a named tier.
pub struct FnTier<C, A> {
    name: &'static str,
    run: TierFn<C, A>,
}

impl<C, A> FnTier<C, A> {
    pub fn new<F>(name: &'static str, run: F) -> Self
    where
        F: Fn(&mut C) -> Verdict<A> + Send + Sync + 'static,
    {
        Self {
            name,
            run: Box::new(run),
        }
    }
}

impl<C, A> Tier<C, A> for FnTier<C, A> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, ctx: &mut C) -> Verdict<A> {
        (self.run)(ctx)
    }
}
