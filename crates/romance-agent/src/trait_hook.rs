//! Callbacks run around every trait grant.
//!
//! Any code path that grants a trait goes through
//! [`SocialWorldMut::gain_trait`](crate::SocialWorldMut::gain_trait), so a
//! hook registered here sees grants made by third-party code too.  Each hook
//! may stash one trait in `before_gain` and receives it back in `after_gain`.

use romance_core::{AgentId, Trait, TraitSet};

pub trait TraitGainHook {
    /// Called before `gained` is inserted.  The returned value is handed to
    /// [`after_gain`](Self::after_gain) unchanged.
    fn before_gain(&self, _agent: AgentId, _traits: &TraitSet, _gained: Trait) -> Option<Trait> {
        None
    }

    /// Called after `gained` was inserted.  May edit `traits` in place.
    fn after_gain(
        &self,
        _agent:      AgentId,
        _traits:     &mut TraitSet,
        _gained:     Trait,
        _remembered: Option<Trait>,
    ) {
    }
}
