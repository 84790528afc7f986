//! Typed relationship edges and short-term memories.

use romance_core::{AgentId, RelationId, Tick};

/// The type of a directed relationship edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RelationKind {
    Spouse,
    Fiance,
    Lover,
    ExSpouse,
    ExLover,
    /// `other` is this agent's parent.
    Parent,
    /// `other` is this agent's child.
    Child,
    Sibling,
    /// Declared by configuration; see `RomanceSettings::love_relations`.
    Custom(RelationId),
}

impl RelationKind {
    /// The edge the other side of the relationship holds.
    pub fn reciprocal(self) -> RelationKind {
        match self {
            RelationKind::Parent => RelationKind::Child,
            RelationKind::Child  => RelationKind::Parent,
            other => other,
        }
    }

    /// Built-in partner relations.  Custom love relations are answered by
    /// the settings, not here.
    pub fn is_builtin_love(self) -> bool {
        matches!(self, RelationKind::Spouse | RelationKind::Fiance | RelationKind::Lover)
    }

    pub fn is_spouse_like(self) -> bool {
        matches!(self, RelationKind::Spouse | RelationKind::Fiance)
    }

    pub fn is_former_partner(self) -> bool {
        matches!(self, RelationKind::ExSpouse | RelationKind::ExLover)
    }

    pub fn is_family(self) -> bool {
        matches!(self, RelationKind::Parent | RelationKind::Child | RelationKind::Sibling)
    }
}

/// One outgoing relationship edge.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Relation {
    pub kind:  RelationKind,
    pub other: AgentId,
}

// ── Memories ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum MemoryKind {
    /// "`other` turned down my hookup advance."
    RebuffedMyHookupAttempt,
    /// "`other` made an unwanted hookup advance on me."
    FailedHookupAttemptOnMe,
    RebuffedMyDateAttempt,
    FailedDateAttemptOnMe,
    Other(u16),
}

/// A short-term memory about another agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Memory {
    pub kind:  MemoryKind,
    pub other: Option<AgentId>,
    pub tick:  Tick,
}

impl Memory {
    pub fn about(kind: MemoryKind, other: AgentId, tick: Tick) -> Self {
        Self { kind, other: Some(other), tick }
    }
}
