//! What an agent is currently doing, and what it has been told to do next.

use romance_core::{AgentId, BedId};

/// The activity an agent is executing right now.
///
/// The named variants are the ones eligibility rules care about; everything
/// else the host runs maps to `Other`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum ActivityKind {
    #[default]
    Idle,
    Work,
    Relax,

    // Incapacitated
    WaitDowned,
    Vomit,
    Deathrest,
    ExtinguishSelf,
    Flee,
    FleeAndCower,

    // Ceremonies
    MarryAdjacent,
    SpectateCeremony,
    GiveSpeech,
    BestowingCeremony,
    PrepareSkylantern,
    PrisonerExecution,
    Sacrifice,
    Scarify,
    Blind,

    // Emergency work
    BeatFire,
    Arrest,
    Capture,
    EscortPrisonerToBed,
    Rescue,
    CarryToBiosculpterPod,
    BringBabyToSafety,

    // Medical work
    TakeToBedToOperate,
    TakeWoundedPrisonerToBed,
    TendPatient,
    FeedPatient,

    // Romance
    CasualLovin,
    Lovin,
    LeadHookup,
    DateLead,
    DateFollow,
    HangoutLead,
    HangoutFollow,
    TryRomance,

    // Player-ordered
    LayDown,
    ReleasePrisoner,
    UseCommsConsole,
    EnterTransporter,
    EnterCryptosleepCasket,
    EnterBiosculpterPod,
    TradeWithAgent,
    ApplyTechprint,

    SocialFight,
    Breastfeed,

    /// A host activity with no meaning to the engine.
    Other(u16),
}

/// An activity pushed onto an agent's queue by the engine.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct QueuedActivity {
    pub kind:    ActivityKind,
    pub partner: Option<AgentId>,
    pub bed:     Option<BedId>,
    /// Sleeping slot within `bed` (0 or 1 for a double bed).
    pub slot:    u8,
}
