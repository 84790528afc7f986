use serde::{Deserialize, Serialize};

/// Agent gender as the host reports it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    None,
    Male,
    Female,
}

impl Gender {
    /// The opposite binary gender; `None` stays `None`.
    pub fn opposite(self) -> Gender {
        match self {
            Gender::Male   => Gender::Female,
            Gender::Female => Gender::Male,
            Gender::None   => Gender::None,
        }
    }
}
