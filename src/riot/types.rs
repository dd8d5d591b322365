use serde::Deserialize;

/// Representation of the account data response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

/// Representation of the match data response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub info: InfoDto,
}

impl MatchDto {
    /// Match creation time as epoch seconds (the wire carries milliseconds).
    pub fn game_creation_secs(&self) -> u64 {
        self.info.game_creation / 1000
    }

    /// Participant with the strictly greatest damage dealt to champions.
    /// On equal damage the earliest roster entry wins. `None` only for an
    /// empty roster, which the upstream contract rules out.
    pub fn top_damage_participant(&self) -> Option<&ParticipantDto> {
        self.info.participants.iter().fold(None, |best, p| {
            match best {
                Some(b) if p.total_damage_dealt_to_champions > b.total_damage_dealt_to_champions => {
                    Some(p)
                }
                None => Some(p),
                _ => best,
            }
        })
    }
}

/// Representation of the match info data response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoDto {
    pub participants: Vec<ParticipantDto>,
    pub game_creation: u64,
}

/// Representation of the participant data response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub total_damage_dealt_to_champions: u32,
}

#[cfg(test)]
pub(crate) fn dummy_match(game_creation_ms: u64, damages: &[(&str, u32)]) -> MatchDto {
    MatchDto {
        info: InfoDto {
            participants: damages
                .iter()
                .map(|(puuid, dmg)| ParticipantDto {
                    puuid: (*puuid).into(),
                    total_damage_dealt_to_champions: *dmg,
                })
                .collect(),
            game_creation: game_creation_ms,
        },
    }
}
