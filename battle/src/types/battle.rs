//! Validated battle and turn model

use kinesis_protocol::{BattleId, BattleRecord, TurnRecord};
use thiserror::Error;

use super::creature::{CreatureProfile, CreatureState, MoveDetails};
use super::pokemon_type::Type;
use super::side::{PerSide, Side};
use super::species::{SpeciesTable, species_id};

/// A record that can't be turned into a [`Battle`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    #[error("Battle record has no battle_id")]
    MissingId,

    #[error("Battle {0} has no timeline")]
    MissingTimeline(BattleId),

    #[error("Battle {0} has no player 1 roster")]
    MissingRoster(BattleId),
}

/// One turn of the timeline
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    /// 1-based turn number
    pub number: u32,

    /// Each side's active pokemon at the end of the turn
    pub states: PerSide<CreatureState>,

    /// Each side's move, `None` if it made no offensive move
    pub moves: PerSide<Option<MoveDetails>>,
}

impl Turn {
    pub fn new(number: u32, p1: CreatureState, p2: CreatureState) -> Self {
        Self {
            number,
            states: PerSide::new(p1, p2),
            moves: PerSide::new(None, None),
        }
    }

    pub fn with_move(mut self, side: Side, details: MoveDetails) -> Self {
        self.moves[side] = Some(details);
        self
    }

    /// Create from a log turn; `index` is its 0-based position in the timeline
    pub fn from_protocol(record: &TurnRecord, index: usize) -> Self {
        Self {
            number: record.turn.unwrap_or(index as u32 + 1),
            states: PerSide::new(
                CreatureState::from_protocol(&record.p1_pokemon_state),
                CreatureState::from_protocol(&record.p2_pokemon_state),
            ),
            moves: PerSide::new(
                record.p1_move_details.as_ref().and_then(MoveDetails::from_protocol),
                record.p2_move_details.as_ref().and_then(MoveDetails::from_protocol),
            ),
        }
    }

    pub fn state(&self, side: Side) -> &CreatureState {
        &self.states[side]
    }

    pub fn move_of(&self, side: Side) -> Option<&MoveDetails> {
        self.moves[side].as_ref()
    }
}

/// A recorded battle, ready for feature extraction
#[derive(Debug, Clone, PartialEq)]
pub struct Battle {
    pub id: BattleId,

    /// Player 1's full team, lead first
    pub p1_roster: Vec<CreatureProfile>,

    /// Player 2's lead; the rest of that team is only seen through the timeline
    pub p2_lead: Option<CreatureProfile>,

    pub timeline: Vec<Turn>,

    /// Whether player 1 won, when known
    pub outcome: Option<bool>,
}

impl Battle {
    pub fn new(
        id: BattleId,
        p1_roster: Vec<CreatureProfile>,
        p2_lead: Option<CreatureProfile>,
        timeline: Vec<Turn>,
    ) -> Self {
        Self {
            id,
            p1_roster,
            p2_lead,
            timeline,
            outcome: None,
        }
    }

    pub fn with_outcome(mut self, won: bool) -> Self {
        self.outcome = Some(won);
        self
    }

    /// Validate a log record
    ///
    /// The id, the timeline and player 1's roster must be present (they may
    /// be empty). Everything below them defaults.
    pub fn from_protocol(record: BattleRecord) -> Result<Self, BattleError> {
        let id = record.battle_id.ok_or(BattleError::MissingId)?;
        let roster = record
            .p1_team_details
            .ok_or_else(|| BattleError::MissingRoster(id.clone()))?;
        let timeline = record
            .battle_timeline
            .ok_or_else(|| BattleError::MissingTimeline(id.clone()))?;

        Ok(Self {
            p1_roster: roster.iter().map(CreatureProfile::from_protocol).collect(),
            p2_lead: record.p2_lead_details.as_ref().map(CreatureProfile::from_protocol),
            timeline: timeline
                .iter()
                .enumerate()
                .map(|(idx, turn)| Turn::from_protocol(turn, idx))
                .collect(),
            outcome: record.player_won,
            id,
        })
    }

    /// Number of recorded turns
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Name of the pokemon a side starts with: player 1's first roster
    /// entry, player 2's lead
    pub fn starting_name(&self, side: Side) -> Option<&str> {
        let name = match side {
            Side::P1 => self.p1_roster.first().map(|p| p.name.as_str()),
            Side::P2 => self.p2_lead.as_ref().map(|p| p.name.as_str()),
        };
        name.filter(|n| !n.is_empty())
    }

    /// Disclosed profile for a name (player 1's roster or player 2's lead)
    pub fn profile(&self, name: &str) -> Option<&CreatureProfile> {
        let id = species_id(name);
        self.p1_roster
            .iter()
            .chain(self.p2_lead.iter())
            .find(|p| species_id(&p.name) == id)
    }

    /// Types of a pokemon by name
    ///
    /// The species table is authoritative; a profile disclosed in this
    /// battle is used when the table doesn't know the species.
    pub fn types_of(&self, name: Option<&str>, species: &SpeciesTable) -> Vec<Type> {
        let Some(name) = name else {
            return Vec::new();
        };

        if let Some(types) = species.types_of(name) {
            return types.to_vec();
        }

        self.profile(name)
            .map(|p| p.types.clone())
            .unwrap_or_default()
    }

    /// Distinct names a side fielded during the timeline, in order of appearance
    pub fn observed_names(&self, side: Side) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for turn in &self.timeline {
            if let Some(name) = turn.state(side).name.as_deref()
                && !names.contains(&name)
            {
                names.push(name);
            }
        }
        names
    }
}

impl TryFrom<BattleRecord> for Battle {
    type Error = BattleError;

    fn try_from(record: BattleRecord) -> Result<Self, Self::Error> {
        Self::from_protocol(record)
    }
}
