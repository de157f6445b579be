use serde::{Deserialize, Serialize};

use crate::domain::ParticipantId;

pub const TRIAD_SIZE: usize = 3;

/// Триада: до трёх участников, ровно один победитель.
/// Последняя триада может быть неполной (1 или 2 участника).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Triad {
    pub index: u32,
    pub members: [Option<ParticipantId>; TRIAD_SIZE],
    pub winner: Option<ParticipantId>,
}

impl Triad {
    pub fn from_chunk(index: u32, chunk: &[ParticipantId]) -> Self {
        let mut members = [None; TRIAD_SIZE];
        for (slot, id) in members.iter_mut().zip(chunk) {
            *slot = Some(*id);
        }
        Self {
            index,
            members,
            winner: None,
        }
    }

    pub fn present_members(&self) -> Vec<ParticipantId> {
        self.members.iter().flatten().copied().collect()
    }

    pub fn has_member(&self, participant: ParticipantId) -> bool {
        self.members.contains(&Some(participant))
    }

    pub fn is_judged(&self) -> bool {
        self.winner.is_some()
    }
}
