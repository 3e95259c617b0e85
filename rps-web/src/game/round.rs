//! Round state machine
//!
//! Re-evaluated once per detection frame. Holding the same sign keeps the
//! computer's move; changing sign (or the hand re-entering) draws a new one.
//! No hand and `Unknown` both clear the round.

use rand::Rng;

use super::choice::{judge, Choice, Outcome};
use crate::gesture::Gesture;

/// A committed round: the computer's move and how it went for the player
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    pub computer: Choice,
    pub outcome: Outcome,
}

/// What a frame did to the round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// No hand or ambiguous gesture, round cleared
    Reset,
    /// New computer move drawn
    Drawn(Round),
    /// Same sign held, previous round kept
    Held(Round),
}

impl Transition {
    pub fn round(&self) -> Option<Round> {
        match self {
            Transition::Reset => None,
            Transition::Drawn(round) | Transition::Held(round) => Some(*round),
        }
    }

    pub fn is_drawn(&self) -> bool {
        matches!(self, Transition::Drawn(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundState {
    /// Last sign that committed or held a round
    last_gesture: Option<Choice>,
    /// Present exactly while a hand shows a playable sign
    current: Option<Round>,
    rounds_played: u32,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand_present(&self) -> bool {
        self.current.is_some()
    }

    pub fn last_gesture(&self) -> Option<Choice> {
        self.last_gesture
    }

    pub fn computer_choice(&self) -> Option<Choice> {
        self.current.map(|r| r.computer)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.current.map(|r| r.outcome)
    }

    pub fn current(&self) -> Option<Round> {
        self.current
    }

    /// Number of fresh computer draws this session
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Advance one frame. `None` means no hand was detected.
    pub fn update<R: Rng + ?Sized>(&mut self, gesture: Option<Gesture>, rng: &mut R) -> Transition {
        let player = match gesture.and_then(|g| g.as_choice()) {
            Some(choice) => choice,
            None => {
                self.reset();
                return Transition::Reset;
            }
        };

        let transition = match self.current {
            Some(round) if self.last_gesture == Some(player) => Transition::Held(round),
            _ => {
                let computer = Choice::random(rng);
                let round = Round {
                    computer,
                    outcome: judge(player, computer),
                };
                self.current = Some(round);
                self.rounds_played = self.rounds_played.wrapping_add(1);
                Transition::Drawn(round)
            }
        };

        self.last_gesture = Some(player);
        transition
    }

    /// Clear the round as if the hand left the frame
    pub fn reset(&mut self) {
        self.current = None;
        self.last_gesture = None;
    }
}
