//! Text and colours for the three on-page readouts

use crate::game::{Outcome, RoundState};
use crate::gesture::Gesture;

pub const NO_HAND_TEXT: &str = "No hand detected";
pub const COMPUTER_PREFIX: &str = "Computer: ";

/// Player's sign readout; `None` means no hand this frame
pub fn sign_text(gesture: Option<Gesture>) -> String {
    match gesture {
        Some(g) => format!("You: {}", g.label()),
        None => NO_HAND_TEXT.to_string(),
    }
}

/// Computer move readout, bare prefix when no round is active
pub fn computer_text(state: &RoundState) -> String {
    match state.computer_choice() {
        Some(choice) => format!("{}{}", COMPUTER_PREFIX, choice.name()),
        None => COMPUTER_PREFIX.to_string(),
    }
}

/// Outcome readout, empty when no round is active
pub fn result_text(state: &RoundState) -> String {
    state.outcome().map(|o| o.name().to_string()).unwrap_or_default()
}

/// CSS colour for the outcome readout
pub fn result_color(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "green",
        Outcome::Lose => "red",
        Outcome::Draw => "yellow",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sign_text() {
        assert_eq!(sign_text(Some(Gesture::Scissors)), "You: Scissors");
        assert_eq!(sign_text(Some(Gesture::Unknown)), "You: Unknown");
        assert_eq!(sign_text(None), "No hand detected");
    }

    #[test]
    fn test_empty_round_text() {
        let state = RoundState::new();
        assert_eq!(computer_text(&state), "Computer: ");
        assert_eq!(result_text(&state), "");
    }

    #[test]
    fn test_active_round_text() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = RoundState::new();
        state.update(Some(Gesture::Paper), &mut rng);

        let round = state.current().unwrap();
        assert_eq!(computer_text(&state), format!("Computer: {}", round.computer.name()));
        assert_eq!(result_text(&state), round.outcome.name());
    }

    #[test]
    fn test_result_colors() {
        assert_eq!(result_color(Outcome::Win), "green");
        assert_eq!(result_color(Outcome::Lose), "red");
        assert_eq!(result_color(Outcome::Draw), "yellow");
    }
}
