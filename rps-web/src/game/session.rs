//! Per-page game session: config, round state and the latest readouts

use rand::Rng;

use super::round::{RoundState, Transition};
use crate::config::GameConfig;
use crate::gesture::{classify, Gesture, LandmarkSet};

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    round: RoundState,
    /// Gesture seen this frame, `None` when no hand
    gesture: Option<Gesture>,
    last_transition: Transition,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            round: RoundState::new(),
            gesture: None,
            last_transition: Transition::Reset,
        }
    }

    /// One detection frame: classify the hand (if any) and advance the round
    pub fn step<R: Rng + ?Sized>(&mut self, hand: Option<&LandmarkSet>, rng: &mut R) -> Transition {
        self.gesture = hand.map(|h| classify(h, self.config.finger_margin));
        self.last_transition = self.round.update(self.gesture, rng);
        self.last_transition
    }

    /// Drop the current round without a frame (page hidden, user request)
    pub fn reset(&mut self) {
        self.gesture = None;
        self.round.reset();
        self.last_transition = Transition::Reset;
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    pub fn last_transition(&self) -> Transition {
        self.last_transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{HandLandmark, FINGERTIPS, LANDMARK_COUNT};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hand(raised: usize) -> LandmarkSet {
        let mut points = [HandLandmark::new(0.5, 0.7, 0.0); LANDMARK_COUNT];
        for &tip in FINGERTIPS.iter().take(raised) {
            points[tip].y = 0.3;
        }
        LandmarkSet::new(points)
    }

    #[test]
    fn test_step_classifies_and_draws() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = GameSession::default();

        let t = session.step(Some(&hand(2)), &mut rng);
        assert!(t.is_drawn());
        assert_eq!(session.gesture(), Some(Gesture::Scissors));
        assert!(session.round().hand_present());
    }

    #[test]
    fn test_step_without_hand_resets() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = GameSession::default();
        session.step(Some(&hand(0)), &mut rng);

        assert_eq!(session.step(None, &mut rng), Transition::Reset);
        assert_eq!(session.gesture(), None);
        assert!(!session.round().hand_present());
    }

    #[test]
    fn test_margin_change_applies_next_frame() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = GameSession::default();
        // tips 0.4 above PIP: a margin this large hides every finger
        let wide = session.config().with_finger_margin(0.45).unwrap();
        session.set_config(wide);

        session.step(Some(&hand(4)), &mut rng);
        assert_eq!(session.gesture(), Some(Gesture::Rock));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = GameSession::default();
        session.step(Some(&hand(4)), &mut rng);
        session.reset();

        assert_eq!(session.last_transition(), Transition::Reset);
        assert_eq!(session.round().computer_choice(), None);
        assert_eq!(session.round().rounds_played(), 1);
    }
}
