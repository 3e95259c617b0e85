//! Moves and the win/lose/draw rule

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    pub fn name(&self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }

    /// The move this one beats
    pub fn beats(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// Uniform draw, 1/3 each
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn name(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

/// Result from the player's side
pub fn judge(player: Choice, computer: Choice) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if player.beats() == computer {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_table() {
        use Choice::*;
        let table = [
            (Rock, Rock, Outcome::Draw),
            (Rock, Paper, Outcome::Lose),
            (Rock, Scissors, Outcome::Win),
            (Paper, Rock, Outcome::Win),
            (Paper, Paper, Outcome::Draw),
            (Paper, Scissors, Outcome::Lose),
            (Scissors, Rock, Outcome::Lose),
            (Scissors, Paper, Outcome::Win),
            (Scissors, Scissors, Outcome::Draw),
        ];
        for (player, computer, expected) in table {
            assert_eq!(judge(player, computer), expected, "{:?} vs {:?}", player, computer);
        }
    }

    #[test]
    fn test_judge_is_antisymmetric() {
        for a in Choice::ALL {
            for b in Choice::ALL {
                match judge(a, b) {
                    Outcome::Win => assert_eq!(judge(b, a), Outcome::Lose),
                    Outcome::Lose => assert_eq!(judge(b, a), Outcome::Win),
                    Outcome::Draw => assert_eq!(a, b),
                }
            }
        }
    }

    #[test]
    fn test_random_is_roughly_uniform() {
        let mut rng = rand::thread_rng();
        let mut counts = [0usize; 3];
        for _ in 0..6000 {
            let choice = Choice::random(&mut rng);
            let idx = Choice::ALL.iter().position(|c| *c == choice).unwrap();
            counts[idx] += 1;
        }
        for count in counts {
            assert!((1600..=2400).contains(&count), "skewed draw counts: {:?}", counts);
        }
    }
}
