/// Adaptive difficulty: a success streak that widens the next puzzle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DifficultyModel {
    streak: u32,
    cap: Option<u32>,
}

impl DifficultyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A model whose bonus never exceeds `cap`. The streak itself still counts freely.
    pub fn with_cap(cap: Option<u32>) -> Self {
        DifficultyModel { streak: 0, cap }
    }

    pub fn record_outcome(&mut self, correct: bool) {
        self.streak = if correct {
            self.streak.saturating_add(1)
        } else {
            self.streak.saturating_sub(1)
        };
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Extra slots added to the next puzzle.
    pub fn bonus(&self) -> u32 {
        match self.cap {
            Some(cap) => self.streak.min(cap),
            None => self.streak,
        }
    }
}
