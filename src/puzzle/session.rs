use rand::Rng;

use super::types::{Base, Palette, PromptSlot, SlotMark, SubmitReport, Token, TokenId, Verdict};
use crate::config::PuzzleConfig;
use crate::geometry::Point;
use crate::layout;

/// Number of slots for a puzzle at `level` with a streak `bonus`.
pub fn base_count(config: &PuzzleConfig, level: u32, bonus: u32) -> usize {
    let level = level.max(1);
    (config.base_slots + (level - 1) * config.slots_per_level + bonus) as usize
}

/// One attempt at the base-pairing puzzle.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    slots: Vec<PromptSlot>,
    palette: Palette,
    tokens: Vec<Token>,
    next_token: u32,
    tolerance: i32,
}

impl PuzzleSession {
    /// Draws fresh prompt bases, independently and with replacement.
    pub fn generate<R: Rng>(
        config: &PuzzleConfig,
        level: u32,
        bonus: u32,
        rng: &mut R,
    ) -> Self {
        let count = base_count(config, level, bonus);
        let prompts = (0..count).map(|_| Base::ALL[rng.random_range(0..Base::ALL.len())]);
        Self::with_prompts(config, prompts)
    }

    /// Builds a puzzle over a known prompt sequence.
    pub fn with_prompts(config: &PuzzleConfig, prompts: impl IntoIterator<Item = Base>) -> Self {
        let prompts: Vec<Base> = prompts.into_iter().collect();
        let count = prompts.len();
        let slots = prompts
            .into_iter()
            .enumerate()
            .map(|(i, prompt)| PromptSlot::new(prompt, layout::slot_position(i, count)))
            .collect();

        PuzzleSession {
            slots,
            palette: Palette::new(config.palette_quota),
            tokens: Vec::new(),
            next_token: 0,
            tolerance: config.drop_tolerance,
        }
    }

    pub fn slots(&self) -> &[PromptSlot] {
        &self.slots
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Tokens spawned but not yet dropped onto a slot.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Spawns a free-floating `base` token at the spawn point.
    /// Does nothing once the palette has run out of `base`.
    pub fn place(&mut self, base: Base) -> Option<TokenId> {
        if !self.palette.take(base) {
            tracing::debug!(%base, "palette exhausted");
            return None;
        }
        let id = TokenId(self.next_token);
        self.next_token += 1;
        self.tokens.push(Token {
            id,
            base,
            position: layout::TOKEN_SPAWN,
        });
        Some(id)
    }

    /// Topmost free token whose cell contains `p`.
    pub fn token_at(&self, p: Point) -> Option<TokenId> {
        self.tokens
            .iter()
            .rev()
            .find(|t| {
                p.x >= t.position.x
                    && p.x < t.position.x + layout::CELL_SIZE
                    && p.y >= t.position.y
                    && p.y < t.position.y + layout::CELL_SIZE
            })
            .map(|t| t.id)
    }

    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    pub fn move_token(&mut self, id: TokenId, to: Point) {
        if let Some(token) = self.tokens.iter_mut().find(|t| t.id == id) {
            token.position = to;
        }
    }

    /// Drops a free token onto the nearest slot within tolerance of its position.
    ///
    /// Returns the slot index. A token with no slot in reach stays free.
    pub fn assign(&mut self, id: TokenId) -> Option<usize> {
        let pos = self.tokens.iter().position(|t| t.id == id)?;
        let token_at = self.tokens[pos].position;
        let (index, _) = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.position.near(token_at, self.tolerance))
            .min_by_key(|(_, slot)| {
                (slot.position.x - token_at.x).abs() + (slot.position.y - token_at.y).abs()
            })?;

        let token = self.tokens.remove(pos);
        let slot = &mut self.slots[index];
        slot.placement = Some(token.base);
        slot.mark = SlotMark::Placed;
        Some(index)
    }

    /// All-or-nothing check. A failed attempt flags every slot, then clears
    /// slots, tokens and palette for a fresh try.
    pub fn submit(&mut self) -> SubmitReport {
        let marks: Vec<SlotMark> = self
            .slots
            .iter()
            .map(|slot| {
                if slot.is_correct() {
                    SlotMark::Match
                } else {
                    SlotMark::Mismatch
                }
            })
            .collect();
        for (slot, mark) in self.slots.iter_mut().zip(&marks) {
            slot.mark = *mark;
        }

        let verdict = if marks.iter().all(|m| *m == SlotMark::Match) {
            Verdict::Correct
        } else {
            self.reset();
            Verdict::Incorrect
        };
        SubmitReport { verdict, marks }
    }

    fn reset(&mut self) {
        self.tokens.clear();
        for slot in &mut self.slots {
            slot.clear();
        }
        self.palette.reset();
    }
}
