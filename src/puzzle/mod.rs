pub mod session;
pub mod types;

pub use session::{base_count, PuzzleSession};
pub use types::{Base, Palette, PromptSlot, SlotMark, SubmitReport, Token, TokenId, Verdict};
