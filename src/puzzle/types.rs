use std::fmt;

use crate::geometry::Point;

/// One of the four DNA bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    T,
    G,
    C,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::A, Base::T, Base::G, Base::C];

    /// The complementary base. Applying it twice gives back the original.
    pub fn pair(self) -> Base {
        match self {
            Base::A => Base::T,
            Base::T => Base::A,
            Base::G => Base::C,
            Base::C => Base::G,
        }
    }

    fn index(self) -> usize {
        match self {
            Base::A => 0,
            Base::T => 1,
            Base::G => 2,
            Base::C => 3,
        }
    }

    pub fn from_char(c: char) -> Option<Base> {
        match c.to_ascii_uppercase() {
            'A' => Some(Base::A),
            'T' => Some(Base::T),
            'G' => Some(Base::G),
            'C' => Some(Base::C),
            _ => None,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Base::A => "A",
            Base::T => "T",
            Base::G => "G",
            Base::C => "C",
        };
        f.write_str(symbol)
    }
}

/// Visual state of a slot after a drop or a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotMark {
    Empty,
    Placed,
    Match,
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSlot {
    pub prompt: Base,
    pub placement: Option<Base>,
    pub mark: SlotMark,
    pub position: Point,
}

impl PromptSlot {
    pub fn new(prompt: Base, position: Point) -> Self {
        PromptSlot {
            prompt,
            placement: None,
            mark: SlotMark::Empty,
            position,
        }
    }

    pub fn required(&self) -> Base {
        self.prompt.pair()
    }

    pub fn is_correct(&self) -> bool {
        self.placement == Some(self.required())
    }

    pub fn clear(&mut self) {
        self.placement = None;
        self.mark = SlotMark::Empty;
    }
}

/// Per-base supply of answer tokens for one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    quota: u32,
    remaining: [u32; 4],
}

impl Palette {
    pub fn new(quota: u32) -> Self {
        Palette {
            quota,
            remaining: [quota; 4],
        }
    }

    pub fn remaining(&self, base: Base) -> u32 {
        self.remaining[base.index()]
    }

    /// Takes one token of `base`; `false` when that base is used up.
    pub fn take(&mut self, base: Base) -> bool {
        let slot = &mut self.remaining[base.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        debug_assert!(*slot < self.quota);
        true
    }

    pub fn reset(&mut self) {
        self.remaining = [self.quota; 4];
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub u32);

/// A spawned answer token, free-floating until dropped onto a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: TokenId,
    pub base: Base,
    pub position: Point,
}

/// Result of checking every slot at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub verdict: Verdict,
    /// Per-slot `Match` / `Mismatch`, in display order.
    pub marks: Vec<SlotMark>,
}

impl SubmitReport {
    pub fn matched(&self) -> usize {
        self.marks.iter().filter(|m| **m == SlotMark::Match).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairing_is_an_involution() {
        for base in Base::ALL {
            assert_eq!(base.pair().pair(), base);
            assert_ne!(base.pair(), base);
        }
    }

    #[test]
    fn palette_stops_at_zero() {
        let mut palette = Palette::new(2);
        assert!(palette.take(Base::G));
        assert!(palette.take(Base::G));
        assert!(!palette.take(Base::G));
        assert_eq!(palette.remaining(Base::G), 0);
        assert_eq!(palette.remaining(Base::C), 2);

        palette.reset();
        assert_eq!(palette.remaining(Base::G), 2);
    }

    #[test]
    fn base_parses_either_case() {
        assert_eq!(Base::from_char('g'), Some(Base::G));
        assert_eq!(Base::from_char('T'), Some(Base::T));
        assert_eq!(Base::from_char('x'), None);
    }
}
