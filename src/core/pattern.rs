//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, black)
//! - 1 = Present (letter in word, wrong position, yellow)
//! - 2 = Correct (letter in correct position, green)
//!
//! Each position contributes digit × 3^position to the code. The word length
//! is stored alongside the code so patterns of different lengths never compare
//! equal.

use super::word::{MAX_WORD_LEN, Word, letter_index};
use crate::error::EngineError;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter does not occur (black)
    Absent,
    /// Letter occurs elsewhere (yellow)
    Present,
    /// Letter is in the right position (green)
    Correct,
}

impl Feedback {
    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse a feedback symbol
    ///
    /// Accepts `G`/🟩 for Correct, `Y`/🟨 for Present and `B`/`-`/`_`/⬛/⬜ for
    /// Absent, case-insensitively.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | '-' | '_' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical letter symbol (`G`, `Y`, `B`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Emoji square for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    code: u32,
    len: u8,
}

impl Pattern {
    /// All-Correct pattern for words of `len` letters
    ///
    /// # Panics
    /// Panics in debug mode if `len` exceeds `MAX_WORD_LEN`
    #[must_use]
    pub fn solved(len: usize) -> Self {
        Self::from_feedback(&vec![Feedback::Correct; len])
    }

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: &[Feedback]) -> Self {
        debug_assert!(feedback.len() <= MAX_WORD_LEN);

        let mut code = 0u32;
        let mut multiplier = 1u32;
        for fb in feedback {
            code += fb.digit() * multiplier;
            multiplier *= 3;
        }

        Self {
            code,
            len: feedback.len() as u8,
        }
    }

    /// Raw base-3 code
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.code
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// True for the zero-length pattern
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_solved(self) -> bool {
        self.len > 0 && self.count(Feedback::Correct) == self.len()
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the
    ///    answer's letter pool
    /// 2. Second pass: mark Present while the pool still holds the letter,
    ///    otherwise Absent
    ///
    /// The number of Correct and Present marks for a letter therefore never
    /// exceeds its count in `answer`.
    ///
    /// # Examples
    /// ```
    /// use wordle_calibrator::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.to_string(), "BBGBG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "words must share a length");

        let guess_chars = guess.chars();
        let answer_chars = answer.chars();
        let mut result = [Feedback::Absent; MAX_WORD_LEN];
        let mut available = answer.char_counts();

        for (i, (&g, &a)) in guess_chars.iter().zip(answer_chars).enumerate() {
            if g == a {
                result[i] = Feedback::Correct;
                available[letter_index(g)] -= 1;
            }
        }

        for (i, &g) in guess_chars.iter().enumerate() {
            if result[i] == Feedback::Correct {
                continue;
            }
            let count = &mut available[letter_index(g)];
            if *count > 0 {
                result[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self::from_feedback(&result[..guess_chars.len()])
    }

    /// Feedback at a single position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[must_use]
    pub fn at(self, position: usize) -> Feedback {
        assert!(position < self.len(), "position out of range");
        Feedback::from_digit(self.code / 3u32.pow(position as u32) % 3)
    }

    /// Iterate over per-position feedback
    pub fn feedback(self) -> impl Iterator<Item = Feedback> {
        let mut val = self.code;
        (0..self.len()).map(move |_| {
            let fb = Feedback::from_digit(val % 3);
            val /= 3;
            fb
        })
    }

    /// Count positions carrying the given feedback
    #[must_use]
    pub fn count(self, kind: Feedback) -> usize {
        self.feedback().filter(|&fb| fb == kind).count()
    }

    /// Parse a pattern such as `"GYBBG"` or `"🟩🟨⬛⬛🟩"` for words of
    /// `expected_len` letters
    ///
    /// # Errors
    /// Returns `EngineError::InvalidPattern` if the length differs from
    /// `expected_len` or a symbol is not recognised.
    ///
    /// # Examples
    /// ```
    /// use wordle_calibrator::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY", 5).unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬛🟩🟨", 5).unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("GYG", 5).is_err());
    /// ```
    pub fn parse(input: &str, expected_len: usize) -> Result<Self, EngineError> {
        let feedback = input
            .trim()
            .chars()
            .map(|ch| {
                Feedback::from_symbol(ch).ok_or_else(|| EngineError::InvalidPattern {
                    input: input.to_string(),
                    reason: format!("unrecognised symbol '{ch}'"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if feedback.len() != expected_len {
            return Err(EngineError::InvalidPattern {
                input: input.to_string(),
                reason: format!("expected {expected_len} symbols, got {}", feedback.len()),
            });
        }

        Ok(Self::from_feedback(&feedback))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback().map(Feedback::emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fb in self.feedback() {
            write!(f, "{}", fb.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.trim().chars().count();
        if len == 0 || len > MAX_WORD_LEN {
            return Err(EngineError::InvalidPattern {
                input: s.to_string(),
                reason: format!("pattern must have 1 to {MAX_WORD_LEN} symbols"),
            });
        }
        Self::parse(s, len)
    }
}
