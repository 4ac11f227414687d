//! Wordle feedback representation and calculation
//!
//! Each guessed letter gets one of three tags:
//! - Hit: correct letter, correct position
//! - Present: letter is in the word, but not here
//! - Miss: this copy of the letter is not needed anywhere
//!
//! A [`Pattern`] is the five tags for one guess, aligned by position.

use super::{InputError, WORD_LENGTH, Word};

/// Variation selector that copied emoji tiles often carry
const EMOJI_PRESENTATION: char = '\u{fe0f}';

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Hit,
    Present,
    Miss,
}

impl Feedback {
    /// Parse a single feedback symbol
    ///
    /// Accepts (case-insensitive):
    /// - 'G'/🟩 for Hit
    /// - 'Y'/'/'/🟨 for Present
    /// - '-'/'_'/'#'/'X'/⬜/⬛ for Miss
    ///
    /// # Errors
    /// Returns `InputError::UnknownSymbol` for anything else.
    pub fn from_char(ch: char) -> Result<Self, InputError> {
        match ch {
            'G' | 'g' | '🟩' => Ok(Self::Hit),
            'Y' | 'y' | '/' | '🟨' => Ok(Self::Present),
            '-' | '_' | '#' | 'X' | 'x' | '⬜' | '⬛' => Ok(Self::Miss),
            _ => Err(InputError::UnknownSymbol(ch)),
        }
    }

    /// Whether this tag tells us the letter is in the word
    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Hit | Self::Present)
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }
}

/// Feedback pattern for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_LENGTH]);

impl Pattern {
    /// All hits (perfect match)
    pub const PERFECT: Self = Self([Feedback::Hit; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedback)
    }

    /// Feedback at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Feedback {
        self.0[position]
    }

    /// Iterate over the tags in position order
    pub fn iter(&self) -> impl Iterator<Item = Feedback> + '_ {
        self.0.iter().copied()
    }

    /// Check if this is a perfect match (all hits)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Implements the puzzle's feedback rules, including duplicate letters:
    /// 1. Mark all exact matches (hits) and remove them from the letter pool
    /// 2. Left to right, mark a letter present if the pool still has a copy
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.at(2), Feedback::Hit);
    /// assert_eq!(pattern.at(1), Feedback::Miss);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::Miss; WORD_LENGTH];
        let mut available = [0u8; 26];

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Feedback::Hit;
            } else {
                available[usize::from(a - b'a')] += 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Feedback::Hit {
                continue;
            }
            let slot = &mut available[usize::from(g - b'a')];
            if *slot > 0 {
                result[i] = Feedback::Present;
                *slot -= 1;
            }
        }

        Self(result)
    }

    /// Parse a pattern from a string like "GY-G#" or "🟩🟨⬜🟩⬜"
    ///
    /// Surrounding whitespace and emoji variation selectors are ignored.
    ///
    /// # Errors
    /// Returns `InputError::InvalidLength` if the string does not hold exactly
    /// five symbols, or `InputError::UnknownSymbol` on the first unrecognized one.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-G#").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩⬜").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("GYZGG").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InputError> {
        let symbols: Vec<char> = s
            .trim()
            .chars()
            .filter(|&ch| ch != EMOJI_PRESENTATION)
            .collect();

        if symbols.len() != WORD_LENGTH {
            return Err(InputError::InvalidLength(symbols.len()));
        }

        let mut feedback = [Feedback::Miss; WORD_LENGTH];
        for (slot, ch) in feedback.iter_mut().zip(symbols) {
            *slot = Feedback::from_char(ch)?;
        }

        Ok(Self(feedback))
    }

    /// Convert pattern to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(Feedback::to_emoji).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Hit, Miss, Present};

    fn calc(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn pattern_perfect_constant() {
        assert!(Pattern::PERFECT.is_perfect());
        assert!(!Pattern::new([Hit, Hit, Hit, Hit, Present]).is_perfect());
    }

    #[test]
    fn pattern_all_miss() {
        let pattern = calc("abcde", "fghij");
        assert_eq!(pattern, Pattern::new([Miss; WORD_LENGTH]));
    }

    #[test]
    fn pattern_word_against_itself_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert!(calc(word, word).is_perfect());
        }
    }

    #[test]
    fn pattern_duplicate_letters_speed_vs_erase() {
        // S present, P miss, both E present (ERASE has two), D miss
        assert_eq!(
            calc("speed", "erase"),
            Pattern::new([Present, Miss, Present, Present, Miss])
        );
    }

    #[test]
    fn pattern_duplicate_letters_robot_vs_floor() {
        // First O is present, second O is a hit
        assert_eq!(
            calc("robot", "floor"),
            Pattern::new([Present, Present, Miss, Hit, Miss])
        );
    }

    #[test]
    fn pattern_excess_copy_is_miss() {
        // THOSE has one S: the first S in SELLS takes it, the last one misses
        assert_eq!(
            calc("sells", "those"),
            Pattern::new([Present, Present, Miss, Miss, Miss])
        );
    }

    #[test]
    fn pattern_hit_consumes_before_present() {
        // LEVEL has L at 0 and 4: L(0) hits, L(2) takes the last copy, L(3) misses
        assert_eq!(
            calc("lolly", "level"),
            Pattern::new([Hit, Miss, Present, Miss, Miss])
        );
    }

    #[test]
    fn pattern_parse_valid_encodings() {
        let p1 = Pattern::parse("GY#-/").unwrap();
        let p2 = Pattern::parse("gyx_y").unwrap();
        let p3 = Pattern::parse("🟩🟨⬜⬜🟨").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, Pattern::new([Hit, Present, Miss, Miss, Present]));
    }

    #[test]
    fn pattern_parse_dark_mode_share_text() {
        let expected = Pattern::new([Hit, Present, Miss, Hit, Present]);
        assert_eq!(Pattern::parse("🟩🟨⬛🟩🟨").unwrap(), expected);
        assert_eq!(Pattern::parse("🟩🟨⬜\u{fe0f}🟩🟨").unwrap(), expected);
        assert_eq!(
            Pattern::parse("🟩\u{fe0f}🟨\u{fe0f}⬛\u{fe0f}🟩\u{fe0f}🟨\u{fe0f}").unwrap(),
            expected
        );
    }

    #[test]
    fn pattern_parse_trims_whitespace() {
        assert_eq!(Pattern::parse("  GGGGG \n").unwrap(), Pattern::PERFECT);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert_eq!(Pattern::parse("GYGGYX"), Err(InputError::InvalidLength(6)));
        assert_eq!(Pattern::parse("GYG"), Err(InputError::InvalidLength(3)));
        assert_eq!(Pattern::parse(""), Err(InputError::InvalidLength(0)));
        // No implicit fallback to hit for unknown symbols
        assert_eq!(Pattern::parse("GQGGY"), Err(InputError::UnknownSymbol('Q')));
        assert_eq!(Pattern::parse("crane"), Err(InputError::UnknownSymbol('c')));
    }

    #[test]
    fn pattern_to_emoji() {
        let p = Pattern::new([Hit, Present, Miss, Hit, Present]);
        assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    }
}
