//! Letter tiles and the random draws that produce them.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of letters dealt to a client when it connects.
pub const INITIAL_HAND: usize = 21;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    #[error("{0:?} is not an uppercase letter A-Z")]
    NotUppercase(char),
}

/// A single uppercase ASCII letter, `A` through `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

impl Letter {
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_uppercase() {
            Ok(Self(c))
        } else {
            Err(LetterError::NotUppercase(c))
        }
    }

    /// Uniform draw over the 26 letters, with replacement.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
    }

    pub fn as_char(self) -> char { self.0 }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;
    fn try_from(c: char) -> Result<Self, Self::Error> { Letter::new(c) }
}

impl From<Letter> for char {
    fn from(l: Letter) -> char { l.0 }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Draw the hand sent on connection.
pub fn initial_hand<R: Rng + ?Sized>(rng: &mut R) -> Vec<Letter> {
    (0..INITIAL_HAND).map(|_| Letter::random(rng)).collect()
}
