use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::env::EnvError;

/// Number of symbols in the alphabet.
pub const NUM_SYMBOLS: usize = 20;

/// The amino acids an agent can place into a sequence.
///
/// Discriminants are the one-based symbol ids used in observations; 0 is
/// reserved for padding and never names a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Symbol {
    Alanine = 1,
    Arginine = 2,
    Asparagine = 3,
    AsparticAcid = 4,
    Cysteine = 5,
    GlutamicAcid = 6,
    Glutamine = 7,
    Glycine = 8,
    Histidine = 9,
    Isoleucine = 10,
    Leucine = 11,
    Lysine = 12,
    Methionine = 13,
    Phenylalanine = 14,
    Proline = 15,
    Serine = 16,
    Threonine = 17,
    Tryptophan = 18,
    Tyrosine = 19,
    Valine = 20,
}

// Indexed by `Symbol::ordinal`.
const CHARGES: [i8; NUM_SYMBOLS] = [
    0,  // ALANINE
    1,  // ARGININE
    0,  // ASPARAGINE
    -1, // ASPARTIC_ACID
    0,  // CYSTEINE
    -1, // GLUTAMIC_ACID
    0,  // GLUTAMINE
    0,  // GLYCINE
    1,  // HISTIDINE (weakly at pH 7)
    0,  // ISOLEUCINE
    0,  // LEUCINE
    1,  // LYSINE
    0,  // METHIONINE
    0,  // PHENYLALANINE
    0,  // PROLINE
    0,  // SERINE
    0,  // THREONINE
    0,  // TRYPTOPHAN
    0,  // TYROSINE
    0,  // VALINE
];

const NAMES: [&str; NUM_SYMBOLS] = [
    "ALANINE",
    "ARGININE",
    "ASPARAGINE",
    "ASPARTIC_ACID",
    "CYSTEINE",
    "GLUTAMIC_ACID",
    "GLUTAMINE",
    "GLYCINE",
    "HISTIDINE",
    "ISOLEUCINE",
    "LEUCINE",
    "LYSINE",
    "METHIONINE",
    "PHENYLALANINE",
    "PROLINE",
    "SERINE",
    "THREONINE",
    "TRYPTOPHAN",
    "TYROSINE",
    "VALINE",
];

impl Symbol {
    /// Every symbol, ordered by id.
    pub const ALL: [Symbol; NUM_SYMBOLS] = [
        Symbol::Alanine,
        Symbol::Arginine,
        Symbol::Asparagine,
        Symbol::AsparticAcid,
        Symbol::Cysteine,
        Symbol::GlutamicAcid,
        Symbol::Glutamine,
        Symbol::Glycine,
        Symbol::Histidine,
        Symbol::Isoleucine,
        Symbol::Leucine,
        Symbol::Lysine,
        Symbol::Methionine,
        Symbol::Phenylalanine,
        Symbol::Proline,
        Symbol::Serine,
        Symbol::Threonine,
        Symbol::Tryptophan,
        Symbol::Tyrosine,
        Symbol::Valine,
    ];

    /// One-based id, as it appears in observations.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Zero-based position in [`Symbol::ALL`].
    pub const fn ordinal(self) -> usize {
        self as usize - 1
    }

    pub const fn charge(self) -> i32 {
        CHARGES[self.ordinal()] as i32
    }

    pub const fn name(self) -> &'static str {
        NAMES[self.ordinal()]
    }

    pub fn from_id(id: u8) -> Option<Symbol> {
        let ordinal = (id as usize).checked_sub(1)?;
        Self::ALL.get(ordinal).copied()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbol {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        NAMES
            .iter()
            .position(|name| *name == upper)
            .map(|ordinal| Self::ALL[ordinal])
            .ok_or_else(|| EnvError::UnknownSymbolName(s.to_string()))
    }
}

/// Signed weight of the symbol with the given one-based id.
pub fn lookup_weight(id: u8) -> Result<i32, EnvError> {
    Symbol::from_id(id)
        .map(Symbol::charge)
        .ok_or(EnvError::UnknownSymbol(id))
}

/// All valid symbol ids in ascending order.
pub fn all() -> impl Iterator<Item = u8> {
    Symbol::ALL.iter().map(|symbol| symbol.id())
}

/// Net charge of a run of symbols.
pub fn charge_of(symbols: &[Symbol]) -> i32 {
    symbols.iter().map(|symbol| symbol.charge()).sum()
}
