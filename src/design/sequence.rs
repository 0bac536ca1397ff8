use std::fmt;

use crate::constants::{MAX_MOTIF_LENGTH, MAX_SEQUENCE_LENGTH};
use crate::symbols::Symbol;

/// Fixed-capacity run of symbols with a length cursor.
///
/// Slots past the cursor are never observed; clearing only rewinds the cursor.
#[derive(Clone, Copy)]
pub struct SymbolBuffer<const N: usize> {
    slots: [Symbol; N],
    len: usize,
}

/// Episode state: the symbols placed so far.
pub type Sequence = SymbolBuffer<MAX_SEQUENCE_LENGTH>;

/// Target run the agent must reproduce contiguously and in order.
pub type Motif = SymbolBuffer<MAX_MOTIF_LENGTH>;

impl<const N: usize> SymbolBuffer<N> {
    pub const CAPACITY: usize = N;

    pub const fn new() -> Self {
        Self {
            slots: [Symbol::Alanine; N],
            len: 0,
        }
    }

    /// `None` if `symbols` does not fit.
    pub fn from_slice(symbols: &[Symbol]) -> Option<Self> {
        if symbols.len() > N {
            return None;
        }
        let mut buffer = Self::new();
        buffer.slots[..symbols.len()].copy_from_slice(symbols);
        buffer.len = symbols.len();
        Some(buffer)
    }

    /// Appends a symbol, handing it back if the buffer is full.
    pub fn push(&mut self, symbol: Symbol) -> Result<(), Symbol> {
        if self.len == N {
            return Err(symbol);
        }
        self.slots[self.len] = symbol;
        self.len += 1;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.slots[..self.len]
    }

    /// Symbol ids left-aligned and zero-padded to exactly `N` entries.
    pub fn padded_ids(&self) -> impl Iterator<Item = u8> + '_ {
        pad_ids(self.as_slice(), N)
    }
}

/// Ids of `symbols` followed by zeros up to `width` entries.
pub fn pad_ids(symbols: &[Symbol], width: usize) -> impl Iterator<Item = u8> + '_ {
    symbols
        .iter()
        .map(|symbol| symbol.id())
        .chain(std::iter::repeat(0))
        .take(width)
}

impl<const N: usize> Default for SymbolBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for SymbolBuffer<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> Eq for SymbolBuffer<N> {}

impl<const N: usize> fmt::Debug for SymbolBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffers_pad_to_zeros() {
        let sequence = Sequence::new();
        let padded: Vec<u8> = sequence.padded_ids().collect();
        assert_eq!(padded, vec![0; MAX_SEQUENCE_LENGTH]);

        let motif = Motif::new();
        let padded: Vec<u8> = motif.padded_ids().collect();
        assert_eq!(padded, vec![0; MAX_MOTIF_LENGTH]);
    }

    #[test]
    fn values_are_left_aligned() {
        let ids = [5, 7, 1, 8];
        let symbols: Vec<Symbol> = ids.iter().filter_map(|&id| Symbol::from_id(id)).collect();
        let sequence = Sequence::from_slice(&symbols).unwrap();

        let padded: Vec<u8> = sequence.padded_ids().collect();
        assert_eq!(padded.len(), MAX_SEQUENCE_LENGTH);
        assert_eq!(&padded[..4], &ids);
        assert!(padded[4..].iter().all(|&id| id == 0));

        let motif = Motif::from_slice(&symbols[..3]).unwrap();
        assert_eq!(motif.padded_ids().collect::<Vec<_>>(), vec![5, 7, 1, 0]);
    }

    #[test]
    fn push_stops_at_capacity() {
        let mut motif = Motif::new();
        for _ in 0..MAX_MOTIF_LENGTH {
            motif.push(Symbol::Lysine).unwrap();
        }
        assert!(motif.is_full());
        assert_eq!(motif.push(Symbol::Valine), Err(Symbol::Valine));
        assert_eq!(motif.len(), MAX_MOTIF_LENGTH);
        assert!(Motif::from_slice(&[Symbol::Alanine; MAX_MOTIF_LENGTH + 1]).is_none());
    }

    #[test]
    fn clear_hides_stale_slots() {
        let mut sequence = Sequence::from_slice(&[Symbol::Valine, Symbol::Serine]).unwrap();
        sequence.clear();
        assert!(sequence.is_empty());
        assert!(sequence.padded_ids().all(|id| id == 0));
        assert_eq!(sequence, Sequence::new());
    }
}
