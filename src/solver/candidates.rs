//! Candidate-set representation for a single cell.

use crate::solver::digit::Digit;

/// The set of digits still possible for an open cell.
///
/// Nine bits of a `u16` (bit `d - 1` for digit `d`) plus a cached length.
/// The cached length must always equal the mask's popcount: the MRV selector
/// reads it on its hot path instead of recounting, so `remove` and `insert`
/// are the only mutators and both maintain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSet {
    mask: u16,
    len: u8,
}

const FULL_MASK: u16 = 0b1_1111_1111;

fn bit(digit: Digit) -> u16 {
    1 << (digit.get() - 1)
}

impl CandidateSet {
    /// All nine digits.
    pub const FULL: Self = Self {
        mask: FULL_MASK,
        len: 9,
    };

    /// No digits. The lifetime state of every fixed cell.
    pub const EMPTY: Self = Self { mask: 0, len: 0 };

    pub fn contains(self, digit: Digit) -> bool {
        self.mask & bit(digit) != 0
    }

    /// Removes `digit`, reporting whether it was actually present.
    ///
    /// Callers building a prune set must honor the return value: a peer that
    /// did not carry the digit must not be recorded for later restoration.
    pub fn remove(&mut self, digit: Digit) -> bool {
        if self.contains(digit) {
            self.mask &= !bit(digit);
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Restores a digit removed earlier. The digit must be absent; restoration
    /// is only ever the exact reversal of a tracked removal.
    pub fn insert(&mut self, digit: Digit) {
        debug_assert!(!self.contains(digit), "restoring a digit already present");
        self.mask |= bit(digit);
        self.len += 1;
    }

    pub fn len(self) -> usize {
        self.len as usize
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Iterates the digits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::FULL
    }
}

impl FromIterator<Digit> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            if !set.contains(digit) {
                set.insert(digit);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn popcount(set: CandidateSet) -> usize {
        set.iter().count()
    }

    #[test]
    fn cached_len_matches_cardinality() {
        let mut set = CandidateSet::FULL;
        assert_eq!(set.len(), popcount(set));

        for value in [3u8, 7, 1, 9] {
            set.remove(Digit::new(value).unwrap());
            assert_eq!(set.len(), popcount(set));
        }
        for value in [7u8, 1] {
            set.insert(Digit::new(value).unwrap());
            assert_eq!(set.len(), popcount(set));
        }
    }

    #[test]
    fn remove_reports_presence() {
        let mut set = CandidateSet::FULL;
        let five = Digit::new(5).unwrap();
        assert!(set.remove(five));
        assert!(!set.remove(five));
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn iterates_ascending() {
        let set: CandidateSet = [9u8, 2, 5]
            .iter()
            .map(|&v| Digit::new(v).unwrap())
            .collect();
        let order: Vec<u8> = set.iter().map(|d| d.get()).collect();
        assert_eq!(order, vec![2, 5, 9]);
    }
}
