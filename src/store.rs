/*!

  The signal store: current binary value of every signal during one simulation run.

*/

use crate::circuit::Signal;
use crate::error::{Error, Result};
use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;

/// A fixed-length table of signal values, indexed by [Signal].
/// The length is set when the store is created and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalStore {
    bits: BitVec,
}

impl SignalStore {
    /// Creates a store of `len` signals, all 0
    pub fn new(len: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, len),
        }
    }

    /// Returns the number of signals in the store
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the store holds no signals
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the value of `signal`
    pub fn get(&self, signal: Signal) -> Result<bool> {
        self.bits
            .get(signal.index())
            .map(|b| *b)
            .ok_or(Error::IndexOutOfRange {
                index: signal.index(),
                len: self.len(),
            })
    }

    /// Sets the value of `signal`
    pub fn set(&mut self, signal: Signal, value: bool) -> Result<()> {
        let len = self.len();
        let mut bit = self
            .bits
            .get_mut(signal.index())
            .ok_or(Error::IndexOutOfRange {
                index: signal.index(),
                len,
            })?;
        *bit = value;
        Ok(())
    }

    /// Reads the values of `signals` into a bit vector, in order
    pub fn sample(&self, signals: impl IntoIterator<Item = Signal>) -> Result<BitVec> {
        signals.into_iter().map(|s| self.get(s)).collect()
    }

    /// Returns the raw values, index `i` holding signal `i`
    pub fn as_bits(&self) -> &BitSlice {
        &self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_initialized() {
        let store = SignalStore::new(6);
        assert_eq!(store.len(), 6);
        assert!(store.as_bits().not_any());
    }

    #[test]
    fn get_set() {
        let mut store = SignalStore::new(3);
        store.set(Signal::new(2), true).unwrap();
        assert!(store.get(Signal::new(2)).unwrap());
        assert!(!store.get(Signal::new(1)).unwrap());
        let bits = store.sample([Signal::new(2), Signal::new(0)]).unwrap();
        assert!(bits[0] && !bits[1]);
    }

    #[test]
    fn out_of_range() {
        let mut store = SignalStore::new(3);
        assert!(matches!(
            store.get(Signal::new(3)),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(store.set(Signal::new(7), true).is_err());
        assert_eq!(store.len(), 3);
    }
}
