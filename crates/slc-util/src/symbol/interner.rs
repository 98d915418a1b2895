//! Open-addressed string interner with double hashing.
//!
//! The probe sequence, hash functions, growth thresholds and tombstone
//! bookkeeping here mirror a small hand-written C intern table this crate is
//! based on byte-for-byte: primary hash is djb2, secondary hash is an
//! accumulated base-31 hash reduced mod `capacity - 1` and forced odd so
//! every probe stride visits every slot. The rest is the Rust rendering of
//! the same open-addressing scheme: an owned arena of interned strings plus
//! a hash table of arena indices, rather than a table of raw `char*` keys.

use super::{InternerStats, Symbol};

const INITIAL_CAPACITY: usize = 128;
const LOAD_FACTOR_THRESHOLD: f64 = 0.7;
const TOMBSTONE_RATIO_THRESHOLD: f64 = 0.4;

#[derive(Clone, Copy)]
enum Slot {
    Empty,
    Tombstone,
    Occupied(u32),
}

struct Entry<K> {
    text: Box<str>,
    kind: K,
}

/// An owned, single-instance string interner.
///
/// `K` is whatever "kind" tag the caller wants attached to an interned byte
/// sequence (for `slc-lex` this is `TokenKind`, so a pre-seeded keyword
/// keeps its reserved kind forever while a later identifier interning the
/// same bytes sees that kind rather than `IDENTIFIER`).
///
/// # Examples
///
/// ```
/// use slc_util::Interner;
///
/// let mut interner: Interner<u8> = Interner::new();
/// let (a, kind_a) = interner.intern("hello", 0);
/// let (b, kind_b) = interner.intern("hello", 99); // default_kind ignored on hit
/// assert_eq!(a, b);
/// assert_eq!((kind_a, kind_b), (0, 0));
/// assert_eq!(interner.resolve(a), "hello");
/// ```
pub struct Interner<K> {
    table: Vec<Slot>,
    arena: Vec<Entry<K>>,
    live: usize,
    tombstones: usize,
}

impl<K: Copy> Interner<K> {
    /// Creates a table with the minimum initial capacity (128).
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a table with at least the given capacity (floored at 2, since
    /// the secondary hash divides by `capacity - 1`).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            table: vec![Slot::Empty; capacity],
            arena: Vec::new(),
            live: 0,
            tombstones: 0,
        }
    }

    /// djb2: `h = 5381; h = h*33 + byte` for each input byte.
    fn hash1(bytes: &[u8]) -> u64 {
        let mut h: u64 = 5381;
        for &b in bytes {
            h = h.wrapping_mul(33).wrapping_add(b as u64);
        }
        h
    }

    /// Accumulated base-31 hash mod `capacity - 1`, forced odd so the probe
    /// stride can never be zero or even-only (which would skip half the
    /// table on a power-of-two capacity).
    fn hash2(bytes: &[u8], capacity: usize) -> u64 {
        let modulus = (capacity as u64).saturating_sub(1).max(1);
        let mut h: u64 = 0;
        for &b in bytes {
            h = (h.wrapping_mul(31).wrapping_add(b as u64)) % modulus;
        }
        h | 1
    }

    /// Double-hashing probe: `slot_i = (h1 + i*h2) mod capacity`. Returns the
    /// slot holding `bytes` if present, otherwise (when `for_insert`) the
    /// first empty-or-tombstone slot on the probe path, otherwise `None`
    /// when the table is somehow full.
    fn find_slot(table: &[Slot], arena: &[Entry<K>], bytes: &[u8], for_insert: bool) -> Option<usize> {
        let capacity = table.len();
        let step = Self::hash2(bytes, capacity) as usize;
        let mut slot = (Self::hash1(bytes) as usize) % capacity;
        let mut first_tombstone: Option<usize> = None;

        for _ in 0..capacity {
            match table[slot] {
                Slot::Empty => {
                    return Some(if for_insert {
                        first_tombstone.unwrap_or(slot)
                    } else {
                        slot
                    });
                }
                Slot::Tombstone => {
                    if for_insert && first_tombstone.is_none() {
                        first_tombstone = Some(slot);
                    }
                }
                Slot::Occupied(idx) => {
                    if arena[idx as usize].text.as_bytes() == bytes {
                        return Some(slot);
                    }
                }
            }
            slot = (slot + step) % capacity;
        }
        first_tombstone
    }

    /// Interns `text`, returning its (stable) symbol and kind.
    ///
    /// If `text` is already present, the kind it was *first* interned with
    /// wins and `default_kind` is discarded — this is how a pre-seeded
    /// keyword stays a keyword no matter what default kind later identifier
    /// lexing passes in.
    pub fn intern(&mut self, text: &str, default_kind: K) -> (Symbol, K) {
        let bytes = text.as_bytes();
        if let Some(slot) = Self::find_slot(&self.table, &self.arena, bytes, false) {
            if let Slot::Occupied(idx) = self.table[slot] {
                return (Symbol(idx), self.arena[idx as usize].kind);
            }
        }

        self.grow_if_needed();

        let slot = Self::find_slot(&self.table, &self.arena, bytes, true)
            .expect("interner table unexpectedly full after growth");
        let idx = self.arena.len() as u32;
        self.arena.push(Entry {
            text: text.into(),
            kind: default_kind,
        });
        if matches!(self.table[slot], Slot::Tombstone) {
            self.tombstones -= 1;
        }
        self.table[slot] = Slot::Occupied(idx);
        self.live += 1;
        (Symbol(idx), default_kind)
    }

    /// Read-only query: the kind associated with `text`, if interned.
    pub fn lookup(&self, text: &str) -> Option<K> {
        let slot = Self::find_slot(&self.table, &self.arena, text.as_bytes(), false)?;
        match self.table[slot] {
            Slot::Occupied(idx) => Some(self.arena[idx as usize].kind),
            _ => None,
        }
    }

    /// Resolves a symbol back to its text. `O(1)`, unlike a design that has
    /// to linear-scan a concurrent map by index.
    pub fn resolve(&self, symbol: Symbol) -> &str {
        &self.arena[symbol.0 as usize].text
    }

    /// Marks `text` removed: the table slot becomes a tombstone so future
    /// probes skip over it, but the arena entry is kept so any `Symbol`
    /// already handed out stays valid. Not used anywhere in the lexer/parser
    /// pipeline — kept for parity with the optional removal op in the
    /// original tool this table is based on, which notes it will "probably
    /// never be used."
    pub fn remove(&mut self, text: &str) -> bool {
        let Some(slot) = Self::find_slot(&self.table, &self.arena, text.as_bytes(), false) else {
            return false;
        };
        if matches!(self.table[slot], Slot::Occupied(_)) {
            self.table[slot] = Slot::Tombstone;
            self.live -= 1;
            self.tombstones += 1;
            true
        } else {
            false
        }
    }

    fn grow_if_needed(&mut self) {
        let capacity = self.table.len();
        let load = self.live as f64 / capacity as f64;
        let tombstone_ratio = self.tombstones as f64 / capacity as f64;
        if load >= LOAD_FACTOR_THRESHOLD || tombstone_ratio >= TOMBSTONE_RATIO_THRESHOLD {
            self.grow();
        }
    }

    /// Doubles capacity and reinserts every live entry by rehashing its
    /// bytes; tombstones are discarded rather than carried forward.
    fn grow(&mut self) {
        let new_capacity = self.table.len() * 2;
        let mut new_table = vec![Slot::Empty; new_capacity];

        for slot in &self.table {
            if let Slot::Occupied(idx) = *slot {
                let bytes = self.arena[idx as usize].text.as_bytes();
                let step = Self::hash2(bytes, new_capacity) as usize;
                let mut probe = (Self::hash1(bytes) as usize) % new_capacity;
                loop {
                    if matches!(new_table[probe], Slot::Empty) {
                        new_table[probe] = Slot::Occupied(idx);
                        break;
                    }
                    probe = (probe + step) % new_capacity;
                }
            }
        }

        self.table = new_table;
        self.tombstones = 0;
    }

    /// A snapshot of current load, for diagnostics and tests only.
    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.live,
            capacity: self.table.len(),
            tombstones: self.tombstones,
        }
    }
}

impl<K: Copy> Default for Interner<K> {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn interning_is_idempotent(strings: Vec<String>) -> bool {
        let mut interner: Interner<u8> = Interner::new();
        let first: Vec<_> = strings.iter().map(|s| interner.intern(s, 0).0).collect();
        let second: Vec<_> = strings.iter().map(|s| interner.intern(s, 0).0).collect();
        first == second
    }

    #[quickcheck]
    fn symbols_resolve_back_to_their_text(strings: Vec<String>) -> bool {
        let mut interner: Interner<u8> = Interner::new();
        strings.iter().all(|s| {
            let (sym, _) = interner.intern(s, 0);
            interner.resolve(sym) == s.as_str()
        })
    }
}
