//! Garbage collection and heap management.

use crate::config::HeapConfig;
use crate::errors::messages::RECLAIMED_CELL;
use ahash::RandomState;
use grim_core::value::{BIGINT_CELL, COMPLEX_CELL, FLOAT_CELL, RATIONAL_CELL, SYMBOL_CELL};
use grim_core::{ObjectId, Value};
use hashbrown::HashMap;
use num_bigint::BigInt;
use num_rational::BigRational;

/// Heap cell: a tag byte plus the payload the tag selects.
#[derive(Clone, Debug)]
pub enum Cell {
    Float(f64),
    Bigint(BigInt),
    Rational(BigRational),
    Complex { real: Value, imag: Value },
    Symbol(Box<str>),
}

impl Cell {
    #[inline]
    pub fn tag(&self) -> u8 {
        match self {
            Cell::Float(_) => FLOAT_CELL,
            Cell::Bigint(_) => BIGINT_CELL,
            Cell::Rational(_) => RATIONAL_CELL,
            Cell::Complex { .. } => COMPLEX_CELL,
            Cell::Symbol(_) => SYMBOL_CELL,
        }
    }

    /// Estimated footprint, including arbitrary-precision digits.
    pub fn size(&self) -> usize {
        let base = std::mem::size_of::<Cell>();
        let deep = match self {
            Cell::Float(_) | Cell::Complex { .. } => 0,
            Cell::Bigint(n) => bigint_bytes(n),
            Cell::Rational(r) => bigint_bytes(r.numer()) + bigint_bytes(r.denom()),
            Cell::Symbol(name) => name.len(),
        };
        base + deep
    }

    /// Whether the cell owns arbitrary-precision storage that must be
    /// released when the cell is reclaimed.
    pub fn owns_external_storage(&self) -> bool {
        matches!(self, Cell::Bigint(_) | Cell::Rational(_))
    }

    /// Free the arbitrary-precision digits, leaving a zero payload behind.
    pub fn release_external(&mut self) {
        match self {
            Cell::Bigint(n) => *n = BigInt::default(),
            Cell::Rational(r) => {
                *r = BigRational::new_raw(BigInt::default(), BigInt::default());
            }
            _ => {}
        }
    }
}

fn bigint_bytes(n: &BigInt) -> usize {
    (n.bits() as usize).div_ceil(8)
}

/// One-shot cleanup run when the collector reclaims a cell. It only ever
/// sees the dying cell.
pub type Finalizer = Box<dyn FnOnce(&mut Cell)>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeapStats {
    pub allocations: usize,
    pub collections: usize,
    pub cells_freed: usize,
    pub finalizers_run: usize,
    pub live_cells: usize,
    pub live_bytes: usize,
}

pub struct Heap {
    objects: Vec<Option<Cell>>,
    free_list: Vec<usize>,
    marks: Vec<u64>,
    permanent: Vec<u64>,
    finalizers: HashMap<usize, Finalizer, RandomState>,
    config: HeapConfig,
    pub(crate) alloc_count: usize,
    pub(crate) gc_threshold: usize,
    pub(crate) alloc_bytes: usize,
    pub(crate) gc_threshold_bytes: usize,
    stats: HeapStats,
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn test_bit(bits: &[u64], idx: usize) -> bool {
    bits.get(idx >> 6)
        .is_some_and(|w| (w & (1 << (idx & 63))) != 0)
}

/// Set a bit, returning `false` when it was already set.
#[inline]
fn set_bit(bits: &mut Vec<u64>, idx: usize) -> bool {
    let word = idx >> 6;
    if word >= bits.len() {
        bits.resize(word + 1, 0);
    }
    let mask = 1 << (idx & 63);
    if (bits[word] & mask) != 0 {
        return false;
    }
    bits[word] |= mask;
    true
}

#[inline]
fn clear_bit(bits: &mut [u64], idx: usize) {
    if let Some(w) = bits.get_mut(idx >> 6) {
        *w &= !(1 << (idx & 63));
    }
}

impl Heap {
    pub fn new() -> Self {
        Self::with_config(HeapConfig::default())
    }

    pub fn with_config(config: HeapConfig) -> Self {
        Self {
            objects: Vec::with_capacity(config.initial_capacity),
            free_list: Vec::new(),
            marks: Vec::new(),
            permanent: Vec::new(),
            finalizers: HashMap::with_hasher(RandomState::new()),
            config,
            alloc_count: 0,
            gc_threshold: config.gc_threshold,
            alloc_bytes: 0,
            gc_threshold_bytes: config.gc_threshold_bytes,
            stats: HeapStats::default(),
        }
    }

    pub fn config(&self) -> &HeapConfig {
        &self.config
    }

    /// Allocate a cell. Permanent cells are never reclaimed; they are
    /// required for anything referenced through a word the marker cannot
    /// recognise, such as symbol references.
    pub fn allocate_cell(&mut self, cell: Cell, permanent: bool) -> ObjectId {
        self.alloc_count += 1;
        self.alloc_bytes += cell.size();
        self.stats.allocations += 1;

        let id = if let Some(idx) = self.free_list.pop() {
            self.objects[idx] = Some(cell);
            idx
        } else {
            self.objects.push(Some(cell));
            self.objects.len() - 1
        };
        if permanent {
            set_bit(&mut self.permanent, id);
        } else {
            clear_bit(&mut self.permanent, id);
        }
        ObjectId(id)
    }

    #[inline]
    pub fn alloc(&mut self, cell: Cell) -> ObjectId {
        self.allocate_cell(cell, false)
    }

    #[inline]
    pub fn alloc_permanent(&mut self, cell: Cell) -> ObjectId {
        self.allocate_cell(cell, true)
    }

    /// Allocate a Bigint cell with its release action registered.
    pub fn alloc_bigint(&mut self, n: BigInt) -> ObjectId {
        let id = self.alloc(Cell::Bigint(n));
        self.register_finalizer(id, Box::new(release_digits));
        id
    }

    /// Allocate a Rational cell with its release action registered.
    pub fn alloc_rational(&mut self, r: BigRational) -> ObjectId {
        let id = self.alloc(Cell::Rational(r));
        self.register_finalizer(id, Box::new(release_digits));
        id
    }

    /// Attach a one-shot cleanup to `id`. Registering twice replaces the
    /// earlier action.
    pub fn register_finalizer(&mut self, id: ObjectId, finalizer: Finalizer) {
        debug_assert!(self.is_live(id), "{}", RECLAIMED_CELL);
        self.finalizers.insert(id.0, finalizer);
    }

    pub fn has_finalizer(&self, id: ObjectId) -> bool {
        self.finalizers.contains_key(&id.0)
    }

    #[inline]
    pub fn should_gc(&self) -> bool {
        self.alloc_count >= self.gc_threshold || self.alloc_bytes >= self.gc_threshold_bytes
    }

    pub fn get(&self, id: ObjectId) -> &Cell {
        self.objects
            .get(id.0)
            .and_then(Option::as_ref)
            .expect(RECLAIMED_CELL)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> &mut Cell {
        self.objects
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .expect(RECLAIMED_CELL)
    }

    /// Cell behind a heap reference, or `None` for immediates.
    #[inline]
    pub fn cell(&self, v: Value) -> Option<&Cell> {
        if v.is_heap() {
            Some(self.get(v.as_obj_id()))
        } else {
            None
        }
    }

    pub fn is_live(&self, id: ObjectId) -> bool {
        self.objects.get(id.0).is_some_and(Option::is_some)
    }

    pub fn is_permanent(&self, id: ObjectId) -> bool {
        test_bit(&self.permanent, id.0)
    }

    pub fn is_marked(&self, id: ObjectId) -> bool {
        test_bit(&self.marks, id.0)
    }

    pub fn live_count(&self) -> usize {
        self.objects.iter().filter(|o| o.is_some()).count()
    }

    pub fn stats(&self) -> HeapStats {
        self.stats
    }

    /// Mark everything reachable from `roots`, then sweep the rest.
    pub fn collect(&mut self, roots: &[Value]) {
        self.mark_all(roots);
        self.sweep();
    }

    /// Mark all cells reachable from `roots`.
    ///
    /// Only words carrying the heap discriminant are followed. A symbol
    /// reference is invisible here, so symbol cells must be permanent.
    pub fn mark_all(&mut self, roots: &[Value]) {
        self.marks.clear();

        let mut pending: Vec<Value> = roots.to_vec();
        while let Some(val) = pending.pop() {
            if !val.is_heap() {
                continue;
            }
            let id = val.as_obj_id();
            if !self.is_live(id) || !set_bit(&mut self.marks, id.0) {
                continue;
            }
            if let Some(Cell::Complex { real, imag }) = &self.objects[id.0] {
                pending.push(*real);
                pending.push(*imag);
            }
        }
    }

    /// Reclaim unmarked, non-permanent cells, running their finalizers, and
    /// adapt the thresholds to the surviving set.
    pub fn sweep(&mut self) {
        let mut live_bytes = 0;
        let mut live_count = 0;
        let mut freed = 0;
        let mut finalized = 0;

        self.free_list.clear();

        for i in 0..self.objects.len() {
            let reclaim = match &self.objects[i] {
                None => {
                    self.free_list.push(i);
                    continue;
                }
                Some(_) => !test_bit(&self.marks, i) && !test_bit(&self.permanent, i),
            };
            if reclaim {
                if let Some(mut cell) = self.objects[i].take() {
                    if let Some(finalizer) = self.finalizers.remove(&i) {
                        finalizer(&mut cell);
                        finalized += 1;
                    }
                }
                clear_bit(&mut self.permanent, i);
                self.free_list.push(i);
                freed += 1;
            } else if let Some(cell) = &self.objects[i] {
                live_bytes += cell.size();
                live_count += 1;
            }
        }

        while self.objects.last().is_some_and(Option::is_none) {
            self.objects.pop();
        }
        let new_len = self.objects.len();
        self.free_list.retain(|&i| i < new_len);
        if self.objects.capacity() > self.objects.len() * 4 && self.objects.capacity() > 4096 {
            self.objects.shrink_to(self.objects.len() * 2);
        }

        self.marks.clear();
        self.alloc_count = 0;
        self.alloc_bytes = live_bytes;

        let growth = self.config.growth_factor;
        self.gc_threshold = ((live_count as f64 * growth) as usize).max(self.config.min_threshold);
        self.gc_threshold_bytes =
            ((live_bytes as f64 * growth) as usize).max(self.config.min_threshold_bytes);

        self.stats.collections += 1;
        self.stats.cells_freed += freed;
        self.stats.finalizers_run += finalized;
        self.stats.live_cells = live_count;
        self.stats.live_bytes = live_bytes;

        log::debug!(
            "gc #{}: freed {} cells ({} finalized), {} live ({} bytes), next at {} allocs / {} bytes",
            self.stats.collections,
            freed,
            finalized,
            live_count,
            live_bytes,
            self.gc_threshold,
            self.gc_threshold_bytes
        );
    }

    /// Human-readable summary of the live cells by kind.
    pub fn memory_stats(&self) -> String {
        let mut counts = [(0usize, 0usize); 5];
        for cell in self.objects.iter().flatten() {
            let slot = &mut counts[cell.tag() as usize];
            slot.0 += 1;
            slot.1 += cell.size();
        }
        let total_count: usize = counts.iter().map(|c| c.0).sum();
        let total_bytes: usize = counts.iter().map(|c| c.1).sum();
        let names = ["Float", "Bigint", "Rational", "Complex", "Symbol"];

        let mut out = String::from("=== Heap Memory Stats ===\n");
        for (name, (count, bytes)) in names.iter().zip(counts) {
            let pct = if total_bytes > 0 {
                bytes as f64 / total_bytes as f64 * 100.0
            } else {
                0.0
            };
            out.push_str(&format!(
                "{:<9} {:>8} cells, {:>12} bytes ({:.1}%)\n",
                format!("{name}:"),
                count,
                bytes,
                pct
            ));
        }
        out.push_str(&format!(
            "--------------------------\n\
             Total:    {:>8} cells, {:>12} bytes\n\
             Free:     {:>8} slots\n\
             Pending finalizers: {}",
            total_count,
            total_bytes,
            self.free_list.len(),
            self.finalizers.len()
        ));
        out
    }
}

fn release_digits(cell: &mut Cell) {
    log::trace!("releasing {} bytes of arbitrary-precision storage", cell.size());
    cell.release_external();
}
