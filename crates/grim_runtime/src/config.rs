//! Heap configuration.

/// Collection thresholds and growth policy for a `Heap`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeapConfig {
    /// Slots reserved up front.
    pub initial_capacity: usize,
    /// Allocations since the last collection before `should_gc` fires.
    pub gc_threshold: usize,
    /// Estimated bytes since the last collection before `should_gc` fires.
    pub gc_threshold_bytes: usize,
    /// Floor for the adapted allocation threshold.
    pub min_threshold: usize,
    /// Floor for the adapted byte threshold.
    pub min_threshold_bytes: usize,
    /// Multiplier applied to the live set after a sweep.
    pub growth_factor: f64,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
            gc_threshold: 100_000,
            gc_threshold_bytes: 32 * 1024 * 1024,
            min_threshold: 32_768,
            min_threshold_bytes: 1024 * 1024,
            growth_factor: 2.0,
        }
    }
}

impl HeapConfig {
    pub const THRESHOLD_VAR: &'static str = "GRIM_GC_THRESHOLD";
    pub const THRESHOLD_BYTES_VAR: &'static str = "GRIM_GC_THRESHOLD_BYTES";

    /// Defaults, overridden by `GRIM_GC_THRESHOLD` / `GRIM_GC_THRESHOLD_BYTES`
    /// when they hold a positive integer.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(n) = env_usize(Self::THRESHOLD_VAR) {
            config.gc_threshold = n;
            config.min_threshold = config.min_threshold.min(n);
        }
        if let Some(n) = env_usize(Self::THRESHOLD_BYTES_VAR) {
            config.gc_threshold_bytes = n;
            config.min_threshold_bytes = config.min_threshold_bytes.min(n);
        }
        config
    }

    /// Thresholds small enough that `should_gc` fires after `allocations`
    /// allocations. Handy for embedding tests.
    pub fn eager(allocations: usize) -> Self {
        Self {
            initial_capacity: 16,
            gc_threshold: allocations,
            gc_threshold_bytes: usize::MAX,
            min_threshold: allocations,
            min_threshold_bytes: usize::MAX,
            growth_factor: 1.0,
        }
    }
}

fn env_usize(name: &str) -> Option<usize> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            log::warn!("ignoring {name}={raw:?}: expected a positive integer");
            None
        }
    }
}
