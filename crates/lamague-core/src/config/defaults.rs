// Single source of truth for all default values.

// --- TRIAD kernel ---
pub const DEFAULT_ALPHA: f64 = 0.4;
pub const DEFAULT_BETA: f64 = 0.3;
pub const DEFAULT_GAMMA: f64 = 0.3;
pub const DEFAULT_STEP_SIZE: f64 = 0.1;
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 1e-4;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

// --- Energy ledger ---
pub const DEFAULT_SPIKE_SIGMA: f64 = 3.0;
pub const DEFAULT_MIN_ENTRIES_FOR_STATISTICS: usize = 2;

// --- Consensus ---
pub const DEFAULT_DRIFT_THRESHOLD: f64 = 0.4;
pub const DEFAULT_RECOVERY_FACTOR: f64 = 0.5;
pub const DEFAULT_RECOVERY_WINDOW: usize = 10;
pub const DEFAULT_BLEND_RATE: f64 = 0.1;
pub const DEFAULT_CONSENSUS_ROUNDS: usize = 100;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "lamague=info";
pub const LOG_ENV_VAR: &str = "LAMAGUE_LOG";
