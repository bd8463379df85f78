// prefs.rs: File-layer preferences.
//
// `Prefs` is a plain value type owned by the caller and passed by reference to
// every file operation. Setters return the value actually stored, so callers
// can log clamped values.

use crate::config;
use crate::frame::DecodeOptions;

// ---------------------------------------------------------------------------
// Preferences struct
// ---------------------------------------------------------------------------

/// All tunable parameters of the file layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefs {
    /// Overwrite existing destination files without prompting. Default: false.
    pub overwrite: bool,
    /// Test mode: decode but discard output. Default: false.
    pub test_mode: bool,
    /// Remove the source file after a successful operation. Default: false.
    pub remove_src_file: bool,
    /// Write "LZFu" containers (`true`) or "MELA" stored ones (`false`).
    pub use_compression: bool,
    /// Reject sentinel-less payloads and raw-size mismatches.
    pub strict: bool,
    /// Worker threads for multi-file runs.
    pub nb_workers: usize,
}

/// Default worker count for `-T0`: one per logical core.
pub fn default_nb_workers() -> usize {
    num_cpus::get().max(1)
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            overwrite: false,
            test_mode: false,
            remove_src_file: false,
            use_compression: config::COMPRESS_DEFAULT,
            strict: config::STRICT_DEFAULT,
            nb_workers: config::NB_WORKERS_DEFAULT.max(1),
        }
    }
}

impl Prefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of worker threads; `0` selects one per core. The value
    /// is clamped to [1, NB_WORKERS_MAX]. Returns the actual value stored.
    pub fn set_nb_workers(&mut self, nb_workers: usize) -> usize {
        let requested = if nb_workers == 0 {
            default_nb_workers()
        } else {
            nb_workers
        };
        self.nb_workers = requested.clamp(1, config::NB_WORKERS_MAX);
        self.nb_workers
    }

    pub fn set_overwrite(&mut self, yes: bool) -> bool {
        self.overwrite = yes;
        yes
    }

    pub fn set_test_mode(&mut self, yes: bool) -> bool {
        self.test_mode = yes;
        yes
    }

    pub fn set_remove_src_file(&mut self, yes: bool) -> bool {
        self.remove_src_file = yes;
        yes
    }

    pub fn set_use_compression(&mut self, yes: bool) -> bool {
        self.use_compression = yes;
        yes
    }

    pub fn set_strict(&mut self, yes: bool) -> bool {
        self.strict = yes;
        yes
    }

    /// Decoder options derived from these preferences.
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            strict: self.strict,
        }
    }
}
