use std::env;

use super::neighbor_policy::MovementPolicy;

pub const DEFAULT_CHUNK_SIZE: usize = 4096;

#[derive(Clone, Debug)]
pub struct Config {
    pub threads: Option<usize>,
    pub log_level: Option<String>,
    pub parallel: bool,
    pub chunk_size: usize,
    pub allow_diagonals: bool,
    pub allow_corner_cut: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: None,
            log_level: None,
            parallel: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            allow_diagonals: true,
            allow_corner_cut: false,
        }
    }
}

impl Config {
    /// Defaults overlaid with any `GRIDGRAPH_*` environment variables that parse.
    pub fn from_env_defaults() -> Self {
        let mut cfg = Self::default();
        if let Some(n) = env::var("GRIDGRAPH_THREADS").ok().and_then(|s| s.trim().parse::<usize>().ok()) {
            cfg.threads = Some(n);
        }
        if let Ok(level) = env::var("GRIDGRAPH_LOG_LEVEL") {
            cfg.log_level = Some(level);
        }
        if let Some(b) = env_flag("GRIDGRAPH_PARALLEL") { cfg.parallel = b; }
        if let Some(n) = env::var("GRIDGRAPH_CHUNK_SIZE").ok().and_then(|s| s.trim().parse::<usize>().ok()) {
            if n > 0 { cfg.chunk_size = n; }
        }
        if let Some(b) = env_flag("GRIDGRAPH_DIAGONALS") { cfg.allow_diagonals = b; }
        if let Some(b) = env_flag("GRIDGRAPH_CORNER_CUT") { cfg.allow_corner_cut = b; }
        cfg
    }

    pub fn policy(&self) -> MovementPolicy {
        MovementPolicy { allow_diagonals: self.allow_diagonals, allow_corner_cut: self.allow_corner_cut }
    }
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key).ok().and_then(|v| parse_flag(&v))
}

fn parse_flag(input: &str) -> Option<bool> {
    let t = input.trim();
    if t == "1" || t.eq_ignore_ascii_case("true") {
        Some(true)
    } else if t == "0" || t.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    const ENV_KEYS: [&str; 6] = [
        "GRIDGRAPH_THREADS",
        "GRIDGRAPH_LOG_LEVEL",
        "GRIDGRAPH_PARALLEL",
        "GRIDGRAPH_CHUNK_SIZE",
        "GRIDGRAPH_DIAGONALS",
        "GRIDGRAPH_CORNER_CUT",
    ];

    // Serializes tests touching process-wide GRIDGRAPH_* variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        guard
    }

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn default_policy_forbids_corner_cut() {
        let p = Config::default().policy();
        assert!(p.allow_diagonals);
        assert!(!p.allow_corner_cut);
    }

    #[test]
    fn test_from_env_defaults_reads_values() {
        let _guard = lock_env();
        std::env::set_var("GRIDGRAPH_THREADS", "8");
        std::env::set_var("GRIDGRAPH_LOG_LEVEL", "debug");
        std::env::set_var("GRIDGRAPH_PARALLEL", "true");
        std::env::set_var("GRIDGRAPH_CHUNK_SIZE", "128");
        std::env::set_var("GRIDGRAPH_DIAGONALS", "0");
        std::env::set_var("GRIDGRAPH_CORNER_CUT", "bogus");

        let cfg = Config::from_env_defaults();
        assert_eq!(cfg.threads, Some(8));
        assert_eq!(cfg.log_level.as_deref(), Some("debug"));
        assert!(cfg.parallel);
        assert_eq!(cfg.chunk_size, 128);
        assert!(!cfg.allow_diagonals);
        // unparsable flag keeps the default
        assert!(!cfg.allow_corner_cut);

        clear_env();
    }

    #[test]
    fn test_from_env_defaults_ignores_unset_and_zero_chunk() {
        let _guard = lock_env();
        std::env::set_var("GRIDGRAPH_CHUNK_SIZE", "0");

        let cfg = Config::from_env_defaults();
        assert_eq!(cfg.threads, None);
        assert_eq!(cfg.log_level, None);
        assert!(!cfg.parallel);
        assert_eq!(cfg.chunk_size, DEFAULT_CHUNK_SIZE);
        assert!(cfg.allow_diagonals);

        clear_env();
    }
}
