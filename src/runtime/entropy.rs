//! Entropy sources
//!
//! The random source never generates entropy itself; it asks an
//! [`EntropySource`] for raw bytes. Two sources ship with the crate:
//!
//! - [`SystemEntropy`] - the operating system CSPRNG through `ring`
//! - [`SeededEntropy`] - a ChaCha20 stream for reproducible runs

use parking_lot::Mutex;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use ring::rand::{SecureRandom as _, SystemRandom};
use thiserror::Error;

use crate::config::{EntropyKind, RandomConfig};

/// Largest single request accepted by the built-in sources.
pub const MAX_REQUEST: usize = 1024 * 1024;

/// Error type for entropy requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    #[error("Entropy source unavailable: {0}")]
    Unavailable(&'static str),

    #[error("Entropy request too large: {0} bytes (max 1 MiB)")]
    TooLarge(usize),
}

/// A provider of raw random bytes.
///
/// Implementations must be safe to share between threads; callers impose no
/// retry or timeout policy of their own.
pub trait EntropySource: Send + Sync {
    /// Fill `dest` completely or report why not.
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Short name for logs and CLI output.
    fn name(&self) -> &'static str;
}

impl EntropySource for Box<dyn EntropySource> {
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(dest)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

fn check_len(len: usize) -> Result<(), EntropyError> {
    if len > MAX_REQUEST {
        return Err(EntropyError::TooLarge(len));
    }
    Ok(())
}

/// Operating system CSPRNG.
#[derive(Debug)]
pub struct SystemEntropy {
    rng: SystemRandom,
}

impl SystemEntropy {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for SystemEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        check_len(dest.len())?;
        self.rng
            .fill(dest)
            .map_err(|_| EntropyError::Unavailable("system random generation failed"))
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

/// Deterministic ChaCha20 byte stream.
///
/// Two sources built from the same seed produce the same bytes in the same
/// order. Not a substitute for OS entropy in security-sensitive code.
pub struct SeededEntropy {
    seed: u64,
    rng: Mutex<ChaCha20Rng>,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl std::fmt::Debug for SeededEntropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededEntropy")
            .field("seed", &self.seed)
            .finish()
    }
}

impl EntropySource for SeededEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        check_len(dest.len())?;
        self.rng.lock().fill_bytes(dest);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "seeded"
    }
}

/// Build the entropy source a configuration asks for.
///
/// A seeded source without a seed falls back to seed 0.
pub fn entropy_from_config(config: &RandomConfig) -> Box<dyn EntropySource> {
    match config.source {
        EntropyKind::System => Box::new(SystemEntropy::new()),
        EntropyKind::Seeded => {
            let seed = config.seed.unwrap_or_else(|| {
                tracing::warn!("Seeded entropy requested without a seed, using 0");
                0
            });
            Box::new(SeededEntropy::new(seed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_fill() {
        let source = SystemEntropy::new();
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        source.fill(&mut a).unwrap();
        source.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let first = SeededEntropy::new(42);
        let second = SeededEntropy::new(42);
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        first.fill(&mut a).unwrap();
        second.fill(&mut b).unwrap();
        assert_eq!(a, b);

        let other = SeededEntropy::new(43);
        let mut c = [0u8; 16];
        other.fill(&mut c).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_request_limit() {
        let source = SeededEntropy::new(1);
        let mut big = vec![0u8; MAX_REQUEST + 1];
        assert_eq!(
            source.fill(&mut big),
            Err(EntropyError::TooLarge(MAX_REQUEST + 1))
        );
    }

    #[test]
    fn test_from_config() {
        let config = RandomConfig {
            source: EntropyKind::Seeded,
            seed: Some(9),
        };
        assert_eq!(entropy_from_config(&config).name(), "seeded");
        assert_eq!(entropy_from_config(&RandomConfig::default()).name(), "system");
    }
}
