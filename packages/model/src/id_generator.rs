use crc32fast::Hasher;
use std::time::{SystemTime, UNIX_EPOCH};

/// Generate a session ID from an arbitrary label using CRC32
pub fn get_session_id(label: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(label.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for conditional blocks within an editing session
#[derive(Debug, Clone)]
pub struct IDGenerator {
    seed: String, // Session ID (CRC32)
    count: u32,   // Sequential counter
}

impl IDGenerator {
    pub fn new(label: &str) -> Self {
        Self {
            seed: get_session_id(label),
            count: 0,
        }
    }

    /// Seeded from the current time, so ids differ between sessions
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        Self::new(&nanos.to_string())
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Get session ID seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for IDGenerator {
    fn default() -> Self {
        Self::from_clock()
    }
}
