//! Name generation for objects created with `generateName` and no `name`.

use rand::Rng;

/// Longest name a generator may produce (a DNS-1123 label).
pub const MAX_NAME_LENGTH: usize = 63;

const RANDOM_LENGTH: usize = 5;

/// Base prefixes longer than this are cut so the result stays a valid label.
pub const MAX_GENERATED_NAME_LENGTH: usize = MAX_NAME_LENGTH - RANDOM_LENGTH;

// No vowels (no accidental words) and no 0/1/3 (confusable with o/l/e).
const ALPHANUMS: &[u8] = b"bcdfghjklmnpqrstvwxz2456789";

/// Produces a unique name from a base prefix.
pub trait NameGenerator: Send + Sync {
    fn generate_name(&self, base: &str) -> String;
}

/// Appends five random characters to the (possibly truncated) base.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleNameGenerator;

impl NameGenerator for SimpleNameGenerator {
    fn generate_name(&self, base: &str) -> String {
        let base: String = base.chars().take(MAX_GENERATED_NAME_LENGTH).collect();
        let mut rng = rand::thread_rng();
        let suffix: String = (0..RANDOM_LENGTH)
            .map(|_| ALPHANUMS[rng.gen_range(0..ALPHANUMS.len())] as char)
            .collect();
        format!("{}{}", base, suffix)
    }
}
