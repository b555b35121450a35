//! Token generator adapters

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use crate::domain::entities::UserId;
use crate::domain::ports::TokenGenerator;

/// Random 32-byte tokens, hex encoded
#[derive(Debug, Default)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self, _user_id: &UserId) -> String {
        let mut rng = rand::thread_rng();
        let bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
        hex::encode(bytes)
    }
}

/// Deterministic tokens of the form `<user id>-<counter>`
#[derive(Debug, Default)]
pub struct SequentialTokenGenerator {
    counter: AtomicU64,
}

impl SequentialTokenGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenGenerator for SequentialTokenGenerator {
    fn generate(&self, user_id: &UserId) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", user_id, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_tokens_are_hex_and_distinct() {
        let generator = RandomTokenGenerator;
        let id = UserId::from("1");

        let a = generator.generate(&id);
        let b = generator.generate(&id);

        assert_eq!(a.len(), 64); // 32 bytes hex
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn sequential_tokens_count_up_across_users() {
        let generator = SequentialTokenGenerator::new();

        assert_eq!(generator.generate(&UserId::from("1")), "1-1");
        assert_eq!(generator.generate(&UserId::from("2")), "2-2");
        assert_eq!(generator.generate(&UserId::from("1")), "1-3");
    }
}
