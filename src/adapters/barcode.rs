//! Barcode generator adapters.
//!
//! The production generator renders the current Unix-epoch milliseconds
//! followed by a zero-padded 3-digit random suffix, matching the printed
//! desk tickets. `MockBarcodeGenerator` issues a predictable sequence for
//! tests.

use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::foundation::{Barcode, Timestamp};
use crate::ports::BarcodeGenerator;

/// Timestamp-plus-random-suffix barcode source.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampBarcodeGenerator;

impl TimestampBarcodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl BarcodeGenerator for TimestampBarcodeGenerator {
    fn generate(&self) -> Barcode {
        let millis = Timestamp::now().as_unix_millis();
        let suffix: u32 = rand::thread_rng().gen_range(0..1000);
        Barcode::new(format!("{}{:03}", millis, suffix)).expect("formatted barcode is non-empty")
    }
}

/// Sequential barcode source for tests.
///
/// Issues `prefix-1`, `prefix-2`, ... across threads.
#[derive(Debug)]
pub struct MockBarcodeGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl MockBarcodeGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl BarcodeGenerator for MockBarcodeGenerator {
    fn generate(&self) -> Barcode {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Barcode::new(format!("{}-{}", self.prefix, n)).expect("formatted barcode is non-empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_code_is_millis_plus_three_digits() {
        let generator = TimestampBarcodeGenerator::new();
        let code = generator.generate();

        // 13 epoch-millisecond digits plus the 3-digit suffix
        assert_eq!(code.as_str().len(), 16);
        assert!(code.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn generated_codes_rarely_collide() {
        let generator = TimestampBarcodeGenerator::new();
        let codes: HashSet<String> = (0..50)
            .map(|_| generator.generate().as_str().to_string())
            .collect();
        // 1000 suffixes per millisecond leave room for desk-rate issuance
        assert!(codes.len() > 40);
    }

    #[test]
    fn mock_generator_issues_a_sequence() {
        let generator = MockBarcodeGenerator::new("gate");
        assert_eq!(generator.generate().as_str(), "gate-1");
        assert_eq!(generator.generate().as_str(), "gate-2");
        assert_eq!(generator.generate().as_str(), "gate-3");
    }
}
