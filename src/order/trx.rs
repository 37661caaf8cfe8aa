//! Transaction number generation
//!
//! A human-readable order reference, `TRX-` plus a random decimal string.
//! Not cryptographic; uniqueness within expected order volume is enough and
//! the UNIQUE constraint on `orders_tb.transaction_number` backs it up.

use rand::Rng;

pub fn generate_transaction_number() -> String {
    let n: i64 = rand::thread_rng().gen_range(0..i64::MAX);
    format!("TRX-{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let trx = generate_transaction_number();
        let digits = trx.strip_prefix("TRX-").expect("missing TRX- prefix");
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_practically_collision_free() {
        let a = generate_transaction_number();
        let b = generate_transaction_number();
        assert_ne!(a, b);
    }
}
