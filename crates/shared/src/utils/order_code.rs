use chrono::{Datelike, Utc};
use rand::Rng;

/// Human-facing order code, e.g. `ORD-2025-0042`. Purely cosmetic: the
/// 4-digit serial is random and not checked for collisions, so two orders
/// can share a code while keeping distinct database ids.
pub fn generate_order_code() -> String {
    let serial: u32 = rand::rng().random_range(1..=9999);
    format!("ORD-{}-{serial:04}", Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_carries_current_year_and_four_digit_serial() {
        let code = generate_order_code();
        let parts: Vec<&str> = code.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "ORD");
        assert_eq!(parts[1], Utc::now().year().to_string());
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn serial_stays_within_range() {
        for _ in 0..100 {
            let code = generate_order_code();
            let serial: u32 = code.rsplit('-').next().unwrap().parse().unwrap();
            assert!((1..=9999).contains(&serial));
        }
    }
}
