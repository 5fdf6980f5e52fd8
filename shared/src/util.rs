//! Small shared helpers: clock and identifiers

use rand::Rng;

/// Current UTC timestamp (milliseconds)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Fresh command id (UUID v4)
pub fn new_command_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

const ORDER_ID_PREFIX: &str = "GKC-";
const ORDER_TOKEN_LEN: usize = 6;
const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Short order token, e.g. `GKC-7QX2MA`.
///
/// Uniqueness is best-effort (36^6 combinations), not guaranteed.
pub fn generate_order_id() -> String {
    let mut rng = rand::thread_rng();
    let token: String = (0..ORDER_TOKEN_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{ORDER_ID_PREFIX}{token}")
}

/// Prefixed id for store-assigned entities (planned meals, reviews)
pub fn prefixed_id(prefix: &str) -> String {
    let simple = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &simple[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_format() {
        let id = generate_order_id();
        assert!(id.starts_with("GKC-"));
        assert_eq!(id.len(), 10);
        assert!(
            id[4..]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_prefixed_id() {
        let id = prefixed_id("pm");
        assert!(id.starts_with("pm-"));
        assert_eq!(id.len(), 15);
        assert_ne!(prefixed_id("pm"), prefixed_id("pm"));
    }
}
