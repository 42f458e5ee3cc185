//! ID generation utilities for toolhub
//!
//! Submission references are derived from the submitted tool so the same
//! tool submitted twice in the same millisecond maps to the same reference.

use sha2::{Digest, Sha256};

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

/// Generate a submission reference
///
/// Format: `sub-{timestamp_ms}-{hash8}`
/// Example: `sub-1738300800123-9f86d081`
pub fn generate_submission_ref(name: &str, website: &str) -> String {
    submission_ref_at(name, website, now_ms())
}

fn submission_ref_at(name: &str, website: &str, timestamp: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.trim().to_lowercase().as_bytes());
    hasher.update(b"\n");
    hasher.update(website.trim().as_bytes());
    let digest = hasher.finalize();
    format!("sub-{}-{}", timestamp, hex::encode(&digest[..4]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms_returns_reasonable_timestamp() {
        let ts = now_ms();
        // Should be after 2020-01-01 and before 2100-01-01
        assert!(ts > 1577836800000);
        assert!(ts < 4102444800000);
    }

    #[test]
    fn test_generate_submission_ref_format() {
        let id = generate_submission_ref("Perplexity", "https://perplexity.ai");
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "sub");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_submission_ref_is_deterministic() {
        let a = submission_ref_at("Perplexity", "https://perplexity.ai", 1000);
        let b = submission_ref_at("  perplexity ", "https://perplexity.ai ", 1000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_submission_ref_differs_by_website() {
        let a = submission_ref_at("Tool", "https://a.example", 1000);
        let b = submission_ref_at("Tool", "https://b.example", 1000);
        assert_ne!(a, b);
    }
}
