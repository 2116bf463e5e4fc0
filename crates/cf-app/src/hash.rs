//! Content hashing for rendered documents.

use sha2::{Digest, Sha256};

/// Hex SHA-256 of a rendered document.
pub fn document_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_stability() {
        let a = document_digest("\\begin{document}");
        let b = document_digest("\\begin{document}");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        assert_ne!(document_digest("1.00 & 0.8333"), document_digest("1.00 & 0.8334"));
    }

    #[test]
    fn known_digest_of_empty_input() {
        assert_eq!(
            document_digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
