//! Simulated account backend
//!
//! Mailbox provisioning, Twitter binding, and image hosting are all
//! simulated in-process; this crate is that simulation, kept behind a trait
//! so the registry can be driven with deterministic credentials in tests.

use async_trait::async_trait;
use aviary_utils::epoch_millis;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==================== Backend Trait ====================

/// Backend reference type
pub type BackendRef = Arc<dyn AccountBackendTrait>;

/// Trait for the simulated account backend
#[async_trait]
pub trait AccountBackendTrait: Send + Sync {
    /// Fresh opaque id for a manually added account
    fn next_id(&self) -> String;

    /// Placeholder credentials for slot `offset` of a bulk batch
    fn synthesize(&self, offset: u64) -> SyntheticCredentials;

    /// Decode raw uploaded bytes into a displayable image reference
    async fn decode_image(&self, bytes: Vec<u8>) -> String;
}

/// Credentials produced for one bulk-registered account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticCredentials {
    pub id: String,
    pub username: String,
    pub token: String,
    pub email: String,
}

/// Default backend implementation
#[derive(Debug, Default)]
pub struct DefaultAccountBackend;

#[async_trait]
impl AccountBackendTrait for DefaultAccountBackend {
    fn next_id(&self) -> String {
        epoch_millis().to_string()
    }

    fn synthesize(&self, offset: u64) -> SyntheticCredentials {
        let timestamp = epoch_millis() + u128::from(offset);
        let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
        SyntheticCredentials {
            id: timestamp.to_string(),
            username: format!("@user_{}", suffix),
            token: format!("Bearer_auto_{}", timestamp),
            email: format!("user{}@gmx.com", suffix),
        }
    }

    async fn decode_image(&self, bytes: Vec<u8>) -> String {
        // Encoding a banner-sized payload is CPU work; keep it off the
        // async threads. A join failure degrades to an empty reference.
        tokio::task::spawn_blocking(move || encode_data_uri(&bytes))
            .await
            .unwrap_or_default()
    }
}

// ==================== Image Decoding ====================

/// Sniff the MIME type from magic bytes
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        "image/gif"
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}

/// Encode raw bytes as a `data:` URI
pub fn encode_data_uri(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", sniff_mime(bytes), STANDARD.encode(bytes))
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_shape() {
        let backend = DefaultAccountBackend;
        let cred = backend.synthesize(0);
        assert!(cred.username.starts_with("@user_"));
        assert!(cred.email.starts_with("user"));
        assert!(cred.email.ends_with("@gmx.com"));
        assert!(cred.token.starts_with("Bearer_auto_"));
        assert!(!cred.id.is_empty());
    }

    #[test]
    fn test_synthesize_offsets_produce_distinct_ids() {
        let backend = DefaultAccountBackend;
        let a = backend.synthesize(0);
        let b = backend.synthesize(1);
        // ids are epoch-millis + offset; adjacent offsets inside the same
        // millisecond still differ
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_sniff_mime() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert_eq!(sniff_mime(&png), "image/png");
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_mime(b"GIF89a..."), "image/gif");
        assert_eq!(sniff_mime(b"RIFF\x00\x00\x00\x00WEBPVP8 "), "image/webp");
        assert_eq!(sniff_mime(b"not an image"), "application/octet-stream");
    }

    #[test]
    fn test_encode_data_uri() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let uri = encode_data_uri(&png);
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_decode_image_is_total() {
        let backend = DefaultAccountBackend;
        let uri = backend.decode_image(b"garbage".to_vec()).await;
        assert!(uri.starts_with("data:application/octet-stream;base64,"));
    }
}
