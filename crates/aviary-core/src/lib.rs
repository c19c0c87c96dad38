//! Core account registry and business logic
//!
//! The registry owns the in-memory collection of tracked accounts for the
//! running session. All mutation goes through the operations on [`Registry`];
//! derived statistics are recomputed on every read. Nothing here touches a
//! network or disk -- registration, activation, and image hosting are all
//! simulated through the injected backend.

pub mod error;

use aviary_config::Config;
use aviary_sim::BackendRef;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

pub use error::{CoreError, CoreResult, ErrorSeverity};

// ==================== Constants ====================

/// Hard limit for a single post, matching the platform cap
pub const MAX_POST_CHARS: usize = 280;

/// Upper bound for one bulk registration batch
pub const MAX_BATCH_SIZE: usize = 10;

// ==================== Account Model ====================

/// Account status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Account is live and usable
    Active,
    /// Added manually, not yet exercised
    Pending,
    /// Locked by the platform; carried in the model but produced by no operation
    Suspended,
    /// Mid bulk registration, waiting for activation
    Registering,
    /// Profile setup in progress; carried in the model but produced by no operation
    Configuring,
}

impl Default for AccountStatus {
    fn default() -> Self {
        AccountStatus::Pending
    }
}

impl std::str::FromStr for AccountStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(AccountStatus::Active),
            "pending" => Ok(AccountStatus::Pending),
            "suspended" => Ok(AccountStatus::Suspended),
            "registering" => Ok(AccountStatus::Registering),
            "configuring" => Ok(AccountStatus::Configuring),
            _ => Err(format!("Invalid account status: {}", s)),
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "active"),
            AccountStatus::Pending => write!(f, "pending"),
            AccountStatus::Suspended => write!(f, "suspended"),
            AccountStatus::Registering => write!(f, "registering"),
            AccountStatus::Configuring => write!(f, "configuring"),
        }
    }
}

/// One tracked account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Opaque unique id, assigned at creation
    pub id: String,
    /// Handle, by convention with a leading `@`; uniqueness is not enforced
    pub username: String,
    /// Opaque credential string, never validated
    pub token: String,
    /// Contact address, never validated
    pub email: String,
    /// Current lifecycle status
    pub status: AccountStatus,
    /// Follower count
    pub followers: u64,
    /// Following count
    pub following: u64,
    /// Published post count; only ever increments
    pub tweets: u64,
    /// Creation timestamp, RFC 3339
    pub created_at: String,
    /// Profile image as a data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Profile banner as a data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// Text of the most recent post
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_post: Option<String>,
    /// Timestamp of the most recent post, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_post_time: Option<String>,
}

impl Account {
    /// Check whether the account is live
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}

/// Input for manually adding an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub token: String,
    pub email: String,
}

// ==================== Statistics ====================

/// Derived registry statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStats {
    pub total_followers: u64,
    pub total_tweets: u64,
    pub active_count: usize,
    pub average_tweets: u64,
}

/// Compute statistics over a slice of accounts
///
/// Pure; recomputed on every read. The average is rounded to the nearest
/// whole tweet and defined as 0 for an empty slice.
pub fn derive_statistics(accounts: &[Account]) -> RegistryStats {
    let total_followers = accounts.iter().map(|a| a.followers).sum();
    let total_tweets: u64 = accounts.iter().map(|a| a.tweets).sum();
    let active_count = accounts.iter().filter(|a| a.is_active()).count();
    let average_tweets = if accounts.is_empty() {
        0
    } else {
        (total_tweets as f64 / accounts.len() as f64).round() as u64
    };

    RegistryStats {
        total_followers,
        total_tweets,
        active_count,
        average_tweets,
    }
}

// ==================== Export ====================

/// Serialized snapshot of the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Snapshot timestamp, RFC 3339
    pub export_date: String,
    /// Account count at snapshot time
    pub total_accounts: usize,
    /// Every account, each stamped with the export time
    pub accounts: Vec<ExportedAccount>,
}

/// One account inside an export document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedAccount {
    #[serde(flatten)]
    pub account: Account,
    pub exported_at: String,
}

// ==================== Registry ====================

/// In-memory registry data
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RegistryData {
    pub accounts: Vec<Account>,
}

/// Which profile image an upload targets
#[derive(Debug, Clone, Copy)]
enum ImageSlot {
    Avatar,
    Banner,
}

/// The account registry for the running session
pub struct Registry {
    config: Config,
    backend: BackendRef,
    data: RwLock<RegistryData>,
    registering: AtomicBool,
}

impl Registry {
    /// Create a registry, seeding the demo account when configured
    pub fn new(config: Config, backend: BackendRef) -> Self {
        let mut data = RegistryData::default();
        if config.seed.demo_account {
            data.accounts.push(demo_account());
        }
        Self {
            config,
            backend,
            data: RwLock::new(data),
            registering: AtomicBool::new(false),
        }
    }

    // ==================== Accessors ====================

    /// All accounts in insertion order
    pub fn accounts(&self) -> Vec<Account> {
        self.data.read().unwrap().accounts.clone()
    }

    /// Look up one account by id
    pub fn account(&self, id: &str) -> Option<Account> {
        self.data
            .read()
            .unwrap()
            .accounts
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    /// Number of tracked accounts
    pub fn account_count(&self) -> usize {
        self.data.read().unwrap().accounts.len()
    }

    /// Whether a bulk registration batch is currently in flight
    ///
    /// Advisory only: the UI disables re-invocation while this is set, but
    /// the registry does not serialize batches itself.
    pub fn is_registering(&self) -> bool {
        self.registering.load(Ordering::SeqCst)
    }

    /// Derived statistics over the current collection
    pub fn stats(&self) -> RegistryStats {
        derive_statistics(&self.data.read().unwrap().accounts)
    }

    // ==================== Operations ====================

    /// Manually add one account
    ///
    /// All three fields must be non-empty after trimming; the trimmed form
    /// is what gets stored. The new account starts `pending` with zeroed
    /// counters and is appended in insertion order.
    pub fn create_account(&self, new_account: NewAccount) -> CoreResult<Account> {
        let username = new_account.username.trim();
        let token = new_account.token.trim();
        let email = new_account.email.trim();

        for (field, value) in [("username", username), ("token", token), ("email", email)] {
            if value.is_empty() {
                return Err(CoreError::EmptyField {
                    field: field.to_string(),
                });
            }
        }

        let account = Account {
            id: self.backend.next_id(),
            username: username.to_string(),
            token: token.to_string(),
            email: email.to_string(),
            status: AccountStatus::Pending,
            followers: 0,
            following: 0,
            tweets: 0,
            created_at: Utc::now().to_rfc3339(),
            avatar: None,
            banner: None,
            last_post: None,
            last_post_time: None,
        };

        self.data.write().unwrap().accounts.push(account.clone());
        log::info!("added account {} ({})", account.username, account.id);
        Ok(account)
    }

    /// Register a batch of placeholder accounts
    ///
    /// Synthesizes `count` accounts from the backend, pausing the configured
    /// per-account delay between them, then appends the whole batch in one
    /// update. A deferred task activates exactly that id set after the
    /// configured activation delay -- membership by id, so accounts deleted
    /// in the interim are skipped and concurrently added accounts untouched.
    pub async fn bulk_register(self: &Arc<Self>, count: usize) -> CoreResult<Vec<Account>> {
        if count < 1 || count > MAX_BATCH_SIZE {
            return Err(CoreError::InvalidBatchSize {
                given: count,
                max: MAX_BATCH_SIZE,
            });
        }

        self.registering.store(true, Ordering::SeqCst);
        let account_delay = Duration::from_millis(self.config.provisioning.account_delay_ms);

        let mut batch = Vec::with_capacity(count);
        for offset in 0..count {
            let cred = self.backend.synthesize(offset as u64);
            log::info!(
                "provisioning mailbox {} for {}",
                cred.email,
                cred.username
            );
            batch.push(Account {
                id: cred.id,
                username: cred.username,
                token: cred.token,
                email: cred.email,
                status: AccountStatus::Registering,
                followers: 0,
                following: 0,
                tweets: 0,
                created_at: Utc::now().to_rfc3339(),
                avatar: None,
                banner: None,
                last_post: None,
                last_post_time: None,
            });
            tokio::time::sleep(account_delay).await;
        }

        let ids: Vec<String> = batch.iter().map(|a| a.id.clone()).collect();
        {
            let mut data = self.data.write().unwrap();
            data.accounts.extend(batch.iter().cloned());
        }
        self.registering.store(false, Ordering::SeqCst);
        log::info!("bulk registered {} accounts", batch.len());

        let registry = Arc::clone(self);
        let activation_delay =
            Duration::from_millis(self.config.provisioning.activation_delay_ms);
        tokio::spawn(async move {
            tokio::time::sleep(activation_delay).await;
            let activated = registry.activate_batch(&ids);
            log::info!("activated {} of {} batch accounts", activated, ids.len());
        });

        Ok(batch)
    }

    /// Flip a batch id set to `active` in one update
    ///
    /// Returns how many accounts actually transitioned; ids no longer in
    /// the registry are skipped.
    pub fn activate_batch(&self, ids: &[String]) -> usize {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let mut data = self.data.write().unwrap();
        let mut activated = 0;
        for account in data.accounts.iter_mut() {
            if wanted.contains(account.id.as_str()) {
                account.status = AccountStatus::Active;
                activated += 1;
            }
        }
        activated
    }

    /// Attach a profile image to an account
    ///
    /// Unknown ids are a silent no-op. Decoding happens before the lock is
    /// taken, so concurrent uploads race only on this one field (last write
    /// wins); everything else on the account is left alone except the
    /// status, which is forced to `active`.
    pub async fn upload_avatar(&self, account_id: &str, image: Vec<u8>) -> Option<Account> {
        let reference = self.backend.decode_image(image).await;
        self.set_image(account_id, ImageSlot::Avatar, reference)
    }

    /// Attach a profile banner to an account; same contract as avatars
    pub async fn upload_banner(&self, account_id: &str, image: Vec<u8>) -> Option<Account> {
        let reference = self.backend.decode_image(image).await;
        self.set_image(account_id, ImageSlot::Banner, reference)
    }

    fn set_image(
        &self,
        account_id: &str,
        slot: ImageSlot,
        reference: String,
    ) -> Option<Account> {
        let mut data = self.data.write().unwrap();
        match data.accounts.iter_mut().find(|a| a.id == account_id) {
            Some(account) => {
                match slot {
                    ImageSlot::Avatar => account.avatar = Some(reference),
                    ImageSlot::Banner => account.banner = Some(reference),
                }
                account.status = AccountStatus::Active;
                log::info!("stored {:?} image for {}", slot, account.username);
                Some(account.clone())
            }
            None => None,
        }
    }

    /// Publish a post from an account
    ///
    /// Text must be non-empty after trimming and at most
    /// [`MAX_POST_CHARS`] characters -- over-length text is rejected, never
    /// truncated. The stored post is the text as submitted. An unknown id
    /// is a silent no-op (`Ok(None)`). On success the account gets the post
    /// text and timestamp, exactly one more tweet, and `active` status, all
    /// in a single update.
    pub fn post(&self, account_id: &str, text: &str) -> CoreResult<Option<Account>> {
        if text.trim().is_empty() {
            return Err(CoreError::EmptyPost);
        }
        let chars = text.chars().count();
        if chars > MAX_POST_CHARS {
            return Err(CoreError::PostTooLong {
                given: chars,
                max: MAX_POST_CHARS,
            });
        }

        let mut data = self.data.write().unwrap();
        match data.accounts.iter_mut().find(|a| a.id == account_id) {
            Some(account) => {
                account.last_post = Some(text.to_string());
                account.last_post_time = Some(Utc::now().to_rfc3339());
                account.tweets += 1;
                account.status = AccountStatus::Active;
                log::info!(
                    "published post for {} ({} tweets)",
                    account.username,
                    account.tweets
                );
                Ok(Some(account.clone()))
            }
            None => Ok(None),
        }
    }

    /// Remove an account by id
    ///
    /// Returns whether anything was removed; a missing id is a no-op,
    /// never an error.
    pub fn delete_account(&self, id: &str) -> bool {
        let mut data = self.data.write().unwrap();
        let before = data.accounts.len();
        data.accounts.retain(|a| a.id != id);
        let removed = data.accounts.len() < before;
        if removed {
            log::info!("deleted account {}", id);
        }
        removed
    }

    /// Snapshot the registry for export
    ///
    /// Pure read: the document carries the export timestamp, the account
    /// count, and every account stamped with the same export time.
    pub fn export_snapshot(&self) -> ExportDocument {
        let data = self.data.read().unwrap();
        let exported_at = Utc::now().to_rfc3339();
        ExportDocument {
            export_date: exported_at.clone(),
            total_accounts: data.accounts.len(),
            accounts: data
                .accounts
                .iter()
                .map(|account| ExportedAccount {
                    account: account.clone(),
                    exported_at: exported_at.clone(),
                })
                .collect(),
        }
    }

    /// Download filename for the current export
    pub fn export_filename(&self) -> String {
        format!(
            "{}-{}.json",
            self.config.export.filename_prefix,
            aviary_utils::epoch_millis()
        )
    }
}

/// The seeded demo record
fn demo_account() -> Account {
    Account {
        id: "1".to_string(),
        username: "@demo_user".to_string(),
        token: "Bearer eyJhbGciOiJIUzI1NiIs...".to_string(),
        email: "demo@twitter.com".to_string(),
        status: AccountStatus::Active,
        followers: 1250,
        following: 342,
        tweets: 89,
        created_at: Utc::now().to_rfc3339(),
        avatar: None,
        banner: None,
        last_post: None,
        last_post_time: None,
    }
}

// ==================== Registry Operations Trait ====================

/// Trait for registry operations
pub trait RegistryOperations {
    /// Get registry summary
    fn summary(&self) -> RegistrySummary;

    /// Get accounts by status
    fn accounts_by_status(&self, status: AccountStatus) -> Vec<Account>;
}

/// Registry summary
#[derive(Debug, Serialize, Deserialize)]
pub struct RegistrySummary {
    pub total_accounts: usize,
    pub active_accounts: usize,
    pub registering_accounts: usize,
}

impl RegistryOperations for Registry {
    fn summary(&self) -> RegistrySummary {
        let data = self.data.read().unwrap();
        RegistrySummary {
            total_accounts: data.accounts.len(),
            active_accounts: data.accounts.iter().filter(|a| a.is_active()).count(),
            registering_accounts: data
                .accounts
                .iter()
                .filter(|a| a.status == AccountStatus::Registering)
                .count(),
        }
    }

    fn accounts_by_status(&self, status: AccountStatus) -> Vec<Account> {
        let data = self.data.read().unwrap();
        data.accounts
            .iter()
            .filter(|a| a.status == status)
            .cloned()
            .collect()
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use aviary_sim::{AccountBackendTrait, SyntheticCredentials};
    use std::sync::atomic::AtomicU64;

    /// Deterministic backend: sequential ids, no randomness
    #[derive(Default)]
    struct SequenceBackend {
        counter: AtomicU64,
    }

    #[async_trait]
    impl AccountBackendTrait for SequenceBackend {
        fn next_id(&self) -> String {
            format!("id-{}", self.counter.fetch_add(1, Ordering::SeqCst))
        }

        fn synthesize(&self, _offset: u64) -> SyntheticCredentials {
            let n = self.counter.fetch_add(1, Ordering::SeqCst);
            SyntheticCredentials {
                id: format!("bulk-{}", n),
                username: format!("@user_{}", n),
                token: format!("Bearer_auto_{}", n),
                email: format!("user{}@gmx.com", n),
            }
        }

        async fn decode_image(&self, bytes: Vec<u8>) -> String {
            aviary_sim::encode_data_uri(&bytes)
        }
    }

    fn test_config() -> Config {
        let mut config = Config::default();
        config.provisioning.account_delay_ms = 0;
        config.provisioning.activation_delay_ms = 0;
        config.seed.demo_account = false;
        config
    }

    fn test_registry() -> Arc<Registry> {
        Arc::new(Registry::new(
            test_config(),
            Arc::new(SequenceBackend::default()),
        ))
    }

    fn new_account(username: &str) -> NewAccount {
        NewAccount {
            username: username.to_string(),
            token: "Bearer xyz".to_string(),
            email: "someone@example.com".to_string(),
        }
    }

    async fn wait_until_all_active(registry: &Registry) -> bool {
        for _ in 0..100 {
            if registry.accounts().iter().all(|a| a.is_active()) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        false
    }

    #[test]
    fn test_create_account_appends_pending_with_zeroed_counters() {
        let registry = test_registry();
        let account = registry.create_account(new_account("@alice")).unwrap();

        assert_eq!(account.status, AccountStatus::Pending);
        assert_eq!(account.followers, 0);
        assert_eq!(account.following, 0);
        assert_eq!(account.tweets, 0);
        assert_eq!(registry.account_count(), 1);
        assert_eq!(registry.accounts()[0].id, account.id);
    }

    #[test]
    fn test_create_account_ids_are_unique() {
        let registry = test_registry();
        let a = registry.create_account(new_account("@alice")).unwrap();
        let b = registry.create_account(new_account("@bob")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_create_account_trims_fields() {
        let registry = test_registry();
        let account = registry
            .create_account(NewAccount {
                username: "  @alice  ".to_string(),
                token: " Bearer xyz ".to_string(),
                email: " alice@example.com ".to_string(),
            })
            .unwrap();
        assert_eq!(account.username, "@alice");
        assert_eq!(account.email, "alice@example.com");
    }

    #[test]
    fn test_create_account_rejects_empty_fields() {
        let registry = test_registry();
        for (username, token, email) in [
            ("", "Bearer xyz", "a@b.c"),
            ("@alice", "   ", "a@b.c"),
            ("@alice", "Bearer xyz", ""),
        ] {
            let result = registry.create_account(NewAccount {
                username: username.to_string(),
                token: token.to_string(),
                email: email.to_string(),
            });
            assert!(matches!(result, Err(CoreError::EmptyField { .. })));
        }
        assert_eq!(registry.account_count(), 0);
    }

    #[tokio::test]
    async fn test_bulk_register_rejects_out_of_range_counts() {
        let registry = test_registry();
        for count in [0, 11, 100] {
            let result = registry.bulk_register(count).await;
            assert!(matches!(result, Err(CoreError::InvalidBatchSize { .. })));
        }
        assert_eq!(registry.account_count(), 0);
    }

    #[tokio::test]
    async fn test_bulk_register_eventually_activates_the_batch() {
        let registry = test_registry();
        let batch = registry.bulk_register(3).await.unwrap();

        assert_eq!(batch.len(), 3);
        assert_eq!(registry.account_count(), 3);
        assert!(batch.iter().all(|a| a.status == AccountStatus::Registering));
        assert!(!registry.is_registering());
        assert!(wait_until_all_active(&registry).await);
    }

    #[tokio::test]
    async fn test_bulk_register_preserves_generation_order() {
        let registry = test_registry();
        let batch = registry.bulk_register(4).await.unwrap();
        let stored: Vec<String> = registry.accounts().iter().map(|a| a.id.clone()).collect();
        let generated: Vec<String> = batch.iter().map(|a| a.id.clone()).collect();
        assert_eq!(stored, generated);
    }

    #[tokio::test]
    async fn test_bulk_register_synthesizes_placeholder_credentials() {
        let registry = test_registry();
        let batch = registry.bulk_register(2).await.unwrap();
        for account in &batch {
            assert!(account.username.starts_with("@user_"));
            assert!(account.email.ends_with("@gmx.com"));
            assert!(account.token.starts_with("Bearer_auto_"));
        }
    }

    #[test]
    fn test_activate_batch_skips_deleted_ids() {
        let registry = test_registry();
        let a = registry.create_account(new_account("@alice")).unwrap();
        let b = registry.create_account(new_account("@bob")).unwrap();

        assert!(registry.delete_account(&a.id));
        let activated = registry.activate_batch(&[a.id.clone(), b.id.clone()]);

        assert_eq!(activated, 1);
        assert_eq!(registry.account(&b.id).unwrap().status, AccountStatus::Active);
    }

    #[test]
    fn test_activate_batch_leaves_other_accounts_alone() {
        let registry = test_registry();
        let manual = registry.create_account(new_account("@manual")).unwrap();
        let other = registry.create_account(new_account("@other")).unwrap();

        registry.activate_batch(&[other.id.clone()]);

        assert_eq!(
            registry.account(&manual.id).unwrap().status,
            AccountStatus::Pending
        );
    }

    #[test]
    fn test_post_increments_tweets_exactly_once_per_call() {
        let registry = test_registry();
        let account = registry.create_account(new_account("@alice")).unwrap();

        let updated = registry.post(&account.id, "hello world").unwrap().unwrap();
        assert_eq!(updated.tweets, 1);
        assert_eq!(updated.last_post.as_deref(), Some("hello world"));
        assert_eq!(updated.status, AccountStatus::Active);
        assert!(updated.last_post_time.is_some());

        // Not idempotent: each call increments again
        let updated = registry.post(&account.id, "hello world").unwrap().unwrap();
        assert_eq!(updated.tweets, 2);
    }

    #[test]
    fn test_post_rejects_empty_and_overlong_text() {
        let registry = test_registry();
        let account = registry.create_account(new_account("@alice")).unwrap();

        assert!(matches!(
            registry.post(&account.id, "   "),
            Err(CoreError::EmptyPost)
        ));
        assert!(matches!(
            registry.post(&account.id, &"x".repeat(281)),
            Err(CoreError::PostTooLong { given: 281, max: 280 })
        ));

        let stored = registry.account(&account.id).unwrap();
        assert_eq!(stored.tweets, 0);
        assert!(stored.last_post.is_none());
        assert_eq!(stored.status, AccountStatus::Pending);
    }

    #[test]
    fn test_post_accepts_exactly_280_chars() {
        let registry = test_registry();
        let account = registry.create_account(new_account("@alice")).unwrap();
        let text = "x".repeat(280);
        let updated = registry.post(&account.id, &text).unwrap().unwrap();
        assert_eq!(updated.last_post.as_deref(), Some(text.as_str()));
    }

    #[test]
    fn test_post_to_unknown_id_is_a_noop() {
        let registry = test_registry();
        registry.create_account(new_account("@alice")).unwrap();

        assert!(registry.post("missing", "hello").unwrap().is_none());
        assert_eq!(registry.accounts()[0].tweets, 0);
    }

    #[tokio::test]
    async fn test_upload_avatar_stores_data_uri_and_activates() {
        let registry = test_registry();
        let account = registry.create_account(new_account("@alice")).unwrap();

        let png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let updated = registry.upload_avatar(&account.id, png).await.unwrap();

        assert!(updated
            .avatar
            .as_deref()
            .unwrap()
            .starts_with("data:image/png;base64,"));
        assert_eq!(updated.status, AccountStatus::Active);
        assert!(updated.banner.is_none());
    }

    #[tokio::test]
    async fn test_upload_banner_touches_only_the_banner_field() {
        let registry = test_registry();
        let account = registry.create_account(new_account("@alice")).unwrap();

        registry
            .upload_avatar(&account.id, vec![0xFF, 0xD8, 0xFF, 0xE0])
            .await
            .unwrap();
        let updated = registry
            .upload_banner(&account.id, vec![0xFF, 0xD8, 0xFF, 0xE0])
            .await
            .unwrap();

        assert!(updated.avatar.is_some());
        assert!(updated.banner.is_some());
        assert_eq!(updated.tweets, 0);
    }

    #[tokio::test]
    async fn test_upload_to_unknown_id_is_a_noop() {
        let registry = test_registry();
        assert!(registry.upload_avatar("missing", vec![1, 2, 3]).await.is_none());
        assert_eq!(registry.account_count(), 0);
    }

    #[test]
    fn test_delete_account_twice_is_safe() {
        let registry = test_registry();
        let account = registry.create_account(new_account("@alice")).unwrap();

        assert!(registry.delete_account(&account.id));
        assert!(!registry.delete_account(&account.id));
        assert_eq!(registry.account_count(), 0);
    }

    #[test]
    fn test_statistics_on_empty_registry() {
        let registry = test_registry();
        assert_eq!(
            registry.stats(),
            RegistryStats {
                total_followers: 0,
                total_tweets: 0,
                active_count: 0,
                average_tweets: 0,
            }
        );
    }

    #[test]
    fn test_statistics_on_seeded_demo_account() {
        let mut config = test_config();
        config.seed.demo_account = true;
        let registry = Registry::new(config, Arc::new(SequenceBackend::default()));

        assert_eq!(
            registry.stats(),
            RegistryStats {
                total_followers: 1250,
                total_tweets: 89,
                active_count: 1,
                average_tweets: 89,
            }
        );
    }

    #[test]
    fn test_statistics_average_rounds_to_nearest() {
        let registry = test_registry();
        let a = registry.create_account(new_account("@alice")).unwrap();
        let b = registry.create_account(new_account("@bob")).unwrap();
        registry.post(&a.id, "one").unwrap();
        registry.post(&b.id, "one").unwrap();
        registry.post(&b.id, "two").unwrap();

        // 3 tweets over 2 accounts: 1.5 rounds up to 2
        assert_eq!(registry.stats().average_tweets, 2);
    }

    #[test]
    fn test_export_snapshot_round_trip() {
        let registry = test_registry();
        registry.create_account(new_account("@alice")).unwrap();
        registry.create_account(new_account("@bob")).unwrap();

        let doc = registry.export_snapshot();
        let json = serde_json::to_string(&doc).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["totalAccounts"], 2);
        assert_eq!(
            parsed["accounts"].as_array().unwrap().len(),
            parsed["totalAccounts"].as_u64().unwrap() as usize
        );
        for (value, account) in parsed["accounts"]
            .as_array()
            .unwrap()
            .iter()
            .zip(registry.accounts())
        {
            assert_eq!(value["id"], account.id.as_str());
            assert_eq!(value["username"], account.username.as_str());
            assert_eq!(value["createdAt"], account.created_at.as_str());
            assert!(value["exportedAt"].is_string());
        }

        // Pure read: nothing changed
        assert_eq!(registry.account_count(), 2);
    }

    #[test]
    fn test_export_filename_shape() {
        let registry = test_registry();
        let filename = registry.export_filename();
        assert!(filename.starts_with("twitter-accounts-"));
        assert!(filename.ends_with(".json"));
    }

    #[tokio::test]
    async fn test_registry_summary() {
        let registry = test_registry();
        registry.create_account(new_account("@alice")).unwrap();
        registry.bulk_register(2).await.unwrap();

        let summary = registry.summary();
        assert_eq!(summary.total_accounts, 3);
        // The manual account is still pending; batch accounts are either
        // registering or already activated depending on the deferred task
        assert_eq!(summary.active_accounts + summary.registering_accounts, 2);
        assert_eq!(
            registry.accounts_by_status(AccountStatus::Pending).len(),
            1
        );
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            AccountStatus::Active,
            AccountStatus::Pending,
            AccountStatus::Suspended,
            AccountStatus::Registering,
            AccountStatus::Configuring,
        ] {
            assert_eq!(status.to_string().parse::<AccountStatus>().unwrap(), status);
        }
        assert!("deleted".parse::<AccountStatus>().is_err());
    }
}
