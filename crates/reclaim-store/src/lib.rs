//! In-memory entity store for the lost-and-found portal.
//!
//! One [`Store`] is constructed at startup and shared by handle; it owns the
//! lifetime of every user, item, and notification. Each table sits behind its
//! own mutex, so request handlers and the background sweep serialize on the
//! tables they touch and nothing else.

pub mod error;
mod seed;

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use tracing::debug;
use uuid::Uuid;

use reclaim_types::api::{CreateItemRequest, UpdateItemRequest, UpdateProfileRequest};
use reclaim_types::models::{Item, ItemStatus, Notification, User};

pub use error::{Result, StoreError};

/// How long a claimed item is kept before the sweep deletes it.
pub fn default_claim_retention() -> Duration {
    Duration::days(2)
}

struct NotificationTable {
    rows: HashMap<Uuid, Notification>,
    next_seq: u64,
}

pub struct Store {
    users: Mutex<HashMap<Uuid, User>>,
    items: Mutex<HashMap<Uuid, Item>>,
    notifications: Mutex<NotificationTable>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            items: Mutex::new(HashMap::new()),
            notifications: Mutex::new(NotificationTable {
                rows: HashMap::new(),
                next_seq: 0,
            }),
        }
    }

    // -- Users --

    /// Create an account. `password_digest` is the already-hashed password;
    /// the store never sees plaintext. Matric number and gmail must be unique
    /// across all users.
    pub fn create_user(
        &self,
        full_name: &str,
        matric_no: &str,
        gmail: &str,
        password_digest: &str,
    ) -> Result<User> {
        let mut users = self.users.lock();
        if users.values().any(|u| u.gmail == gmail) {
            return Err(StoreError::DuplicateEmail);
        }
        if users.values().any(|u| u.matric_no == matric_no) {
            return Err(StoreError::DuplicateMatric);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            password: password_digest.to_string(),
            full_name: full_name.to_string(),
            matric_no: matric_no.to_string(),
            gmail: gmail.to_string(),
            department: None,
            level: None,
            phone_number: None,
            profile_image: None,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn get_user(&self, id: Uuid) -> Option<User> {
        self.users.lock().get(&id).cloned()
    }

    pub fn get_user_by_gmail(&self, gmail: &str) -> Option<User> {
        self.users.lock().values().find(|u| u.gmail == gmail).cloned()
    }

    pub fn get_user_by_matric(&self, matric_no: &str) -> Option<User> {
        self.users
            .lock()
            .values()
            .find(|u| u.matric_no == matric_no)
            .cloned()
    }

    /// Merge a partial profile update and refresh `updated_at`. Password and
    /// the unique identifiers are not reachable from here.
    pub fn update_user(&self, id: Uuid, updates: UpdateProfileRequest) -> Result<User> {
        let mut users = self.users.lock();
        let user = users.get_mut(&id).ok_or(StoreError::NotFound("User"))?;

        if let Some(full_name) = updates.full_name {
            user.full_name = full_name;
        }
        if let Some(department) = updates.department {
            user.department = Some(department);
        }
        if let Some(level) = updates.level {
            user.level = Some(level);
        }
        if let Some(phone_number) = updates.phone_number {
            user.phone_number = Some(phone_number);
        }
        if let Some(profile_image) = updates.profile_image {
            user.profile_image = Some(profile_image);
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    // -- Items --

    /// All reports, newest first.
    pub fn items(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.items.lock().values().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    pub fn get_item(&self, id: Uuid) -> Option<Item> {
        self.items.lock().get(&id).cloned()
    }

    /// File a new report owned by `reporter`. Reporter name/contact are
    /// stored as given — a snapshot independent of the live account record.
    pub fn create_item(&self, reporter: Uuid, req: CreateItemRequest) -> Result<Item> {
        if req.status == ItemStatus::Claimed {
            return Err(StoreError::Validation(
                "New reports must be lost or found".to_string(),
            ));
        }

        let item = Item {
            id: Uuid::new_v4(),
            name: req.name,
            category: req.category,
            status: req.status,
            location: req.location,
            date: req.date,
            image: req.image,
            description: req.description,
            reporter_name: req.reporter_name,
            reporter_contact: req.reporter_contact,
            reporter_id: Some(reporter),
            claimed_at: None,
            holder_info: None,
            created_at: Utc::now(),
        };
        self.items.lock().insert(item.id, item.clone());
        Ok(item)
    }

    pub fn update_item(&self, id: Uuid, actor: Uuid, updates: UpdateItemRequest) -> Result<Item> {
        let mut items = self.items.lock();
        let item = items.get_mut(&id).ok_or(StoreError::NotFound("Item"))?;
        ensure_owner(item, actor)?;

        if let Some(name) = updates.name {
            item.name = name;
        }
        if let Some(category) = updates.category {
            item.category = category;
        }
        if let Some(status) = updates.status {
            item.status = status;
            if status != ItemStatus::Claimed {
                // Reopening a report drops its claim record; claimed_at and
                // holder_info only exist while the item is claimed.
                item.claimed_at = None;
                item.holder_info = None;
            }
        }
        if let Some(location) = updates.location {
            item.location = location;
        }
        if let Some(date) = updates.date {
            item.date = date;
        }
        if let Some(image) = updates.image {
            item.image = Some(image);
        }
        if let Some(description) = updates.description {
            item.description = description;
        }
        Ok(item.clone())
    }

    pub fn delete_item(&self, id: Uuid, actor: Uuid) -> Result<()> {
        let mut items = self.items.lock();
        let item = items.get(&id).ok_or(StoreError::NotFound("Item"))?;
        ensure_owner(item, actor)?;
        items.remove(&id);
        Ok(())
    }

    /// Transition a report to `claimed`, recording who currently holds it.
    /// `claimed_at` and `holder_info` are set together, nowhere else.
    pub fn resolve_item(&self, id: Uuid, actor: Uuid, holder_info: &str) -> Result<Item> {
        let mut items = self.items.lock();
        let item = items.get_mut(&id).ok_or(StoreError::NotFound("Item"))?;
        ensure_owner(item, actor)?;
        if holder_info.trim().is_empty() {
            return Err(StoreError::Validation("Holder info is required".to_string()));
        }

        item.status = ItemStatus::Claimed;
        item.claimed_at = Some(Utc::now());
        item.holder_info = Some(holder_info.to_string());
        Ok(item.clone())
    }

    /// Delete claimed items whose `claimed_at` is older than `retention`.
    /// Pure with respect to the clock: the scheduler injects `now`. Returns
    /// the number of items removed.
    pub fn sweep_expired_claims(&self, now: DateTime<Utc>, retention: Duration) -> usize {
        let cutoff = now - retention;
        let mut items = self.items.lock();
        let before = items.len();
        items.retain(|_, item| {
            !(item.status == ItemStatus::Claimed
                && item.claimed_at.is_some_and(|at| at < cutoff))
        });
        let removed = before - items.len();
        if removed > 0 {
            debug!("swept {} stale claimed item(s)", removed);
        }
        removed
    }

    // -- Notifications --

    pub fn create_notification(&self, user_id: Uuid, message: &str) -> Result<Notification> {
        if message.trim().is_empty() {
            return Err(StoreError::Validation("Message is required".to_string()));
        }

        let mut table = self.notifications.lock();
        let seq = table.next_seq;
        table.next_seq += 1;

        let notification = Notification {
            id: Uuid::new_v4(),
            user_id,
            message: message.to_string(),
            date: Utc::now(),
            read: "false".to_string(),
            seq,
        };
        table.rows.insert(notification.id, notification.clone());
        Ok(notification)
    }

    /// A user's inbox, most recent first. Notifications sharing a timestamp
    /// keep their insertion order.
    pub fn notifications_for(&self, user_id: Uuid) -> Vec<Notification> {
        let table = self.notifications.lock();
        let mut rows: Vec<Notification> = table
            .rows
            .values()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then(a.seq.cmp(&b.seq)));
        rows
    }

    /// Dismiss a notification. Only the recipient may do so; anyone else's
    /// id reads as absent rather than revealing the notification exists.
    pub fn delete_notification(&self, id: Uuid, recipient: Uuid) -> Result<()> {
        let mut table = self.notifications.lock();
        match table.rows.get(&id) {
            Some(n) if n.user_id == recipient => {
                table.rows.remove(&id);
                Ok(())
            }
            _ => Err(StoreError::NotFound("Notification")),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned reports may only be mutated by their reporter. Seed/anonymous items
/// (no reporter id) are open to any authenticated user.
fn ensure_owner(item: &Item, actor: Uuid) -> Result<()> {
    match item.reporter_id {
        Some(owner) if owner != actor => Err(StoreError::Forbidden),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str) -> CreateItemRequest {
        CreateItemRequest {
            name: name.to_string(),
            category: "Bags".to_string(),
            status: ItemStatus::Lost,
            location: "Library".to_string(),
            date: "May 15, 2025".to_string(),
            image: None,
            description: "test report".to_string(),
            reporter_name: "Ada".to_string(),
            reporter_contact: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn duplicate_email_and_matric_are_rejected() {
        let store = Store::new();
        store.create_user("Ada", "20/0001", "ada@bells.edu", "digest").unwrap();

        let err = store
            .create_user("Eve", "20/0002", "ada@bells.edu", "digest")
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateEmail);

        let err = store
            .create_user("Eve", "20/0001", "eve@bells.edu", "digest")
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateMatric);
    }

    #[test]
    fn profile_update_merges_and_refreshes_timestamp() {
        let store = Store::new();
        let user = store.create_user("Ada", "20/0001", "ada@bells.edu", "digest").unwrap();

        let updated = store
            .update_user(
                user.id,
                UpdateProfileRequest {
                    department: Some("Computer Science".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.department.as_deref(), Some("Computer Science"));
        assert_eq!(updated.full_name, "Ada");
        assert_eq!(updated.matric_no, "20/0001");
        assert!(updated.updated_at >= user.updated_at);
    }

    #[test]
    fn resolve_sets_claim_fields_atomically() {
        let store = Store::new();
        let user = store.create_user("Ada", "20/0001", "ada@bells.edu", "digest").unwrap();
        let item = store.create_item(user.id, report("Backpack")).unwrap();
        assert!(item.claimed_at.is_none());
        assert!(item.holder_info.is_none());

        let resolved = store.resolve_item(item.id, user.id, "front desk").unwrap();
        assert_eq!(resolved.status, ItemStatus::Claimed);
        assert!(resolved.claimed_at.is_some());
        assert_eq!(resolved.holder_info.as_deref(), Some("front desk"));
    }

    #[test]
    fn reopening_a_claimed_report_clears_claim_fields() {
        let store = Store::new();
        let user = store.create_user("Ada", "20/0001", "ada@bells.edu", "digest").unwrap();
        let item = store.create_item(user.id, report("Backpack")).unwrap();
        store.resolve_item(item.id, user.id, "front desk").unwrap();

        let reopened = store
            .update_item(
                item.id,
                user.id,
                UpdateItemRequest {
                    status: Some(ItemStatus::Lost),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(reopened.status, ItemStatus::Lost);
        assert!(reopened.claimed_at.is_none());
        assert!(reopened.holder_info.is_none());

        // A reopened report is live again and never swept.
        let removed =
            store.sweep_expired_claims(Utc::now() + Duration::days(30), default_claim_retention());
        assert_eq!(removed, 0);
        assert!(store.get_item(item.id).is_some());
    }

    #[test]
    fn resolve_rejects_blank_holder_info() {
        let store = Store::new();
        let user = store.create_user("Ada", "20/0001", "ada@bells.edu", "digest").unwrap();
        let item = store.create_item(user.id, report("Backpack")).unwrap();

        let err = store.resolve_item(item.id, user.id, "   ").unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        let unchanged = store.get_item(item.id).unwrap();
        assert_eq!(unchanged.status, ItemStatus::Lost);
    }

    #[test]
    fn resolve_unknown_id_is_not_found_and_mutates_nothing() {
        let store = Store::new();
        let user = store.create_user("Ada", "20/0001", "ada@bells.edu", "digest").unwrap();
        store.create_item(user.id, report("Backpack")).unwrap();

        let err = store.resolve_item(Uuid::new_v4(), user.id, "front desk").unwrap_err();
        assert_eq!(err, StoreError::NotFound("Item"));
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].status, ItemStatus::Lost);
    }

    #[test]
    fn create_item_rejects_claimed_status() {
        let store = Store::new();
        let user = store.create_user("Ada", "20/0001", "ada@bells.edu", "digest").unwrap();
        let mut req = report("Backpack");
        req.status = ItemStatus::Claimed;
        assert!(matches!(
            store.create_item(user.id, req),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn only_the_reporter_may_mutate_an_owned_item() {
        let store = Store::new();
        let ada = store.create_user("Ada", "20/0001", "ada@bells.edu", "digest").unwrap();
        let eve = store.create_user("Eve", "20/0002", "eve@bells.edu", "digest").unwrap();
        let item = store.create_item(ada.id, report("Backpack")).unwrap();

        assert_eq!(
            store.resolve_item(item.id, eve.id, "front desk").unwrap_err(),
            StoreError::Forbidden
        );
        assert_eq!(
            store.delete_item(item.id, eve.id).unwrap_err(),
            StoreError::Forbidden
        );
        assert_eq!(
            store
                .update_item(item.id, eve.id, UpdateItemRequest::default())
                .unwrap_err(),
            StoreError::Forbidden
        );
        // Untouched.
        assert_eq!(store.get_item(item.id).unwrap().status, ItemStatus::Lost);
    }

    #[test]
    fn anyone_may_resolve_an_unowned_seed_item() {
        let store = Store::new();
        let eve = store.create_user("Eve", "20/0002", "eve@bells.edu", "digest").unwrap();
        store.seed_demo_items();

        let seeded = store.items().into_iter().next().unwrap();
        assert!(seeded.reporter_id.is_none());
        let resolved = store.resolve_item(seeded.id, eve.id, "security desk").unwrap();
        assert_eq!(resolved.status, ItemStatus::Claimed);
    }

    #[test]
    fn sweep_removes_only_stale_claimed_items() {
        let store = Store::new();
        let user = store.create_user("Ada", "20/0001", "ada@bells.edu", "digest").unwrap();

        let fresh = store.create_item(user.id, report("Fresh")).unwrap();
        let recent = store.create_item(user.id, report("Recent")).unwrap();
        let stale = store.create_item(user.id, report("Stale")).unwrap();
        store.resolve_item(recent.id, user.id, "desk").unwrap();
        store.resolve_item(stale.id, user.id, "desk").unwrap();

        let now = Utc::now();
        {
            // Backdate the claim timestamps directly.
            let mut items = store.items.lock();
            items.get_mut(&recent.id).unwrap().claimed_at = Some(now - Duration::hours(1));
            items.get_mut(&stale.id).unwrap().claimed_at = Some(now - Duration::hours(49));
        }

        let removed = store.sweep_expired_claims(now, default_claim_retention());
        assert_eq!(removed, 1);
        assert!(store.get_item(fresh.id).is_some());
        assert!(store.get_item(recent.id).is_some());
        assert!(store.get_item(stale.id).is_none());
    }

    #[test]
    fn notifications_are_per_user_and_newest_first() {
        let store = Store::new();
        let ada = store.create_user("Ada", "20/0001", "ada@bells.edu", "digest").unwrap();
        let eve = store.create_user("Eve", "20/0002", "eve@bells.edu", "digest").unwrap();

        let first = store.create_notification(ada.id, "first").unwrap();
        let second = store.create_notification(ada.id, "second").unwrap();
        store.create_notification(eve.id, "other inbox").unwrap();

        let inbox = store.notifications_for(ada.id);
        assert_eq!(inbox.len(), 2);
        assert!(inbox.iter().all(|n| n.user_id == ada.id));
        assert!(inbox.iter().all(|n| n.read == "false"));
        if first.date == second.date {
            // Equal timestamps fall back to insertion order.
            assert_eq!(inbox[0].id, first.id);
            assert_eq!(inbox[1].id, second.id);
        } else {
            assert_eq!(inbox[0].id, second.id);
        }
    }

    #[test]
    fn only_the_recipient_may_dismiss_a_notification() {
        let store = Store::new();
        let ada = store.create_user("Ada", "20/0001", "ada@bells.edu", "digest").unwrap();
        let eve = store.create_user("Eve", "20/0002", "eve@bells.edu", "digest").unwrap();
        let n = store.create_notification(ada.id, "hello").unwrap();

        // Someone else's inbox entry reads as absent.
        assert_eq!(
            store.delete_notification(n.id, eve.id).unwrap_err(),
            StoreError::NotFound("Notification")
        );
        assert_eq!(store.notifications_for(ada.id).len(), 1);

        store.delete_notification(n.id, ada.id).unwrap();
        assert_eq!(
            store.delete_notification(n.id, ada.id).unwrap_err(),
            StoreError::NotFound("Notification")
        );
    }
}
