//! User administration: paged listing, edits, deletion, and the
//! 30-day registration series behind the dashboard sparkline.
//!
//! Storage lives behind the [`UserStore`] seam; this module only holds
//! the rules (sort order, editable fields, day bucketing).

#![allow(missing_docs)]

use std::str::FromStr;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::errors::{HdcError, Result};
use crate::core::paging::{Page, PageRequest, paginate};

/// Days covered by the registrations sparkline, today inclusive.
pub const REGISTRATION_WINDOW_DAYS: u64 = 30;

/// Account role as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Admin,
}

/// A user row as the admin table renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Partial edit payload from the edit dialog. Absent fields are left
/// untouched; the email field is immutable and only accepted when it
/// matches the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserEditRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
}

/// Sortable columns of the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserSortField {
    Id,
    Email,
    Username,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort specification, wire form `"<field>,<direction>"` (the table
/// always sends `id,asc` today; the parser accepts any valid pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSort {
    pub field: UserSortField,
    pub direction: SortDirection,
}

impl Default for UserSort {
    fn default() -> Self {
        Self {
            field: UserSortField::Id,
            direction: SortDirection::Asc,
        }
    }
}

impl FromStr for UserSort {
    type Err = HdcError;

    fn from_str(spec: &str) -> Result<Self> {
        let invalid = || HdcError::Serialization {
            context: "sort",
            details: format!("invalid sort spec: {spec}"),
        };
        let (field, direction) = spec.split_once(',').ok_or_else(&invalid)?;
        let field = match field.trim() {
            "id" => UserSortField::Id,
            "email" => UserSortField::Email,
            "username" => UserSortField::Username,
            "createdAt" => UserSortField::CreatedAt,
            _ => return Err(invalid()),
        };
        let direction = match direction.trim() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(invalid()),
        };
        Ok(Self { field, direction })
    }
}

/// Storage seam for user accounts. Implementations may be backed by
/// anything; the crate itself ships none.
pub trait UserStore {
    /// Every account, in storage order.
    fn all(&self) -> Result<Vec<UserAccount>>;
    /// Lookup by id.
    fn find(&self, user_id: u64) -> Result<Option<UserAccount>>;
    /// Persists an updated account. The id must already exist.
    fn save(&mut self, user: UserAccount) -> Result<UserAccount>;
    /// Removes an account; returns whether it existed.
    fn remove(&mut self, user_id: u64) -> Result<bool>;
}

/// Admin-facing operations over a [`UserStore`].
#[derive(Debug)]
pub struct AdminDirectory<S: UserStore> {
    store: S,
}

impl<S: UserStore> AdminDirectory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store, for callers that need direct access.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// One page of users, sorted then sliced.
    pub fn list_users(&self, request: &PageRequest, sort: UserSort) -> Result<Page<UserAccount>> {
        let mut users = self.store.all()?;
        sort_users(&mut users, sort);
        let page = paginate(&users, request);
        debug!(
            page = request.page,
            size = request.size,
            total = page.total_elements,
            "listed users"
        );
        Ok(page)
    }

    /// Lookup by id; missing ids are an error, matching the API.
    pub fn get_user(&self, user_id: u64) -> Result<UserAccount> {
        self.store
            .find(user_id)?
            .ok_or(HdcError::UserNotFound { user_id })
    }

    /// Applies an edit request. Email is immutable: a differing email
    /// in the payload is rejected before anything is written.
    pub fn update_user(&mut self, user_id: u64, edit: &UserEditRequest) -> Result<UserAccount> {
        let mut user = self.get_user(user_id)?;
        if let Some(email) = &edit.email
            && *email != user.email
        {
            return Err(HdcError::ImmutableField { field: "email" });
        }
        if let Some(first_name) = &edit.first_name {
            user.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &edit.last_name {
            user.last_name.clone_from(last_name);
        }
        if let Some(role) = edit.role {
            user.role = role;
        }
        let saved = self.store.save(user)?;
        info!(user_id, "updated user");
        Ok(saved)
    }

    /// Deletes an account; missing ids are an error.
    pub fn delete_user(&mut self, user_id: u64) -> Result<()> {
        if !self.store.remove(user_id)? {
            return Err(HdcError::UserNotFound { user_id });
        }
        info!(user_id, "deleted user");
        Ok(())
    }

    /// Daily registration counts for the sparkline: exactly 30 buckets,
    /// oldest first, ending with `today`.
    pub fn registrations_last_30_days(&self, today: NaiveDate) -> Result<Vec<u64>> {
        let users = self.store.all()?;
        let mut series = Vec::with_capacity(REGISTRATION_WINDOW_DAYS as usize);
        for offset in (0..REGISTRATION_WINDOW_DAYS).rev() {
            // NaiveDate::MIN guards underflow near the calendar origin.
            let day = today
                .checked_sub_days(Days::new(offset))
                .unwrap_or(NaiveDate::MIN);
            let count = users
                .iter()
                .filter(|user| user.created_at.date_naive() == day)
                .count() as u64;
            series.push(count);
        }
        Ok(series)
    }
}

fn sort_users(users: &mut [UserAccount], sort: UserSort) {
    users.sort_by(|left, right| {
        let ordering = match sort.field {
            UserSortField::Id => left.id.cmp(&right.id),
            UserSortField::Email => left.email.cmp(&right.email),
            UserSortField::Username => left.username.cmp(&right.username),
            UserSortField::CreatedAt => left.created_at.cmp(&right.created_at),
        };
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{
        AdminDirectory, SortDirection, UserAccount, UserEditRequest, UserRole, UserSort,
        UserSortField, UserStore,
    };
    use crate::core::errors::Result;
    use crate::core::paging::PageRequest;

    #[derive(Default)]
    struct MemoryStore {
        users: Vec<UserAccount>,
    }

    impl UserStore for MemoryStore {
        fn all(&self) -> Result<Vec<UserAccount>> {
            Ok(self.users.clone())
        }
        fn find(&self, user_id: u64) -> Result<Option<UserAccount>> {
            Ok(self.users.iter().find(|u| u.id == user_id).cloned())
        }
        fn save(&mut self, user: UserAccount) -> Result<UserAccount> {
            if let Some(slot) = self.users.iter_mut().find(|u| u.id == user.id) {
                *slot = user.clone();
            }
            Ok(user)
        }
        fn remove(&mut self, user_id: u64) -> Result<bool> {
            let before = self.users.len();
            self.users.retain(|u| u.id != user_id);
            Ok(self.users.len() != before)
        }
    }

    fn account(id: u64, email: &str, day: u32) -> UserAccount {
        UserAccount {
            id,
            email: email.to_string(),
            username: format!("user{id}"),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: UserRole::User,
            created_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
        }
    }

    fn directory() -> AdminDirectory<MemoryStore> {
        AdminDirectory::new(MemoryStore {
            users: vec![
                account(3, "c@example.com", 3),
                account(1, "a@example.com", 1),
                account(2, "b@example.com", 2),
            ],
        })
    }

    #[test]
    fn listing_sorts_then_pages() {
        let directory = directory();
        let page = directory
            .list_users(&PageRequest::new(0, 2), UserSort::default())
            .expect("list");
        let ids: Vec<u64> = page.content.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn descending_sort_reverses_order() {
        let directory = directory();
        let sort = UserSort {
            field: UserSortField::Id,
            direction: SortDirection::Desc,
        };
        let page = directory
            .list_users(&PageRequest::new(0, 10), sort)
            .expect("list");
        let ids: Vec<u64> = page.content.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn sort_spec_parses_the_wire_form() {
        let sort: UserSort = "id,asc".parse().expect("valid spec");
        assert_eq!(sort, UserSort::default());
        let sort: UserSort = "createdAt,desc".parse().expect("valid spec");
        assert_eq!(sort.field, UserSortField::CreatedAt);
        assert!("id".parse::<UserSort>().is_err());
        assert!("name,asc".parse::<UserSort>().is_err());
    }

    #[test]
    fn missing_user_is_a_coded_error() {
        let directory = directory();
        let error = directory.get_user(99).expect_err("missing id");
        assert_eq!(error.code(), "HDC-3001");
    }

    #[test]
    fn update_edits_names_and_role_but_never_email() {
        let mut directory = directory();
        let edit = UserEditRequest {
            first_name: Some("Grace".to_string()),
            role: Some(UserRole::Admin),
            ..UserEditRequest::default()
        };
        let updated = directory.update_user(1, &edit).expect("update");
        assert_eq!(updated.first_name, "Grace");
        assert_eq!(updated.role, UserRole::Admin);
        assert_eq!(updated.email, "a@example.com");

        let edit = UserEditRequest {
            email: Some("other@example.com".to_string()),
            ..UserEditRequest::default()
        };
        let error = directory.update_user(1, &edit).expect_err("immutable email");
        assert_eq!(error.code(), "HDC-3002");
    }

    #[test]
    fn matching_email_in_the_payload_is_accepted() {
        let mut directory = directory();
        let edit = UserEditRequest {
            email: Some("a@example.com".to_string()),
            last_name: Some("Hopper".to_string()),
            ..UserEditRequest::default()
        };
        let updated = directory.update_user(1, &edit).expect("update");
        assert_eq!(updated.last_name, "Hopper");
    }

    #[test]
    fn delete_removes_and_reports_missing_ids() {
        let mut directory = directory();
        directory.delete_user(2).expect("delete");
        assert!(directory.get_user(2).is_err());
        let error = directory.delete_user(2).expect_err("already gone");
        assert_eq!(error.code(), "HDC-3001");
    }

    #[test]
    fn registration_series_is_30_buckets_ending_today() {
        let directory = directory();
        let today = chrono::NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
        let series = directory
            .registrations_last_30_days(today)
            .expect("series");
        assert_eq!(series.len(), 30);
        // Users registered on the 1st, 2nd and 3rd: the last three buckets.
        assert_eq!(&series[27..], &[1, 1, 1]);
        assert!(series[..27].iter().all(|&count| count == 0));
    }

    #[test]
    fn role_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&UserRole::Admin).expect("serialize");
        assert_eq!(json, "\"ADMIN\"");
    }
}
