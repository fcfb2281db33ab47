//! Users-page list state and the block/unblock/delete mutations.
//!
//! DESIGN
//! ======
//! Mutations are applied only after the backend confirms the request, so a
//! failed call leaves the list exactly as it was. `pending` holds ids with a
//! request in flight; their action buttons stay disabled until it resolves.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::collections::HashSet;

use crate::net::types::User;

/// A per-record admin action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    Block,
    Unblock,
    Delete,
}

impl UserAction {
    /// The toggle action offered for a record in its current state.
    pub fn toggle_for(user: &User) -> Self {
        if user.blocked { Self::Unblock } else { Self::Block }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Block => "Block",
            Self::Unblock => "Unblock",
            Self::Delete => "Delete",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Block => "User blocked",
            Self::Unblock => "User unblocked",
            Self::Delete => "User deleted",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Block => "Failed to block user",
            Self::Unblock => "Failed to unblock user",
            Self::Delete => "Failed to delete user",
        }
    }
}

/// Display-ready projection of one user record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub telegram_id: String,
    pub subscribed: &'static str,
    pub blocked: &'static str,
    pub toggle: UserAction,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            telegram_id: user.telegram_id.clone(),
            subscribed: yes_no(user.subscribed),
            blocked: yes_no(user.blocked),
            toggle: UserAction::toggle_for(user),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// User list for the current page view.
#[derive(Clone, Debug)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub pending: HashSet<String>,
}

impl Default for UsersState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, pending: HashSet::new() }
    }
}

impl UsersState {
    /// Replace the list with a fresh backend snapshot.
    pub fn loaded(&mut self, items: Vec<User>) {
        self.items = items;
        self.loading = false;
    }

    pub fn rows(&self) -> Vec<UserRow> {
        self.items.iter().map(UserRow::from).collect()
    }

    pub fn is_empty_after_load(&self) -> bool {
        !self.loading && self.items.is_empty()
    }

    /// Mark `id` as having a request in flight.
    ///
    /// Returns `false` if one is already pending, in which case the caller
    /// must not issue another request.
    pub fn begin(&mut self, id: &str) -> bool {
        self.pending.insert(id.to_owned())
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    /// Settle the in-flight request for `id`, applying `action` only if the
    /// backend confirmed it.
    pub fn finish(&mut self, id: &str, action: UserAction, confirmed: bool) {
        self.pending.remove(id);
        if confirmed {
            self.apply(id, action);
        }
    }

    /// Apply a confirmed action to the local list.
    pub fn apply(&mut self, id: &str, action: UserAction) {
        match action {
            UserAction::Block => self.set_blocked(id, true),
            UserAction::Unblock => self.set_blocked(id, false),
            UserAction::Delete => self.items.retain(|u| u.id != id),
        }
    }

    fn set_blocked(&mut self, id: &str, blocked: bool) {
        if let Some(user) = self.items.iter_mut().find(|u| u.id == id) {
            user.blocked = blocked;
        }
    }
}
