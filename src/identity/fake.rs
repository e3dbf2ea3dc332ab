use std::{collections::HashMap, sync::Mutex};

use super::*;

/// In-memory identity service.
///
/// Answers in request order unless `reversed` is set,
/// and records every batch it was asked for.
#[derive(Default)]
pub struct FakeIdentityClient {
    users: HashMap<UserId, IdentityProfile>,
    reversed: bool,
    next_fail: Mutex<Option<String>>,
    requests: Mutex<Vec<Vec<UserId>>>,
}

impl FakeIdentityClient {
    pub fn new(users: impl IntoIterator<Item = IdentityProfile>) -> Self {
        Self {
            users: users.into_iter().map(|user| (user.id, user)).collect(),
            ..Default::default()
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    /// Makes the next call fail with `message`.
    pub fn fail_next(&self, message: &str) {
        *self.next_fail.lock().unwrap() = Some(message.to_owned());
    }

    pub fn requests(&self) -> Vec<Vec<UserId>> {
        self.requests.lock().unwrap().clone()
    }
}

#[rocket::async_trait]
impl IdentityClient for FakeIdentityClient {
    async fn users_by_ids(&self, ids: &[UserId]) -> IdentityResult<Vec<IdentityProfile>> {
        self.requests.lock().unwrap().push(ids.to_vec());

        if let Some(message) = self.next_fail.lock().unwrap().take() {
            return Err(IdentityError::Service(message));
        }

        let mut users: Vec<IdentityProfile> = ids
            .iter()
            .filter_map(|id| self.users.get(id).cloned())
            .collect();
        if self.reversed {
            users.reverse();
        }
        Ok(users)
    }
}
