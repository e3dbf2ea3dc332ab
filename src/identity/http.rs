use rocket::serde::{Deserialize, Serialize};

use super::*;

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
struct UsersByIdsRequest<'a> {
    ids: &'a [UserId],
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
struct UsersByIdsResponse {
    users: Vec<IdentityProfile>,
}

/// Talks to the identity service over its JSON batch endpoint.
pub struct HttpIdentityClient {
    client: reqwest::Client,
    batch_url: String,
}

impl HttpIdentityClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            batch_url: format!("{}/v1/users/batch", base_url.trim_end_matches('/')),
        }
    }
}

#[rocket::async_trait]
impl IdentityClient for HttpIdentityClient {
    async fn users_by_ids(&self, ids: &[UserId]) -> IdentityResult<Vec<IdentityProfile>> {
        let response = self
            .client
            .post(&self.batch_url)
            .json(&UsersByIdsRequest { ids })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityError::Service(format!(
                "{} responded with {}",
                self.batch_url, status
            )));
        }

        let body = response.json::<UsersByIdsResponse>().await?;
        Ok(body.users)
    }
}
