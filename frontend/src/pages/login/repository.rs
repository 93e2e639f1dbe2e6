use std::rc::Rc;

use crate::api::{ApiClient, ApiError, Credentials};

/// Data-access seam for the login page; tests swap in a client bound to a
/// mock server.
#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: Credentials) -> Result<(), ApiError> {
        self.client.login(credentials).await
    }
}
