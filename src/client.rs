//! Typed client for the REST API. Each action maps to exactly one request;
//! there is no retry, batching, or debouncing, and upstream failures are
//! surfaced verbatim with the server's error message.

use crate::errors::ErrorBody;
use crate::models::{
    DashboardSummary, EntriesResponse, FoodEntry, FoodResponse, GoalUpdate, HydrationEntry,
    HydrationEntryResponse, HydrationLog, NewFood, NewHydration, NewSupplement, NutritionGoals,
    Profile, ProfileUpdate, Session, SigninRequest, SignupRequest, SignupResponse,
    SuccessResponse, Supplement, SupplementResponse, SupplementUpdate, SupplementsResponse,
};
use chrono::NaiveDate;
use reqwest::RequestBuilder;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("{message} (status {status})")]
    Api { status: u16, message: String },
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url)
    }

    async fn finish<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let builder = match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("request failed: {status}"));
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.finish(self.http.get(self.url(path))).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.finish(self.http.post(self.url(path)).json(body)).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.finish(self.http.put(self.url(path)).json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.finish(self.http.delete(self.url(path))).await
    }

    // --- auth ---

    pub async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ClientError> {
        self.post("/signup", request).await
    }

    /// Signs in and remembers the session token for subsequent requests.
    pub async fn signin(&mut self, email: &str, password: &str) -> Result<Session, ClientError> {
        let session: Session = self
            .post(
                "/signin",
                &SigninRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        self.token = Some(session.token.clone());
        Ok(session)
    }

    // --- nutrition ---

    pub async fn get_nutrition(&self, user_id: &str) -> Result<Vec<FoodEntry>, ClientError> {
        let response: EntriesResponse = self.get(&format!("/nutrition/{user_id}")).await?;
        Ok(response.entries)
    }

    pub async fn add_food(&self, user_id: &str, entry: &NewFood) -> Result<FoodEntry, ClientError> {
        let response: FoodResponse = self.post(&format!("/nutrition/{user_id}"), entry).await?;
        Ok(response.entry)
    }

    pub async fn remove_food(&self, user_id: &str, entry_id: &str) -> Result<bool, ClientError> {
        let response: SuccessResponse = self
            .delete(&format!("/nutrition/{user_id}/{entry_id}"))
            .await?;
        Ok(response.success)
    }

    // --- supplements ---

    pub async fn get_supplements(&self, user_id: &str) -> Result<Vec<Supplement>, ClientError> {
        let response: SupplementsResponse = self.get(&format!("/supplements/{user_id}")).await?;
        Ok(response.supplements)
    }

    pub async fn add_supplement(
        &self,
        user_id: &str,
        supplement: &NewSupplement,
    ) -> Result<Supplement, ClientError> {
        let response: SupplementResponse = self
            .post(&format!("/supplements/{user_id}"), supplement)
            .await?;
        Ok(response.supplement)
    }

    pub async fn update_supplement(
        &self,
        user_id: &str,
        supplement_id: &str,
        update: &SupplementUpdate,
    ) -> Result<bool, ClientError> {
        let response: SuccessResponse = self
            .put(&format!("/supplements/{user_id}/{supplement_id}"), update)
            .await?;
        Ok(response.success)
    }

    pub async fn remove_supplement(
        &self,
        user_id: &str,
        supplement_id: &str,
    ) -> Result<bool, ClientError> {
        let response: SuccessResponse = self
            .delete(&format!("/supplements/{user_id}/{supplement_id}"))
            .await?;
        Ok(response.success)
    }

    // --- hydration ---

    pub async fn get_hydration(&self, user_id: &str) -> Result<HydrationLog, ClientError> {
        self.get(&format!("/hydration/{user_id}")).await
    }

    pub async fn add_hydration(
        &self,
        user_id: &str,
        entry: &NewHydration,
    ) -> Result<HydrationEntry, ClientError> {
        let response: HydrationEntryResponse =
            self.post(&format!("/hydration/{user_id}"), entry).await?;
        Ok(response.entry)
    }

    pub async fn set_hydration_goal(&self, user_id: &str, goal: f64) -> Result<bool, ClientError> {
        let response: SuccessResponse = self
            .put(&format!("/hydration/{user_id}/goal"), &GoalUpdate { goal })
            .await?;
        Ok(response.success)
    }

    pub async fn remove_hydration(
        &self,
        user_id: &str,
        entry_id: &str,
    ) -> Result<bool, ClientError> {
        let response: SuccessResponse = self
            .delete(&format!("/hydration/{user_id}/{entry_id}"))
            .await?;
        Ok(response.success)
    }

    // --- profile ---

    pub async fn get_profile(&self, user_id: &str) -> Result<Profile, ClientError> {
        self.get(&format!("/profile/{user_id}")).await
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        goals: NutritionGoals,
    ) -> Result<bool, ClientError> {
        let response: SuccessResponse = self
            .put(
                &format!("/profile/{user_id}"),
                &ProfileUpdate {
                    nutrition_goals: goals,
                },
            )
            .await?;
        Ok(response.success)
    }

    // --- dashboard ---

    pub async fn summary(
        &self,
        user_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<DashboardSummary, ClientError> {
        let path = match date {
            Some(date) => format!("/summary/{user_id}?date={date}"),
            None => format!("/summary/{user_id}"),
        };
        self.get(&path).await
    }
}
