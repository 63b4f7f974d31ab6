//! Staff administration of owner upgrade requests.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_auth::policy::{self, Capability};
use stayhub_core::result::AppResult;
use stayhub_database::repositories::{JobRepository, OwnerRequestRepository, UserRepository};
use stayhub_entity::job::{JOB_OWNER_DECISION_EMAIL, NewJob, OwnerDecisionPayload};
use stayhub_entity::owner_request::{OwnerRequest, OwnerRequestStatus};

use crate::context::RequestContext;

/// Staff-only bulk decisions over owner upgrade requests.
#[derive(Debug, Clone)]
pub struct OwnerRequestAdminService {
    owner_requests: Arc<OwnerRequestRepository>,
    users: Arc<UserRepository>,
    jobs: Arc<JobRepository>,
    job_max_attempts: i32,
}

impl OwnerRequestAdminService {
    /// Creates a new owner request admin service.
    pub fn new(
        owner_requests: Arc<OwnerRequestRepository>,
        users: Arc<UserRepository>,
        jobs: Arc<JobRepository>,
        job_max_attempts: i32,
    ) -> Self {
        Self {
            owner_requests,
            users,
            jobs,
            job_max_attempts,
        }
    }

    /// List pending requests, oldest first.
    pub async fn list_pending(&self, ctx: &RequestContext) -> AppResult<Vec<OwnerRequest>> {
        policy::authorize(ctx.actor(), Capability::AdministerOwnerRequests, false)?;
        self.owner_requests
            .find_by_status(OwnerRequestStatus::Pending)
            .await
    }

    /// Approve a batch of pending requests. Each approved user is
    /// promoted to owner and notified. Already-decided requests in the
    /// batch are skipped, not errors.
    pub async fn approve(&self, ctx: &RequestContext, ids: &[Uuid]) -> AppResult<Vec<OwnerRequest>> {
        policy::authorize(ctx.actor(), Capability::AdministerOwnerRequests, false)?;

        let decided = self
            .owner_requests
            .decide(ids, OwnerRequestStatus::Approved)
            .await?;

        for request in &decided {
            let user = self.users.set_owner(request.user_id, true).await?;
            self.notify_decision(request.user_id, &user.email, true)
                .await?;
        }

        info!(
            staff_id = %ctx.user_id,
            approved = decided.len(),
            "Owner requests approved"
        );
        Ok(decided)
    }

    /// Reject a batch of pending requests and notify the applicants.
    pub async fn reject(&self, ctx: &RequestContext, ids: &[Uuid]) -> AppResult<Vec<OwnerRequest>> {
        policy::authorize(ctx.actor(), Capability::AdministerOwnerRequests, false)?;

        let decided = self
            .owner_requests
            .decide(ids, OwnerRequestStatus::Rejected)
            .await?;

        for request in &decided {
            if let Some(user) = self.users.find_by_id(request.user_id).await? {
                self.notify_decision(request.user_id, &user.email, false)
                    .await?;
            }
        }

        info!(
            staff_id = %ctx.user_id,
            rejected = decided.len(),
            "Owner requests rejected"
        );
        Ok(decided)
    }

    async fn notify_decision(&self, user_id: Uuid, email: &str, approved: bool) -> AppResult<()> {
        let payload = OwnerDecisionPayload {
            user_id,
            recipient: email.to_string(),
            approved,
        };
        self.jobs
            .enqueue(&NewJob {
                job_type: JOB_OWNER_DECISION_EMAIL.to_string(),
                payload: serde_json::to_value(&payload)?,
                max_attempts: self.job_max_attempts,
            })
            .await?;
        Ok(())
    }
}
