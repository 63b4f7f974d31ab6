//! Application builder — wires repositories, services, the worker, and
//! the Axum router into a running server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::sync::watch;

use stayhub_auth::jwt::{JwtDecoder, JwtEncoder};
use stayhub_auth::password::PasswordHasher;
use stayhub_auth::session::SessionManager;
use stayhub_core::config::AppConfig;
use stayhub_core::error::AppError;
use stayhub_database::repositories::{
    BookingRepository, EngagementRepository, HotelRepository, JobRepository,
    OwnerRequestRepository, ReviewRepository, RoomRepository, SessionRepository, UserRepository,
};
use stayhub_service::account::{AccountService, OwnerRequestAdminService};
use stayhub_service::booking::BookingService;
use stayhub_service::engagement::EngagementService;
use stayhub_service::hotel::HotelService;
use stayhub_service::review::ReviewService;
use stayhub_service::room::RoomService;
use stayhub_worker::executor::JobExecutor;
use stayhub_worker::jobs::email::{
    ActivationEmailJob, BookingConfirmationJob, OwnerDecisionEmailJob, PasswordResetEmailJob,
};
use stayhub_worker::mailer::Mailer;
use stayhub_worker::queue::JobQueue;
use stayhub_worker::runner::WorkerRunner;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs the full application state from a configuration and pool.
///
/// Split out of [`run_server`] so integration tests can build the same
/// app against a test database without binding a listener.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let session_repo = SessionRepository::new(db_pool.clone());
    let hotel_repo = Arc::new(HotelRepository::new(db_pool.clone()));
    let room_repo = Arc::new(RoomRepository::new(db_pool.clone()));
    let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));
    let engagement_repo = Arc::new(EngagementRepository::new(db_pool.clone()));
    let review_repo = Arc::new(ReviewRepository::new(db_pool.clone()));
    let owner_request_repo = Arc::new(OwnerRequestRepository::new(db_pool.clone()));
    let job_repo = Arc::new(JobRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let session_manager = Arc::new(SessionManager::new(session_repo, &config.auth));

    let job_max_attempts = config.worker.max_attempts;

    let account_service = Arc::new(AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&owner_request_repo),
        Arc::clone(&job_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        Arc::clone(&session_manager),
        job_max_attempts,
    ));
    let owner_request_admin = Arc::new(OwnerRequestAdminService::new(
        Arc::clone(&owner_request_repo),
        Arc::clone(&user_repo),
        Arc::clone(&job_repo),
        job_max_attempts,
    ));
    let hotel_service = Arc::new(HotelService::new(Arc::clone(&hotel_repo)));
    let room_service = Arc::new(RoomService::new(
        Arc::clone(&room_repo),
        Arc::clone(&hotel_repo),
    ));
    let booking_service = Arc::new(BookingService::new(
        db_pool.clone(),
        Arc::clone(&room_repo),
        Arc::clone(&booking_repo),
        Arc::clone(&hotel_repo),
        Arc::clone(&job_repo),
        job_max_attempts,
    ));
    let engagement_service = Arc::new(EngagementService::new(
        Arc::clone(&engagement_repo),
        Arc::clone(&hotel_repo),
    ));
    let review_service = Arc::new(ReviewService::new(
        Arc::clone(&review_repo),
        Arc::clone(&hotel_repo),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        jwt_decoder,
        session_manager,
        account_service,
        owner_request_admin,
        hotel_service,
        room_service,
        booking_service,
        engagement_service,
        review_service,
    })
}

/// Runs the StayHub server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting StayHub server...");

    let state = build_state(config, db_pool.clone())?;
    let config = Arc::clone(&state.config);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let _worker_handle = if config.worker.enabled {
        let mailer = Arc::new(Mailer::new(&config.mail)?);

        let job_repo = Arc::new(JobRepository::new(db_pool.clone()));
        let job_queue = Arc::new(JobQueue::new(job_repo));

        let mut job_executor = JobExecutor::new();
        job_executor.register(Arc::new(BookingConfirmationJob::new(Arc::clone(&mailer))));
        job_executor.register(Arc::new(ActivationEmailJob::new(Arc::clone(&mailer))));
        job_executor.register(Arc::new(PasswordResetEmailJob::new(Arc::clone(&mailer))));
        job_executor.register(Arc::new(OwnerDecisionEmailJob::new(Arc::clone(&mailer))));
        let job_executor = Arc::new(job_executor);

        let worker_runner = WorkerRunner::new(job_queue, job_executor, config.worker.clone());

        let worker_cancel = shutdown_rx.clone();
        Some(tokio::spawn(async move {
            worker_runner.run(worker_cancel).await;
        }))
    } else {
        None
    };

    let app = build_app(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("StayHub server listening on {addr}");

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
}
