use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::scorecard::handlers::get_scorecard,
        features::scorecard::handlers::get_summary,
        features::leaders::handlers::list_leaders,
        features::leaders::handlers::get_leader,
        features::leaders::handlers::create_leader,
        features::leaders::handlers::update_leader,
        features::leaders::handlers::delete_leader,
        features::types::handlers::list_types,
        features::types::handlers::create_type,
        features::types::handlers::update_type,
        features::types::handlers::delete_type,
        features::points::handlers::list_points,
        features::points::handlers::set_points,
        features::recruits::handlers::list_recruits,
        features::recruits::handlers::get_recruit,
        features::recruits::handlers::submit_recruit,
        features::recruits::handlers::confirm_recruit,
        features::recruits::handlers::reject_recruit,
        features::recruits::handlers::update_status,
        features::recruits::handlers::delete_recruit,
        features::settings::handlers::get_settings,
        features::settings::handlers::update_settings,
        features::admin::handlers::seed,
    ),
    components(
        schemas(
            storage::dto::scorecard::LeaderStats,
            storage::dto::scorecard::TypeBreakdown,
            storage::dto::scorecard::ScorecardSummary,
            storage::dto::leader::CreateLeaderRequest,
            storage::dto::leader::UpdateLeaderRequest,
            storage::dto::recruitment_type::CreateTypeRequest,
            storage::dto::recruitment_type::UpdateTypeRequest,
            storage::dto::recruitment_type::UpsertPointsRequest,
            storage::dto::recruit::CreateRecruitRequest,
            storage::dto::recruit::UpdateRecruitStatusRequest,
            storage::dto::recruit::RecruitWithRelations,
            storage::dto::recruit::LeaderSummary,
            storage::dto::recruit::TypeSummary,
            storage::dto::settings::CompetitionSettings,
            storage::dto::settings::UpdateSettingsRequest,
            storage::dto::common::PaginationMeta,
            storage::models::Leader,
            storage::models::RecruitmentType,
            storage::models::TypeWithPoints,
            storage::models::PointValue,
            storage::models::Recruit,
            storage::models::RecruitStatus,
            features::admin::handlers::SeedResponse,
        )
    ),
    tags(
        (name = "scorecard", description = "Leaderboard and competition summary"),
        (name = "leaders", description = "Recruitment leaders"),
        (name = "types", description = "Recruitment types"),
        (name = "points", description = "Point values per recruitment type"),
        (name = "recruits", description = "Recruit submissions and review"),
        (name = "settings", description = "Competition period"),
        (name = "admin", description = "Administrative actions"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

fn app(db: Database, api_keys: ApiKeys) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", features::api_routes(api_keys))
        .layer(cors)
        .with_state(db)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting recruitment scorecard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys, &config.admin_api_keys);
    if api_keys.is_empty() {
        tracing::warn!("No API keys configured, protected endpoints will reject every request");
    } else {
        tracing::info!("Loaded {} API keys", api_keys.len());
    }

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app(db, api_keys))
        .await
        .context("Server error")?;

    Ok(())
}
