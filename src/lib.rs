pub mod auth;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod seed;
pub mod stats;
pub mod validation;


use auth::{generate_secret, Credentials, SessionService};
use catalog::CatalogStore;
use config::AppConfig;
use db::Database;
use error::AppError;
use models::{Role, User};
use tracing_subscriber::EnvFilter;

/// Constructed once at start-up and handed to whatever needs catalog or
/// session access.
pub struct App {
    pub catalog: CatalogStore<Database>,
    pub sessions: SessionService,
}

impl App {
    pub fn initialize(config: &AppConfig) -> Result<Self, AppError> {
        let db = Database::open(&config.db_path)?;
        db.initialize()?;
        let catalog = CatalogStore::with_key(db, config.storage_key.clone());

        let admin = User {
            id: "1".to_string(),
            email: config.admin_email.clone(),
            name: config.admin_name.clone(),
            role: Role::Admin,
        };
        let credentials = Credentials::new(admin, &config.admin_password)?;
        let secret = match &config.jwt_secret {
            Some(secret) => secret.clone(),
            None => {
                tracing::warn!("MONTELA_JWT_SECRET not set, sessions will not survive a restart");
                generate_secret()
            }
        };
        let sessions = SessionService::new(
            credentials,
            &secret,
            chrono::Duration::hours(config.session_hours),
        );

        Ok(App { catalog, sessions })
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn run() -> Result<(), AppError> {
    init_tracing();

    let config = AppConfig::from_env()?;
    let app = App::initialize(&config)?;

    let view = commands::reports::load_dashboard(&app.catalog);
    tracing::info!(
        products = view.stats.total_products,
        published = view.stats.published_products,
        revenue = view.stats.total_revenue,
        stock = view.stats.total_stock,
        avg_price = view.stats.avg_price,
        top_category = view.top_category.as_deref().unwrap_or("-"),
        "catalog ready"
    );
    for category in &view.categories {
        tracing::info!(
            category = %category.name,
            count = category.count,
            units = category.units,
            revenue = category.revenue,
            "category"
        );
    }

    Ok(())
}
