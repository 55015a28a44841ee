/**
 * Server Configuration
 *
 * Loading and validation of server configuration from environment
 * variables, focusing on the optional PostgreSQL connection.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * When the database fails to initialize the server continues with the
 * in-memory store only.
 */
use sqlx::PgPool;

/// Database configuration result
///
/// `Some(pool)` when PostgreSQL is configured and reachable, `None`
/// otherwise (the server then runs memory-only).
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize the database connection pool
///
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs embedded migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Messages will not survive restarts.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Continuing with in-memory message store only.");
            return None;
        }
    };

    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Migrations might have already been applied out of band
            tracing::warn!("Continuing - database schema might not be up to date");
        }
    }

    Some(pool)
}

/// Server port, from `SERVER_PORT` (default 5000, the original
/// deployment's port)
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000)
}
