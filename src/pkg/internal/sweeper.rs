use sqlx::PgPool;

/// Startup cleanup of rows past their expiry. Each sweep is independent and
/// idempotent; a failing sweep only costs a log line, never the boot.
pub async fn run(pool: &PgPool) {
    report(sweep(pool, "DELETE FROM jobs WHERE end_date < CURRENT_DATE", "jobs").await);
    report(
        sweep(
            pool,
            "DELETE FROM password_resets WHERE expires_at < now()",
            "password reset tokens",
        )
        .await,
    );
    report(
        sweep(
            pool,
            "DELETE FROM memberships WHERE expiration_date < CURRENT_DATE",
            "memberships",
        )
        .await,
    );
}

async fn sweep(pool: &PgPool, query: &str, what: &str) -> Result<String, String> {
    match sqlx::query(query).execute(pool).await {
        Ok(done) => Ok(format!("removed {} expired {}", done.rows_affected(), what)),
        Err(e) => Err(format!("error removing expired {}: {}", what, e)),
    }
}

fn report(status: Result<String, String>) {
    match status {
        Ok(status) => tracing::info!("{}", status),
        Err(status) => tracing::error!("{}", status),
    }
}
