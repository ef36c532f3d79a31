//! MySQL repository implementations.

use pl_core::errors::DomainError;

mod post_repository_impl;
mod session_repository_impl;
mod user_repository_impl;

pub use post_repository_impl::MySqlPostRepository;
pub use session_repository_impl::MySqlSessionRepository;
pub use user_repository_impl::MySqlUserRepository;

/// MySQL error number for a unique key violation
const ER_DUP_ENTRY: u16 = 1062;

/// Map a SQLx error to a domain error
///
/// Unique key violations become `Conflict` so a lost check/insert race
/// surfaces the same way as a detected duplicate. Everything else is
/// internal; the raw driver message stays out of client responses.
fn map_db_err(context: &str, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(ref db) = e {
        if let Some(mysql) = db.try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>() {
            if mysql.number() == ER_DUP_ENTRY {
                return DomainError::Conflict {
                    message: "Resource already exists".to_string(),
                };
            }
        }
    }
    tracing::error!("{}: {}", context, e);
    DomainError::internal(format!("{}: {}", context, e))
}
