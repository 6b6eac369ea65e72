mod repositories;
mod schema;
mod sqlite_pool;

pub use repositories::InMemoryMessageRepository;
pub use repositories::SqliteMessageRepository;

pub use schema::ensure_schema;
pub use sqlite_pool::create_pool;
