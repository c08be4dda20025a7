pub mod category;
mod command;
mod error;
mod favorite;
mod filter;
mod query;
mod slug;
mod tag;
mod types;

pub use command::*;
pub use error::*;
pub use filter::*;
pub use query::Query;
pub use slug::*;
pub use types::*;

pub(crate) fn now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
