pub mod breakdown;
pub mod chat;
pub mod dispatch;
pub mod extract;
pub mod intent;
pub mod normalize_time;
pub mod reconcile;
pub mod routine;
pub mod schema;
pub mod shared;
