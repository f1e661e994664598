pub mod dispatch;
pub mod error;
pub mod ops;
pub mod paths;
pub mod posts;
pub mod routes;
pub mod state;
pub mod tags;
pub mod users;
pub mod views;

pub use error::{AppError, AppResult};
pub use routes::router;
pub use state::{AppState, AppStateInner};
