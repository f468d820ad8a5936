//! Request extractors that reject with [`AppError`](crate::errors::AppError).

mod path_id;
mod validated_json;

pub use path_id::PathId;
pub use validated_json::ValidatedJson;
