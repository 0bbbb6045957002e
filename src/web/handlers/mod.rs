pub mod contact;
pub mod entries;
pub mod site;
pub mod translate;

use crate::web::error::{AppError, AppResult};

pub async fn method_not_allowed() -> AppResult<()> {
    Err(AppError::MethodNotAllowed)
}
