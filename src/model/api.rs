use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every failed request.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Machine readable error class (1100 invalid request, 1200 unauthorized,
    /// 3300 business rule, 4400 database, 9900 unexpected)
    pub code: u16,
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
