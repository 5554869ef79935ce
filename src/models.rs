use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::attendance::AttendanceRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeQueryReq {
    #[schema(example = "Who was late?")]
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeQueryResponse {
    pub response: Vec<AttendanceRecord>,
}
