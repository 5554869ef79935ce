use crate::model::attendance::AttendanceRecord;
use crate::models::{AnalyzeQueryReq, AnalyzeQueryResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Assistant API",
        version = "0.1.0",
        description = r#"
## Attendance Assistant

Ask attendance questions in plain language. The question is sent to a hosted
key phrase extraction service and the extracted phrases pick a filter over the
attendance records:

1. a phrase containing **Absent** returns absent records
2. otherwise **Late** returns late records
3. otherwise **John** returns John Doe's records
4. otherwise **Present** returns present records
5. otherwise every record is returned

Matching is case-sensitive and the first rule wins.
"#,
    ),
    paths(
        crate::api::analyze_query::analyze_query,
    ),
    components(
        schemas(
            AnalyzeQueryReq,
            AnalyzeQueryResponse,
            AttendanceRecord
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance question answering"),
    )
)]
pub struct ApiDoc;
