use utoipa::OpenApi;

use crate::controllers::sizing_controller;
use crate::models::sizing;

#[derive(OpenApi)]
#[openapi(
    paths(
        sizing_controller::service_info,
        sizing_controller::calculate_system
    ),
    components(
        schemas(
            sizing::SizingRequest,
            sizing::SizingResponse,
            sizing::ApiInfo,
            sizing::ErrorBody
        )
    ),
    tags(
        (name = "solar-sizing-api", description = "Solar System Sizing API")
    )
)]
pub struct ApiDoc;
