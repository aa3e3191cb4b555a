//! Create Site Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use linkflow_app::domain::admin::SiteForm;

use crate::{
    extensions::*,
    sites::{
        errors::admin_status_error,
        models::{SiteFormRequest, SiteResponse},
    },
};

/// Create Site Handler
///
/// Every field is validated; a rejected form answers 422 with a field to
/// message map in the error detail.
#[endpoint(
    tags("sites"),
    summary = "Create Site",
    responses(
        (status_code = StatusCode::CREATED, description = "Site created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid site"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SiteFormRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SiteResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let form = SiteForm::from(json.into_inner());

    let site = app
        .admin
        .create_site(&form)
        .await
        .map_err(admin_status_error)?;

    res.add_header(LOCATION, format!("/sites/{}", site.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(site.into()))
}
