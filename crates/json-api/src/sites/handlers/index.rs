//! Site Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use linkflow_app::{
    domain::sites::{filters::visible_sites, records::CATEGORY_SUGGESTIONS},
    views::ListState,
};

use crate::{
    extensions::*,
    sites::models::{SiteResponse, SitesQuery},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SitesResponse {
    /// `loading`, `error`, `empty` or `content`
    pub state: String,
    /// Catalog size before filtering
    pub total: usize,
    /// Sites matching the filters, in display order
    pub sites: Vec<SiteResponse>,
    /// Suggested categories for the filter panel
    pub categories: Vec<String>,
}

/// Site Index Handler
///
/// Browse the catalog. Query parameters: `da_max`, `dr_max`, `traffic_min`,
/// `spam_max`, `price_max` (cents), `categories` and `site_types` (comma
/// separated), `link_type`, `sort` and `all`.
#[endpoint(
    tags("sites"),
    summary = "List Sites",
    responses(
        (status_code = StatusCode::OK, description = "Matching sites"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SitesResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let (filters, sort) = req
        .parse_queries::<SitesQuery>()
        .or_400("invalid query")?
        .into_filters()?;

    let catalog = app
        .sites
        .list_sites()
        .await
        .or_500("failed to fetch sites")?;

    let visible = ListState::resolve(false, None, visible_sites(&catalog, &filters, sort));

    Ok(Json(SitesResponse {
        state: visible.as_str().to_string(),
        total: catalog.len(),
        sites: visible.items().iter().cloned().map(Into::into).collect(),
        categories: CATEGORY_SUGGESTIONS.iter().map(ToString::to_string).collect(),
    }))
}
