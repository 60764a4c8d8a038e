//! REST handlers for phone models.
//!
//! Id-shaped parameters are validated here, before the service sees the
//! request, so malformed input never reaches the repository.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use handyhub_app::ports::HandyModelRepository;
use handyhub_domain::error::ValidationError;
use handyhub_domain::handy_model::{HandyModel, HandyModelChanges};
use handyhub_domain::id::{BrandId, HandyModelId, ParseIdError};

use crate::error::ApiError;
use crate::extract::Access;
use crate::state::AppState;

/// Query parameters for the list endpoint.
///
/// `sort` is lenient: only a case-insensitive `true` enables sorting, any
/// other value (or none) leaves the store order.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub sort: Option<String>,
}

impl ListQuery {
    fn sorted(&self) -> bool {
        self.sort
            .as_deref()
            .is_some_and(|sort| sort.eq_ignore_ascii_case("true"))
    }
}

/// Query parameters addressing a single model.
#[derive(Debug, Default, Deserialize)]
pub struct UuidQuery {
    #[serde(default)]
    pub uuid: String,
}

/// Form body for create and update.
///
/// `id` is ignored on create; the brand travels next to the model fields as
/// `handymarkeUUID`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandyModelForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub battery_life: u32,
    #[serde(default)]
    pub serial_number: String,
    #[serde(rename = "handymarkeUUID", default)]
    pub handymarke_uuid: String,
}

impl HandyModelForm {
    fn changes(&self) -> HandyModelChanges {
        HandyModelChanges {
            name: self.name.clone(),
            battery_life: self.battery_life,
            serial_number: self.serial_number.clone(),
        }
    }
}

/// Parse a required id parameter named `field`.
fn parse_id<T>(field: &'static str, value: &str) -> Result<T, ValidationError>
where
    T: FromStr<Err = ParseIdError>,
{
    if value.is_empty() {
        return Err(ValidationError::MissingId { field });
    }
    value
        .parse()
        .map_err(|source| ValidationError::MalformedId { field, source })
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<HandyModel>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the read endpoint.
pub enum ReadResponse {
    Ok(Json<HandyModel>),
}

impl IntoResponse for ReadResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create, update and delete endpoints.
pub enum MutationResponse {
    Ok,
}

impl IntoResponse for MutationResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// `GET /handymodell/list?sort=`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Access(tier): Access,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    R: HandyModelRepository + Send + Sync + 'static,
{
    let models = state.handy_model_service.list(tier, query.sorted()).await?;
    Ok(ListResponse::Ok(Json(models)))
}

/// `GET /handymodell/read?uuid=`
pub async fn read<R>(
    State(state): State<AppState<R>>,
    Access(tier): Access,
    Query(query): Query<UuidQuery>,
) -> Result<ReadResponse, ApiError>
where
    R: HandyModelRepository + Send + Sync + 'static,
{
    let id: HandyModelId = parse_id("uuid", &query.uuid)?;
    let model = state.handy_model_service.get(tier, id).await?;
    Ok(ReadResponse::Ok(Json(model)))
}

/// `POST /handymodell/create`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Access(tier): Access,
    Form(form): Form<HandyModelForm>,
) -> Result<MutationResponse, ApiError>
where
    R: HandyModelRepository + Send + Sync + 'static,
{
    let brand_id: BrandId = parse_id("handymarkeUUID", &form.handymarke_uuid)?;
    state
        .handy_model_service
        .create(tier, form.changes(), brand_id)
        .await?;
    Ok(MutationResponse::Ok)
}

/// `PUT /handymodell/update`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Access(tier): Access,
    Form(form): Form<HandyModelForm>,
) -> Result<MutationResponse, ApiError>
where
    R: HandyModelRepository + Send + Sync + 'static,
{
    let id: HandyModelId = parse_id("id", &form.id)?;
    let brand_id: BrandId = parse_id("handymarkeUUID", &form.handymarke_uuid)?;
    state
        .handy_model_service
        .update(tier, id, form.changes(), brand_id)
        .await?;
    Ok(MutationResponse::Ok)
}

/// `DELETE /handymodell/delete?uuid=`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Access(tier): Access,
    Query(query): Query<UuidQuery>,
) -> Result<MutationResponse, ApiError>
where
    R: HandyModelRepository + Send + Sync + 'static,
{
    let id: HandyModelId = parse_id("uuid", &query.uuid)?;
    state.handy_model_service.delete(tier, id).await?;
    Ok(MutationResponse::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_query(sort: Option<&str>) -> ListQuery {
        ListQuery {
            sort: sort.map(ToString::to_string),
        }
    }

    #[test]
    fn should_sort_only_when_flag_is_true_ignoring_case() {
        assert!(list_query(Some("true")).sorted());
        assert!(list_query(Some("TRUE")).sorted());
        assert!(list_query(Some("True")).sorted());
        assert!(!list_query(Some("false")).sorted());
        assert!(!list_query(Some("1")).sorted());
        assert!(!list_query(Some("yes")).sorted());
        assert!(!list_query(Some("")).sorted());
        assert!(!list_query(None).sorted());
    }

    #[test]
    fn should_report_missing_id_when_empty() {
        let result: Result<HandyModelId, _> = parse_id("uuid", "");
        assert_eq!(result, Err(ValidationError::MissingId { field: "uuid" }));
    }

    #[test]
    fn should_report_malformed_id_with_field_name() {
        let result: Result<BrandId, _> = parse_id("handymarkeUUID", "1234");
        assert!(matches!(
            result,
            Err(ValidationError::MalformedId {
                field: "handymarkeUUID",
                ..
            })
        ));
    }

    #[test]
    fn should_parse_canonical_id() {
        let result: Result<HandyModelId, _> =
            parse_id("uuid", "11111111-1111-1111-1111-111111111111");
        assert!(result.is_ok());
    }
}
