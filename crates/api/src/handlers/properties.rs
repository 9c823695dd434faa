//! Handlers for the `/properties` resource.

use aqar_core::error::CoreError;
use aqar_core::form::{NAME_TEXT, SHORT_TEXT};
use aqar_core::types::DbId;
use aqar_db::models::property::{Property, PropertyFields};
use aqar_db::repositories::PropertyRepo;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::forms::{store_uploads, ListingForm};
use crate::middleware::permission::{
    PropertiesAdd, PropertiesDelete, PropertiesEdit, PropertiesView, RequirePermission,
};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Property",
        id,
    })
}

fn fields_from_form(form: &ListingForm) -> AppResult<PropertyFields> {
    let name = form.clipped("name", NAME_TEXT);
    if name.is_empty() {
        return Err(AppError::Core(CoreError::required("name")));
    }
    Ok(PropertyFields {
        name,
        property_type: form.clipped("property_type", SHORT_TEXT),
        district: form.clipped("district", SHORT_TEXT),
        area: form.decimal("area"),
        front: form.clipped("front", SHORT_TEXT),
        street: form.clipped("street", NAME_TEXT),
        owner_status: form.clipped("owner_status", SHORT_TEXT),
    })
}

/// GET /api/v1/properties
pub async fn list_properties(
    State(state): State<AppState>,
    _gate: RequirePermission<PropertiesView>,
) -> AppResult<Json<DataResponse<Vec<Property>>>> {
    let properties = PropertyRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: properties }))
}

/// GET /api/v1/properties/{id}
pub async fn get_property(
    State(state): State<AppState>,
    _gate: RequirePermission<PropertiesView>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Property>>> {
    let property = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: property }))
}

/// POST /api/v1/properties (multipart)
pub async fn create_property(
    State(state): State<AppState>,
    RequirePermission(user, _): RequirePermission<PropertiesAdd>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Property>>)> {
    let mut form = ListingForm::from_multipart(multipart).await?;
    let fields = fields_from_form(&form)?;

    let images = store_uploads(state.images.as_ref(), form.take_uploads()).await;
    let property = match PropertyRepo::create(&state.pool, &fields, &images).await {
        Ok(property) => property,
        Err(e) => {
            state.images.remove(&images).await;
            return Err(e.into());
        }
    };

    tracing::info!(property_id = property.id, by = %user.username, "Property created");
    audit::record(&state, &user.username, &audit::property_added(&property.name)).await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: property })))
}

/// PUT /api/v1/properties/{id} (multipart)
///
/// Same image rule as offers: new uploads replace the whole list.
pub async fn update_property(
    State(state): State<AppState>,
    RequirePermission(user, _): RequirePermission<PropertiesEdit>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<Property>>> {
    let existing = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let mut form = ListingForm::from_multipart(multipart).await?;
    let fields = fields_from_form(&form)?;
    let new_images = store_uploads(state.images.as_ref(), form.take_uploads()).await;
    let replacement = (!new_images.is_empty()).then_some(new_images.as_slice());

    let property = match PropertyRepo::update(&state.pool, id, &fields, replacement).await {
        Ok(Some(property)) => property,
        Ok(None) => {
            state.images.remove(&new_images).await;
            return Err(not_found(id));
        }
        Err(e) => {
            state.images.remove(&new_images).await;
            return Err(e.into());
        }
    };

    if replacement.is_some() {
        state.images.remove(&existing.images).await;
    }

    audit::record(&state, &user.username, &audit::property_edited(&property.name)).await;

    Ok(Json(DataResponse { data: property }))
}

/// DELETE /api/v1/properties/{id}
pub async fn delete_property(
    State(state): State<AppState>,
    RequirePermission(user, _): RequirePermission<PropertiesDelete>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let property = PropertyRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    state.images.remove(&property.images).await;
    audit::record(&state, &user.username, &audit::property_deleted(&property.name)).await;

    Ok(StatusCode::NO_CONTENT)
}
