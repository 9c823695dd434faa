//! Handlers for `/rental-offers/{district}`.
//!
//! Every handler resolves the district from the path first, then checks the
//! district-scoped permission (`rentalm_offers_*` / `rentalw_offers_*`).

use aqar_core::district::District;
use aqar_core::error::CoreError;
use aqar_core::form::{LONG_TEXT, NAME_TEXT, SHORT_TEXT, UNIT_TEXT};
use aqar_core::permissions::{offer_permission, Action, OfferKind};
use aqar_core::types::DbId;
use aqar_db::models::rental_offer::{CreateRentalOffer, RentalOffer, RentalOfferFields};
use aqar_db::repositories::{PropertyRepo, RentalOfferRepo};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::OfferDetail;
use crate::audit;
use crate::error::{AppError, AppResult};
use crate::forms::{store_uploads, ListingForm};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const KIND: OfferKind = OfferKind::Rental;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "RentalOffer",
        id,
    })
}

/// Resolve the district and check the caller may perform `action` in it.
fn authorize(user: &AuthUser, slug: &str, action: Action) -> AppResult<District> {
    let district = District::from_slug(slug)?;
    user.require(&offer_permission(KIND, district, action))?;
    Ok(district)
}

fn fields_from_form(form: &ListingForm) -> AppResult<RentalOfferFields> {
    Ok(RentalOfferFields {
        property_id: form.id("property_id")?,
        unit_type: form.clipped("unit_type", UNIT_TEXT),
        floor: form.clipped("floor", NAME_TEXT),
        area: form.decimal("area"),
        price: form.decimal("price"),
        details: form.clipped("details", LONG_TEXT),
        owner_type: form.clipped("owner_type", SHORT_TEXT),
        location: form.clipped("location", LONG_TEXT),
        marketer: form.clipped("marketer", NAME_TEXT),
        notes: form.clipped("notes", LONG_TEXT),
        status: form.clipped("status", SHORT_TEXT),
    })
}

async fn ensure_property(state: &AppState, property_id: Option<DbId>) -> AppResult<()> {
    if let Some(id) = property_id {
        PropertyRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Property",
                id,
            }))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/rental-offers/{district}
pub async fn list_offers(
    State(state): State<AppState>,
    user: AuthUser,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Vec<RentalOffer>>>> {
    let district = authorize(&user, &slug, Action::View)?;
    let offers = RentalOfferRepo::list_by_district(&state.pool, district).await?;
    Ok(Json(DataResponse { data: offers }))
}

/// GET /api/v1/rental-offers/{district}/{id}
pub async fn get_offer(
    State(state): State<AppState>,
    user: AuthUser,
    Path((slug, id)): Path<(String, DbId)>,
) -> AppResult<Json<DataResponse<OfferDetail<RentalOffer>>>> {
    let district = authorize(&user, &slug, Action::View)?;
    let offer = RentalOfferRepo::find_in_district(&state.pool, district, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: OfferDetail::new(offer, district),
    }))
}

/// POST /api/v1/rental-offers/{district} (multipart)
pub async fn create_offer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(slug): Path<String>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<RentalOffer>>)> {
    let district = authorize(&user, &slug, Action::Add)?;
    let mut form = ListingForm::from_multipart(multipart).await?;
    let fields = fields_from_form(&form)?;
    ensure_property(&state, fields.property_id).await?;

    let images = store_uploads(state.images.as_ref(), form.take_uploads()).await;
    let input = CreateRentalOffer {
        district,
        fields,
        images,
    };
    let offer = match RentalOfferRepo::create(&state.pool, &input).await {
        Ok(offer) => offer,
        Err(e) => {
            state.images.remove(&input.images).await;
            return Err(e.into());
        }
    };

    tracing::info!(offer_id = offer.id, district = district.slug(), "Rental offer created");
    audit::record(
        &state,
        &user.username,
        &audit::offer_added(KIND, district, &offer.unit_type),
    )
    .await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: offer })))
}

/// PUT /api/v1/rental-offers/{district}/{id} (multipart)
///
/// All text fields are overwritten. Images are replaced only when the form
/// carries new ones; the previous files are then removed.
pub async fn update_offer(
    State(state): State<AppState>,
    user: AuthUser,
    Path((slug, id)): Path<(String, DbId)>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<RentalOffer>>> {
    let district = authorize(&user, &slug, Action::Edit)?;
    let existing = RentalOfferRepo::find_in_district(&state.pool, district, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let mut form = ListingForm::from_multipart(multipart).await?;
    let fields = fields_from_form(&form)?;
    ensure_property(&state, fields.property_id).await?;

    let new_images = store_uploads(state.images.as_ref(), form.take_uploads()).await;
    let replacement = (!new_images.is_empty()).then_some(new_images.as_slice());

    let offer =
        match RentalOfferRepo::update(&state.pool, district, id, &fields, replacement).await {
            Ok(Some(offer)) => offer,
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

    audit::record(
        &state,
        &user.username,
        &audit::offer_edited(KIND, district, &offer.unit_type),
    )
    .await;

    Ok(Json(DataResponse { data: offer }))
}

/// DELETE /api/v1/rental-offers/{district}/{id}
pub async fn delete_offer(
    State(state): State<AppState>,
    user: AuthUser,
    Path((slug, id)): Path<(String, DbId)>,
) -> AppResult<StatusCode> {
    let district = authorize(&user, &slug, Action::Delete)?;
    let offer = RentalOfferRepo::delete(&state.pool, district, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    state.images.remove(&offer.images).await;
    audit::record(
        &state,
        &user.username,
        &audit::offer_deleted(KIND, district, &offer.unit_type),
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
