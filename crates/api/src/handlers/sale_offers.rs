//! Handlers for `/sale-offers/{district}`, gated by `salesm_offers_*` /
//! `salesw_offers_*`.

use aqar_core::district::District;
use aqar_core::error::CoreError;
use aqar_core::form::{DETAILS_TEXT, LONG_TEXT, NAME_TEXT, SHORT_TEXT, UNIT_TEXT};
use aqar_core::permissions::{offer_permission, Action, OfferKind};
use aqar_core::types::DbId;
use aqar_db::models::sale_offer::{CreateSaleOffer, SaleOffer, SaleOfferFields};
use aqar_db::repositories::SaleOfferRepo;
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

const KIND: OfferKind = OfferKind::Sale;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "SaleOffer",
        id,
    })
}

fn authorize(user: &AuthUser, slug: &str, action: Action) -> AppResult<District> {
    let district = District::from_slug(slug)?;
    user.require(&offer_permission(KIND, district, action))?;
    Ok(district)
}

fn fields_from_form(form: &ListingForm) -> SaleOfferFields {
    SaleOfferFields {
        unit_type: form.clipped("unit_type", UNIT_TEXT),
        floor: form.clipped("floor", UNIT_TEXT),
        front: form.clipped("front", UNIT_TEXT),
        street: form.clipped("street", UNIT_TEXT),
        area: form.decimal("area"),
        price: form.decimal("price"),
        sale_limit: form.decimal("sale_limit"),
        location: form.clipped("location", LONG_TEXT),
        details: form.clipped("details", DETAILS_TEXT),
        marketer: form.clipped("marketer", NAME_TEXT),
        owner_type: form.clipped("owner_type", SHORT_TEXT),
        status: form.clipped("status", SHORT_TEXT),
        notes: form.clipped("notes", LONG_TEXT),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/sale-offers/{district}
pub async fn list_offers(
    State(state): State<AppState>,
    user: AuthUser,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Vec<SaleOffer>>>> {
    let district = authorize(&user, &slug, Action::View)?;
    let offers = SaleOfferRepo::list_by_district(&state.pool, district).await?;
    Ok(Json(DataResponse { data: offers }))
}

/// GET /api/v1/sale-offers/{district}/{id}
pub async fn get_offer(
    State(state): State<AppState>,
    user: AuthUser,
    Path((slug, id)): Path<(String, DbId)>,
) -> AppResult<Json<DataResponse<OfferDetail<SaleOffer>>>> {
    let district = authorize(&user, &slug, Action::View)?;
    let offer = SaleOfferRepo::find_in_district(&state.pool, district, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: OfferDetail::new(offer, district),
    }))
}

/// POST /api/v1/sale-offers/{district} (multipart)
///
/// The caller's username is recorded as `created_by`.
pub async fn create_offer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(slug): Path<String>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<SaleOffer>>)> {
    let district = authorize(&user, &slug, Action::Add)?;
    let mut form = ListingForm::from_multipart(multipart).await?;

    let images = store_uploads(state.images.as_ref(), form.take_uploads()).await;
    let input = CreateSaleOffer {
        district,
        fields: fields_from_form(&form),
        images,
        created_by: user.username.clone(),
    };
    let offer = match SaleOfferRepo::create(&state.pool, &input).await {
        Ok(offer) => offer,
        Err(e) => {
            state.images.remove(&input.images).await;
            return Err(e.into());
        }
    };

    tracing::info!(offer_id = offer.id, district = district.slug(), "Sale offer created");
    audit::record(
        &state,
        &user.username,
        &audit::offer_added(KIND, district, &offer.unit_type),
    )
    .await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: offer })))
}

/// PUT /api/v1/sale-offers/{district}/{id} (multipart)
pub async fn update_offer(
    State(state): State<AppState>,
    user: AuthUser,
    Path((slug, id)): Path<(String, DbId)>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<SaleOffer>>> {
    let district = authorize(&user, &slug, Action::Edit)?;
    let existing = SaleOfferRepo::find_in_district(&state.pool, district, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let mut form = ListingForm::from_multipart(multipart).await?;
    let fields = fields_from_form(&form);
    let new_images = store_uploads(state.images.as_ref(), form.take_uploads()).await;
    let replacement = (!new_images.is_empty()).then_some(new_images.as_slice());

    let offer = match SaleOfferRepo::update(&state.pool, district, id, &fields, replacement).await
    {
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

/// DELETE /api/v1/sale-offers/{district}/{id}
pub async fn delete_offer(
    State(state): State<AppState>,
    user: AuthUser,
    Path((slug, id)): Path<(String, DbId)>,
) -> AppResult<StatusCode> {
    let district = authorize(&user, &slug, Action::Delete)?;
    let offer = SaleOfferRepo::delete(&state.pool, district, id)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_front_and_street_take_unit_length() {
        let long = "ط".repeat(UNIT_TEXT + 5);
        let form = ListingForm::from_parts(
            [
                ("floor", long.as_str()),
                ("front", long.as_str()),
                ("street", long.as_str()),
                ("owner_type", long.as_str()),
            ],
            vec![],
        );
        let fields = fields_from_form(&form);
        assert_eq!(fields.floor.chars().count(), UNIT_TEXT);
        assert_eq!(fields.front.chars().count(), UNIT_TEXT);
        assert_eq!(fields.street.chars().count(), UNIT_TEXT);
        assert_eq!(fields.owner_type.chars().count(), SHORT_TEXT);
    }

    #[test]
    fn details_are_clipped_shorter_than_notes() {
        let long = "ت".repeat(LONG_TEXT + 5);
        let form =
            ListingForm::from_parts([("details", long.as_str()), ("notes", long.as_str())], vec![]);
        let fields = fields_from_form(&form);
        assert_eq!(fields.details.chars().count(), DETAILS_TEXT);
        assert_eq!(fields.notes.chars().count(), LONG_TEXT);
    }
}
