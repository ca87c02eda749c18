use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use serde_json::json;

use crate::api::error::{CatalogError, CatalogResult};
use crate::api::handlers::{opt, render_view, AppState};
use crate::logic::validate::{FieldError, FieldRules, FormValidator};
use crate::model::{Bike, Id};
use crate::store::traits::CatalogStore;

fn bike_validator() -> FormValidator {
    FormValidator::new()
        .field(
            FieldRules::new("brand")
                .trim()
                .non_empty("Brand must be specified."),
        )
        .field(
            FieldRules::new("model")
                .trim()
                .non_empty("Model must be specified.")
                .escape(),
        )
        .field(FieldRules::new("summary").trim().escape())
}

/// Display list of all bikes.
pub async fn bike_list<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> CatalogResult<Html<String>> {
    let bikes = state.store.list_bikes().await?;
    render_view(
        &state,
        "bike_list",
        json!({ "title": "Bike List", "bike_list": bikes }),
    )
}

/// Display detail page for a specific bike.
pub async fn bike_detail<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Id>,
) -> CatalogResult<Html<String>> {
    // Fetch the bike and all its stocked instances in parallel.
    let (bike, bike_instances) = tokio::try_join!(
        state.store.get_bike(&id),
        state.store.find_instances_by_bike(&id),
    )?;

    let bike = bike.ok_or(CatalogError::NotFound { entity: "Bike" })?;

    render_view(
        &state,
        "bike_detail",
        json!({
            "title": "Bike Detail",
            "bike": bike,
            "bike_instances": bike_instances,
        }),
    )
}

/// Display bike create form on GET. The form needs the brand list for
/// its selection control.
pub async fn bike_create_get<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> CatalogResult<Html<String>> {
    let brand_list = state.store.list_brands().await?;
    render_view(
        &state,
        "bike_form",
        json!({ "title": "Create Bike", "brand_list": brand_list }),
    )
}

#[derive(Debug, Deserialize)]
pub struct BikeForm {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub summary: String,
}

/// Handle bike create on POST.
pub async fn bike_create_post<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Form(form): Form<BikeForm>,
) -> CatalogResult<Response> {
    // Validate and sanitize fields.
    let outcome = bike_validator().run(&[
        ("brand", &form.brand),
        ("model", &form.model),
        ("summary", &form.summary),
    ]);
    let mut errors = outcome.errors.clone();

    // The store does not enforce references; resolve the brand here.
    let brand_id = outcome.value("brand").to_string();
    if !brand_id.is_empty() && state.store.get_brand(&brand_id).await?.is_none() {
        errors.push(FieldError::new("brand", "Unknown brand."));
    }

    let bike = Bike::new(
        brand_id,
        outcome.value("model").to_string(),
        opt(outcome.value("summary")),
    );

    if !errors.is_empty() {
        // Render form again with sanitized values and error messages.
        let brand_list = state.store.list_brands().await?;
        let page = render_view(
            &state,
            "bike_form",
            json!({
                "title": "Create Bike",
                "bike": bike,
                "brand_list": brand_list,
                "errors": errors,
            }),
        )?;
        return Ok(page.into_response());
    }

    // Data from form is valid. Save and redirect to the new record.
    let bike = state.store.insert_bike(bike).await?;
    Ok(Redirect::to(&bike.url()).into_response())
}

// TODO: implement delete (must refuse while instances still reference the bike).
pub async fn bike_delete_get() -> &'static str {
    "NOT IMPLEMENTED: bike delete GET"
}

pub async fn bike_delete_post() -> &'static str {
    "NOT IMPLEMENTED: bike delete POST"
}

// TODO: implement update (create form and validation chain, pre-populated).
pub async fn bike_update_get() -> &'static str {
    "NOT IMPLEMENTED: bike update GET"
}

pub async fn bike_update_post() -> &'static str {
    "NOT IMPLEMENTED: bike update POST"
}
