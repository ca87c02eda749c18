use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use serde_json::json;

use crate::api::error::{CatalogError, CatalogResult};
use crate::api::handlers::{opt, render_view, AppState};
use crate::logic::validate::{FieldRules, FormValidator};
use crate::model::{Brand, Id};
use crate::store::traits::CatalogStore;

fn brand_validator() -> FormValidator {
    FormValidator::new()
        .field(
            FieldRules::new("name")
                .trim()
                .non_empty("Name must be specified.")
                .escape()
                .alphanumeric("Name has non-alphanumeric characters."),
        )
        .field(FieldRules::new("origin").trim().escape())
}

/// Display list of all brands.
pub async fn brand_list<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> CatalogResult<Html<String>> {
    let brands = state.store.list_brands().await?;
    render_view(
        &state,
        "brand_list",
        json!({ "title": "Brand List", "brand_list": brands }),
    )
}

/// Display detail page for a specific brand.
pub async fn brand_detail<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Id>,
) -> CatalogResult<Html<String>> {
    // Fetch the brand and all its bikes in parallel; first fault wins.
    let (brand, brand_bikes) = tokio::try_join!(
        state.store.get_brand(&id),
        state.store.find_bikes_by_brand(&id),
    )?;

    let brand = brand.ok_or(CatalogError::NotFound { entity: "Brand" })?;

    render_view(
        &state,
        "brand_detail",
        json!({
            "title": "Brand Detail",
            "brand": brand,
            "brand_bikes": brand_bikes,
        }),
    )
}

/// Display brand create form on GET.
pub async fn brand_create_get<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> CatalogResult<Html<String>> {
    render_view(&state, "brand_form", json!({ "title": "Create Brand" }))
}

#[derive(Debug, Deserialize)]
pub struct BrandForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub origin: String,
}

/// Handle brand create on POST.
pub async fn brand_create_post<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Form(form): Form<BrandForm>,
) -> CatalogResult<Response> {
    // Validate and sanitize fields.
    let outcome = brand_validator().run(&[("name", &form.name), ("origin", &form.origin)]);

    // Build the brand from the sanitized values either way; an invalid
    // submission is redisplayed with the attempted values.
    let brand = Brand::new(
        outcome.value("name").to_string(),
        opt(outcome.value("origin")),
    );

    if !outcome.is_valid() {
        let page = render_view(
            &state,
            "brand_form",
            json!({
                "title": "Create Brand",
                "brand": brand,
                "errors": outcome.errors,
            }),
        )?;
        return Ok(page.into_response());
    }

    // Data from form is valid. Save and redirect to the new record.
    let brand = state.store.insert_brand(brand).await?;
    Ok(Redirect::to(&brand.url()).into_response())
}

// TODO: implement delete (must refuse while bikes still reference the brand).
pub async fn brand_delete_get() -> &'static str {
    "NOT IMPLEMENTED: brand delete GET"
}

pub async fn brand_delete_post() -> &'static str {
    "NOT IMPLEMENTED: brand delete POST"
}

// TODO: implement update (create form and validation chain, pre-populated).
pub async fn brand_update_get() -> &'static str {
    "NOT IMPLEMENTED: brand update GET"
}

pub async fn brand_update_post() -> &'static str {
    "NOT IMPLEMENTED: brand update POST"
}
