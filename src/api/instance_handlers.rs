use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use serde_json::json;

use crate::api::error::{CatalogError, CatalogResult};
use crate::api::handlers::{render_view, AppState};
use crate::logic::validate::{FieldError, FieldRules, FormValidator};
use crate::model::{BikeInstance, Id, InstanceStatus, Size};
use crate::store::traits::CatalogStore;

fn instance_validator() -> FormValidator {
    FormValidator::new()
        .field(
            FieldRules::new("bike")
                .trim()
                .non_empty("Bike must be specified."),
        )
        .field(
            FieldRules::new("size")
                .trim()
                .non_empty("Size must be specified."),
        )
        .field(FieldRules::new("status").trim())
}

fn size_options() -> Vec<&'static str> {
    Size::ALL.iter().map(Size::as_str).collect()
}

fn status_options() -> Vec<&'static str> {
    InstanceStatus::ALL.iter().map(InstanceStatus::as_str).collect()
}

/// Display list of all bike instances.
pub async fn bike_instance_list<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> CatalogResult<Html<String>> {
    let instances = state.store.list_bike_instances().await?;
    render_view(
        &state,
        "bikeinstance_list",
        json!({ "title": "Bike Instance List", "bikeinstance_list": instances }),
    )
}

/// Display detail page for a specific bike instance. The parent bike is
/// fetched second since its identifier comes from the instance record;
/// a dangling reference surfaces as not-found.
pub async fn bike_instance_detail<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Id>,
) -> CatalogResult<Html<String>> {
    let instance = state
        .store
        .get_bike_instance(&id)
        .await?
        .ok_or(CatalogError::NotFound {
            entity: "Bike instance",
        })?;

    let bike = state
        .store
        .get_bike(&instance.bike)
        .await?
        .ok_or(CatalogError::NotFound { entity: "Bike" })?;

    render_view(
        &state,
        "bikeinstance_detail",
        json!({
            "title": "Bike Instance Detail",
            "bike_instance": instance,
            "bike": bike,
        }),
    )
}

/// Display bike instance create form on GET. The form needs the bike
/// list plus the closed size and status sets for its selects.
pub async fn bike_instance_create_get<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> CatalogResult<Html<String>> {
    let bike_list = state.store.list_bikes().await?;
    render_view(
        &state,
        "bikeinstance_form",
        json!({
            "title": "Create Bike Instance",
            "bike_list": bike_list,
            "size_list": size_options(),
            "status_list": status_options(),
        }),
    )
}

#[derive(Debug, Deserialize)]
pub struct BikeInstanceForm {
    #[serde(default)]
    pub bike: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub status: String,
}

/// Handle bike instance create on POST.
pub async fn bike_instance_create_post<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Form(form): Form<BikeInstanceForm>,
) -> CatalogResult<Response> {
    // Validate and sanitize fields.
    let outcome = instance_validator().run(&[
        ("bike", &form.bike),
        ("size", &form.size),
        ("status", &form.status),
    ]);
    let mut errors = outcome.errors.clone();

    // The store does not enforce references; resolve the bike here.
    let bike_id = outcome.value("bike").to_string();
    if !bike_id.is_empty() && state.store.get_bike(&bike_id).await?.is_none() {
        errors.push(FieldError::new("bike", "Unknown bike."));
    }

    // Enum fields parse against their closed sets. The empty size case
    // is already covered by the pipeline; an omitted status falls back
    // to the default.
    let raw_size = outcome.value("size");
    let size = if raw_size.is_empty() {
        None
    } else {
        let parsed = Size::parse(raw_size);
        if parsed.is_none() {
            errors.push(FieldError::new("size", "Size must be one of the listed options."));
        }
        parsed
    };

    let raw_status = outcome.value("status");
    let status = if raw_status.is_empty() {
        Some(InstanceStatus::default())
    } else {
        let parsed = InstanceStatus::parse(raw_status);
        if parsed.is_none() {
            errors.push(FieldError::new(
                "status",
                "Status must be one of the listed options.",
            ));
        }
        parsed
    };

    match (size, status) {
        (Some(size), Some(status)) if errors.is_empty() => {
            // Data from form is valid. Save and redirect to the new record.
            let instance = state
                .store
                .insert_bike_instance(BikeInstance::new(bike_id, size, status))
                .await?;
            Ok(Redirect::to(&instance.url()).into_response())
        }
        _ => {
            // Render form again with the attempted values and error messages.
            let bike_list = state.store.list_bikes().await?;
            let page = render_view(
                &state,
                "bikeinstance_form",
                json!({
                    "title": "Create Bike Instance",
                    "bike_instance": {
                        "bike": bike_id,
                        "size": raw_size,
                        "status": raw_status,
                    },
                    "bike_list": bike_list,
                    "size_list": size_options(),
                    "status_list": status_options(),
                    "errors": errors,
                }),
            )?;
            Ok(page.into_response())
        }
    }
}

// TODO: implement delete (plain removal; nothing references an instance).
pub async fn bike_instance_delete_get() -> &'static str {
    "NOT IMPLEMENTED: bikeinstance delete GET"
}

pub async fn bike_instance_delete_post() -> &'static str {
    "NOT IMPLEMENTED: bikeinstance delete POST"
}

// TODO: implement update (create form and validation chain, pre-populated).
pub async fn bike_instance_update_get() -> &'static str {
    "NOT IMPLEMENTED: bikeinstance update GET"
}

pub async fn bike_instance_update_post() -> &'static str {
    "NOT IMPLEMENTED: bikeinstance update POST"
}
