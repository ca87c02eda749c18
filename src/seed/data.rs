use anyhow::Result;

use crate::model::{Bike, BikeInstance, Brand, InstanceStatus, Size};
use crate::store::traits::CatalogStore;

/// Load a small demonstration catalog: two brands, three bikes, four
/// stocked instances.
pub async fn load_seed_data<S: CatalogStore>(store: &S) -> Result<()> {
    let trek = store
        .insert_brand(Brand::new("Trek".to_string(), Some("USA".to_string())))
        .await?;
    let bianchi = store
        .insert_brand(Brand::new("Bianchi".to_string(), Some("Italy".to_string())))
        .await?;

    let marlin = store
        .insert_bike(Bike::new(
            trek.id.clone(),
            "Marlin 5".to_string(),
            Some("Entry trail hardtail".to_string()),
        ))
        .await?;
    let domane = store
        .insert_bike(Bike::new(
            trek.id.clone(),
            "Domane AL 2".to_string(),
            Some("Endurance road bike".to_string()),
        ))
        .await?;
    let sprint = store
        .insert_bike(Bike::new(
            bianchi.id.clone(),
            "Sprint".to_string(),
            Some("Aluminium race frame".to_string()),
        ))
        .await?;

    store
        .insert_bike_instance(BikeInstance::new(
            marlin.id.clone(),
            Size::M,
            InstanceStatus::Available,
        ))
        .await?;
    store
        .insert_bike_instance(BikeInstance::new(
            marlin.id.clone(),
            Size::L,
            InstanceStatus::Unavailable,
        ))
        .await?;
    store
        .insert_bike_instance(BikeInstance::new(
            domane.id.clone(),
            Size::SM,
            InstanceStatus::AskForAvailability,
        ))
        .await?;
    store
        .insert_bike_instance(BikeInstance::new(
            sprint.id.clone(),
            Size::Xl,
            InstanceStatus::Available,
        ))
        .await?;

    log::info!("seed data loaded: 2 brands, 3 bikes, 4 instances");
    Ok(())
}
