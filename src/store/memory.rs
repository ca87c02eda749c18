use std::collections::HashMap;

use anyhow::Result;
use itertools::Itertools;
use parking_lot::RwLock;

use crate::model::{
    Bike, BikeInstance, BikeListItem, BikeOfBrand, Brand, BrandListItem, Id, InstanceOfBike,
};
use crate::store::traits::{BikeInstanceStore, BikeStore, BrandStore, CatalogStore};

/// In-memory catalog store. Stands in for the external document-store
/// driver; each collection is a map guarded by its own lock, and locks
/// are never held across an await point.
#[derive(Default)]
pub struct MemoryStore {
    brands: RwLock<HashMap<Id, Brand>>,
    bikes: RwLock<HashMap<Id, Bike>>,
    instances: RwLock<HashMap<Id, BikeInstance>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl BrandStore for MemoryStore {
    async fn list_brands(&self) -> Result<Vec<BrandListItem>> {
        let brands = self.brands.read();
        Ok(brands
            .values()
            .map(BrandListItem::from)
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect())
    }

    async fn get_brand(&self, id: &Id) -> Result<Option<Brand>> {
        Ok(self.brands.read().get(id).cloned())
    }

    async fn insert_brand(&self, brand: Brand) -> Result<Brand> {
        self.brands.write().insert(brand.id.clone(), brand.clone());
        Ok(brand)
    }

    async fn count_brands(&self) -> Result<usize> {
        Ok(self.brands.read().len())
    }
}

#[async_trait::async_trait]
impl BikeStore for MemoryStore {
    async fn list_bikes(&self) -> Result<Vec<BikeListItem>> {
        let bikes = self.bikes.read();
        Ok(bikes
            .values()
            .map(BikeListItem::from)
            .sorted_by(|a, b| a.model.cmp(&b.model))
            .collect())
    }

    async fn get_bike(&self, id: &Id) -> Result<Option<Bike>> {
        Ok(self.bikes.read().get(id).cloned())
    }

    async fn find_bikes_by_brand(&self, brand_id: &Id) -> Result<Vec<BikeOfBrand>> {
        let bikes = self.bikes.read();
        Ok(bikes
            .values()
            .filter(|bike| &bike.brand == brand_id)
            .map(BikeOfBrand::from)
            .sorted_by(|a, b| a.model.cmp(&b.model))
            .collect())
    }

    async fn insert_bike(&self, bike: Bike) -> Result<Bike> {
        self.bikes.write().insert(bike.id.clone(), bike.clone());
        Ok(bike)
    }

    async fn count_bikes(&self) -> Result<usize> {
        Ok(self.bikes.read().len())
    }
}

#[async_trait::async_trait]
impl BikeInstanceStore for MemoryStore {
    async fn list_bike_instances(&self) -> Result<Vec<BikeInstance>> {
        let instances = self.instances.read();
        Ok(instances
            .values()
            .cloned()
            .sorted_by(|a, b| a.id.cmp(&b.id))
            .collect())
    }

    async fn get_bike_instance(&self, id: &Id) -> Result<Option<BikeInstance>> {
        Ok(self.instances.read().get(id).cloned())
    }

    async fn find_instances_by_bike(&self, bike_id: &Id) -> Result<Vec<InstanceOfBike>> {
        let instances = self.instances.read();
        Ok(instances
            .values()
            .filter(|instance| &instance.bike == bike_id)
            .map(InstanceOfBike::from)
            .sorted_by(|a, b| a.id.cmp(&b.id))
            .collect())
    }

    async fn insert_bike_instance(&self, instance: BikeInstance) -> Result<BikeInstance> {
        self.instances
            .write()
            .insert(instance.id.clone(), instance.clone());
        Ok(instance)
    }

    async fn count_bike_instances(&self) -> Result<usize> {
        Ok(self.instances.read().len())
    }
}

impl CatalogStore for MemoryStore {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InstanceStatus, Size};

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = MemoryStore::new();
        let brand = store
            .insert_brand(Brand::new("Trek".to_string(), Some("USA".to_string())))
            .await
            .unwrap();
        let found = store.get_brand(&brand.id).await.unwrap();
        assert_eq!(found, Some(brand));
    }

    #[tokio::test]
    async fn brand_list_is_sorted_by_name_and_projected() {
        let store = MemoryStore::new();
        store
            .insert_brand(Brand::new("Trek".to_string(), None))
            .await
            .unwrap();
        store
            .insert_brand(Brand::new("Bianchi".to_string(), Some("Italy".to_string())))
            .await
            .unwrap();

        let list = store.list_brands().await.unwrap();
        let names: Vec<&str> = list.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Bianchi", "Trek"]);
    }

    #[tokio::test]
    async fn bikes_join_on_the_brand_reference() {
        let store = MemoryStore::new();
        let trek = store
            .insert_brand(Brand::new("Trek".to_string(), None))
            .await
            .unwrap();
        let bianchi = store
            .insert_brand(Brand::new("Bianchi".to_string(), None))
            .await
            .unwrap();
        store
            .insert_bike(Bike::new(trek.id.clone(), "Marlin 5".to_string(), None))
            .await
            .unwrap();
        store
            .insert_bike(Bike::new(trek.id.clone(), "Domane AL 2".to_string(), None))
            .await
            .unwrap();
        store
            .insert_bike(Bike::new(bianchi.id.clone(), "Sprint".to_string(), None))
            .await
            .unwrap();

        let trek_bikes = store.find_bikes_by_brand(&trek.id).await.unwrap();
        let models: Vec<&str> = trek_bikes.iter().map(|b| b.model.as_str()).collect();
        assert_eq!(models, vec!["Domane AL 2", "Marlin 5"]);

        let none = store
            .find_bikes_by_brand(&"no-such-brand".to_string())
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn instances_join_on_the_bike_reference() {
        let store = MemoryStore::new();
        let bike = store
            .insert_bike(Bike::new("brand-1".to_string(), "Sprint".to_string(), None))
            .await
            .unwrap();
        store
            .insert_bike_instance(BikeInstance::new(
                bike.id.clone(),
                Size::M,
                InstanceStatus::Available,
            ))
            .await
            .unwrap();
        store
            .insert_bike_instance(BikeInstance::new(
                "other-bike".to_string(),
                Size::L,
                InstanceStatus::Unavailable,
            ))
            .await
            .unwrap();

        let of_bike = store.find_instances_by_bike(&bike.id).await.unwrap();
        assert_eq!(of_bike.len(), 1);
        assert_eq!(of_bike[0].size, Size::M);
    }

    #[tokio::test]
    async fn counts_track_inserts() {
        let store = MemoryStore::new();
        assert_eq!(store.count_brands().await.unwrap(), 0);
        store
            .insert_brand(Brand::new("Trek".to_string(), None))
            .await
            .unwrap();
        assert_eq!(store.count_brands().await.unwrap(), 1);
        assert_eq!(store.count_bikes().await.unwrap(), 0);
    }
}
