use crate::model::{
    Bike, BikeInstance, BikeListItem, BikeOfBrand, Brand, BrandListItem, Id, InstanceOfBike,
};
use anyhow::Result;

#[async_trait::async_trait]
pub trait BrandStore: Send + Sync {
    /// All brands, projected to the list fields and sorted by name.
    async fn list_brands(&self) -> Result<Vec<BrandListItem>>;
    async fn get_brand(&self, id: &Id) -> Result<Option<Brand>>;
    /// Persist a new brand and return the stored record.
    async fn insert_brand(&self, brand: Brand) -> Result<Brand>;
    async fn count_brands(&self) -> Result<usize>;
}

#[async_trait::async_trait]
pub trait BikeStore: Send + Sync {
    /// All bikes, projected to the list fields and sorted by model.
    async fn list_bikes(&self) -> Result<Vec<BikeListItem>>;
    async fn get_bike(&self, id: &Id) -> Result<Option<Bike>>;
    /// Bikes whose `brand` reference equals `brand_id`, projected for the
    /// brand detail join.
    async fn find_bikes_by_brand(&self, brand_id: &Id) -> Result<Vec<BikeOfBrand>>;
    /// Persist a new bike and return the stored record.
    async fn insert_bike(&self, bike: Bike) -> Result<Bike>;
    async fn count_bikes(&self) -> Result<usize>;
}

#[async_trait::async_trait]
pub trait BikeInstanceStore: Send + Sync {
    async fn list_bike_instances(&self) -> Result<Vec<BikeInstance>>;
    async fn get_bike_instance(&self, id: &Id) -> Result<Option<BikeInstance>>;
    /// Instances whose `bike` reference equals `bike_id`, projected for
    /// the bike detail join.
    async fn find_instances_by_bike(&self, bike_id: &Id) -> Result<Vec<InstanceOfBike>>;
    /// Persist a new instance and return the stored record.
    async fn insert_bike_instance(&self, instance: BikeInstance) -> Result<BikeInstance>;
    async fn count_bike_instances(&self) -> Result<usize>;
}

pub trait CatalogStore: BrandStore + BikeStore + BikeInstanceStore + Send + Sync {}
