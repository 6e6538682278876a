use crate::domain::model::{BreedDetail, Species};
use crate::domain::ports::BreedApi;
use crate::utils::error::{PetMatchError, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// 記憶體內的假 API，記錄每次查詢
#[derive(Default)]
pub struct FakeApi {
    pub cats: Option<Vec<String>>,
    pub dogs: Option<Vec<String>>,
    records: HashMap<(Species, String), Map<String, Value>>,
    delays: HashMap<String, Duration>,
    pub list_calls: Mutex<Vec<Species>>,
    lookups: AtomicUsize,
}

impl FakeApi {
    pub fn new(cats: &[&str], dogs: &[&str]) -> Self {
        Self {
            cats: Some(cats.iter().map(|s| s.to_string()).collect()),
            dogs: Some(dogs.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    pub fn with_record(mut self, species: Species, name: &str, record: Value) -> Self {
        let record = record.as_object().cloned().unwrap_or_default();
        self.records.insert((species, name.to_string()), record);
        self
    }

    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BreedApi for FakeApi {
    async fn list_breeds(&self, species: Species) -> Result<Vec<String>> {
        self.list_calls.lock().unwrap().push(species);
        let breeds = match species {
            Species::Cat => &self.cats,
            Species::Dog => &self.dogs,
        };
        breeds.clone().ok_or(PetMatchError::StatusError {
            status: 500,
            url: format!("fake://{}", species.directory_key()),
            body: String::new(),
        })
    }

    async fn lookup_breed(&self, species: Species, name: &str) -> Result<BreedDetail> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(name) {
            tokio::time::sleep(*delay).await;
        }

        self.records
            .get(&(species, name.to_string()))
            .map(|record| BreedDetail::from_record(species, name, record))
            .ok_or_else(|| PetMatchError::NotFoundError {
                name: name.to_string(),
            })
    }
}

pub fn cat_record(shedding: i64, friendly: i64, playful: i64, grooming: i64, health: i64) -> Value {
    serde_json::json!({
        "image_link": "https://example.com/cat.jpg",
        "length": "12 to 14 inches",
        "origin": "Thailand",
        "min_weight": 8.0,
        "max_weight": 15.0,
        "min_life_expectancy": 15,
        "max_life_expectancy": 20,
        "shedding": shedding,
        "family_friendly": friendly,
        "playfulness": playful,
        "grooming": grooming,
        "other_pets_friendly": 4,
        "children_friendly": 4,
        "intelligence": 5,
        "general_health": health
    })
}

pub fn dog_record(barking: i64, energy: i64, trainability: i64) -> Value {
    serde_json::json!({
        "image_link": "https://example.com/dog.jpg",
        "min_height_male": 14.0,
        "max_height_male": 16.0,
        "min_weight_male": 20.0,
        "max_weight_male": 30.0,
        "min_height_female": 13.0,
        "max_height_female": 15.0,
        "min_weight_female": 20.0,
        "max_weight_female": 30.0,
        "min_life_expectancy": 10,
        "max_life_expectancy": 15,
        "shedding": 3,
        "barking": barking,
        "energy": energy,
        "protectiveness": 2,
        "trainability": trainability,
        "good_with_children": 5,
        "good_with_other_dogs": 5,
        "good_with_strangers": 3,
        "grooming": 1,
        "drooling": 1,
        "coat_length": 1,
        "playfulness": 4
    })
}
