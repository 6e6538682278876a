use crate::domain::model::{Directory, Species};
use crate::domain::ports::BreedApi;
use crate::utils::error::{PetMatchError, Result};

pub fn found_message(cats: usize, dogs: usize) -> String {
    format!("Found {} cats and {} dogs", cats, dogs)
}

/// 依序取得貓、狗的品種清單；任一方失敗或為空都視為整體失敗
pub async fn fetch_directory<A: BreedApi + ?Sized>(api: &A) -> Result<Directory> {
    let cats = api.list_breeds(Species::Cat).await?;
    let dogs = api.list_breeds(Species::Dog).await?;

    tracing::info!("{}", found_message(cats.len(), dogs.len()));

    for (species, breeds) in [(Species::Cat, &cats), (Species::Dog, &dogs)] {
        if breeds.is_empty() {
            tracing::warn!("Empty {} directory, check the request parameters", species);
            return Err(PetMatchError::EmptyDirectoryError {
                species: species.to_string(),
                cats: cats.len(),
                dogs: dogs.len(),
            });
        }
    }

    Ok(Directory { cats, dogs })
}
