use crate::core::fetcher::BreedRepository;
use crate::domain::model::BreedDetail;
use crate::domain::ports::BreedApi;
use crate::domain::preferences::PreferenceSet;

/// 所有條件都通過才算符合；缺值以 0 比較
pub fn matches(detail: &BreedDetail, preferences: &PreferenceSet) -> bool {
    detail.species == preferences.species()
        && preferences
            .iter()
            .all(|(criterion, answer)| criterion.accepts(detail.score(criterion.field), answer))
}

/// 逐一查詢候選品種（每次一筆），回傳符合條件的名稱，保留原順序
pub async fn find_matches<A: BreedApi>(
    repository: &mut BreedRepository<A>,
    candidates: &[String],
    preferences: &PreferenceSet,
) -> Vec<String> {
    let species = preferences.species();
    let mut matched = Vec::new();

    for name in candidates {
        let detail = repository.detail(species, name).await;
        if matches(&detail, preferences) {
            matched.push(name.clone());
        }
    }

    tracing::info!(
        "{} of {} {} breeds match the preferences",
        matched.len(),
        candidates.len(),
        species
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{cat_record, dog_record, FakeApi};
    use crate::domain::model::Species;

    fn cat(name: &str, record: serde_json::Value) -> BreedDetail {
        BreedDetail::from_record(Species::Cat, name, record.as_object().unwrap())
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_permissive_preferences_keep_every_known_breed() {
        let api = FakeApi::new(&["Siamese", "Persian", "Bengal"], &[])
            .with_record(Species::Cat, "Siamese", cat_record(2, 5, 5, 1, 3))
            .with_record(Species::Cat, "Persian", cat_record(5, 1, 1, 5, 1))
            .with_record(Species::Cat, "Bengal", cat_record(1, 3, 4, 2, 5));
        let mut repo = BreedRepository::new(api, true);

        let prefs = PreferenceSet::permissive(Species::Cat);
        let candidates = names(&["Siamese", "Persian", "Bengal"]);

        assert_eq!(find_matches(&mut repo, &candidates, &prefs).await, candidates);
    }

    #[test]
    fn test_missing_value_fails_at_least() {
        let mut record = cat_record(2, 5, 5, 1, 3);
        record.as_object_mut().unwrap().remove("general_health");
        let detail = cat("Siamese", record);

        let prefs = PreferenceSet::permissive(Species::Cat);
        assert!(!matches(&detail, &prefs));
    }

    #[test]
    fn test_missing_value_passes_at_most() {
        let mut record = cat_record(2, 5, 5, 1, 3);
        record.as_object_mut().unwrap().remove("shedding");
        let detail = cat("Siamese", record);

        // shedding ≤ 1 still passes because missing compares as 0
        let prefs = PreferenceSet::new(Species::Cat, vec![1, 1, 1, 5, 1]).unwrap();
        assert!(matches(&detail, &prefs));
    }

    #[test]
    fn test_sentinel_record_never_matches() {
        let detail = BreedDetail::sentinel(Species::Dog, "Beagle");
        assert!(!matches(&detail, &PreferenceSet::permissive(Species::Dog)));
    }

    #[tokio::test]
    async fn test_thresholds() {
        let api = FakeApi::new(&[], &[])
            .with_record(Species::Cat, "Quiet", cat_record(1, 4, 4, 1, 4))
            .with_record(Species::Cat, "Shedder", cat_record(5, 5, 5, 1, 5))
            .with_record(Species::Cat, "Aloof", cat_record(1, 2, 4, 1, 4));
        let mut repo = BreedRepository::new(api, true);

        // friendly ≥ 3, playful ≥ 3, shedding ≤ 3, grooming ≤ 3, health ≥ 3
        let prefs = PreferenceSet::new(Species::Cat, vec![3, 3, 3, 3, 3]).unwrap();
        let matched = find_matches(&mut repo, &names(&["Quiet", "Shedder", "Aloof"]), &prefs).await;

        assert_eq!(matched, vec!["Quiet".to_string()]);
    }

    #[test]
    fn test_other_species_never_matches() {
        let detail = cat("Siamese", cat_record(2, 5, 5, 1, 3));
        assert!(!matches(&detail, &PreferenceSet::permissive(Species::Dog)));
    }

    #[tokio::test]
    async fn test_find_matches_fetches_each_candidate() {
        let api = FakeApi::new(&[], &["Beagle", "Husky", "Ghost"])
            .with_record(Species::Dog, "Beagle", dog_record(5, 4, 3))
            .with_record(Species::Dog, "Husky", dog_record(2, 3, 3));
        let mut repo = BreedRepository::new(api, true);

        // energy ≤ 4, barking ≤ 3, shedding ≤ 5, grooming ≤ 5, trainability ≥ 2, strangers ≥ 1, protect ≥ 1
        let prefs = PreferenceSet::new(Species::Dog, vec![4, 3, 5, 5, 2, 1, 1]).unwrap();
        let candidates = names(&["Beagle", "Husky", "Ghost"]);

        let matched = find_matches(&mut repo, &candidates, &prefs).await;

        assert_eq!(matched, vec!["Husky".to_string()]);
        assert_eq!(repo.api().lookup_count(), 3);
    }
}
