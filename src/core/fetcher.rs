use crate::domain::model::{BreedDetail, Species};
use crate::domain::ports::BreedApi;
use futures::future::join_all;
use std::collections::HashMap;

/// 查詢單一品種；任何失敗都退化為全缺值記錄，不往上拋。
/// 失敗只記在 debug，畫面上只會看到 N/A。
pub async fn fetch_detail<A: BreedApi + ?Sized>(api: &A, species: Species, name: &str) -> BreedDetail {
    match api.lookup_breed(species, name).await {
        Ok(detail) => detail,
        Err(e) => {
            tracing::debug!("Request for {} '{}' failed: {}", species, name, e);
            BreedDetail::sentinel(species, name)
        }
    }
}

/// 同時發出所有查詢並等待全部完成，輸出順序與輸入相同
pub async fn fetch_details<A: BreedApi + ?Sized>(
    api: &A,
    species: Species,
    names: &[String],
) -> Vec<BreedDetail> {
    tracing::debug!("Fetching {} {} details", names.len(), species);
    join_all(names.iter().map(|name| fetch_detail(api, species, name))).await
}

/// 一個 session 內的品種資料來源，依 (物種, 名稱) 快取查詢結果
pub struct BreedRepository<A: BreedApi> {
    api: A,
    cache: HashMap<(Species, String), BreedDetail>,
    cache_enabled: bool,
}

impl<A: BreedApi> BreedRepository<A> {
    pub fn new(api: A, cache_enabled: bool) -> Self {
        Self {
            api,
            cache: HashMap::new(),
            cache_enabled,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub(crate) fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub async fn detail(&mut self, species: Species, name: &str) -> BreedDetail {
        let names = [name.to_string()];
        self.details(species, &names)
            .await
            .pop()
            .unwrap_or_else(|| BreedDetail::sentinel(species, name))
    }

    /// 未快取的名稱合併成一批並行查詢；缺值記錄不快取，下次會重新查
    pub async fn details(&mut self, species: Species, names: &[String]) -> Vec<BreedDetail> {
        if !self.cache_enabled {
            return fetch_details(&self.api, species, names).await;
        }

        let missing: Vec<String> = names
            .iter()
            .filter(|name| !self.cache.contains_key(&(species, (*name).clone())))
            .cloned()
            .collect();

        let mut fresh = HashMap::new();
        if !missing.is_empty() {
            for detail in fetch_details(&self.api, species, &missing).await {
                if !detail.is_sentinel() {
                    self.cache
                        .insert((species, detail.name.clone()), detail.clone());
                }
                fresh.insert(detail.name.clone(), detail);
            }
        }

        names
            .iter()
            .map(|name| {
                self.cache
                    .get(&(species, name.clone()))
                    .or_else(|| fresh.get(name))
                    .cloned()
                    .unwrap_or_else(|| BreedDetail::sentinel(species, name))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{cat_record, FakeApi};
    use crate::domain::model::SENTINEL;
    use crate::utils::logger::cli_directives;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    async fn lookup_with_filter(directives: &str) -> (BreedDetail, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(move || writer.clone())
                    .with_ansi(false),
            );
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut repo = BreedRepository::new(FakeApi::new(&["Ghost"], &[]), true);
        let detail = repo.detail(Species::Cat, "Ghost").await;
        (detail, logs.text())
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_failed_lookup_yields_sentinel_row() {
        let api = FakeApi::new(&[], &[]);

        let detail = fetch_detail(&api, Species::Dog, "Beagle").await;
        let row = detail.to_row();

        assert_eq!(row[0], "Beagle");
        assert_eq!(row.len(), 24);
        assert!(row[1..].iter().all(|v| v == SENTINEL));
    }

    #[tokio::test]
    async fn test_failed_lookup_is_silent_at_default_level() {
        let (detail, quiet) = lookup_with_filter(cli_directives(false)).await;
        assert!(detail.is_sentinel());
        assert!(quiet.is_empty(), "unexpected console output: {}", quiet);

        let (_, verbose) = lookup_with_filter(cli_directives(true)).await;
        assert!(verbose.contains("Request for cat 'Ghost' failed"));
    }

    #[tokio::test]
    async fn test_batch_preserves_input_order() {
        // 第一筆最慢，結果順序仍需跟輸入一致
        let api = FakeApi::new(&[], &[])
            .with_record(Species::Cat, "Siamese", cat_record(2, 5, 5, 1, 3))
            .with_record(Species::Cat, "Bengal", cat_record(3, 4, 5, 2, 4))
            .with_delay("Siamese", Duration::from_millis(50));

        let batch = names(&["Siamese", "Unknown", "Bengal"]);
        let details = fetch_details(&api, Species::Cat, &batch).await;

        assert_eq!(details.len(), 3);
        let order: Vec<&str> = details.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(order, vec!["Siamese", "Unknown", "Bengal"]);
        assert!(!details[0].is_sentinel());
        assert!(details[1].is_sentinel());
        assert!(!details[2].is_sentinel());
    }

    #[tokio::test]
    async fn test_batch_runs_concurrently() {
        let api = FakeApi::new(&[], &[])
            .with_record(Species::Cat, "A", cat_record(1, 1, 1, 1, 1))
            .with_record(Species::Cat, "B", cat_record(1, 1, 1, 1, 1))
            .with_delay("A", Duration::from_millis(200))
            .with_delay("B", Duration::from_millis(200));

        let started = std::time::Instant::now();
        fetch_details(&api, Species::Cat, &names(&["A", "B"])).await;

        assert!(started.elapsed() < Duration::from_millis(390));
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let api = FakeApi::new(&[], &[]);
        assert!(fetch_details(&api, Species::Cat, &[]).await.is_empty());
        assert_eq!(api.lookup_count(), 0);
    }

    #[tokio::test]
    async fn test_repository_caches_successful_lookups() {
        let api = FakeApi::new(&[], &[]).with_record(Species::Cat, "Siamese", cat_record(2, 5, 5, 1, 3));
        let mut repo = BreedRepository::new(api, true);

        let first = repo.detail(Species::Cat, "Siamese").await;
        let second = repo.detail(Species::Cat, "Siamese").await;

        assert_eq!(first, second);
        assert_eq!(repo.api().lookup_count(), 1);
        assert_eq!(repo.cached_len(), 1);
    }

    #[tokio::test]
    async fn test_repository_does_not_cache_sentinels() {
        let api = FakeApi::new(&[], &[]);
        let mut repo = BreedRepository::new(api, true);

        repo.detail(Species::Cat, "Ghost").await;
        repo.detail(Species::Cat, "Ghost").await;

        assert_eq!(repo.api().lookup_count(), 2);
        assert_eq!(repo.cached_len(), 0);
    }

    #[tokio::test]
    async fn test_repository_without_cache_fetches_every_time() {
        let api = FakeApi::new(&[], &[]).with_record(Species::Cat, "Siamese", cat_record(2, 5, 5, 1, 3));
        let mut repo = BreedRepository::new(api, false);

        repo.detail(Species::Cat, "Siamese").await;
        repo.detail(Species::Cat, "Siamese").await;

        assert_eq!(repo.api().lookup_count(), 2);
    }

    #[tokio::test]
    async fn test_repository_batch_mixes_cached_and_fresh() {
        let api = FakeApi::new(&[], &[])
            .with_record(Species::Cat, "Siamese", cat_record(2, 5, 5, 1, 3))
            .with_record(Species::Cat, "Bengal", cat_record(3, 4, 5, 2, 4));
        let mut repo = BreedRepository::new(api, true);

        repo.detail(Species::Cat, "Bengal").await;
        let details = repo.details(Species::Cat, &names(&["Siamese", "Bengal"])).await;

        assert_eq!(details[0].name, "Siamese");
        assert_eq!(details[1].name, "Bengal");
        assert_eq!(repo.api().lookup_count(), 2);
    }

    #[test]
    fn test_species_cache_keys_are_separate() {
        let api = FakeApi::new(&[], &[]).with_record(Species::Cat, "Mixed", cat_record(1, 1, 1, 1, 1));
        let mut repo = BreedRepository::new(api, true);

        let cat = tokio_test::block_on(repo.detail(Species::Cat, "Mixed"));
        let dog = tokio_test::block_on(repo.detail(Species::Dog, "Mixed"));

        assert!(!cat.is_sentinel());
        assert!(dog.is_sentinel());
        assert_eq!(dog.values().len(), 23);
    }
}
