use crate::domain::model::{BreedDetail, Species};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn cats_endpoint(&self) -> &str;
    fn dogs_endpoint(&self) -> &str;
    /// 變數名稱或設定鍵，用於錯誤訊息
    fn api_key_source(&self) -> &str;
    fn api_key(&self) -> Option<String>;
    fn user_agent(&self) -> &str;
    fn min_life_expectancy(&self) -> u32;
    fn timeout_seconds(&self) -> u64;
    fn retry_attempts(&self) -> u32;
    fn retry_delay_ms(&self) -> u64;
    fn cache_enabled(&self) -> bool;
}

/// 上游品種 API
#[async_trait]
pub trait BreedApi: Send + Sync {
    /// 列出某物種的所有品種名稱
    async fn list_breeds(&self, species: Species) -> Result<Vec<String>>;

    /// 依名稱查詢單一品種；查無資料時回傳 `NotFoundError`
    async fn lookup_breed(&self, species: Species, name: &str) -> Result<BreedDetail>;
}
