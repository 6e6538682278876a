use serde_json::{Map, Number, Value};
use std::fmt;

/// 缺值標記
pub const SENTINEL: &str = "N/A";

const CAT_FIELDS: [&str; 15] = [
    "image_link",
    "length",
    "origin",
    "min_weight",
    "max_weight",
    "min_life_expectancy",
    "max_life_expectancy",
    "shedding",
    "family_friendly",
    "playfulness",
    "grooming",
    "other_pets_friendly",
    "children_friendly",
    "intelligence",
    "general_health",
];

const DOG_FIELDS: [&str; 23] = [
    "image_link",
    "min_height_male",
    "max_height_male",
    "min_weight_male",
    "max_weight_male",
    "min_height_female",
    "max_height_female",
    "min_weight_female",
    "max_weight_female",
    "min_life_expectancy",
    "max_life_expectancy",
    "shedding",
    "barking",
    "energy",
    "protectiveness",
    "trainability",
    "good_with_children",
    "good_with_other_dogs",
    "good_with_strangers",
    "grooming",
    "drooling",
    "coat_length",
    "playfulness",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Cat,
    Dog,
}

impl Species {
    /// 名稱之後的屬性欄位，順序固定
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Species::Cat => &CAT_FIELDS,
            Species::Dog => &DOG_FIELDS,
        }
    }

    /// 完整記錄長度（含名稱）
    pub fn arity(self) -> usize {
        self.fields().len() + 1
    }

    /// 列表回應為物件時，陣列所在的鍵
    pub fn directory_key(self) -> &'static str {
        match self {
            Species::Cat => "cats",
            Species::Dog => "dogs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Species::Cat => "Cat",
            Species::Dog => "Dog",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Cat => write!(f, "cat"),
            Species::Dog => write!(f, "dog"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(Number),
    Text(String),
    Missing,
}

impl FieldValue {
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => FieldValue::Missing,
            Some(Value::Number(n)) => FieldValue::Number(n.clone()),
            Some(Value::String(s)) => FieldValue::Text(s.clone()),
            Some(other) => FieldValue::Text(other.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// 比較用的整數分數：缺值與無法解析的文字視為 0，小數向零截斷
    pub fn as_score(&self) -> i64 {
        match self {
            FieldValue::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                .unwrap_or(0),
            FieldValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
                .unwrap_or(0),
            FieldValue::Missing => 0,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Missing => write!(f, "{}", SENTINEL),
        }
    }
}

/// 單一品種的固定形狀記錄；`values` 與 `species.fields()` 一一對應
#[derive(Debug, Clone, PartialEq)]
pub struct BreedDetail {
    pub species: Species,
    pub name: String,
    values: Vec<FieldValue>,
}

impl BreedDetail {
    /// 依物種欄位順序映射 API 回傳的物件，缺少的鍵補上缺值標記
    pub fn from_record(species: Species, name: &str, record: &Map<String, Value>) -> Self {
        let values = species
            .fields()
            .iter()
            .map(|field| FieldValue::from_json(record.get(*field)))
            .collect();

        Self {
            species,
            name: name.to_string(),
            values,
        }
    }

    /// 失敗時的記錄：名稱加上補滿整個物種長度的缺值
    pub fn sentinel(species: Species, name: &str) -> Self {
        Self {
            species,
            name: name.to_string(),
            values: vec![FieldValue::Missing; species.fields().len()],
        }
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.species
            .fields()
            .iter()
            .position(|f| *f == field)
            .and_then(|idx| self.values.get(idx))
    }

    pub fn score(&self, field: &str) -> i64 {
        self.get(field).map(FieldValue::as_score).unwrap_or(0)
    }

    pub fn is_sentinel(&self) -> bool {
        self.values.iter().all(FieldValue::is_missing)
    }

    /// 欄位名稱與值，依固定順序
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.species.fields().iter().copied().zip(self.values.iter())
    }

    /// 以文字形式輸出整筆記錄，名稱在第 0 位
    #[cfg(test)]
    pub(crate) fn to_row(&self) -> Vec<String> {
        std::iter::once(self.name.clone())
            .chain(self.values.iter().map(ToString::to_string))
            .collect()
    }
}

/// 兩個物種的品種名稱清單，保留上游順序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    pub cats: Vec<String>,
    pub dogs: Vec<String>,
}

impl Directory {
    pub fn breeds(&self, species: Species) -> &[String] {
        match species {
            Species::Cat => &self.cats,
            Species::Dog => &self.dogs,
        }
    }

    /// 瀏覽用清單：貓、狗交錯排列，較長的一方剩餘項目接在後面
    pub fn interleaved(&self) -> Vec<(Species, String)> {
        let longest = self.cats.len().max(self.dogs.len());
        let mut combined = Vec::with_capacity(self.cats.len() + self.dogs.len());

        for i in 0..longest {
            if let Some(cat) = self.cats.get(i) {
                combined.push((Species::Cat, cat.clone()));
            }
            if let Some(dog) = self.dogs.get(i) {
                combined.push((Species::Dog, dog.clone()));
            }
        }

        combined
    }
}
