use crate::domain::model::{BreedDetail, Species};
use crate::domain::preferences::{PreferenceSet, MAX_SCORE};

pub const SEPARATOR: &str = "--------------------------------------------------";

struct FieldLabel {
    field: &'static str,
    label: &'static str,
    unit: &'static str,
    section: Option<&'static str>,
}

const fn label(field: &'static str, label: &'static str, unit: &'static str) -> FieldLabel {
    FieldLabel {
        field,
        label,
        unit,
        section: None,
    }
}

const fn section(field: &'static str, label: &'static str, unit: &'static str, title: &'static str) -> FieldLabel {
    FieldLabel {
        field,
        label,
        unit,
        section: Some(title),
    }
}

const CAT_LABELS: [FieldLabel; 15] = [
    label("image_link", "Image link", ""),
    label("length", "Length", ""),
    label("origin", "Origin", ""),
    label("min_weight", "Min weight", " lbs"),
    label("max_weight", "Max weight", " lbs"),
    label("min_life_expectancy", "Min life expectancy", " years"),
    label("max_life_expectancy", "Max life expectancy", " years"),
    label("shedding", "How much the cat sheds (1 to 5)", ""),
    label("family_friendly", "How affectionate the cat is with family (1 to 5)", ""),
    label("playfulness", "How playful the cat is (1 to 5)", ""),
    label("grooming", "How much grooming the cat needs (1 to 5)", ""),
    label("other_pets_friendly", "How well the cat gets along with other pets (1 to 5)", ""),
    label("children_friendly", "How well the cat gets along with children (1 to 5)", ""),
    label("intelligence", "Intelligence (1 to 5)", ""),
    label("general_health", "General health (1 to 5)", ""),
];

const DOG_LABELS: [FieldLabel; 23] = [
    label("image_link", "Image link", ""),
    section("min_height_male", "Min height", " inches", "--Sex: male--"),
    label("max_height_male", "Max height", " inches"),
    label("min_weight_male", "Min weight", " lbs"),
    label("max_weight_male", "Max weight", " lbs"),
    section("min_height_female", "Min height", " inches", "--Sex: female--"),
    label("max_height_female", "Max height", " inches"),
    label("min_weight_female", "Min weight", " lbs"),
    label("max_weight_female", "Max weight", " lbs"),
    label("min_life_expectancy", "Min life expectancy", " years"),
    label("max_life_expectancy", "Max life expectancy", " years"),
    label("shedding", "How much the dog sheds (1 to 5)", ""),
    label("barking", "How likely the dog is to bark (1 to 5)", ""),
    label("energy", "Energy (1 to 5)", ""),
    label("protectiveness", "Protectiveness (1 to 5)", ""),
    label("trainability", "Trainability (1 to 5)", ""),
    label("good_with_children", "How well the dog gets along with children (1 to 5)", ""),
    label("good_with_other_dogs", "How well the dog gets along with other dogs (1 to 5)", ""),
    label("good_with_strangers", "How well the dog gets along with strangers (1 to 5)", ""),
    label("grooming", "How much grooming the dog needs (1 to 5)", ""),
    label("drooling", "How much the dog drools (1 to 5)", ""),
    label("coat_length", "Coat length (1 to 5)", ""),
    label("playfulness", "How playful the dog is (1 to 5)", ""),
];

fn labels(species: Species) -> &'static [FieldLabel] {
    match species {
        Species::Cat => &CAT_LABELS,
        Species::Dog => &DOG_LABELS,
    }
}

/// 完整記錄，依欄位固定順序逐行輸出；有偏好時比較欄位附上使用者的選擇
fn render_lines(detail: &BreedDetail, preferences: Option<&PreferenceSet>) -> Vec<String> {
    let mut lines = vec![format!("Breed: {}", detail.name)];

    for (entry, (field, value)) in labels(detail.species).iter().zip(detail.fields()) {
        debug_assert_eq!(entry.field, field);

        if let Some(title) = entry.section {
            lines.push(title.to_string());
        }

        match preferences.and_then(|p| p.answer_for(field)) {
            Some((criterion, answer)) => lines.push(format!(
                "{}: {}/{} (your choice: {})",
                criterion.label, value, MAX_SCORE, answer
            )),
            None => lines.push(format!("{}: {}{}", entry.label, value, entry.unit)),
        }
    }

    lines
}

pub fn render_breed(detail: &BreedDetail) -> String {
    render_lines(detail, None).join("\n")
}

pub fn render_match(detail: &BreedDetail, preferences: &PreferenceSet) -> String {
    render_lines(detail, Some(preferences)).join("\n")
}

/// 偏好摘要，依記錄欄位順序
pub fn render_preferences(preferences: &PreferenceSet) -> String {
    let species = preferences.species();
    let mut lines = vec!["Your preferences:".to_string()];

    lines.extend(species.fields().iter().filter_map(|field| {
        preferences
            .answer_for(field)
            .map(|(criterion, answer)| format!("- {}: {}/{}", criterion.label, answer, MAX_SCORE))
    }));

    lines.join("\n")
}
