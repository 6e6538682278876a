use crate::domain::model::Species;
use crate::utils::error::{PetMatchError, Result};
use crate::utils::validation::validate_range;
use thiserror::Error;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// 比較方向：不希望太高的特質用 AtMost，希望夠高的特質用 AtLeast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    AtMost,
    AtLeast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub field: &'static str,
    pub bound: Bound,
    pub question: &'static str,
    pub label: &'static str,
}

impl Criterion {
    const fn new(field: &'static str, bound: Bound, question: &'static str, label: &'static str) -> Self {
        Self {
            field,
            bound,
            question,
            label,
        }
    }

    pub fn accepts(&self, breed_score: i64, answer: u8) -> bool {
        let answer = i64::from(answer);
        match self.bound {
            Bound::AtMost => breed_score <= answer,
            Bound::AtLeast => breed_score >= answer,
        }
    }
}

const CAT_CRITERIA: [Criterion; 5] = [
    Criterion::new(
        "family_friendly",
        Bound::AtLeast,
        "How friendly a cat would you like? (1-5)",
        "Friendliness",
    ),
    Criterion::new(
        "playfulness",
        Bound::AtLeast,
        "How playful a cat would you like? (1-5)",
        "Playfulness",
    ),
    Criterion::new(
        "shedding",
        Bound::AtMost,
        "How much shedding can you tolerate (max)? (1-5)",
        "Shedding",
    ),
    Criterion::new(
        "grooming",
        Bound::AtMost,
        "How much grooming effort can you handle (max)? (1-5)",
        "Grooming",
    ),
    Criterion::new(
        "general_health",
        Bound::AtLeast,
        "What general health score do you require (min)? (1-5)",
        "General health",
    ),
];

const DOG_CRITERIA: [Criterion; 7] = [
    Criterion::new(
        "energy",
        Bound::AtMost,
        "How energetic a dog would you like (max)? (1-5)",
        "Energy",
    ),
    Criterion::new(
        "barking",
        Bound::AtMost,
        "How vocal a dog would you accept (max)? (1-5)",
        "Barking",
    ),
    Criterion::new(
        "shedding",
        Bound::AtMost,
        "How much shedding can you tolerate (max)? (1-5)",
        "Shedding",
    ),
    Criterion::new(
        "grooming",
        Bound::AtMost,
        "How much grooming effort can you handle (max)? (1-5)",
        "Grooming",
    ),
    Criterion::new(
        "trainability",
        Bound::AtLeast,
        "How trainable should the dog be (min)? (1-5)",
        "Trainability",
    ),
    Criterion::new(
        "good_with_strangers",
        Bound::AtLeast,
        "How friendly towards strangers should the dog be (min)? (1-5)",
        "Friendliness",
    ),
    Criterion::new(
        "protectiveness",
        Bound::AtLeast,
        "How protective should the dog be (min)? (1-5)",
        "Protectiveness",
    ),
];

/// 問卷題目，依提問順序
pub fn criteria_for(species: Species) -> &'static [Criterion] {
    match species {
        Species::Cat => &CAT_CRITERIA,
        Species::Dog => &DOG_CRITERIA,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("Invalid command")]
    NotANumber,

    #[error("Must be a number from 1 to 5")]
    OutOfRange(i64),
}

pub fn parse_answer(input: &str) -> std::result::Result<u8, AnswerError> {
    let value: i64 = input.trim().parse().map_err(|_| AnswerError::NotANumber)?;
    validate_range("answer", value, i64::from(MIN_SCORE), i64::from(MAX_SCORE))
        .map_err(|_| AnswerError::OutOfRange(value))?;
    Ok(value as u8)
}

/// 一次問卷的答案，收集完成後不可變
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceSet {
    species: Species,
    answers: Vec<u8>,
}

impl PreferenceSet {
    /// `answers` 需依 `criteria_for(species)` 的順序提供
    pub fn new(species: Species, answers: Vec<u8>) -> Result<Self> {
        let criteria = criteria_for(species);
        if answers.len() != criteria.len() {
            return Err(PetMatchError::ValidationError {
                message: format!(
                    "expected {} answers for a {}, got {}",
                    criteria.len(),
                    species,
                    answers.len()
                ),
            });
        }

        for (criterion, answer) in criteria.iter().zip(&answers) {
            validate_range(criterion.field, *answer, MIN_SCORE, MAX_SCORE)?;
        }

        Ok(Self { species, answers })
    }

    /// 最寬鬆的答案：AtMost 取 5，AtLeast 取 1
    #[cfg(test)]
    pub(crate) fn permissive(species: Species) -> Self {
        let answers = criteria_for(species)
            .iter()
            .map(|c| match c.bound {
                Bound::AtMost => MAX_SCORE,
                Bound::AtLeast => MIN_SCORE,
            })
            .collect();
        Self { species, answers }
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static Criterion, u8)> + '_ {
        criteria_for(self.species)
            .iter()
            .zip(self.answers.iter().copied())
    }

    pub fn answer_for(&self, field: &str) -> Option<(&'static Criterion, u8)> {
        self.iter().find(|(c, _)| c.field == field)
    }
}
