//! Exercise definitions - katalog ćwiczeń

use serde::{Deserialize, Serialize};

/// Label used when a session references an exercise missing from the catalog
pub const UNKNOWN_LABEL: &str = "Nieznane";

/// Body part filter. `All` is a wildcard, never a real exercise's body part.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Arms,  // Ręce
    Torso, // Tułów (klatka, plecy, barki, brzuch)
    Legs,  // Nogi
    #[default]
    All,
}

impl BodyPart {
    pub fn label(&self) -> &'static str {
        match self {
            BodyPart::Arms => "Ręce",
            BodyPart::Torso => "Tułów",
            BodyPart::Legs => "Nogi",
            BodyPart::All => "Wszystkie",
        }
    }

    /// Wildcard-aware match against an exercise's body part
    pub fn matches(&self, other: BodyPart) -> bool {
        *self == BodyPart::All || *self == other
    }

    pub fn all() -> &'static [BodyPart] {
        &[BodyPart::All, BodyPart::Arms, BodyPart::Torso, BodyPart::Legs]
    }
}

impl std::str::FromStr for BodyPart {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arms" => Ok(Self::Arms),
            "torso" => Ok(Self::Torso),
            "legs" => Ok(Self::Legs),
            "all" => Ok(Self::All),
            _ => Err(format!("Unknown body part: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Strength, // Wzmocnienie
    Mobility, // Mobilność
    Cardio,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Strength => "Wzmocnienie",
            Category::Mobility => "Mobilność",
            Category::Cardio => "Cardio",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strength" => Ok(Self::Strength),
            "mobility" => Ok(Self::Mobility),
            "cardio" => Ok(Self::Cardio),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub body_part: BodyPart,
}

impl Exercise {
    pub fn new(id: &str, name: &str, category: Category, body_part: BodyPart) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            body_part,
        }
    }
}

/// Bazowy katalog: (id, nazwa, kategoria, partia)
const CATALOG: &[(&str, &str, Category, BodyPart)] = &[
    // Ręce
    ("1", "Uginanie ramion ze sztangą", Category::Strength, BodyPart::Arms),
    ("2", "Prostowanie ramion na wyciągu", Category::Strength, BodyPart::Arms),
    ("3", "Uginanie ramion z hantlami", Category::Strength, BodyPart::Arms),
    ("4", "Rozciąganie bicepsów", Category::Mobility, BodyPart::Arms),
    // Tułów
    ("5", "Wyciskanie leżąc", Category::Strength, BodyPart::Torso),
    ("6", "Rozpiętki z hantlami", Category::Strength, BodyPart::Torso),
    ("7", "Pompki", Category::Strength, BodyPart::Torso),
    ("8", "Rozciąganie klatki piersiowej", Category::Mobility, BodyPart::Torso),
    ("13", "Wiosłowanie sztangą", Category::Strength, BodyPart::Torso),
    ("14", "Podciąganie na drążku", Category::Strength, BodyPart::Torso),
    ("15", "Przyciąganie wyciągu górnego", Category::Strength, BodyPart::Torso),
    ("16", "Rozciąganie pleców", Category::Mobility, BodyPart::Torso),
    ("17", "Wyciskanie nad głowę", Category::Strength, BodyPart::Torso),
    ("18", "Unoszenie hantli bokiem", Category::Strength, BodyPart::Torso),
    ("19", "Arnoldki", Category::Strength, BodyPart::Torso),
    ("20", "Rozciąganie barków", Category::Mobility, BodyPart::Torso),
    ("21", "Plank", Category::Strength, BodyPart::Torso),
    ("22", "Brzuszki", Category::Strength, BodyPart::Torso),
    ("23", "Russian twist", Category::Strength, BodyPart::Torso),
    ("24", "Rozciąganie brzucha", Category::Mobility, BodyPart::Torso),
    // Nogi
    ("9", "Przysiad ze sztangą", Category::Strength, BodyPart::Legs),
    ("10", "Martwy ciąg", Category::Strength, BodyPart::Legs),
    ("11", "Wyprost nóg na maszynie", Category::Strength, BodyPart::Legs),
    ("12", "Rozciąganie nóg", Category::Mobility, BodyPart::Legs),
];

/// Built-in exercise catalog in display order
pub fn default_catalog() -> Vec<Exercise> {
    CATALOG
        .iter()
        .map(|(id, name, category, body_part)| Exercise::new(id, name, *category, *body_part))
        .collect()
}

pub fn find_exercise<'a>(catalog: &'a [Exercise], id: &str) -> Option<&'a Exercise> {
    catalog.iter().find(|e| e.id == id)
}

/// Display name for an exercise id, falling back to [`UNKNOWN_LABEL`]
pub fn exercise_label(catalog: &[Exercise], id: &str) -> String {
    match find_exercise(catalog, id) {
        Some(ex) => ex.name.clone(),
        None => {
            tracing::debug!(exercise_id = id, "exercise missing from catalog");
            UNKNOWN_LABEL.to_string()
        }
    }
}
