//! Growing tips and crop-indexed advice

use crate::models::{CompanionCrop, Crop};

/// Static advice bundle for one crop
#[derive(Debug, Clone, Copy)]
pub struct CropAdvisory {
    pub crop: Crop,
    pub companion_name: &'static str,
    pub companion_description: &'static str,
    pub companion_note: &'static str,
    pub organic_fertilizers: &'static [&'static str],
}

impl CropAdvisory {
    pub fn companion_crop(&self) -> CompanionCrop {
        CompanionCrop {
            name: self.companion_name.to_string(),
            description: self.companion_description.to_string(),
            note: self.companion_note.to_string(),
        }
    }

    pub fn fertilizers(&self) -> Vec<String> {
        self.organic_fertilizers.iter().map(|f| f.to_string()).collect()
    }
}

/// Used for any crop without its own entry
pub const DEFAULT_ADVISORY: CropAdvisory = CropAdvisory {
    crop: Crop::Wheat,
    companion_name: "White Clover",
    companion_description: "Low-growing legume that fixes nitrogen and suppresses weeds between rows",
    companion_note: "Undersow clover in early spring and leave it as a living mulch after harvest",
    organic_fertilizers: &["Vermicompost", "Neem cake"],
};

pub const CROP_ADVISORIES: &[CropAdvisory] = &[
    DEFAULT_ADVISORY,
    CropAdvisory {
        crop: Crop::Rice,
        companion_name: "Azolla",
        companion_description: "Floating fern that fixes atmospheric nitrogen in flooded paddies",
        companion_note: "Inoculate the paddy a week after transplanting and incorporate the mat before draining",
        organic_fertilizers: &["Farmyard manure", "Green manure (Sesbania)", "Azolla biofertilizer"],
    },
    CropAdvisory {
        crop: Crop::Corn,
        companion_name: "Pole Beans",
        companion_description: "Climb the corn stalks and add nitrogen to the root zone",
        companion_note: "Sow beans once corn seedlings are about 15 cm tall so they do not smother them",
        organic_fertilizers: &["Compost", "Poultry manure", "Bone meal"],
    },
    CropAdvisory {
        crop: Crop::Potato,
        companion_name: "Bush Beans",
        companion_description: "Deter Colorado potato beetles and enrich the soil with nitrogen",
        companion_note: "Plant between potato rows and keep them clear of the hilling line",
        organic_fertilizers: &["Wood ash", "Seaweed extract", "Well-rotted manure"],
    },
];

/// Look up the advice for `crop`, falling back to the default entry
pub fn advisory_for(crop: Crop) -> &'static CropAdvisory {
    CROP_ADVISORIES
        .iter()
        .find(|a| a.crop == crop)
        .unwrap_or(&DEFAULT_ADVISORY)
}

/// Four growing tips; only the first depends on the crop
pub fn generate_tips(crop: Crop) -> Vec<String> {
    vec![
        format!(
            "Maintain pH levels between 6.0-7.0 for optimal {} growth",
            crop.name().to_lowercase()
        ),
        "Apply nitrogen fertilizer in split doses during vegetative growth".to_string(),
        "Monitor moisture levels regularly, especially during flowering stage".to_string(),
        "Consider crop rotation to maintain long-term soil health".to_string(),
    ]
}
