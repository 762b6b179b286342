//! # Crop Knowledge Base
//!
//! Hand-authored lookup table behind the `/crops` pages. This is local
//! reference content, distinct from the remote crop catalogue the admin
//! console manages.

use once_cell::sync::Lazy;

/// One entry of the knowledge table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropEntry {
    pub name: &'static str,
    pub category: &'static str,
    pub seasons: &'static [&'static str],
    pub soil_types: &'static [&'static str],
    pub water_needs: &'static str,
    pub duration: &'static str,
    pub varieties: &'static [&'static str],
    pub major_problems: &'static [&'static str],
    pub care_notes: &'static str,
}

static CROP_TABLE: &[CropEntry] = &[
    CropEntry {
        name: "Rice",
        category: "Cereal",
        seasons: &["kharif", "rabi"],
        soil_types: &["clay", "loam"],
        water_needs: "High - standing water during vegetative stage",
        duration: "110-150 days",
        varieties: &["IR-64", "Sona Masuri", "Basmati 370"],
        major_problems: &["blast", "stem borer", "brown planthopper"],
        care_notes: "Transplant 25-30 day seedlings; keep 2-5 cm of standing water until the dough stage, then drain for harvest.",
    },
    CropEntry {
        name: "Wheat",
        category: "Cereal",
        seasons: &["rabi"],
        soil_types: &["loam", "clay loam"],
        water_needs: "Moderate - 4 to 6 irrigations",
        duration: "120-150 days",
        varieties: &["HD-2967", "Lok-1", "GW-322"],
        major_problems: &["rust", "loose smut", "aphids"],
        care_notes: "Sow by mid-November; the crown-root-initiation irrigation around day 21 matters most for yield.",
    },
    CropEntry {
        name: "Maize",
        category: "Cereal",
        seasons: &["kharif", "rabi", "summer"],
        soil_types: &["loam", "sandy loam"],
        water_needs: "Moderate - sensitive at tasseling",
        duration: "90-110 days",
        varieties: &["DHM-117", "Ganga-5"],
        major_problems: &["fall armyworm", "stalk rot"],
        care_notes: "Never let the field stay waterlogged; scout for fall armyworm from the whorl stage onward.",
    },
    CropEntry {
        name: "Cotton",
        category: "Cash Crop",
        seasons: &["kharif"],
        soil_types: &["black", "alluvial"],
        water_needs: "Moderate - avoid stress at boll formation",
        duration: "150-180 days",
        varieties: &["Bt hybrids", "Suraj"],
        major_problems: &["pink bollworm", "whitefly", "leaf curl virus"],
        care_notes: "Maintain refuge rows with non-Bt seed; remove and destroy late-season rosette flowers to break the bollworm cycle.",
    },
    CropEntry {
        name: "Sugarcane",
        category: "Cash Crop",
        seasons: &["annual"],
        soil_types: &["loam", "clay loam"],
        water_needs: "High - frequent irrigation",
        duration: "10-12 months",
        varieties: &["Co-86032", "CoM-265"],
        major_problems: &["early shoot borer", "red rot"],
        care_notes: "Use three-bud setts treated against red rot; earth up at 120 days to prevent lodging.",
    },
    CropEntry {
        name: "Tomato",
        category: "Vegetable",
        seasons: &["kharif", "rabi", "summer"],
        soil_types: &["sandy loam", "loam"],
        water_needs: "Moderate - drip preferred",
        duration: "60-90 days",
        varieties: &["Pusa Ruby", "Arka Vikas", "hybrid NS-501"],
        major_problems: &["early blight", "fruit borer", "leaf curl virus"],
        care_notes: "Stake within three weeks of transplant; alternate fungicide groups for blight to avoid resistance.",
    },
    CropEntry {
        name: "Onion",
        category: "Vegetable",
        seasons: &["kharif", "rabi"],
        soil_types: &["loam", "alluvial"],
        water_needs: "Moderate - stop irrigation 10 days before harvest",
        duration: "100-120 days",
        varieties: &["Nasik Red", "Agrifound Light Red"],
        major_problems: &["purple blotch", "thrips"],
        care_notes: "Light frequent irrigation beats heavy flooding; cure bulbs in shade for a week before storage.",
    },
    CropEntry {
        name: "Chilli",
        category: "Vegetable",
        seasons: &["kharif", "rabi"],
        soil_types: &["black", "sandy loam"],
        water_needs: "Low to moderate",
        duration: "120-150 days",
        varieties: &["Byadgi", "Guntur Sannam", "Pusa Jwala"],
        major_problems: &["thrips", "anthracnose", "murda complex"],
        care_notes: "Interplant with marigold as a thrips trap; pick at full red for dry chilli, green for market.",
    },
    CropEntry {
        name: "Groundnut",
        category: "Oilseed",
        seasons: &["kharif", "summer"],
        soil_types: &["sandy loam", "red"],
        water_needs: "Low - critical at pegging",
        duration: "100-130 days",
        varieties: &["TMV-2", "JL-24"],
        major_problems: &["leaf spot", "white grub"],
        care_notes: "Apply gypsum at flowering for pod filling; do not irrigate during the last three weeks.",
    },
    CropEntry {
        name: "Banana",
        category: "Fruit",
        seasons: &["annual"],
        soil_types: &["loam", "alluvial"],
        water_needs: "High - drip strongly recommended",
        duration: "11-14 months",
        varieties: &["Grand Naine", "Robusta", "Nendran"],
        major_problems: &["panama wilt", "sigatoka", "nematodes"],
        care_notes: "Plant tissue-culture saplings in pits with neem cake; prop bunches and remove the male bud after the last hand.",
    },
];

/// Category tabs in table order, deduplicated.
static CATEGORIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut out: Vec<&'static str> = Vec::new();
    for entry in CROP_TABLE {
        if !out.contains(&entry.category) {
            out.push(entry.category);
        }
    }
    out
});

/// Every crop in the table, in authored order.
pub fn all() -> &'static [CropEntry] {
    CROP_TABLE
}

/// Distinct categories in authored order.
pub fn categories() -> &'static [&'static str] {
    &CATEGORIES
}

/// Case-insensitive lookup by crop name.
pub fn find(name: &str) -> Option<&'static CropEntry> {
    CROP_TABLE
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// All crops of a category, in authored order.
pub fn by_category(category: &str) -> Vec<&'static CropEntry> {
    CROP_TABLE
        .iter()
        .filter(|entry| entry.category.eq_ignore_ascii_case(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive() {
        assert!(find("tomato").is_some());
        assert!(find("TOMATO").is_some());
        assert!(find("no-such-crop").is_none());
    }

    #[test]
    fn categories_are_distinct_and_cover_all_entries() {
        let cats = categories();
        let mut dedup = cats.to_vec();
        dedup.dedup();
        assert_eq!(cats.len(), dedup.len());
        for entry in all() {
            assert!(cats.contains(&entry.category), "{}", entry.name);
        }
    }

    #[test]
    fn by_category_partitions_the_table() {
        let total: usize = categories().iter().map(|c| by_category(c).len()).sum();
        assert_eq!(total, all().len());
    }

    #[test]
    fn every_entry_is_fully_authored() {
        for entry in all() {
            assert!(!entry.seasons.is_empty(), "{} has no seasons", entry.name);
            assert!(!entry.varieties.is_empty(), "{} has no varieties", entry.name);
            assert!(
                !entry.major_problems.is_empty(),
                "{} has no problems listed",
                entry.name
            );
            assert!(!entry.care_notes.is_empty());
        }
    }
}
