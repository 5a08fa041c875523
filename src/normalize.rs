use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Caliber/gauge to display-category mapping carried over from the cleaning
/// step's gun map.
static DEFAULT_GUN_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Handgun", "Handgun"),
        ("9mm", "Handgun"),
        ("10mm", "Handgun"),
        ("22 LR", "Handgun"),
        ("25 Auto", "Handgun"),
        ("32 Auto", "Handgun"),
        ("357 Mag", "Handgun"),
        ("38 Spl", "Handgun"),
        ("380 Auto", "Handgun"),
        ("40 SW", "Handgun"),
        ("44 Mag", "Handgun"),
        ("45 Auto", "Handgun"),
        ("Rifle", "Rifle"),
        ("223 Rem [AR-15]", "Rifle"),
        ("7.62 [AK-47]", "Rifle"),
        ("30-06 Spr", "Rifle"),
        ("30-30 Win", "Rifle"),
        ("300 Win", "Rifle"),
        ("308 Win", "Rifle"),
        ("Shotgun", "Shotgun"),
        ("12 gauge", "Shotgun"),
        ("16 gauge", "Shotgun"),
        ("20 gauge", "Shotgun"),
        ("28 gauge", "Shotgun"),
        ("410 gauge", "Shotgun"),
        ("Other", "Other"),
        ("Unknown", "Unknown"),
    ])
});

/// Maps raw gun-type strings to canonical display labels. Labels outside the
/// map pass through unchanged.
#[derive(Debug, Clone)]
pub struct GunLabelNormalizer {
    map: HashMap<String, String>,
}

impl Default for GunLabelNormalizer {
    fn default() -> Self {
        Self {
            map: DEFAULT_GUN_MAP
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl GunLabelNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_map(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn normalize(&self, raw: &str) -> String {
        self.map
            .get(raw)
            .cloned()
            .unwrap_or_else(|| raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_calibers_to_categories() {
        let normalizer = GunLabelNormalizer::new();
        assert_eq!(normalizer.normalize("9mm"), "Handgun");
        assert_eq!(normalizer.normalize("12 gauge"), "Shotgun");
        assert_eq!(normalizer.normalize("223 Rem [AR-15]"), "Rifle");
    }

    #[test]
    fn unmapped_labels_pass_through() {
        let normalizer = GunLabelNormalizer::new();
        assert_eq!(normalizer.normalize("Flare Gun"), "Flare Gun");
    }

    #[test]
    fn injected_map_replaces_the_default() {
        let normalizer = GunLabelNormalizer::with_map(HashMap::from([(
            "9mm".to_string(),
            "Pistol".to_string(),
        )]));
        assert_eq!(normalizer.normalize("9mm"), "Pistol");
        assert_eq!(normalizer.normalize("12 gauge"), "12 gauge");
    }
}
