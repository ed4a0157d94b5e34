use serde::Serialize;

/// Provider voice tuning values derived from an emotion label
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
}

/// Fallback for absent or unrecognized emotion labels
const NEUTRAL: VoiceSettings = VoiceSettings {
    stability: 0.4,
    similarity_boost: 0.0,
};

/// Fixed emotion → voice-settings table
const EMOTION_TABLE: &[(&str, VoiceSettings)] = &[
    (
        "joy",
        VoiceSettings {
            stability: 0.25,
            similarity_boost: 0.2,
        },
    ),
    (
        "sad",
        VoiceSettings {
            stability: 0.6,
            similarity_boost: 0.0,
        },
    ),
    (
        "angry",
        VoiceSettings {
            stability: 0.15,
            similarity_boost: 0.1,
        },
    ),
];

/// Map an emotion label to provider voice settings
///
/// Pure and total: every input, including `None` and labels outside the
/// table, resolves to a value
pub fn voice_settings_for(emotion: Option<&str>) -> VoiceSettings {
    emotion
        .and_then(|label| EMOTION_TABLE.iter().find(|(name, _)| *name == label))
        .map_or(NEUTRAL, |(_, settings)| *settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joy_maps_to_low_stability() {
        assert_eq!(
            voice_settings_for(Some("joy")),
            VoiceSettings {
                stability: 0.25,
                similarity_boost: 0.2,
            }
        );
    }

    #[test]
    fn sad_maps_to_high_stability() {
        assert_eq!(
            voice_settings_for(Some("sad")),
            VoiceSettings {
                stability: 0.6,
                similarity_boost: 0.0,
            }
        );
    }

    #[test]
    fn angry_maps_to_lowest_stability() {
        assert_eq!(
            voice_settings_for(Some("angry")),
            VoiceSettings {
                stability: 0.15,
                similarity_boost: 0.1,
            }
        );
    }

    #[test]
    fn unrecognized_label_falls_back_to_neutral() {
        assert_eq!(voice_settings_for(Some("melancholic")), NEUTRAL);
    }

    #[test]
    fn absent_label_falls_back_to_neutral() {
        assert_eq!(voice_settings_for(None), NEUTRAL);
    }

    #[test]
    fn serializes_to_provider_field_names() {
        let json = serde_json::to_value(voice_settings_for(Some("joy"))).unwrap();
        assert_eq!(json["stability"], 0.25);
        assert_eq!(json["similarity_boost"], 0.2);
    }
}
