use voxsuite::domain::{VoiceCatalog, VoiceGender};

#[test]
fn given_builtin_catalog_then_seven_languages_with_voices_per_gender() {
    let catalog = VoiceCatalog::builtin();
    assert_eq!(catalog.languages.len(), 7);

    for profile in &catalog.languages {
        assert!(
            !profile.voices_for(VoiceGender::Male).is_empty(),
            "no male voices for {}",
            profile.display_name
        );
        assert!(
            !profile.voices_for(VoiceGender::Female).is_empty(),
            "no female voices for {}",
            profile.display_name
        );
        assert!(!profile.language_code.is_empty());
        assert!(!profile.translate_code.is_empty());
    }
}

#[test]
fn given_language_queries_when_looking_up_then_display_name_and_codes_match() {
    let catalog = VoiceCatalog::builtin();

    let by_display = catalog.language("Spanish (Spain)").unwrap();
    let by_code = catalog.language("es-ES").unwrap();
    let by_translate = catalog.language("es").unwrap();

    assert_eq!(by_display.language_code, "es-ES");
    assert_eq!(by_code.translate_code, "es");
    assert_eq!(by_translate.display_name, "Spanish (Spain)");
}

#[test]
fn given_selection_when_resolving_then_voice_and_codes_returned() {
    let catalog = VoiceCatalog::builtin();

    let resolved = catalog.resolve("en-US", VoiceGender::Male, 0).unwrap();
    assert_eq!(resolved.voice_name, "en-US-Wavenet-A");
    assert_eq!(resolved.language_code, "en-US");
    assert_eq!(resolved.translate_code, "en");

    let resolved = catalog
        .resolve("Japanese (Japan)", VoiceGender::Female, 1)
        .unwrap();
    assert_eq!(resolved.voice_name, "ja-JP-Neural2-B");
}

#[test]
fn given_out_of_range_variant_when_resolving_then_none() {
    let catalog = VoiceCatalog::builtin();
    assert!(catalog.resolve("en-US", VoiceGender::Male, 99).is_none());
}

#[test]
fn given_unknown_language_when_resolving_then_none() {
    let catalog = VoiceCatalog::builtin();
    assert!(catalog.resolve("Klingon", VoiceGender::Male, 0).is_none());
    assert!(catalog.language("tlh").is_none());
}

#[test]
fn given_english_table_when_selecting_then_four_variants_per_gender() {
    let catalog = VoiceCatalog::builtin();

    assert_eq!(catalog.english_male.len(), 4);
    assert_eq!(catalog.english_female.len(), 4);

    let wavenet = catalog.english_variant(VoiceGender::Male, 1).unwrap();
    assert_eq!(wavenet.voice_name, "en-US-Wavenet-D");

    let studio = catalog.english_variant(VoiceGender::Female, 3).unwrap();
    assert_eq!(studio.voice_name, "en-US-Studio-O");

    assert!(catalog.english_variant(VoiceGender::Male, 4).is_none());
}
