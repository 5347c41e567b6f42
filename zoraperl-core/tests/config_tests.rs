use zoraperl_core::{ConfigRecord, RecommendedApps, Theme, SETUP_VERSION};

#[test]
fn builder_stamps_version_and_date() {
    let record = ConfigRecord::builder()
        .username("ada")
        .language("English (US)")
        .finish();

    assert_eq!(record.setup_version, SETUP_VERSION);
    assert_eq!(record.username, "ada");
    // Defaults mirror the wizard's pre-selected widgets.
    assert_eq!(record.theme, Theme::Light);
    assert_eq!(record.region, "United States");
    assert!(!record.developer_mode);
}

#[test]
fn record_serializes_with_camel_case_keys() {
    let record = ConfigRecord::builder()
        .username("ada")
        .keyboard_layout("Canadian Multilingual")
        .theme(Theme::Dark)
        .has_password(true)
        .developer_mode(true)
        .finish();

    let v: serde_json::Value = serde_json::to_value(&record).unwrap();
    let obj = v.as_object().unwrap();

    for key in [
        "language",
        "region",
        "keyboardLayout",
        "theme",
        "username",
        "hasPassword",
        "selectedNetwork",
        "developerMode",
        "recommendedApps",
        "setupVersion",
        "setupDate",
    ] {
        assert!(obj.contains_key(key), "missing key {key}");
    }
    assert_eq!(v["theme"], "dark");
    assert_eq!(v["setupVersion"], "1.0");
}

#[test]
fn recommended_apps_round_trip_preserves_flags() {
    let apps = RecommendedApps {
        web_browser: true,
        music_player: true,
        dev_tools: false,
        office_suite: false,
    };
    let record = ConfigRecord::builder().username("ada").recommended_apps(apps).finish();

    let json = serde_json::to_string(&record).unwrap();
    let back: ConfigRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back.recommended_apps, apps);

    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["recommendedApps"]["webBrowser"], true);
    assert_eq!(v["recommendedApps"]["musicPlayer"], true);
    assert_eq!(v["recommendedApps"]["devTools"], false);
    assert_eq!(v["recommendedApps"]["officeSuite"], false);
}
