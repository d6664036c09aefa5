use life_engine::{AgePalette, LifeConfig, LifeCore, LifeError};

#[test]
fn default_config_matches_the_classic_board() {
    let config = LifeConfig::default();
    assert_eq!((config.width, config.height), (32, 32));
    let core = LifeCore::from_config(&config).expect("config");
    assert_eq!(core.population(), 0);
    assert_eq!(core.palette(), AgePalette::default());
}

#[test]
fn palette_overrides_are_applied() {
    let json = r#"{
        "width": 4, "height": 4,
        "palette": { "alive_rgb": [255, 0, 0], "min_alpha": 10, "fade_step": 100 }
    }"#;
    let mut core = LifeCore::from_config_json(json).expect("config");
    core.set_alive(0, 0, true).expect("in range");
    assert_eq!(core.extract_colors()[0], 0xFF00_00FF);

    let palette = core.palette();
    assert_eq!(palette.alpha_for_streak(1), 155);
    assert_eq!(palette.alpha_for_streak(3), 10);
}

#[test]
fn invalid_config_is_rejected() {
    assert_eq!(
        LifeCore::from_config_json(r#"{ "height": 0 }"#).unwrap_err(),
        LifeError::InvalidDimension { width: 32, height: 0 }
    );
    let inverted = r#"{ "palette": { "min_alpha": 200, "max_alpha": 100 } }"#;
    assert!(matches!(LifeCore::from_config_json(inverted), Err(LifeError::Config(_))));
    assert!(matches!(LifeCore::from_config_json(r#""nope""#), Err(LifeError::Config(_))));
}
