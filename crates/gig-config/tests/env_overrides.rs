use figment::Jail;
use gig_config::GigConfig;

#[test]
fn env_sets_default_caller() {
    Jail::expect_with(|jail| {
        jail.set_env("GIGBOARD_GENERAL__CALLER", "rrkah-fqaaa");

        let config = GigConfig::load().expect("config loads");
        assert_eq!(
            config.general.caller().unwrap().map(|p| p.to_string()),
            Some("rrkah-fqaaa".to_string())
        );
        Ok(())
    });
}

#[test]
fn env_beats_project_config() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gigboard")?;
        jail.create_file(
            ".gigboard/config.toml",
            "[general]\ncaller = \"from-project\"\n",
        )?;
        jail.set_env("GIGBOARD_GENERAL__CALLER", "from-env");

        let config = GigConfig::load().expect("config loads");
        assert_eq!(config.general.caller, "from-env");
        Ok(())
    });
}
