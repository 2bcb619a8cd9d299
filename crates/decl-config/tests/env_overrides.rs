use decl_config::DeclConfig;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.set_env("DECLMGR_PRODUCER__PATH", "/usr/local/bin/contextgen");
        jail.set_env("DECLMGR_PRODUCER__PROJECT_TIMEOUT_SECS", "45");
        jail.set_env("DECLMGR_OUTPUT__PROJECT", "decls.json");

        let config = DeclConfig::load(jail.directory()).expect("config loads");
        assert_eq!(config.producer.path, "/usr/local/bin/contextgen");
        assert_eq!(config.producer.project_timeout_secs, 45);
        assert_eq!(config.output.project, "decls.json");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        std::fs::create_dir_all(jail.directory().join(".declmgr"))
            .map_err(|e| e.to_string())?;
        jail.create_file(".declmgr/config.toml", "[producer]\nname = \"from-file\"\n")?;
        jail.set_env("DECLMGR_PRODUCER__NAME", "from-env");

        let config = DeclConfig::load(jail.directory()).expect("config loads");
        assert_eq!(config.producer.name, "from-env");
        Ok(())
    });
}

#[test]
fn exclude_list_parses_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.set_env("DECLMGR_PRODUCER__EXCLUDE", "[vendor, dist]");

        let config = DeclConfig::load(jail.directory()).expect("config loads");
        assert_eq!(config.producer.exclude, ["vendor", "dist"]);
        Ok(())
    });
}
