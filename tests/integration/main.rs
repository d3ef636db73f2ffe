//! Integration tests for psoseed

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const DEFAULT_BYTES: &[u8] = b"default\x00cache\x01";
    const LEGACY_BYTES: &[u8] = b"legacy\x00cache\x02";

    /// Command isolated from the user's config and environment
    fn psoseed(home: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("psoseed");
        cmd.env("PSOSEED_CONFIG", home.join("config.toml"))
            .env_remove("PSOSEED_ASSETS_DIR")
            .env_remove("PSOSEED_DATA_DIR")
            .env_remove("PSOSEED_DEVICE");
        cmd
    }

    struct Bundle {
        dir: TempDir,
    }

    impl Bundle {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let assets = dir.path().join("assets");
            fs::create_dir_all(&assets).unwrap();
            fs::write(assets.join("artifact_default.bin"), DEFAULT_BYTES).unwrap();
            fs::write(assets.join("artifact_legacy.bin"), LEGACY_BYTES).unwrap();
            fs::create_dir_all(dir.path().join("data")).unwrap();
            Self { dir }
        }

        fn home(&self) -> &Path {
            self.dir.path()
        }

        fn assets(&self) -> PathBuf {
            self.dir.path().join("assets")
        }

        fn data(&self) -> PathBuf {
            self.dir.path().join("data")
        }

        fn artifact(&self) -> PathBuf {
            self.data().join("cache").join("vulkan_pso_cache.bin")
        }

        fn seed(&self, device: &str) -> Command {
            let mut cmd = psoseed(self.home());
            cmd.arg("seed")
                .arg("--assets-dir")
                .arg(self.assets())
                .arg("--data-dir")
                .arg(self.data())
                .arg("--device")
                .arg(device);
            cmd
        }
    }

    #[test]
    fn help_displays() {
        let bundle = Bundle::new();
        psoseed(bundle.home())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Vulkan PSO cache seeding"));
    }

    #[test]
    fn version_displays() {
        let bundle = Bundle::new();
        psoseed(bundle.home())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("psoseed"));
    }

    #[test]
    fn launch_args_appends_flag() {
        let bundle = Bundle::new();
        psoseed(bundle.home())
            .args(["launch-args", "--", "-xr-mode"])
            .assert()
            .success()
            .stdout("-xr-mode -job-worker-count 4\n");
    }

    #[test]
    fn launch_args_keeps_existing_flag() {
        let bundle = Bundle::new();
        psoseed(bundle.home())
            .args(["launch-args", "--", "-job-worker-count 2"])
            .assert()
            .success()
            .stdout("-job-worker-count 2\n");
    }

    #[test]
    fn launch_args_without_input() {
        let bundle = Bundle::new();
        psoseed(bundle.home())
            .arg("launch-args")
            .assert()
            .success()
            .stdout(" -job-worker-count 4\n");
    }

    #[test]
    fn seed_copies_legacy_variant() {
        let bundle = Bundle::new();
        bundle
            .seed("hollywood")
            .assert()
            .success()
            .stdout(predicate::str::contains("Seeded"));

        assert_eq!(fs::read(bundle.artifact()).unwrap(), LEGACY_BYTES);
    }

    #[test]
    fn seed_copies_default_variant() {
        let bundle = Bundle::new();
        bundle.seed("eureka").assert().success();

        assert_eq!(fs::read(bundle.artifact()).unwrap(), DEFAULT_BYTES);
    }

    #[test]
    fn seed_preserves_existing_artifact() {
        let bundle = Bundle::new();
        fs::create_dir_all(bundle.artifact().parent().unwrap()).unwrap();
        fs::write(bundle.artifact(), b"warm").unwrap();

        bundle
            .seed("eureka")
            .assert()
            .success()
            .stdout(predicate::str::contains("Already present"));

        assert_eq!(fs::read(bundle.artifact()).unwrap(), b"warm");
    }

    #[test]
    fn seed_missing_asset_still_succeeds() {
        let bundle = Bundle::new();
        fs::remove_file(bundle.assets().join("artifact_default.bin")).unwrap();

        bundle
            .seed("eureka")
            .assert()
            .success()
            .stdout(predicate::str::contains("Seeding skipped"));

        assert!(!bundle.artifact().exists());
    }

    #[test]
    fn seed_json_reports_outcome() {
        let bundle = Bundle::new();
        let output = bundle.seed("hollywood").args(["--format", "json"]).output().unwrap();
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["variant"], "legacy");
        assert_eq!(report["asset"], "artifact_legacy.bin");
        assert_eq!(report["result"]["outcome"], "created");
    }

    #[test]
    fn status_reports_variant() {
        let bundle = Bundle::new();
        psoseed(bundle.home())
            .arg("status")
            .arg("--assets-dir")
            .arg(bundle.assets())
            .arg("--data-dir")
            .arg(bundle.data())
            .args(["--device", "hollywood"])
            .assert()
            .success()
            .stdout(predicate::str::contains("artifact_legacy.bin"))
            .stdout(predicate::str::contains("Not seeded"));

        assert!(!bundle.artifact().exists());
    }

    #[test]
    fn device_from_config_file() {
        let bundle = Bundle::new();
        fs::write(
            bundle.home().join("config.toml"),
            "[device]\nidentity = \"hollywood\"\n",
        )
        .unwrap();

        psoseed(bundle.home())
            .arg("seed")
            .arg("--assets-dir")
            .arg(bundle.assets())
            .arg("--data-dir")
            .arg(bundle.data())
            .assert()
            .success();

        assert_eq!(fs::read(bundle.artifact()).unwrap(), LEGACY_BYTES);
    }

    #[test]
    fn invalid_config_fails() {
        let bundle = Bundle::new();
        fs::write(bundle.home().join("config.toml"), "[launch\n").unwrap();

        psoseed(bundle.home())
            .arg("launch-args")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn config_path() {
        let bundle = Bundle::new();
        psoseed(bundle.home())
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let bundle = Bundle::new();
        psoseed(bundle.home())
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[launch]"));
    }
}
