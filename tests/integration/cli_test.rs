use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn get_orbit_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_orbit"))
}

fn run_orbit(args: &[&str]) -> Output {
    run_orbit_with_env(args, vec![])
}

fn run_orbit_with_env(args: &[&str], env_vars: Vec<(&str, &str)>) -> Output {
    let mut cmd = Command::new(get_orbit_binary());
    cmd.args(args)
        .env("NO_COLOR", "1")
        .env_remove("ORBIT_CATALOG")
        .env_remove("ORBIT_TICK_INTERVAL_MS")
        .env_remove("RUST_LOG")
        .env_remove("ORBIT_LOG_LEVEL");
    for (key, value) in env_vars {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute orbit command")
}

fn output_to_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_to_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_catalog(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path.display().to_string()
}

mod version_command_tests {
    use super::*;

    #[test]
    fn test_version_command_basic() {
        let output = run_orbit(&["version"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "version command should succeed");
        assert!(stdout.contains("orbit"), "output should contain 'orbit'");
        assert!(stdout.contains("0.1.0"), "output should contain version number");
    }

    #[test]
    fn test_version_command_detailed() {
        let output = run_orbit(&["version", "--detailed"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "version --detailed should succeed");
        assert!(stdout.contains("Version"));
        assert!(stdout.contains("Apache-2.0"));
        assert!(stdout.contains("travel-site"));
    }
}

mod help_tests {
    use super::*;

    #[test]
    fn test_help_lists_commands() {
        let output = run_orbit(&["--help"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        for command in ["agents", "scenarios", "play", "validate", "config", "version"] {
            assert!(stdout.contains(command), "help should mention '{}'", command);
        }
    }

    #[test]
    fn test_invalid_command() {
        let output = run_orbit(&["teleport"]);
        assert!(!output.status.success());
    }

    #[test]
    fn test_verbose_flag_accepted() {
        let output = run_orbit(&["-v", "version"]);
        assert!(output.status.success());
    }
}

mod catalog_command_tests {
    use super::*;

    #[test]
    fn test_agents_table() {
        let output = run_orbit(&["agents"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Orchestrator"));
        assert!(stdout.contains("Delivery-Map"));
        assert!(stdout.contains("Total: 9 agents"));
    }

    #[test]
    fn test_agents_json() {
        let output = run_orbit(&["agents", "--format", "json"]);
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

        let agents = json.as_array().unwrap();
        assert_eq!(agents.len(), 9);
        assert_eq!(agents[0]["id"], "orchestrator");
        assert_eq!(agents[0]["color"], "#7c3aed");
    }

    #[test]
    fn test_scenarios_list_default_action() {
        let output = run_orbit(&["scenarios"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("travel-site"));
        assert!(stdout.contains("research-report"));
        assert!(stdout.contains("food-delivery"));
    }

    #[test]
    fn test_scenarios_show() {
        let output = run_orbit(&["scenarios", "show", "food-delivery"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Live delivery routes"));
        assert!(stdout.contains("Integration and e2e tests"));
    }

    #[test]
    fn test_scenarios_show_unknown_fails_with_code() {
        let output = run_orbit(&["scenarios", "show", "moon-base"]);
        let stderr = stderr_to_string(&output);

        assert!(!output.status.success());
        assert!(stderr.contains("E3001"));
        assert!(stderr.contains("Suggestion"));
    }
}

mod play_command_tests {
    use super::*;

    #[test]
    fn test_play_reveals_all_steps_in_order() {
        let output = run_orbit(&["play", "travel-site", "--interval-ms", "5"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        let first = stdout.find("Design hero + search UI").unwrap();
        let last = stdout.find("Report & auto-fix").unwrap();
        assert!(first < last);
        assert!(stdout.contains("[6/6]"));
        assert!(stdout.contains("Delivered in 6 steps"));
    }

    #[test]
    fn test_play_json_stream() {
        let output = run_orbit(&["play", "research-report", "-i", "5", "--format", "json"]);
        let stdout = output_to_string(&output);
        assert!(output.status.success());

        let kinds: Vec<String> = stdout
            .lines()
            .map(|line| {
                let update: serde_json::Value = serde_json::from_str(line).unwrap();
                update["kind"]["type"].as_str().unwrap().to_string()
            })
            .collect();

        assert_eq!(kinds.iter().filter(|k| *k == "advanced").count(), 5);
        assert_eq!(kinds.last().map(String::as_str), Some("completed"));
    }

    #[test]
    fn test_play_unknown_scenario() {
        let output = run_orbit(&["play", "moon-base", "-i", "5"]);
        assert!(!output.status.success());
        assert!(stderr_to_string(&output).contains("E3001"));
    }

    #[test]
    fn test_play_uses_env_interval() {
        let output = run_orbit_with_env(
            &["play", "food-delivery"],
            vec![("ORBIT_TICK_INTERVAL_MS", "5")],
        );
        assert!(output.status.success());
        assert!(output_to_string(&output).contains("one every 5 ms"));
    }
}

mod validate_command_tests {
    use super::*;

    #[test]
    fn test_validate_builtin() {
        let output = run_orbit(&["validate"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Catalog is valid: 9 agents, 3 scenarios"));
    }

    #[test]
    fn test_validate_good_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            dir.path(),
            "ok.yaml",
            "scenarios:\n  - id: tiny\n    label: Tiny\n    steps:\n      - { from: orchestrator, to: writer, note: Write }\n",
        );

        let output = run_orbit(&["validate", &path]);
        assert!(output.status.success());
        assert!(output_to_string(&output).contains("tiny"));
    }

    #[test]
    fn test_validate_dangling_reference() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            dir.path(),
            "bad.yaml",
            "scenarios:\n  - id: bad\n    label: Bad\n    steps:\n      - { from: orchestrator, to: ghost, note: Boo }\n",
        );

        let output = run_orbit(&["validate", &path]);
        let stderr = stderr_to_string(&output);
        assert!(!output.status.success());
        assert!(stderr.contains("E1001"));
        assert!(stderr.contains("ghost"));
    }

    #[test]
    fn test_catalog_flag_applies_to_play() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            dir.path(),
            "custom.json",
            r#"{"scenarios":[{"id":"solo","label":"Solo run","steps":[{"from":"backend","to":"testing","note":"Ship it"}]}]}"#,
        );

        let output = run_orbit(&["--catalog", &path, "play", "-i", "5"]);
        let stdout = output_to_string(&output);
        assert!(output.status.success());
        assert!(stdout.contains("Solo run"));
        assert!(stdout.contains("Ship it"));
    }
}

mod logging_tests {
    use super::*;

    #[test]
    fn test_rust_log_off_is_accepted() {
        let output = run_orbit_with_env(&["scenarios", "list"], vec![("RUST_LOG", "off")]);
        assert!(output.status.success(), "{}", stderr_to_string(&output));
        assert!(output_to_string(&output).contains("research-report"));
    }

    #[test]
    fn test_target_only_level_is_accepted() {
        let output = run_orbit_with_env(&["agents"], vec![("ORBIT_LOG_LEVEL", "orbit_core")]);
        assert!(output.status.success(), "{}", stderr_to_string(&output));
    }

    #[test]
    fn test_malformed_level_is_rejected() {
        let output = run_orbit_with_env(&["agents"], vec![("ORBIT_LOG_LEVEL", "orbit_core=loud")]);
        assert!(!output.status.success());
        let stderr = stderr_to_string(&output);
        assert!(stderr.contains("E2002"));
        assert!(stderr.contains("logging.level"));
    }

    #[test]
    fn test_reported_errors_are_logged_when_verbose() {
        let output = run_orbit(&["--verbose", "play", "moon-base", "-i", "5"]);
        assert!(!output.status.success());
        let stderr = stderr_to_string(&output);
        assert!(stderr.contains("Rejected request"));
        assert!(stderr.contains("E3001"));

        let quiet = run_orbit(&["play", "moon-base", "-i", "5"]);
        assert!(!stderr_to_string(&quiet).contains("Rejected request"));
    }
}
