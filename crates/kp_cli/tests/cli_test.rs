use std::path::PathBuf;
use std::process::{Command, Output};

fn kp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kp"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run kp")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("kp_cli_{}_{name}", std::process::id()))
}

#[test]
fn aggregate_prints_canonical_form() {
    let out = kp(&["aggregate", "1, 5, [2]", "5, 10, [2, 6]"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "1, 5, 10, [2, 6]");
}

#[test]
fn star_lord_lookup() {
    let out = kp(&["star-lord", "Ashwini"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Ketu"));

    let out = kp(&["star-lord", "Nowhere"]);
    assert!(!out.status.success());
}

#[test]
fn stars_lists_sentinel_and_all_stars() {
    let out = kp(&["stars"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).lines().count(), 28);
}

#[test]
fn fill_then_derive() {
    let answers = temp_path("answers.json");
    let answers_arg = answers.to_string_lossy().into_owned();
    let out = kp(&[
        "fill",
        "--set",
        "q1_houseNo=5",
        "--set",
        "q2_subLord=Venus",
        "--set",
        "q3_subLordRetro=Direct",
        "--set",
        "q4_star=Ashwini",
        "--set",
        "q9_isSubLordConjunct=Yes",
        "--set",
        "q10_conjunctPlanets=Saturn, Sun",
        "--out",
        &answers_arg,
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&answers).unwrap()).unwrap();
    assert_eq!(saved["q5_starLord"], "Ketu");
    assert_eq!(saved["q10_conjunctPlanets"], serde_json::json!(["Sun", "Saturn"]));

    let out = kp(&["derive", "--answers", &answers_arg, "--json"]);
    assert!(out.status.success());
    let derived: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(derived["direct"][0]["planet"], "Venus");
    assert_eq!(derived["direct"][0]["designation"], "Sub Lord");
    assert_eq!(derived["retrograde"], serde_json::json!([]));

    let out = kp(&["questions", "--answers", &answers_arg]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("[q5_starLord] Ketu (auto)"), "{text}");
    assert!(text.contains("== Sub-Lord Conjunction Details =="));

    let _ = std::fs::remove_file(&answers);
}

#[test]
fn fill_rejects_derived_field() {
    let out = kp(&["fill", "--set", "q31_totalSig=1"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("read-only"));
}

#[test]
fn strict_flag_rejects_unknown_planet() {
    let out = kp(&["fill", "--strict", "--set", "q2_subLord=Pluto"]);
    assert!(!out.status.success());
    let out = kp(&["fill", "--set", "q2_subLord=Pluto"]);
    assert!(out.status.success());
}
