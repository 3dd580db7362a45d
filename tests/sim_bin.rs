use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "7"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string());
    assert_ne!(v["winner"], v["loser"]);
    assert!(v["turns"].as_u64().unwrap() > 0);
    assert_eq!(v["player"]["name"], "Computer 1");
}

#[test]
fn sim_binary_is_reproducible_with_seed() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["--seed", "12345"])
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}
