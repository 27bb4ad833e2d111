use std::process::Command;

fn run_sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary")
}

#[test]
fn sim_binary_reports_winner() {
    let output = run_sim(&[
        "7,0", "0,0", "7,1", "7,1", "0,1", "7,2", "0,2", "7,3", "0,3", "7,4",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["winner"], "X");
    assert_eq!(v["moves"], 9);
    assert_eq!(v["rejected"], 1);
    assert_eq!(v["board"]["cells"][7][4], "X");
    assert_eq!(v["board"]["cells"][0][4], "Empty");
}

#[test]
fn sim_binary_short_script_stays_in_progress() {
    let output = run_sim(&["7,7", "8,8"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["status"], "InProgress");
    assert!(v["winner"].is_null());
    assert_eq!(v["moves"], 2);
}

#[test]
fn sim_binary_rejects_malformed_move() {
    let output = run_sim(&["7,x"]);
    assert!(!output.status.success());
}
