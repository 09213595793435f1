use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_starting_hand_odds"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_missing_trials() {
    let output = run(&[]);
    assert_eq!(Some(1), output.status.code());
    assert!(stderr(&output).contains("ERROR: Supply a number of simulations."));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_blank_trials_is_missing() {
    for arg in ["", "   "] {
        let output = run(&["--hands", "AA", arg]);
        assert_eq!(Some(1), output.status.code(), "{arg:?}");
        assert!(stderr(&output).contains("ERROR: Supply a number of simulations."));
    }
}

#[test]
fn test_bad_trials() {
    for arg in ["0", "-5", "1.5", "1e3", "many"] {
        let output = run(&[arg]);
        assert_eq!(Some(2), output.status.code(), "{arg}");
        assert!(
            stderr(&output).contains("ERROR: Number of simulations must be greater than 0."),
            "{arg}"
        );
    }
}

#[test]
fn test_bad_tasks() {
    let output = run(&["-j", "0", "10"]);
    assert_eq!(Some(2), output.status.code());
}

#[test]
fn test_unknown_hand() {
    let output = run(&["--hands", "AA,ZZ", "10"]);
    assert_eq!(Some(2), output.status.code());
    assert!(stderr(&output).contains("ZZ"));
}

#[test]
fn test_failure_reported_once() {
    let output = Command::new(env!("CARGO_BIN_EXE_starting_hand_odds"))
        .args(["--hands", "ZZ", "10"])
        .env("RUST_LOG", "trace")
        .output()
        .unwrap();
    assert_eq!(Some(2), output.status.code());
    assert_eq!(1, stderr(&output).matches("ZZ").count());
}

#[test]
fn test_full_table() {
    let output = run(&["--seed", "420", "-j", "4", "2"]);
    assert_eq!(Some(0), output.status.code());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!("Hole\tPlays\tWon\tTied\tLost\t|\tWin%\tTie%\tLoss%", lines[0]);
    assert_eq!(170, lines.len());
    for line in &lines[1..] {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(9, fields.len(), "{line}");
        assert_eq!("2", fields[1]);
        assert_eq!("|", fields[5]);
    }
}

#[test]
fn test_seeded_runs_repeat() {
    let args = ["--seed", "7", "--hands", "AA,KQs,72o", "50"];
    let one = run(&args);
    let two = run(&["-j", "3", "--seed", "7", "--hands", "AA,KQs,72o", "50"]);
    assert_eq!(Some(0), one.status.code());
    assert_eq!(one.stdout, two.stdout);
    assert_eq!(4, String::from_utf8_lossy(&one.stdout).lines().count());
}

#[cfg(feature = "serde")]
#[test]
fn test_json_output() {
    let output = run(&["--format", "json", "--hands", "AA", "5"]);
    assert_eq!(Some(0), output.status.code());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_start().starts_with('{'));
    assert!(stdout.contains("\"hole\": \"AA\""));
}
