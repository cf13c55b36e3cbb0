use std::path::PathBuf;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gate-activity"))
}

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("gate-activity-cli-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_full_run() {
    let netlist = scratch_file("run-netlist.txt", "AND c a b\nNOT d c\n");
    let stimulus = scratch_file("run-stimulus.txt", "0.5 0.5 0.5\n1 1 1\n");

    let output = bin()
        .arg(&netlist)
        .arg(&stimulus)
        .arg("200")
        .args(["--seed", "7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Truth table verification:"));
    assert!(stdout.contains("a=1, b=1 => c=1, d=0"));
    assert!(stdout.contains("with inputs (a=1, b=1):\nc: 0\nd: 0\n"));
    assert_eq!(stdout.matches("with inputs").count(), 2);

    std::fs::remove_file(netlist).unwrap();
    std::fs::remove_file(stimulus).unwrap();
}

#[test]
fn test_unreadable_stimulus() {
    let netlist = scratch_file("bad-stim-netlist.txt", "NOT d a\n");
    let missing = std::env::temp_dir().join("gate-activity-cli-missing-stimulus.txt");

    let output = bin().arg(&netlist).arg(&missing).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "nothing may be simulated");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("stimulus"), "{stderr}");

    std::fs::remove_file(netlist).unwrap();
}

#[test]
fn test_malformed_netlist() {
    let netlist = scratch_file("bad-netlist.txt", "NOT d a\nNAND e a b\n");
    let stimulus = scratch_file("bad-netlist-stimulus.txt", "0.5 0.5 0.5\n");

    let output = bin().arg(&netlist).arg(&stimulus).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"), "{stderr}");

    std::fs::remove_file(netlist).unwrap();
    std::fs::remove_file(stimulus).unwrap();
}

#[test]
fn test_usage() {
    let output = bin().arg("only-one-path.txt").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"), "{stderr}");

    let output = bin().args(["a", "b", "10", "extra"]).output().unwrap();
    assert!(!output.status.success());
}
