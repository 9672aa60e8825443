// CLI integration tests for the demo and per-operation commands.
use std::process::Command;

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_arith");
    let mut command = Command::new(exe);
    command.env_remove("RUST_LOG");
    command
}

fn parse_json(output: &[u8]) -> Value {
    let text = std::str::from_utf8(output).expect("utf8");
    let line = text.lines().next().expect("json line");
    serde_json::from_str(line).expect("valid json")
}

#[test]
fn bare_invocation_prints_demo() {
    let output = cmd().output().expect("demo");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(
        stdout,
        "Hello, World!\n\
         Add 5 + 3= 8\n\
         Subtract 5 - 3= 2\n\
         Multiply 5 * 3= 15\n\
         Divide 5 / 3= 1.6666666666666667\n\
         Divide 5 / 0= Error: Division by zero\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn demo_subcommand_matches_bare_invocation() {
    let bare = cmd().output().expect("bare");
    let demo = cmd().arg("demo").output().expect("demo");
    assert!(demo.status.success());
    assert_eq!(bare.stdout, demo.stdout);
}

#[test]
fn greet_plain_and_json() {
    let plain = cmd().arg("greet").output().expect("greet");
    assert!(plain.status.success());
    assert_eq!(String::from_utf8_lossy(&plain.stdout), "Hello, World!\n");

    let json = cmd().args(["greet", "--json"]).output().expect("greet json");
    assert!(json.status.success());
    let value = parse_json(&json.stdout);
    assert_eq!(value["greeting"], "Hello, World!");
}

#[test]
fn operations_print_plain_results() {
    let cases: [(&str, &str, &str, &str); 5] = [
        ("add", "2", "2", "4"),
        ("subtract", "1", "8", "-7"),
        ("multiply", "-3", "-10", "30"),
        ("divide", "6", "3", "2"),
        ("divide", "3", "10", "0.3"),
    ];
    for (op, a, b, expected) in cases {
        let output = cmd().args([op, a, b]).output().expect(op);
        assert!(output.status.success(), "{op} {a} {b} failed");
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim_end(),
            expected,
            "{op} {a} {b}"
        );
    }
}

#[test]
fn divide_json_reports_operands_and_result() {
    let output = cmd()
        .args(["divide", "5", "3", "--json"])
        .output()
        .expect("divide");
    assert!(output.status.success());
    let value = parse_json(&output.stdout);
    assert_eq!(value["op"], "divide");
    assert_eq!(value["a"].as_f64(), Some(5.0));
    assert_eq!(value["b"].as_f64(), Some(3.0));
    assert_eq!(value["result"].as_f64(), Some(5.0 / 3.0));
}

#[test]
fn divide_by_zero_exit_code() {
    let output = cmd().args(["divide", "1", "0"]).output().expect("divide");
    assert_eq!(output.status.code().unwrap(), 3);
    assert!(output.stdout.is_empty());

    let err = parse_json(&output.stderr);
    let inner = err.get("error").expect("error object");
    assert_eq!(inner["kind"], "DivisionByZero");
    assert_eq!(inner["message"], "division by zero");
    assert_eq!(inner["op"], "divide");
}

#[test]
fn usage_exit_code() {
    let unknown = cmd().arg("modulo").output().expect("unknown");
    assert_eq!(unknown.status.code().unwrap(), 2);

    let missing = cmd().args(["add", "1"]).output().expect("missing operand");
    assert_eq!(missing.status.code().unwrap(), 2);
    let err = parse_json(&missing.stderr);
    assert_eq!(err["error"]["kind"], "Usage");
}

#[test]
fn help_exits_zero() {
    let output = cmd().arg("--help").output().expect("help");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("arith"));
}

#[test]
fn color_flag_does_not_change_json_layout() {
    let plain = cmd()
        .args(["divide", "5", "4", "--json"])
        .output()
        .expect("divide");
    let colored = cmd()
        .args(["--color", "always", "divide", "5", "4", "--json"])
        .output()
        .expect("divide with color");
    assert!(colored.status.success());
    assert_eq!(plain.stdout, colored.stdout);
    assert_eq!(String::from_utf8_lossy(&colored.stdout).lines().count(), 1);
    assert_eq!(parse_json(&colored.stdout)["result"].as_f64(), Some(1.25));
}
