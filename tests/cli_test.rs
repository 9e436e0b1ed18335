use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

const METHODS: &str = r#"[
    {"id": "PUNKTY", "discount": "15", "limit": "100.00"},
    {"id": "mZysk", "discount": "10", "limit": "180.00"},
    {"id": "BosBankrut", "discount": "5", "limit": "200.00"}
]"#;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-optimizer"));
    cmd.arg("tests/fixtures/orders.json")
        .arg("tests/fixtures/paymentmethods.json");

    // ORDER2 takes the combo, ORDER3 falls back to BosBankrut, ORDER1 and
    // ORDER4 find nothing left that fits.
    cmd.assert()
        .success()
        .stdout("PUNKTY 100.00\nmZysk 80.00\nBosBankrut 142.50\n")
        .stderr(predicate::str::contains("ORDER1"))
        .stderr(predicate::str::contains("ORDER4"))
        .stderr(predicate::str::contains("left unpaid"));

    Ok(())
}

#[test]
fn test_two_order_scenario() {
    let orders = common::write_json(
        r#"[
            {"id": "ORDER1", "value": "100.00", "promotions": ["mZysk"]},
            {"id": "ORDER2", "value": "200.00", "promotions": ["BosBankrut"]}
        ]"#,
    )
    .unwrap();
    let methods = common::write_json(METHODS).unwrap();

    let mut cmd = Command::new(cargo_bin!("payment-optimizer"));
    cmd.arg(orders.path()).arg(methods.path());

    cmd.assert()
        .success()
        .stdout("PUNKTY 100.00\nmZysk 170.00\n")
        .stderr(predicate::str::contains("left unpaid").not());
}

#[test]
fn test_output_is_deterministic() {
    let run = || {
        Command::new(cargo_bin!("payment-optimizer"))
            .arg("tests/fixtures/orders.json")
            .arg("tests/fixtures/paymentmethods.json")
            .output()
            .expect("Failed to execute command")
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_fail_on_unpaid() {
    let mut cmd = Command::new(cargo_bin!("payment-optimizer"));
    cmd.arg("tests/fixtures/orders.json")
        .arg("tests/fixtures/paymentmethods.json")
        .arg("--fail-on-unpaid");

    // The usage report is still printed before failing.
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("BosBankrut 142.50"))
        .stderr(predicate::str::contains("2 order(s) left unpaid"));
}

#[test]
fn test_fail_on_unpaid_passes_when_everything_is_paid() {
    let orders = common::write_json(
        r#"[{"id": "ORDER1", "value": "100.00", "promotions": ["mZysk"]}]"#,
    )
    .unwrap();
    let methods = common::write_json(METHODS).unwrap();

    let mut cmd = Command::new(cargo_bin!("payment-optimizer"));
    cmd.arg(orders.path())
        .arg(methods.path())
        .arg("--fail-on-unpaid");

    // Full points earns 15.00, beating the 10.00 from mZysk.
    cmd.assert().success().stdout("PUNKTY 85.00\n");
}

#[test]
fn test_assignments_file() {
    let dir = tempfile::tempdir().unwrap();
    let assignments = dir.path().join("assignments.csv");

    let mut cmd = Command::new(cargo_bin!("payment-optimizer"));
    cmd.arg("tests/fixtures/orders.json")
        .arg("tests/fixtures/paymentmethods.json")
        .arg("--assignments")
        .arg(&assignments);
    cmd.assert().success();

    let content = std::fs::read_to_string(&assignments).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        [
            "order,status,option,method,discount,points",
            "ORDER2,committed,combo,mZysk,20.00,100.00",
            "ORDER1,unpaid,,,,",
            "ORDER3,committed,promotion,BosBankrut,7.50,0.00",
            "ORDER4,unpaid,,,,",
        ]
    );
}

#[test]
fn test_custom_points_method() {
    let orders = common::write_json(r#"[{"id": "ORDER1", "value": "100.00"}]"#).unwrap();
    let methods = common::write_json(
        r#"[
            {"id": "BONUS", "discount": "20", "limit": "500.00"},
            {"id": "Visa", "discount": "0", "limit": "500.00"}
        ]"#,
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("payment-optimizer"));
    cmd.arg(orders.path())
        .arg(methods.path())
        .arg("--points-method")
        .arg("BONUS");

    cmd.assert().success().stdout("BONUS 80.00\n");
}
