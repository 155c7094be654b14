use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn amountfmt(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("amountfmt").unwrap();
    cmd.env("AMOUNTFMT_CONFIG_DIR", config_dir.path())
        .env_remove("LC_ALL")
        .env_remove("LC_NUMERIC")
        .env_remove("LANG")
        .env_remove("AMOUNTFMT_LOG");
    cmd
}

#[test]
fn format_with_explicit_locale_and_currency() {
    let dir = TempDir::new().unwrap();
    amountfmt(&dir)
        .args(["format", "-1234.5", "--locale", "de-DE", "--currency", "EUR"])
        .assert()
        .success()
        .stdout("-1.234,50 €\n");
}

#[test]
fn format_uses_configured_defaults() {
    let dir = TempDir::new().unwrap();
    amountfmt(&dir)
        .args(["format", "-10"])
        .assert()
        .success()
        .stdout("-$10.00\n");

    amountfmt(&dir)
        .args(["format", "1234567.891", "--decimal", "--max-fraction", "3"])
        .assert()
        .success()
        .stdout("1,234,567.891\n");
}

#[test]
fn format_unknown_locale_still_prints() {
    let dir = TempDir::new().unwrap();
    amountfmt(&dir)
        .args(["format", "10", "--locale", "not-a-real-locale", "--decimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10"))
        .stderr(predicate::str::contains("locale fallback used"));
}

#[test]
fn parse_reads_locale_text() {
    let dir = TempDir::new().unwrap();
    amountfmt(&dir)
        .args(["parse", "-1.234,50 €", "--locale", "de-DE"])
        .assert()
        .success()
        .stdout("-1234.5\n");

    amountfmt(&dir)
        .args(["parse", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unparsable input"));
}

#[test]
fn normalize_arguments_and_stdin() {
    let dir = TempDir::new().unwrap();
    amountfmt(&dir)
        .args(["normalize", "1.234,56", "1,234.56", "n/a"])
        .assert()
        .success()
        .stdout("1234.56\n1234.56\nn/a\n");

    amountfmt(&dir)
        .arg("normalize")
        .write_stdin("1234,5\n 42 \n")
        .assert()
        .success()
        .stdout("1234.5\n42\n");
}

#[test]
fn mask_hides_digits() {
    let dir = TempDir::new().unwrap();
    amountfmt(&dir)
        .args(["mask", "-1234.5", "--locale", "de-DE", "--currency", "EUR"])
        .assert()
        .success()
        .stdout("-•••••••• €\n");
}

#[test]
fn privacy_mode_applies_to_next_format() {
    let dir = TempDir::new().unwrap();
    amountfmt(&dir)
        .args(["config", "privacy", "on"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Privacy mode enabled"));

    amountfmt(&dir)
        .args(["format", "1234.5"])
        .assert()
        .success()
        .stdout("$••••••••\n");

    amountfmt(&dir)
        .args(["config", "privacy", "off"])
        .assert()
        .success();

    amountfmt(&dir)
        .args(["format", "1234.5"])
        .assert()
        .success()
        .stdout("$1,234.50\n");
}

#[test]
fn config_set_locale_and_currency() {
    let dir = TempDir::new().unwrap();
    amountfmt(&dir)
        .args(["config", "set-locale", "de-DE"])
        .assert()
        .success();
    amountfmt(&dir)
        .args(["config", "set-currency", "eur"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Euro (EUR)"));

    amountfmt(&dir)
        .args(["format", "-1234.5"])
        .assert()
        .success()
        .stdout("-1.234,50 €\n");

    amountfmt(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Locale:          de-DE"))
        .stdout(predicate::str::contains("Currency:        EUR"));
}

#[test]
fn config_rejects_bad_values() {
    let dir = TempDir::new().unwrap();
    amountfmt(&dir)
        .args(["config", "set-locale", "not-a-real-locale"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid locale"));

    amountfmt(&dir)
        .args(["config", "fraction", "3", "1"])
        .assert()
        .failure();
}

#[test]
fn currency_list_and_show() {
    let dir = TempDir::new().unwrap();
    amountfmt(&dir)
        .args(["currency", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD"))
        .stdout(predicate::str::contains("Euro"));

    amountfmt(&dir)
        .args(["currency", "show", "EUR", "--locale", "de-DE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample:   -1.234,50 €"));

    amountfmt(&dir)
        .args(["currency", "show", "XYZ"])
        .assert()
        .failure();
}

#[test]
fn custom_currencies_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("extra.json");
    std::fs::write(
        &file,
        r#"[{"code":"GLD","symbol":"oz","display_name":"Gold Ounce","position":"trailing"}]"#,
    )
    .unwrap();

    amountfmt(&dir)
        .args(["config", "currencies-file"])
        .arg(&file)
        .assert()
        .success();

    amountfmt(&dir)
        .args(["format", "-1234.5", "--currency", "GLD"])
        .assert()
        .success()
        .stdout("-1,234.50 oz\n");
}
