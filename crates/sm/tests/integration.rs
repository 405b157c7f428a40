//! End-to-end CLI integration tests for the `sm` binary.
//!
//! Every test runs the binary in its own temporary directory with the
//! `SHEETMASTER_*` environment cleared, so no real configuration leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a `Command` targeting the cargo-built `sm` binary, isolated in `dir`.
fn sm(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sm").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("SHEETMASTER_DIR")
        .env_remove("SHEETMASTER_BASE_URL")
        .env_remove("SHEETMASTER_SITE_NAME")
        .env_remove("SHEETMASTER_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .env("NO_COLOR", "1");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// Catalog browsing
// ---------------------------------------------------------------------------

#[test]
fn list_shows_whole_catalog() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("SLUG"))
        .stdout(predicate::str::contains("vlookup"))
        .stdout(predicate::str::contains("countblank"));

    let list = json_stdout(sm(&tmp).args(["list", "--json"]));
    let arr = list.as_array().unwrap();
    assert_eq!(arr.len(), 50);
    assert_eq!(arr[0]["slug"], "vlookup");
    assert_eq!(arr[0]["category"], "Lookup");
}

#[test]
fn list_by_category() {
    let tmp = TempDir::new().unwrap();
    let list = json_stdout(sm(&tmp).args(["list", "--category", "lookup", "--json"]));
    let slugs: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["vlookup", "index-match", "xlookup"]);
}

#[test]
fn list_unknown_category_fails() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["list", "--category", "finance"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown category: finance"));
}

#[test]
fn search_reports_counts() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["search", "vlook"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index-match"))
        .stdout(predicate::str::contains("Showing 2 of 50 formulas"));
}

#[test]
fn search_without_matches() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["search", "zzzz-nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No formulas found"))
        .stdout(predicate::str::contains("Showing 0 of 50 formulas"));
}

#[test]
fn show_lists_inputs_and_template() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["show", "vlookup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INPUTS"))
        .stdout(predicate::str::contains("lookup_value"))
        .stdout(predicate::str::contains(
            "Template: =VLOOKUP(lookup_value, table_array, col_index, FALSE)",
        ));
}

#[test]
fn show_json() {
    let tmp = TempDir::new().unwrap();
    let view = json_stdout(sm(&tmp).args(["show", "sumif", "--json"]));
    assert_eq!(view["function"], "SUMIF");
    let inputs = view["inputs"].as_array().unwrap();
    assert_eq!(inputs.last().unwrap()["id"], "sum_range");
    assert_eq!(inputs.last().unwrap()["optional"], true);
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[test]
fn generate_with_set() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args([
            "generate",
            "vlookup",
            "--set",
            "lookup_value=A2",
            "--set",
            "table_array=Sheet2!A:E",
            "--set",
            "col_index=3",
            "--set",
            "range_lookup=TRUE",
        ])
        .assert()
        .success()
        .stdout("=VLOOKUP(A2, Sheet2!A:E, 3, TRUE)\n");
}

#[test]
fn generate_with_placeholders() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["generate", "sumif"])
        .assert()
        .success()
        .stdout("=SUMIF(range, criteria)\n");
}

#[test]
fn generate_from_params_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("inputs.toml");
    std::fs::write(&path, "text = \"B2\"\n").unwrap();
    sm(&tmp)
        .args(["generate", "upper", "--params", "inputs.toml"])
        .assert()
        .success()
        .stdout("=UPPER(B2)\n");
}

#[test]
fn generate_json() {
    let tmp = TempDir::new().unwrap();
    let out = json_stdout(sm(&tmp).args(["generate", "now", "--json"]));
    assert_eq!(out["slug"], "now");
    assert_eq!(out["formula"], "=NOW()");
}

#[test]
fn generate_unknown_slug() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["generate", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr("Error: formula 'nope' not found\n");
}

#[test]
fn generate_unknown_slug_json() {
    let tmp = TempDir::new().unwrap();
    let output = sm(&tmp).args(["generate", "nope", "--json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"], "formula 'nope' not found");
}

#[test]
fn generate_rejects_bad_assignment() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["generate", "sum", "--set", "range"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected ID=VALUE"));
}

// ---------------------------------------------------------------------------
// Solutions
// ---------------------------------------------------------------------------

#[test]
fn solution_list_json() {
    let tmp = TempDir::new().unwrap();
    let list = json_stdout(sm(&tmp).args(["solution", "list", "--json"]));
    let arr = list.as_array().unwrap();
    assert_eq!(arr.len(), 4);
    assert_eq!(arr[2]["slug"], "loan-calculator");
    assert_eq!(arr[2]["tools"].as_array().unwrap().len(), 3);
    assert_eq!(arr[2]["scenarios"][0]["values"]["principal"], "350000");
}

#[test]
fn solution_show_text() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["solution", "show", "hr-time-calculator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TOOLS"))
        .stdout(predicate::str::contains("networkdays"))
        .stdout(predicate::str::contains("SCENARIOS"))
        .stdout(predicate::str::contains("employee-tenure"));
}

#[test]
fn solution_scenario_default_tool() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["solution", "generate", "loan-calculator", "--scenario", "starter-home"])
        .assert()
        .success()
        .stdout("=PMT(6.875%/12, 30*12, -350000)\n");
}

#[test]
fn solution_scenario_with_override() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args([
            "solution",
            "generate",
            "loan-calculator",
            "--tool",
            "personal-loan",
            "--scenario",
            "debt-consolidation",
            "--set",
            "principal=20000",
        ])
        .assert()
        .success()
        .stdout("=PMT(11.5%/12, 36, -20000)\n");
}

#[test]
fn solution_generate_json_names_tool() {
    let tmp = TempDir::new().unwrap();
    let out = json_stdout(sm(&tmp).args([
        "solution",
        "generate",
        "loan-calculator",
        "--tool",
        "car-loan",
        "--scenario",
        "new-car",
        "--json",
    ]));
    assert_eq!(out["solution"], "loan-calculator");
    assert_eq!(out["tool"], "car-loan");
    assert_eq!(out["formula_slug"], "pmt");
    assert_eq!(out["formula"], "=PMT(5.49%/12, 5*12, -32000)");
    assert!(out.get("slug").is_none());
}

#[test]
fn solution_unknown_tool_and_scenario() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["solution", "generate", "loan-calculator", "--tool", "lease"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "tool 'lease' not found in solution 'loan-calculator'",
        ));
    sm(&tmp)
        .args(["solution", "generate", "loan-calculator", "--scenario", "yacht"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "scenario 'yacht' not found in solution 'loan-calculator'",
        ));
    sm(&tmp)
        .args(["solution", "show", "payroll"])
        .assert()
        .failure()
        .stderr("Error: solution 'payroll' not found\n");
}

// ---------------------------------------------------------------------------
// Site layer
// ---------------------------------------------------------------------------

#[test]
fn check_passes() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("50 formulas and 4 solutions passed"));

    let report = json_stdout(sm(&tmp).args(["check", "--json"]));
    assert_eq!(report["issues"].as_array().unwrap().len(), 0);
}

#[test]
fn sitemap_to_stdout() {
    let tmp = TempDir::new().unwrap();
    let output = sm(&tmp)
        .args(["sitemap", "--date", "2026-03-01"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let xml = String::from_utf8(output.stdout).unwrap();
    assert!(xml.starts_with("<?xml"));
    assert_eq!(xml.matches("<url>").count(), 3 + 50 + 4);
    assert!(xml.contains("<loc>https://www.getsheetmaster.com/formulas/vlookup</loc>"));
    assert!(xml.contains("<loc>https://www.getsheetmaster.com/solutions/loan-calculator</loc>"));
    assert!(xml.contains("<lastmod>2026-03-01</lastmod>"));
}

#[test]
fn sitemap_honors_env_base_url() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .env("SHEETMASTER_BASE_URL", "https://sheets.example.org/")
        .args(["sitemap", "--date", "2026-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<loc>https://sheets.example.org/privacy</loc>"));
}

#[test]
fn sitemap_to_file() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["sitemap", "--output", "sitemap.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 57 URLs to sitemap.xml"));
    let xml = std::fs::read_to_string(tmp.path().join("sitemap.xml")).unwrap();
    assert!(xml.ends_with("</urlset>\n"));
}

#[test]
fn sitemap_rejects_bad_date() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["sitemap", "--date", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date 'yesterday'"));
}

#[test]
fn meta_for_formula() {
    let tmp = TempDir::new().unwrap();
    let head = json_stdout(sm(&tmp).args(["meta", "vlookup", "--json"]));
    assert_eq!(
        head["meta"]["title"],
        "Free VLOOKUP Formula Generator | Excel & Google Sheets"
    );
    assert_eq!(head["structured_data"].as_array().unwrap().len(), 2);

    sm(&tmp)
        .args(["meta", "vlookup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Breadcrumbs: Formulas > VLOOKUP"))
        .stdout(predicate::str::contains("<script type=\"application/ld+json\">"));
}

#[test]
fn meta_for_home_page() {
    let tmp = TempDir::new().unwrap();
    let head = json_stdout(sm(&tmp).args(["meta", "--json"]));
    assert_eq!(
        head["meta"]["title"],
        "SheetMaster - Excel & Google Sheets Formula Generators"
    );
    assert_eq!(head["meta"]["canonical"], "https://www.getsheetmaster.com");
}

#[test]
fn meta_for_unknown_solution() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["meta", "--solution", "payroll"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solution Not Found"))
        .stdout(predicate::str::contains("<script").not());
}

#[test]
fn og_builds_and_parses_cards() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["og", "--title", "IF Formula Generator", "--description", "a & b"])
        .assert()
        .success()
        .stdout(
            "https://www.getsheetmaster.com/api/og?title=IF%20Formula%20Generator&description=a%20%26%20b\n",
        );
    sm(&tmp)
        .args(["og", "--query", "title="])
        .assert()
        .success()
        .stdout("SheetMaster\nFree Excel & Google Sheets Formula Generators\n");
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_round_trip() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["config", "get", "base_url"])
        .assert()
        .success()
        .stdout("https://www.getsheetmaster.com\n");

    sm(&tmp).args(["config", "init"]).assert().success();
    assert!(tmp.path().join(".sheetmaster/config.yaml").is_file());

    sm(&tmp)
        .args(["config", "set", "base_url", "https://sheets.example.org"])
        .assert()
        .success()
        .stdout("Set base_url = https://sheets.example.org\n");
    sm(&tmp)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_url = https://sheets.example.org"))
        .stdout(predicate::str::contains("site_name = SheetMaster"));

    let head = json_stdout(sm(&tmp).args(["meta", "sum", "--json"]));
    assert_eq!(
        head["meta"]["canonical"],
        "https://sheets.example.org/formulas/sum"
    );
}

#[test]
fn config_set_validates() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .args(["config", "set", "site_name", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no .sheetmaster directory found"));

    sm(&tmp).args(["config", "init", "--quiet"]).assert().success().stdout("");
    sm(&tmp)
        .args(["config", "set", "base_url", "ftp://nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base_url"));
    sm(&tmp)
        .args(["config", "set", "theme", "dark"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// Housekeeping
// ---------------------------------------------------------------------------

#[test]
fn version_and_completion() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sm version "));
    let info = json_stdout(sm(&tmp).args(["version", "--json"]));
    assert!(info["version"].is_string());
    assert_eq!(info["formulas"], 50);
    assert_eq!(info["solutions"], 4);

    sm(&tmp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_sm"));
}

#[test]
fn no_command_prints_help() {
    let tmp = TempDir::new().unwrap();
    sm(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: sm"));
}
