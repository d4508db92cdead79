// tests/integration/output_formats.rs
use serde_json::Value;
use user_stats::config::OutputFormat;

use crate::common::{TempWorkspace, abc_users, run_captured};

fn json_for(selector: &str) -> Value {
    let ws = TempWorkspace::new();
    ws.write_csv(&abc_users().build());
    let (result, text) = run_captured(&ws.config(Some(selector), OutputFormat::Json));
    result.unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn summary_json_contains_all_sections() {
    let v = json_for("summary");
    assert_eq!(v["operation"], "summary");
    assert_eq!(v["total_users"], 3);
    assert_eq!(v["filtered_count"], 2);
    assert_eq!(v["average_age"], 32.0);
    assert_eq!(v["top_n"], 3);

    let countries: Vec<&str> =
        v["countries"].as_array().unwrap().iter().map(|e| e["key"].as_str().unwrap()).collect();
    assert_eq!(countries, ["USA", "Finland", "Brazil"]);

    let oldest: Vec<&str> =
        v["oldest"].as_array().unwrap().iter().map(|u| u["name"].as_str().unwrap()).collect();
    assert_eq!(oldest, ["C", "B", "A"]);

    assert_eq!(v["regions"][0]["key"], "North America");
    assert_eq!(v["regions"][0]["count"], 1);
}

#[test]
fn single_value_operations_in_json() {
    assert_eq!(json_for("filter")["filtered_count"], 2);
    assert_eq!(json_for("avg")["average_age"], 32.0);
    assert_eq!(json_for("top")["oldest"][0]["age"], "40");
    assert_eq!(json_for("group")["countries"][1]["key"], "Finland");
    assert_eq!(json_for("region")["regions"][2]["key"], "South America");
}

#[test]
fn diagnostics_stay_plain_text_in_json_mode() {
    let ws = TempWorkspace::new();
    let (result, text) = run_captured(&ws.config(Some("avg"), OutputFormat::Json));
    assert!(result.is_ok());
    assert!(text.starts_with("Could not find CSV at "));
}
