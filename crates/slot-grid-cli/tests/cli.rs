//! Integration tests for the `slotgrid` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn slotgrid() -> Command {
    Command::cargo_bin("slotgrid").unwrap()
}

fn run(request: Value) -> Value {
    let output = slotgrid()
        .arg("-")
        .write_stdin(request.to_string())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn assigns_slots_for_generated_month_grid() {
    let response = run(json!({
        "year": 2024,
        "month": 3,
        "longTerms": [{
            "id": 1,
            "title": "conference",
            "startDateTime": "2024-03-05T00:00:00",
            "endDateTime": "2024-03-08T23:59:59"
        }],
        "singleSchedules": [{
            "id": 2,
            "title": "standup",
            "startDateTime": "2024-03-06T09:00:00",
            "endDateTime": "2024-03-06T09:15:00"
        }]
    }));

    assert_eq!(response["longTerms"][0]["slot"], 1);
    // The long-term event holds slot 1 on March 6.
    assert_eq!(response["singleSchedules"][0]["slot"], 2);
}

#[test]
fn overflow_and_out_of_range_report_null() {
    let response = run(json!({
        "year": 2024,
        "month": 2,
        "maxScheduleCount": 1,
        "singleSchedules": [
            {
                "id": 1,
                "title": "first",
                "startDateTime": "2024-02-10T09:00:00",
                "endDateTime": "2024-02-10T10:00:00"
            },
            {
                "id": 2,
                "title": "second",
                "startDateTime": "2024-02-10T11:00:00",
                "endDateTime": "2024-02-10T12:00:00"
            },
            {
                "id": 3,
                "title": "outside",
                "startDateTime": "2024-01-01T09:00:00",
                "endDateTime": "2024-01-01T10:00:00"
            }
        ]
    }));

    assert_eq!(response["singleSchedules"][0]["slot"], 1);
    assert_eq!(response["singleSchedules"][1]["slot"], Value::Null);
    assert_eq!(response["singleSchedules"][2]["slot"], Value::Null);
}

#[test]
fn mixed_schedules_are_partitioned() {
    let response = run(json!({
        "year": 2024,
        "month": 3,
        "schedules": [
            {
                "id": 1,
                "title": "trip",
                "startDateTime": "2024-03-05T00:00:00",
                "endDateTime": "2024-03-07T23:59:59"
            },
            {
                "id": 2,
                "title": "dentist",
                "startDateTime": "2024-03-05T14:00:00",
                "endDateTime": "2024-03-05T15:00:00"
            }
        ]
    }));

    assert_eq!(response["longTerms"][0]["event"]["id"], 1);
    assert_eq!(response["longTerms"][0]["slot"], 1);
    assert_eq!(response["singleSchedules"][0]["event"]["id"], 2);
    assert_eq!(response["singleSchedules"][0]["slot"], 2);
}

#[test]
fn explicit_calendar_overrides_month() {
    let response = run(json!({
        "calendar": ["2024-03-05T00:00:00", "2024-03-06T00:00:00"],
        "singleSchedules": [
            {
                "id": 1,
                "title": "in range",
                "startDateTime": "2024-03-05T09:00:00",
                "endDateTime": "2024-03-05T10:00:00"
            },
            {
                "id": 2,
                "title": "not rendered",
                "startDateTime": "2024-03-07T09:00:00",
                "endDateTime": "2024-03-07T10:00:00"
            }
        ]
    }));

    assert_eq!(response["singleSchedules"][0]["slot"], 1);
    assert_eq!(response["singleSchedules"][1]["slot"], Value::Null);
}

#[test]
fn reads_request_from_file() {
    let path = std::env::temp_dir().join(format!("slotgrid-request-{}.json", std::process::id()));
    let request = json!({
        "year": 2024,
        "month": 3,
        "singleSchedules": [{
            "id": 1,
            "title": "standup",
            "startDateTime": "2024-03-06T09:00:00",
            "endDateTime": "2024-03-06T09:15:00"
        }]
    });
    std::fs::write(&path, request.to_string()).unwrap();

    let output = slotgrid().arg(&path).assert().success().get_output().stdout.clone();
    let response: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(response["singleSchedules"][0]["slot"], 1);

    std::fs::remove_file(&path).ok();
}

#[test]
fn invalid_month_fails_with_context() {
    slotgrid()
        .arg("-")
        .write_stdin(json!({"year": 2024, "month": 13}).to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn malformed_request_fails_with_context() {
    slotgrid()
        .arg("-")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed request"));
}

#[test]
fn missing_grid_fails() {
    slotgrid()
        .arg("-")
        .write_stdin(json!({"singleSchedules": []}).to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("calendar array or both year and month"));
}
