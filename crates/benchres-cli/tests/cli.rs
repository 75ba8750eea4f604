// Benchres - Graph benchmark report toolkit
//
// Copyright (c) 2026 Benchres contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end tests for the `benchres` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "graphs/x/g1.txt\n\
                      acc | m1: 0.5, m2: 0.7\n\
                      \n\
                      graphs/x/g2.txt\n\
                      acc | m1: 0.9\n\
                      time | m1: 1.2\n";

#[test]
fn prints_first_section() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("results.txt");
    fs::write(&input, SAMPLE).unwrap();

    Command::cargo_bin("benchres")
        .unwrap()
        .arg(&input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("g1")
                .and(predicate::str::contains("acc = 0.5"))
                .and(predicate::str::contains("m2")),
        );
}

#[test]
fn missing_input_file_fails() {
    let dir = tempdir().unwrap();

    Command::cargo_bin("benchres")
        .unwrap()
        .arg(dir.path().join("does-not-exist.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn default_file_warning_on_stdout() {
    // No positional argument: a warning goes to stdout and the hard-coded
    // default name is tried in the working directory.
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ppResults_2app.txt"), SAMPLE).unwrap();

    Command::cargo_bin("benchres")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("warning:")
                .and(predicate::str::contains("ppResults_2app.txt"))
                .and(predicate::str::contains("g1")),
        );
}

#[test]
fn missing_default_file_fails_after_warning() {
    let dir = tempdir().unwrap();

    Command::cargo_bin("benchres")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("ppResults_2app.txt"));
}

#[test]
fn malformed_input_exits_nonzero() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("results.txt");
    fs::write(&input, "graphs/x/g1.txt\nacc m1 0.5\n").unwrap();

    Command::cargo_bin("benchres")
        .unwrap()
        .arg(&input)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("FormatError").and(predicate::str::contains("line 2")),
        );
}

#[test]
fn empty_input_reports_empty() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("results.txt");
    fs::write(&input, "").unwrap();

    Command::cargo_bin("benchres")
        .unwrap()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("report is empty"));
}

#[test]
fn csv_flag_writes_long_form_table() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("results.txt");
    let output = dir.path().join("results.csv");
    fs::write(&input, SAMPLE).unwrap();

    Command::cargo_bin("benchres")
        .unwrap()
        .arg(&input)
        .arg("--csv")
        .arg(&output)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "graph,method,attribute,value",
            "g1,m1,acc,0.5",
            "g1,m2,acc,0.7",
            "g2,m1,acc,0.9",
            "g2,m1,time,1.2",
        ]
    );
}
