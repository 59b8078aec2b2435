mod common;

use std::path::PathBuf;
use std::process::Output;

use common::command;
use regex::Regex;
use test_generator::test_resources;

struct Expected {
    out: Vec<String>,
    scan_err: Vec<String>,
}

#[test_resources("tests/suite/*/*.lox")]
fn run_file_test(filename: &str) {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push(filename);
    let expected = parse_comments(&path);
    let output = command()
        .arg(path)
        .output()
        .expect("Command execution error.");

    let out: Vec<String> = String::from_utf8(output.stdout.clone())
        .expect("Invalid UTF-8")
        .lines()
        .map(|x| x.to_owned())
        .collect();
    let err: Vec<String> = String::from_utf8(output.stderr.clone())
        .expect("Invalid UTF-8")
        .lines()
        .map(|x| x.to_owned())
        .collect();

    run_assertions(expected, output, out, err);
}

fn parse_comments(path: &PathBuf) -> Expected {
    let output_re = Regex::new(r"// expect: ?(.*)").expect("Invalid regex.");
    let error_re = Regex::new(r"// (Error.*)").expect("Invalid regex.");
    let error_line_re = Regex::new(r"// \[line (\d+)\] (Error.*)").expect("Invalid regex.");

    let mut expected = Expected {
        out: vec![],
        scan_err: vec![],
    };

    println!("{}", path.display());
    let content = std::fs::read_to_string(path).expect("Could not read path to string.");
    for (i, line) in content.lines().enumerate() {
        if let Some(m) = output_re.captures(line) {
            expected.out.push(m[1].to_owned());
        }
        if let Some(m) = error_line_re.captures(line) {
            expected.scan_err.push(format!("[line {}] {}", &m[1], &m[2]));
        }
        if let Some(m) = error_re.captures(line) {
            expected.scan_err.push(format!("[line {}] {}", i + 1, &m[1]));
        }
    }
    expected
}

fn run_assertions(expected: Expected, output: Output, out: Vec<String>, err: Vec<String>) {
    let code = output
        .status
        .code()
        .expect("Process terminated by a signal.");
    match expected.scan_err.is_empty() {
        true => assert_eq!(code, 0, "Program exited with failure, expected success"),
        false => assert_eq!(code, 65, "Scan errors should have error code 65"),
    }
    assert_eq!(expected.scan_err, err, "Scan errors should match");
    assert_eq!(expected.out, out, "Output should match");
}
