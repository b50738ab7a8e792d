use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use cucumber::{World as _, given, then, when};
use tempfile::TempDir;

#[derive(Debug, Default, cucumber::World)]
struct TestWorld {
    dir: Option<TempDir>,
    input_path: Option<PathBuf>,
    last_cmd: Option<Output>,
}

fn exe() -> &'static str {
    env!("CARGO_BIN_EXE_relation-chain")
}

fn run_cmd(args: Vec<String>) -> Output {
    Command::new(exe())
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run relation-chain binary")
}

fn run_cmd_with_stdin(args: Vec<String>, stdin: &[u8]) -> Output {
    let mut child = Command::new(exe())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn relation-chain binary");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait for relation-chain")
}

fn stdout_string(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn stderr_string(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

// "1-2 2-3" -> "n 2\n1 2\n2 3\n"
fn relations_text(people: usize, relations: &str) -> String {
    let pairs: Vec<&str> = relations.split_whitespace().collect();
    let mut text = format!("{people} {}\n", pairs.len());
    for pair in pairs {
        let (x, y) = pair.split_once('-').expect("pair written as x-y");
        text.push_str(&format!("{x} {y}\n"));
    }
    text
}

#[given("a temp relations workspace")]
fn a_temp_relations_workspace(world: &mut TestWorld) {
    world.dir = Some(tempfile::tempdir().expect("tempdir"));
}

#[given(expr = "a relations file with {int} people and relations {string}")]
fn a_relations_file(world: &mut TestWorld, people: usize, relations: String) {
    let dir = world.dir.as_ref().expect("temp dir");
    let input_path = dir.path().join("relations.txt");
    fs::write(&input_path, relations_text(people, &relations)).expect("write fixture");
    world.input_path = Some(input_path);
}

#[when(expr = "I run relation-chain {word} on the file")]
fn i_run_on_the_file(world: &mut TestWorld, command: String) {
    let input_path = world.input_path.as_ref().expect("input");
    let out = run_cmd(vec![
        command,
        "--in".to_string(),
        input_path.to_string_lossy().into_owned(),
    ]);
    world.last_cmd = Some(out);
}

#[when("I run relation-chain chain with events on the file")]
fn i_run_chain_with_events(world: &mut TestWorld) {
    let input_path = world.input_path.as_ref().expect("input");
    let out = run_cmd(vec![
        "chain".to_string(),
        "--in".to_string(),
        input_path.to_string_lossy().into_owned(),
        "--emit-events".to_string(),
    ]);
    world.last_cmd = Some(out);
}

#[when("I pipe the file to relation-chain chain")]
fn i_pipe_the_file(world: &mut TestWorld) {
    let input_path = world.input_path.as_ref().expect("input");
    let raw = fs::read(input_path).expect("read fixture");
    world.last_cmd = Some(run_cmd_with_stdin(vec!["chain".to_string()], &raw));
}

#[then("the command succeeds")]
fn the_command_succeeds(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        out.status.success(),
        "command failed (status={:?})\nstderr:\n{}\nstdout:\n{}",
        out.status.code(),
        stderr_string(out),
        stdout_string(out)
    );
}

#[then("the command fails")]
fn the_command_fails(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        !out.status.success(),
        "expected failure but succeeded; stderr: {}",
        stderr_string(out)
    );
}

#[then(expr = "the printed chain length is {int}")]
fn the_printed_chain_length_is(world: &mut TestWorld, expected: usize) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stdout = stdout_string(out);
    let last = stdout.lines().last().expect("some stdout");
    assert_eq!(last.trim().parse::<usize>().ok(), Some(expected), "stdout:\n{stdout}");
}

#[then(expr = "the report lists {int} components")]
fn the_report_lists_components(world: &mut TestWorld, expected: usize) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("report json");
    assert_eq!(v["component_count"], expected);
    assert_eq!(
        v["components"].as_array().map(|a| a.len()),
        Some(expected)
    );
}

#[then(expr = "stdout has a {string} event")]
fn stdout_has_event(world: &mut TestWorld, kind: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stdout = stdout_string(out);
    let found = stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .any(|v| v.get("type").and_then(|t| t.as_str()) == Some(kind.as_str()));
    assert!(found, "no {kind:?} event in stdout:\n{stdout}");
}

#[then(expr = "stderr mentions {string}")]
fn stderr_mentions(world: &mut TestWorld, needle: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stderr = stderr_string(out);
    assert!(
        stderr.contains(&needle),
        "stderr did not contain {needle:?}. stderr was:\n{stderr}"
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    TestWorld::cucumber()
        .max_concurrent_scenarios(Some(1))
        .fail_on_skipped()
        .run_and_exit("tests/features")
        .await;
}
