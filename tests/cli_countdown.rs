mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn ten_seconds_before_the_ceremony() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["countdown", "--once", "--now", "2026-07-18T18:29:50"])
        .assert()
        .success()
        .stdout("00d 00h 00m 10s\n");
}

#[test]
fn json_reading() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["countdown", "--once", "--format", "json", "--now", "2026-07-16T17:29:50"])
        .assert()
        .success()
        .stdout(r#"{"state":"running","days":2,"hours":1,"minutes":0,"seconds":10}"#.to_owned() + "\n");
}

#[test]
fn past_event_reads_as_elapsed_zero() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["c", "--once", "--now", "2026-10-16T12:00:00"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("00d 00h 00m 00s"));
}

#[test]
fn live_clock_stops_after_the_requested_ticks() {
    let ctx = TestContext::with_config("[countdown]\ntick_ms = 10\n");
    let output = ctx
        .cli()
        .args(["countdown", "--ticks", "3", "--now", "2026-07-18T18:00:00"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["00d 00h 30m 00s"; 3]);
}

#[test]
fn live_clock_stops_by_itself_once_elapsed() {
    let ctx = TestContext::with_config("[countdown]\ntick_ms = 10\n");
    ctx.cli()
        .args(["countdown", "--ticks", "50", "--format", "json", "--now", "2027-01-01T00:00:00"])
        .assert()
        .success()
        .stdout("{\"state\":\"elapsed\"}\n");
}

#[test]
fn malformed_now_is_rejected() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["countdown", "--once", "--now", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid instant 'tomorrow'"));
}
