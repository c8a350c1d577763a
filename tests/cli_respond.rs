mod common;

use common::TestContext;
use mockito::Matcher;
use predicates::prelude::*;

const IDENTITY: [&str; 6] =
    ["--given-name", "Ana", "--family-name", "Ruiz", "--email", "ana@x.com"];

#[test]
fn declined_response_is_posted_and_acknowledged() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("nombre".into(), "Ana".into()),
            Matcher::UrlEncoded("apellidos".into(), "Ruiz".into()),
            Matcher::UrlEncoded("email".into(), "ana@x.com".into()),
            Matcher::UrlEncoded("asiste".into(), "no".into()),
            Matcher::UrlEncoded("bus".into(), "".into()),
        ]))
        .with_status(200)
        .expect(1)
        .create();

    let ctx = TestContext::with_collector(&server.url());
    ctx.cli()
        .arg("respond")
        .args(IDENTITY)
        .args(["--attending", "no", "--no-input"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you, Ana!"))
        .stdout(predicate::str::contains("sorry you cannot make it"))
        .stdout(predicate::str::contains("looking forward").not());

    mock.assert();
}

#[test]
fn attending_response_with_bus_and_empty_dietary_detail() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("asiste".into(), "si".into()),
            Matcher::UrlEncoded("intolerancias".into(), "si".into()),
            Matcher::UrlEncoded("otraIntolerancia".into(), "".into()),
            Matcher::UrlEncoded("bus".into(), "si".into()),
            Matcher::UrlEncoded("parada".into(), "Zumarraga".into()),
        ]))
        .with_status(200)
        .expect(1)
        .create();

    let ctx = TestContext::with_collector(&server.url());
    ctx.cli()
        .arg("r")
        .args(IDENTITY)
        .args(["--attending", "yes", "--dietary", "yes", "--bus", "yes", "--stop", "zumarraga"])
        .arg("--no-input")
        .assert()
        .success()
        .stdout(predicate::str::contains("looking forward"));

    mock.assert();
}

#[test]
fn missing_stop_blocks_submission_without_contacting_collector() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/").expect(0).create();

    let ctx = TestContext::with_collector(&server.url());
    ctx.cli()
        .arg("respond")
        .args(IDENTITY)
        .args(["--attending", "yes", "--bus", "yes", "--no-input"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("a pickup stop for the bus"));

    mock.assert();
}

#[test]
fn unreachable_collector_fails_with_submission_error() {
    let ctx = TestContext::with_collector("http://127.0.0.1:1/");
    ctx.cli()
        .arg("respond")
        .args(IDENTITY)
        .args(["--attending", "no", "--no-input"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not send your response"))
        .stderr(predicate::str::contains("Submission failed"));
}

#[test]
fn missing_endpoint_is_reported_before_anything_else() {
    let ctx = TestContext::new();
    ctx.cli()
        .arg("respond")
        .args(IDENTITY)
        .args(["--attending", "no", "--no-input"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No submission endpoint configured"));
}

#[test]
fn endpoint_can_come_from_the_environment() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/").with_status(200).expect(1).create();

    let ctx = TestContext::new();
    ctx.cli()
        .env("RSVP_GATEWAY_URL", server.url())
        .arg("respond")
        .args(IDENTITY)
        .args(["--attending", "no", "--no-input"])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn unknown_stop_is_rejected_by_argument_parsing() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["respond", "--stop", "bilbao", "--no-input"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown stop"));
}
