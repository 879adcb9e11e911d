use assert_cmd::Command;
use predicates::prelude::*;

fn veloria() -> Command {
    Command::cargo_bin("veloria_cli").expect("binary built")
}

#[test]
fn version_prints_package_name() {
    veloria()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("veloria_cli"));
}

#[test]
fn classify_greeting() {
    veloria()
        .args(["classify", "Good", "Morning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("topic: greeting"))
        .stdout(predicate::str::contains(
            "reply (greeting): Hello! How may I assist you today?",
        ));
}

#[test]
fn classify_canned_medication_question() {
    veloria()
        .args(["classify", "I have a headache, what tablet should I take?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("topic: health_related"))
        .stdout(predicate::str::contains("reply (canned:headache):"));
}

#[test]
fn classify_reports_corrections() {
    veloria()
        .args(["classify", "i", "hav", "fevr", "and", "need", "medicin"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "normalized: i hav fever and need medicin",
        ))
        .stdout(predicate::str::contains("reply (canned:fever):"));
}

#[test]
fn classify_unrelated_message() {
    veloria()
        .args(["classify", "best pizza in town"])
        .assert()
        .success()
        .stdout(predicate::str::contains("topic: unrelated"))
        .stdout(predicate::str::contains("reply (redirect):"));
}

#[test]
fn classify_model_bound_message() {
    veloria()
        .args(["classify", "how to manage diabetes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reply (model): requires completion provider"));
}

#[test]
fn ask_without_api_key_fails_with_apology() {
    veloria()
        .env_remove("HF_API_KEY")
        .args(["ask", "how to manage diabetes"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Sorry, the AI is not responding right now.",
        ));
}

#[test]
fn ask_answers_greeting_offline() {
    veloria()
        .env_remove("HF_API_KEY")
        .args(["ask", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! How may I assist you today?"));
}
