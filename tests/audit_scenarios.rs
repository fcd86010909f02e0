//! End-to-end audit scenarios over real content trees.

use factlint::{Auditor, RuleRegistry, Topic};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn write_content(dir: &Path, rel: &str, json: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, json).expect("write");
}

fn tree_with_question(prompt: &str, explanation: &str) -> TempDir {
    let dir = tempdir().expect("tempdir");
    write_content(
        dir.path(),
        "questions.json",
        &format!(
            r#"[{{"id": "quiz-1", "questions": [
                {{"id": "q1", "type": "multiple-choice", "prompt": {}, "explanation": {}}}
            ]}}]"#,
            serde_json::to_string(prompt).expect("encode prompt"),
            serde_json::to_string(explanation).expect("encode explanation"),
        ),
    );
    dir
}

fn audit(dir: &TempDir) -> factlint::AuditReport {
    Auditor::new(RuleRegistry::builtin()).run(dir.path())
}

#[test]
fn swapped_tcp_udp_properties_yield_two_violations() {
    let dir = tree_with_question(
        "Which protocol is connectionless?",
        "TCP is connectionless and UDP is connection-oriented.",
    );

    let report = audit(&dir);
    assert_eq!(report.violations.len(), 2, "{:?}", report.violations);
    let rule_ids: Vec<_> = report.violations.iter().map(|v| v.rule_id).collect();
    assert!(rule_ids.contains(&"tcp-connectionless"));
    assert!(rule_ids.contains(&"udp-connection-oriented"));
}

#[test]
fn corrected_tcp_udp_wording_passes() {
    let dir = tree_with_question(
        "Which protocol is connectionless?",
        "TCP is not connectionless; UDP is connectionless, not connection-oriented.",
    );

    let report = audit(&dir);
    assert!(report.passed(), "{:?}", report.violations);
}

#[test]
fn address_width_co_mention_passes() {
    let dir = tree_with_question(
        "How wide are IP addresses?",
        "IPv4 addresses are 32 bits while IPv6 addresses are 128 bits.",
    );

    let report = audit(&dir);
    assert!(report.passed(), "{:?}", report.violations);
}

#[test]
fn wrong_ipv4_width_without_ipv6_mention_fails() {
    let dir = tree_with_question("How wide are IPv4 addresses?", "IPv4 addresses are 128 bits.");

    let report = audit(&dir);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].rule_id, "ipv4-address-width");
    assert_eq!(report.violations[0].topic, Topic::Networking);
}

#[test]
fn inner_join_all_rows_fails() {
    let dir = tree_with_question(
        "What does an INNER JOIN return?",
        "INNER JOIN returns all rows from both tables.",
    );

    let report = audit(&dir);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].rule_id, "inner-join-all-rows");
}

#[test]
fn nuanced_join_comparison_passes() {
    let dir = tree_with_question(
        "Compare INNER JOIN and CROSS JOIN.",
        "An INNER JOIN returns only matching rows, unlike a CROSS JOIN which \
         returns all rows via a Cartesian product.",
    );

    let report = audit(&dir);
    assert!(report.passed(), "{:?}", report.violations);
}

#[test]
fn malformed_file_changes_nothing_about_good_files() {
    let good = r#"[{"id": "quiz-1", "questions": [
        {"id": "q1", "prompt": "Describe paging.",
         "explanation": "Paging uses variable size blocks."}
    ]}]"#;

    let only_good = tempdir().expect("tempdir");
    write_content(only_good.path(), "good/questions.json", good);

    let with_bad = tempdir().expect("tempdir");
    write_content(with_bad.path(), "good/questions.json", good);
    write_content(with_bad.path(), "bad/questions.json", "{truncated");

    let baseline = audit(&only_good);
    let mixed = audit(&with_bad);

    let ids = |r: &factlint::AuditReport| -> Vec<(String, &'static str)> {
        r.violations
            .iter()
            .map(|v| (v.question_id.clone(), v.rule_id))
            .collect()
    };
    assert_eq!(ids(&baseline), ids(&mixed));
    assert_eq!(mixed.files_skipped.len(), 1);
}

#[test]
fn repeated_runs_over_unchanged_tree_are_identical() {
    let dir = tempdir().expect("tempdir");
    write_content(
        dir.path(),
        "questions.json",
        r#"[{"id": "scheduling-quiz", "questions": [
            {"id": "q1", "prompt": "Is FCFS preemptive?",
             "explanation": "FCFS is a preemptive algorithm."},
            {"id": "q2", "prompt": "Is Round Robin preemptive?",
             "explanation": "Round Robin is non-preemptive."}
        ]}]"#,
    );

    let first = audit(&dir);
    let second = audit(&dir);

    let ids = |r: &factlint::AuditReport| -> Vec<&'static str> {
        r.violations.iter().map(|v| v.rule_id).collect()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(first.violations.len(), 2);
}

#[test]
fn multiple_files_are_all_audited_in_order() {
    let dir = tempdir().expect("tempdir");
    write_content(
        dir.path(),
        "databases/questions.json",
        r#"[{"id": "db-quiz", "questions": [
            {"id": "q1", "prompt": "ACID?",
             "explanation": "Durability means data is kept in temporary buffers."}
        ]}]"#,
    );
    write_content(
        dir.path(),
        "networking/questions.json",
        r#"[{"id": "net-quiz", "questions": [
            {"id": "q1", "prompt": "Addressing?",
             "explanation": "RFC 1918 reserves 169.254.0.0/16 for private use."}
        ]}]"#,
    );

    let report = audit(&dir);
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.violations.len(), 2);
    // Sorted file order: databases before networking
    assert_eq!(report.violations[0].rule_id, "durability-temporary");
    assert_eq!(report.violations[1].rule_id, "rfc1918-link-local");
}
