mod common;

use common::*;

#[test]
fn help_lists_every_command() {
    let env = TestEnv::new();

    let result = env.run(&["--help"]);

    assert_eq!(result.exit_code, 0);
    for command in ["check", "diff", "window", "rules", "suggest-renames"] {
        assert!(result.stdout.contains(command), "missing {command}:\n{}", result.stdout);
    }
}

#[test]
fn check_requires_both_snapshots() {
    let env = TestEnv::new();

    let result = env.run(&["check", "--old", "old.json"]);

    assert_eq!(result.exit_code, 2);
    assert!(result.stderr.contains("--new"));
}
