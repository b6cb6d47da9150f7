mod common;

use common::*;

#[test]
fn rules_lists_catalog_in_priority_order() {
    let env = TestEnv::new();

    let result = env.run(&["rules", "--json"]);

    assert_eq!(result.exit_code, 0, "stderr:\n{}", result.stderr);
    let json = result.json();
    let ids: Vec<_> = json["rules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        ids,
        vec![
            "addition",
            "deprecated-removal",
            "module-removal",
            "option-removal",
            "param-removal",
            "bug-fix",
            "behavior-change",
            "deprecation",
        ]
    );
    assert_eq!(json["rules"][1]["effect"], "window");
    assert_eq!(json["rules"][2]["effect"], "disallow");
}

#[test]
fn rules_follow_project_config() {
    let env = TestEnv::new();
    env.write(
        "apiwarden.toml",
        "[policy]\nrules = [\"option-removal\", \"addition\"]\n",
    );

    let result = env.run(&["rules"]);

    assert_eq!(result.exit_code, 0, "stderr:\n{}", result.stderr);
    let lines: Vec<_> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(" 1. option-removal"));
    assert!(lines[1].starts_with(" 2. addition"));
}
