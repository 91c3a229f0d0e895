#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use askama::Template;

#[test]
fn test_labels_ascending_two_digit() {
    let config = ProjectConfig::new("contest1", 10);
    assert_eq!(config.problem_labels.len(), 10);
    assert_eq!(config.problem_labels.first().unwrap(), "01");
    assert_eq!(config.problem_labels[6], "07");
    assert_eq!(config.problem_labels.last().unwrap(), "10");
}

#[test]
fn test_labels_empty_for_zero_count() {
    let config = ProjectConfig::new("contest1", 0);
    assert!(config.problem_labels.is_empty());
}

#[test]
fn test_labels_empty_for_negative_count() {
    let config = ProjectConfig::new("contest1", -4);
    assert!(config.problem_labels.is_empty());
}

#[test]
fn test_label_width_is_a_minimum_not_a_cap() {
    let config = ProjectConfig::new("marathon", 100);
    assert_eq!(config.problem_labels[98], "99");
    assert_eq!(config.problem_labels[99], "100");
}

#[test]
fn test_cmake_lists_renders_one_target_per_label() {
    let config = ProjectConfig::new("contest1", 3);
    let rendered = CMakeListsTemplateData {
        name: config.name.clone(),
        problem_count: config.problem_count,
        labels: config.problem_labels.clone(),
    }
    .render()
    .unwrap();

    assert!(rendered.contains("project(contest1)"));
    assert!(rendered.contains("# 3 problem targets"));
    for label in &config.problem_labels {
        assert!(rendered.contains(&format!("add_executable(problem_{label} problem_{label}.cpp)")));
    }
}

#[test]
fn test_cmake_profiles_render_project_name() {
    let config = ProjectConfig::new("round_b", 2);
    let rendered = CMakeProfilesTemplateData {
        name: config.name.clone(),
        problem_count: config.problem_count,
        labels: config.problem_labels.clone(),
    }
    .render()
    .unwrap();

    assert!(rendered.contains("round_b"));
    assert!(rendered.contains("CMakeSharedSettings"));
}

#[test]
fn test_run_config_renders_label_and_project() {
    let rendered = RunConfigTemplateData {
        problem_id: "02".to_string(),
        name: "contest1".to_string(),
    }
    .render()
    .unwrap();

    assert!(rendered.contains("name=\"problem_02\""));
    assert!(rendered.contains("TARGET_NAME=\"problem_02\""));
    assert!(rendered.contains("PROJECT_NAME=\"contest1\""));
    assert!(rendered.contains("problem_02.stdin.txt"));
}

#[test]
fn test_problem_source_is_fixed_content() {
    let first = ProblemSourceTemplate.render().unwrap();
    let second = ProblemSourceTemplate.render().unwrap();
    assert_eq!(first, second);
    assert!(first.contains("int main()"));
    assert!(first.contains("Case #"));
}
