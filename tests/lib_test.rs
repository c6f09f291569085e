//! Library integration tests.

use hyperion_lint::document::{Document, Location};
use hyperion_lint::lint::{
    lint, Category, Finding, LintEngine, LintRule, RuleRegistry, Selection, Severity,
};
use hyperion_lint::HyperionError;

const SAMPLE: &str = r#"
openapi: 3.0.3
info:
  title: Pets
  version: 2.0.0
servers:
  - url: https://API.example.com/v1/
paths:
  /some_path:
    get:
      operationId: get_pets
      parameters:
        - name: pageSize
          in: query
          schema: {type: string}
        - name: from
          in: query
      responses:
        200:
          description: ok
          content:
            application/json:
              schema:
                type: array
                items: {$ref: '#/components/schemas/Pet'}
        418: {description: teapot}
  /Foo-Bar/v2/items:
    post:
      operationId: createItem
      responses:
        201: {description: created}
components:
  schemas:
    Pet:
      properties:
        ID: {type: integer}
        createdAt: {type: integer}
"#;

fn sample() -> Document {
    Document::parse(SAMPLE).unwrap()
}

fn located(findings: &[Finding]) -> Vec<(Category, String)> {
    findings
        .iter()
        .map(|f| (f.category(), f.location().to_string()))
        .collect()
}

#[test]
fn error_types_are_public() {
    let err = "bogus".parse::<Category>().unwrap_err();
    assert!(matches!(err, HyperionError::UnknownCategory { .. }));
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> hyperion_lint::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn lint_is_deterministic() {
    let doc = sample();

    assert_eq!(lint(&doc, &Selection::All), lint(&doc, &Selection::All));
}

#[test]
fn all_equals_concatenation_of_single_categories() {
    let doc = sample();
    let all = lint(&doc, &Selection::All);
    let concatenated: Vec<Finding> = Category::ALL
        .into_iter()
        .flat_map(|c| lint(&doc, &Selection::only([c])))
        .collect();

    assert_eq!(all, concatenated);
}

#[test]
fn selection_order_is_irrelevant() {
    let doc = sample();
    let forward = Selection::from_names(["paths", "naming", "dates"]).unwrap();
    let backward = Selection::from_names(["dates", "naming", "paths"]).unwrap();

    assert_eq!(lint(&doc, &forward), lint(&doc, &backward));
}

#[test]
fn reselection_is_idempotent() {
    let doc = sample();
    let once = Selection::from_names(["keywords"]).unwrap();
    let twice = Selection::from_names(["keywords", "keywords"]).unwrap();

    assert_eq!(lint(&doc, &once), lint(&doc, &twice));
}

#[test]
fn findings_follow_registry_order() {
    let findings = lint(&sample(), &Selection::All);
    let categories: Vec<Category> = findings.iter().map(|f| f.category()).collect();
    let mut sorted = categories.clone();
    sorted.sort();

    assert_eq!(categories, sorted);
    for category in Category::ALL {
        assert!(
            categories.contains(&category),
            "no finding for {category}"
        );
    }
}

#[test]
fn every_rule_survives_an_empty_document() {
    let doc = Document::parse("{}").unwrap();

    for category in Category::ALL {
        let findings = lint(&doc, &Selection::only([category]));
        assert!(
            findings.iter().all(|f| f.location().is_root()),
            "{category} reported a non-root location on an empty document"
        );
    }

    let paths = lint(&doc, &Selection::only([Category::Paths]));
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].severity(), Severity::Error);
    assert_eq!(paths[0].message(), "servers[0].url doesn't exist");
}

#[test]
fn every_rule_survives_malformed_sections() {
    let doc = Document::parse(
        "servers: 3\npaths: [a, b]\ninfo: text\ncomponents: {schemas: [1, 2]}\n",
    )
    .unwrap();

    let findings = lint(&doc, &Selection::All);
    assert!(findings
        .iter()
        .all(|f| !f.message().starts_with("internal error")));
}

#[test]
fn separator_rule() {
    let doc = Document::parse(
        "servers:\n  - url: https://api.example.com/v1\npaths:\n  /some_path: {}\n",
    )
    .unwrap();
    let findings = lint(&doc, &Selection::only([Category::Paths]));

    assert_eq!(
        located(&findings),
        vec![(Category::Paths, "paths./some_path".to_string())]
    );
    assert_eq!(findings[0].severity(), Severity::Error);
}

#[test]
fn case_rule_is_a_warning() {
    let doc = Document::parse(
        "servers:\n  - url: https://api.example.com/v1\npaths:\n  /Foo-Bar: {}\n",
    )
    .unwrap();
    let findings = lint(&doc, &Selection::only([Category::Paths]));

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::Warning);
    assert_eq!(findings[0].location().to_string(), "paths./Foo-Bar");
}

#[test]
fn status_code_rule() {
    let doc = Document::parse(
        "paths:\n  /tea:\n    get:\n      responses:\n        200: {}\n        418: {}\n",
    )
    .unwrap();
    let findings = lint(&doc, &Selection::only([Category::StatusCodes]));

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::Error);
    assert!(findings[0].message().contains("418"));
}

struct ExplodingRule;

impl LintRule for ExplodingRule {
    fn category(&self) -> Category {
        Category::Dates
    }

    fn name(&self) -> &str {
        "Exploding"
    }

    fn description(&self) -> &str {
        "Always panics"
    }

    fn check(&self, _doc: &Document) -> Vec<Finding> {
        panic!("boom")
    }
}

#[test]
fn panicking_rule_is_isolated() {
    let mut registry = RuleRegistry::with_builtins();
    registry.register(Box::new(ExplodingRule));
    let engine = LintEngine::new(registry);

    let findings = engine.lint(&sample(), &Selection::All);
    let dates: Vec<&Finding> = findings
        .iter()
        .filter(|f| f.category() == Category::Dates)
        .collect();

    assert_eq!(dates.len(), 1);
    assert_eq!(dates[0].location(), &Location::root());
    assert!(dates[0].message().contains("boom"));
    assert!(findings.iter().any(|f| f.category() == Category::TimeSeries));
}
