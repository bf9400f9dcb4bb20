use anyhow::Result;
use caf_standardizer::{evaluate, standardize, Outcome, RawInput, Rejection, CANONICAL_NAME};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct Fixture {
    case: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    input: Option<String>,
    expected: String,
}

fn load_cases() -> Result<Vec<Case>> {
    let fixture: Fixture = toml::from_str(include_str!("fixtures/cases.toml"))?;
    Ok(fixture.case)
}

#[test]
fn test_fixture_cases() -> Result<()> {
    for case in load_cases()? {
        assert_eq!(
            standardize(case.input.clone()),
            case.expected,
            "input: {:?}",
            case.input
        );
    }
    Ok(())
}

#[test]
fn test_output_is_canonical_or_empty() -> Result<()> {
    for case in load_cases()? {
        let out = standardize(case.input);
        assert!(out.is_empty() || out == CANONICAL_NAME, "unexpected output {out:?}");
    }
    Ok(())
}

#[test]
fn test_whitespace_noise_does_not_change_result() -> Result<()> {
    for case in load_cases()? {
        let Some(input) = case.input else { continue };
        let noisy: String = input
            .split(' ')
            .map(|t| format!("\t {t}  "))
            .collect();
        assert_eq!(standardize(noisy.as_str()), standardize(input.as_str()), "input: {input:?}");
    }
    Ok(())
}

#[test]
fn test_case_of_caf_token_is_irrelevant() {
    for caf in ["caf", "CAF", "Caf", "cAF"] {
        assert_eq!(standardize(format!("{caf} anything at all")), CANONICAL_NAME);
    }
}

#[test]
fn test_json_values() -> Result<()> {
    let rows: Vec<RawInput> =
        serde_json::from_value(json!(["caf softsol", null, 42, ["CAF"], {"name": "CAF"}]))?;
    let out: Vec<String> = rows.into_iter().map(standardize).collect();
    assert_eq!(out, vec![CANONICAL_NAME, "", "", "", ""]);
    Ok(())
}

#[test]
fn test_non_text_rejection_reason() {
    assert_eq!(
        evaluate(&RawInput::from(json!(42))),
        Outcome::Rejected(Rejection::NotText("number"))
    );
    assert_eq!(standardize(42_i64), "");
    assert_eq!(standardize(None::<String>), "");
}

#[test]
fn test_concurrent_calls_agree() -> Result<()> {
    let inputs: Vec<Option<String>> = load_cases()?.into_iter().map(|c| c.input).collect();
    let expected: Vec<String> = inputs.iter().cloned().map(standardize).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| inputs.iter().cloned().map(standardize).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("worker panicked"), expected);
        }
    });
    Ok(())
}
