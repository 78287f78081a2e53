use holdem_cli::run;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv: Vec<String> = std::iter::once("holdem")
        .chain(args.iter().copied())
        .map(|s| s.to_string())
        .collect();
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn help_prints_to_stdout_and_exits_zero() {
    let (code, out, _) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("serve"));
    assert!(out.contains("deal"));
    assert!(out.contains("eval"));
}

#[test]
fn unknown_command_exits_nonzero() {
    let (code, _, err) = run_cli(&["frobnicate"]);
    assert_eq!(code, 2);
    assert!(!err.is_empty());
}

#[test]
fn deal_with_seed_is_deterministic() {
    let (code1, out1, _) = run_cli(&["deal", "--seed", "42"]);
    let (code2, out2, _) = run_cli(&["deal", "--seed", "42"]);
    assert_eq!(code1, 0);
    assert_eq!(code2, 0);
    assert_eq!(out1, out2);
    assert!(out1.contains("Seat 0:"));
    assert!(out1.contains("Board:"));
}

#[test]
fn deal_respects_seat_count() {
    let (code, out, _) = run_cli(&["deal", "--seed", "7", "--seats", "6"]);
    assert_eq!(code, 0);
    assert!(out.contains("Seat 5:"));
    assert!(!out.contains("Seat 6:"));
}

#[test]
fn eval_reports_the_category() {
    let (code, out, _) = run_cli(&["eval", "As", "Ks", "Qs", "Js", "Ts"]);
    assert_eq!(code, 0);
    assert!(out.contains("Straight flush"));
    assert!(out.contains("Strength:"));
}

#[test]
fn eval_rejects_bad_cards() {
    let (code, _, err) = run_cli(&["eval", "As", "Ks", "Qs", "Js", "Xx"]);
    assert_eq!(code, 2);
    assert!(err.contains("Error:"));
}
