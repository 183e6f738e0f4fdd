use super::*;
use crate::helpers::create_closure;

parameterized_test! {can_check_closure_times, (start, end, is_valid), {
    let closures = vec![create_closure(1, &[(0., 0.)], start, end)];

    assert_eq!(check_e0004_closure_times(closures.as_slice()).is_ok(), is_valid);
}}

can_check_closure_times! {
    case01_open_end: ("2024-01-01T00:00:00Z", None, true),
    case02_with_end: ("2024-01-01T00:00:00Z", Some("2024-01-01T05:00:00+02:00"), true),
    case03_same_start_and_end: ("2024-01-01T00:00:00Z", Some("2024-01-01T00:00:00Z"), true),
    case04_end_before_start: ("2024-01-01T00:00:00Z", Some("2023-12-31T23:59:59Z"), false),
    case05_invalid_start: ("2024-01-01 00:00", None, false),
    case06_invalid_end: ("2024-01-01T00:00:00Z", Some("tomorrow"), false),
}

#[test]
fn can_report_all_invalid_closure_ids() {
    let closures = vec![
        create_closure(1, &[], "bad", None),
        create_closure(2, &[], "2024-01-01T00:00:00Z", None),
        create_closure(3, &[], "2024-01-01T00:00:00Z", Some("bad")),
    ];

    let error = check_e0004_closure_times(closures.as_slice()).expect_err("expected error");

    assert_eq!(error.code, "E0004");
    assert!(error.action.contains("'1, 3'"));
}

#[test]
fn can_return_active_windows_in_closures_order() {
    let closures = vec![
        create_closure(7, &[], "2024-01-01T00:01:00Z", None),
        create_closure(3, &[], "2024-01-01T00:00:00Z", Some("2024-01-01T00:02:00Z")),
    ];

    let windows = check_e0004_closure_times(closures.as_slice()).expect("expected windows");

    assert_eq!(
        windows,
        vec![ActiveWindow::new(1_704_067_260., None), ActiveWindow::new(1_704_067_200., Some(1_704_067_320.))]
    );
}
