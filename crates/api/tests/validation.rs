use api::dto::EmployeeInput;
use api::validate::{validate_employee, validate_salary};
use chrono::NaiveDate;
use entity::employee::Role;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn today() -> NaiveDate {
    date(2026, 6, 15)
}

fn candidate() -> EmployeeInput {
    EmployeeInput {
        first_name: "John".into(),
        last_name: "Doe".into(),
        birthdate: date(1990, 4, 2),
        employment_date: date(2018, 9, 3),
        manager_id: Some(1),
        home_address: "1 Example Street".into(),
        current_salary: 50_000.0,
        role: Role::Employee,
    }
}

fn ceo_candidate() -> EmployeeInput {
    EmployeeInput {
        manager_id: None,
        role: Role::Ceo,
        ..candidate()
    }
}

#[test]
fn valid_candidate_produces_empty_report() {
    assert!(validate_employee(&candidate(), today(), false).is_empty());
    assert!(validate_employee(&ceo_candidate(), today(), false).is_empty());
}

#[test]
fn ceo_with_boss_is_flagged() {
    let input = EmployeeInput {
        manager_id: Some(7),
        ..ceo_candidate()
    };
    let report = validate_employee(&input, today(), false);
    assert!(report
        .iter()
        .any(|v| v.field == "managerId" && v.message == "CEO must not have a boss."));
}

#[test]
fn non_ceo_without_boss_is_flagged() {
    let input = EmployeeInput {
        manager_id: None,
        ..candidate()
    };
    let report = validate_employee(&input, today(), false);
    assert!(report
        .iter()
        .any(|v| v.field == "managerId" && v.message == "Non-CEO employees must have a boss."));
}

#[test]
fn empty_names_are_flagged() {
    let input = EmployeeInput {
        first_name: "  ".into(),
        ..candidate()
    };
    let report = validate_employee(&input, today(), false);
    assert!(report.has_field("firstName"));

    let input = EmployeeInput {
        last_name: String::new(),
        ..candidate()
    };
    let report = validate_employee(&input, today(), false);
    assert!(report.has_field("lastName"));
}

#[test]
fn overlong_names_are_flagged() {
    let long = "x".repeat(51);
    let input = EmployeeInput {
        first_name: long.clone(),
        ..candidate()
    };
    assert!(validate_employee(&input, today(), false).has_field("firstName"));

    let input = EmployeeInput {
        last_name: long,
        ..candidate()
    };
    assert!(validate_employee(&input, today(), false).has_field("lastName"));

    // Exactly 50 characters is still fine.
    let input = EmployeeInput {
        first_name: "x".repeat(50),
        ..candidate()
    };
    assert!(validate_employee(&input, today(), false).is_empty());
}

#[test]
fn identical_first_and_last_name_is_flagged_on_first_name() {
    let input = EmployeeInput {
        first_name: "Doe".into(),
        last_name: "Doe".into(),
        ..candidate()
    };
    let report = validate_employee(&input, today(), false);
    assert!(report
        .iter()
        .any(|v| v.field == "firstName"
            && v.message == "First name and last name cannot be the same."));
}

#[test]
fn case_differing_names_are_distinct() {
    let input = EmployeeInput {
        first_name: "Doe".into(),
        last_name: "doe".into(),
        ..candidate()
    };
    assert!(validate_employee(&input, today(), false).is_empty());
}

#[test]
fn age_boundaries_are_inclusive() {
    // Exactly 18 years old today.
    let input = EmployeeInput {
        birthdate: date(2008, 6, 15),
        ..candidate()
    };
    assert!(validate_employee(&input, today(), false).is_empty());

    // One day short of 18.
    let input = EmployeeInput {
        birthdate: date(2008, 6, 16),
        ..candidate()
    };
    assert!(validate_employee(&input, today(), false).has_field("birthdate"));

    // Exactly 70 years old today.
    let input = EmployeeInput {
        birthdate: date(1956, 6, 15),
        ..candidate()
    };
    assert!(validate_employee(&input, today(), false).is_empty());

    // One day past the 70-year window.
    let input = EmployeeInput {
        birthdate: date(1956, 6, 14),
        ..candidate()
    };
    assert!(validate_employee(&input, today(), false).has_field("birthdate"));
}

#[test]
fn future_birthdate_is_flagged() {
    let input = EmployeeInput {
        birthdate: date(2027, 1, 1),
        ..candidate()
    };
    let report = validate_employee(&input, today(), false);
    assert!(report
        .iter()
        .any(|v| v.field == "birthdate" && v.message == "Birthdate cannot be in the future."));
}

#[test]
fn employment_date_window_is_inclusive() {
    let valid_bounds = [date(2000, 1, 1), today()];
    for bound in valid_bounds {
        let input = EmployeeInput {
            employment_date: bound,
            ..candidate()
        };
        assert!(validate_employee(&input, today(), false).is_empty());
    }

    let invalid_bounds = [date(1999, 12, 31), date(2026, 6, 16)];
    for bound in invalid_bounds {
        let input = EmployeeInput {
            employment_date: bound,
            ..candidate()
        };
        let report = validate_employee(&input, today(), false);
        assert!(report.iter().any(|v| v.field == "employmentDate"
            && v.message == "Employment date must be between 2000-01-01 and today."));
    }
}

#[test]
fn empty_home_address_is_flagged() {
    let input = EmployeeInput {
        home_address: " ".into(),
        ..candidate()
    };
    assert!(validate_employee(&input, today(), false).has_field("homeAddress"));
}

#[test]
fn negative_salary_is_flagged_and_zero_is_not() {
    let input = EmployeeInput {
        current_salary: -0.01,
        ..candidate()
    };
    let report = validate_employee(&input, today(), false);
    assert!(report
        .iter()
        .any(|v| v.field == "currentSalary" && v.message == "Salary must be non-negative."));

    let input = EmployeeInput {
        current_salary: 0.0,
        ..candidate()
    };
    assert!(validate_employee(&input, today(), false).is_empty());
}

#[test]
fn salary_sub_rule_is_shared_with_the_salary_update_path() {
    let report = validate_salary("newSalary", -1.0);
    assert!(report
        .iter()
        .any(|v| v.field == "newSalary" && v.message == "Salary must be non-negative."));
    assert!(validate_salary("newSalary", 0.0).is_empty());
}

#[test]
fn second_ceo_is_rejected_regardless_of_other_fields() {
    let report = validate_employee(&ceo_candidate(), today(), true);
    assert!(report
        .iter()
        .any(|v| v.field == "role" && v.message == "There can only be one CEO."));

    // Even an otherwise-broken CEO candidate carries the uniqueness violation.
    let broken = EmployeeInput {
        first_name: String::new(),
        current_salary: -1.0,
        ..ceo_candidate()
    };
    let report = validate_employee(&broken, today(), true);
    assert!(report
        .iter()
        .any(|v| v.message == "There can only be one CEO."));

    // Non-CEO candidates never trip it.
    let report = validate_employee(&candidate(), today(), true);
    assert!(report.is_empty());
}

#[test]
fn violations_accumulate_instead_of_short_circuiting() {
    let input = EmployeeInput {
        first_name: String::new(),
        last_name: String::new(),
        birthdate: date(2020, 1, 1),
        employment_date: date(1999, 1, 1),
        manager_id: Some(3),
        home_address: String::new(),
        current_salary: -5.0,
        role: Role::Ceo,
    };
    let report = validate_employee(&input, today(), false);
    for field in [
        "managerId",
        "firstName",
        "lastName",
        "birthdate",
        "employmentDate",
        "homeAddress",
        "currentSalary",
    ] {
        assert!(report.has_field(field), "missing violation for {}", field);
    }
}

#[test]
fn validation_is_idempotent() {
    let input = EmployeeInput {
        first_name: String::new(),
        current_salary: -1.0,
        ..candidate()
    };
    let first = validate_employee(&input, today(), false);
    let second = validate_employee(&input, today(), false);
    assert_eq!(first, second);
    assert_eq!(first.messages(), second.messages());
}
