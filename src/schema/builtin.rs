//! The shipped employee onboarding form

use super::rules::{DateBound, DateRules, NumberRules, SelectionRules, TextRules};
use super::types::{FieldKind, FieldSpec, FormSchema};

/// Returns the default schema served when no schema file is configured.
pub fn employee_onboarding() -> FormSchema {
    let name_rules = TextRules::default().with_min_length(2).with_max_length(50);

    // A constant, well-formed bound; the fallback only guards the type.
    let start_rules = DateBound::parse("2020-01-01")
        .map(DateRules::on_or_after)
        .unwrap_or_default();

    FormSchema::new(
        "Employee Onboarding",
        "Collect basic employee details for onboarding.",
        vec![
            FieldSpec::new("firstName", "First Name", FieldKind::text(name_rules.clone()))
                .with_placeholder("John")
                .required(),
            FieldSpec::new("lastName", "Last Name", FieldKind::text(name_rules))
                .with_placeholder("Doe")
                .required(),
            FieldSpec::new("age", "Age", FieldKind::number(NumberRules::between(18.0, 80.0)))
                .with_placeholder("30")
                .required(),
            FieldSpec::new("startDate", "Start Date", FieldKind::date(start_rules))
                .with_placeholder("")
                .required(),
            FieldSpec::new(
                "role",
                "Role",
                FieldKind::select(["Developer", "Designer", "Product", "HR"]),
            )
            .with_placeholder("Select role")
            .required(),
            FieldSpec::new(
                "skills",
                "Skills",
                FieldKind::multi_select(
                    ["React", "Node", "SQL", "Design", "Testing"],
                    SelectionRules::between(0, 5),
                ),
            )
            .with_placeholder("Select skills"),
            FieldSpec::new(
                "bio",
                "Biography",
                FieldKind::textarea(TextRules::default().with_max_length(500)),
            )
            .with_placeholder("A short bio"),
            FieldSpec::new("remote", "Remote Worker", FieldKind::Switch).with_placeholder(""),
        ],
    )
}
