//! Property tests for ordering and distribution.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use roster_model::{Department, Employee, EmployeeId};
use roster_view::{
    FilterOptions, SortKey, SortOrder, department_distribution, sort_employees,
};

fn department_strategy() -> impl Strategy<Value = Department> {
    prop::sample::select(Department::ALL.to_vec())
}

fn roster_strategy() -> impl Strategy<Value = Vec<Employee>> {
    // Tiny key spaces so equal sort keys are common.
    prop::collection::vec(
        (
            prop::sample::select(vec!["ann", "Ann", "bob", "BOB", "cy"]),
            0u32..4,
            department_strategy(),
        ),
        0..40,
    )
    .prop_map(|rows| {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(idx, (name, month_offset, department))| Employee {
                id: EmployeeId::new(format!("e{idx}")).unwrap(),
                name: name.to_string(),
                email: format!("{name}{idx}@company.com"),
                department,
                date_of_joining: NaiveDate::from_ymd_opt(2023, 1 + month_offset, 1).unwrap(),
                created_at: created,
                updated_at: created,
            })
            .collect()
    })
}

fn sort_key(employee: &Employee, key: SortKey) -> String {
    match key {
        SortKey::Name => employee.name.to_lowercase(),
        SortKey::DateOfJoining => employee.date_of_joining.to_string(),
    }
}

fn position(id: &EmployeeId, roster: &[Employee]) -> usize {
    roster.iter().position(|e| &e.id == id).unwrap()
}

proptest! {
    #[test]
    fn sort_is_stable_in_both_directions(
        roster in roster_strategy(),
        by_name in any::<bool>(),
        ascending in any::<bool>(),
    ) {
        let filters = FilterOptions {
            sort_by: if by_name { SortKey::Name } else { SortKey::DateOfJoining },
            sort_order: if ascending { SortOrder::Asc } else { SortOrder::Desc },
            ..FilterOptions::default()
        };
        let mut sorted: Vec<&Employee> = roster.iter().collect();
        sort_employees(&mut sorted, &filters);

        prop_assert_eq!(sorted.len(), roster.len());
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (ka, kb) = (sort_key(a, filters.sort_by), sort_key(b, filters.sort_by));
            if ascending {
                prop_assert!(ka <= kb);
            } else {
                prop_assert!(ka >= kb);
            }
            if ka == kb {
                prop_assert!(position(&a.id, &roster) < position(&b.id, &roster));
            }
        }
    }

    #[test]
    fn distribution_percentages_sum_to_about_100(roster in roster_strategy()) {
        let shares = department_distribution(&roster);
        let total_count: usize = shares.iter().map(|s| s.count).sum();
        prop_assert_eq!(total_count, roster.len());

        let percent: u32 = shares.iter().map(|s| s.percentage).sum();
        if roster.is_empty() {
            prop_assert!(shares.is_empty());
        } else {
            // Each share rounds by at most half a percent.
            let slack = shares.len() as u32;
            prop_assert!(percent + slack >= 100 && percent <= 100 + slack);
        }

        for pair in shares.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }
}
