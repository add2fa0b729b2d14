//! In-process join of assignments with the employees and projects they
//! reference.

use std::collections::HashMap;

use super::{AssignmentRow, Employee, EmployeeId, Project, ProjectAssignment, ProjectCode};

/// Inner-join assignments to employees on `employee_id` and to projects on
/// `project_code`.
///
/// Assignments whose employee or project is missing produce no row. When a
/// natural key matches several records every combination is emitted. Rows are
/// ordered by start date, then assignment id, then names, so the output does
/// not depend on store iteration order.
pub fn join_assignments(
    assignments: &[ProjectAssignment],
    employees: &[Employee],
    projects: &[Project],
) -> Vec<AssignmentRow> {
    let mut employees_by_key: HashMap<&EmployeeId, Vec<&Employee>> = HashMap::new();
    for employee in employees {
        employees_by_key
            .entry(&employee.employee_id)
            .or_default()
            .push(employee);
    }

    let mut projects_by_key: HashMap<&ProjectCode, Vec<&Project>> = HashMap::new();
    for project in projects {
        projects_by_key
            .entry(&project.project_code)
            .or_default()
            .push(project);
    }

    let employees_by_key = &employees_by_key;
    let projects_by_key = &projects_by_key;
    let mut rows: Vec<AssignmentRow> = assignments
        .iter()
        .flat_map(move |assignment| {
            let matched_employees = employees_by_key
                .get(&assignment.employee_id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let matched_projects = projects_by_key
                .get(&assignment.project_code)
                .map(Vec::as_slice)
                .unwrap_or_default();

            matched_employees.iter().flat_map(move |employee| {
                matched_projects.iter().map(move |project| AssignmentRow {
                    id: assignment.id,
                    employee_id: assignment.employee_id.clone(),
                    full_name: employee.full_name.clone(),
                    project_name: project.project_name.clone(),
                    start_date: assignment.start_date,
                })
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        a.start_date
            .cmp(&b.start_date)
            .then_with(|| a.id.cmp(&b.id))
            .then_with(|| a.full_name.cmp(&b.full_name))
            .then_with(|| a.project_name.cmp(&b.project_name))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordId, StartDate};
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    fn id(n: u128) -> RecordId {
        RecordId::from_uuid(Uuid::from_u128(n))
    }

    fn employee(n: u128, key: &str, name: &str) -> Employee {
        Employee {
            id: id(n),
            employee_id: EmployeeId::new(key).expect("employee id"),
            full_name: name.to_owned(),
            email: format!("{key}@example.com"),
            hashed_password: "x".to_owned(),
        }
    }

    fn project(n: u128, code: &str, name: &str) -> Project {
        Project {
            id: id(n),
            project_code: ProjectCode::new(code).expect("project code"),
            project_name: name.to_owned(),
            project_description: String::new(),
        }
    }

    fn assignment(n: u128, key: &str, code: &str, date: &str) -> ProjectAssignment {
        ProjectAssignment {
            id: id(n),
            employee_id: EmployeeId::new(key).expect("employee id"),
            project_code: ProjectCode::new(code).expect("project code"),
            start_date: date.parse::<StartDate>().expect("start date"),
        }
    }

    #[fixture]
    fn alice() -> Employee {
        employee(1, "E1", "Alice")
    }

    #[fixture]
    fn alpha() -> Project {
        project(2, "P1", "Alpha")
    }

    #[rstest]
    fn joins_names_onto_assignment(alice: Employee, alpha: Project) {
        let assignments = vec![assignment(3, "E1", "P1", "2024-01-01")];

        let rows = join_assignments(&assignments, &[alice], &[alpha]);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id, id(3));
        assert_eq!(row.employee_id.as_ref(), "E1");
        assert_eq!(row.full_name, "Alice");
        assert_eq!(row.project_name, "Alpha");
        assert_eq!(row.start_date.to_string(), "2024-01-01");
    }

    #[rstest]
    #[case("E9", "P1")]
    #[case("E1", "P9")]
    #[case("E9", "P9")]
    fn drops_assignments_without_both_references(
        alice: Employee,
        alpha: Project,
        #[case] key: &str,
        #[case] code: &str,
    ) {
        let assignments = vec![assignment(3, key, code, "2024-01-01")];

        let rows = join_assignments(&assignments, &[alice], &[alpha]);

        assert!(rows.is_empty());
    }

    #[rstest]
    fn empty_assignments_yield_no_rows(alice: Employee, alpha: Project) {
        assert!(join_assignments(&[], &[alice], &[alpha]).is_empty());
    }

    #[rstest]
    fn duplicate_natural_keys_fan_out(alice: Employee, alpha: Project) {
        let twin = employee(4, "E1", "Alicia");
        let assignments = vec![assignment(3, "E1", "P1", "2024-01-01")];

        let rows = join_assignments(&assignments, &[alice, twin], &[alpha]);

        let names: Vec<_> = rows.iter().map(|row| row.full_name.as_str()).collect();
        assert_eq!(names, ["Alice", "Alicia"]);
    }

    #[rstest]
    fn orders_rows_by_start_date(alice: Employee, alpha: Project) {
        let assignments = vec![
            assignment(5, "E1", "P1", "2024-03-01"),
            assignment(6, "E1", "P1", "2024-01-15"),
        ];

        let rows = join_assignments(&assignments, &[alice], &[alpha]);

        let ids: Vec<_> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, [id(6), id(5)]);
    }
}
