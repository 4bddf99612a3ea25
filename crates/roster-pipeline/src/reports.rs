//! Built-in layouts for the console's listing pages.

use roster_model::{ColumnSpec, FieldRef, ReportLayout, SortSpec};

pub const ATTENDANCE: &str = "attendance";
pub const LEAVE_BALANCE: &str = "leave-balance";
pub const SALARY: &str = "salary";
pub const LOCATIONS: &str = "locations";
pub const EMPLOYEES: &str = "employees";

pub fn builtin_layouts() -> Vec<ReportLayout> {
    vec![
        attendance(),
        leave_balance(),
        salary(),
        locations(),
        employees(),
    ]
}

pub fn layout_by_key(key: &str) -> Option<ReportLayout> {
    builtin_layouts()
        .into_iter()
        .find(|layout| layout.key.eq_ignore_ascii_case(key.trim()))
}

fn employee_name() -> ColumnSpec {
    ColumnSpec::new("Employee", FieldRef::text("employee.name")).with_fallback("Unknown")
}

fn employee_id() -> ColumnSpec {
    ColumnSpec::new("Employee ID", FieldRef::text("employee.employeeId"))
}

fn location_name() -> ColumnSpec {
    ColumnSpec::new("Location", FieldRef::text("location.name")).with_fallback("Unassigned")
}

pub fn attendance() -> ReportLayout {
    ReportLayout::new(ATTENDANCE, "Attendance Report")
        .column(ColumnSpec::new("Date", FieldRef::date("date")))
        .column(employee_name())
        .column(employee_id())
        .column(location_name())
        .column(ColumnSpec::new("Status", FieldRef::text("status")))
        .column(ColumnSpec::new("Check In", FieldRef::text("checkIn")).with_fallback("-"))
        .column(ColumnSpec::new("Check Out", FieldRef::text("checkOut")).with_fallback("-"))
        .column(ColumnSpec::new("Hours", FieldRef::number("workingHours")))
        .search(FieldRef::text("employee.name"))
        .search(FieldRef::text("employee.employeeId"))
        .search(FieldRef::text("location.name"))
        .search(FieldRef::text("status"))
        .dated_by(FieldRef::date("date"))
        .located_by(FieldRef::text("location.name"))
        .sorted_by(SortSpec::desc("date"))
}

pub fn leave_balance() -> ReportLayout {
    ReportLayout::new(LEAVE_BALANCE, "Leave Balance Report")
        .column(employee_name())
        .column(employee_id())
        .column(location_name())
        .column(ColumnSpec::new("Leave Type", FieldRef::text("leaveType")))
        .column(ColumnSpec::new("Allotted", FieldRef::number("allotted")))
        .column(ColumnSpec::new("Used", FieldRef::number("used")))
        .column(ColumnSpec::new("Balance", FieldRef::number("balance")))
        .search(FieldRef::text("employee.name"))
        .search(FieldRef::text("employee.employeeId"))
        .search(FieldRef::text("leaveType"))
        .dated_by(FieldRef::date("asOf"))
        .located_by(FieldRef::text("location.name"))
        .sorted_by(SortSpec::asc("employee.name"))
}

pub fn salary() -> ReportLayout {
    ReportLayout::new(SALARY, "Salary Report")
        .column(ColumnSpec::new("Month", FieldRef::date("month")))
        .column(employee_name())
        .column(employee_id())
        .column(location_name())
        .column(ColumnSpec::new("Present Days", FieldRef::number("presentDays")))
        .column(ColumnSpec::new("Gross Pay", FieldRef::currency("grossPay")))
        .column(ColumnSpec::new("Deductions", FieldRef::currency("deductions")))
        .column(ColumnSpec::new("Net Pay", FieldRef::currency("netPay")))
        .search(FieldRef::text("employee.name"))
        .search(FieldRef::text("employee.employeeId"))
        .search(FieldRef::text("location.name"))
        .dated_by(FieldRef::date("month"))
        .located_by(FieldRef::text("location.name"))
        .sorted_by(SortSpec::asc("employee.name"))
}

pub fn locations() -> ReportLayout {
    ReportLayout::new(LOCATIONS, "Locations")
        .column(ColumnSpec::new("Name", FieldRef::text("name")))
        .column(ColumnSpec::new("Address", FieldRef::text("address")).with_fallback("-"))
        .column(
            ColumnSpec::new("Site Incharge", FieldRef::text("incharge.name"))
                .with_fallback("Not assigned"),
        )
        .column(ColumnSpec::new("Employees", FieldRef::number("employeeCount")))
        .search(FieldRef::text("name"))
        .search(FieldRef::text("address"))
        .search(FieldRef::text("incharge.name"))
        .located_by(FieldRef::text("name"))
        .sorted_by(SortSpec::asc("name"))
}

pub fn employees() -> ReportLayout {
    ReportLayout::new(EMPLOYEES, "Employees")
        .column(ColumnSpec::new("Employee ID", FieldRef::text("employeeId")))
        .column(ColumnSpec::new("Name", FieldRef::text("name")))
        .column(ColumnSpec::new("Designation", FieldRef::text("designation")).with_fallback("-"))
        .column(location_name())
        .column(ColumnSpec::new("Joining Date", FieldRef::date("joiningDate")))
        .column(ColumnSpec::new("Phone", FieldRef::text("phone")).with_fallback("-"))
        .search(FieldRef::text("employeeId"))
        .search(FieldRef::text("name"))
        .search(FieldRef::text("designation"))
        .search(FieldRef::text("location.name"))
        .located_by(FieldRef::text("location.name"))
        .sorted_by(SortSpec::asc("name"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_resolvable() {
        let layouts = builtin_layouts();
        for layout in &layouts {
            let found = layout_by_key(&layout.key).expect("layout by key");
            assert_eq!(found.key, layout.key);
            assert!(!layout.columns.is_empty());
            assert!(!layout.search_fields.is_empty());
        }
        let mut keys: Vec<&str> = layouts.iter().map(|l| l.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), layouts.len());
        assert!(layout_by_key(" SALARY ").is_some());
        assert!(layout_by_key("payroll").is_none());
    }

    #[test]
    fn default_sort_targets_a_column() {
        for layout in builtin_layouts() {
            let sort = layout.default_sort.clone().expect("default sort");
            assert_eq!(layout.sort_field(&sort.field), Some(sort.field.clone()));
        }
    }
}
