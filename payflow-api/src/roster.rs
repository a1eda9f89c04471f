//! Demo employee data
//!
//! Fixed in-memory roster backing the HR dashboard endpoints. Nothing here
//! is persisted; the data exists so the demo frontend has something
//! realistic to page through.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Roster entry as shown on the HR dashboard
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub earned_this_period: u64,
    pub available_ewa: u64,
    pub status: String,
}

/// Current-employee detail for the mobile view
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeProfile {
    pub name: String,
    pub employee_id: String,
    pub earned_this_period: f64,
    pub available_for_withdrawal: f64,
    pub currency: String,
    pub pay_period: String,
    pub next_payday: String,
}

/// The signed-in demo employee
pub fn current_employee() -> EmployeeProfile {
    EmployeeProfile {
        name: "Juan Dela Cruz".to_string(),
        employee_id: "HC-2024-001".to_string(),
        earned_this_period: 8450.00,
        available_for_withdrawal: 2500.00,
        currency: "PHP".to_string(),
        pay_period: "Dec 1 - Dec 15, 2024".to_string(),
        next_payday: "Dec 16, 2024".to_string(),
    }
}

/// Full 50-entry demo roster, built once on first access
pub static EMPLOYEES: Lazy<Vec<Employee>> = Lazy::new(|| {
    ROSTER_DATA
        .iter()
        .enumerate()
        .map(|(i, (name, department, earned))| Employee {
            employee_id: format!("HC-2024-{:03}", i + 1),
            name: name.to_string(),
            department: department.to_string(),
            earned_this_period: *earned,
            // Demo rule: 30% of earned wages are available for early access
            available_ewa: *earned * 30 / 100,
            status: "active".to_string(),
        })
        .collect()
});

/// (name, department, earned_this_period)
const ROSTER_DATA: &[(&str, &str, u64)] = &[
    ("Bruce Wayne", "Executive", 45000),
    ("Clark Kent", "Media Relations", 32000),
    ("Diana Prince", "Legal", 38000),
    ("Peter Parker", "Research", 28000),
    ("Tony Stark", "Engineering", 52000),
    ("Natasha Romanoff", "Security", 35000),
    ("Steve Rogers", "Operations", 33000),
    ("Wanda Maximoff", "HR", 29000),
    ("Stephen Strange", "Consulting", 48000),
    ("Carol Danvers", "Aviation", 42000),
    ("T'Challa", "International Relations", 46000),
    ("Scott Lang", "IT", 27000),
    ("Barry Allen", "Logistics", 30000),
    ("Hal Jordan", "Aerospace", 39000),
    ("Arthur Curry", "Marine Operations", 34000),
    ("Oliver Queen", "Finance", 44000),
    ("Selina Kyle", "Asset Recovery", 31000),
    ("Matt Murdock", "Legal", 37000),
    ("Jessica Jones", "Investigations", 29000),
    ("Luke Cage", "Security", 32000),
    ("Danny Rand", "Finance", 41000),
    ("Wade Wilson", "Marketing", 26000),
    ("Ororo Munroe", "Environmental", 36000),
    ("Jean Grey", "Research", 38000),
    ("Logan Howlett", "Training", 33000),
    ("Raven Darkholme", "Strategic Planning", 40000),
    ("Hank McCoy", "Research", 43000),
    ("Kurt Wagner", "Transportation", 28000),
    ("Kitty Pryde", "IT", 30000),
    ("Bobby Drake", "Facilities", 27000),
    ("Remy LeBeau", "Sales", 35000),
    ("Anna Marie", "Customer Service", 29000),
    ("Victor Stone", "IT", 38000),
    ("Kara Zor-El", "Media Relations", 31000),
    ("Barbara Gordon", "IT Security", 39000),
    ("Dick Grayson", "Operations", 34000),
    ("Jason Todd", "Asset Recovery", 30000),
    ("Tim Drake", "Analytics", 32000),
    ("Damian Wayne", "Executive", 28000),
    ("Cassandra Cain", "Training", 29000),
    ("Bucky Barnes", "Security", 33000),
    ("Sam Wilson", "Operations", 31000),
    ("Monica Rambeau", "Energy Management", 37000),
    ("Kate Bishop", "Marketing", 28000),
    ("Clint Barton", "Security", 32000),
    ("Hope van Dyne", "Engineering", 40000),
    ("Shuri", "Research", 45000),
    ("Nakia", "International Relations", 36000),
    ("Okoye", "Security", 35000),
    ("M'Baku", "Operations", 34000),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_has_fifty_employees() {
        assert_eq!(EMPLOYEES.len(), 50);
    }

    #[test]
    fn test_employee_ids_are_sequential() {
        assert_eq!(EMPLOYEES[0].employee_id, "HC-2024-001");
        assert_eq!(EMPLOYEES[49].employee_id, "HC-2024-050");
    }

    #[test]
    fn test_available_ewa_is_thirty_percent() {
        for employee in EMPLOYEES.iter() {
            assert_eq!(employee.available_ewa, employee.earned_this_period * 30 / 100);
        }
    }
}
