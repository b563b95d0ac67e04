// Structural Pattern: Composite
// Leaves (developers, designers) and composites (managers) share one
// interface, so client code treats a single employee and a team alike.

use design_patterns::console;
use std::fmt;
use std::rc::Rc;

// ============================================================================
// Component
// ============================================================================

trait Employee: fmt::Debug {
    fn name(&self) -> &str;
    fn salary(&self) -> u32;
    fn role(&self) -> &'static str;
}

// ============================================================================
// Leaves
// ============================================================================

#[derive(Debug)]
struct Developer {
    name: String,
    salary: u32,
}

impl Developer {
    fn new(name: &str, salary: u32) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            salary,
        })
    }
}

impl Employee for Developer {
    fn name(&self) -> &str {
        &self.name
    }

    fn salary(&self) -> u32 {
        self.salary
    }

    fn role(&self) -> &'static str {
        "Developer"
    }
}

#[derive(Debug)]
struct Designer {
    name: String,
    salary: u32,
}

impl Designer {
    fn new(name: &str, salary: u32) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            salary,
        })
    }
}

impl Employee for Designer {
    fn name(&self) -> &str {
        &self.name
    }

    fn salary(&self) -> u32 {
        self.salary
    }

    fn role(&self) -> &'static str {
        "Designer"
    }
}

// ============================================================================
// Composite
// ============================================================================

trait CompositeEmployee: Employee {
    fn add_employee(&mut self, employee: Rc<dyn Employee>);
    fn remove_employee(&mut self, employee: &Rc<dyn Employee>) -> bool;
    fn employees(&self) -> &[Rc<dyn Employee>];
}

#[derive(Debug)]
struct Manager {
    name: String,
    salary: u32,
    employees: Vec<Rc<dyn Employee>>,
}

impl Manager {
    fn new(name: &str, salary: u32) -> Self {
        Self {
            name: name.to_string(),
            salary,
            employees: Vec::new(),
        }
    }
}

impl Employee for Manager {
    fn name(&self) -> &str {
        &self.name
    }

    fn salary(&self) -> u32 {
        self.salary
    }

    fn role(&self) -> &'static str {
        "Manager"
    }
}

impl CompositeEmployee for Manager {
    fn add_employee(&mut self, employee: Rc<dyn Employee>) {
        self.employees.push(employee);
    }

    /// Removes that exact employee (by identity). Returns `false` if they
    /// were not a report.
    fn remove_employee(&mut self, employee: &Rc<dyn Employee>) -> bool {
        match self.employees.iter().position(|e| Rc::ptr_eq(e, employee)) {
            Some(index) => {
                self.employees.remove(index);
                true
            }
            None => false,
        }
    }

    fn employees(&self) -> &[Rc<dyn Employee>] {
        &self.employees
    }
}

fn describe(employee: &dyn Employee) -> String {
    format!("{} ({}) earns {}", employee.name(), employee.role(), employee.salary())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> (Manager, Rc<dyn Employee>) {
        let mut manager = Manager::new("Michael", 25000);
        let jane: Rc<dyn Employee> = Developer::new("Jane Doe", 15000);
        manager.add_employee(Developer::new("John Doe", 12000));
        manager.add_employee(Rc::clone(&jane));
        manager.add_employee(Designer::new("Mark", 10000));
        (manager, jane)
    }

    #[test]
    fn test_manager_is_an_employee() {
        let (manager, _) = team();
        assert_eq!(manager.role(), "Manager");
        assert_eq!(manager.salary(), 25000);
        assert_eq!(describe(&manager), "Michael (Manager) earns 25000");
    }

    #[test]
    fn test_reports_keep_insertion_order() {
        let (manager, _) = team();
        let names: Vec<&str> = manager.employees().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Doe", "Mark"]);
        assert_eq!(manager.employees()[1].salary(), 15000);
    }

    #[test]
    fn test_remove_by_identity() {
        let (mut manager, jane) = team();
        assert!(manager.remove_employee(&jane));
        assert_eq!(manager.employees().len(), 2);

        // Same data, different instance: not a report.
        let lookalike: Rc<dyn Employee> = Developer::new("John Doe", 12000);
        assert!(!manager.remove_employee(&lookalike));
        assert_eq!(manager.employees().len(), 2);
    }

    #[test]
    fn test_manager_can_report_to_manager() {
        let (team_lead, _) = team();
        let mut director = Manager::new("Sarah", 40000);
        director.add_employee(Rc::new(team_lead));

        assert_eq!(director.employees()[0].role(), "Manager");
    }
}

fn main() {
    console::banner("Composite Pattern");

    let jane: Rc<dyn Employee> = Developer::new("Jane Doe", 15000);

    let mut manager = Manager::new("Michael", 25000);
    manager.add_employee(Developer::new("John Doe", 12000));
    manager.add_employee(Rc::clone(&jane));
    manager.add_employee(Designer::new("Mark", 10000));

    println!("{:#?}", manager);
    console::outcome(manager.role());
    console::outcome(manager.salary().to_string());
    console::outcome(manager.employees()[1].name());
    console::outcome(manager.employees()[1].salary().to_string());

    println!();
    console::step("Leaves and composites through the same interface");
    console::outcome(describe(&manager));
    for employee in manager.employees() {
        console::outcome(format!("  {}", describe(&**employee)));
    }

    console::step(format!("Removing {}", jane.name()));
    manager.remove_employee(&jane);
    console::outcome(format!("{} reports left", manager.employees().len()));

    console::when_to_use("composite");
}
