// Creational Pattern: Prototype
// New objects are made by copying an existing one through a common trait,
// without knowing its concrete type.

use design_patterns::console;
use std::ptr;

#[derive(Debug, Clone, PartialEq)]
struct UserDetails {
    name: String,
    age: u32,
    email: String,
}

trait Prototype {
    fn clone_box(&self) -> Box<dyn Prototype>;
    fn user_details(&self) -> &UserDetails;
    fn user_details_mut(&mut self) -> &mut UserDetails;
}

// Lets `Box<dyn Prototype>` be cloned like any other value.
impl Clone for Box<dyn Prototype> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Clone)]
struct ConcretePrototype {
    user: UserDetails,
}

impl ConcretePrototype {
    fn new(user: UserDetails) -> Self {
        Self { user }
    }
}

impl Prototype for ConcretePrototype {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn user_details(&self) -> &UserDetails {
        &self.user
    }

    fn user_details_mut(&mut self) -> &mut UserDetails {
        &mut self.user
    }
}

fn same_instance(a: &dyn Prototype, b: &dyn Prototype) -> bool {
    ptr::eq(a.user_details(), b.user_details())
}

fn john() -> UserDetails {
    UserDetails {
        name: "John".to_string(),
        age: 32,
        email: "john@example.com".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_separate_instance() {
        let original = ConcretePrototype::new(john());
        let copy = original.clone_box();
        assert!(!same_instance(&original, &*copy));
    }

    #[test]
    fn test_clone_copies_details() {
        let original = ConcretePrototype::new(john());
        let copy = original.clone_box();
        assert_eq!(copy.user_details(), original.user_details());
    }

    #[test]
    fn test_clone_is_deep() {
        let original: Box<dyn Prototype> = Box::new(ConcretePrototype::new(john()));
        let mut copy = original.clone();
        copy.user_details_mut().email = "john.doe@example.com".to_string();

        assert_eq!(original.user_details().email, "john@example.com");
        assert_eq!(copy.user_details().email, "john.doe@example.com");
    }

    #[test]
    fn test_same_instance_with_itself() {
        let original = ConcretePrototype::new(john());
        assert!(same_instance(&original, &original));
    }
}

fn main() {
    console::banner("Prototype Pattern");

    let user1: Box<dyn Prototype> = Box::new(ConcretePrototype::new(john()));
    let mut user2 = user1.clone();

    if same_instance(&*user1, &*user2) {
        console::outcome("Both instances are the same");
    } else {
        console::outcome("Cloned objects are separate instances");
    }

    console::step("Changing the clone's age only");
    user2.user_details_mut().age = 33;
    println!("Original: {:?}", user1.user_details());
    println!("Clone:    {:?}", user2.user_details());

    console::when_to_use("prototype");
}
