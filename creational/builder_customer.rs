// Creational Pattern: Builder (fluent customer)
// A consuming builder with chained setters, and a director that names the
// common ways of building a customer.

use design_patterns::console;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
struct Customer {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: Option<String>,
}

impl Customer {
    fn builder() -> CustomerBuilder {
        CustomerBuilder::new()
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} <{}>", self.first_name, self.last_name, self.email)?;
        if let Some(phone) = &self.phone_number {
            write!(f, " tel: {}", phone)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct CustomerBuilder {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: Option<String>,
}

impl CustomerBuilder {
    fn new() -> Self {
        Self::default()
    }

    fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    fn build(self) -> Customer {
        Customer {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}

struct CustomerDirector;

impl CustomerDirector {
    fn build_minimal_customer(&self, first_name: &str, last_name: &str, email: &str) -> Customer {
        Customer::builder()
            .first_name(first_name)
            .last_name(last_name)
            .email(email)
            .build()
    }

    fn build_full_customer(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: &str,
    ) -> Customer {
        Customer::builder()
            .first_name(first_name)
            .last_name(last_name)
            .email(email)
            .phone_number(phone_number)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let customer = Customer::builder().build();
        assert_eq!(customer.first_name, "");
        assert_eq!(customer.email, "");
        assert_eq!(customer.phone_number, None);
    }

    #[test]
    fn test_minimal_customer_has_no_phone() {
        let customer =
            CustomerDirector.build_minimal_customer("John", "Doe", "john.doe@example.com");
        assert_eq!(customer.first_name, "John");
        assert_eq!(customer.last_name, "Doe");
        assert_eq!(customer.email, "john.doe@example.com");
        assert!(customer.phone_number.is_none());
    }

    #[test]
    fn test_full_customer() {
        let customer = CustomerDirector.build_full_customer(
            "John",
            "Doe",
            "john.doe@example.com",
            "+910000000000",
        );
        assert_eq!(customer.phone_number.as_deref(), Some("+910000000000"));
    }

    #[test]
    fn test_display() {
        let customer = CustomerDirector.build_full_customer("John", "Doe", "j@d.com", "+91");
        assert_eq!(customer.to_string(), "John Doe <j@d.com> tel: +91");
    }

    #[test]
    fn test_later_setter_wins() {
        let customer = Customer::builder()
            .first_name("Jane")
            .first_name("John")
            .build();
        assert_eq!(customer.first_name, "John");
    }
}

fn main() {
    console::banner("Builder Pattern (fluent customer)");

    let director = CustomerDirector;

    console::step("Minimal customer");
    let customer = director.build_minimal_customer("John", "Doe", "john.doe@example.com");
    console::outcome(format!("{:#?}", customer));

    console::step("Full customer");
    let full_customer =
        director.build_full_customer("John", "Doe", "john.doe@example.com", "+910000000000");
    console::outcome(format!("{:#?}", full_customer));

    console::step("Ad-hoc customer straight from the builder");
    let ad_hoc = Customer::builder()
        .first_name("Jane")
        .email("jane@example.com")
        .build();
    console::outcome(ad_hoc.to_string());

    console::when_to_use("builder-customer");
}
