// tests/common/fixtures.rs
use std::fmt;

/// Opaque record used by the scenario tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self { name: name.into(), age }
    }

    pub fn with_age(&self, age: u32) -> Self {
        Self { age, ..self.clone() }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person {{ Name = {}, Age = {} }}", self.name, self.age)
    }
}

pub fn persons() -> Vec<Person> {
    vec![
        Person::new("Tom", 10),
        Person::new("Dick", 5),
        Person::new("Harry", 5),
        Person::new("Mary", 5),
        Person::new("Jay", 20),
        Person::new("George", 20),
    ]
}

pub fn values() -> Vec<i32> {
    vec![3, 10, 6, 1, 4, 8, 2, 5, 9, 7]
}

/// Space-separated `Display` of every element.
pub fn dump<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
