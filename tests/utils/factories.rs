/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use rolodex::modules::contact::domain::{
    Age, Contact, Email, Gender, Name, Patronymic, PhoneNumber, Surname,
};
use rolodex::modules::group::domain::{Group, GroupName};

pub struct ContactFactory {
    name: String,
    surname: String,
    patronymic: String,
    age: i32,
    gender: Gender,
    phone_number: String,
    email: Option<String>,
}

impl Default for ContactFactory {
    fn default() -> Self {
        Self {
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            patronymic: "Sergeevich".to_string(),
            age: 30,
            gender: Gender::Male,
            phone_number: "+79123456789".to_string(),
            email: None,
        }
    }
}

impl ContactFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_surname(mut self, surname: &str) -> Self {
        self.surname = surname.to_string();
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn build(self) -> Contact {
        // Unique email per contact unless one was pinned explicitly
        let email = self
            .email
            .unwrap_or_else(|| format!("user{}@example.com", rand::random::<u32>()));

        Contact::new(
            PhoneNumber::new(&self.phone_number).expect("factory phone number is valid"),
            Email::new(&email).expect("factory email is valid"),
            Name::new(&self.name).expect("factory name is valid"),
            Surname::new(&self.surname).expect("factory surname is valid"),
            Patronymic::new(&self.patronymic).expect("factory patronymic is valid"),
            Age::new(self.age).expect("factory age is valid"),
            self.gender,
        )
    }
}

pub struct GroupFactory {
    name: String,
}

impl Default for GroupFactory {
    fn default() -> Self {
        Self {
            name: format!("group-{}", rand::random::<u32>()),
        }
    }
}

impl GroupFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn build(self) -> Group {
        Group::new(GroupName::new(&self.name).expect("factory group name is valid"))
    }
}
