//! Client-side field validation. Everything here runs before a request is
//! built; a form with errors never reaches the network.

use crate::api::{LoginRequest, NewBook, RegisterRequest};
use crate::role::Role;
use regex::Regex;
use std::collections::BTreeMap;

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Field name → first error message for that field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` unless the field already has an error.
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_ok_and(|re| re.is_match(email))
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.trim().is_empty() {
        errors.add("email", "Email is required");
    } else if !valid_email(email) {
        errors.add("email", "Invalid email format");
    }
}

#[derive(Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    /// Returns the field errors when the form is incomplete.
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.into_result(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Shared secret, only sent for admin accounts.
    pub admin_code: String,
}

impl SignupForm {
    /// # Errors
    /// Returns the field errors when the form is incomplete or inconsistent.
    pub fn validate(&self, role: Role) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.username.trim().is_empty() {
            errors.add("username", "Username is required");
        } else if self.username.chars().count() < MIN_USERNAME_CHARS {
            errors.add("username", "Username must be at least 3 characters");
        }

        check_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.add("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.add("password", "Password must be at least 6 characters");
        }

        if self.password != self.confirm_password {
            errors.add("confirmPassword", "Passwords do not match");
        }

        let admin_secret = match role {
            Role::Client => None,
            Role::Admin => {
                if self.admin_code.trim().is_empty() {
                    errors.add("adminCode", "Admin code is required");
                }
                Some(self.admin_code.clone())
            }
        };

        errors.into_result(RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            admin_secret,
        })
    }
}

/// Listing form as typed by the user; numbers are still text.
#[derive(Clone, Debug, Default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
}

impl BookForm {
    /// # Errors
    /// Returns the field errors when a field is missing or not a valid number.
    pub fn validate(&self) -> Result<NewBook, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.title.trim().is_empty() {
            errors.add("title", "Title is required");
        }
        if self.author.trim().is_empty() {
            errors.add("author", "Author is required");
        }
        if self.description.trim().is_empty() {
            errors.add("description", "Description is required");
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => price,
            _ => {
                errors.add("price", "Price must be a non-negative number");
                0.0
            }
        };

        let quantity = match self.quantity.trim().parse::<u32>() {
            Ok(quantity) if quantity >= 1 => quantity,
            _ => {
                errors.add("quantity", "Quantity must be at least 1");
                0
            }
        };

        errors.into_result(NewBook {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            quantity,
        })
    }

    /// Empties every field, as after a successful submission.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Validates a purchase quantity against the stock on display.
///
/// # Errors
/// Returns the field error when the quantity is not between 1 and `stock`.
pub fn validate_purchase_quantity(raw: &str, stock: u32) -> Result<u32, FieldErrors> {
    let mut errors = FieldErrors::new();
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => errors.add("quantity", "Quantity must be at least 1"),
        Ok(quantity) if quantity > stock => {
            errors.add("quantity", "Quantity exceeds available stock");
        }
        Ok(quantity) => return Ok(quantity),
    }
    Err(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            admin_code: String::new(),
        }
    }

    #[test]
    fn login_requires_email_and_password() {
        let Err(errors) = LoginForm::default().validate() else {
            panic!("empty login form must not validate");
        };
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn login_rejects_malformed_email() {
        for email in ["reader", "reader@example", "a b@example.com", "@example.com"] {
            let form = LoginForm {
                email: email.to_string(),
                password: "x".to_string(),
            };
            let errors = form.validate().err();
            assert_eq!(
                errors.and_then(|errors| errors.get("email")),
                Some("Invalid email format"),
                "{email}"
            );
        }
    }

    #[test]
    fn login_builds_request() -> Result<(), FieldErrors> {
        let form = LoginForm {
            email: "reader@example.com".to_string(),
            password: "pw".to_string(),
        };
        let request = form.validate()?;
        assert_eq!(request.email, "reader@example.com");
        assert_eq!(request.password, "pw");
        Ok(())
    }

    #[test]
    fn client_signup_is_valid_without_admin_code() -> Result<(), FieldErrors> {
        let request = signup().validate(Role::Client)?;
        assert_eq!(request.admin_secret, None);
        Ok(())
    }

    #[test]
    fn admin_signup_requires_admin_code() {
        let errors = signup().validate(Role::Admin).err();
        assert_eq!(
            errors.and_then(|errors| errors.get("adminCode")),
            Some("Admin code is required")
        );

        let mut form = signup();
        form.admin_code = "letmein".to_string();
        let request = form.validate(Role::Admin).ok();
        assert_eq!(
            request.and_then(|request| request.admin_secret),
            Some("letmein".to_string())
        );
    }

    #[test]
    fn signup_checks_lengths_and_confirmation() {
        let form = SignupForm {
            username: "ab".to_string(),
            email: "reader@example.com".to_string(),
            password: "12345".to_string(),
            confirm_password: "54321".to_string(),
            admin_code: String::new(),
        };
        let Err(errors) = form.validate(Role::Client) else {
            panic!("form must not validate");
        };
        assert_eq!(
            errors.get("username"),
            Some("Username must be at least 3 characters")
        );
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn book_form_parses_numbers() -> Result<(), FieldErrors> {
        let form = BookForm {
            title: " Dune ".to_string(),
            author: "Frank Herbert".to_string(),
            description: "Spice".to_string(),
            price: "12.50".to_string(),
            quantity: "3".to_string(),
        };
        let book = form.validate()?;
        assert_eq!(book.title, "Dune");
        assert!((book.price - 12.5).abs() < f64::EPSILON);
        assert_eq!(book.quantity, 3);
        Ok(())
    }

    #[test]
    fn book_form_rejects_bad_numbers() {
        let form = BookForm {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            description: "Spice".to_string(),
            price: "-1".to_string(),
            quantity: "0".to_string(),
        };
        let Err(errors) = form.validate() else {
            panic!("form must not validate");
        };
        assert_eq!(errors.get("price"), Some("Price must be a non-negative number"));
        assert_eq!(errors.get("quantity"), Some("Quantity must be at least 1"));

        let form = BookForm {
            price: "NaN".to_string(),
            quantity: "2.5".to_string(),
            ..BookForm::default()
        };
        let Err(errors) = form.validate() else {
            panic!("form must not validate");
        };
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = BookForm {
            title: "Dune".to_string(),
            price: "1".to_string(),
            ..BookForm::default()
        };
        form.clear();
        assert!(form.title.is_empty());
        assert!(form.price.is_empty());
    }

    #[test]
    fn purchase_quantity_bounds() {
        assert_eq!(validate_purchase_quantity("2", 3).ok(), Some(2));
        assert_eq!(validate_purchase_quantity("3", 3).ok(), Some(3));
        assert_eq!(
            validate_purchase_quantity("4", 3)
                .err()
                .and_then(|errors| errors.get("quantity")),
            Some("Quantity exceeds available stock")
        );
        assert!(validate_purchase_quantity("0", 3).is_err());
        assert!(validate_purchase_quantity("abc", 3).is_err());
    }
}
