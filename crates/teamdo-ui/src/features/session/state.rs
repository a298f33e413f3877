//! Login and registration form values and their validation.

use crate::core::validation::{self, ValidationError};
use teamdo_api_models::{LoginRequest, RegisterRequest};

/// Login form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Raw username input.
    pub username: String,
    /// Raw password input.
    pub password: String,
}

impl LoginForm {
    /// Request body after validation.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let username = validation::username(&self.username)?;
        validation::password(&self.password)?;
        Ok(LoginRequest {
            username,
            password: self.password.clone(),
        })
    }
}

/// Registration form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    /// Raw username input.
    pub username: String,
    /// Raw email input.
    pub email: String,
    /// Raw password input.
    pub password: String,
    /// Raw confirmation input.
    pub confirm_password: String,
}

impl RegisterForm {
    /// Request body after validation.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let username = validation::username(&self.username)?;
        let email = validation::email(&self.email)?;
        validation::password(&self.password)?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(RegisterRequest {
            username,
            email,
            password: self.password.clone(),
        })
    }
}
