use serde::{Deserialize, Serialize};

use crate::models::field::Field;

/// Raw sign-in form as submitted. Absent keys read as empty or unchecked controls.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SignInRequest {
    pub login: String,
    pub password: String,
    pub category: String,
    pub remember: bool,
    pub agreement: bool,
}

impl SignInRequest {
    /// The validated fields of the form, in display order. `remember` carries no rule.
    pub fn fields(&self) -> Vec<Field> {
        vec![
            Field::login(self.login.clone()),
            Field::password(self.password.clone()),
            Field::category(self.category.clone()),
            Field::agreement(self.agreement),
        ]
    }

    /// Login and category trimmed. The password is kept verbatim so the mask matches what was typed.
    pub fn trimmed(&self) -> Self {
        Self {
            login: self.login.trim().to_string(),
            password: self.password.clone(),
            category: self.category.trim().to_string(),
            remember: self.remember,
            agreement: self.agreement,
        }
    }
}
