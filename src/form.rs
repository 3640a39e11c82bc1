use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketType {
    #[default]
    Standard,
    Premium,
    Vip,
}

impl TicketType {
    pub fn all() -> [TicketType; 3] {
        [TicketType::Standard, TicketType::Premium, TicketType::Vip]
    }

    /// Value used for the `<option>` and for parsing it back.
    pub fn key(self) -> &'static str {
        match self {
            TicketType::Standard => "standard",
            TicketType::Premium => "premium",
            TicketType::Vip => "vip",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TicketType::Standard => "Full Conference Pass - $799",
            TicketType::Premium => "Executive Pass - $1,199",
            TicketType::Vip => "VIP All-Access Pass - $1,999",
        }
    }

    pub fn from_key(key: &str) -> Option<TicketType> {
        Self::all().into_iter().find(|t| t.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub company: String,
    pub ticket_type: TicketType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Please enter your full name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter your full name and email address.")]
    MissingNameAndEmail,
}

impl FormState {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
        }
    }

    /// Presence check only: name and email must hold something besides
    /// whitespace. Company and ticket type are optional/always valid.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let name_missing = self.name.trim().is_empty();
        let email_missing = self.email.trim().is_empty();
        match (name_missing, email_missing) {
            (false, false) => Ok(()),
            (true, false) => Err(RegistrationError::MissingName),
            (false, true) => Err(RegistrationError::MissingEmail),
            (true, true) => Err(RegistrationError::MissingNameAndEmail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            company: "Analytical Engines".into(),
            ticket_type: TicketType::Premium,
        }
    }

    #[test]
    fn defaults_are_blank_standard() {
        let f = FormState::default();
        assert!(f.name.is_empty() && f.email.is_empty() && f.company.is_empty());
        assert_eq!(f.ticket_type, TicketType::Standard);
    }

    #[test]
    fn name_and_email_are_enough() {
        let mut f = filled();
        f.company.clear();
        assert_eq!(f.validate(), Ok(()));
    }

    #[test]
    fn reports_which_field_is_missing() {
        let mut f = filled();
        f.name = "   ".into();
        assert_eq!(f.validate(), Err(RegistrationError::MissingName));

        let mut f = filled();
        f.email.clear();
        assert_eq!(f.validate(), Err(RegistrationError::MissingEmail));

        assert_eq!(
            FormState::default().validate(),
            Err(RegistrationError::MissingNameAndEmail)
        );
    }

    #[test]
    fn set_targets_one_field() {
        let mut f = FormState::default();
        f.set(Field::Company, "Acme".into());
        assert_eq!(f.company, "Acme");
        assert!(f.name.is_empty() && f.email.is_empty());
    }

    #[test]
    fn ticket_keys_parse_back() {
        for t in TicketType::all() {
            assert_eq!(TicketType::from_key(t.key()), Some(t));
        }
        assert_eq!(TicketType::from_key("platinum"), None);
    }

    #[test]
    fn error_text_is_user_facing() {
        assert_eq!(
            RegistrationError::MissingName.to_string(),
            "Please enter your full name."
        );
    }
}
