use strum::{Display, EnumString};

/// Staff roles. Stored lowercase in the `users.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Frontdesk,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_parses_from_stored_form() {
        assert_eq!(Role::from_str("frontdesk").unwrap(), Role::Frontdesk);
        assert_eq!(Role::Manager.to_string(), "manager");
        assert!(Role::from_str("housekeeping").is_err());
    }
}
