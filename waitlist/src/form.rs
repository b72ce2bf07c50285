//! Waitlist form fields and the record the visitor fills in.

use serde::{Deserialize, Serialize};

/// One input on the waitlist form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Visitor's full name (required)
    FullName,
    /// Contact email (required)
    Email,
    /// State or region (required)
    State,
    /// District within the state
    District,
    /// Farm size in acres
    FarmSize,
    /// Free-text list of primary crops
    Crops,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Email,
        Field::State,
        Field::District,
        Field::FarmSize,
        Field::Crops,
    ];

    /// Key used both as the HTML `name` attribute and the JSON payload key.
    pub fn key(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::State => "state",
            Field::District => "district",
            Field::FarmSize => "farmSize",
            Field::Crops => "crops",
        }
    }

    /// Label shown above the input. Required fields carry a trailing `*`.
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name *",
            Field::Email => "Email Address *",
            Field::State => "State/Region *",
            Field::District => "District",
            Field::FarmSize => "Farm Size (in acres)",
            Field::Crops => "Primary Crops",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Field::FullName | Field::Email | Field::State)
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::FarmSize => Some("e.g., 5.5"),
            Field::Crops => Some("e.g., Rice, Wheat, Cotton"),
            _ => None,
        }
    }

    /// HTML input type.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }
}

/// The waitlist record as typed, before any trimming or normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    pub full_name: String,
    pub email: String,
    pub state: String,
    pub district: String,
    pub farm_size: String,
    pub crops: String,
}

impl WaitlistForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::State => &self.state,
            Field::District => &self.district,
            Field::FarmSize => &self.farm_size,
            Field::Crops => &self.crops,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::State => &mut self.state,
            Field::District => &mut self.district,
            Field::FarmSize => &mut self.farm_size,
            Field::Crops => &mut self.crops,
        };
        *slot = value.into();
    }

    /// Reset every field, as after a successful submission.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when nothing has been typed into any field.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_round_through_every_field() {
        let mut form = WaitlistForm::default();
        for (i, field) in Field::ALL.iter().enumerate() {
            form.set(*field, format!("value-{i}"));
        }
        assert_eq!(form.get(Field::FullName), "value-0");
        assert_eq!(form.get(Field::Crops), "value-5");
        assert_eq!(form.farm_size, "value-4");
    }

    #[test]
    fn clear_resets_to_blank() {
        let mut form = WaitlistForm::default();
        assert!(form.is_blank());
        form.set(Field::District, "Guntur");
        assert!(!form.is_blank());
        form.clear();
        assert!(form.is_blank());
    }

    #[test]
    fn only_name_email_state_are_required() {
        let required: Vec<_> = Field::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(required, vec![Field::FullName, Field::Email, Field::State]);
        assert!(Field::State.label().ends_with(" *"));
        assert!(!Field::Crops.label().ends_with('*'));
    }

    #[test]
    fn keys_match_payload_names() {
        let keys: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            ["fullName", "email", "state", "district", "farmSize", "crops"]
        );
        assert_eq!(Field::Email.input_type(), "email");
        assert_eq!(Field::FarmSize.placeholder(), Some("e.g., 5.5"));
        assert_eq!(Field::FullName.placeholder(), None);
    }
}
