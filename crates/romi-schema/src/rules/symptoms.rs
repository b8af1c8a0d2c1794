use romi_core::FieldPath;
use romi_core::models::draft::RawValue;
use romi_core::models::report::SymptomSet;

use crate::FieldRule;

pub const SYMPTOMS_REQUIRED: &str = "Selecciona al menos un síntoma o escribe otro";

/// Cross-field refinement over the whole symptom group: at least one
/// indicator ticked, or a non-blank description of another symptom. The
/// error belongs to the group, not to any single checkbox.
pub struct SymptomGroup;

impl SymptomGroup {
    pub fn is_satisfied(set: &SymptomSet) -> bool {
        set.flagged().next().is_some() || !set.other.trim().is_empty()
    }
}

impl FieldRule for SymptomGroup {
    fn field(&self) -> FieldPath {
        FieldPath::Symptoms
    }

    fn check(&self, value: RawValue<'_>) -> Result<(), &'static str> {
        match value {
            RawValue::Group(set) if Self::is_satisfied(set) => Ok(()),
            _ => Err(SYMPTOMS_REQUIRED),
        }
    }
}
