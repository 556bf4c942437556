//! Talent profile update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TalentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Option<u64>>,
}

impl TalentUpdate {
    /// True when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.skills.is_none() && self.hourly_rate.is_none()
    }
}

pub struct TalentUpdateBuilder(TalentUpdate);

impl TalentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TalentUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn skills(mut self, skills: Vec<String>) -> Self {
        self.0.skills = Some(skills);
        self
    }

    /// `None` clears the rate.
    #[must_use]
    pub fn hourly_rate(mut self, hourly_rate: Option<u64>) -> Self {
        self.0.hourly_rate = Some(hourly_rate);
        self
    }

    #[must_use]
    pub fn build(self) -> TalentUpdate {
        self.0
    }
}

impl Default for TalentUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_changed_fields_only() {
        let update = TalentUpdateBuilder::new().hourly_rate(None).build();
        assert!(!update.is_empty());
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "hourly_rate": null }));
    }

    #[test]
    fn empty_builder_is_empty() {
        assert!(TalentUpdateBuilder::default().build().is_empty());
    }
}
