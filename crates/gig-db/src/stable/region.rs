use std::fmt;

use gig_core::enums::EntityType;

/// Storage region owned by exactly one record store.
///
/// Region ids are persisted. Never renumber an existing region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemoryRegion(u8);

impl MemoryRegion {
    pub const TALENTS: Self = Self(0);
    pub const JOBS: Self = Self(1);
    pub const CLIENTS: Self = Self(2);
    pub const FEEDBACK: Self = Self(3);

    /// Region holding records of the given entity type.
    ///
    /// Uses exhaustive match, so a new `EntityType` variant forces a region here.
    #[must_use]
    pub const fn for_entity(entity: EntityType) -> Self {
        match entity {
            EntityType::Talent => Self::TALENTS,
            EntityType::Job => Self::JOBS,
            EntityType::Client => Self::CLIENTS,
            EntityType::Feedback => Self::FEEDBACK,
        }
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "talents",
            1 => "jobs",
            2 => "clients",
            3 => "feedback",
            _ => "unknown",
        }
    }
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_entity_has_a_distinct_region() {
        let regions: HashSet<_> = EntityType::ALL
            .iter()
            .map(|e| MemoryRegion::for_entity(*e).id())
            .collect();
        assert_eq!(regions.len(), EntityType::ALL.len());
    }

    #[test]
    fn region_ids_are_stable() {
        assert_eq!(MemoryRegion::for_entity(EntityType::Talent).id(), 0);
        assert_eq!(MemoryRegion::for_entity(EntityType::Job).id(), 1);
        assert_eq!(MemoryRegion::for_entity(EntityType::Client).id(), 2);
        assert_eq!(MemoryRegion::for_entity(EntityType::Feedback).id(), 3);
        assert_eq!(MemoryRegion::JOBS.to_string(), "jobs(1)");
    }
}
