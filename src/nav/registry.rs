use crate::nav::section::{ALL_SECTIONS, SectionId};

/// Mounted element handle per section. A slot is `None` until the section
/// mounts and again after it unmounts.
#[derive(Clone, Debug)]
pub struct SectionRegistry<H> {
    slots: [Option<H>; SectionId::COUNT],
}

impl<H> Default for SectionRegistry<H> {
    fn default() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }
}

impl<H> SectionRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the handle for `id`, returning whatever was mounted there before.
    pub fn register(&mut self, id: SectionId, handle: H) -> Option<H> {
        self.slots[id.index()].replace(handle)
    }

    /// Clear the slot for `id`. Safe to call when nothing is mounted.
    pub fn unregister(&mut self, id: SectionId) -> Option<H> {
        self.slots[id.index()].take()
    }

    pub fn get(&self, id: SectionId) -> Option<&H> {
        self.slots[id.index()].as_ref()
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.slots[id.index()].is_some()
    }

    /// Mounted sections in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &H)> {
        ALL_SECTIONS
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(id, slot)| slot.as_ref().map(|h| (id, h)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) -> Vec<(SectionId, H)> {
        ALL_SECTIONS
            .into_iter()
            .filter_map(|id| self.unregister(id).map(|h| (id, h)))
            .collect()
    }
}

impl<H: PartialEq> SectionRegistry<H> {
    /// Resolve a handle back to the section it is mounted under.
    pub fn lookup(&self, handle: &H) -> Option<SectionId> {
        self.iter().find(|(_, h)| *h == handle).map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_overwrites_and_returns_previous() {
        let mut registry = SectionRegistry::new();
        assert_eq!(registry.register(SectionId::About, "a1"), None);
        assert_eq!(registry.register(SectionId::About, "a2"), Some("a1"));
        assert_eq!(registry.get(SectionId::About), Some(&"a2"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionId::Contact, 7);
        assert_eq!(registry.unregister(SectionId::Contact), Some(7));
        assert_eq!(registry.unregister(SectionId::Contact), None);
        assert_eq!(registry.unregister(SectionId::Projects), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_iter_is_in_display_order() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionId::Contact, 'c');
        registry.register(SectionId::About, 'a');
        registry.register(SectionId::Experience, 'e');
        let order: Vec<SectionId> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(
            order,
            vec![SectionId::About, SectionId::Experience, SectionId::Contact]
        );
    }

    #[test]
    fn test_lookup_resolves_handle() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionId::Projects, "projects-el".to_string());
        assert_eq!(
            registry.lookup(&"projects-el".to_string()),
            Some(SectionId::Projects)
        );
        assert_eq!(registry.lookup(&"nope".to_string()), None);
    }

    #[test]
    fn test_clear_returns_everything_mounted() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionId::About, 1);
        registry.register(SectionId::Experience, 3);
        let cleared = registry.clear();
        assert_eq!(cleared, vec![(SectionId::About, 1), (SectionId::Experience, 3)]);
        assert!(registry.is_empty());
    }
}
