/// Resource resolver — delegates macro expansion to caller-owned quest
/// resources looked up by symbol.
use rustc_hash::FxHashMap;

use crate::core::matcher::MacroClass;

/// Capability interface implemented by each concrete quest resource kind
/// (people, places, items, and so on — owned by the quest system, not by
/// this crate).
pub trait QuestResource {
    /// Attempt to expand this resource for the given macro class.
    ///
    /// `None` means the resource has no expansion for that class; the
    /// engine leaves the word untouched. A normal outcome, not a failure.
    fn expand_macro(&self, class: MacroClass) -> Option<String>;
}

/// Symbol lookup owned by the caller's quest system.
pub trait ResourceRegistry {
    fn lookup(&self, symbol: &str) -> Option<&dyn QuestResource>;
}

/// Resolve a resource macro: look the symbol up, then ask the resource to
/// expand itself. Absent entries and declining resources both yield `None`.
pub fn resolve_resource(
    symbol: &str,
    class: MacroClass,
    registry: &dyn ResourceRegistry,
) -> Option<String> {
    registry.lookup(symbol)?.expand_macro(class)
}

/// A simple owned registry mapping symbol strings to boxed resources.
#[derive(Default)]
pub struct SymbolTable {
    resources: FxHashMap<String, Box<dyn QuestResource>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, resource: Box<dyn QuestResource>) {
        self.resources.insert(symbol.into(), resource);
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceRegistry for SymbolTable {
    fn lookup(&self, symbol: &str) -> Option<&dyn QuestResource> {
        self.resources.get(symbol).map(|r| r.as_ref())
    }
}

/// A resource with fixed expansions per macro class. Useful for tests and
/// for quest variants whose expansions are known up front.
#[derive(Debug, Clone, Default)]
pub struct StaticResource {
    expansions: FxHashMap<MacroClass, String>,
}

impl StaticResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, class: MacroClass, text: impl Into<String>) -> Self {
        self.expansions.insert(class, text.into());
        self
    }
}

impl QuestResource for StaticResource {
    fn expand_macro(&self, class: MacroClass) -> Option<String> {
        self.expansions.get(&class).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hit_expands() {
        let mut registry = SymbolTable::new();
        registry.insert(
            "helper",
            Box::new(StaticResource::new().with(MacroClass::Name2, "Brother Martin")),
        );

        let result = resolve_resource("helper", MacroClass::Name2, &registry);
        assert_eq!(result.as_deref(), Some("Brother Martin"));
    }

    #[test]
    fn missing_symbol_is_silent() {
        let registry = SymbolTable::new();
        assert!(resolve_resource("oddsymbol", MacroClass::Binding, &registry).is_none());
    }

    #[test]
    fn resource_may_decline_a_class() {
        let mut registry = SymbolTable::new();
        registry.insert(
            "helper",
            Box::new(StaticResource::new().with(MacroClass::Name2, "Brother Martin")),
        );

        // Registered, but with no expansion for Faction.
        assert!(resolve_resource("helper", MacroClass::Faction, &registry).is_none());
    }

    #[test]
    fn static_resource_per_class_expansions() {
        let resource = StaticResource::new()
            .with(MacroClass::Name1, "the Sunken Crypt")
            .with(MacroClass::Details, "a ruined crypt east of town");

        assert_eq!(
            resource.expand_macro(MacroClass::Name1).as_deref(),
            Some("the Sunken Crypt")
        );
        assert_eq!(
            resource.expand_macro(MacroClass::Details).as_deref(),
            Some("a ruined crypt east of town")
        );
        assert!(resource.expand_macro(MacroClass::Name4).is_none());
    }

    #[test]
    fn symbol_table_len() {
        let mut registry = SymbolTable::new();
        assert!(registry.is_empty());
        registry.insert("a", Box::new(StaticResource::new()));
        registry.insert("b", Box::new(StaticResource::new()));
        assert_eq!(registry.len(), 2);
    }
}
