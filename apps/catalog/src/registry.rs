use std::collections::HashSet;

use crate::domain::Category;
use crate::error::BindError;

/// Static association of one trigger to one endpoint and one card layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionBinding {
    pub trigger_id: &'static str,
    pub endpoint: &'static str,
    pub category: Category,
}

impl ActionBinding {
    pub const fn for_category(category: Category) -> Self {
        Self {
            trigger_id: category.trigger_id(),
            endpoint: category.endpoint(),
            category,
        }
    }
}

/// A page (or page stand-in) that can attach click handlers to trigger ids.
pub trait TriggerSurface {
    fn listen(&mut self, trigger_id: &str, handler: Box<dyn FnMut()>) -> Result<(), BindError>;
}

#[derive(Debug)]
pub struct ActionRegistry {
    bindings: Vec<ActionBinding>,
    bound: HashSet<&'static str>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ActionRegistry {
    /// One binding per category, in page order.
    pub fn standard() -> Self {
        Self {
            bindings: Category::ALL
                .iter()
                .copied()
                .map(ActionBinding::for_category)
                .collect(),
            bound: HashSet::new(),
        }
    }

    pub fn bindings(&self) -> &[ActionBinding] {
        &self.bindings
    }

    pub fn by_trigger(&self, trigger_id: &str) -> Option<ActionBinding> {
        self.bindings
            .iter()
            .find(|binding| binding.trigger_id == trigger_id)
            .copied()
    }

    pub fn by_category(&self, category: Category) -> Option<ActionBinding> {
        self.bindings
            .iter()
            .find(|binding| binding.category == category)
            .copied()
    }

    pub fn is_bound(&self, trigger_id: &str) -> bool {
        self.bound.contains(trigger_id)
    }

    /// Attach one click handler per trigger. Triggers that already have a
    /// listener are skipped, so calling this twice never doubles a handler.
    ///
    /// Returns how many triggers were newly bound. Stops at the first trigger
    /// the surface cannot find; triggers bound before it stay bound.
    pub fn bind_all<T, F>(&mut self, surface: &mut T, on_trigger: F) -> Result<usize, BindError>
    where
        T: TriggerSurface + ?Sized,
        F: Fn(ActionBinding) + Clone + 'static,
    {
        let mut newly_bound = 0;
        for binding in &self.bindings {
            if self.bound.contains(binding.trigger_id) {
                continue;
            }

            let handler = on_trigger.clone();
            let binding = *binding;
            surface.listen(binding.trigger_id, Box::new(move || handler(binding)))?;
            self.bound.insert(binding.trigger_id);
            newly_bound += 1;
            tracing::debug!(trigger = binding.trigger_id, "bound catalog trigger");
        }
        Ok(newly_bound)
    }
}
