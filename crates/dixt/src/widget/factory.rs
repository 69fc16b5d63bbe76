//! Button factory: compose a style, then build the button.

use std::sync::Arc;

use dixt_core::Scheduler;
use dixt_style::resolve::{StyleRequest, compose};
use dixt_style::style::ResolvedStyle;
use dixt_style::templates::TemplateStore;

use super::custom_button::{ButtonOptions, CustomButton};

/// Creates buttons from style requests against one template store.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use dixt::prelude::*;
///
/// let store = TemplateStore::builtin()?;
/// let factory = ButtonFactory::new(&store);
///
/// let button = factory.create(
///     &StyleRequest::new("Delete").with_preset("danger"),
///     ButtonOptions::new().with_tooltip("Remove permanently"),
///     Arc::new(SharedTimerManager::new()),
/// );
/// assert_eq!(button.text(), "Delete");
/// # Ok::<(), dixt::style::TemplateLoadError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ButtonFactory<'a> {
    store: &'a TemplateStore,
}

impl<'a> ButtonFactory<'a> {
    pub fn new(store: &'a TemplateStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a TemplateStore {
        self.store
    }

    /// Resolve `request` without building a button.
    pub fn resolve(&self, request: &StyleRequest) -> ResolvedStyle {
        compose(self.store, request)
    }

    /// Compose the style for `request` and build a button from it.
    #[tracing::instrument(
        target = "dixt::button",
        level = "trace",
        skip_all,
        fields(text = %request.text, size = %request.size, shape = %request.shape)
    )]
    pub fn create(
        &self,
        request: &StyleRequest,
        options: ButtonOptions,
        scheduler: Arc<dyn Scheduler>,
    ) -> CustomButton {
        let style = self.resolve(request);
        CustomButton::new(style, options, self.store, scheduler)
    }
}
