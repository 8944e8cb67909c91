//! AI Responses Display UI Module (MVVM Standard)
//!
//! Structure:
//! - selection.rs: single-select collapsible selection controllers
//! - view_model.rs: ResponsesDisplayVm with RwSignals
//! - view.rs: Main component AIResponsesDisplay
//! - accordion_item.rs: One trigger/content pair
//! - comparison.rs: Side-by-side columns
//! - copy_button.rs: Clipboard button shared by both layouts

mod accordion_item;
mod comparison;
mod copy_button;
pub mod selection;
mod view;
mod view_model;

pub use accordion_item::AccordionItem;
pub use comparison::ComparisonView;
pub use copy_button::CopyButton;
pub use selection::{
    next_selection, LocalSelection, SelectionController, SharedSelection, SignalSelection,
};
pub use view::AIResponsesDisplay;
pub use view_model::ResponsesDisplayVm;
