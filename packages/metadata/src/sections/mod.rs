//! Section enumeration.
//!
//! Provisions are described declaratively by a [`ProvisionVocabulary`]; the
//! [`SectionEnumerator`] walks it in order and builds one record per match,
//! inferring a title from the provision text when there is no heading.

mod config;
mod engine;
mod inference;
mod registry;
mod types;

pub use config::{create_clml_vocabulary, SCHEDULE_TAG};
pub use engine::SectionEnumerator;
pub use inference::{infer_title, InferenceContext, TitleRule, TITLE_RULES};
pub use registry::ProvisionVocabulary;
pub use types::{EnumerationMode, ProvisionSpec};
