pub mod error;
pub mod schema;
pub mod traits;
pub mod types;

pub use error::DeckError;
pub use traits::{GenerationRequest, GenerationResponse, ResponseFormat, StructuredProvider};
pub use types::{PresentationRecord, SectionRecord, SlideRecord, StructureRecord};
