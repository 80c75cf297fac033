pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Attorney, AttorneyPatch, AttorneyProfile};
pub use repository::{AttorneyFilter, AttorneyRepository, StoredAttorney};
pub use services::AttorneySlugService;
pub use value_objects::{FirmEmail, PersonName};
