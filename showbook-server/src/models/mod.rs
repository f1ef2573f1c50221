//! Domain models with validation at construction
//!
//! Form submissions are validated into `*Input` types before the query
//! layer sees them. Invalid input returns `FormErrors`, not panic.

pub mod artist;
pub mod choices;
pub mod datetime;
pub mod form;
pub mod genres;
pub mod search;
pub mod show;
pub mod validation;
pub mod venue;

pub use artist::{ArtistForm, ArtistInput};
pub use choices::FormChoices;
pub use datetime::{format_datetime, DateFormat};
pub use form::FormFields;
pub use genres::Genres;
pub use search::{SearchTerm, ShowSearch};
pub use show::{ShowForm, ShowInput};
pub use validation::{FormErrors, ValidationError};
pub use venue::{VenueForm, VenueInput};
