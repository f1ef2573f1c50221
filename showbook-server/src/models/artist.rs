//! Artist form and validated artist input

use serde::{Deserialize, Serialize};

use super::form::{self, FormFields, MAX_IMAGE_LINK_LEN, MAX_SHORT_LEN};
use super::{FormErrors, Genres};

/// Artist form as submitted or pre-populated for editing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

/// Artist fields that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Genres,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            phone: fields.text("phone"),
            genres: fields.all("genres"),
            image_link: fields.text("image_link"),
            facebook_link: fields.text("facebook_link"),
            website_link: fields.text("website_link"),
            seeking_venue: fields.flag("seeking_venue"),
            seeking_description: fields.text("seeking_description"),
        }
    }

    pub fn validate(&self) -> Result<ArtistInput, FormErrors> {
        let mut errors = FormErrors::new();

        let name = errors.check(form::required("name", &self.name, None));
        let city = errors.check(form::required("city", &self.city, Some(MAX_SHORT_LEN)));
        let state = errors.check(form::state(&self.state));
        let phone = errors.check(form::optional_phone(&self.phone));
        let genres = errors.check(Genres::parse(&self.genres));
        let image_link = errors.check(form::optional_url(
            "image_link",
            &self.image_link,
            Some(MAX_IMAGE_LINK_LEN),
        ));
        let facebook_link = errors.check(form::optional_url(
            "facebook_link",
            &self.facebook_link,
            Some(MAX_SHORT_LEN),
        ));
        let website_link = errors.check(form::optional_url("website_link", &self.website_link, None));
        let seeking_description =
            errors.check(form::optional("seeking_description", &self.seeking_description, None));

        errors.into_result(|| ArtistInput {
            name: name.unwrap_or_default(),
            city: city.unwrap_or_default(),
            state: state.unwrap_or_default(),
            phone: phone.flatten(),
            genres: genres.unwrap_or_default(),
            image_link: image_link.flatten(),
            facebook_link: facebook_link.flatten(),
            website_link: website_link.flatten(),
            seeking_venue: self.seeking_venue,
            seeking_description: seeking_description.flatten(),
        })
    }
}
