//! Venue form and validated venue input

use serde::{Deserialize, Serialize};

use super::form::{self, FormFields, MAX_IMAGE_LINK_LEN, MAX_SHORT_LEN};
use super::{FormErrors, Genres};

/// Venue form as submitted, echoed back on validation failure and
/// pre-populated for editing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// Venue fields that passed validation, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Genres,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            address: fields.text("address"),
            phone: fields.text("phone"),
            image_link: fields.text("image_link"),
            genres: fields.all("genres"),
            facebook_link: fields.text("facebook_link"),
            website_link: fields.text("website_link"),
            seeking_talent: fields.flag("seeking_talent"),
            seeking_description: fields.text("seeking_description"),
        }
    }

    /// Check every field, collecting all failures rather than stopping at
    /// the first one.
    pub fn validate(&self) -> Result<VenueInput, FormErrors> {
        let mut errors = FormErrors::new();

        let name = errors.check(form::required("name", &self.name, None));
        let city = errors.check(form::required("city", &self.city, Some(MAX_SHORT_LEN)));
        let state = errors.check(form::state(&self.state));
        let address = errors.check(form::required("address", &self.address, Some(MAX_SHORT_LEN)));
        let phone = errors.check(form::optional_phone(&self.phone));
        let image_link = errors.check(form::optional_url(
            "image_link",
            &self.image_link,
            Some(MAX_IMAGE_LINK_LEN),
        ));
        let genres = errors.check(Genres::parse(&self.genres));
        let facebook_link = errors.check(form::optional_url(
            "facebook_link",
            &self.facebook_link,
            Some(MAX_SHORT_LEN),
        ));
        let website_link = errors.check(form::optional_url("website_link", &self.website_link, None));
        let seeking_description =
            errors.check(form::optional("seeking_description", &self.seeking_description, None));

        errors.into_result(|| VenueInput {
            name: name.unwrap_or_default(),
            city: city.unwrap_or_default(),
            state: state.unwrap_or_default(),
            address: address.unwrap_or_default(),
            phone: phone.flatten(),
            image_link: image_link.flatten(),
            genres: genres.unwrap_or_default(),
            facebook_link: facebook_link.flatten(),
            website_link: website_link.flatten(),
            seeking_talent: self.seeking_talent,
            seeking_description: seeking_description.flatten(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn musical_hop() -> VenueForm {
        VenueForm {
            name: "The Musical Hop".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "1015 Folsom Street".into(),
            phone: "123-123-1234".into(),
            genres: vec!["Jazz".into(), "Reggae".into()],
            seeking_talent: true,
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_converts_blank_optionals_to_none() {
        let input = musical_hop().validate().unwrap();
        assert_eq!(input.name, "The Musical Hop");
        assert_eq!(input.phone.as_deref(), Some("123-123-1234"));
        assert_eq!(input.image_link, None);
        assert_eq!(input.website_link, None);
        assert_eq!(input.genres.as_slice(), ["Jazz", "Reggae"]);
        assert!(input.seeking_talent);
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let form = VenueForm::default();
        let errors = form.validate().unwrap_err();
        for field in ["name", "city", "state", "address"] {
            assert!(errors.has(field), "expected error for {field}");
        }
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn bad_link_is_reported_against_its_field() {
        let form = VenueForm {
            facebook_link: "not a link".into(),
            ..musical_hop()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has("facebook_link"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn reads_checkbox_and_multiselect_from_fields() {
        let fields = FormFields::new(vec![
            ("name".into(), "Hop".into()),
            ("genres".into(), "Jazz".into()),
            ("genres".into(), "Folk".into()),
            ("seeking_talent".into(), "y".into()),
        ]);
        let form = VenueForm::from_fields(&fields);
        assert_eq!(form.genres, vec!["Jazz", "Folk"]);
        assert!(form.seeking_talent);
        assert_eq!(form.city, "");
    }
}
