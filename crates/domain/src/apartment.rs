//! Apartment: a listing describing a rentable or sellable unit.

use serde::{Deserialize, Serialize};

use crate::id::ApartmentId;

/// A stored apartment listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    pub id: ApartmentId,
    pub title: String,
    pub address: String,
    pub image_link: String,
    pub description: String,
    pub square_meters: i32,
    pub bedrooms: i32,
    pub price: f64,
    pub favourite: bool,
}

impl Apartment {
    /// Attach a storage-assigned `id` to a draft.
    #[must_use]
    pub fn from_draft(id: ApartmentId, draft: ApartmentDraft) -> Self {
        Self {
            id,
            title: draft.title,
            address: draft.address,
            image_link: draft.image_link,
            description: draft.description,
            square_meters: draft.square_meters,
            bedrooms: draft.bedrooms,
            price: draft.price,
            favourite: draft.favourite,
        }
    }
}

/// Every attribute of an [`Apartment`] except its id.
///
/// Missing JSON fields take their zero value and an `id` field, if present,
/// is ignored. No field-level checks are applied: a negative price or zero
/// bedrooms are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApartmentDraft {
    pub title: String,
    pub address: String,
    pub image_link: String,
    pub description: String,
    pub square_meters: i32,
    pub bedrooms: i32,
    pub price: f64,
    pub favourite: bool,
}

impl ApartmentDraft {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    #[must_use]
    pub fn image_link(mut self, image_link: impl Into<String>) -> Self {
        self.image_link = image_link.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn square_meters(mut self, square_meters: i32) -> Self {
        self.square_meters = square_meters;
        self
    }

    #[must_use]
    pub fn bedrooms(mut self, bedrooms: i32) -> Self {
        self.bedrooms = bedrooms;
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn favourite(mut self, favourite: bool) -> Self {
        self.favourite = favourite;
        self
    }
}

/// A partial update: `None` keeps the stored value, `Some` overwrites it.
///
/// An omitted field and an explicit JSON `null` both mean "keep". Zero
/// values are real values, so `{"price": 0.0}` sets the price to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApartmentPatch {
    pub title: Option<String>,
    pub address: Option<String>,
    pub image_link: Option<String>,
    pub description: Option<String>,
    pub square_meters: Option<i32>,
    pub bedrooms: Option<i32>,
    pub price: Option<f64>,
    pub favourite: Option<bool>,
}

impl ApartmentPatch {
    /// `true` when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the fields of `apartment` that this patch carries.
    pub fn apply_to(&self, apartment: &mut Apartment) {
        if let Some(title) = &self.title {
            apartment.title.clone_from(title);
        }
        if let Some(address) = &self.address {
            apartment.address.clone_from(address);
        }
        if let Some(image_link) = &self.image_link {
            apartment.image_link.clone_from(image_link);
        }
        if let Some(description) = &self.description {
            apartment.description.clone_from(description);
        }
        if let Some(square_meters) = self.square_meters {
            apartment.square_meters = square_meters;
        }
        if let Some(bedrooms) = self.bedrooms {
            apartment.bedrooms = bedrooms;
        }
        if let Some(price) = self.price {
            apartment.price = price;
        }
        if let Some(favourite) = self.favourite {
            apartment.favourite = favourite;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Apartment {
        let draft = ApartmentDraft::default()
            .title("Loft")
            .address("1 Main St")
            .image_link("https://img.example/loft.png")
            .description("Bright")
            .square_meters(50)
            .bedrooms(2)
            .price(100.0)
            .favourite(true);
        Apartment::from_draft(ApartmentId::new(1), draft)
    }

    #[test]
    fn should_fill_missing_draft_fields_with_zero_values() {
        let draft: ApartmentDraft = serde_json::from_str(
            r#"{"title":"A","address":"B","square_meters":50,"bedrooms":2,"price":100.0}"#,
        )
        .unwrap();

        assert_eq!(draft.title, "A");
        assert_eq!(draft.image_link, "");
        assert_eq!(draft.description, "");
        assert!(!draft.favourite);
    }

    #[test]
    fn should_ignore_id_in_draft_payload() {
        let draft: ApartmentDraft = serde_json::from_str(r#"{"id":99,"title":"A"}"#).unwrap();
        assert_eq!(draft, ApartmentDraft::default().title("A"));
    }

    #[test]
    fn should_reject_draft_with_wrong_field_type() {
        let result: Result<ApartmentDraft, _> = serde_json::from_str(r#"{"bedrooms":"two"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_only_change_price_when_patch_carries_price() {
        let mut apartment = stored();
        let patch: ApartmentPatch = serde_json::from_str(r#"{"price":200.0}"#).unwrap();

        patch.apply_to(&mut apartment);

        let mut expected = stored();
        expected.price = 200.0;
        assert_eq!(apartment, expected);
    }

    #[test]
    fn should_set_favourite_false_when_explicitly_given() {
        let mut apartment = stored();
        let patch: ApartmentPatch = serde_json::from_str(r#"{"favourite":false}"#).unwrap();

        patch.apply_to(&mut apartment);

        assert!(!apartment.favourite);
        assert_eq!(apartment.title, "Loft");
    }

    #[test]
    fn should_allow_zero_values_in_patch() {
        let mut apartment = stored();
        let patch: ApartmentPatch =
            serde_json::from_str(r#"{"square_meters":0,"price":0.0,"description":""}"#).unwrap();

        patch.apply_to(&mut apartment);

        assert_eq!(apartment.square_meters, 0);
        assert!(apartment.price.abs() < f64::EPSILON);
        assert_eq!(apartment.description, "");
        assert_eq!(apartment.bedrooms, 2);
    }

    #[test]
    fn should_treat_null_as_absent() {
        let patch: ApartmentPatch = serde_json::from_str(r#"{"title":null}"#).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn should_serialize_with_snake_case_field_names() {
        let json = serde_json::to_value(stored()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["image_link"], "https://img.example/loft.png");
        assert_eq!(json["square_meters"], 50);
        assert_eq!(json["favourite"], true);
    }
}
