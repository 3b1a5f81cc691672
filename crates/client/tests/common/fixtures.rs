//! Test fixtures for petstore conformance testing.
//!
//! Provides builder-style pet fixtures with random or fixed identity.

use rand::Rng;

use petstore_client::{Pet, PetStatus};

/// Lower bound (inclusive) for randomly generated pet ids.
const ID_RANGE_START: i64 = 100_000;
/// Upper bound (exclusive) for randomly generated pet ids.
const ID_RANGE_END: i64 = 1_000_000;

/// Generates a random pet id in the fixture range.
pub fn random_id() -> i64 {
    rand::thread_rng().gen_range(ID_RANGE_START..ID_RANGE_END)
}

/// Generates a random lowercase ASCII name of the given length.
pub fn random_name(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

/// A pet fixture.
#[derive(Debug, Clone)]
pub struct PetFixture {
    pub id: i64,
    pub name: String,
    pub photo_urls: Vec<String>,
    pub status: PetStatus,
}

impl PetFixture {
    /// Creates a fixture with the given id and name, no photos, `available`.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            photo_urls: vec![],
            status: PetStatus::Available,
        }
    }

    /// Creates a fixture with random id and name, one photo, `available`.
    pub fn random() -> Self {
        Self {
            id: random_id(),
            name: random_name(8),
            photo_urls: vec!["https://example.com/photo.png".to_string()],
            status: PetStatus::Available,
        }
    }

    /// Creates a fixture with a random id and a name of `length` repeated 'x's.
    pub fn with_long_name(length: usize) -> Self {
        Self {
            id: random_id(),
            name: "x".repeat(length),
            photo_urls: vec![],
            status: PetStatus::Available,
        }
    }

    /// Sets the status.
    pub fn with_status(mut self, status: PetStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the photo URLs.
    pub fn with_photo_urls(mut self, urls: Vec<&str>) -> Self {
        self.photo_urls = urls.into_iter().map(String::from).collect();
        self
    }

    /// Builds the pet record.
    pub fn build(&self) -> Pet {
        Pet {
            id: self.id,
            name: self.name.clone(),
            photo_urls: self.photo_urls.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_builds_expected_record() {
        let pet = PetFixture::new(123_456, "test-pet")
            .with_status(PetStatus::Pending)
            .with_photo_urls(vec!["https://example.com/a.png"])
            .build();

        assert_eq!(pet.id, 123_456);
        assert_eq!(pet.name, "test-pet");
        assert_eq!(pet.photo_urls, vec!["https://example.com/a.png"]);
        assert_eq!(pet.status, PetStatus::Pending);
    }

    #[test]
    fn test_random_id_stays_in_range() {
        for _ in 0..100 {
            let id = random_id();
            assert!((ID_RANGE_START..ID_RANGE_END).contains(&id));
        }
    }

    #[test]
    fn test_random_name_is_lowercase_ascii() {
        let name = random_name(8);
        assert_eq!(name.len(), 8);
        assert!(name.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_long_name_fixture() {
        let pet = PetFixture::with_long_name(300).build();
        assert_eq!(pet.name.len(), 300);
    }
}
