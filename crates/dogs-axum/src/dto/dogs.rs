//! Request and response bodies for `/dogs`.

use dogs_core::{Dog, NewDog};
use serde::{Deserialize, Serialize};

/// Body of `POST /dogs`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDogRequest {
    pub name: String,
    pub age: i32,
    pub breed: String,
}

impl From<CreateDogRequest> for NewDog {
    fn from(req: CreateDogRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            breed: req.breed,
        }
    }
}

/// Response of a successful `POST /dogs`.
///
/// Only the identifier is returned; the caller already has the rest.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedDogResponse {
    pub id: i64,
}

impl From<&Dog> for CreatedDogResponse {
    fn from(dog: &Dog) -> Self {
        Self { id: dog.id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_string_age() {
        let result: Result<CreateDogRequest, _> =
            serde_json::from_str(r#"{"name":"Dingo","age":"three","breed":"Beagle"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_rejects_fractional_age() {
        let result: Result<CreateDogRequest, _> =
            serde_json::from_str(r#"{"name":"Dingo","age":3.5,"breed":"Beagle"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_only_carries_id() {
        let dog = Dog {
            id: 12,
            name: "Dingo".to_string(),
            age: 3,
            breed: "Beagle".to_string(),
        };
        let json = serde_json::to_value(CreatedDogResponse::from(&dog)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 12 }));
    }
}
