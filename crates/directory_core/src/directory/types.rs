use serde::{Deserialize, Serialize};

/// Postal address of a user as delivered by the directory endpoint.
#[non_exhaustive]
#[derive(Serialize, Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

impl Address {
    #[must_use]
    #[inline]
    pub const fn new(street: String, suite: String, city: String, zipcode: String) -> Self {
        Self {
            street,
            suite,
            city,
            zipcode,
        }
    }
}

/// A single user record. Fields the endpoint sends in addition to these (email, phone, company,
/// ...) are ignored while decoding.
#[non_exhaustive]
#[derive(Serialize, Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub address: Address,
}

impl User {
    #[must_use]
    #[inline]
    pub const fn new(id: i64, name: String, address: Address) -> Self {
        Self { id, name, address }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "Tests are predefined and guaranteed to be Some/Ok"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_endpoint_record_and_ignores_extra_fields() {
        let body = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442"
        }"#;

        let user: User = serde_json::from_str(body).unwrap();

        let expected = User::new(
            1,
            String::from("Leanne Graham"),
            Address::new(
                String::from("Kulas Light"),
                String::from("Apt. 556"),
                String::from("Gwenborough"),
                String::from("92998-3874"),
            ),
        );
        assert_eq!(user, expected);
    }

    #[test]
    fn rejects_record_without_address() {
        let body = r#"{ "id": 2, "name": "Ervin Howell" }"#;
        assert!(serde_json::from_str::<User>(body).is_err());
    }
}
