//! Wire data model for the auth service and the posts service.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

// --- Identity ---

/// User record as returned by the auth service.
///
/// The client never edits it; it is stored with the session and displayed.
/// Members that are missing or `null` read as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub email: String,
    #[serde(deserialize_with = "string_or_number")]
    pub first_name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub last_name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub alias: String,
    #[serde(deserialize_with = "string_or_number")]
    pub birth_date: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Login form payload.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration payload.
///
/// Anything placed in `extra` is sent next to the named fields as-is. An
/// extra key that repeats a named field is dropped; the named field wins.
#[derive(Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub alias: String,
    pub birth_date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegisterData {
    fn named_fields(&self) -> [(&'static str, &String); 6] {
        [
            ("email", &self.email),
            ("password", &self.password),
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("alias", &self.alias),
            ("birthDate", &self.birth_date),
        ]
    }
}

impl Serialize for RegisterData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let named = self.named_fields();
        let extra: Vec<_> = self
            .extra
            .iter()
            .filter(|(key, _)| !named.iter().any(|(name, _)| name == key))
            .collect();

        let mut map = serializer.serialize_map(Some(named.len() + extra.len()))?;
        for (name, value) in named {
            map.serialize_entry(name, value)?;
        }
        for (key, value) in extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl std::fmt::Debug for RegisterData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterData")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("alias", &self.alias)
            .field("birth_date", &self.birth_date)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Body of a successful `POST /login`, kept exactly as the auth service
/// sent it.
///
/// Nothing is checked on decode. `token()` and `user()` pick the expected
/// members out of the raw value when they are usable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct LoginResponse {
    raw: Value,
}

impl LoginResponse {
    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    pub fn into_value(self) -> Value {
        self.raw
    }

    /// `token` as text; numeric tokens are rendered in decimal.
    pub fn token(&self) -> Option<String> {
        match self.raw.get("token")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// `user` when it is an object that reads as a [`User`].
    pub fn user(&self) -> Option<User> {
        match self.raw.get("user")? {
            user @ Value::Object(_) => User::deserialize(user).ok(),
            _ => None,
        }
    }

    /// The token/user pair, if the service sent both and the token is not
    /// empty.
    pub fn into_auth(self) -> Option<(String, User)> {
        let token = self.token().filter(|t| !t.is_empty())?;
        Some((token, self.user()?))
    }
}

impl From<Value> for LoginResponse {
    fn from(raw: Value) -> Self {
        Self { raw }
    }
}

// --- Posts ---

/// A post as served by the posts service.
///
/// `likes` is a decimal count carried as a string; numbers are accepted too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub message: String,
    pub created_at: String,
    pub alias: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub likes: String,
}

/// New post payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PostFormData {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub post_id: String,
}

/// Body of a successful `POST /like`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LikeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub likes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<TextOrNumber> for String {
    fn from(raw: TextOrNumber) -> Self {
        match raw {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(opt_string_or_number(deserializer)?.unwrap_or_default())
}

fn opt_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_data_keeps_extra_fields() {
        let mut data = RegisterData {
            email: "newuser@example.com".into(),
            password: "password123".into(),
            first_name: "New".into(),
            last_name: "User".into(),
            alias: "newuser".into(),
            birth_date: "1995-05-15".into(),
            extra: Map::new(),
        };
        data.extra
            .insert("extraField".into(), json!("should be ignored by server"));

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            json!({
                "email": "newuser@example.com",
                "password": "password123",
                "firstName": "New",
                "lastName": "User",
                "alias": "newuser",
                "birthDate": "1995-05-15",
                "extraField": "should be ignored by server",
            })
        );
    }

    #[test]
    fn register_data_named_fields_win_over_extra() {
        let mut data = RegisterData {
            email: "real@example.com".into(),
            alias: "real".into(),
            ..Default::default()
        };
        data.extra.insert("email".into(), json!("spoofed@example.com"));
        data.extra.insert("referral".into(), json!("friend"));

        let text = serde_json::to_string(&data).unwrap();
        assert_eq!(text.matches("\"email\"").count(), 1);

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["email"], json!("real@example.com"));
        assert_eq!(value["referral"], json!("friend"));
    }

    #[test]
    fn login_response_without_user_still_parses() {
        let res: LoginResponse = serde_json::from_value(json!({ "token": "fake-token" })).unwrap();
        assert_eq!(res.token().as_deref(), Some("fake-token"));
        assert!(res.user().is_none());
        assert!(res.clone().into_auth().is_none());
        assert_eq!(serde_json::to_value(&res).unwrap(), json!({ "token": "fake-token" }));
    }

    #[test]
    fn login_response_keeps_unknown_members() {
        let body = json!({
            "token": "t",
            "user": {
                "id": "1",
                "email": "test@example.com",
                "first_name": "Test",
                "last_name": "User",
                "alias": "testuser",
                "birth_date": "1990-01-01"
            },
            "expiresIn": 3600
        });
        let res: LoginResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(res.as_value()["expiresIn"], json!(3600));
        assert_eq!(serde_json::to_value(&res).unwrap(), body);

        let (token, user) = res.into_auth().unwrap();
        assert_eq!(token, "t");
        assert_eq!(user.full_name(), "Test User");
    }

    #[test]
    fn login_response_reads_odd_shapes_leniently() {
        let res = LoginResponse::from(json!({ "token": 12345, "user": null }));
        assert_eq!(res.token().as_deref(), Some("12345"));
        assert!(res.user().is_none());

        let res = LoginResponse::from(json!({
            "token": "t",
            "user": { "id": 9, "first_name": null, "last_name": "Solo" }
        }));
        let user = res.user().unwrap();
        assert_eq!(user.id, "9");
        assert_eq!(user.first_name, "");
        assert_eq!(user.full_name(), "Solo");

        let res = LoginResponse::from(json!({ "token": "", "user": {} }));
        assert!(res.into_auth().is_none());

        let res = LoginResponse::from(json!(["not", "an", "object"]));
        assert!(res.token().is_none());
        assert!(res.into_auth().is_none());
    }

    #[test]
    fn post_accepts_numeric_likes_and_ids() {
        let post: Post = serde_json::from_value(json!({
            "id": 7,
            "message": "hola",
            "created_at": "2024-01-01T00:00:00Z",
            "alias": "a",
            "first_name": "F",
            "last_name": "L",
            "likes": 3
        }))
        .unwrap();
        assert_eq!(post.id, "7");
        assert_eq!(post.likes, "3");
    }

    #[test]
    fn post_tolerates_missing_members() {
        let post: Post = serde_json::from_value(json!({ "id": "new-post", "message": "Test" })).unwrap();
        assert_eq!(post.message, "Test");
        assert_eq!(post.likes, "");
    }

    #[test]
    fn like_request_uses_camel_case() {
        let req = LikeRequest { post_id: "post-123".into() };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "postId": "post-123" }));
    }

    #[test]
    fn like_response_reads_numeric_count() {
        let res: LikeResponse = serde_json::from_value(json!({ "success": true, "likes": 5 })).unwrap();
        assert_eq!(res.success, Some(true));
        assert_eq!(res.likes.as_deref(), Some("5"));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials {
            email: "a@b.c".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{creds:?}").contains("hunter2"));
    }
}
