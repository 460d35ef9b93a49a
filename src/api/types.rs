// REST API response types.
// Defines the post and user records and the entity kinds the service resolves.

use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Kind of entity served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Post,
    User,
}

impl EntityKind {
    /// Singular name used in log messages.
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Post => "post",
            EntityKind::User => "user",
        }
    }

    /// Resource route relative to the API base URL.
    pub fn route(&self) -> &'static str {
        match self {
            EntityKind::Post => "posts",
            EntityKind::User => "users",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record the service can fetch by id and cache.
pub trait Entity: DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Short description for the exit log line, e.g. `title: Hello`.
    fn describe(&self) -> String;
}

/// A post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl Entity for Post {
    const KIND: EntityKind = EntityKind::Post;

    fn describe(&self) -> String {
        format!("title: {}", self.title)
    }
}

/// The author of a post. Fields beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn describe(&self) -> String {
        format!("name: {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_uses_camel_case_user_id() {
        let json = r#"[{"id":1,"userId":7,"title":"Test title!","body":"Test body!"}]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user_id, 7);
        assert_eq!(posts[0].title, "Test title!");
    }

    #[test]
    fn test_user_ignores_extra_fields() {
        let json = r#"[{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442"
        }]"#;
        let users: Vec<User> = serde_json::from_str(json).unwrap();

        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(users[0].email, "Sincere@april.biz");
    }

    #[test]
    fn test_entity_kind_routes() {
        assert_eq!(EntityKind::Post.route(), "posts");
        assert_eq!(EntityKind::User.route(), "users");
        assert_eq!(EntityKind::User.to_string(), "user");
    }
}
