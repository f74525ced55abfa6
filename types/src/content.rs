pub mod parts;

use parts::Part;

/// One conversational turn attributed to a role.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Content {
    role: Role,
    parts: Vec<Part>,
}

impl Content {
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self { role, parts }
    }

    pub fn user(parts: Vec<Part>) -> Self {
        Self::new(Role::User, parts)
    }

    pub fn model(parts: Vec<Part>) -> Self {
        Self::new(Role::Model, parts)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "model")]
    Model,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_wire_shape() {
        let content = Content::user(vec![Part::text("hi")]);
        let json = serde_json::to_string(&content).unwrap();
        assert_eq!(json, r#"{"role":"user","parts":[{"text":"hi"}]}"#);

        let back: Content = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }
}
