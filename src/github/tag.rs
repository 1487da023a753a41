use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    pub fn value(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_a_new_tag() {
        let tag = Tag::new("v1.0.0");

        assert_eq!(tag.value(), "v1.0.0");
        assert_eq!(tag.to_string(), "v1.0.0");
    }

    #[test]
    fn should_serialize_as_a_plain_string() {
        let json = serde_json::to_string(&Tag::new("v1.0.0")).unwrap();

        assert_eq!(json, "\"v1.0.0\"");
    }
}
