use serde::{Deserialize, Serialize};

pub type MemberId = u32;

/// A member of the team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    /// Single-character label used wherever the full name is too wide.
    pub avatar: char,
}

impl TeamMember {
    pub fn new(id: MemberId, name: impl Into<String>, role: impl Into<String>, avatar: char) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            avatar,
        }
    }

    /// First word of the name, for compact calendar cells.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_name_takes_leading_word() {
        let m = TeamMember::new(1, "Jan Jansen", "Developer", 'J');
        assert_eq!(m.first_name(), "Jan");
    }

    #[test]
    fn first_name_of_single_word_name() {
        let m = TeamMember::new(2, "Emma", "Designer", 'E');
        assert_eq!(m.first_name(), "Emma");
    }
}
